//! Rope-backed reference host.
//!
//! [`RopeBuffer`] is a complete in-memory [`TextHost`] built on
//! [`ropey::Rope`]: document text, the authoritative selection set, the
//! transient overlay layers and the accumulated user notifications. It is
//! what the crate's tests, examples and benches run against; real editors
//! adapt their own buffer behind [`TextHost`] instead.

use crate::host::{OverlayLayerId, TextHost};
use crate::region::Region;
use ropey::Rope;
use std::collections::BTreeMap;

/// An in-memory text buffer with selections, overlays and notifications.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
    selections: Vec<Region>,
    overlays: BTreeMap<OverlayLayerId, Vec<Region>>,
    notices: Vec<String>,
}

impl RopeBuffer {
    /// Create a buffer over `text` with a single caret at offset 0.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: vec![Region::caret(0)],
            overlays: BTreeMap::new(),
            notices: Vec::new(),
        }
    }

    /// Create a buffer over `text` with the given selection set.
    pub fn with_selections(text: &str, selections: Vec<Region>) -> Self {
        let mut buffer = Self::new(text);
        buffer.selections = selections;
        buffer
    }

    /// Total character count of the document.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total line count of the document.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The overlay regions currently shown for `layer` (empty if cleared).
    pub fn overlay(&self, layer: OverlayLayerId) -> &[Region] {
        self.overlays.get(&layer).map_or(&[], Vec::as_slice)
    }

    /// All user notifications emitted so far, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl TextHost for RopeBuffer {
    fn line_bounds(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let start = self.rope.line_to_char(line);
        let raw_end = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1)
        } else {
            self.rope.len_chars()
        };

        // Walk back over the line terminator so the end excludes it.
        let mut end = raw_end;
        while end > start {
            let ch = self.rope.char(end - 1);
            if ch == '\n' || ch == '\r' {
                end -= 1;
            } else {
                break;
            }
        }

        (start, end)
    }

    fn text(&self, start: usize, end: usize) -> String {
        let len = self.rope.len_chars();
        let start = start.min(len);
        let end = end.min(len).max(start);
        self.rope.slice(start..end).to_string()
    }

    fn selections(&self) -> Vec<Region> {
        self.selections.clone()
    }

    fn set_selections(&mut self, regions: Vec<Region>) {
        self.selections = regions;
    }

    fn show_overlay(&mut self, layer: OverlayLayerId, regions: &[Region]) {
        self.overlays.insert(layer, regions.to_vec());
    }

    fn clear_overlay(&mut self, layer: OverlayLayerId) {
        self.overlays.remove(&layer);
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
