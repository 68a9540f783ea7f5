//! Host editor collaborators.
//!
//! The engine is headless: it reads text and selections from the host,
//! plans a new selection set, and hands the result back. Everything the
//! host must provide is collected in the [`TextHost`] trait; the crate's
//! own [`RopeBuffer`](crate::buffer::RopeBuffer) is the reference
//! implementation used by tests and benches.
//!
//! All offsets are in Unicode scalar values (`char`) from the start of the
//! document.

use crate::region::Region;

/// A source/layer identifier for transient highlight overlays.
///
/// Overlays are derived UI state: they annotate ranges without modifying the
/// document or the authoritative selection, and the host may drop them at
/// any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayLayerId(pub u32);

impl OverlayLayerId {
    /// The layer used for live jump previews while the input panel is open.
    pub const JUMP_PREVIEW: Self = Self(1);

    /// Create a new layer id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// The operations the jump engine requires from a host editor.
///
/// Hosts adapt their own buffer/selection machinery behind this trait; the
/// engine never mutates anything except through [`set_selections`]
/// (at commit) and the overlay/notification side channels.
///
/// [`set_selections`]: TextHost::set_selections
pub trait TextHost {
    /// Start and end offsets of the line containing `offset`.
    ///
    /// The end excludes the line terminator, so `(start, end)` spans exactly
    /// the line's content.
    fn line_bounds(&self, offset: usize) -> (usize, usize);

    /// The text in `[start, end)`.
    fn text(&self, start: usize, end: usize) -> String;

    /// The current selection set, in creation order.
    fn selections(&self) -> Vec<Region>;

    /// Atomically replace the selection set.
    fn set_selections(&mut self, regions: Vec<Region>);

    /// Show (or replace) a transient highlight overlay for `layer`.
    fn show_overlay(&mut self, layer: OverlayLayerId, regions: &[Region]);

    /// Remove the transient highlight overlay for `layer`, if any.
    fn clear_overlay(&mut self, layer: OverlayLayerId);

    /// Display a non-blocking, non-modal status message to the user.
    fn notify(&mut self, message: &str);
}
