//! The interactive jump session.
//!
//! Drives the live-preview state machine around the core:
//!
//! ```text
//! Idle ──update──▶ Previewing ──confirm──▶ Committed
//!                      │
//!                      └──────cancel─────▶ Cancelled
//! ```
//!
//! While previewing, every keystroke recomputes the plan from scratch and
//! redraws the [`JUMP_PREVIEW`](OverlayLayerId::JUMP_PREVIEW) overlay; the
//! authoritative selection is only touched at the commit transition, so a
//! cancel is always a true no-op on it. The host owns the input panel and
//! wires its change/confirm/cancel callbacks to the methods here.

use crate::command::{JumpOutcome, jump_to};
use crate::host::{OverlayLayerId, TextHost};
use crate::resolve::{self, JumpOptions};
use crate::specifier::Matcher;

/// Lifecycle of an interactive jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created; no input received yet.
    Idle,
    /// The input panel is open and a preview overlay may be showing.
    Previewing,
    /// The user confirmed; the plan was committed to the real selection.
    Committed,
    /// The user aborted; the real selection was never touched.
    Cancelled,
}

/// One interactive jump invocation: open prompt, live preview, commit or
/// cancel.
#[derive(Debug, Clone)]
pub struct JumpSession {
    options: JumpOptions,
    state: SessionState,
}

impl JumpSession {
    /// Start a session with the given mode flags.
    pub fn new(options: JumpOptions) -> Self {
        Self {
            options,
            state: SessionState::Idle,
        }
    }

    /// The mode flags this session runs under.
    pub fn options(&self) -> JumpOptions {
        self.options
    }

    /// The current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The caption for the host's input panel, worded per mode.
    pub fn prompt_label(&self) -> String {
        let verb = if self.options.extend {
            "Expand selection to"
        } else if self.options.create_new {
            "Create caret at"
        } else {
            "Jump to"
        };
        format!("{verb} (chars or [chars] or {{count}} or /regex/):")
    }

    /// Recompute the preview for the panel's current text.
    ///
    /// Called on every edit to the prompt. Redraws the preview overlay and
    /// never mutates the authoritative selection. An unparseable regex
    /// notifies the user once and clears the overlay for this recomputation.
    /// Ignored after the session reached a terminal state.
    pub fn update<H: TextHost + ?Sized>(&mut self, host: &mut H, input: &str) {
        if matches!(self.state, SessionState::Committed | SessionState::Cancelled) {
            return;
        }
        self.state = SessionState::Previewing;

        match Matcher::parse(input) {
            Ok(matcher) => {
                let plan = resolve::plan(host, &matcher, self.options);
                host.show_overlay(OverlayLayerId::JUMP_PREVIEW, &plan.overlay_regions());
            }
            Err(err) => {
                host.clear_overlay(OverlayLayerId::JUMP_PREVIEW);
                host.notify(&format!("jump-to: {err}"));
            }
        }
    }

    /// Commit `input` and close the session.
    ///
    /// Clears the overlay and applies the direct command against the host's
    /// *current* selections — the cursor may have moved while the panel was
    /// open, so the plan is recomputed rather than replayed.
    pub fn confirm<H: TextHost + ?Sized>(&mut self, host: &mut H, input: &str) -> JumpOutcome {
        host.clear_overlay(OverlayLayerId::JUMP_PREVIEW);
        self.state = SessionState::Committed;
        jump_to(host, input, self.options)
    }

    /// Abort the session: clear the overlay, leave the selection untouched.
    pub fn cancel<H: TextHost + ?Sized>(&mut self, host: &mut H) {
        host.clear_overlay(OverlayLayerId::JUMP_PREVIEW);
        self.state = SessionState::Cancelled;
    }
}
