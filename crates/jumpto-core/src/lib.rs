#![warn(missing_docs)]
//! jumpto-core - Headless Jump-To-Target Engine
//!
//! # Overview
//!
//! `jumpto-core` implements the region logic behind a "jump to the next
//! occurrence in this line" editor command, for any number of cursors. It is
//! headless: the host editor supplies text access, the selection set and the
//! UI side channels (highlight overlay, status messages, input panel), and
//! the engine computes the new selection set.
//!
//! # Core Features
//!
//! - **Target specifiers**: plain literal, `[chars]` bracketed literal,
//!   `/regex/` pattern, `{count}` signed character offset
//! - **Per-cursor, single-line matching**: each selection searches the
//!   remainder of its own line; matches never cross a newline
//! - **Mode flags**: extend the selection, select the whole match, or add
//!   new carets while keeping the existing ones
//! - **Live preview**: an interactive session recomputes a transient
//!   overlay on every keystroke and only touches the real selection on
//!   confirm
//!
//! # Quick Start
//!
//! ## Direct command
//!
//! ```rust
//! use jumpto_core::{JumpOptions, JumpOutcome, Region, RopeBuffer, TextHost, jump_to};
//!
//! let mut buffer = RopeBuffer::new("foo bar baz");
//!
//! let outcome = jump_to(&mut buffer, "bar", JumpOptions::default());
//! assert_eq!(outcome, JumpOutcome::Applied { moved: 1 });
//! assert_eq!(buffer.selections(), vec![Region::caret(4)]);
//! ```
//!
//! ## Interactive session
//!
//! ```rust
//! use jumpto_core::{JumpOptions, JumpSession, OverlayLayerId, Region, RopeBuffer, TextHost};
//!
//! let mut buffer = RopeBuffer::new("foo bar baz");
//! let mut session = JumpSession::new(JumpOptions::default());
//!
//! // Each keystroke refreshes the preview overlay only.
//! session.update(&mut buffer, "b");
//! assert_eq!(buffer.overlay(OverlayLayerId::JUMP_PREVIEW), &[Region::caret(4)]);
//! assert_eq!(buffer.selections(), vec![Region::caret(0)]);
//!
//! // Confirm commits through the direct command.
//! session.confirm(&mut buffer, "baz");
//! assert_eq!(buffer.selections(), vec![Region::caret(8)]);
//! ```
//!
//! # Module Description
//!
//! - [`region`] - regions (anchor/active character offsets) and selection sets
//! - [`specifier`] - target specifier classification and parsing
//! - [`resolve`] - per-selection resolution and mode application
//! - [`host`] - the [`TextHost`] collaborator trait and overlay layers
//! - [`buffer`] - rope-backed reference host for tests and embedding
//! - [`command`] - the direct (non-interactive) entry point
//! - [`session`] - the interactive live-preview state machine
//!
//! # Offsets
//!
//! All offsets are Unicode scalar values (`char`) from the start of the
//! document, never bytes.

pub mod buffer;
pub mod command;
pub mod host;
mod matcher;
pub mod region;
pub mod resolve;
pub mod session;
pub mod specifier;

pub use buffer::RopeBuffer;
pub use command::{JumpOutcome, jump_to};
pub use host::{OverlayLayerId, TextHost};
pub use region::Region;
pub use resolve::{JumpOptions, JumpPlan, plan};
pub use session::{JumpSession, SessionState};
pub use specifier::{Matcher, SpecifierError};
