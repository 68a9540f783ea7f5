//! The direct jump command.
//!
//! [`jump_to`] is the non-interactive entry point: parse the specifier,
//! compute the plan once and commit it through the host. The interactive
//! session in [`session`](crate::session) funnels into this function on
//! confirm, so both entry points share one commit path.

use crate::host::TextHost;
use crate::resolve::{self, JumpOptions};
use crate::specifier::Matcher;

/// The committed result of one jump invocation.
///
/// There are no fatal conditions: every failure path degrades to leaving the
/// affected selections unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// At least one selection found a match and was updated.
    Applied {
        /// Number of selections that found a match.
        moved: usize,
    },
    /// Nothing matched (including the empty specifier); the selection set is
    /// observably unchanged.
    NoMatch,
    /// The specifier's regex failed to compile; the user was notified and
    /// the selections were left untouched.
    InvalidPattern,
}

/// Parse `specifier`, resolve it against the host's current selections and
/// commit the resulting selection set.
///
/// An unparseable regex is recovered locally: one [`TextHost::notify`] call,
/// no selection change, and [`JumpOutcome::InvalidPattern`] — the error is
/// never surfaced to the caller as a `Result`.
pub fn jump_to<H: TextHost + ?Sized>(
    host: &mut H,
    specifier: &str,
    options: JumpOptions,
) -> JumpOutcome {
    let matcher = match Matcher::parse(specifier) {
        Ok(matcher) => matcher,
        Err(err) => {
            host.notify(&format!("jump-to: {err}"));
            return JumpOutcome::InvalidPattern;
        }
    };

    let plan = resolve::plan(host, &matcher, options);
    let moved = plan.match_count();
    host.set_selections(plan.selections());

    if moved == 0 {
        JumpOutcome::NoMatch
    } else {
        JumpOutcome::Applied { moved }
    }
}
