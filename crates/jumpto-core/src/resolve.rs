//! Region resolution and mode application.
//!
//! [`plan`] pairs every current selection with its raw match and applies the
//! mode flags, producing an immutable [`JumpPlan`]. The plan is a pure value:
//! computing it never touches the host's selection state, so the interactive
//! preview can recompute it on every keystroke and commit (or discard) it
//! later.

use crate::host::TextHost;
use crate::region::Region;
use crate::specifier::Matcher;

/// Mode flags for a jump invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpOptions {
    /// Grow each selection from its original anchor instead of replacing it.
    pub extend: bool,
    /// Keep all original selections and add the new regions as extra carets.
    pub create_new: bool,
    /// Select the entire matched span instead of collapsing to its start.
    pub whole_match: bool,
}

impl JumpOptions {
    /// Flags for extending the current selections.
    pub fn extending() -> Self {
        Self {
            extend: true,
            ..Self::default()
        }
    }

    /// Flags for adding carets instead of moving the existing ones.
    pub fn adding_carets() -> Self {
        Self {
            create_new: true,
            ..Self::default()
        }
    }
}

/// The planned outcome of one jump recomputation.
///
/// Holds one `(input, output)` slot per original selection, in selection
/// order. `None` in the output position means no match was found for that
/// slot and the original region stands.
#[derive(Debug, Clone)]
pub struct JumpPlan {
    slots: Vec<(Region, Option<Region>)>,
    options: JumpOptions,
}

/// Compute the jump plan for the host's current selection set.
///
/// Runs the matcher once per selection, anchored on that selection's active
/// offset, then applies the mode flags per slot. The host is only read.
pub fn plan<H: TextHost + ?Sized>(host: &H, matcher: &Matcher, options: JumpOptions) -> JumpPlan {
    let slots = host
        .selections()
        .into_iter()
        .map(|region| {
            let resolved = matcher
                .find_from(host, region.active)
                .map(|matched| apply_modes(region, matched, options));
            (region, resolved)
        })
        .collect();

    JumpPlan { slots, options }
}

/// Derive one output region from a raw matched span.
///
/// Precedence: collapse first (unless `whole_match`), then extend from the
/// original anchor (if `extend`).
fn apply_modes(original: Region, matched: Region, options: JumpOptions) -> Region {
    if options.extend {
        let point = if options.whole_match {
            matched.active
        } else {
            matched.anchor
        };
        return Region::new(original.anchor, point);
    }

    if options.whole_match {
        matched
    } else {
        Region::caret(matched.anchor)
    }
}

impl JumpPlan {
    /// The per-selection `(input, output)` slots, in selection order.
    pub fn slots(&self) -> &[(Region, Option<Region>)] {
        &self.slots
    }

    /// The mode flags this plan was computed under.
    pub fn options(&self) -> JumpOptions {
        self.options
    }

    /// Number of selections that found a match.
    pub fn match_count(&self) -> usize {
        self.slots.iter().filter(|(_, new)| new.is_some()).count()
    }

    /// Returns `true` if no selection found a match.
    pub fn is_noop(&self) -> bool {
        self.match_count() == 0
    }

    /// The final selection set to install.
    ///
    /// Without `create_new`, each original is replaced in place by its
    /// result (or kept on no-match): order and cardinality are preserved.
    /// With `create_new`, the originals are retained in full and every new
    /// region is appended; duplicate regions are permitted, de-duplication
    /// is the host's concern.
    pub fn selections(&self) -> Vec<Region> {
        if self.options.create_new {
            let mut out: Vec<Region> = self.slots.iter().map(|(original, _)| *original).collect();
            out.extend(self.slots.iter().filter_map(|(_, new)| *new));
            out
        } else {
            self.slots
                .iter()
                .map(|(original, new)| new.unwrap_or(*original))
                .collect()
        }
    }

    /// The regions the interactive preview should highlight.
    ///
    /// This is exactly the planned selection set: the preview shows what a
    /// commit would install.
    pub fn overlay_regions(&self) -> Vec<Region> {
        self.selections()
    }
}
