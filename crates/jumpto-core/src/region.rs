//! Regions and selection sets.
//!
//! A [`Region`] is the unit of cursor state: an ordered pair of **character**
//! offsets into the host buffer. A selection set is an ordered `Vec<Region>`
//! in creation order; every operation in this crate preserves that order.

/// A selection or caret, expressed as a pair of character offsets.
///
/// `anchor` is the fixed end of the selection, `active` the moving end.
/// Searches are anchored on `active`. When `anchor == active` the region is
/// a caret (empty selection). `anchor > active` denotes a backward selection
/// and is fully supported; min/max queries normalize on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// The fixed end of the selection.
    pub anchor: usize,
    /// The moving end of the selection, on which searches are anchored.
    pub active: usize,
}

impl Region {
    /// Create a region from an anchor and an active offset.
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Create a caret (empty region) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            anchor: offset,
            active: offset,
        }
    }

    /// Returns `true` if this region is a caret.
    pub fn is_caret(&self) -> bool {
        self.anchor == self.active
    }

    /// The smaller of the two endpoints.
    pub fn min(&self) -> usize {
        self.anchor.min(self.active)
    }

    /// The larger of the two endpoints.
    pub fn max(&self) -> usize {
        self.anchor.max(self.active)
    }

    /// Length of the region in characters.
    pub fn len(&self) -> usize {
        self.max() - self.min()
    }

    /// Returns `true` if the region covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret() {
        let caret = Region::caret(5);
        assert!(caret.is_caret());
        assert!(caret.is_empty());
        assert_eq!(caret.len(), 0);
        assert_eq!((caret.min(), caret.max()), (5, 5));
    }

    #[test]
    fn test_backward_region_normalizes() {
        let region = Region::new(9, 4);
        assert!(!region.is_caret());
        assert_eq!(region.min(), 4);
        assert_eq!(region.max(), 9);
        assert_eq!(region.len(), 5);
    }
}
