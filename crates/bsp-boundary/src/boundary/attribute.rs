use super::splitters::SplitterSet;

/// Part of an internal node's cut that lies on the region's boundary.
///
/// The boundary is kept in two slots, one per orientation, so consumers can
/// tell which way the region faces across each piece.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryAttribute<S> {
    plus_outside: Option<S>,
    plus_inside: Option<S>,
    splitters: Option<SplitterSet>,
}

impl<S> BoundaryAttribute<S> {
    pub(crate) fn new(
        plus_outside: Option<S>,
        plus_inside: Option<S>,
        splitters: Option<SplitterSet>,
    ) -> Self {
        Self {
            plus_outside,
            plus_inside,
            splitters,
        }
    }

    /// Boundary with the outside on the plus side of the cut and the inside
    /// on its minus side.
    pub fn plus_outside(&self) -> Option<&S> {
        self.plus_outside.as_ref()
    }

    /// Boundary with the inside on the plus side of the cut and the outside
    /// on its minus side.
    pub fn plus_inside(&self) -> Option<&S> {
        self.plus_inside.as_ref()
    }

    /// Nodes whose cuts bound the boundary fragments, ancestors included.
    ///
    /// `None` when the cut carries no boundary at all.
    pub fn splitters(&self) -> Option<&SplitterSet> {
        self.splitters.as_ref()
    }

    /// Returns `true` if no part of the cut is boundary.
    pub fn is_empty(&self) -> bool {
        self.plus_outside.is_none() && self.plus_inside.is_none()
    }

    /// Iterates over the non-missing boundary fragments.
    pub fn fragments(&self) -> impl Iterator<Item = &S> {
        self.plus_outside.iter().chain(self.plus_inside.iter())
    }
}
