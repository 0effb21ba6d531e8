//! Interface between the partition tree and the geometry it partitions.
//!
//! The tree and the boundary computation never look inside a fragment. All
//! they need is to split it against a hyperplane, glue pieces back together,
//! and test whether anything is left.

/// Outcome of splitting a fragment against a hyperplane.
///
/// `Plus` and `Minus` carry no fragment: the fragment was not cut and the
/// caller keeps using the one it already has.
#[derive(Debug, Clone, PartialEq)]
pub enum Split<S> {
    /// The whole fragment lies on the plus side of the hyperplane.
    Plus,
    /// The whole fragment lies on the minus side of the hyperplane.
    Minus,
    /// The fragment straddles the hyperplane and was cut in two.
    Both {
        /// Part on the plus side.
        plus: S,
        /// Part on the minus side.
        minus: S,
    },
    /// The fragment lies on the hyperplane itself.
    Coincident,
}

/// A bounded piece of a hyperplane (a "sub-hyperplane").
///
/// Cloning yields an independent copy.
pub trait SubHyperplane: Clone {
    /// The unbounded partitioning surface this fragment lies on.
    type Hyperplane;

    /// Returns the hyperplane this fragment lies on.
    fn hyperplane(&self) -> &Self::Hyperplane;

    /// Splits the fragment against another hyperplane.
    fn split(&self, hyperplane: &Self::Hyperplane) -> Split<Self>;

    /// Union of two fragments lying on the same hyperplane.
    fn reunite(self, other: Self) -> Self;

    /// Returns `true` if the fragment has no extent.
    fn is_empty(&self) -> bool;
}
