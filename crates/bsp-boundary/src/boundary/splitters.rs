//! Bookkeeping of the nodes whose cuts shaped a fragment.

use std::collections::BTreeSet;

use crate::bsp::NodeId;

/// Deduplicated set of internal nodes used as splitters.
///
/// Ordered so that iteration and equality are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitterSet(BTreeSet<NodeId>);

impl SplitterSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, returning `false` if it was already present.
    pub fn insert(&mut self, node: NodeId) -> bool {
        self.0.insert(node)
    }

    /// Checks whether a node is in the set.
    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains(&node)
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no node was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the nodes in handle order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}

impl Extend<NodeId> for SplitterSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<NodeId> for SplitterSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SplitterSet {
    type Item = NodeId;
    type IntoIter = std::collections::btree_set::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Nodes straddled on the way from the classification start to the current
/// node, as a linked list living on the call stack.
///
/// Each recursive call extends the list with a new frame that borrows its
/// caller's, so sibling branches never see each other's entries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SplitterPath<'a> {
    node: NodeId,
    parent: Option<&'a SplitterPath<'a>>,
}

impl<'a> SplitterPath<'a> {
    pub(crate) fn push(parent: Option<&'a SplitterPath<'a>>, node: NodeId) -> Self {
        Self { node, parent }
    }

    /// Iterates over the nodes of a (possibly empty) path, most recent first.
    pub(crate) fn nodes(path: Option<&'a SplitterPath<'a>>) -> impl Iterator<Item = NodeId> + 'a {
        std::iter::successors(path, |frame| frame.parent).map(|frame| frame.node)
    }
}
