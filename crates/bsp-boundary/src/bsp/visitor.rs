//! Visitor pattern for BSP tree traversal.
//!
//! Visitors allow custom processing of nodes during tree traversal
//! without coupling traversal logic to specific use cases.

use super::node::NodeId;
use super::tree::BspTree;

/// Order in which an internal node and its two subtrees are visited.
///
/// `Sub` stands for the internal node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOrder {
    /// Plus subtree, minus subtree, then the node.
    PlusMinusSub,
    /// Plus subtree, the node, then the minus subtree.
    PlusSubMinus,
    /// Minus subtree, plus subtree, then the node.
    MinusPlusSub,
    /// Minus subtree, the node, then the plus subtree.
    MinusSubPlus,
    /// The node, plus subtree, then the minus subtree.
    SubPlusMinus,
    /// The node, minus subtree, then the plus subtree.
    SubMinusPlus,
}

/// Visitor for processing nodes during BSP tree traversal.
///
/// Every node is visited exactly once. The visitor chooses, per internal
/// node, in which order that node and its subtrees are handled.
pub trait BspVisitor<S> {
    /// Order used for the given internal node.
    fn visit_order(&self, tree: &BspTree<S>, node: NodeId) -> VisitOrder;

    /// Called once for each internal node.
    fn visit_internal(&mut self, tree: &BspTree<S>, node: NodeId);

    /// Called once for each leaf. Does nothing by default.
    fn visit_leaf(&mut self, tree: &BspTree<S>, node: NodeId) {
        let _ = (tree, node);
    }
}
