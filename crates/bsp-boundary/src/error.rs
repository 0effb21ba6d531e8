//! Error types for tree editing.

use thiserror::Error;

use crate::bsp::NodeId;

/// Errors that can occur while editing a [`BspTree`](crate::BspTree).
///
/// Boundary computation itself never fails; only structural edits do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The handle does not refer to a node of this tree.
    #[error("node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),

    /// The operation needs a leaf but the node already has a cut.
    #[error("node {0:?} is not a leaf")]
    NotALeaf(NodeId),

    /// Nothing of the cut fragment remains inside the cell of the node.
    #[error("cut fragment does not intersect the cell of node {0:?}")]
    EmptyCut(NodeId),

    /// The cut fragment lies on the cut of one of the node's ancestors.
    #[error("cut fragment for node {node:?} lies on the cut of ancestor {ancestor:?}")]
    CoincidentCut {
        /// Leaf that was being split.
        node: NodeId,
        /// Ancestor whose cut coincides with the fragment.
        ancestor: NodeId,
    },
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
