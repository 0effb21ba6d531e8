//! BSP tree node implementation.

use crate::boundary::BoundaryAttribute;

slotmap::new_key_type! {
    /// Handle to a node of a [`BspTree`](super::BspTree).
    ///
    /// Handles are plain indices into the tree's arena; holding one does not
    /// keep the node alive.
    pub struct NodeId;
}

/// What a node is: a labelled leaf cell, or a cut with two children.
#[derive(Debug, Clone)]
pub enum NodeKind<S> {
    /// A cell of the partition, entirely inside or entirely outside the region.
    Leaf {
        /// `true` if the cell belongs to the region.
        inside: bool,
    },
    /// A node splitting its cell in two along `cut`.
    Internal {
        /// Part of the partitioning hyperplane lying within this node's cell.
        cut: S,
        /// Child covering the plus side of the cut.
        plus: NodeId,
        /// Child covering the minus side of the cut.
        minus: NodeId,
        /// Boundary part of the cut, once computed.
        boundary: Option<BoundaryAttribute<S>>,
    },
}

/// A node in the BSP tree.
#[derive(Debug, Clone)]
pub struct BspNode<S> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind<S>,
}

impl<S> BspNode<S> {
    pub(crate) fn leaf(parent: Option<NodeId>, inside: bool) -> Self {
        Self {
            parent,
            kind: NodeKind::Leaf { inside },
        }
    }

    /// Returns the parent node, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the leaf/internal payload of the node.
    #[inline]
    pub fn kind(&self) -> &NodeKind<S> {
        &self.kind
    }

    /// Checks if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Returns the inside/outside label of a leaf, `None` for internal nodes.
    #[inline]
    pub fn is_inside(&self) -> Option<bool> {
        match self.kind {
            NodeKind::Leaf { inside } => Some(inside),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Returns the cut fragment of an internal node.
    #[inline]
    pub fn cut(&self) -> Option<&S> {
        match &self.kind {
            NodeKind::Internal { cut, .. } => Some(cut),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Returns the plus child of an internal node.
    #[inline]
    pub fn plus(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Internal { plus, .. } => Some(plus),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Returns the minus child of an internal node.
    #[inline]
    pub fn minus(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Internal { minus, .. } => Some(minus),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Returns the boundary attribute of an internal node, if computed.
    #[inline]
    pub fn boundary(&self) -> Option<&BoundaryAttribute<S>> {
        match &self.kind {
            NodeKind::Internal { boundary, .. } => boundary.as_ref(),
            NodeKind::Leaf { .. } => None,
        }
    }
}
