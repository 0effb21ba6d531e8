//! BSP tree container and structural editing.

use std::ops::Index;

use slotmap::SlotMap;

use crate::boundary::{BoundaryAttribute, BoundaryBuilder};
use crate::error::{Result, TreeError};
use crate::{Split, SubHyperplane};

use super::node::{BspNode, NodeId, NodeKind};
use super::visitor::{BspVisitor, VisitOrder};

/// A Binary Space Partitioning tree describing a region of space.
///
/// Internal nodes carry a cut fragment and two children; leaves carry an
/// inside/outside label. All nodes live in an arena owned by the tree and
/// are referred to by [`NodeId`] handles.
///
/// # Construction
///
/// A tree starts as a single leaf. Leaves are then split one at a time:
///
/// ```ignore
/// use bsp_boundary::{BspTree, Plane3D, PlaneRegion};
///
/// let mut tree = BspTree::new(false);
/// let root = tree.root();
/// let cut = PlaneRegion::square(plane, 100.0);
/// let (outside, rest) = tree.insert_cut(root, cut)?;
/// tree.set_inside(rest, true)?;
/// tree.compute_boundaries();
/// ```
///
/// # Boundaries
///
/// [`BspTree::compute_boundaries`] stores on every internal node the part
/// of its cut that separates inside from outside. Any later structural edit
/// discards those attributes.
#[derive(Debug, Clone)]
pub struct BspTree<S> {
    nodes: SlotMap<NodeId, BspNode<S>>,
    root: NodeId,
}

impl<S> BspTree<S> {
    /// Creates a tree made of a single leaf.
    pub fn new(inside: bool) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(BspNode::leaf(None, inside));
        Self { nodes, root }
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node behind a handle, if it belongs to this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&BspNode<S>> {
        self.nodes.get(id)
    }

    /// Returns the number of nodes, leaves included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of levels of the tree (1 for a single leaf).
    pub fn depth(&self) -> usize {
        self.subtree_depth(self.root)
    }

    fn subtree_depth(&self, id: NodeId) -> usize {
        match self.nodes[id].kind {
            NodeKind::Leaf { .. } => 1,
            NodeKind::Internal { plus, minus, .. } => {
                1 + self.subtree_depth(plus).max(self.subtree_depth(minus))
            }
        }
    }

    /// Iterates over the strict ancestors of a node, closest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.nodes.get(id).and_then(|node| node.parent);
        std::iter::successors(first, move |&up| self.nodes[up].parent)
    }

    /// Relabels a leaf.
    pub fn set_inside(&mut self, leaf: NodeId, inside: bool) -> Result<()> {
        let node = self.nodes.get_mut(leaf).ok_or(TreeError::UnknownNode(leaf))?;
        match &mut node.kind {
            NodeKind::Leaf { inside: label } => *label = inside,
            NodeKind::Internal { .. } => return Err(TreeError::NotALeaf(leaf)),
        }
        self.clear_boundaries();
        Ok(())
    }

    /// Turns a leaf into an internal node cut by `cut`, used as is.
    ///
    /// Both new leaves inherit the label of the split leaf. Returns the
    /// `(plus, minus)` children.
    pub fn split(&mut self, leaf: NodeId, cut: S) -> Result<(NodeId, NodeId)> {
        let inside = match self.nodes.get(leaf).map(|node| &node.kind) {
            None => return Err(TreeError::UnknownNode(leaf)),
            Some(NodeKind::Internal { .. }) => return Err(TreeError::NotALeaf(leaf)),
            Some(NodeKind::Leaf { inside }) => *inside,
        };

        let plus = self.nodes.insert(BspNode::leaf(Some(leaf), inside));
        let minus = self.nodes.insert(BspNode::leaf(Some(leaf), inside));
        self.nodes[leaf].kind = NodeKind::Internal {
            cut,
            plus,
            minus,
            boundary: None,
        };
        self.clear_boundaries();
        Ok((plus, minus))
    }

    /// Traverses the whole tree, visiting every node exactly once.
    pub fn visit<V: BspVisitor<S>>(&self, visitor: &mut V) {
        self.visit_node(self.root, visitor);
    }

    fn visit_node<V: BspVisitor<S>>(&self, id: NodeId, visitor: &mut V) {
        let (plus, minus) = match self.nodes[id].kind {
            NodeKind::Leaf { .. } => {
                visitor.visit_leaf(self, id);
                return;
            }
            NodeKind::Internal { plus, minus, .. } => (plus, minus),
        };

        match visitor.visit_order(self, id) {
            VisitOrder::PlusMinusSub => {
                self.visit_node(plus, visitor);
                self.visit_node(minus, visitor);
                visitor.visit_internal(self, id);
            }
            VisitOrder::PlusSubMinus => {
                self.visit_node(plus, visitor);
                visitor.visit_internal(self, id);
                self.visit_node(minus, visitor);
            }
            VisitOrder::MinusPlusSub => {
                self.visit_node(minus, visitor);
                self.visit_node(plus, visitor);
                visitor.visit_internal(self, id);
            }
            VisitOrder::MinusSubPlus => {
                self.visit_node(minus, visitor);
                visitor.visit_internal(self, id);
                self.visit_node(plus, visitor);
            }
            VisitOrder::SubPlusMinus => {
                visitor.visit_internal(self, id);
                self.visit_node(plus, visitor);
                self.visit_node(minus, visitor);
            }
            VisitOrder::SubMinusPlus => {
                visitor.visit_internal(self, id);
                self.visit_node(minus, visitor);
                self.visit_node(plus, visitor);
            }
        }
    }

    /// Returns the boundary attribute of a node, if computed.
    pub fn boundary(&self, id: NodeId) -> Option<&BoundaryAttribute<S>> {
        self.nodes.get(id).and_then(BspNode::boundary)
    }

    /// Iterates over all computed boundary attributes.
    pub fn boundary_attributes(&self) -> impl Iterator<Item = (NodeId, &BoundaryAttribute<S>)> {
        self.nodes
            .iter()
            .filter_map(|(id, node)| node.boundary().map(|attribute| (id, attribute)))
    }

    fn clear_boundaries(&mut self) {
        for node in self.nodes.values_mut() {
            if let NodeKind::Internal { boundary, .. } = &mut node.kind {
                *boundary = None;
            }
        }
    }
}

impl<S: SubHyperplane> BspTree<S> {
    /// Splits a leaf with the part of `fragment` lying inside its cell.
    ///
    /// The fragment is chopped against the cut of every ancestor, keeping
    /// the side the leaf lies on, before being stored. Returns the
    /// `(plus, minus)` children.
    pub fn insert_cut(&mut self, leaf: NodeId, fragment: S) -> Result<(NodeId, NodeId)> {
        match self.nodes.get(leaf) {
            None => return Err(TreeError::UnknownNode(leaf)),
            Some(node) if !node.is_leaf() => return Err(TreeError::NotALeaf(leaf)),
            Some(_) => {}
        }

        let fitted = self.fit_to_cell(leaf, fragment).inspect_err(|err| {
            log::debug!("refusing cut for {leaf:?}: {err}");
        })?;
        self.split(leaf, fitted)
    }

    fn fit_to_cell(&self, leaf: NodeId, mut fragment: S) -> Result<S> {
        let mut child = leaf;
        for ancestor in self.ancestors(leaf) {
            let NodeKind::Internal { cut, plus, .. } = &self.nodes[ancestor].kind else {
                unreachable!("ancestors are internal nodes");
            };
            let on_plus = *plus == child;

            fragment = match fragment.split(cut.hyperplane()) {
                Split::Plus if on_plus => fragment,
                Split::Minus if !on_plus => fragment,
                Split::Plus | Split::Minus => return Err(TreeError::EmptyCut(leaf)),
                Split::Both { plus, .. } if on_plus => plus,
                Split::Both { minus, .. } => minus,
                Split::Coincident => {
                    return Err(TreeError::CoincidentCut {
                        node: leaf,
                        ancestor,
                    });
                }
            };
            child = ancestor;
        }

        if fragment.is_empty() {
            return Err(TreeError::EmptyCut(leaf));
        }
        Ok(fragment)
    }

    /// Computes and stores the boundary attribute of every internal node.
    ///
    /// Running it again on an unchanged tree yields identical attributes.
    pub fn compute_boundaries(&mut self) {
        let mut builder = BoundaryBuilder::new();
        self.visit(&mut builder);
        for (id, attribute) in builder.into_attributes() {
            if let NodeKind::Internal { boundary, .. } = &mut self.nodes[id].kind {
                *boundary = Some(attribute);
            }
        }
    }
}

impl<S> Index<NodeId> for BspTree<S> {
    type Output = BspNode<S>;

    /// # Panics
    /// Panics if the node does not belong to this tree.
    fn index(&self, id: NodeId) -> &BspNode<S> {
        &self.nodes[id]
    }
}
