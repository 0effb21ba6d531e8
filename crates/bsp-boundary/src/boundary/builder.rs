//! Visitor computing the boundary attribute of every internal node.

use slotmap::SecondaryMap;

use crate::bsp::{BspTree, BspVisitor, NodeId, NodeKind, VisitOrder};
use crate::SubHyperplane;

use super::attribute::BoundaryAttribute;
use super::characterization::Characterization;
use super::splitters::SplitterSet;

/// Visitor building the [`BoundaryAttribute`] of each internal node.
///
/// Only the structure of the tree is read, never previously computed
/// attributes, so the results are collected here and written back by
/// [`BspTree::compute_boundaries`].
#[derive(Debug)]
pub struct BoundaryBuilder<S> {
    attributes: SecondaryMap<NodeId, BoundaryAttribute<S>>,
}

impl<S> Default for BoundaryBuilder<S> {
    fn default() -> Self {
        Self {
            attributes: SecondaryMap::new(),
        }
    }
}

impl<S: SubHyperplane> BoundaryBuilder<S> {
    /// Creates a builder with no attribute collected yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes collected so far, keyed by internal node.
    pub fn attributes(&self) -> &SecondaryMap<NodeId, BoundaryAttribute<S>> {
        &self.attributes
    }

    /// Consumes the builder, returning the collected attributes.
    pub fn into_attributes(self) -> SecondaryMap<NodeId, BoundaryAttribute<S>> {
        self.attributes
    }

    /// Computes the boundary attribute of one internal node.
    ///
    /// Returns `None` for leaves.
    pub fn boundary_of(tree: &BspTree<S>, node: NodeId) -> Option<BoundaryAttribute<S>> {
        let NodeKind::Internal {
            cut, plus, minus, ..
        } = tree[node].kind()
        else {
            return None;
        };

        let mut plus_outside = None;
        let mut plus_inside = None;
        let mut splitters: Option<SplitterSet> = None;

        // First with respect to the plus subtree.
        let (outside, inside) = Characterization::new(tree, *plus, cut.clone()).into_parts();

        // Outside on the plus side: is there inside on the minus side?
        if let Some((fragment, plus_splitters)) = outside.into_touching() {
            let (_, minus_inside) = Characterization::new(tree, *minus, fragment).into_parts();
            if let Some((boundary, minus_splitters)) = minus_inside.into_touching() {
                plus_outside = Some(boundary);
                let set = splitters.get_or_insert_with(SplitterSet::new);
                set.extend(minus_splitters);
                set.extend(plus_splitters);
            }
        }

        // Inside on the plus side: is there outside on the minus side?
        if let Some((fragment, plus_splitters)) = inside.into_touching() {
            let (minus_outside, _) = Characterization::new(tree, *minus, fragment).into_parts();
            if let Some((boundary, minus_splitters)) = minus_outside.into_touching() {
                plus_inside = Some(boundary);
                let set = splitters.get_or_insert_with(SplitterSet::new);
                set.extend(minus_splitters);
                set.extend(plus_splitters);
            }
        }

        // Cuts of the ancestors bound the whole cell, hence any boundary in it.
        if let Some(set) = splitters.as_mut() {
            set.extend(tree.ancestors(node));
        }

        log::trace!(
            "boundary of {node:?}: plus outside {}, plus inside {}, {} splitters",
            plus_outside.is_some(),
            plus_inside.is_some(),
            splitters.as_ref().map_or(0, SplitterSet::len),
        );
        Some(BoundaryAttribute::new(plus_outside, plus_inside, splitters))
    }
}

impl<S: SubHyperplane> BspVisitor<S> for BoundaryBuilder<S> {
    fn visit_order(&self, _tree: &BspTree<S>, _node: NodeId) -> VisitOrder {
        VisitOrder::PlusMinusSub
    }

    fn visit_internal(&mut self, tree: &BspTree<S>, node: NodeId) {
        if let Some(attribute) = Self::boundary_of(tree, node) {
            self.attributes.insert(node, attribute);
        }
    }
}
