//! Classification of a cut fragment against the leaves of a subtree.

use crate::bsp::{BspTree, NodeId, NodeKind};
use crate::{Split, SubHyperplane};

use super::splitters::{SplitterPath, SplitterSet};

/// Pieces of a fragment that reached leaves with one label, merged together.
#[derive(Debug, Clone)]
pub struct Touching<S> {
    fragment: Option<S>,
    splitters: SplitterSet,
}

impl<S: SubHyperplane> Touching<S> {
    fn new() -> Self {
        Self {
            fragment: None,
            splitters: SplitterSet::new(),
        }
    }

    fn add(&mut self, piece: S, path: Option<&SplitterPath<'_>>) {
        self.fragment = Some(match self.fragment.take() {
            None => piece,
            Some(fragment) => fragment.reunite(piece),
        });
        self.splitters.extend(SplitterPath::nodes(path));
    }

    /// Returns `true` if a non-empty part of the fragment reached such leaves.
    pub fn touches(&self) -> bool {
        self.fragment.as_ref().is_some_and(|fragment| !fragment.is_empty())
    }

    /// Union of the pieces, `None` if no piece arrived. May be empty.
    pub fn fragment(&self) -> Option<&S> {
        self.fragment.as_ref()
    }

    /// Nodes whose cuts were crossed to produce the pieces.
    pub fn splitters(&self) -> &SplitterSet {
        &self.splitters
    }

    /// Returns the fragment and its splitters if [`Touching::touches`] holds.
    pub fn into_touching(self) -> Option<(S, SplitterSet)> {
        let splitters = self.splitters;
        self.fragment
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| (fragment, splitters))
    }
}

/// How a fragment relates to the inside/outside cells of a subtree.
///
/// The fragment is pushed down the subtree, being split by every cut it
/// straddles, until each piece reaches a leaf. Pieces are then merged per
/// leaf label. Classifying a node's cut once from each child and comparing
/// the labels found on both sides is what tells boundary apart from the
/// parts of the cut that separate two cells of the same kind.
#[derive(Debug, Clone)]
pub struct Characterization<S> {
    outside: Touching<S>,
    inside: Touching<S>,
}

impl<S: SubHyperplane> Characterization<S> {
    /// Classifies `fragment` against the subtree rooted at `node`.
    ///
    /// # Panics
    /// Panics if `node` does not belong to `tree`.
    pub fn new(tree: &BspTree<S>, node: NodeId, fragment: S) -> Self {
        let mut characterization = Self {
            outside: Touching::new(),
            inside: Touching::new(),
        };
        characterization.characterize(tree, node, fragment, None);
        characterization
    }

    fn characterize(
        &mut self,
        tree: &BspTree<S>,
        node: NodeId,
        fragment: S,
        path: Option<&SplitterPath<'_>>,
    ) {
        let (cut, plus, minus) = match tree[node].kind() {
            NodeKind::Leaf { inside: true } => return self.inside.add(fragment, path),
            NodeKind::Leaf { inside: false } => return self.outside.add(fragment, path),
            NodeKind::Internal {
                cut, plus, minus, ..
            } => (cut, *plus, *minus),
        };

        match fragment.split(cut.hyperplane()) {
            // Not crossed, so not a splitter.
            Split::Plus => self.characterize(tree, plus, fragment, path),
            Split::Minus => self.characterize(tree, minus, fragment, path),
            Split::Both {
                plus: plus_part,
                minus: minus_part,
            } => {
                let path = SplitterPath::push(path, node);
                self.characterize(tree, plus, plus_part, Some(&path));
                self.characterize(tree, minus, minus_part, Some(&path));
            }
            Split::Coincident => {
                // Cannot happen in a well-formed tree, yet manually built or
                // very complex trees do produce it. The fragment is treated
                // as lying on the minus side; this is an approximation.
                log::debug!("fragment lies on the cut of {node:?}, classifying it on the minus side");
                self.characterize(tree, minus, fragment, path);
            }
        }
    }

    /// Parts of the fragment lying against outside cells.
    pub fn outside(&self) -> &Touching<S> {
        &self.outside
    }

    /// Parts of the fragment lying against inside cells.
    pub fn inside(&self) -> &Touching<S> {
        &self.inside
    }

    /// Returns `true` if part of the fragment lies against outside cells.
    pub fn touch_outside(&self) -> bool {
        self.outside.touches()
    }

    /// Returns `true` if part of the fragment lies against inside cells.
    pub fn touch_inside(&self) -> bool {
        self.inside.touches()
    }

    /// Splits the result into its `(outside, inside)` parts.
    pub fn into_parts(self) -> (Touching<S>, Touching<S>) {
        (self.outside, self.inside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane3D, PlaneRegion};
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    fn axis_plane(normal: Vector3<f64>, at: f64) -> Plane3D {
        Plane3D::from_point_and_normal(Point3::from(normal * at), normal)
    }

    fn area(touching: &Touching<PlaneRegion>) -> f64 {
        touching.fragment().map_or(0.0, PlaneRegion::area)
    }

    #[test]
    fn leaf_takes_whole_fragment() {
        let tree: BspTree<PlaneRegion> = BspTree::new(true);
        let fragment = PlaneRegion::square(axis_plane(Vector3::z(), 0.0), 1.0);

        let result = Characterization::new(&tree, tree.root(), fragment.clone());

        assert!(result.touch_inside());
        assert!(!result.touch_outside());
        assert_eq!(result.inside().fragment(), Some(&fragment));
        assert!(result.inside().splitters().is_empty());
        assert!(result.outside().fragment().is_none());
    }

    #[test]
    fn straddled_cut_is_recorded_on_both_sides() {
        // x > 0 is outside, x < 0 inside.
        let mut tree = BspTree::new(false);
        let root = tree.root();
        let (_, minus) = tree
            .insert_cut(root, PlaneRegion::square(axis_plane(Vector3::x(), 0.0), 4.0))
            .unwrap();
        tree.set_inside(minus, true).unwrap();

        let fragment = PlaneRegion::square(axis_plane(Vector3::z(), 0.0), 1.0);
        let result = Characterization::new(&tree, root, fragment);

        assert_relative_eq!(area(result.outside()), 2.0, epsilon = 1e-9);
        assert_relative_eq!(area(result.inside()), 2.0, epsilon = 1e-9);
        assert!(result.outside().splitters().contains(root));
        assert!(result.inside().splitters().contains(root));
    }

    #[test]
    fn uncrossed_cut_is_not_a_splitter() {
        let mut tree = BspTree::new(false);
        let root = tree.root();
        let (plus, _) = tree
            .insert_cut(root, PlaneRegion::square(axis_plane(Vector3::x(), 5.0), 10.0))
            .unwrap();
        tree.set_inside(plus, true).unwrap();

        // Entirely on the minus side of x = 5.
        let fragment = PlaneRegion::square(axis_plane(Vector3::z(), 0.0), 1.0);
        let result = Characterization::new(&tree, root, fragment);

        assert!(result.touch_outside());
        assert!(!result.touch_inside());
        assert!(result.outside().splitters().is_empty());
    }

    #[test]
    fn pieces_reaching_same_label_are_reunited() {
        // Slab -1 < x < 1 is inside, both sides outside.
        let mut tree = BspTree::new(false);
        let root = tree.root();
        let (_, rest) = tree
            .insert_cut(root, PlaneRegion::square(axis_plane(Vector3::x(), 1.0), 10.0))
            .unwrap();
        let (slab, _) = tree
            .insert_cut(rest, PlaneRegion::square(axis_plane(Vector3::x(), -1.0), 10.0))
            .unwrap();
        tree.set_inside(slab, true).unwrap();

        let fragment = PlaneRegion::square(axis_plane(Vector3::z(), 0.0), 2.0);
        let result = Characterization::new(&tree, root, fragment.clone());

        assert_eq!(result.outside().fragment().unwrap().polygons().len(), 2);
        assert_relative_eq!(area(result.outside()), 8.0, epsilon = 1e-9);
        assert_relative_eq!(area(result.inside()), 8.0, epsilon = 1e-9);
        assert_relative_eq!(
            area(result.outside()) + area(result.inside()),
            fragment.area(),
            epsilon = 1e-9
        );

        let splitters: Vec<_> = result.outside().splitters().iter().collect();
        assert_eq!(splitters, vec![root, rest]);
    }

    #[test]
    fn coincident_fragment_goes_minus() {
        let mut tree = BspTree::new(false);
        let root = tree.root();
        let (plus, _) = tree
            .split(root, PlaneRegion::square(axis_plane(Vector3::z(), 0.0), 1.0))
            .unwrap();
        tree.set_inside(plus, true).unwrap();

        for orientation in [axis_plane(Vector3::z(), 0.0), axis_plane(Vector3::z(), 0.0).flipped()] {
            let fragment = PlaneRegion::square(orientation, 1.0);
            for _ in 0..3 {
                let result = Characterization::new(&tree, root, fragment.clone());
                assert!(result.touch_outside());
                assert!(!result.touch_inside());
                assert!(result.outside().splitters().is_empty());
            }
        }
    }

    #[test]
    fn empty_pieces_do_not_touch() {
        let tree: BspTree<PlaneRegion> = BspTree::new(false);
        let fragment = PlaneRegion::empty(axis_plane(Vector3::z(), 0.0));

        let result = Characterization::new(&tree, tree.root(), fragment);

        assert!(result.outside().fragment().is_some());
        assert!(!result.touch_outside());
        let (outside, inside) = result.into_parts();
        assert!(outside.into_touching().is_none());
        assert!(inside.into_touching().is_none());
    }
}
