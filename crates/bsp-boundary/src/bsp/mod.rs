//! Binary Space Partitioning tree labelling cells inside or outside a region.
//!
//! # Example
//!
//! ```ignore
//! use bsp_boundary::{BspTree, Plane3D, PlaneRegion};
//! use nalgebra::{Point3, Vector3};
//!
//! // Half-space z < 0.
//! let mut tree = BspTree::new(false);
//! let root = tree.root();
//! let ground = Plane3D::from_point_and_normal(Point3::origin(), Vector3::z());
//! let (_, below) = tree.insert_cut(root, PlaneRegion::square(ground, 10.0))?;
//! tree.set_inside(below, true)?;
//!
//! tree.compute_boundaries();
//! let boundary = tree.boundary(root).unwrap();
//! assert!(boundary.plus_outside().is_some());
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: Arena owning every node, with structural editing
//! - [`BspNode`]: A leaf with its label, or a cut with two children
//! - [`NodeId`]: Non-owning handle to a node
//! - [`BspVisitor`]: Visitor trait for custom traversal behavior

mod node;
mod tree;
mod visitor;

pub use node::{BspNode, NodeId, NodeKind};
pub use tree::BspTree;
pub use visitor::{BspVisitor, VisitOrder};
