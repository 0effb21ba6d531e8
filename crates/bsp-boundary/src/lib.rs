//! Boundary extraction for regions described by BSP trees.

pub mod boundary;
pub mod bsp;
mod error;
mod hyperplane;
mod plane;
mod polygon;
mod region;

pub use boundary::{BoundaryAttribute, BoundaryBuilder, Characterization, SplitterSet, Touching};
pub use bsp::{BspNode, BspTree, BspVisitor, NodeId, NodeKind, VisitOrder};
pub use error::{Result, TreeError};
pub use hyperplane::{Split, SubHyperplane};
pub use plane::{Plane3D, PlaneSide, PLANE_EPSILON};
pub use polygon::{Polygon, PolygonSide};
pub use region::PlaneRegion;
