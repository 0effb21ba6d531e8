//! Extraction of the region boundary from the cuts of a BSP tree.
//!
//! A cut separates its node's cell in two, but only some of it separates
//! inside from outside. For every internal node the cut is classified once
//! against the plus subtree and once against the minus subtree; the parts
//! that meet an outside cell on one side and an inside cell on the other
//! form the boundary. They are stored as a [`BoundaryAttribute`] together
//! with the nodes whose cuts were used to shape them.

mod attribute;
mod builder;
mod characterization;
mod splitters;

pub use attribute::BoundaryAttribute;
pub use builder::BoundaryBuilder;
pub use characterization::{Characterization, Touching};
pub use splitters::SplitterSet;
