//! lath-layout: constraint-based box layout along one axis at a time.
//!
//! A [`LayoutStore`] owns one or more single-axis box trees as a flat arena
//! with index handles. Callers create boxes, give each a [`SizePolicy`] plus
//! padding and inter-child gap, link edges with [`LayoutStore::add_child`],
//! then run [`compute_layout`] on a root and read [`LayoutNode::size`] back.
//! A 2-D UI keeps two trees of identical shape -- one per axis -- and
//! [`AxisPair`] keeps the per-element handles in lockstep.

pub mod compute;
pub mod decl;
pub mod element;
pub mod store;
pub mod validate;

pub use compute::compute_layout;
pub use element::AxisPair;
pub use lath_types::error::{LathError, Result};
pub use lath_types::policy::SizePolicy;
pub use store::{BoxId, LayoutNode, LayoutStore};
pub use validate::validate;
