//! Skeletal hierarchy types.
//!
//! - [`BoneHierarchy`]: the narrow capability contract the retarget core
//!   depends on (names, bone flags, child enumeration, local rotations)
//! - [`Rig`] / [`RigNode`]: a concrete hierarchy implementation backed by a
//!   slotmap arena, for hosts that do not already have one
//! - [`BoneIndex`]: name-to-bone lookup built by one full traversal

pub mod graph;
pub mod hierarchy;
pub mod index;
pub mod node;

pub use graph::{Rig, RigNodeBuilder};
pub use hierarchy::BoneHierarchy;
pub use index::{BoneIndex, BoneRecord};
pub use node::RigNode;

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a node stored in a [`Rig`].
    pub struct BoneHandle;
}
