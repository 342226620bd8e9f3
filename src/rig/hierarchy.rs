use std::hash::Hash;

use glam::Quat;

/// Capability contract for a skeletal hierarchy.
///
/// The retarget core never creates, destroys or reparents nodes; it only
/// walks the tree, reads names and rotations, and (in the live-sync path)
/// writes local rotations back. Any scene-graph type of the host renderer
/// can participate by implementing this trait.
///
/// Handles yielded by [`roots`](BoneHierarchy::roots) and
/// [`children`](BoneHierarchy::children) may be dangling after the host
/// mutates the hierarchy; accessors therefore return `Option` and callers
/// skip missing nodes.
pub trait BoneHierarchy {
    /// Node identifier. Cheap to copy, usable as a map key.
    type Handle: Copy + Eq + Hash;

    /// Top-level nodes of the hierarchy.
    fn roots(&self) -> Vec<Self::Handle>;

    /// Direct children of `node`.
    fn children(&self, node: Self::Handle) -> Vec<Self::Handle>;

    /// Whether `node` is a skeletal bone (as opposed to a mesh, locator, …).
    fn is_bone(&self, node: Self::Handle) -> bool;

    /// The node's raw name, as stored on the hierarchy.
    fn name(&self, node: Self::Handle) -> Option<&str>;

    /// The node's local rotation relative to its parent.
    fn local_rotation(&self, node: Self::Handle) -> Option<Quat>;

    /// Overwrites the node's local rotation. Missing nodes are ignored.
    fn set_local_rotation(&mut self, node: Self::Handle, rotation: Quat);
}
