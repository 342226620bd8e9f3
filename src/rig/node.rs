use glam::{Quat, Vec3};

use crate::rig::BoneHandle;

/// A node in a [`Rig`](crate::rig::Rig).
///
/// Nodes form a tree through parent/child handles. Each node carries a local
/// TRS; only the rotation is ever touched by the retarget core, but rigs in
/// the wild store all three, so all three are kept.
#[derive(Debug, Clone)]
pub struct RigNode {
    /// Parent node handle (`None` for root nodes)
    pub(crate) parent: Option<BoneHandle>,
    /// Child node handles
    pub(crate) children: Vec<BoneHandle>,

    /// Raw node name, possibly rig-prefixed
    pub name: String,
    /// Skeletal-bone flag; non-bone nodes (meshes, locators) are skipped
    /// when indexing
    pub is_bone: bool,

    /// Local translation relative to the parent
    pub position: Vec3,
    /// Local rotation relative to the parent
    pub rotation: Quat,
    /// Local scale relative to the parent
    pub scale: Vec3,
}

impl RigNode {
    /// Creates a non-bone node with an identity transform.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            name: name.to_string(),
            is_bone: false,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Creates a bone node with an identity transform.
    #[must_use]
    pub fn bone(name: &str) -> Self {
        Self {
            is_bone: true,
            ..Self::new(name)
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<BoneHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[BoneHandle] {
        &self.children
    }
}
