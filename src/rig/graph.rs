use glam::{Quat, Vec3};
use slotmap::SlotMap;

use crate::rig::hierarchy::BoneHierarchy;
use crate::rig::node::RigNode;
use crate::rig::BoneHandle;

/// A minimal skeletal hierarchy container.
///
/// `Rig` is pure data: a slotmap arena of nodes plus a root list. It exists
/// so that hosts without their own scene graph (and the crate's tests) have
/// something concrete to build hierarchies with; the retarget core only ever
/// sees it through [`BoneHierarchy`].
#[derive(Debug, Default)]
pub struct Rig {
    pub nodes: SlotMap<BoneHandle, RigNode>,
    pub root_nodes: Vec<BoneHandle>,
}

impl Rig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Starts building a node with a chained configuration API.
    pub fn build_node(&'_ mut self, name: &str) -> RigNodeBuilder<'_> {
        RigNodeBuilder::new(self, name)
    }

    /// Adds a node to the rig as a root.
    pub fn add_node(&mut self, node: RigNode) -> BoneHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: RigNode, parent: BoneHandle) -> BoneHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent);
        }

        handle
    }

    /// Reparents `child` under `parent`, keeping both sides of the
    /// relationship in sync.
    pub fn attach(&mut self, child: BoneHandle, parent: BoneHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }

        // 1. Detach from old parent (or the root list)
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p) {
                if let Some(i) = n.children.iter().position(|&x| x == child) {
                    n.children.remove(i);
                }
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to new
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        } else {
            log::error!("Parent node not found during attach!");
            self.root_nodes.push(child);
            return;
        }

        // 3. Update child
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: BoneHandle) -> Option<&RigNode> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: BoneHandle) -> Option<&mut RigNode> {
        self.nodes.get_mut(handle)
    }

    /// Finds the first node with the given raw name, depth-first.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<BoneHandle> {
        let mut stack: Vec<BoneHandle> = self.root_nodes.iter().rev().copied().collect();
        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            if node.name == name {
                return Some(handle);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

impl BoneHierarchy for Rig {
    type Handle = BoneHandle;

    fn roots(&self) -> Vec<BoneHandle> {
        self.root_nodes.clone()
    }

    fn children(&self, node: BoneHandle) -> Vec<BoneHandle> {
        self.nodes
            .get(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn is_bone(&self, node: BoneHandle) -> bool {
        self.nodes.get(node).is_some_and(|n| n.is_bone)
    }

    fn name(&self, node: BoneHandle) -> Option<&str> {
        self.nodes.get(node).map(|n| n.name.as_str())
    }

    fn local_rotation(&self, node: BoneHandle) -> Option<Quat> {
        self.nodes.get(node).map(|n| n.rotation)
    }

    fn set_local_rotation(&mut self, node: BoneHandle, rotation: Quat) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.rotation = rotation;
        }
    }
}

/// Chained construction helper for [`Rig`] nodes.
pub struct RigNodeBuilder<'a> {
    rig: &'a mut Rig,
    node: RigNode,
    parent: Option<BoneHandle>,
}

impl<'a> RigNodeBuilder<'a> {
    pub fn new(rig: &'a mut Rig, name: &str) -> Self {
        Self {
            rig,
            node: RigNode::new(name),
            parent: None,
        }
    }

    /// Marks the node as a skeletal bone.
    #[must_use]
    pub fn bone(mut self) -> Self {
        self.node.is_bone = true;
        self
    }

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.position = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.node.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: BoneHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Inserts the node and returns its handle.
    pub fn build(self) -> BoneHandle {
        match self.parent {
            Some(parent) => self.rig.add_to_parent(self.node, parent),
            None => self.rig.add_node(self.node),
        }
    }
}
