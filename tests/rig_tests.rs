//! Rig and Bone Index Tests
//!
//! Tests for:
//! - Rig hierarchy construction (add/attach/builder, parent-child sync)
//! - BoneIndex traversal: canonical + raw entries, bone-flag filtering
//! - Collision tie-breaks (later insertion wins)
//! - Reverse handle → raw-name lookup and traversal-order iteration

use glam::Quat;

use retarget::naming::RigPrefix;
use retarget::rig::{BoneHierarchy, BoneIndex, Rig, RigNode};

// ============================================================================
// Rig construction
// ============================================================================

#[test]
fn add_to_parent_links_both_sides() {
    let mut rig = Rig::new();
    let hips = rig.add_node(RigNode::bone("Hips"));
    let spine = rig.add_to_parent(RigNode::bone("Spine"), hips);

    assert_eq!(rig.get_node(spine).unwrap().parent(), Some(hips));
    assert_eq!(rig.get_node(hips).unwrap().children(), &[spine]);
    assert_eq!(rig.root_nodes, vec![hips]);
}

#[test]
fn attach_reparents_and_removes_from_roots() {
    let mut rig = Rig::new();
    let a = rig.add_node(RigNode::bone("A"));
    let b = rig.add_node(RigNode::bone("B"));

    rig.attach(b, a);

    assert_eq!(rig.get_node(b).unwrap().parent(), Some(a));
    assert_eq!(rig.root_nodes, vec![a]);
}

#[test]
fn builder_chains_configuration() {
    let mut rig = Rig::new();
    let root = rig.build_node("Armature").build();
    let q = Quat::from_rotation_z(0.5);
    let hips = rig
        .build_node("Hips")
        .bone()
        .with_rotation(q)
        .with_parent(root)
        .build();

    let node = rig.get_node(hips).unwrap();
    assert!(node.is_bone);
    assert_eq!(node.rotation, q);
    assert_eq!(node.parent(), Some(root));
    assert!(!rig.get_node(root).unwrap().is_bone);
}

#[test]
fn find_by_name_walks_depth_first() {
    let mut rig = Rig::new();
    let root = rig.add_node(RigNode::new("Armature"));
    let hips = rig.add_to_parent(RigNode::bone("Hips"), root);
    let spine = rig.add_to_parent(RigNode::bone("Spine"), hips);

    assert_eq!(rig.find_by_name("Spine"), Some(spine));
    assert_eq!(rig.find_by_name("Missing"), None);
}

// ============================================================================
// BoneIndex
// ============================================================================

fn prefixed_rig() -> Rig {
    let mut rig = Rig::new();
    let root = rig.add_node(RigNode::new("Armature"));
    let hips = rig.add_to_parent(RigNode::bone("mixamorig:Hips"), root);
    let spine = rig.add_to_parent(RigNode::bone("mixamorig:Spine"), hips);
    rig.add_to_parent(RigNode::bone("mixamorig:Head"), spine);
    // A non-bone child (mesh attachment) that must not be indexed
    rig.add_to_parent(RigNode::new("Beta_Surface"), root);
    rig
}

#[test]
fn index_holds_canonical_and_raw_entries() {
    let rig = prefixed_rig();
    let index = BoneIndex::build(&rig, &RigPrefix::mixamo());

    let hips = rig.find_by_name("mixamorig:Hips").unwrap();
    assert_eq!(index.get("Hips"), Some(hips));
    assert_eq!(index.get("mixamorig:Hips"), Some(hips));
}

#[test]
fn index_skips_non_bone_nodes() {
    let rig = prefixed_rig();
    let index = BoneIndex::build(&rig, &RigPrefix::mixamo());

    assert_eq!(index.len(), 3);
    assert_eq!(index.get("Armature"), None);
    assert_eq!(index.get("Beta_Surface"), None);
}

#[test]
fn index_iterates_raw_names_once_in_traversal_order() {
    let rig = prefixed_rig();
    let index = BoneIndex::build(&rig, &RigPrefix::mixamo());

    let names: Vec<&str> = index.iter_raw().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec!["mixamorig:Hips", "mixamorig:Spine", "mixamorig:Head"]
    );
}

#[test]
fn index_reverse_lookup_returns_raw_name() {
    let rig = prefixed_rig();
    let index = BoneIndex::build(&rig, &RigPrefix::mixamo());

    let spine = rig.find_by_name("mixamorig:Spine").unwrap();
    assert_eq!(index.raw_name(spine), Some("mixamorig:Spine"));
}

#[test]
fn index_collision_later_insertion_wins() {
    // Two distinct bones that collide on the canonical name "Hips": the
    // later-visited raw name takes the shared key, the earlier bone stays
    // reachable through its own raw name.
    let mut rig = Rig::new();
    let root = rig.add_node(RigNode::new("Armature"));
    let prefixed = rig.add_to_parent(RigNode::bone("mixamorig:Hips"), root);
    let plain = rig.add_to_parent(RigNode::bone("Hips"), root);

    let index = BoneIndex::build(&rig, &RigPrefix::mixamo());

    assert_eq!(index.len(), 2);
    assert_eq!(index.get("Hips"), Some(plain));
    assert_eq!(index.get("mixamorig:Hips"), Some(prefixed));
}

#[test]
fn index_of_empty_hierarchy_is_empty() {
    let rig = Rig::new();
    let index = BoneIndex::build(&rig, &RigPrefix::mixamo());

    assert!(index.is_empty());
}

// ============================================================================
// BoneHierarchy contract on Rig
// ============================================================================

#[test]
fn hierarchy_rotation_round_trip() {
    let mut rig = Rig::new();
    let hips = rig.add_node(RigNode::bone("Hips"));

    let q = Quat::from_rotation_y(1.0);
    rig.set_local_rotation(hips, q);
    assert_eq!(rig.local_rotation(hips), Some(q));
}
