use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::naming::RigPrefix;
use crate::rig::hierarchy::BoneHierarchy;

/// One indexed bone.
#[derive(Debug, Clone)]
pub struct BoneRecord<Id> {
    /// Name as stored on the hierarchy node
    pub raw_name: String,
    /// Prefix-stripped name used for cross-rig matching
    pub canonical: String,
    pub handle: Id,
}

/// Name-to-bone lookup over one hierarchy.
///
/// Built by a single full traversal; every bone node is reachable under both
/// its canonical and its raw name. The index is a snapshot — it is not kept
/// in sync with later hierarchy mutation, rebuild it after structural
/// changes.
///
/// When two insertions claim the same name the later one wins, so traversal
/// order breaks ties (and a node's raw name beats another node's canonical
/// name visited earlier). Collisions do not fail the build; a `debug` log
/// line records the overwrite.
#[derive(Debug)]
pub struct BoneIndex<Id> {
    records: Vec<BoneRecord<Id>>,
    by_name: FxHashMap<String, usize>,
    by_handle: FxHashMap<Id, usize>,
}

impl<Id: Copy + Eq + Hash> BoneIndex<Id> {
    /// Traverses `hierarchy` and indexes every node flagged as a bone.
    pub fn build<H>(hierarchy: &H, prefix: &RigPrefix) -> Self
    where
        H: BoneHierarchy<Handle = Id>,
    {
        let mut index = Self {
            records: Vec::new(),
            by_name: FxHashMap::default(),
            by_handle: FxHashMap::default(),
        };

        // Iterative traversal: rigs with full finger chains nest deep.
        let mut stack: Vec<Id> = hierarchy.roots();
        stack.reverse();
        while let Some(handle) = stack.pop() {
            let children = hierarchy.children(handle);
            stack.extend(children.into_iter().rev());

            if !hierarchy.is_bone(handle) {
                continue;
            }
            let Some(raw_name) = hierarchy.name(handle) else {
                continue;
            };

            let record_idx = index.records.len();
            let canonical = prefix.strip(raw_name).to_string();
            index.insert_key(canonical.clone(), record_idx);
            index.insert_key(raw_name.to_string(), record_idx);
            index.by_handle.insert(handle, record_idx);
            index.records.push(BoneRecord {
                raw_name: raw_name.to_string(),
                canonical,
                handle,
            });
        }

        index
    }

    fn insert_key(&mut self, name: String, record_idx: usize) {
        if let Some(previous) = self.by_name.insert(name.clone(), record_idx) {
            if previous != record_idx {
                log::debug!("bone index: name {name:?} re-bound to a later-visited bone");
            }
        }
    }

    /// Looks a bone up by raw or canonical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Id> {
        self.by_name.get(name).map(|&i| self.records[i].handle)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The raw name of an indexed bone.
    #[must_use]
    pub fn raw_name(&self, handle: Id) -> Option<&str> {
        self.by_handle
            .get(&handle)
            .map(|&i| self.records[i].raw_name.as_str())
    }

    /// All indexed bones, one entry per node, in traversal order.
    pub fn iter_raw(&self) -> impl Iterator<Item = (&str, Id)> + '_ {
        self.records.iter().map(|r| (r.raw_name.as_str(), r.handle))
    }

    /// All bone records in traversal order.
    #[must_use]
    pub fn records(&self) -> &[BoneRecord<Id>] {
        &self.records
    }

    /// Number of indexed bones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
