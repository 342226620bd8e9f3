use glam::Quat;
use rustc_hash::FxHashMap;

/// Canonical bone names of the standard humanoid layout shared by
/// Mixamo-style rigs and most generated-character rigs: pelvis, spine chain,
/// neck/head, arm chains with full finger phalanxes, leg chains with toes.
pub const HUMANOID_BONES: &[&str] = &[
    // Root and pelvis
    "Hips",
    // Spine chain
    "Spine",
    "Spine1",
    "Spine2",
    // Neck and head
    "Neck",
    "Head",
    // Left arm
    "LeftShoulder",
    "LeftArm",
    "LeftForeArm",
    "LeftHand",
    // Left hand fingers
    "LeftHandThumb1",
    "LeftHandThumb2",
    "LeftHandThumb3",
    "LeftHandIndex1",
    "LeftHandIndex2",
    "LeftHandIndex3",
    "LeftHandMiddle1",
    "LeftHandMiddle2",
    "LeftHandMiddle3",
    "LeftHandRing1",
    "LeftHandRing2",
    "LeftHandRing3",
    "LeftHandPinky1",
    "LeftHandPinky2",
    "LeftHandPinky3",
    // Right arm
    "RightShoulder",
    "RightArm",
    "RightForeArm",
    "RightHand",
    // Right hand fingers
    "RightHandThumb1",
    "RightHandThumb2",
    "RightHandThumb3",
    "RightHandIndex1",
    "RightHandIndex2",
    "RightHandIndex3",
    "RightHandMiddle1",
    "RightHandMiddle2",
    "RightHandMiddle3",
    "RightHandRing1",
    "RightHandRing2",
    "RightHandRing3",
    "RightHandPinky1",
    "RightHandPinky2",
    "RightHandPinky3",
    // Left leg
    "LeftUpLeg",
    "LeftLeg",
    "LeftFoot",
    "LeftToeBase",
    // Right leg
    "RightUpLeg",
    "RightLeg",
    "RightFoot",
    "RightToeBase",
];

/// Canonical source name → canonical target name mapping table.
///
/// Consulted before the direct-name fallback; entries may be absent (rigs
/// are not required to have full bone parity). Mutation takes effect for
/// subsequent calls on the owning converter, never retroactively.
#[derive(Debug, Clone, Default)]
pub struct NameMap {
    map: FxHashMap<String, String>,
}

impl NameMap {
    /// An empty table; resolution falls back to direct name matches only.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard humanoid table: every [`HUMANOID_BONES`] entry mapped to
    /// itself. Target rigs using the same simplified nomenclature then
    /// resolve without any custom configuration.
    #[must_use]
    pub fn humanoid() -> Self {
        let mut map = FxHashMap::default();
        for &name in HUMANOID_BONES {
            map.insert(name.to_string(), name.to_string());
        }
        Self { map }
    }

    /// Inserts or overrides one entry.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.map.insert(source.into(), target.into());
    }

    /// Merges entries in, overriding existing keys.
    pub fn merge<S, T>(&mut self, entries: impl IntoIterator<Item = (S, T)>)
    where
        S: Into<String>,
        T: Into<String>,
    {
        for (source, target) in entries {
            self.map.insert(source.into(), target.into());
        }
    }

    /// The mapped target name for a canonical source name, if any.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&str> {
        self.map.get(source).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Canonical bone name → fixed local-space pre-rotation.
///
/// Reconciles bind-pose orientation differences between two rigs. Most bones
/// need no entry; corrections are registered per bone as discovered.
#[derive(Debug, Clone, Default)]
pub struct CorrectionMap {
    map: FxHashMap<String, Quat>,
}

impl CorrectionMap {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers a correction quaternion for a bone.
    pub fn set(&mut self, bone: impl Into<String>, correction: Quat) {
        self.map.insert(bone.into(), correction);
    }

    /// Removes a bone's correction.
    pub fn clear(&mut self, bone: &str) {
        self.map.remove(bone);
    }

    /// The correction for a bone, if one is registered.
    #[must_use]
    pub fn get(&self, bone: &str) -> Option<Quat> {
        self.map.get(bone).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
