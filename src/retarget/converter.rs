use std::hash::Hash;

use glam::Quat;

use crate::animation::{AnimationClip, ClipSource, KeyframeTrack, TargetProperty, Track, TrackData};
use crate::naming::RigPrefix;
use crate::retarget::config::RetargetConfig;
use crate::retarget::map::{CorrectionMap, NameMap};
use crate::retarget::resolver::BoneMatch;
use crate::rig::{BoneHierarchy, BoneIndex};

/// Clip name substituted when the source clip is unnamed.
pub const DEFAULT_REMAPPED_NAME: &str = "RetargetedAnimation";

/// Retargets skeletal animation from one rig naming convention to another.
///
/// A `Retargeter` owns the configuration of one retarget session: the source
/// rig's name prefix, the bone-name mapping table, and the per-bone rotation
/// corrections. Instances are independent; mutating one session's tables
/// never affects another. Mutation takes effect for subsequent calls only.
#[derive(Debug, Clone)]
pub struct Retargeter {
    prefix: RigPrefix,
    names: NameMap,
    corrections: CorrectionMap,
}

impl Retargeter {
    /// A converter preconfigured for Mixamo-style sources: `mixamorig`
    /// prefix, standard humanoid name table, no rotation corrections.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: RigPrefix::mixamo(),
            names: NameMap::humanoid(),
            corrections: CorrectionMap::empty(),
        }
    }

    /// A converter with no prefix, no name table and no corrections; bones
    /// resolve through direct name matches only until configured.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            prefix: RigPrefix::none(),
            names: NameMap::empty(),
            corrections: CorrectionMap::empty(),
        }
    }

    /// Builds a converter from a parsed configuration, starting from
    /// [`Retargeter::new`] defaults.
    #[must_use]
    pub fn from_config(config: &RetargetConfig) -> Self {
        let mut converter = Self::new();
        converter.apply_config(config);
        converter
    }

    /// Applies a configuration on top of the current tables: the prefix is
    /// replaced when set, mappings and corrections are merged in by key.
    pub fn apply_config(&mut self, config: &RetargetConfig) {
        if let Some(prefix) = &config.prefix {
            self.prefix = RigPrefix::new(prefix.clone());
        }
        self.names
            .merge(config.bone_map.iter().map(|(s, t)| (s.clone(), t.clone())));
        for (bone, q) in &config.rotation_corrections {
            self.corrections
                .set(bone.clone(), Quat::from_xyzw(q[0], q[1], q[2], q[3]));
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    #[must_use]
    pub fn with_prefix(mut self, prefix: RigPrefix) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub fn prefix(&self) -> &RigPrefix {
        &self.prefix
    }

    #[must_use]
    pub fn name_map(&self) -> &NameMap {
        &self.names
    }

    /// Merges custom name mappings in, overriding existing entries by key.
    pub fn merge_names<S, T>(&mut self, entries: impl IntoIterator<Item = (S, T)>)
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.names.merge(entries);
    }

    /// Registers a rotation correction for a (canonical) bone name.
    pub fn set_correction(&mut self, bone: impl Into<String>, correction: Quat) {
        self.corrections.set(bone, correction);
    }

    /// Removes a bone's rotation correction.
    pub fn clear_correction(&mut self, bone: &str) {
        self.corrections.clear(bone);
    }

    /// The canonical form of a raw bone name.
    #[must_use]
    pub fn canonicalize<'a>(&self, raw: &'a str) -> &'a str {
        self.prefix.strip(raw)
    }

    // ========================================================================
    // Bone correspondence
    // ========================================================================

    /// Indexes every bone of a hierarchy under its canonical and raw names.
    pub fn index_bones<H: BoneHierarchy>(&self, hierarchy: &H) -> BoneIndex<H::Handle> {
        BoneIndex::build(hierarchy, &self.prefix)
    }

    /// Resolves a source bone (by raw name) against a target index.
    ///
    /// The mapping table is consulted first; when it has no usable entry the
    /// canonical name itself is tried directly against the target.
    pub fn resolve<Id: Copy + Eq + Hash>(
        &self,
        source_raw: &str,
        target: &BoneIndex<Id>,
    ) -> BoneMatch<Id> {
        let canonical = self.prefix.strip(source_raw);

        if let Some(mapped) = self.names.get(canonical) {
            if let Some(handle) = target.get(mapped) {
                return BoneMatch::Mapped(handle);
            }
        }

        if let Some(handle) = target.get(canonical) {
            return BoneMatch::SameName(handle);
        }

        BoneMatch::Unmatched
    }

    // ========================================================================
    // Rotation correction
    // ========================================================================

    /// Applies the bone's registered correction to a rotation.
    ///
    /// The correction is composed on the left (`correction * rotation`): it
    /// acts in the parent frame, before the bone's own local rotation. This
    /// ordering must match how the corrections were authored; swapping it
    /// produces subtly wrong poses on any non-commuting pair.
    #[must_use]
    pub fn correct_rotation(&self, rotation: Quat, bone: &str) -> Quat {
        match self.corrections.get(bone) {
            Some(correction) => correction * rotation,
            None => rotation,
        }
    }

    /// Applies the bone's correction to a flat `x,y,z,w` component sequence,
    /// 4 components per sample, returning a new sequence of the same length.
    ///
    /// Panics if `values.len()` is not a multiple of 4 — truncating the tail
    /// would silently corrupt the track instead.
    #[must_use]
    pub fn correct_components(&self, values: &[f32], bone: &str) -> Vec<f32> {
        assert!(
            values.len() % 4 == 0,
            "quaternion component count {} is not a multiple of 4",
            values.len()
        );

        let Some(correction) = self.corrections.get(bone) else {
            return values.to_vec();
        };

        let mut out = Vec::with_capacity(values.len());
        for q in values.chunks_exact(4) {
            let corrected = correction * Quat::from_xyzw(q[0], q[1], q[2], q[3]);
            out.extend_from_slice(&[corrected.x, corrected.y, corrected.z, corrected.w]);
        }
        out
    }

    fn correct_quaternion_track(&self, track: &KeyframeTrack<Quat>, bone: &str) -> KeyframeTrack<Quat> {
        let Some(correction) = self.corrections.get(bone) else {
            return track.clone();
        };
        KeyframeTrack::new(
            track.times.clone(),
            track.values.iter().map(|&q| correction * q).collect(),
        )
    }

    // ========================================================================
    // Clip remapping
    // ========================================================================

    /// Rewrites one clip's tracks against the target hierarchy.
    ///
    /// Per track: the owning bone is resolved through the mapping table with
    /// a same-name fallback; unresolved tracks and position tracks are
    /// dropped (rig proportions differ, copying positions breaks the pose);
    /// rotation tracks get the bone's correction applied; everything else is
    /// carried through with times and values untouched.
    ///
    /// Returns `None` when not a single track could be retargeted, which is
    /// distinct from a valid clip that happens to be empty.
    pub fn remap_clip<Id: Copy + Eq + Hash>(
        &self,
        clip: &AnimationClip,
        target: &BoneIndex<Id>,
    ) -> Option<AnimationClip> {
        let mut tracks = Vec::new();

        for track in &clip.tracks {
            let Some(handle) = self.resolve(&track.meta.node_name, target).handle() else {
                continue;
            };
            let Some(target_name) = target.raw_name(handle) else {
                continue;
            };

            match (&track.meta.property, &track.data) {
                (TargetProperty::Position, _) => {}
                (TargetProperty::Rotation, TrackData::Quaternion(t)) => {
                    let canonical = self.prefix.strip(&track.meta.node_name);
                    tracks.push(Track::new(
                        target_name,
                        TargetProperty::Rotation,
                        TrackData::Quaternion(self.correct_quaternion_track(t, canonical)),
                    ));
                }
                (property, data) => {
                    tracks.push(Track::new(target_name, property.clone(), data.clone()));
                }
            }
        }

        if tracks.is_empty() {
            return None;
        }

        let name = if clip.name.is_empty() {
            DEFAULT_REMAPPED_NAME.to_string()
        } else {
            clip.name.clone()
        };

        Some(AnimationClip {
            name,
            duration: clip.duration,
            tracks,
            source: ClipSource::Retargeted,
        })
    }

    /// Remaps a batch of clips, skipping (and logging) the ones that produce
    /// nothing. One unresolvable clip never aborts the batch.
    pub fn remap_clips<Id: Copy + Eq + Hash>(
        &self,
        clips: &[AnimationClip],
        target: &BoneIndex<Id>,
    ) -> Vec<AnimationClip> {
        let mut remapped = Vec::with_capacity(clips.len());

        for clip in clips {
            match self.remap_clip(clip, target) {
                Some(out) => {
                    log::info!("clip {:?} retargeted ({} tracks)", out.name, out.tracks.len());
                    remapped.push(out);
                }
                None => {
                    log::warn!("clip {:?} produced no retargeted tracks", clip.name);
                }
            }
        }

        remapped
    }

    // ========================================================================
    // Live pose sync
    // ========================================================================

    /// Copies corrected local rotations from matched source bones onto the
    /// target hierarchy, in place. Intended to be called once per frame when
    /// driving a target rig directly instead of baking a clip.
    ///
    /// Position and scale are never touched; target bones with no source
    /// counterpart keep their prior rotation.
    pub fn sync_pose<S, T>(&self, source: &S, target: &mut T)
    where
        S: BoneHierarchy,
        T: BoneHierarchy,
    {
        let source_index = self.index_bones(source);
        let target_index = self.index_bones(&*target);

        for (raw_name, source_handle) in source_index.iter_raw() {
            let Some(target_handle) = self.resolve(raw_name, &target_index).handle() else {
                continue;
            };
            let Some(rotation) = source.local_rotation(source_handle) else {
                continue;
            };
            let canonical = self.prefix.strip(raw_name);
            target.set_local_rotation(target_handle, self.correct_rotation(rotation, canonical));
        }
    }
}

impl Default for Retargeter {
    fn default() -> Self {
        Self::new()
    }
}
