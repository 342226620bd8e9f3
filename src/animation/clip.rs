use glam::{Quat, Vec3};

use crate::animation::tracks::KeyframeTrack;
use crate::errors::{Result, RetargetError};

/// The animated property a track drives, as addressed by the
/// `"<bone>.<property>"` convention of clip containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetProperty {
    /// `"quaternion"` — local rotation
    Rotation,
    /// `"position"` — local translation
    Position,
    /// `"scale"` — local scale
    Scale,
    /// Any other property path, carried through verbatim (may itself
    /// contain `.` segments, e.g. `"morphTargetInfluences.smile"`)
    Other(String),
}

impl TargetProperty {
    #[must_use]
    pub fn parse(path: &str) -> Self {
        match path {
            "quaternion" => Self::Rotation,
            "position" => Self::Position,
            "scale" => Self::Scale,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rotation => "quaternion",
            Self::Position => "position",
            Self::Scale => "scale",
            Self::Other(path) => path,
        }
    }
}

/// Addressing metadata of one track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMeta {
    /// Bone identifier part of the track address
    pub node_name: String,
    pub property: TargetProperty,
}

/// Generic fixed-stride numeric samples (morph weights and the like).
#[derive(Debug, Clone, PartialEq)]
pub struct RawTrack {
    /// Components per sample
    pub stride: usize,
    pub track: KeyframeTrack<f32>,
}

/// Keyframe payload of one track.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackData {
    Quaternion(KeyframeTrack<Quat>),
    Vector3(KeyframeTrack<Vec3>),
    Scalar(KeyframeTrack<f32>),
    Raw(RawTrack),
}

impl TrackData {
    /// Timestamp of the last sample across the payload.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        match self {
            Self::Quaternion(t) => t.end_time(),
            Self::Vector3(t) => t.end_time(),
            Self::Scalar(t) => t.end_time(),
            Self::Raw(r) => r.track.end_time(),
        }
    }

    /// Number of samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        match self {
            Self::Quaternion(t) => t.len(),
            Self::Vector3(t) => t.len(),
            Self::Scalar(t) => t.len(),
            Self::Raw(r) => r.track.len(),
        }
    }
}

/// Complete track definition: addressing metadata plus keyframe data.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

impl Track {
    #[must_use]
    pub fn new(node_name: &str, property: TargetProperty, data: TrackData) -> Self {
        Self {
            meta: TrackMeta {
                node_name: node_name.to_string(),
                property,
            },
            data,
        }
    }

    /// Parses a `"<bone>.<property>"` address. The split happens at the
    /// *first* `.`; remaining segments stay part of the property path.
    pub fn from_address(address: &str, data: TrackData) -> Result<Self> {
        let Some((node_name, property)) = address.split_once('.') else {
            return Err(RetargetError::InvalidTrackAddress(address.to_string()));
        };
        Ok(Self::new(node_name, TargetProperty::parse(property), data))
    }

    /// The track's `"<bone>.<property>"` address.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}.{}", self.meta.node_name, self.meta.property.as_str())
    }
}

/// Provenance of an [`AnimationClip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipSource {
    /// Authored/imported as-is
    #[default]
    Authored,
    /// Produced by the track remapper
    Retargeted,
}

/// A named, fixed-duration collection of keyframe tracks.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Clip name; an empty string counts as unnamed
    pub name: String,
    /// Duration in seconds
    pub duration: f32,
    pub tracks: Vec<Track>,
    /// Provenance tag; retargeted clips are marked machine-remapped
    pub source: ClipSource,
}

impl AnimationClip {
    /// Creates a clip whose duration is the latest end time of its tracks.
    #[must_use]
    pub fn new(name: String, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.end_time())
            .fold(0.0_f32, f32::max);

        Self {
            name,
            duration,
            tracks,
            source: ClipSource::Authored,
        }
    }
}
