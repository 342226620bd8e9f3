#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod naming;
pub mod retarget;
pub mod rig;

pub use animation::{
    AnimationClip, ClipSource, KeyframeTrack, RawTrack, TargetProperty, Track, TrackData, TrackMeta,
};
pub use errors::{Result, RetargetError};
pub use naming::RigPrefix;
pub use retarget::{BoneMatch, CorrectionMap, MatchReport, NameMap, RetargetConfig, Retargeter};
pub use rig::{BoneHandle, BoneHierarchy, BoneIndex, Rig, RigNode};
