pub mod clip;
pub mod tracks;

pub use clip::{AnimationClip, ClipSource, RawTrack, TargetProperty, Track, TrackData, TrackMeta};
pub use tracks::KeyframeTrack;
