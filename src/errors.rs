//! Error Types
//!
//! The retarget core treats unresolved bones and empty remap results as
//! ordinary values ([`crate::retarget::BoneMatch::Unmatched`], `None` from
//! [`crate::Retargeter::remap_clip`]); the errors here cover malformed
//! caller-supplied data only.

use thiserror::Error;

/// The main error type for the retarget crate.
#[derive(Error, Debug)]
pub enum RetargetError {
    /// A track address did not contain a `.` separating the bone identifier
    /// from the property path.
    #[error("invalid track address {0:?}: expected \"<bone>.<property>\"")]
    InvalidTrackAddress(String),

    /// A flat component sequence did not match the sample count implied by
    /// the track's timestamps.
    #[error("track has {times} sample times but {values} values (stride {stride})")]
    TrackLengthMismatch {
        /// Number of sample timestamps
        times: usize,
        /// Number of flat components supplied
        values: usize,
        /// Components per sample
        stride: usize,
    },

    /// Retarget configuration failed to parse.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias for `Result<T, RetargetError>`.
pub type Result<T> = std::result::Result<T, RetargetError>;
