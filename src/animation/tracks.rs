use glam::{Quat, Vec3};

use crate::errors::{Result, RetargetError};

/// Timed samples for one animated property.
///
/// `times` is strictly non-decreasing and `values` holds one entry per
/// timestamp. Sampling/interpolation is the host player's job; this crate
/// only carries the data through the retarget pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack<T> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
}

impl<T> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>) -> Self {
        Self { times, values }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamp of the last sample, 0.0 for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }
}

impl KeyframeTrack<Quat> {
    /// Builds a rotation track from a flat `x,y,z,w` component sequence,
    /// 4 components per sample, as produced by glTF/FBX samplers.
    pub fn from_components(times: Vec<f32>, components: &[f32]) -> Result<Self> {
        if components.len() != times.len() * 4 {
            return Err(RetargetError::TrackLengthMismatch {
                times: times.len(),
                values: components.len(),
                stride: 4,
            });
        }
        let values = components
            .chunks_exact(4)
            .map(|q| Quat::from_xyzw(q[0], q[1], q[2], q[3]))
            .collect();
        Ok(Self { times, values })
    }

    /// Flattens the rotation samples back into `x,y,z,w` component order.
    #[must_use]
    pub fn to_components(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.values.len() * 4);
        for q in &self.values {
            out.extend_from_slice(&[q.x, q.y, q.z, q.w]);
        }
        out
    }
}

impl KeyframeTrack<Vec3> {
    /// Builds a vector track from a flat `x,y,z` component sequence.
    pub fn from_components(times: Vec<f32>, components: &[f32]) -> Result<Self> {
        if components.len() != times.len() * 3 {
            return Err(RetargetError::TrackLengthMismatch {
                times: times.len(),
                values: components.len(),
                stride: 3,
            });
        }
        let values = components
            .chunks_exact(3)
            .map(|v| Vec3::new(v[0], v[1], v[2]))
            .collect();
        Ok(Self { times, values })
    }
}
