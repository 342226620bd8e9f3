use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Caller-supplied retarget configuration.
///
/// Everything is optional; fields merge on top of the converter's current
/// tables (see [`Retargeter::apply_config`](crate::Retargeter::apply_config)).
///
/// ```json
/// {
///   "prefix": "mixamorig",
///   "bone_map": { "Spine2": "Chest" },
///   "rotation_corrections": { "Hips": [0.7071068, 0.0, 0.0, 0.7071068] }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetargetConfig {
    /// Source-rig bone prefix override
    pub prefix: Option<String>,
    /// Extra canonical source → target name mappings
    pub bone_map: BTreeMap<String, String>,
    /// Per-bone rotation corrections, unit quaternions as `[x, y, z, w]`
    pub rotation_corrections: BTreeMap<String, [f32; 4]>,
}

impl RetargetConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
