//! Bone name canonicalization.
//!
//! Rigs exported from animation tools often namespace every bone with a
//! vendor prefix (`mixamorig:Hips`, `mixamorig_Hips`). Matching between two
//! rigs happens on the *canonical* name, i.e. the identifier with that
//! prefix removed.

/// A known source-rig bone name prefix.
///
/// [`strip`](RigPrefix::strip) removes the prefix case-insensitively, along
/// with one optional separator character (`:` or `_`) following it. Names
/// that do not carry the prefix are returned unchanged, which makes the
/// operation idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RigPrefix {
    prefix: String,
}

impl RigPrefix {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The Mixamo rig prefix (`mixamorig`), the most common case in the wild.
    #[must_use]
    pub fn mixamo() -> Self {
        Self::new("mixamorig")
    }

    /// A prefix that never matches anything.
    #[must_use]
    pub fn none() -> Self {
        Self::new("")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Returns the canonical form of `raw`: the name with the prefix (and one
    /// trailing `:` or `_` separator) removed, or `raw` itself when the
    /// prefix is absent.
    #[must_use]
    pub fn strip<'a>(&self, raw: &'a str) -> &'a str {
        if self.prefix.is_empty() {
            return raw;
        }
        // get() rather than slicing: a prefix-length cut through a multi-byte
        // character means the name cannot carry this ASCII prefix anyway.
        let Some(head) = raw.get(..self.prefix.len()) else {
            return raw;
        };
        if !head.eq_ignore_ascii_case(&self.prefix) {
            return raw;
        }
        let rest = &raw[self.prefix.len()..];
        rest.strip_prefix([':', '_']).unwrap_or(rest)
    }
}

impl Default for RigPrefix {
    fn default() -> Self {
        Self::mixamo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_colon_and_underscore_separators() {
        let prefix = RigPrefix::mixamo();
        assert_eq!(prefix.strip("mixamorig:Hips"), "Hips");
        assert_eq!(prefix.strip("mixamorig_Hips"), "Hips");
        assert_eq!(prefix.strip("mixamorigHips"), "Hips");
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let prefix = RigPrefix::mixamo();
        assert_eq!(prefix.strip("MIXAMORIG:Hips"), "Hips");
        assert_eq!(prefix.strip("MixamoRig_LeftArm"), "LeftArm");
    }

    #[test]
    fn unprefixed_names_pass_through() {
        let prefix = RigPrefix::mixamo();
        assert_eq!(prefix.strip("Hips"), "Hips");
        assert_eq!(prefix.strip(""), "");
    }

    #[test]
    fn empty_prefix_strips_nothing() {
        let prefix = RigPrefix::none();
        assert_eq!(prefix.strip("mixamorig:Hips"), "mixamorig:Hips");
    }

    #[test]
    fn non_ascii_names_are_left_intact() {
        let prefix = RigPrefix::mixamo();
        assert_eq!(prefix.strip("骨盤"), "骨盤");
    }
}
