/// Outcome of resolving one source bone against a target index.
///
/// `Unmatched` is a normal result, not an error — rigs are not required to
/// have full bone parity, and batch operations simply skip unmatched bones.
/// The three-way split (rather than a plain `Option`) records *which* path
/// produced a match, which the correspondence report surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoneMatch<Id> {
    /// Matched through the name mapping table
    Mapped(Id),
    /// Matched by the direct same-name fallback
    SameName(Id),
    /// No corresponding target bone
    Unmatched,
}

impl<Id: Copy> BoneMatch<Id> {
    /// The matched bone, if any.
    #[must_use]
    pub fn handle(&self) -> Option<Id> {
        match self {
            Self::Mapped(id) | Self::SameName(id) => Some(*id),
            Self::Unmatched => None,
        }
    }

    #[must_use]
    pub fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched)
    }
}
