use std::fmt;

use rustc_hash::FxHashSet;

use crate::retarget::converter::Retargeter;
use crate::retarget::resolver::BoneMatch;
use crate::rig::BoneHierarchy;

/// One source bone's resolution result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    /// Canonical source bone name
    pub source: String,
    /// Resolved target bone raw name, `None` when unmatched
    pub target: Option<String>,
    /// Whether the mapping table produced the match (as opposed to the
    /// direct same-name fallback)
    pub via_mapping: bool,
}

/// Correspondence overview for a source/target hierarchy pair.
///
/// Advisory tooling output: `Display` renders the human-readable report,
/// the fields stay available for programmatic inspection in tests and
/// editor tooling.
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    /// One entry per source bone, in traversal order
    pub entries: Vec<MatchEntry>,
    /// Target bones no source bone resolved to, in traversal order
    pub unused_targets: Vec<String>,
}

impl MatchReport {
    /// Number of source bones that resolved to a target bone.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.entries.iter().filter(|e| e.target.is_some()).count()
    }

    /// Number of source bones with no target counterpart.
    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.entries.len() - self.matched_count()
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Bone correspondence ===")?;
        for entry in &self.entries {
            match &entry.target {
                Some(target) => {
                    let via = if entry.via_mapping { "mapped" } else { "same name" };
                    writeln!(f, "  {} -> {} [{}]", entry.source, target, via)?;
                }
                None => writeln!(f, "  {} -> ??? [unmatched]", entry.source)?,
            }
        }

        writeln!(f, "=== Target bones without a source ===")?;
        if self.unused_targets.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for name in &self.unused_targets {
            writeln!(f, "  {name}")?;
        }

        Ok(())
    }
}

impl Retargeter {
    /// Builds the correspondence report for a source/target hierarchy pair:
    /// every source bone with its resolved target (or an unresolved marker),
    /// plus every target bone that received no incoming mapping.
    pub fn match_report<S, T>(&self, source: &S, target: &T) -> MatchReport
    where
        S: BoneHierarchy,
        T: BoneHierarchy,
    {
        let source_index = self.index_bones(source);
        let target_index = self.index_bones(target);

        let mut matched_targets: FxHashSet<T::Handle> = FxHashSet::default();
        let mut entries = Vec::with_capacity(source_index.len());

        for record in source_index.records() {
            let outcome = self.resolve(&record.raw_name, &target_index);
            if let Some(handle) = outcome.handle() {
                matched_targets.insert(handle);
            }
            entries.push(MatchEntry {
                source: record.canonical.clone(),
                target: outcome
                    .handle()
                    .and_then(|h| target_index.raw_name(h))
                    .map(ToOwned::to_owned),
                via_mapping: matches!(outcome, BoneMatch::Mapped(_)),
            });
        }

        let unused_targets = target_index
            .records()
            .iter()
            .filter(|r| !matched_targets.contains(&r.handle))
            .map(|r| r.raw_name.clone())
            .collect();

        MatchReport {
            entries,
            unused_targets,
        }
    }
}
