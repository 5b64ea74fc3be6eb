//! Per-feed scan results.

use std::collections::BTreeSet;
use std::fmt;

/// How much of the target set one feed covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Every target subnet matched an entry in the feed.
    Full,
    /// Some, but not all, target subnets matched.
    Partial,
}

impl MatchKind {
    /// Classify a feed from the number of distinct matched targets.
    ///
    /// Returns `None` when nothing matched; such a feed produces no
    /// result at all.
    pub fn classify(matched: usize, total: usize) -> Option<MatchKind> {
        if matched == 0 {
            None
        } else if matched == total {
            Some(MatchKind::Full)
        } else {
            Some(MatchKind::Partial)
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Full => write!(f, "FULL"),
            MatchKind::Partial => write!(f, "PARTIAL"),
        }
    }
}

/// Whether feed content was downloaded this run or read back from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Fetched over the network during this run.
    Fresh,
    /// Served from the local cache directory.
    Cached,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Fresh => write!(f, "fresh"),
            Provenance::Cached => write!(f, "cached"),
        }
    }
}

/// Outcome for one feed that matched at least one target subnet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Feed URL the content came from.
    pub url: String,
    /// FULL or PARTIAL coverage of the target set.
    pub kind: MatchKind,
    /// Canonical strings of the matched targets, sorted for display.
    pub matched_subnets: Vec<String>,
    /// Fresh download or cached copy.
    pub provenance: Provenance,
}

impl MatchResult {
    /// Build a result from the matched-target set, or `None` when the feed
    /// matched nothing.
    pub fn from_matches(
        url: &str,
        matched: BTreeSet<String>,
        total_targets: usize,
        provenance: Provenance,
    ) -> Option<MatchResult> {
        let kind = MatchKind::classify(matched.len(), total_targets)?;
        Some(MatchResult {
            url: url.to_string(),
            kind,
            matched_subnets: matched.into_iter().collect(),
            provenance,
        })
    }
}
