//! Terminal output for the match summary.

use crate::models::{MatchKind, MatchResult};
use colored::Colorize;
use itertools::Itertools;

/// Run-level context handed to the reporter alongside the results.
#[derive(Debug, Clone, Copy)]
pub struct ScanSummary {
    /// Number of feeds that were scanned.
    pub feed_count: usize,
    /// Number of target subnets searched for.
    pub target_count: usize,
    /// Whether per-result matched-subnet detail is wanted.
    pub verbose: bool,
}

/// Join matched subnets into the detail line payload.
pub fn format_matched_subnets(matched: &[String]) -> String {
    matched.iter().join(", ")
}

/// Print the match summary block.
///
/// An empty result list is a normal outcome and prints a plain no-matches
/// line; it is never treated as an error.
pub fn print_match_summary(results: &[MatchResult], summary: &ScanSummary) {
    println!();
    println!("====== MATCH SUMMARY ======");

    if results.is_empty() {
        println!(
            "No matches found across {feeds} feed(s) for {targets} target subnet(s).",
            feeds = summary.feed_count,
            targets = summary.target_count
        );
        return;
    }

    for result in results {
        let tag = match result.kind {
            MatchKind::Full => "FULL".green().bold(),
            MatchKind::Partial => "PARTIAL".yellow(),
        };
        println!(
            "  [{tag}] {url}  ({provenance})",
            url = result.url,
            provenance = result.provenance
        );
        if summary.verbose {
            println!(
                "    Matched: {}",
                format_matched_subnets(&result.matched_subnets)
            );
        }
    }
}
