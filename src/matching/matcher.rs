//! Feed content matching.
//!
//! Pure functions from feed text and target subnets to the set of matched
//! targets. No I/O happens here.

use crate::models::{parse_network_literal, TargetSubnet};
use ipnet::IpNet;
use std::collections::BTreeSet;

/// Parse one feed line as an IP network.
///
/// Feeds mix headers, comments and occasional garbage in with the entries,
/// so anything unparsable is skipped silently instead of reported. A CIDR
/// line with host bits set below its prefix is skipped the same way; a
/// bare address parses as its host network.
pub fn parse_network_entry(line: &str) -> Option<IpNet> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    parse_network_literal(line).ok()
}

/// Collect the canonical form of every target subnet the feed content
/// matches.
///
/// A feed entry matches a target when both are the same IP version and
/// either network contains the other, equality included: a published /8
/// covers a /24 target, and a published /32 falls inside it. Networks of
/// different versions never match, whatever their bits look like.
///
/// # Arguments
/// * `content` - raw feed body, one entry per line
/// * `targets` - subnets to look for
///
/// # Returns
/// * Canonical strings of the matched targets, deduplicated and ordered
pub fn match_feed_content(content: &str, targets: &[TargetSubnet]) -> BTreeSet<String> {
    let mut matched = BTreeSet::new();
    for line in content.lines() {
        let entry = match parse_network_entry(line) {
            Some(net) => net,
            None => continue,
        };
        for target in targets {
            if entry.contains(&target.net()) || target.net().contains(&entry) {
                matched.insert(target.canonical());
            }
        }
    }
    matched
}
