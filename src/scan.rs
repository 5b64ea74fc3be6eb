//! Scan orchestration across the resolved feed set.
//!
//! Fans feed processing out over a bounded number of concurrent tasks and
//! collects per-feed results as they complete.

use crate::config::Config;
use crate::error::EdlError;
use crate::feeds::FeedCache;
use crate::matching::match_feed_content;
use crate::models::{MatchResult, TargetSubnet};
use futures::stream::{self, StreamExt};

/// Scan every feed URL against the target subnets.
///
/// At most `config.workers` feeds are in flight at once. Each task yields
/// a tagged outcome: a match result, nothing (the feed covers no target),
/// or an error. An error is confined to the feed that produced it; the
/// scan logs it and moves on. Results arrive in completion order, not
/// submission order.
///
/// # Arguments
/// * `config` - run configuration (worker bound)
/// * `cache` - feed content access
/// * `urls` - resolved feed URLs
/// * `targets` - subnets to look for
///
/// # Returns
/// * One [`MatchResult`] per feed that matched at least one target
pub async fn scan_feeds(
    config: &Config,
    cache: &FeedCache,
    urls: &[String],
    targets: &[TargetSubnet],
) -> Vec<MatchResult> {
    let mut outcomes = stream::iter(urls.to_vec())
        .map(|url| async move {
            let outcome = process_feed(cache, &url, targets).await;
            (url, outcome)
        })
        .buffer_unordered(config.workers);

    let mut results = Vec::new();
    while let Some((url, outcome)) = outcomes.next().await {
        match outcome {
            Ok(Some(result)) => results.push(result),
            Ok(None) => log::debug!("no target subnet found in {url}"),
            Err(e) => log::debug!("skipping {url}: {e}"),
        }
    }
    results
}

/// Fetch (or read back) one feed and match its content.
async fn process_feed(
    cache: &FeedCache,
    url: &str,
    targets: &[TargetSubnet],
) -> Result<Option<MatchResult>, EdlError> {
    let (content, provenance) = cache.get(url).await?;
    let matched = match_feed_content(&content, targets);
    Ok(MatchResult::from_matches(url, matched, targets.len(), provenance))
}
