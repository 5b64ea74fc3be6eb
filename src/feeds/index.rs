//! Feed URL discovery from the hosting service index page.

use crate::config::{FEED_URL_MARKER, IPV4_FEED_SUFFIX};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

static HREF_REGEX: OnceLock<Regex> = OnceLock::new();

/// Regex pulling hyperlink targets out of the index document. One
/// alternate per quote style, so an href value may contain the other
/// quote character.
fn href_regex() -> &'static Regex {
    HREF_REGEX.get_or_init(|| {
        Regex::new(r#"href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Invalid Regex")
    })
}

/// Extract the feed URLs from the index page content.
///
/// Keeps every hyperlink target that contains [`FEED_URL_MARKER`],
/// deduplicated and sorted so the scan order is reproducible run to run.
/// With `ipv4_only` set, only URLs ending in [`IPV4_FEED_SUFFIX`] survive.
///
/// # Arguments
/// * `html` - raw content of the index page
/// * `ipv4_only` - drop feeds that are not IPv4-specific
///
/// # Returns
/// * Sorted, distinct feed URLs; empty when the page has no feed links
pub fn resolve_feed_urls(html: &str, ipv4_only: bool) -> Vec<String> {
    let urls: BTreeSet<String> = href_regex()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|value| value.as_str().to_string())
        .filter(|url| url.contains(FEED_URL_MARKER))
        .filter(|url| !ipv4_only || url.ends_with(IPV4_FEED_SUFFIX))
        .collect();
    urls.into_iter().collect()
}
