//! Run configuration and compiled-in defaults.
//!
//! Flags are parsed once in main and frozen into a [`Config`] that gets
//! passed by reference into the cache and the orchestrator; core logic
//! never reads ambient global state.

use crate::cli::CliArgs;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Documentation index page listing every hosted feed.
pub const DEFAULT_INDEX_URL: &str =
    "https://docs.paloaltonetworks.com/resources/edl-hosting-service";

/// Path marker identifying a hyperlink on the index page as a hosted feed.
pub const FEED_URL_MARKER: &str = "paloaltonetworks.com/feeds/";

/// Suffix of feed URLs that carry IPv4 entries only.
pub const IPV4_FEED_SUFFIX: &str = "/ipv4";

/// Default directory for cached feed bodies.
pub const DEFAULT_CACHE_DIR: &str = "edls";

/// Cached content older than this is refetched.
pub const CACHE_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Timeout for a single feed download.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on concurrent feed fetches. A politeness cap for the
/// rate-sensitive feed host; keep it bounded.
pub const MAX_WORKERS: usize = 8;

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Index page to resolve feed URLs from.
    pub index_url: String,
    /// Directory holding one cached file per feed URL.
    pub cache_dir: PathBuf,
    /// Bypass the freshness check and always refetch.
    pub force_refresh: bool,
    /// Restrict the scan to IPv4-only feeds.
    pub ipv4_only: bool,
    /// Emit per-feed traces and per-result matched-subnet detail.
    pub verbose: bool,
    /// Concurrent feed fetches.
    pub workers: usize,
    /// Staleness threshold for cached content.
    pub cache_max_age: Duration,
    /// Timeout for a single HTTP request.
    pub fetch_timeout: Duration,
}

impl Config {
    /// Build the configuration from parsed CLI flags.
    ///
    /// `EDL_INDEX_URL` and `EDL_CACHE_DIR` override the compiled-in
    /// defaults; a `.env` file is honored when main has loaded it.
    pub fn from_args(args: &CliArgs) -> Config {
        Config {
            index_url: env::var("EDL_INDEX_URL").unwrap_or_else(|_| DEFAULT_INDEX_URL.to_string()),
            cache_dir: env::var("EDL_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR)),
            force_refresh: args.force,
            ipv4_only: args.ipv4_only,
            verbose: args.verbose,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            index_url: DEFAULT_INDEX_URL.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            force_refresh: false,
            ipv4_only: false,
            verbose: false,
            workers: MAX_WORKERS,
            cache_max_age: CACHE_MAX_AGE,
            fetch_timeout: FETCH_TIMEOUT,
        }
    }
}
