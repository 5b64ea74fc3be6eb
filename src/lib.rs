//! Scan the Palo Alto Networks EDL hosting service for target subnets.
//!
//! The pipeline: resolve feed URLs from the documentation index page, fetch
//! each feed through a 24-hour on-disk cache, parse feed lines as IP
//! networks, and report which feeds fully or partially cover the caller's
//! target subnets.

pub mod cli;
pub mod config;
pub mod error;
pub mod feeds;
pub mod matching;
pub mod models;
pub mod output;
pub mod scan;

// Re-export the types main and integration tests work with
pub use config::Config;
pub use error::{EdlError, NetworkParseError};
pub use feeds::{resolve_feed_urls, FeedCache, HttpTransport, Transport};
pub use models::{parse_targets, MatchKind, MatchResult, Provenance, TargetSubnet};
pub use output::{print_match_summary, ScanSummary};
pub use scan::scan_feeds;
