//! Subnet matching logic.
//!
//! Pure comparison of parsed feed entries against target subnets:
//! - [`parse_network_entry`] - one feed line to an IP network
//! - [`match_feed_content`] - full feed body to the set of matched targets

mod matcher;

// Re-export public types
pub use matcher::{match_feed_content, parse_network_entry};
