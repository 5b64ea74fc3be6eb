//! Error types for the EDL scanner.
//!
//! [`EdlError::InvalidSubnet`] and [`EdlError::Client`] abort the run;
//! every other variant is a per-feed failure that the scan orchestrator
//! logs and skips.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single network literal was rejected.
#[derive(Debug, Error)]
pub enum NetworkParseError {
    /// Not parsable as CIDR notation or as a bare address.
    #[error(transparent)]
    Invalid(#[from] ipnet::AddrParseError),

    /// Parses as CIDR but has host bits set below the prefix.
    #[error("host bits set (expected {canonical})")]
    HostBits { canonical: ipnet::IpNet },
}

/// Errors produced while parsing targets, fetching feeds, or touching the cache.
#[derive(Debug, Error)]
pub enum EdlError {
    /// A segment of the `--subnets` list is not a valid IP network.
    ///
    /// This aborts the run before any feed is fetched.
    #[error("invalid subnet {input:?} in subnet list: {source}")]
    InvalidSubnet {
        input: String,
        source: NetworkParseError,
    },

    /// Building the shared HTTP client failed.
    #[error("failed to build HTTP client: {source}")]
    Client { source: reqwest::Error },

    /// A network-level failure while requesting a URL (DNS, connect, timeout).
    #[error("request for {url} failed: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    /// The remote answered with something other than HTTP 200.
    #[error("unexpected HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Reading or writing a cache entry failed.
    #[error("cache I/O on {}: {source}", .path.display())]
    CacheIo {
        path: PathBuf,
        source: std::io::Error,
    },
}
