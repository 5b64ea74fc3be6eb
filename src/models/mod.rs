//! Domain models for the EDL scanner.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`TargetSubnet`] - a caller-supplied subnet to look for
//! - [`MatchResult`] - per-feed outcome with classification and provenance

mod result;
mod target;

// Re-export public types
pub use result::{MatchKind, MatchResult, Provenance};
pub use target::{parse_network_literal, parse_targets, TargetSubnet};
