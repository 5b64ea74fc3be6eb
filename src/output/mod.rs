//! Output formatting for scan results.
//!
//! - [`print_match_summary`] - the summary block printed after a scan
//! - [`ScanSummary`] - run-level counts shown alongside the results

mod terminal;

// Re-export public types
pub use terminal::{format_matched_subnets, print_match_summary, ScanSummary};
