//! Command line interface definition.

use clap::Parser;

/// Scan the Palo Alto Networks EDL hosting service for target subnets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Comma-separated list of subnets to search for, CIDR or bare address
    #[arg(short = 's', long = "subnets")]
    pub subnets: String,

    /// Re-download every feed, ignoring cached copies
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Only scan feeds that publish IPv4 entries
    #[arg(short = '4', long = "ipv4-only")]
    pub ipv4_only: bool,

    /// Show per-feed traces and matched subnets per result
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
