//! Target subnet parsing and canonical form.
//!
//! Targets arrive once from the command line as a comma-separated list and
//! are read-only afterwards. Both IP versions are accepted; a bare address
//! counts as a host network (/32 or /128).

use crate::error::{EdlError, NetworkParseError};
use ipnet::IpNet;
use std::fmt;
use std::net::IpAddr;

/// One subnet the caller wants to locate in the published feeds.
///
/// Construction from an [`IpNet`] truncates to the canonical form; the
/// string parsers below instead reject host bits outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSubnet {
    net: IpNet,
}

impl TargetSubnet {
    /// The network itself.
    pub fn net(&self) -> IpNet {
        self.net
    }

    /// Canonical `address/prefix` string.
    ///
    /// Match accounting is keyed on this string, which is why duplicate
    /// identical targets under-count toward a FULL classification (see
    /// [`parse_targets`]).
    pub fn canonical(&self) -> String {
        self.net.to_string()
    }
}

impl From<IpNet> for TargetSubnet {
    fn from(net: IpNet) -> Self {
        TargetSubnet { net: net.trunc() }
    }
}

impl fmt::Display for TargetSubnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.net)
    }
}

/// Parse a network literal: CIDR notation of either version, or a bare
/// address treated as a host network.
///
/// CIDR segments must be canonical: `10.1.2.3/16` is rejected with
/// [`NetworkParseError::HostBits`] rather than truncated to `10.1.0.0/16`.
/// A bare address always names its own host network and cannot trip this.
pub fn parse_network_literal(s: &str) -> Result<IpNet, NetworkParseError> {
    let net = match s.parse::<IpNet>() {
        Ok(net) => net,
        // No '/' in the segment: fall back to a bare address. Keep the
        // original CIDR parse error if that fails too.
        Err(e) => s.parse::<IpAddr>().map(IpNet::from).map_err(|_| e)?,
    };
    if net != net.trunc() {
        return Err(NetworkParseError::HostBits {
            canonical: net.trunc(),
        });
    }
    Ok(net)
}

/// Split a comma-separated subnet list into targets.
///
/// Segments are trimmed and empty ones dropped; the rest are parsed in
/// input order. The first malformed segment fails the whole list with
/// [`EdlError::InvalidSubnet`] naming that segment.
///
/// Duplicate segments are kept as-is. The matched-subnet set downstream is
/// keyed by canonical string, so a duplicated target can never be counted
/// twice and the feed tops out at PARTIAL.
///
/// # Arguments
/// * `input` - the raw `--subnets` value
///
/// # Returns
/// * `Ok(Vec<TargetSubnet>)` - one target per non-empty segment
/// * `Err(EdlError::InvalidSubnet)` - on the first unparsable segment
pub fn parse_targets(input: &str) -> Result<Vec<TargetSubnet>, EdlError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            parse_network_literal(s)
                .map(TargetSubnet::from)
                .map_err(|source| EdlError::InvalidSubnet {
                    input: s.to_string(),
                    source,
                })
        })
        .collect()
}
