//! # IPv4 Boundary Math
//!
//! Turns a network (base address + prefix length) into the inclusive pair of
//! 32-bit endpoints it covers. Only IPv4 is supported; any IPv6 input is
//! rejected with [`RangeError::UnsupportedAddressFamily`] rather than coerced.

use std::net::{IpAddr, Ipv4Addr};

use ipnetwork::{IpNetwork, Ipv4Network};

use crate::error::RangeError;

/// Represents a continuous range of IPv4 addresses, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// The range spanned by an IPv4 network, from its first to its last address.
    pub fn of(network: Ipv4Network) -> Self {
        let (start, end) = bounds(network);
        Self::new(Ipv4Addr::from(start), Ipv4Addr::from(end))
    }

    pub fn start(&self) -> u32 {
        u32::from(self.start_addr)
    }

    pub fn end(&self) -> u32 {
        u32::from(self.end_addr)
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let addr = u32::from(addr);
        self.start() <= addr && addr <= self.end()
    }
}

/// Big-endian integer form of an IPv4 address.
pub fn to_u32(addr: IpAddr) -> Result<u32, RangeError> {
    match addr {
        IpAddr::V4(v4) => Ok(u32::from(v4)),
        IpAddr::V6(_) => Err(RangeError::unsupported(addr)),
    }
}

/// `base & mask`: the network address itself.
pub fn first_address(network: IpNetwork) -> Result<Ipv4Addr, RangeError> {
    let v4 = require_v4(network)?;
    Ok(Ipv4Addr::from(bounds(v4).0))
}

/// `base | !mask`: the broadcast address. A `/0` network ends at 255.255.255.255.
pub fn last_address(network: IpNetwork) -> Result<Ipv4Addr, RangeError> {
    let v4 = require_v4(network)?;
    Ok(Ipv4Addr::from(bounds(v4).1))
}

/// Parses CIDR notation like "192.168.1.0/24" into a normalized IPv4 network.
///
/// Host bits are cleared, so "10.0.0.7/24" yields `10.0.0.0/24`. A bare
/// address without a prefix length is malformed, as is surrounding whitespace
/// or a signed length ("/+24"). An IPv6 network is reported as an
/// unsupported family.
pub fn parse_ipv4_prefix(cidr: &str) -> Result<Ipv4Network, RangeError> {
    let malformed = |reason: String| RangeError::MalformedCidr {
        cidr: cidr.to_string(),
        reason,
    };

    let Some((ip_str, prefix_str)) = cidr.split_once('/') else {
        return Err(malformed("missing prefix length".to_string()));
    };

    let ip = ip_str
        .parse::<IpAddr>()
        .map_err(|e| malformed(format!("invalid address '{ip_str}': {e}")))?;

    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(format!("invalid prefix '{prefix_str}': expected decimal digits")));
    }

    let prefix = prefix_str
        .parse::<u8>()
        .map_err(|e| malformed(format!("invalid prefix '{prefix_str}': {e}")))?;

    let IpAddr::V4(ipv4_addr) = ip else {
        return Err(RangeError::unsupported(cidr));
    };

    let network = Ipv4Network::new(ipv4_addr, prefix).map_err(|e| malformed(e.to_string()))?;
    Ipv4Network::new(network.network(), prefix).map_err(|e| malformed(e.to_string()))
}

fn require_v4(network: IpNetwork) -> Result<Ipv4Network, RangeError> {
    match network {
        IpNetwork::V4(v4) => Ok(v4),
        IpNetwork::V6(_) => Err(RangeError::unsupported(network)),
    }
}

fn bounds(network: Ipv4Network) -> (u32, u32) {
    let base = u32::from(network.ip());
    let mask = u32::from(network.mask());
    (base & mask, base | !mask)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
