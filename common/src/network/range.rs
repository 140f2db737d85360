//! # Canonical Range Model
//!
//! A [`Range`] is one block of address space published by a cloud provider,
//! reduced to the fields every provider can fill in. Region normalization and
//! the integer endpoints are derived on demand and never stored.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use ipnetwork::{IpNetwork, Ipv4Network};
use serde::Serialize;

use crate::error::RangeError;
use crate::network::cidr::{self, Ipv4Range};
use crate::region;

/// Cloud provider a range was published by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Source {
    Azure,
    Amazon,
    Google,
    Oracle,
}

impl Source {
    /// Concatenation order of the reference catalog.
    pub const ALL: [Source; 4] = [Source::Azure, Source::Amazon, Source::Google, Source::Oracle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Azure => "AZURE",
            Source::Amazon => "AMAZON",
            Source::Google => "GOOGLE",
            Source::Oracle => "ORACLE",
        }
    }

    /// File name the provider's manifest is conventionally saved under.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Source::Azure => "azure-ranges.json",
            Source::Amazon => "aws-ranges.json",
            Source::Google => "goog-ranges.json",
            Source::Oracle => "oracle-ranges.json",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    /// Accepts the canonical tags case-insensitively, plus the usual short names
    /// ("aws", "gcp", "oci").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "azure" => Ok(Source::Azure),
            "amazon" | "aws" => Ok(Source::Amazon),
            "google" | "gcp" => Ok(Source::Google),
            "oracle" | "oci" => Ok(Source::Oracle),
            _ => Err(format!("unknown provider: {s}")),
        }
    }
}

/// One published block of provider address space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub source: Source,
    pub service: String,
    pub region: String,
    prefix: Ipv4Network,
}

impl Range {
    /// Builds a range from an already-parsed network.
    ///
    /// IPv6 networks are refused. Host bits in an IPv4 network are cleared.
    pub fn new(
        source: Source,
        service: impl Into<String>,
        region: impl Into<String>,
        prefix: IpNetwork,
    ) -> Result<Self, RangeError> {
        let IpNetwork::V4(v4) = prefix else {
            return Err(RangeError::unsupported(prefix));
        };
        let prefix = Ipv4Network::new(v4.network(), v4.prefix()).map_err(|e| {
            RangeError::MalformedCidr {
                cidr: v4.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            source,
            service: service.into(),
            region: region.into(),
            prefix,
        })
    }

    /// Builds a range straight from a manifest's CIDR string.
    pub fn from_cidr(
        source: Source,
        service: impl Into<String>,
        region: impl Into<String>,
        cidr: &str,
    ) -> Result<Self, RangeError> {
        let prefix = cidr::parse_ipv4_prefix(cidr)?;
        Self::new(source, service, region, IpNetwork::V4(prefix))
    }

    pub fn prefix(&self) -> Ipv4Network {
        self.prefix
    }

    pub fn bounds(&self) -> Ipv4Range {
        Ipv4Range::of(self.prefix)
    }

    /// First address of the prefix as an integer.
    pub fn start(&self) -> u32 {
        self.bounds().start()
    }

    /// Last address of the prefix as an integer, inclusive.
    pub fn end(&self) -> u32 {
        self.bounds().end()
    }

    pub fn region_normalized(&self) -> String {
        region::normalize(&self.region)
    }

    /// IPv6 addresses are never contained.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match addr {
            IpAddr::V4(v4) => self.contains_v4(v4),
            IpAddr::V6(_) => false,
        }
    }

    pub fn contains_v4(&self, addr: Ipv4Addr) -> bool {
        self.prefix.contains(addr)
    }
}

/// A literal query string and the range it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry<'a> {
    pub input_ip: String,
    pub range: &'a Range,
}

impl<'a> RangeEntry<'a> {
    pub fn new(input_ip: impl Into<String>, range: &'a Range) -> Self {
        Self {
            input_ip: input_ip.into(),
            range,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
