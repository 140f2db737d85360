//! # Range Catalog
//!
//! The in-memory list of every loaded range, in provider load order.
//!
//! The catalog is built once, by appending each provider's ranges in turn,
//! and is read-only afterwards. Queries are a linear scan that stops at the
//! first containing range.

use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};

use cloudrange_common::{Range, RangeEntry, RangeError, Source};
use tracing::{debug, info};

use crate::providers;
use crate::store::ManifestStore;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    ranges: Vec<Range>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every provider in `order` from `store` and concatenates the results.
    ///
    /// Any provider that cannot be opened or parsed fails the whole load; no
    /// partial catalog is returned.
    pub fn load(store: &dyn ManifestStore, order: &[Source]) -> Result<Self, RangeError> {
        let mut catalog = Catalog::new();

        for &source in order {
            let reader = store.open(source)?;
            let ranges = providers::parse_manifest(source, reader)?;
            debug!(source = %source, ranges = ranges.len(), "appending to catalog");
            catalog.extend(ranges);
        }

        info!("Catalog holds {} ranges", catalog.len());
        Ok(catalog)
    }

    /// Build-time append. Ranges keep their relative order.
    pub fn extend(&mut self, ranges: impl IntoIterator<Item = Range>) {
        self.ranges.extend(ranges);
    }

    /// Finds the range containing `candidate`, a literal address string.
    ///
    /// This is first-match, not longest-prefix: when ranges overlap, the one
    /// loaded earlier wins even if a later one is more specific. Input that is
    /// not an IP address, or is IPv6, is a miss rather than an error.
    /// IPv4-mapped IPv6 (`::ffff:a.b.c.d`) is looked up as its IPv4 address.
    pub fn search(&self, candidate: &str) -> Option<&Range> {
        let addr = candidate.parse::<IpAddr>().ok()?;
        self.search_addr(addr)
    }

    pub fn search_addr(&self, addr: IpAddr) -> Option<&Range> {
        let v4: Ipv4Addr = match addr {
            IpAddr::V4(v4) => v4,
            IpAddr::V6(v6) => v6.to_ipv4_mapped()?,
        };

        self.ranges.iter().find(|range| range.contains_v4(v4))
    }

    /// Like [`Catalog::search`], pairing the hit with the query string.
    pub fn lookup<'a>(&'a self, candidate: &str) -> Option<RangeEntry<'a>> {
        self.search(candidate)
            .map(|range| RangeEntry::new(candidate, range))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of ranges per provider.
    pub fn summary(&self) -> BTreeMap<Source, usize> {
        let mut counts = BTreeMap::new();
        for range in &self.ranges {
            *counts.entry(range.source).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<Range> for Catalog {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
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
