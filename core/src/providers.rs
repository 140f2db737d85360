//! The common **abstraction** over provider manifest formats.
//!
//! Every cloud publishes its address space in a different JSON shape. Each
//! submodule describes one shape as a `serde` model and implements
//! [`ManifestParser`] to flatten it into canonical [`Range`]s. The decode,
//! error wrapping and logging skeleton lives once, in [`ManifestParser::parse`].
//!
//! Callers that only know the provider at runtime go through
//! [`parse_manifest`].

use std::io::Read;

use cloudrange_common::{Range, RangeError, Source};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

pub mod amazon;
pub mod azure;
pub mod google;
pub mod oracle;

pub use amazon::Amazon;
pub use azure::Azure;
pub use google::Google;
pub use oracle::Oracle;

pub trait ManifestParser {
    /// Provider tag stamped on every emitted range.
    const SOURCE: Source;

    /// `serde` model of the provider's manifest document.
    type Manifest: DeserializeOwned + Default;

    /// Flattens a decoded manifest into ranges, in document order.
    ///
    /// The first prefix that is not a valid IPv4 CIDR aborts the whole
    /// conversion; nothing produced before it is returned.
    fn into_ranges(manifest: Self::Manifest) -> Result<Vec<Range>, RangeError>;

    /// Logs whatever bookkeeping the manifest carries (sync token, dates).
    fn log_metadata(_manifest: &Self::Manifest) {}

    /// Decodes one manifest stream into ranges.
    ///
    /// Only the first JSON document in the stream is read; anything after it
    /// is ignored. Both JSON errors and bad prefixes are reported as
    /// [`RangeError::MalformedManifest`] for [`Self::SOURCE`].
    fn parse<R: Read>(reader: R) -> Result<Vec<Range>, RangeError> {
        let manifest: Self::Manifest =
            first_document(reader).map_err(|e| RangeError::manifest(Self::SOURCE, e))?;

        Self::log_metadata(&manifest);

        let ranges =
            Self::into_ranges(manifest).map_err(|e| RangeError::manifest(Self::SOURCE, e))?;

        debug!(source = %Self::SOURCE, ranges = ranges.len(), "manifest parsed");
        Ok(ranges)
    }
}

/// Runtime dispatch to the parser for `source`.
pub fn parse_manifest<R: Read>(source: Source, reader: R) -> Result<Vec<Range>, RangeError> {
    match source {
        Source::Azure => Azure::parse(reader),
        Source::Amazon => Amazon::parse(reader),
        Source::Google => Google::parse(reader),
        Source::Oracle => Oracle::parse(reader),
    }
}

/// Decodes the first JSON document of `reader` as a manifest.
///
/// A top-level `null` is an empty manifest. Any other non-object document is
/// rejected here, since derived models with `#[serde(default)]` would
/// otherwise accept an array.
fn first_document<M, R>(reader: R) -> Result<M, serde_json::Error>
where
    M: DeserializeOwned + Default,
    R: Read,
{
    let document = serde_json::Deserializer::from_reader(reader)
        .into_iter::<Value>()
        .next()
        .unwrap_or_else(|| Err(de::Error::custom("manifest is empty")))?;

    match document {
        Value::Null => Ok(M::default()),
        Value::Object(_) => serde_json::from_value(document),
        Value::Array(_) => Err(de::Error::invalid_type(de::Unexpected::Seq, &"a manifest object")),
        Value::Bool(b) => Err(de::Error::invalid_type(de::Unexpected::Bool(b), &"a manifest object")),
        Value::Number(_) => Err(de::Error::invalid_type(de::Unexpected::Other("number"), &"a manifest object")),
        Value::String(s) => Err(de::Error::invalid_type(de::Unexpected::Str(&s), &"a manifest object")),
    }
}

/// Reads an explicit `null` as the field's default, the same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// List counterpart of [`null_as_default`]: a `null` list is empty and a
/// `null` item is the item's default.
pub(crate) fn null_list_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
