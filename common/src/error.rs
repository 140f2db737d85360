//! # Error Model
//!
//! Every fallible operation in the library crates returns [`RangeError`].
//! None of the variants are recoverable where they are raised; they travel up
//! to the binary, which turns them into a diagnostic and a non-zero exit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::network::range::Source;

#[derive(Debug, Error)]
pub enum RangeError {
    /// An IPv6 address or network reached code that only handles IPv4.
    #[error("unsupported address family: {addr} is not IPv4")]
    UnsupportedAddressFamily { addr: String },

    /// A CIDR string could not be read as `<address>/<length>`.
    #[error("malformed CIDR '{cidr}': {reason}")]
    MalformedCidr { cidr: String, reason: String },

    /// A provider manifest failed to decode, or carried a prefix that is not IPv4.
    #[error("malformed {provider} manifest")]
    MalformedManifest {
        provider: Source,
        #[source]
        fault: ManifestFault,
    },

    /// The manifest stream could not be opened or read.
    #[error("manifest {} is unavailable", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a manifest was rejected.
#[derive(Debug, Error)]
pub enum ManifestFault {
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Prefix(Box<RangeError>),
}

impl RangeError {
    pub fn manifest(provider: Source, fault: impl Into<ManifestFault>) -> Self {
        RangeError::MalformedManifest {
            provider,
            fault: fault.into(),
        }
    }

    pub fn unsupported(addr: impl ToString) -> Self {
        RangeError::UnsupportedAddressFamily {
            addr: addr.to_string(),
        }
    }
}

impl From<RangeError> for ManifestFault {
    fn from(err: RangeError) -> Self {
        ManifestFault::Prefix(Box::new(err))
    }
}
