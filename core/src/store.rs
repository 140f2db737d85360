//! Where manifests come from.
//!
//! The engine never touches the filesystem. It asks a [`ManifestStore`] for a
//! byte stream per provider; the binary supplies a file-backed store and the
//! tests an in-memory one.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::PathBuf;

use cloudrange_common::config::ManifestPaths;
use cloudrange_common::{RangeError, Source};
use tracing::info;

pub trait ManifestStore {
    /// Opens the manifest for `source`.
    ///
    /// A store that cannot supply the stream reports
    /// [`RangeError::ResourceUnavailable`].
    fn open(&self, source: Source) -> Result<Box<dyn Read + '_>, RangeError>;
}

/// Manifests held in memory, keyed by provider.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    manifests: HashMap<Source, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: Source, manifest: impl Into<Vec<u8>>) -> Self {
        self.insert(source, manifest);
        self
    }

    pub fn insert(&mut self, source: Source, manifest: impl Into<Vec<u8>>) {
        self.manifests.insert(source, manifest.into());
    }
}

impl ManifestStore for MemoryStore {
    fn open(&self, source: Source) -> Result<Box<dyn Read + '_>, RangeError> {
        match self.manifests.get(&source) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(RangeError::ResourceUnavailable {
                path: PathBuf::from(source.default_file_name()),
                source: io::Error::new(io::ErrorKind::NotFound, "no manifest registered"),
            }),
        }
    }
}

/// Manifests on disk, one file per provider.
#[derive(Debug, Clone)]
pub struct FileStore {
    paths: ManifestPaths,
}

impl FileStore {
    pub fn new(paths: ManifestPaths) -> Self {
        Self { paths }
    }
}

impl ManifestStore for FileStore {
    fn open(&self, source: Source) -> Result<Box<dyn Read + '_>, RangeError> {
        let path = self.paths.path_for(source);
        let file = File::open(path).map_err(|err| RangeError::ResourceUnavailable {
            path: path.to_path_buf(),
            source: err,
        })?;

        info!("Loading {source} ranges from {}", path.display());
        Ok(Box::new(BufReader::new(file)))
    }
}
