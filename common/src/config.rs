use std::path::{Path, PathBuf};

use crate::network::range::Source;

/// Where each provider's manifest is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    pub azure: PathBuf,
    pub amazon: PathBuf,
    pub google: PathBuf,
    pub oracle: PathBuf,
}

impl ManifestPaths {
    /// Conventional file names (`azure-ranges.json`, `aws-ranges.json`, ...)
    /// inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            azure: dir.join(Source::Azure.default_file_name()),
            amazon: dir.join(Source::Amazon.default_file_name()),
            google: dir.join(Source::Google.default_file_name()),
            oracle: dir.join(Source::Oracle.default_file_name()),
        }
    }

    pub fn path_for(&self, source: Source) -> &Path {
        match source {
            Source::Azure => &self.azure,
            Source::Amazon => &self.amazon,
            Source::Google => &self.google,
            Source::Oracle => &self.oracle,
        }
    }

    pub fn set(&mut self, source: Source, path: PathBuf) {
        match source {
            Source::Azure => self.azure = path,
            Source::Amazon => self.amazon = path,
            Source::Google => self.google = path,
            Source::Oracle => self.oracle = path,
        }
    }
}

impl Default for ManifestPaths {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

pub struct Config {
    pub manifests: ManifestPaths,
    /// Providers to load, in catalog order.
    ///
    /// Order decides which range wins when prefixes overlap, since search
    /// returns the first match.
    pub order: Vec<Source>,
    /// 0 = normal, 1 = warnings and errors only, 2+ = errors only.
    pub quiet: u8,
    /// 0 = info, 1 = debug, 2+ = trace.
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifests: ManifestPaths::default(),
            order: Source::ALL.to_vec(),
            quiet: 0,
            verbose: 0,
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
