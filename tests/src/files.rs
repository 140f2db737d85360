use std::fs;
use std::path::PathBuf;

use cloudrange_common::config::ManifestPaths;
use cloudrange_common::{RangeError, Source};
use cloudrange_core::catalog::Catalog;
use cloudrange_core::store::FileStore;

use crate::fixtures;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cloudrange-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn loads_default_file_names_from_a_directory() -> anyhow::Result<()> {
    let dir = scratch_dir("defaults");
    fs::write(dir.join("azure-ranges.json"), fixtures::AZURE)?;
    fs::write(dir.join("aws-ranges.json"), fixtures::AMAZON)?;
    fs::write(dir.join("goog-ranges.json"), fixtures::GOOGLE)?;
    fs::write(dir.join("oracle-ranges.json"), fixtures::ORACLE)?;

    let store = FileStore::new(ManifestPaths::in_dir(&dir));
    let catalog = Catalog::load(&store, &Source::ALL)?;
    assert_eq!(catalog.len(), 10);

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn missing_file_is_resource_unavailable() {
    let dir = scratch_dir("missing");
    fs::write(dir.join("azure-ranges.json"), fixtures::AZURE).unwrap();

    let store = FileStore::new(ManifestPaths::in_dir(&dir));
    match Catalog::load(&store, &Source::ALL) {
        Err(RangeError::ResourceUnavailable { path, .. }) => {
            assert_eq!(path, dir.join("aws-ranges.json"));
        }
        other => panic!("expected missing amazon manifest, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn per_provider_path_override() -> anyhow::Result<()> {
    let dir = scratch_dir("override");
    let custom = dir.join("oci.json");
    fs::write(&custom, fixtures::ORACLE)?;

    let mut paths = ManifestPaths::in_dir(&dir);
    paths.set(Source::Oracle, custom);

    let catalog = Catalog::load(&FileStore::new(paths), &[Source::Oracle])?;
    assert_eq!(catalog.len(), 2);
    assert!(catalog.iter().all(|r| r.source == Source::Oracle));

    fs::remove_dir_all(&dir)?;
    Ok(())
}
