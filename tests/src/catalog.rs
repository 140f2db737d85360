use cloudrange_common::{ManifestFault, RangeError, Source};
use cloudrange_core::catalog::Catalog;

use crate::fixtures;

#[test]
fn full_load_counts_and_order() {
    let catalog = Catalog::load(&fixtures::store(), &Source::ALL).unwrap();

    // azure: 2 + 1 (global tag dropped), amazon: 3, google: 2, oracle: 2
    assert_eq!(catalog.len(), 10);

    let sources: Vec<Source> = catalog.iter().map(|r| r.source).collect();
    assert_eq!(
        sources,
        vec![
            Source::Azure,
            Source::Azure,
            Source::Azure,
            Source::Amazon,
            Source::Amazon,
            Source::Amazon,
            Source::Google,
            Source::Google,
            Source::Oracle,
            Source::Oracle,
        ]
    );
}

#[test]
fn overlapping_prefix_resolves_to_earlier_provider() {
    let catalog = Catalog::load(&fixtures::store(), &Source::ALL).unwrap();

    // 52.239.152.0/22 (azure) and 52.239.152.0/24 (amazon) both contain it
    let hit = catalog.search("52.239.152.10").unwrap();
    assert_eq!(hit.source, Source::Azure);
    assert_eq!(hit.service, "AzureStorage");

    let reordered = Catalog::load(
        &fixtures::store(),
        &[Source::Amazon, Source::Azure, Source::Google, Source::Oracle],
    )
    .unwrap();
    assert_eq!(reordered.search("52.239.152.10").unwrap().source, Source::Amazon);
}

#[test]
fn global_azure_tags_never_match() {
    let catalog = Catalog::load(&fixtures::store(), &Source::ALL).unwrap();
    assert!(catalog.search("13.64.0.1").is_none());
}

#[test]
fn search_across_providers() {
    let catalog = Catalog::load(&fixtures::store(), &Source::ALL).unwrap();

    let google = catalog.search("34.77.200.1").unwrap();
    assert_eq!(google.source, Source::Google);
    assert_eq!(google.region_normalized(), "eu-west");

    let oracle = catalog.search("150.230.63.255").unwrap();
    assert_eq!(oracle.source, Source::Oracle);
    assert_eq!(oracle.region_normalized(), "sa-bogota");

    assert!(catalog.search("150.230.64.0").is_none());
    assert!(catalog.search("8.8.8.8").is_none());
    assert!(catalog.search("not-an-ip").is_none());
}

#[test]
fn corrupt_manifest_aborts_the_whole_load() {
    let store = fixtures::store().with(Source::Google, r#"{"prefixes": [{"ipv4Prefix": "34.76.0.0/14"}, {"ipv4Prefix": "34.76.0/14"}]}"#);

    match Catalog::load(&store, &Source::ALL) {
        Err(RangeError::MalformedManifest { provider, fault }) => {
            assert_eq!(provider, Source::Google);
            assert!(matches!(fault, ManifestFault::Prefix(_)));
        }
        other => panic!("expected malformed google manifest, got {other:?}"),
    }
}

#[test]
fn truncated_json_aborts_the_whole_load() {
    let store = fixtures::store().with(Source::Oracle, &fixtures::ORACLE[..40]);
    let err = Catalog::load(&store, &Source::ALL).unwrap_err();
    assert!(matches!(
        err,
        RangeError::MalformedManifest { provider: Source::Oracle, fault: ManifestFault::Json(_) }
    ));
}
