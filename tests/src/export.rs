use std::io::Cursor;

use cloudrange_common::Source;
use cloudrange_core::catalog::Catalog;
use cloudrange_core::export::{export_catalog, lookup_stream};
use serde_json::Value;

use crate::fixtures;

fn parse_lines(out: Vec<u8>) -> Vec<Value> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn export_matches_catalog_order_and_fields() {
    let catalog = Catalog::load(&fixtures::store(), &Source::ALL).unwrap();
    let mut out = Vec::new();
    let stats = export_catalog(&catalog, &mut out).unwrap();
    assert_eq!(stats.written, catalog.len());
    assert_eq!(stats.skipped, 0);

    let records = parse_lines(out);
    assert_eq!(records.len(), catalog.len());

    for (record, range) in records.iter().zip(catalog.iter()) {
        assert_eq!(record["Source"], range.source.as_str());
        assert_eq!(record["Region"], range.region.as_str());
        assert_eq!(record["RegionNorm"], range.region_normalized().as_str());
        assert_eq!(record["Prefix"], range.prefix().to_string().as_str());
        assert_eq!(record["Start"].as_u64(), Some(u64::from(range.start())));
        assert_eq!(record["End"].as_u64(), Some(u64::from(range.end())));
        assert!(range.end() >= range.start());
    }

    let first = &records[0];
    assert_eq!(first["Source"], "AZURE");
    assert_eq!(first["Region"], "westeurope");
    assert_eq!(first["RegionNorm"], "eu-west");
    assert_eq!(first["Prefix"], "13.69.0.0/17");

    let amazon_global = &records[5];
    assert_eq!(amazon_global["Source"], "AMAZON");
    assert_eq!(amazon_global["Region"], "");
    assert_eq!(amazon_global["RegionNorm"], "");
}

#[test]
fn lookup_session() {
    let catalog = Catalog::load(&fixtures::store(), &Source::ALL).unwrap();
    let input = Cursor::new(
        "3.5.141.7\r\n\
         garbage\n\
         \n\
         2600:1f14::1\n\
         130.61.255.255\n\
         35.235.15.1\n\
         10.0.0.1\n",
    );

    let mut out = Vec::new();
    let stats = lookup_stream(&catalog, input, &mut out).unwrap();
    assert_eq!(stats.queries, 7);
    assert_eq!(stats.matched, 3);

    let hits = parse_lines(out);
    let summary: Vec<(&str, &str, &str)> = hits
        .iter()
        .map(|hit| {
            (
                hit["InputIP"].as_str().unwrap(),
                hit["Range"]["Source"].as_str().unwrap(),
                hit["Range"]["RegionNorm"].as_str().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("3.5.141.7", "AMAZON", "ap-northeast"),
            ("130.61.255.255", "ORACLE", "eu-central"),
            ("35.235.15.1", "GOOGLE", "us-west"),
        ]
    );
}
