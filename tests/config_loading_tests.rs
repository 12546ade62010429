//! Integration tests for configuration files and record source loading

use parts_browser::prelude::*;
use std::io::Write;

#[test]
fn test_config_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
source:
  path: /srv/parts/data.json
bind: 0.0.0.0:9000
page_size: 24
title: Bulk order
"#
    )
    .unwrap();

    let config = CatalogConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.source, SourceConfig::path("/srv/parts/data.json"));
    assert_eq!(config.bind, "0.0.0.0:9000");
    assert_eq!(config.page_size, 24);
    assert_eq!(config.title, "Bulk order");
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogConfig::from_yaml_file(dir.path().join("browser.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError { .. }));
}

#[test]
fn test_malformed_config_names_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_size: [not, a, number]").unwrap();

    let err = CatalogConfig::from_yaml_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { file: Some(_), .. }));
}

#[test]
fn test_conflicting_source_rejected() {
    let err = CatalogConfig::from_yaml_str(
        "source:\n  path: data.json\n  url: http://localhost:8000/data.json\n",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[tokio::test]
async fn test_configured_file_source_loads_store() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"element_id": 300121, "description": "BRICK 1X2", "main_group": "Bricks", "sub_group": "Bricks 1 x", "price_cad": 0.15}},
            {{"element_id": "302001", "main_group": null, "price_cad": "0.28", "image_url": ""}}
        ]"#
    )
    .unwrap();

    let config = CatalogConfig {
        source: SourceConfig::path(file.path().display().to_string()),
        ..CatalogConfig::default_config()
    };
    let source = config.source.build().unwrap();
    let store = RecordStore::load(&*source).await.unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].id, "300121");
    assert_eq!(store.records()[1].price_amount, Some(0.28));
    assert_eq!(store.main_groups(), ["Bricks"]);
}

#[tokio::test]
async fn test_custom_page_size_applies_to_sessions() {
    let records = (0..50)
        .map(|i| Record::new(i.to_string(), "", "Bricks", "Bricks 1 x"))
        .collect();
    let config = CatalogConfig {
        page_size: 24,
        ..CatalogConfig::default_config()
    };
    let host = ServerHost::from_store(config, RecordStore::from_records(records)).unwrap();
    let session = host.session(FilterCriteria::none()).unwrap();

    assert_eq!(session.total_pages(), 3);
    assert_eq!(session.view().cards.len(), 24);
}
