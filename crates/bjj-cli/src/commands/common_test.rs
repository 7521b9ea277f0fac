use super::*;
use crate::cli::SourceArg;
use bjj_core::SourceKind;
use std::fs;

fn global(config: Option<&Path>, database: Option<&str>) -> GlobalArgs {
    GlobalArgs {
        verbose: 0,
        config: config.map(Path::to_path_buf),
        database: database.map(str::to_string),
    }
}

#[test]
fn explicit_config_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bjj.yml");
    fs::write(
        &path,
        "database:\n  path: from_file.db\nsource:\n  worksheet: Sheet2\n",
    )
    .unwrap();

    let config = load_config(&global(Some(&path), None)).unwrap();
    assert_eq!(config.database.path, "from_file.db");
    assert_eq!(config.source.worksheet, "Sheet2");
}

#[test]
fn database_flag_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bjj.yml");
    fs::write(&path, "database:\n  path: from_file.db\n").unwrap();

    let config = load_config(&global(Some(&path), Some(":memory:"))).unwrap();
    assert_eq!(config.database.path, ":memory:");
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&global(Some(&dir.path().join("nope.yml")), None)).unwrap_err();
    assert!(err.to_string().contains("Failed to load config"));
}

#[test]
fn ingest_overrides_apply() {
    let mut config = Config::default();
    let args = IngestArgs {
        source: Some(SourceArg::GoogleSheets),
        export_dir: Some("elsewhere".into()),
        spreadsheet: Some("Log".to_string()),
        worksheet: None,
    };
    apply_ingest_overrides(&mut config, &args).unwrap();
    assert_eq!(config.source.kind, SourceKind::GoogleSheets);
    assert_eq!(config.source.export_dir, Path::new("elsewhere"));
    assert_eq!(config.source.spreadsheet, "Log");
    assert_eq!(config.source.worksheet, bjj_core::config::DEFAULT_WORKSHEET);
}

#[test]
fn blank_override_is_rejected() {
    let mut config = Config::default();
    let args = IngestArgs {
        spreadsheet: Some(String::new()),
        ..IngestArgs::default()
    };
    assert!(apply_ingest_overrides(&mut config, &args).is_err());
}

#[test]
fn open_database_in_memory() {
    let mut config = Config::default();
    config.database.path = ":memory:".to_string();
    let db = open_database(&config).unwrap();
    assert!(db.schema_version().unwrap() >= 1);
}
