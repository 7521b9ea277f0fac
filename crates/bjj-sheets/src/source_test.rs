use super::*;
use bjj_core::config::SourceConfig;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn pairs_header_with_cells() {
    let records = records_from_rows(vec![
        row(&["Date", "Class", "Notes"]),
        row(&["2023-01-01", "Monday 10:00 AM BJJ Techniques", "good"]),
    ]);
    assert_eq!(
        records,
        vec![RawRecord::from_pairs(&[
            ("Date", "2023-01-01"),
            ("Class", "Monday 10:00 AM BJJ Techniques"),
            ("Notes", "good"),
        ])]
    );
}

#[test]
fn short_rows_are_padded_and_long_rows_truncated() {
    let records = records_from_rows(vec![
        row(&["date", "class", "position1", "position2"]),
        row(&["2023-01-01", "X"]),
        row(&["2023-01-02", "Y", "Closed Guard", "", "extra"]),
    ]);
    assert_eq!(records[0].get("position1"), Some(""));
    assert_eq!(records[0].get("position2"), Some(""));
    assert_eq!(records[1].len(), 4);
    assert_eq!(records[1].get("position1"), Some("Closed Guard"));
}

#[test]
fn blank_rows_are_skipped() {
    let records = records_from_rows(vec![
        row(&["date", "class"]),
        row(&["", " "]),
        row(&[]),
        row(&["2023-01-01", "X"]),
    ]);
    assert_eq!(records.len(), 1);
}

#[test]
fn no_rows_means_no_records() {
    assert!(records_from_rows(Vec::<Vec<String>>::new()).is_empty());
    assert!(records_from_rows(vec![row(&["date", "class"])]).is_empty());
}

#[test]
fn default_config_selects_csv_source() {
    let dir = tempfile::tempdir().unwrap();
    let config = SourceConfig {
        export_dir: dir.path().to_path_buf(),
        ..SourceConfig::default()
    };
    let source = source_from_config(&config);
    let err = source.fetch("Missing", "Sheet").unwrap_err();
    assert!(matches!(err, crate::SheetError::SpreadsheetNotFound { .. }));
}

#[test]
fn google_config_without_token_fails_on_credentials() {
    let config = SourceConfig {
        kind: SourceKind::GoogleSheets,
        credentials: bjj_core::CredentialsConfig::Environment {
            token_env: "BJJ_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
        },
        ..SourceConfig::default()
    };
    let source = source_from_config(&config);
    let err = source.fetch("BJJ Dashboard", "BJJ Total Attendance").unwrap_err();
    assert!(matches!(err, crate::SheetError::Credentials { .. }));
}
