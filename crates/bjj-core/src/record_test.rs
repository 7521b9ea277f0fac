use super::*;

fn class_ids() -> ReferenceIds {
    ReferenceIds::from_rows(
        ReferenceKind::Class,
        vec![
            (5, "Monday 6:15 PM BJJ Techniques".to_string()),
            (6, "Monday 7:30PM Open Mat".to_string()),
        ],
    )
    .unwrap()
}

fn sheet_row(date: &str, class: &str, position1: &str, move1: &str) -> RawRecord {
    RawRecord::from_pairs(&[
        ("Date", date),
        ("Class", class),
        ("Notes", ""),
        ("Position 1", position1),
        ("Position 2", ""),
        ("Position 3", ""),
        ("Move 1", move1),
        ("Move 2", ""),
        ("Move 3", ""),
        ("Move 4", ""),
    ])
}

#[test]
fn test_normalize_column_name() {
    assert_eq!(normalize_column_name("Date"), "date");
    assert_eq!(normalize_column_name("Position 1"), "position1");
    assert_eq!(normalize_column_name("  Move #4 "), "move4");
    assert_eq!(normalize_column_name("class_id"), "class_id");
    assert_eq!(normalize_column_name("Class (Name)"), "classname");
}

#[test]
fn test_parse_session_date_formats() {
    let expected = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
    assert_eq!(parse_session_date("2023-01-31"), Some(expected));
    assert_eq!(parse_session_date("1/31/2023"), Some(expected));
    assert_eq!(parse_session_date("01/31/2023"), Some(expected));
    assert_eq!(parse_session_date("31.01.2023"), None);
    assert_eq!(parse_session_date(""), None);
}

#[test]
fn test_parse_session_date_rejects_short_years() {
    assert_eq!(parse_session_date("1/3/23"), None);
    assert_eq!(parse_session_date("23-01-03"), None);
    assert_eq!(parse_session_date("+2023-01-03"), None);
    assert_eq!(parse_session_date("1/3/20233"), None);
}

#[test]
fn test_normalize_two_digit_year_is_invalid() {
    let raw = vec![sheet_row("1/3/23", "Monday 7:30PM Open Mat", "", "")];
    let err = normalize_records(&raw).unwrap_err();
    match err {
        CoreError::InvalidRecord { row, message } => {
            assert_eq!(row, 1);
            assert!(message.contains("1/3/23"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_normalize_blank_cells_become_none() {
    let raw = vec![sheet_row("2023-01-01", "Monday 7:30PM Open Mat", "Closed Guard", "")];
    let records = normalize_records(&raw).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.class, "Monday 7:30PM Open Mat");
    assert_eq!(record.notes, None);
    assert_eq!(
        record.positions,
        [Some("Closed Guard".to_string()), None, None]
    );
    assert_eq!(record.moves, [None, None, None, None]);
}

#[test]
fn test_normalize_keeps_text_verbatim() {
    let raw = vec![RawRecord::from_pairs(&[
        ("date", "2023-02-01"),
        ("class", "Monday 7:30PM Open Mat"),
        ("notes", " rolled 5 rounds "),
    ])];
    let records = normalize_records(&raw).unwrap();
    assert_eq!(records[0].notes.as_deref(), Some(" rolled 5 rounds "));
}

#[test]
fn test_normalize_tolerates_missing_slot_columns() {
    let raw = vec![RawRecord::from_pairs(&[
        ("date", "2023-02-01"),
        ("class", "Monday 7:30PM Open Mat"),
    ])];
    let records = normalize_records(&raw).unwrap();
    assert_eq!(records[0].positions, [None, None, None]);
    assert_eq!(records[0].moves, [None, None, None, None]);
    assert_eq!(records[0].notes, None);
}

#[test]
fn test_normalize_missing_required_column() {
    let raw = vec![RawRecord::from_pairs(&[("date", "2023-02-01")])];
    let err = normalize_records(&raw).unwrap_err();
    assert!(matches!(err, CoreError::MissingColumn { ref column } if column == "class"));
}

#[test]
fn test_normalize_bad_date_reports_row() {
    let raw = vec![
        sheet_row("2023-01-01", "Monday 7:30PM Open Mat", "", ""),
        sheet_row("someday", "Monday 7:30PM Open Mat", "", ""),
    ];
    let err = normalize_records(&raw).unwrap_err();
    match err {
        CoreError::InvalidRecord { row, message } => {
            assert_eq!(row, 2);
            assert!(message.contains("someday"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_normalize_blank_class_is_invalid() {
    let raw = vec![sheet_row("2023-01-01", "", "", "")];
    let err = normalize_records(&raw).unwrap_err();
    assert!(matches!(err, CoreError::InvalidRecord { row: 1, .. }));
}

#[test]
fn test_normalize_empty_input() {
    assert!(normalize_records(&[]).unwrap().is_empty());
}

#[test]
fn test_attach_class_ids() {
    let raw = vec![
        sheet_row("2023-01-01", "Monday 6:15 PM BJJ Techniques", "", ""),
        sheet_row("2023-01-02", "Monday 7:30PM Open Mat", "", ""),
    ];
    let records = attach_class_ids(normalize_records(&raw).unwrap(), &class_ids()).unwrap();
    assert_eq!(records[0].class_id, 5);
    assert_eq!(records[1].class_id, 6);
    assert_eq!(records[1].class, "Monday 7:30PM Open Mat");
}

#[test]
fn test_attach_class_ids_reports_all_unknown_classes() {
    let raw = vec![
        sheet_row("2023-01-01", "Friday Fight Club", "", ""),
        sheet_row("2023-01-02", "Monday 7:30PM Open Mat", "", ""),
        sheet_row("2023-01-03", "Competition Class", "", ""),
    ];
    let err = attach_class_ids(normalize_records(&raw).unwrap(), &class_ids()).unwrap_err();
    match err {
        CoreError::MissingReference { table, names } => {
            assert_eq!(table, "class");
            assert_eq!(names, vec!["Competition Class", "Friday Fight Club"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_attach_class_ids_requires_class_table() {
    let positions = ReferenceIds::from_rows(ReferenceKind::Position, vec![]).unwrap();
    let err = attach_class_ids(vec![], &positions).unwrap_err();
    assert!(matches!(err, CoreError::InvalidTableKind { .. }));
}

#[test]
fn test_ingested_record_slots() {
    let raw = vec![sheet_row("2023-01-01", "Monday 7:30PM Open Mat", "Half Guard", "Kimura")];
    let records = attach_class_ids(normalize_records(&raw).unwrap(), &class_ids()).unwrap();
    assert_eq!(records[0].slots(SkillKind::Position).len(), 3);
    assert_eq!(records[0].slots(SkillKind::Move).len(), 4);
    assert_eq!(records[0].slots(SkillKind::Move)[0].as_deref(), Some("Kimura"));
}
