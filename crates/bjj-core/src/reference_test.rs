use super::*;

fn positions() -> ReferenceIds {
    ReferenceIds::from_rows(
        ReferenceKind::Position,
        vec![
            (4, "Closed Guard".to_string()),
            (8, "Half Guard".to_string()),
            (12, "Other".to_string()),
        ],
    )
    .unwrap()
}

#[test]
fn test_reference_kind_from_str() {
    assert_eq!("class".parse::<ReferenceKind>().unwrap(), ReferenceKind::Class);
    assert_eq!(
        "position".parse::<ReferenceKind>().unwrap(),
        ReferenceKind::Position
    );
    assert_eq!("move".parse::<ReferenceKind>().unwrap(), ReferenceKind::Move);
}

#[test]
fn test_reference_kind_rejects_fact_tables() {
    let err = "class_attendance".parse::<ReferenceKind>().unwrap_err();
    assert!(matches!(err, CoreError::InvalidTableKind { ref table } if table == "class_attendance"));
    assert!(err.to_string().contains("[E005]"));
}

#[test]
fn test_reference_kind_is_case_sensitive() {
    assert!("Class".parse::<ReferenceKind>().is_err());
}

#[test]
fn test_id_column() {
    assert_eq!(ReferenceKind::Class.id_column(), "class_id");
    assert_eq!(ReferenceKind::Position.id_column(), "position_id");
    assert_eq!(ReferenceKind::Move.id_column(), "move_id");
}

#[test]
fn test_resolve_known_names() {
    let ids = positions();
    let resolved = ids.resolve(["Closed Guard", "Half Guard", "Closed Guard"]).unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved["Closed Guard"], 4);
    assert_eq!(resolved["Half Guard"], 8);
}

#[test]
fn test_resolve_reports_every_missing_name() {
    let ids = positions();
    let err = ids
        .resolve(["Unknown Guard", "Closed Guard", "Z Guard", "Unknown Guard"])
        .unwrap_err();
    match err {
        CoreError::MissingReference { table, names } => {
            assert_eq!(table, "position");
            assert_eq!(names, vec!["Unknown Guard".to_string(), "Z Guard".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_reference_message_names_values() {
    let err = positions().resolve(["Unknown Guard"]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("missing a position id"), "got: {msg}");
    assert!(msg.contains("'Unknown Guard'"), "got: {msg}");
}

#[test]
fn test_resolve_is_exact_match() {
    let err = positions().resolve(["closed guard"]).unwrap_err();
    assert!(matches!(err, CoreError::MissingReference { .. }));
}

#[test]
fn test_resolve_empty_input() {
    assert!(positions().resolve(std::iter::empty()).unwrap().is_empty());
}

#[test]
fn test_from_rows_rejects_ambiguous_names() {
    let err = ReferenceIds::from_rows(
        ReferenceKind::Move,
        vec![(1, "Toe Hold".to_string()), (2, "Toe Hold".to_string())],
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::AmbiguousReference { ref name, .. } if name == "Toe Hold"));
}

#[test]
fn test_from_rows_tolerates_repeated_pairs() {
    let ids = ReferenceIds::from_rows(
        ReferenceKind::Move,
        vec![(1, "Toe Hold".to_string()), (1, "Toe Hold".to_string())],
    )
    .unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids.get("Toe Hold"), Some(1));
}
