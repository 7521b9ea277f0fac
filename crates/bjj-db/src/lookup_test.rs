use super::*;
use crate::{BjjDb, DbError};
use bjj_core::CoreError;

#[test]
fn reads_every_reference_row() {
    let db = BjjDb::open_memory().unwrap();
    let schema = Schema::bjj();
    let positions = reference_ids(db.conn(), &schema, ReferenceKind::Position).unwrap();
    assert_eq!(positions.kind(), ReferenceKind::Position);
    assert_eq!(positions.len(), 25);
    assert!(positions.get("Closed Guard").is_some());
    assert!(positions.get("closed guard").is_none());
}

#[test]
fn resolves_known_names() {
    let db = BjjDb::open_memory().unwrap();
    let schema = Schema::bjj();
    let ids = resolve_ids(db.conn(), &schema, "move", &["Kimura", "Americana"]).unwrap();
    assert_eq!(ids.len(), 2);

    let kimura: i64 = db
        .conn()
        .query_row("SELECT id FROM move WHERE name = 'Kimura'", [], |r| r.get(0))
        .unwrap();
    assert_eq!(ids["Kimura"], kimura);
}

#[test]
fn unknown_name_fails_with_every_missing_name() {
    let db = BjjDb::open_memory().unwrap();
    let schema = Schema::bjj();
    let err = resolve_ids(
        db.conn(),
        &schema,
        "position",
        &["Unknown Guard", "Closed Guard", "Another Guard", "Unknown Guard"],
    )
    .unwrap_err();
    match err {
        DbError::Core(CoreError::MissingReference { table, names }) => {
            assert_eq!(table, "position");
            assert_eq!(names, vec!["Another Guard", "Unknown Guard"]);
        }
        other => panic!("expected MissingReference, got {other:?}"),
    }
}

#[test]
fn invalid_table_kind_rejected() {
    let db = BjjDb::open_memory().unwrap();
    let schema = Schema::bjj();
    let err = resolve_ids(db.conn(), &schema, "class_attendance", &["x"]).unwrap_err();
    assert!(matches!(
        err,
        DbError::Core(CoreError::InvalidTableKind { .. })
    ));
}

#[test]
fn empty_name_list_resolves_to_empty_map() {
    let db = BjjDb::open_memory().unwrap();
    let schema = Schema::bjj();
    assert!(resolve_ids(db.conn(), &schema, "class", &[]).unwrap().is_empty());
}
