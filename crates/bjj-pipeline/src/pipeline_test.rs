use super::*;
use bjj_core::{CoreError, RawRecord, SkillKind};
use bjj_db::query::{class_attendance_rows, table_row_count};
use bjj_sheets::{SheetError, SheetResult};

// ── Helpers ────────────────────────────────────────────────────────────

struct StaticSource(Vec<RawRecord>);

impl SpreadsheetSource for StaticSource {
    fn fetch(&self, _spreadsheet: &str, _worksheet: &str) -> SheetResult<Vec<RawRecord>> {
        Ok(self.0.clone())
    }
}

struct UnreachableSource;

impl SpreadsheetSource for UnreachableSource {
    fn fetch(&self, spreadsheet: &str, worksheet: &str) -> SheetResult<Vec<RawRecord>> {
        Err(SheetError::SourceFetch {
            spreadsheet: spreadsheet.to_string(),
            worksheet: worksheet.to_string(),
            message: "connection refused".to_string(),
        })
    }
}

fn session(date: &str, class: &str, positions: [&str; 3], moves: [&str; 4]) -> RawRecord {
    RawRecord::from_pairs(&[
        ("Date", date),
        ("Class", class),
        ("Position 1", positions[0]),
        ("Position 2", positions[1]),
        ("Position 3", positions[2]),
        ("Move 1", moves[0]),
        ("Move 2", moves[1]),
        ("Move 3", moves[2]),
        ("Move 4", moves[3]),
        ("Notes", ""),
    ])
}

fn two_sessions() -> Vec<RawRecord> {
    vec![
        session(
            "2023-01-01",
            "Monday 10:00 AM BJJ Techniques",
            ["Closed Guard", "", "Half Guard"],
            ["Kimura", "", "", ""],
        ),
        session(
            "1/3/2023",
            "Tuesday 6:00 AM BJJ Techniques",
            ["Side Control", "", ""],
            ["Americana", "Kimura", "", ""],
        ),
    ]
}

fn pipeline<S: SpreadsheetSource>(source: S) -> Pipeline<S> {
    Pipeline::new(source, "BJJ Dashboard", "BJJ Total Attendance")
}

fn count(db: &BjjDb, table: &str) -> i64 {
    table_row_count(db.conn(), table).unwrap()
}

// ── Tests ──────────────────────────────────────────────────────────────

#[test]
fn run_loads_every_fact_table() {
    let db = BjjDb::open_memory().unwrap();
    let summary = pipeline(StaticSource(two_sessions())).run(&db).unwrap();

    assert_eq!(summary.records, 2);
    assert!(summary.finished_at >= summary.started_at);
    assert_eq!(count(&db, "class_attendance"), 2);
    assert_eq!(count(&db, "positions_practiced"), 3);
    assert_eq!(count(&db, "moves_practiced"), 3);
    assert_eq!(summary.sync.table("moves_practiced").unwrap().inserted, 3);
}

#[test]
fn prepare_does_not_write() {
    let db = BjjDb::open_memory().unwrap();
    let (records, facts) = pipeline(StaticSource(two_sessions())).prepare(&db).unwrap();

    assert_eq!(records, 2);
    assert_eq!(facts.practiced(SkillKind::Position).len(), 3);
    assert_eq!(count(&db, "class_attendance"), 0);
}

#[test]
fn empty_worksheet_is_refused() {
    let db = BjjDb::open_memory().unwrap();
    pipeline(StaticSource(two_sessions())).run(&db).unwrap();

    let err = pipeline(StaticSource(Vec::new())).run(&db).unwrap_err();
    assert!(matches!(err, PipelineError::EmptySource { .. }));
    assert_eq!(count(&db, "class_attendance"), 2);
}

#[test]
fn fetch_failure_leaves_data_untouched() {
    let db = BjjDb::open_memory().unwrap();
    pipeline(StaticSource(two_sessions())).run(&db).unwrap();
    let before = class_attendance_rows(db.conn(), &Schema::bjj()).unwrap();

    let err = pipeline(UnreachableSource).run(&db).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Source(SheetError::SourceFetch { .. })
    ));
    assert_eq!(
        class_attendance_rows(db.conn(), &Schema::bjj()).unwrap(),
        before
    );
}

#[test]
fn unknown_class_is_missing_reference() {
    let db = BjjDb::open_memory().unwrap();
    let records = vec![session(
        "2023-01-01",
        "Sunday Midnight Gi",
        ["", "", ""],
        ["", "", "", ""],
    )];
    let err = pipeline(StaticSource(records)).run(&db).unwrap_err();
    match err {
        PipelineError::Core(CoreError::MissingReference { table, names }) => {
            assert_eq!(table, "class");
            assert_eq!(names, vec!["Sunday Midnight Gi"]);
        }
        other => panic!("expected MissingReference, got {other:?}"),
    }
}

#[test]
fn duplicate_session_is_rejected_before_sync() {
    let db = BjjDb::open_memory().unwrap();
    let mut records = two_sessions();
    records.push(records[0].clone());

    let err = pipeline(StaticSource(records)).run(&db).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Core(CoreError::DuplicateSession { .. })
    ));
    assert_eq!(count(&db, "class_attendance"), 0);
}

#[test]
fn invalid_date_names_the_row() {
    let db = BjjDb::open_memory().unwrap();
    let mut records = two_sessions();
    records[1] = session(
        "January 3rd",
        "Tuesday 6:00 AM BJJ Techniques",
        ["", "", ""],
        ["", "", "", ""],
    );
    let err = pipeline(StaticSource(records)).run(&db).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Core(CoreError::InvalidRecord { row: 2, .. })
    ));
}
