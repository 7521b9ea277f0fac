//! Dashboard reads over the metric views.
//!
//! Everything here is read-only and runs against committed data only; the
//! pipeline never calls into this module.

use crate::error::{DbError, DbResult};
use bjj_core::dashboard::{most_practiced, most_practiced_headline};
use bjj_core::{DashboardView, SkillCount, SkillKind};
use chrono::{NaiveDateTime, TimeZone, Utc};
use rusqlite::{params, Connection, OptionalExtension};

pub const CLASS_ATTENDANCE_METRICS_VIEW: &str = "class_attendance_metrics";
pub const POSITION_METRICS_VIEW: &str = "position_metrics";
pub const MOVE_METRICS_VIEW: &str = "move_metrics";

pub const NUM_MONTHS_TRAINED: &str = "num_months_trained";
pub const NUM_CLASSES_ATTENDED: &str = "num_classes_attended";
pub const NUM_CLASS_MINUTES: &str = "num_class_minutes";
pub const NUM_TIMES_PRACTICED: &str = "num_times_practiced";

const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Classes attended in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyClasses {
    pub year: i32,
    pub month: u32,
    pub num_classes: i64,
}

/// Everything the dashboard shows for one view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub view: DashboardView,
    pub last_updated: Option<String>,
    pub time_spent_training: String,
    pub classes_attended: i64,
    pub class_hours: f64,
    pub positions: Vec<SkillCount>,
    pub moves: Vec<SkillCount>,
    pub classes_per_month: Vec<MonthlyClasses>,
}

impl DashboardSummary {
    /// Headline naming the most practiced skills of a kind, if any were practiced.
    pub fn headline(&self, kind: SkillKind) -> Option<String> {
        let counts = match kind {
            SkillKind::Position => &self.positions,
            SkillKind::Move => &self.moves,
        };
        let top = most_practiced(counts);
        if top.is_empty() {
            return None;
        }
        Some(most_practiced_headline(self.view, &top, kind))
    }
}

fn skill_metrics_view(kind: SkillKind) -> &'static str {
    match kind {
        SkillKind::Position => POSITION_METRICS_VIEW,
        SkillKind::Move => MOVE_METRICS_VIEW,
    }
}

/// One attendance metric for a view; a slice with no classes reads as 0.
fn attendance_metric(conn: &Connection, metric_name: &str, view: DashboardView) -> DbResult<i64> {
    let value: Option<i64> = conn
        .query_row(
            &format!(
                "SELECT metric_value FROM {CLASS_ATTENDANCE_METRICS_VIEW} \
                 WHERE metric_name = ?1 AND aggregation_category = ?2 AND aggregation_value = ?3"
            ),
            params![
                metric_name,
                view.aggregation_category(),
                view.aggregation_value()
            ],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| DbError::QueryError(format!("failed to read {metric_name}: {e}")))?;
    Ok(value.unwrap_or(0))
}

/// Timestamp of the last committed ingest, `None` before the first one.
///
/// Stored timestamps are UTC; the result carries the zone, e.g.
/// `2023-03-01 10:00:00 UTC`.
pub fn most_recent_update(conn: &Connection) -> DbResult<Option<String>> {
    let updated: Option<NaiveDateTime> = conn
        .query_row("SELECT MAX(updated_at) FROM class_attendance", [], |row| {
            row.get(0)
        })
        .map_err(|e| DbError::QueryError(format!("failed to read last update: {e}")))?;
    Ok(updated.map(|naive| {
        Utc.from_utc_datetime(&naive)
            .format(LAST_UPDATED_FORMAT)
            .to_string()
    }))
}

/// Months with at least one class, as `"<n> months"`.
pub fn time_spent_training(conn: &Connection, view: DashboardView) -> DbResult<String> {
    let months = attendance_metric(conn, NUM_MONTHS_TRAINED, view)?;
    Ok(format!("{months} months"))
}

pub fn classes_attended(conn: &Connection, view: DashboardView) -> DbResult<i64> {
    attendance_metric(conn, NUM_CLASSES_ATTENDED, view)
}

/// Total class time in hours.
pub fn total_class_hours(conn: &Connection, view: DashboardView) -> DbResult<f64> {
    let minutes = attendance_metric(conn, NUM_CLASS_MINUTES, view)?;
    Ok(minutes as f64 / 60.0)
}

/// Practice counts per skill, most practiced first, ties by name.
pub fn skill_practice_counts(
    conn: &Connection,
    kind: SkillKind,
    view: DashboardView,
) -> DbResult<Vec<SkillCount>> {
    let table = skill_metrics_view(kind);
    let name_column = kind.as_str();
    let mut stmt = conn.prepare(&format!(
        "SELECT {name_column}, metric_value FROM {table} \
         WHERE metric_name = ?1 AND aggregation_category = ?2 AND aggregation_value = ?3 \
         ORDER BY metric_value DESC, {name_column}"
    ))?;
    let counts = stmt
        .query_map(
            params![
                NUM_TIMES_PRACTICED,
                view.aggregation_category(),
                view.aggregation_value()
            ],
            |row| {
                Ok(SkillCount {
                    name: row.get(0)?,
                    times_practiced: row.get(1)?,
                })
            },
        )?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DbError::QueryError(format!("failed to read {table}: {e}")))?;
    Ok(counts)
}

/// Classes attended per month, oldest first; restricted to the year unless
/// the view is `Overall`.
pub fn classes_per_month(conn: &Connection, view: DashboardView) -> DbResult<Vec<MonthlyClasses>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT aggregation_value, metric_value FROM {CLASS_ATTENDANCE_METRICS_VIEW} \
         WHERE metric_name = ?1 AND aggregation_category = 'month' \
         ORDER BY aggregation_value"
    ))?;
    let rows = stmt
        .query_map(params![NUM_CLASSES_ATTENDED], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut months = Vec::with_capacity(rows.len());
    for (month, num_classes) in rows {
        let (year, month) = parse_year_month(&month)?;
        if let DashboardView::Year(selected) = view {
            if selected != year {
                continue;
            }
        }
        months.push(MonthlyClasses {
            year,
            month,
            num_classes,
        });
    }
    Ok(months)
}

fn parse_year_month(value: &str) -> DbResult<(i32, u32)> {
    let parsed: Option<(i32, u32)> = value
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse().ok()?, m.parse().ok()?)));
    parsed.ok_or_else(|| DbError::QueryError(format!("unexpected month value '{value}'")))
}

/// Gather every dashboard figure for `view`.
pub fn dashboard_summary(conn: &Connection, view: DashboardView) -> DbResult<DashboardSummary> {
    Ok(DashboardSummary {
        view,
        last_updated: most_recent_update(conn)?,
        time_spent_training: time_spent_training(conn, view)?,
        classes_attended: classes_attended(conn, view)?,
        class_hours: total_class_hours(conn, view)?,
        positions: skill_practice_counts(conn, SkillKind::Position, view)?,
        moves: skill_practice_counts(conn, SkillKind::Move, view)?,
        classes_per_month: classes_per_month(conn, view)?,
    })
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
