//! Presentation helpers for dashboard metrics.

use crate::error::{CoreError, CoreResult};
use crate::skill::SkillKind;
use std::fmt;
use std::str::FromStr;

/// Which slice of the data the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Overall,
    Year(i32),
}

impl DashboardView {
    /// Metric aggregation category (`overall` or `year`).
    pub fn aggregation_category(&self) -> &'static str {
        match self {
            DashboardView::Overall => "overall",
            DashboardView::Year(_) => "year",
        }
    }

    /// Metric aggregation value (`overall` or the year).
    pub fn aggregation_value(&self) -> String {
        match self {
            DashboardView::Overall => "overall".to_string(),
            DashboardView::Year(year) => year.to_string(),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardView::Overall => f.write_str("Overall"),
            DashboardView::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for DashboardView {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        if s.eq_ignore_ascii_case("overall") {
            return Ok(DashboardView::Overall);
        }
        s.parse::<i32>()
            .map(DashboardView::Year)
            .map_err(|_| CoreError::InvalidView {
                view: s.to_string(),
            })
    }
}

/// Times a single skill was practiced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCount {
    pub name: String,
    pub times_practiced: i64,
}

/// Names of the most practiced skills; ties are all returned.
pub fn most_practiced(counts: &[SkillCount]) -> Vec<String> {
    let Some(max) = counts.iter().map(|c| c.times_practiced).max() else {
        return Vec::new();
    };
    counts
        .iter()
        .filter(|c| c.times_practiced == max)
        .map(|c| c.name.clone())
        .collect()
}

/// Headline sentence for the most practiced skills.
pub fn most_practiced_headline(view: DashboardView, skills: &[String], kind: SkillKind) -> String {
    let (verb, noun) = if skills.len() > 1 {
        ("were", kind.plural())
    } else {
        ("was", kind.as_str())
    };
    let listed: Vec<String> = skills.iter().map(|s| format!("'{s}'")).collect();
    let listed = format!("[{}]", listed.join(", "));

    match view {
        DashboardView::Overall => format!("{listed} {verb} the most practiced {noun} overall"),
        DashboardView::Year(year) => format!("{listed} {verb} the most practiced {noun} in {year}"),
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
