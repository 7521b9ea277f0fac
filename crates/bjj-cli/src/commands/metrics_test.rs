use super::*;
use bjj_core::{DashboardView, SkillCount};
use bjj_db::MonthlyClasses;

fn summary() -> DashboardSummary {
    DashboardSummary {
        view: DashboardView::Year(2023),
        last_updated: Some("2023-03-01 10:00:00 UTC".to_string()),
        time_spent_training: "2 months".to_string(),
        classes_attended: 3,
        class_hours: 3.5,
        positions: vec![
            SkillCount {
                name: "Closed Guard".to_string(),
                times_practiced: 2,
            },
            SkillCount {
                name: "Half Guard".to_string(),
                times_practiced: 1,
            },
        ],
        moves: vec![],
        classes_per_month: vec![MonthlyClasses {
            year: 2023,
            month: 1,
            num_classes: 2,
        }],
    }
}

#[test]
fn render_includes_headline_and_counts() {
    let text = render(&summary());
    assert!(text.starts_with("BJJ Journey (2023)\n"));
    assert!(text.contains("Time spent training: 2 months"));
    assert!(text.contains("Class hours:         3.50"));
    assert!(text.contains("['Closed Guard'] was the most practiced position in 2023"));
    assert!(text.contains("Times practiced per move:\n  (none)"));
    assert!(text.contains("  2023-01    2"));
}

#[test]
fn render_without_data() {
    let mut empty = summary();
    empty.last_updated = None;
    empty.positions.clear();
    empty.classes_per_month.clear();
    let text = render(&empty);
    assert!(text.contains("Last updated: never"));
    assert!(!text.contains("most practiced"));
}
