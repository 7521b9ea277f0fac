//! Metrics command implementation

use anyhow::{Context, Result};
use bjj_core::SkillKind;
use bjj_db::metrics::dashboard_summary;
use bjj_db::DashboardSummary;

use crate::cli::{GlobalArgs, MetricsArgs};
use crate::commands::common::{load_config, open_database};

/// Execute the metrics command
pub(crate) fn execute(args: &MetricsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let db = open_database(&config)?;
    let summary = dashboard_summary(db.conn(), args.view)
        .with_context(|| format!("Failed to read metrics for {}", args.view))?;
    print!("{}", render(&summary));
    Ok(())
}

/// Plain-text dashboard.
pub(crate) fn render(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let updated = summary.last_updated.as_deref().unwrap_or("never");
    out.push_str(&format!("BJJ Journey ({})\n", summary.view));
    out.push_str(&format!("Last updated: {updated}\n\n"));
    out.push_str(&format!(
        "Time spent training: {}\n",
        summary.time_spent_training
    ));
    out.push_str(&format!("Classes attended:    {}\n", summary.classes_attended));
    out.push_str(&format!("Class hours:         {:.2}\n", summary.class_hours));

    for (kind, counts) in [
        (SkillKind::Position, &summary.positions),
        (SkillKind::Move, &summary.moves),
    ] {
        out.push('\n');
        if let Some(headline) = summary.headline(kind) {
            out.push_str(&format!("{headline}\n"));
        }
        out.push_str(&format!("Times practiced per {kind}:\n"));
        if counts.is_empty() {
            out.push_str("  (none)\n");
        }
        for count in counts.iter() {
            out.push_str(&format!("  {:<40} {:>4}\n", count.name, count.times_practiced));
        }
    }

    out.push_str("\nClasses per month:\n");
    if summary.classes_per_month.is_empty() {
        out.push_str("  (none)\n");
    }
    for month in &summary.classes_per_month {
        out.push_str(&format!(
            "  {}-{:02} {:>4}\n",
            month.year, month.month, month.num_classes
        ));
    }
    out
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
