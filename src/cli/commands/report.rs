use crate::app::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::metrics::{parent_metrics, task_metrics};
use crate::core::sessions::session_stats;
use crate::db::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::models::status::TaskStatus;
use crate::ui::messages::header;
use crate::utils::formatting::pct_label;
use crate::utils::table::{Column, Table};

/// Maximum number of access events fed into the session aggregation.
const ACCESS_LIMIT: usize = 50;

/// Progress report: task counts and percentages, per-subject breakdown,
/// parent metrics and inferred session cadence.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report = cmd {
        let mut app = open_app(cfg)?;

        if !app.caps.can_view_reports() {
            return Err(AppError::NotAuthorized(
                "reports are visible to administrators only".to_string(),
            ));
        }

        let metrics = task_metrics(&app.tasks);
        let parents = parent_metrics(&app.tasks);
        let accesses = app.store.list_access_events(ACCESS_LIMIT)?;
        let sessions = session_stats(&accesses);

        header("Progress report");

        //
        // 1. Task summary
        //
        println!("Total tasks: {}", metrics.total);
        for status in TaskStatus::ALL {
            println!(
                "  {:<12} {:>4} {}",
                status.label(),
                metrics.count_for(status),
                pct_label(metrics.percentage_for(status))
            );
        }

        //
        // 2. Per-subject breakdown
        //
        println!("\nTasks by subject:");
        if metrics.by_subject.is_empty() {
            println!("  no tasks recorded");
        } else {
            let mut table = Table::new(vec![
                Column {
                    header: "Subject".to_string(),
                    width: 24,
                },
                Column {
                    header: "Count".to_string(),
                    width: 6,
                },
                Column {
                    header: "Share".to_string(),
                    width: 8,
                },
            ]);

            for (subject, count) in &metrics.by_subject {
                table.add_row(vec![
                    subject.clone(),
                    count.to_string(),
                    pct_label(crate::core::metrics::percentage(*count, metrics.total)),
                ]);
            }
            print!("{}", table.render());
        }

        //
        // 3. Parent metrics
        //
        println!("\nActive parents:        {}", parents.active_parents);
        println!("With open tasks:       {}", parents.parents_with_open_tasks);

        //
        // 4. Session cadence
        //
        println!("\nRecent accesses:       {}", accesses.len());
        println!("Avg session minutes:   {}", sessions.average_gap_minutes);
        println!("Counted gaps:          {}", sessions.counted_gaps);
    }
    Ok(())
}
