use crate::app::{App, open_app};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::binning::{task_view, tasks_for_day};
use crate::core::calendar::{Cell, MonthCursor, is_today};
use crate::db::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREY, RESET, color_for_status};
use crate::utils::formatting::bold;

/// Render the monthly calendar: the weekday grid first, then one detail
/// block per day that has tasks bound to it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month, year } = cmd {
        let mut cursor = MonthCursor::current();

        if let Some(m) = month {
            if !(1..=12).contains(m) {
                return Err(AppError::InvalidDate(format!("month {}", m)));
            }
            cursor.month0 = m - 1;
        }
        if let Some(y) = year {
            cursor.year = *y;
        }

        let app = open_app(cfg)?;
        print_grid(&app, cursor);
        print_day_details(&app, cursor);
    }

    Ok(())
}

fn print_grid<S: TaskStore>(app: &App<S>, cursor: MonthCursor) {
    let grid = cursor.grid();

    println!("\n{:^28}", bold(&cursor.label()));
    println!("{}", bold("Sun Mon Tue Wed Thu Fri Sat"));

    let mut col = 0;
    for cell in &grid.cells {
        match cell {
            Cell::Blank => print!("    "),
            Cell::Day(day) => {
                let bound = tasks_for_day(&app.tasks, *day, cursor.month0, cursor.year);
                let marker = if bound.is_empty() { ' ' } else { '*' };

                // Pad before styling so the ANSI codes do not break the
                // column width.
                let padded = format!("{:>3}", day);
                if is_today(*day, cursor.month0, cursor.year) {
                    print!("{}{} ", bold(&padded), marker);
                } else {
                    print!("{}{} ", padded, marker);
                }
            }
        }

        col += 1;
        if col == 7 {
            println!();
            col = 0;
        }
    }
    if col != 0 {
        println!();
    }
}

fn print_day_details<S: TaskStore>(app: &App<S>, cursor: MonthCursor) {
    let grid = cursor.grid();
    let mut any = false;

    for day in 1..=grid.days_in_month {
        let bound = tasks_for_day(&app.tasks, day, cursor.month0, cursor.year);
        if bound.is_empty() {
            continue;
        }
        any = true;

        println!("\n=== {} {} ===", cursor.label(), day);

        for task in bound {
            let view = task_view(task, &app.session.user_id);
            let color = color_for_status(task.status);

            println!(
                "  #{} {} {}[{}]{}",
                task.id,
                bold(&task.title),
                color,
                task.status.label(),
                RESET
            );
            println!("     {}{}{}", GREY, task.subject, RESET);
            if !view.preview.is_empty() {
                println!("     {}", view.preview);
            }
            println!(
                "     by {}{}",
                task.owner_label(),
                if view.is_own { " (you)" } else { "" }
            );

            if !view.attachments.is_empty() {
                println!("     {} file(s):", view.attachments.len());
                for att in &view.attachments {
                    let tag = if att.is_image { "img" } else { "doc" };
                    println!("       [{}] {} -> {}", tag, att.display_name, att.attachment.url);
                }
            }
        }
    }

    if !any {
        println!("\nNo tasks due in {}.", cursor.label());
    }
}
