use anyhow::Result;
use clap::Subcommand;

use super::{check_date, check_time, opt, opt_fmt, render_macro_split};
use crate::api::ApiClient;
use crate::models::{DietLog, DietLogPatch};

#[derive(Debug, Subcommand)]
pub enum LogsCmd {
    /// List diet logs, optionally for one day
    List {
        #[arg(long)]
        date: Option<String>,
    },
    /// Log a meal
    Add {
        #[arg(long)]
        date: String,
        #[arg(long)]
        recipe: Option<i64>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        portion: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
        /// Count this meal toward summaries right away
        #[arg(long)]
        finished: bool,
    },
    /// Update a diet log
    Edit {
        id: i64,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        recipe: Option<i64>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        portion: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a diet log
    Rm { id: i64 },
    /// Flip the finished flag, including or excluding the meal from summaries
    Toggle { id: i64 },
    /// Nutrition totals over the last N days (finished meals only)
    Summary {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
}

pub fn run(api: &ApiClient, cmd: LogsCmd) -> Result<()> {
    match cmd {
        LogsCmd::List { date } => {
            if let Some(d) = &date {
                check_date(d)?;
            }
            let logs = api.diet_logs(date.as_deref())?;
            print_logs(&logs);
            Ok(())
        }
        LogsCmd::Add { date, recipe, time, portion, notes, finished } => {
            check_date(&date)?;
            if let Some(t) = &time {
                check_time(t)?;
            }
            let input = DietLogPatch {
                recipe_id: recipe,
                date: Some(date.clone()),
                time,
                portion,
                notes,
                finished: Some(finished),
            };
            let created = api.create_diet_log(&input)?;
            println!("Logged meal {} on {}.", created.id, created.date);
            let logs = api.diet_logs(Some(date.as_str()))?;
            print_logs(&logs);
            Ok(())
        }
        LogsCmd::Edit { id, date, recipe, time, portion, notes } => {
            if let Some(d) = &date {
                check_date(d)?;
            }
            if let Some(t) = &time {
                check_time(t)?;
            }
            let patch = DietLogPatch {
                recipe_id: recipe,
                date,
                time,
                portion,
                notes,
                finished: None,
            };
            let updated = api.update_diet_log(id, &patch)?;
            let logs = api.diet_logs(Some(updated.date.as_str()))?;
            print_logs(&logs);
            Ok(())
        }
        LogsCmd::Rm { id } => {
            let msg = api.delete_diet_log(id)?;
            println!("{}", msg.message);
            Ok(())
        }
        LogsCmd::Toggle { id } => {
            let log = api.toggle_diet_log(id)?;
            println!(
                "Log {} is now {}.",
                log.id,
                if log.finished { "finished (counts toward summaries)" } else { "unfinished" }
            );
            let logs = api.diet_logs(Some(log.date.as_str()))?;
            print_logs(&logs);
            Ok(())
        }
        LogsCmd::Summary { days } => {
            let summary = api.diet_summary(days)?;
            println!(
                "Last {} days ({} to {})",
                summary.days, summary.start_date, summary.end_date
            );
            println!(
                "  {:.0} kcal | protein {:.0} g | carbs {:.0} g | fat {:.0} g | fiber {:.0} g",
                summary.total_calories,
                summary.total_protein,
                summary.total_carbs,
                summary.total_fat,
                summary.total_fiber
            );
            println!();
            render_macro_split(summary.total_protein, summary.total_carbs, summary.total_fat);
            Ok(())
        }
    }
}

fn print_logs(logs: &[DietLog]) {
    if logs.is_empty() {
        println!("No diet logs.");
        return;
    }
    println!(
        "{:<6} {:<12} {:<6} {:<30} {:>7} {:<4} {:<20}",
        "ID", "Date", "Time", "Recipe", "Portion", "Done", "Notes"
    );
    println!("{}", "-".repeat(92));
    for log in logs {
        println!(
            "{:<6} {:<12} {:<6} {:<30} {:>7} {:<4} {:<20}",
            log.id,
            log.date,
            opt(log.time.as_deref()),
            opt(log.recipe_name.as_deref()),
            opt_fmt(log.portion),
            if log.finished { "yes" } else { "no" },
            opt(log.notes.as_deref())
        );
    }
}
