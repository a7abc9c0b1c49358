use std::thread;

use anyhow::Result;

use super::{join, opt, render_macro_split, today};
use crate::api::ApiClient;

/// User home screen: today's totals, the period macro split, today's meals
/// and recent recipe activity. The four fetches are independent, so they run
/// in parallel and the screen renders once all have landed.
pub fn run(api: &ApiClient, days: u32) -> Result<()> {
    let date = today()?;

    let (today_sum, period_sum, logs, activity) = thread::scope(|s| {
        let today_sum = s.spawn(|| api.diet_summary(1));
        let period_sum = s.spawn(|| api.diet_summary(days));
        let logs = s.spawn(|| api.diet_logs(Some(date.as_str())));
        let activity = s.spawn(|| api.recipe_activity());
        (join(today_sum), join(period_sum), join(logs), join(activity))
    });
    let today_sum = today_sum?;
    let period_sum = period_sum?;
    let logs = logs?;
    let activity = activity?;

    println!("Today ({date})");
    println!(
        "  {:.0} kcal | protein {:.0} g | carbs {:.0} g | fat {:.0} g | fiber {:.0} g",
        today_sum.total_calories,
        today_sum.total_protein,
        today_sum.total_carbs,
        today_sum.total_fat,
        today_sum.total_fiber
    );

    println!();
    println!("Last {days} days ({} to {})", period_sum.start_date, period_sum.end_date);
    render_macro_split(period_sum.total_protein, period_sum.total_carbs, period_sum.total_fat);

    println!();
    println!("Today's meals");
    if logs.is_empty() {
        println!("  none logged yet");
    } else {
        println!("  {:<6} {:<6} {:<30} {:>7} {:<4}", "ID", "Time", "Recipe", "Portion", "Done");
        for log in &logs {
            println!(
                "  {:<6} {:<6} {:<30} {:>7} {:<4}",
                log.id,
                opt(log.time.as_deref()),
                opt(log.recipe_name.as_deref()),
                super::opt_fmt(log.portion),
                if log.finished { "yes" } else { "no" }
            );
        }
    }

    println!();
    println!("Recent recipe activity");
    print_activity(&activity);

    Ok(())
}

/// Standalone activity feed (the last ten recipes you created).
pub fn activity(api: &ApiClient) -> Result<()> {
    let entries = api.recipe_activity()?;
    print_activity(&entries);
    Ok(())
}

fn print_activity(entries: &[crate::models::ActivityEntry]) {
    if entries.is_empty() {
        println!("  nothing yet");
        return;
    }
    for entry in entries {
        println!(
            "  {}  {}",
            opt(entry.created_at.as_deref()),
            opt(entry.recipe_name.as_deref())
        );
    }
}
