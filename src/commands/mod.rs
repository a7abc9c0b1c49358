//! One module per screen. Each fetches through the adapter, renders to
//! stdout, and re-fetches after a mutation so the output reflects server
//! state rather than what was sent.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod dietlogs;
pub mod feedback;
pub mod ingredients;
pub mod mealplans;
pub mod profile;
pub mod recipes;

use anyhow::{Context, Result, bail};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::ApiError;
use crate::nutrition;

pub(crate) const DATE_FMT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");
const TIME_FMT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

pub(crate) fn today() -> Result<String> {
    OffsetDateTime::now_utc()
        .date()
        .format(DATE_FMT)
        .context("failed to format today's date")
}

pub(crate) fn check_date(s: &str) -> Result<()> {
    time::Date::parse(s, DATE_FMT)
        .map(|_| ())
        .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

pub(crate) fn check_time(s: &str) -> Result<()> {
    let full = if s.len() == 5 { format!("{s}:00") } else { s.to_string() };
    time::Time::parse(&full, TIME_FMT)
        .map(|_| ())
        .with_context(|| format!("invalid time '{s}', expected HH:MM"))
}

/// Joins a scoped request worker. Requests never outlive the screen that
/// issued them; a result arriving after the screen is gone is impossible by
/// construction.
pub(crate) fn join<T: Send>(
    handle: std::thread::ScopedJoinHandle<'_, Result<T, ApiError>>,
) -> Result<T> {
    match handle.join() {
        Ok(result) => Ok(result?),
        Err(_) => bail!("request worker panicked"),
    }
}

/// Secondary fetch on a screen: a failure becomes an inline note instead of
/// hiding the rest of the screen. An authentication failure still aborts so
/// the session teardown reaches the top-level handler.
pub(crate) fn secondary<T>(result: Result<T>, what: &str) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            let auth = err.chain().any(|cause| {
                matches!(cause.downcast_ref::<ApiError>(), Some(ApiError::AuthExpired(_)))
            });
            if auth {
                return Err(err);
            }
            println!("  (could not fetch {what}: {err:#})");
            Ok(None)
        }
    }
}

pub(crate) fn opt(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

pub(crate) fn opt_fmt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Macro calorie bars, shared by the dashboard and the diet-log summary.
pub(crate) fn render_macro_split(protein_g: f64, carbs_g: f64, fat_g: f64) {
    let Some(split) = nutrition::macro_calories(protein_g, carbs_g, fat_g) else {
        println!("  No data to display.");
        return;
    };

    let rows = [
        ("Protein", split.protein_kcal, split.protein_pct()),
        ("Carbs", split.carbs_kcal, split.carbs_pct()),
        ("Fat", split.fat_kcal, split.fat_pct()),
    ];
    for (label, kcal, pct) in rows {
        let bar = "#".repeat((pct / 4.0).round() as usize);
        println!("  {label:<8} {bar:<25} {pct:>5.1}%  ({kcal:.0} kcal)");
    }
    println!("  {:<8} {:>38.0} kcal from macros", "Total", split.total_kcal());
}
