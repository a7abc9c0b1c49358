use std::thread;

use anyhow::{Context, Result};
use clap::Subcommand;

use super::{check_date, join, opt, opt_fmt, secondary};
use crate::api::ApiClient;
use crate::models::{UserPatch, UserProfile};
use crate::session::SessionStore;

#[derive(Debug, Subcommand)]
pub enum ProfileCmd {
    /// Show your profile and weight history
    Show,
    /// Update profile fields
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        height_cm: Option<i32>,
        #[arg(long)]
        activity_level: Option<String>,
        #[arg(long)]
        dietary_preferences: Option<String>,
        #[arg(long)]
        allergies: Option<String>,
    },
    /// Record a new weight; the server appends to your history and recomputes BMI
    Weight { kg: f64 },
    /// Weight history only
    History,
    /// Calorie summary across your meal plans
    PlanSummary,
}

pub fn run(api: &ApiClient, store: &SessionStore, cmd: ProfileCmd) -> Result<()> {
    let user_id = store
        .current()
        .map(|s| s.user_id)
        .context("not signed in")?;

    match cmd {
        ProfileCmd::Show => show(api, user_id),
        ProfileCmd::Edit {
            name,
            email,
            date_of_birth,
            gender,
            height_cm,
            activity_level,
            dietary_preferences,
            allergies,
        } => {
            if let Some(dob) = &date_of_birth {
                check_date(dob)?;
            }
            let patch = UserPatch {
                name,
                email,
                date_of_birth,
                gender,
                height_cm,
                weight_kg: None,
                activity_level,
                dietary_preferences,
                allergies,
                role: None,
            };
            api.update_user(user_id, &patch)?;
            show(api, user_id)
        }
        ProfileCmd::Weight { kg } => {
            let msg = api.update_weight(user_id, kg)?;
            println!("{}", msg.message);
            history(api, user_id)
        }
        ProfileCmd::History => history(api, user_id),
        ProfileCmd::PlanSummary => {
            let rows = api.user_mealplan_summary(user_id)?;
            if rows.is_empty() {
                println!("No meal plan entries.");
                return Ok(());
            }
            println!("{:<25} {:<12} {:<10} {:<30} {:>8}", "Plan", "Day", "Meal", "Recipe", "Kcal");
            println!("{}", "-".repeat(90));
            for row in &rows {
                println!(
                    "{:<25} {:<12} {:<10} {:<30} {:>8.0}",
                    row.plan_name,
                    row.day,
                    opt(row.meal_type.as_deref()),
                    row.recipe_name,
                    row.calories
                );
            }
            Ok(())
        }
    }
}

fn show(api: &ApiClient, user_id: i64) -> Result<()> {
    let (user, weights) = thread::scope(|s| {
        let user = s.spawn(|| api.user(user_id));
        let weights = s.spawn(|| api.weight_history(user_id));
        (join(user), join(weights))
    });
    let user: UserProfile = user?;

    println!("{} <{}> (role: {})", user.name, user.email, user.role);
    println!(
        "  born: {} | gender: {} | height: {} cm | weight: {} kg | BMI: {}",
        opt(user.date_of_birth.as_deref()),
        opt(user.gender.as_deref()),
        opt_fmt(user.height_cm),
        opt_fmt(user.weight_kg),
        opt_fmt(user.bmi)
    );
    println!(
        "  activity: {} | preferences: {} | allergies: {}",
        opt(user.activity_level.as_deref()),
        opt(user.dietary_preferences.as_deref()),
        opt(user.allergies.as_deref())
    );

    if let Some(weights) = secondary(weights, "your weight history")? {
        if !weights.is_empty() {
            println!();
            print_history(&weights);
        }
    }
    Ok(())
}

fn history(api: &ApiClient, user_id: i64) -> Result<()> {
    let weights = api.weight_history(user_id)?;
    if weights.is_empty() {
        println!("No weight history yet.");
        return Ok(());
    }
    print_history(&weights);
    Ok(())
}

fn print_history(weights: &[crate::models::WeightEntry]) {
    println!("Weight history");
    println!("  {:<22} {:>8} {:>8}", "When", "From", "To");
    for entry in weights {
        println!(
            "  {:<22} {:>8} {:>8}",
            opt(entry.updated_at.as_deref()),
            opt_fmt(entry.old_weight),
            opt_fmt(entry.new_weight)
        );
    }
}
