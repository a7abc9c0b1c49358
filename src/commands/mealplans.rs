use std::thread;

use anyhow::Result;
use clap::Subcommand;

use super::{check_date, join, opt, secondary};
use crate::api::ApiClient;
use crate::models::{MealPlanPatch, MealPlanSummaryRow, PlanRecipeInput};

#[derive(Debug, Subcommand)]
pub enum PlansCmd {
    /// List meal plans
    List,
    /// Show a plan with its scheduled recipes and calorie summary
    Show { id: i64 },
    /// Create a meal plan
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update a meal plan
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a meal plan
    Rm { id: i64 },
    /// Schedule a recipe on a plan
    AddRecipe {
        plan: i64,
        #[arg(long)]
        recipe: i64,
        #[arg(long)]
        day: Option<String>,
        #[arg(long)]
        meal: Option<String>,
    },
    /// Remove a scheduled recipe entry
    RmRecipe { entry: i64 },
    /// Per-day calorie summary for a plan
    Summary { id: i64 },
    /// Create finished diet logs from one day of a plan
    LogDay {
        plan: i64,
        #[arg(long)]
        date: String,
    },
}

pub fn run(api: &ApiClient, cmd: PlansCmd) -> Result<()> {
    match cmd {
        PlansCmd::List => list(api),
        PlansCmd::Show { id } => show(api, id),
        PlansCmd::Add { name, start, end, notes } => {
            for d in [&start, &end].into_iter().flatten() {
                check_date(d)?;
            }
            let input = MealPlanPatch { name: Some(name), start_date: start, end_date: end, notes };
            let created = api.create_mealplan(&input)?;
            println!("Created plan {} ({}).", created.id, created.name);
            show(api, created.id)
        }
        PlansCmd::Edit { id, name, start, end, notes } => {
            for d in [&start, &end].into_iter().flatten() {
                check_date(d)?;
            }
            let patch = MealPlanPatch { name, start_date: start, end_date: end, notes };
            api.update_mealplan(id, &patch)?;
            show(api, id)
        }
        PlansCmd::Rm { id } => {
            let msg = api.delete_mealplan(id)?;
            println!("{}", msg.message);
            list(api)
        }
        PlansCmd::AddRecipe { plan, recipe, day, meal } => {
            if let Some(d) = &day {
                check_date(d)?;
            }
            let input = PlanRecipeInput { recipe_id: recipe, day, meal_type: meal };
            api.add_plan_recipe(plan, &input)?;
            show(api, plan)
        }
        PlansCmd::RmRecipe { entry } => {
            let msg = api.remove_plan_recipe(entry)?;
            println!("{}", msg.message);
            Ok(())
        }
        PlansCmd::Summary { id } => {
            let rows = api.mealplan_summary(id)?;
            print_summary(&rows);
            Ok(())
        }
        PlansCmd::LogDay { plan, date } => {
            check_date(&date)?;
            let msg = api.log_plan_day(plan, &date)?;
            println!("{}", msg.message);
            Ok(())
        }
    }
}

fn list(api: &ApiClient) -> Result<()> {
    let plans = api.mealplans()?;
    if plans.is_empty() {
        println!("No meal plans yet.");
        return Ok(());
    }
    println!("{:<6} {:<30} {:<12} {:<12}", "ID", "Name", "Start", "End");
    println!("{}", "-".repeat(64));
    for p in &plans {
        println!(
            "{:<6} {:<30} {:<12} {:<12}",
            p.id,
            p.name,
            opt(p.start_date.as_deref()),
            opt(p.end_date.as_deref())
        );
    }
    Ok(())
}

fn show(api: &ApiClient, id: i64) -> Result<()> {
    let (detail, summary) = thread::scope(|s| {
        let detail = s.spawn(|| api.mealplan(id));
        let summary = s.spawn(|| api.mealplan_summary(id));
        (join(detail), join(summary))
    });
    let detail = detail?;

    let p = &detail.plan;
    println!("Plan {} - {}", p.id, p.name);
    println!(
        "  {} to {}",
        opt(p.start_date.as_deref()),
        opt(p.end_date.as_deref())
    );
    if let Some(notes) = &p.notes {
        println!("  {notes}");
    }

    println!();
    println!("Scheduled recipes");
    if detail.recipes.is_empty() {
        println!("  none scheduled");
    } else {
        println!("  {:<7} {:<12} {:<10} {:<30}", "Entry", "Day", "Meal", "Recipe");
        for entry in &detail.recipes {
            println!(
                "  {:<7} {:<12} {:<10} {:<30}",
                entry.id,
                opt(entry.day.as_deref()),
                opt(entry.meal_type.as_deref()),
                entry.recipe_name
            );
        }
    }

    if let Some(rows) = secondary(summary, "the calorie summary")? {
        if !rows.is_empty() {
            println!();
            print_summary(&rows);
        }
    }
    Ok(())
}

fn print_summary(rows: &[MealPlanSummaryRow]) {
    if rows.is_empty() {
        println!("No summary rows.");
        return;
    }
    println!("{:<12} {:<10} {:<30} {:>8}", "Day", "Meal", "Recipe", "Kcal");
    println!("{}", "-".repeat(64));
    let mut total = 0.0;
    for row in rows {
        println!(
            "{:<12} {:<10} {:<30} {:>8.0}",
            row.day,
            opt(row.meal_type.as_deref()),
            row.recipe_name,
            row.calories
        );
        total += row.calories;
    }
    println!("{}", "-".repeat(64));
    println!("{:<54} {:>8.0}", "Total", total);
}
