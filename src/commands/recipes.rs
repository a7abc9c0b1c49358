use std::thread;

use anyhow::Result;
use clap::Subcommand;

use super::{join, opt, opt_fmt, secondary};
use crate::api::ApiClient;
use crate::models::{RecipeDetail, RecipeIngredientInput, RecipePatch};

#[derive(Debug, Subcommand)]
pub enum RecipesCmd {
    /// List recipes (admins see everyone's, users their own)
    List,
    /// Show one recipe with its ingredients and computed calories
    Show { id: i64 },
    /// Create a recipe
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long)]
        prep_minutes: Option<i64>,
        #[arg(long)]
        cook_minutes: Option<i64>,
        #[arg(long)]
        servings: Option<f64>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
    },
    /// Update fields of a recipe
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long)]
        prep_minutes: Option<i64>,
        #[arg(long)]
        cook_minutes: Option<i64>,
        #[arg(long)]
        servings: Option<f64>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
    },
    /// Delete a recipe
    Rm { id: i64 },
    /// Total calories for one serving, as computed by the server
    Calories { id: i64 },
    /// Link an ingredient to a recipe
    AddIngredient {
        recipe: i64,
        #[arg(long)]
        ingredient: i64,
        #[arg(long)]
        quantity: f64,
        #[arg(long)]
        unit: String,
    },
    /// Change quantity or unit of a linked ingredient
    SetIngredient {
        entry: i64,
        #[arg(long)]
        quantity: Option<f64>,
        #[arg(long)]
        unit: Option<String>,
    },
    /// Unlink an ingredient from its recipe
    RmIngredient { entry: i64 },
}

pub fn run(api: &ApiClient, cmd: RecipesCmd) -> Result<()> {
    match cmd {
        RecipesCmd::List => list(api),
        RecipesCmd::Show { id } => show(api, id),
        RecipesCmd::Add {
            name,
            description,
            cuisine,
            prep_minutes,
            cook_minutes,
            servings,
            difficulty,
            instructions,
        } => {
            let input = RecipePatch {
                name: Some(name),
                description,
                cuisine,
                prep_minutes,
                cook_minutes,
                serving_size: servings,
                difficulty,
                instructions,
            };
            let created = api.create_recipe(&input)?;
            println!("Created recipe {} ({}).", created.id, created.name);
            show(api, created.id)
        }
        RecipesCmd::Edit {
            id,
            name,
            description,
            cuisine,
            prep_minutes,
            cook_minutes,
            servings,
            difficulty,
            instructions,
        } => {
            let patch = RecipePatch {
                name,
                description,
                cuisine,
                prep_minutes,
                cook_minutes,
                serving_size: servings,
                difficulty,
                instructions,
            };
            api.update_recipe(id, &patch)?;
            show(api, id)
        }
        RecipesCmd::Rm { id } => {
            let msg = api.delete_recipe(id)?;
            println!("{}", msg.message);
            list(api)
        }
        RecipesCmd::Calories { id } => {
            let cal = api.recipe_calories(id)?;
            println!("Recipe {}: {:.0} kcal per serving", cal.recipe_id, cal.total_calories);
            Ok(())
        }
        RecipesCmd::AddIngredient { recipe, ingredient, quantity, unit } => {
            let input = RecipeIngredientInput { ingredient_id: ingredient, quantity, unit };
            api.add_recipe_ingredient(recipe, &input)?;
            show(api, recipe)
        }
        RecipesCmd::SetIngredient { entry, quantity, unit } => {
            let row = api.update_recipe_ingredient(entry, quantity, unit.as_deref())?;
            match row.recipe_id {
                Some(recipe_id) => show(api, recipe_id),
                None => {
                    println!("Updated entry {}: {} {}", row.id, row.quantity, row.unit);
                    Ok(())
                }
            }
        }
        RecipesCmd::RmIngredient { entry } => {
            let msg = api.remove_recipe_ingredient(entry)?;
            println!("{}", msg.message);
            Ok(())
        }
    }
}

fn list(api: &ApiClient) -> Result<()> {
    let recipes = api.recipes()?;
    if recipes.is_empty() {
        println!("No recipes yet.");
        return Ok(());
    }
    println!(
        "{:<6} {:<30} {:<15} {:>5} {:>5} {:>5} {:<8}",
        "ID", "Name", "Cuisine", "Prep", "Cook", "Srv", "Level"
    );
    println!("{}", "-".repeat(80));
    for r in &recipes {
        println!(
            "{:<6} {:<30} {:<15} {:>5} {:>5} {:>5} {:<8}",
            r.id,
            r.name,
            opt(r.cuisine.as_deref()),
            opt_fmt(r.prep_minutes),
            opt_fmt(r.cook_minutes),
            opt_fmt(r.serving_size),
            opt(r.difficulty.as_deref())
        );
    }
    Ok(())
}

fn show(api: &ApiClient, id: i64) -> Result<()> {
    let (detail, calories) = thread::scope(|s| {
        let detail = s.spawn(|| api.recipe(id));
        let calories = s.spawn(|| api.recipe_calories(id));
        (join(detail), join(calories))
    });
    let detail: RecipeDetail = detail?;

    let r = &detail.recipe;
    println!("Recipe {} - {}", r.id, r.name);
    if let Some(desc) = &r.description {
        println!("  {desc}");
    }
    println!(
        "  cuisine: {} | prep: {} min | cook: {} min | serves: {} | difficulty: {}",
        opt(r.cuisine.as_deref()),
        opt_fmt(r.prep_minutes),
        opt_fmt(r.cook_minutes),
        opt_fmt(r.serving_size),
        opt(r.difficulty.as_deref())
    );
    if let Some(cal) = secondary(calories, "the computed calories")? {
        println!("  calories per serving: {:.0} kcal", cal.total_calories);
    }
    if let Some(instructions) = &r.instructions {
        println!();
        println!("Instructions:");
        println!("{instructions}");
    }

    println!();
    println!("Ingredients");
    if detail.ingredients.is_empty() {
        println!("  none linked");
    } else {
        println!("  {:<7} {:<25} {:>9} {:<10}", "Entry", "Ingredient", "Quantity", "Unit");
        for row in &detail.ingredients {
            println!(
                "  {:<7} {:<25} {:>9} {:<10}",
                row.id,
                opt(row.ingredient_name.as_deref()),
                row.quantity,
                row.unit
            );
        }
    }
    Ok(())
}
