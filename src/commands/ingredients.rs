use anyhow::Result;
use clap::Subcommand;

use super::opt_fmt;
use crate::api::ApiClient;
use crate::models::{Ingredient, IngredientPatch, NutritionPatch};

#[derive(Debug, Subcommand)]
pub enum IngredientsCmd {
    /// List ingredients with their nutrition per 100 units
    List,
    /// Show one ingredient
    Show { id: i64 },
    /// Create an ingredient (admin only server-side)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        unit: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        notes: Option<String>,
        #[command(flatten)]
        nutrition: NutritionArgs,
    },
    /// Update an ingredient
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[command(flatten)]
        nutrition: NutritionArgs,
    },
    /// Delete an ingredient (blocked while any recipe uses it)
    Rm { id: i64 },
}

#[derive(Debug, Default, clap::Args)]
pub struct NutritionArgs {
    #[arg(long)]
    pub calories: Option<f64>,
    #[arg(long)]
    pub carbs: Option<f64>,
    #[arg(long)]
    pub protein: Option<f64>,
    #[arg(long)]
    pub fat: Option<f64>,
    #[arg(long)]
    pub fiber: Option<f64>,
    #[arg(long)]
    pub vitamins: Option<String>,
    #[arg(long)]
    pub minerals: Option<String>,
    #[arg(long)]
    pub other_nutrients: Option<String>,
}

impl NutritionArgs {
    fn into_patch(self) -> Option<NutritionPatch> {
        let patch = NutritionPatch {
            calories: self.calories,
            carbs_g: self.carbs,
            protein_g: self.protein,
            fat_g: self.fat,
            fiber_g: self.fiber,
            vitamins: self.vitamins,
            minerals: self.minerals,
            other_nutrients: self.other_nutrients,
        };
        let any = patch.calories.is_some()
            || patch.carbs_g.is_some()
            || patch.protein_g.is_some()
            || patch.fat_g.is_some()
            || patch.fiber_g.is_some()
            || patch.vitamins.is_some()
            || patch.minerals.is_some()
            || patch.other_nutrients.is_some();
        any.then_some(patch)
    }
}

pub fn run(api: &ApiClient, cmd: IngredientsCmd) -> Result<()> {
    match cmd {
        IngredientsCmd::List => list(api),
        IngredientsCmd::Show { id } => {
            let ing = api.ingredient(id)?;
            print_detail(&ing);
            Ok(())
        }
        IngredientsCmd::Add { name, unit, category, notes, nutrition } => {
            let input = IngredientPatch {
                name: Some(name),
                unit: Some(unit),
                category: Some(category),
                notes,
                nutrition: nutrition.into_patch(),
            };
            let created = api.create_ingredient(&input)?;
            println!("Created ingredient {} ({}).", created.id, created.name);
            let fresh = api.ingredient(created.id)?;
            print_detail(&fresh);
            Ok(())
        }
        IngredientsCmd::Edit { id, name, unit, category, notes, nutrition } => {
            let patch = IngredientPatch {
                name,
                unit,
                category,
                notes,
                nutrition: nutrition.into_patch(),
            };
            let updated = api.update_ingredient(id, &patch)?;
            print_detail(&updated);
            Ok(())
        }
        IngredientsCmd::Rm { id } => {
            let msg = api.delete_ingredient(id)?;
            println!("{}", msg.message);
            list(api)
        }
    }
}

fn list(api: &ApiClient) -> Result<()> {
    let ingredients = api.ingredients()?;
    if ingredients.is_empty() {
        println!("No ingredients yet.");
        return Ok(());
    }
    println!(
        "{:<6} {:<25} {:<10} {:<15} {:>8} {:>8} {:>7} {:>6}",
        "ID", "Name", "Unit", "Category", "Kcal", "Protein", "Carbs", "Fat"
    );
    println!("{}", "-".repeat(92));
    for ing in &ingredients {
        let n = ing.nutrition.as_ref();
        println!(
            "{:<6} {:<25} {:<10} {:<15} {:>8} {:>8} {:>7} {:>6}",
            ing.id,
            ing.name,
            ing.unit,
            ing.category,
            opt_fmt(n.and_then(|n| n.calories)),
            opt_fmt(n.and_then(|n| n.protein_g)),
            opt_fmt(n.and_then(|n| n.carbs_g)),
            opt_fmt(n.and_then(|n| n.fat_g))
        );
    }
    Ok(())
}

fn print_detail(ing: &Ingredient) {
    println!("Ingredient {} - {}", ing.id, ing.name);
    println!("  unit: {} | category: {}", ing.unit, ing.category);
    if let Some(notes) = &ing.notes {
        println!("  notes: {notes}");
    }
    match &ing.nutrition {
        Some(n) => {
            println!(
                "  per 100 {}: {} kcal | protein {} g | carbs {} g | fat {} g | fiber {} g",
                ing.unit,
                opt_fmt(n.calories),
                opt_fmt(n.protein_g),
                opt_fmt(n.carbs_g),
                opt_fmt(n.fat_g),
                opt_fmt(n.fiber_g)
            );
            if let Some(v) = &n.vitamins {
                println!("  vitamins: {v}");
            }
            if let Some(m) = &n.minerals {
                println!("  minerals: {m}");
            }
            if let Some(o) = &n.other_nutrients {
                println!("  other: {o}");
            }
        }
        None => println!("  no nutrition record"),
    }
}
