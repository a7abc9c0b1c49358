//! Typed records for the NutritionDB wire contract.
//!
//! Field names on the wire are the backend's column names (`Recipe_Name`,
//! `Portion_Size`, ...), so every response is parsed into an explicit struct
//! here instead of being passed around as loose JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: i64,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "User_ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Date_Of_Birth")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Height_cm")]
    pub height_cm: Option<i32>,
    #[serde(rename = "Weight_kg")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "Activity_Level")]
    pub activity_level: Option<String>,
    #[serde(rename = "Dietary_Preferences")]
    pub dietary_preferences: Option<String>,
    #[serde(rename = "Allergies")]
    pub allergies: Option<String>,
    #[serde(rename = "BMI")]
    pub bmi: Option<f64>,
    pub role: Role,
    #[serde(rename = "Created_At", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Recipe_ID")]
    pub id: i64,
    #[serde(rename = "Recipe_Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Cuisine_Type")]
    pub cuisine: Option<String>,
    #[serde(rename = "Preparation_Time_minutes")]
    pub prep_minutes: Option<i64>,
    #[serde(rename = "Cooking_Time_minutes")]
    pub cook_minutes: Option<i64>,
    #[serde(rename = "Serving_Size")]
    pub serving_size: Option<f64>,
    #[serde(rename = "Difficulty_Level")]
    pub difficulty: Option<String>,
    #[serde(rename = "Instructions")]
    pub instructions: Option<String>,
    #[serde(rename = "Creator_User_ID")]
    pub creator_id: Option<i64>,
}

/// Row of a recipe's ingredient list. The detail view includes the ingredient
/// name; the create response for a new link does not, hence the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeIngredientRow {
    #[serde(rename = "RecipeIngredient_ID")]
    pub id: i64,
    #[serde(rename = "Recipe_ID", default)]
    pub recipe_id: Option<i64>,
    #[serde(rename = "Ingredient_ID")]
    pub ingredient_id: i64,
    #[serde(rename = "Ingredient_Name", default)]
    pub ingredient_name: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "Unit")]
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeCalories {
    #[serde(rename = "Recipe_ID")]
    pub recipe_id: i64,
    #[serde(rename = "Total_Calories")]
    pub total_calories: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Nutrition {
    #[serde(rename = "Calories")]
    pub calories: Option<f64>,
    #[serde(rename = "Carbohydrates_g")]
    pub carbs_g: Option<f64>,
    #[serde(rename = "Protein_g")]
    pub protein_g: Option<f64>,
    #[serde(rename = "Fat_g")]
    pub fat_g: Option<f64>,
    #[serde(rename = "Fiber_g")]
    pub fiber_g: Option<f64>,
    #[serde(rename = "Vitamins")]
    pub vitamins: Option<String>,
    #[serde(rename = "Minerals")]
    pub minerals: Option<String>,
    #[serde(rename = "Other_Nutrients")]
    pub other_nutrients: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "Ingredient_ID")]
    pub id: i64,
    #[serde(rename = "Ingredient_Name")]
    pub name: String,
    #[serde(rename = "Unit_Of_Measure")]
    pub unit: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealPlan {
    #[serde(rename = "MealPlan_ID")]
    pub id: i64,
    #[serde(rename = "User_ID")]
    pub user_id: Option<i64>,
    #[serde(rename = "Plan_Name")]
    pub name: String,
    #[serde(rename = "Start_Date")]
    pub start_date: Option<String>,
    #[serde(rename = "End_Date")]
    pub end_date: Option<String>,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanEntry {
    #[serde(rename = "MealPlan_Recipe_ID")]
    pub id: i64,
    #[serde(rename = "Recipe_ID")]
    pub recipe_id: i64,
    #[serde(rename = "Recipe_Name")]
    pub recipe_name: String,
    #[serde(rename = "Day_of_Plan")]
    pub day: Option<String>,
    #[serde(rename = "Meal_Type")]
    pub meal_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealPlanDetail {
    #[serde(flatten)]
    pub plan: MealPlan,
    #[serde(default)]
    pub recipes: Vec<PlanEntry>,
}

/// Create response for a plan entry; the backend keys this one's id as `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlanEntry {
    pub id: i64,
    #[serde(rename = "Recipe_ID")]
    pub recipe_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealPlanSummaryRow {
    #[serde(rename = "Plan_Name")]
    pub plan_name: String,
    #[serde(rename = "Day_of_Plan")]
    pub day: String,
    #[serde(rename = "Meal_Type")]
    pub meal_type: Option<String>,
    #[serde(rename = "Recipe_Name")]
    pub recipe_name: String,
    #[serde(rename = "Recipe_Calories")]
    pub calories: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DietLog {
    #[serde(rename = "Log_ID")]
    pub id: i64,
    #[serde(rename = "User_ID")]
    pub user_id: Option<i64>,
    #[serde(rename = "Recipe_ID")]
    pub recipe_id: Option<i64>,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "Portion_Size")]
    pub portion: Option<f64>,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
    #[serde(rename = "is_finished")]
    pub finished: bool,
    #[serde(rename = "Recipe_Name", default)]
    pub recipe_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DietSummary {
    pub days: i64,
    pub start_date: String,
    pub end_date: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub total_fiber: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feedback {
    #[serde(rename = "Feedback_ID")]
    pub id: i64,
    #[serde(rename = "User_ID")]
    pub user_id: i64,
    #[serde(rename = "Recipe_ID")]
    pub recipe_id: i64,
    #[serde(rename = "Rating")]
    pub rating: i32,
    #[serde(rename = "Comments")]
    pub comments: Option<String>,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "User_Name", default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightEntry {
    #[serde(rename = "History_ID")]
    pub id: i64,
    #[serde(rename = "Old_Weight")]
    pub old_weight: Option<f64>,
    #[serde(rename = "New_Weight")]
    pub new_weight: Option<f64>,
    #[serde(rename = "Updated_At")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "Log_ID")]
    pub id: i64,
    #[serde(rename = "Recipe_ID")]
    pub recipe_id: Option<i64>,
    #[serde(rename = "Recipe_Name")]
    pub recipe_name: Option<String>,
    #[serde(rename = "Created_At")]
    pub created_at: Option<String>,
}

// ----- request payloads -----

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Date_Of_Birth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "Gender", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "Height_cm", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<i32>,
    #[serde(rename = "Weight_kg", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "Activity_Level", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(rename = "Dietary_Preferences", skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<String>,
    #[serde(rename = "Allergies", skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}

/// Partial user update. Only admins may send `role`; the self-service route
/// ignores it server-side.
#[derive(Debug, Default, Serialize)]
pub struct UserPatch {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Date_Of_Birth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "Gender", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "Height_cm", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<i32>,
    #[serde(rename = "Weight_kg", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "Activity_Level", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(rename = "Dietary_Preferences", skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<String>,
    #[serde(rename = "Allergies", skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Default, Serialize)]
pub struct RecipePatch {
    #[serde(rename = "Recipe_Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Cuisine_Type", skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(rename = "Preparation_Time_minutes", skip_serializing_if = "Option::is_none")]
    pub prep_minutes: Option<i64>,
    #[serde(rename = "Cooking_Time_minutes", skip_serializing_if = "Option::is_none")]
    pub cook_minutes: Option<i64>,
    #[serde(rename = "Serving_Size", skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    #[serde(rename = "Difficulty_Level", skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(rename = "Instructions", skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct NutritionPatch {
    #[serde(rename = "Calories", skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(rename = "Carbohydrates_g", skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    #[serde(rename = "Protein_g", skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    #[serde(rename = "Fat_g", skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    #[serde(rename = "Fiber_g", skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    #[serde(rename = "Vitamins", skip_serializing_if = "Option::is_none")]
    pub vitamins: Option<String>,
    #[serde(rename = "Minerals", skip_serializing_if = "Option::is_none")]
    pub minerals: Option<String>,
    #[serde(rename = "Other_Nutrients", skip_serializing_if = "Option::is_none")]
    pub other_nutrients: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct IngredientPatch {
    #[serde(rename = "Ingredient_Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Unit_Of_Measure", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionPatch>,
}

#[derive(Debug, Default, Serialize)]
pub struct MealPlanPatch {
    #[serde(rename = "Plan_Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Start_Date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "End_Date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlanRecipeInput {
    #[serde(rename = "Recipe_ID")]
    pub recipe_id: i64,
    #[serde(rename = "Day_of_Plan", skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(rename = "Meal_Type", skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecipeIngredientInput {
    #[serde(rename = "Ingredient_ID")]
    pub ingredient_id: i64,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "Unit")]
    pub unit: String,
}

#[derive(Debug, Default, Serialize)]
pub struct DietLogPatch {
    #[serde(rename = "Recipe_ID", skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<i64>,
    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "Portion_Size", skip_serializing_if = "Option::is_none")]
    pub portion: Option<f64>,
    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "is_finished", skip_serializing_if = "Option::is_none")]
    pub finished: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
pub struct FeedbackPatch {
    #[serde(rename = "Rating", skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(rename = "Comments", skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
