//! HTTP adapter for the NutritionDB REST API.
//!
//! Every request gets the current bearer credential attached per call; every
//! response goes through one classification step. A 401 tears the session
//! down (clear + broadcast) exactly once and the error still reaches the
//! calling screen for its own message.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    ActivityEntry, DietLog, DietLogPatch, DietSummary, Feedback, FeedbackPatch, Ingredient,
    IngredientPatch, LoginRequest, LoginResponse, MealPlan, MealPlanDetail, MealPlanPatch,
    MealPlanSummaryRow, Message, NewPlanEntry, PlanRecipeInput, Recipe, RecipeCalories,
    RecipeDetail, RecipeIngredientInput, RecipeIngredientRow, RecipePatch, SignupRequest,
    UserPatch, UserProfile, WeightEntry,
};
use crate::session::SessionStore;

/// What a response status plus body amounts to, before any side effect runs.
#[derive(Debug, PartialEq, Eq)]
pub enum Disposition {
    Success,
    /// Carries the server's own wording when it sent one, so a rejected
    /// login still tells the user why.
    AuthExpired(String),
    Forbidden(String),
    Rejected(String),
    Unexpected,
}

pub fn classify(status: u16, body: &str) -> Disposition {
    match status {
        200..=299 => Disposition::Success,
        401 => Disposition::AuthExpired(
            server_message(body).unwrap_or_else(|| "session expired".to_string()),
        ),
        403 => Disposition::Forbidden(
            server_message(body).unwrap_or_else(|| "forbidden".to_string()),
        ),
        400..=499 => match server_message(body) {
            Some(msg) => Disposition::Rejected(msg),
            None => Disposition::Unexpected,
        },
        _ => Disposition::Unexpected,
    }
}

fn server_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
    }
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.error.or(parsed.message)
}

pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
    store: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, store: Arc<SessionStore>) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::config::Config::builder()
                .http_status_as_error(false)
                .build(),
        );
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn bearer(&self) -> Option<String> {
        self.store.token().map(|token| format!("Bearer {token}"))
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with(path, &[])
    }

    fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        tracing::debug!("GET {path}");
        let url = self.url(path);
        let mut req = self.agent.get(url.as_str());
        if let Some(auth) = self.bearer() {
            req = req.header("Authorization", &auth);
        }
        for (key, value) in query {
            req = req.query(*key, *value);
        }
        let resp = req.call().map_err(ApiError::transport)?;
        self.finish(resp)
    }

    fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        tracing::debug!("POST {path}");
        let url = self.url(path);
        let mut req = self.agent.post(url.as_str());
        if let Some(auth) = self.bearer() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send_json(body).map_err(ApiError::transport)?;
        self.finish(resp)
    }

    fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        tracing::debug!("PUT {path}");
        let url = self.url(path);
        let mut req = self.agent.put(url.as_str());
        if let Some(auth) = self.bearer() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send_json(body).map_err(ApiError::transport)?;
        self.finish(resp)
    }

    fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("PUT {path}");
        let url = self.url(path);
        let mut req = self.agent.put(url.as_str());
        if let Some(auth) = self.bearer() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send_empty().map_err(ApiError::transport)?;
        self.finish(resp)
    }

    fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("DELETE {path}");
        let url = self.url(path);
        let mut req = self.agent.delete(url.as_str());
        if let Some(auth) = self.bearer() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.call().map_err(ApiError::transport)?;
        self.finish(resp)
    }

    fn finish<T: DeserializeOwned>(
        &self,
        mut resp: ureq::http::Response<ureq::Body>,
    ) -> Result<T, ApiError> {
        let status = resp.status().as_u16();
        let body = resp.body_mut().read_to_string().map_err(ApiError::transport)?;
        match classify(status, &body) {
            Disposition::Success => Ok(serde_json::from_str(&body)?),
            Disposition::AuthExpired(msg) => {
                // Global side effect, then propagate so the screen can still
                // show its own message. clear() collapses concurrent 401s
                // into a single broadcast.
                if self.store.clear() {
                    tracing::debug!("session cleared after authentication failure");
                }
                Err(ApiError::AuthExpired(msg))
            }
            Disposition::Forbidden(msg) => Err(ApiError::Forbidden(msg)),
            Disposition::Rejected(msg) => Err(ApiError::Rejected(msg)),
            Disposition::Unexpected => Err(ApiError::Unexpected { status, body }),
        }
    }

    // ----- auth & users -----

    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { email: email.to_string(), password: password.to_string() };
        self.post("/login", &body)
    }

    pub fn signup(&self, req: &SignupRequest) -> Result<UserProfile, ApiError> {
        self.post("/users", req)
    }

    pub fn user(&self, id: i64) -> Result<UserProfile, ApiError> {
        self.get(&format!("/users/{id}"))
    }

    pub fn update_user(&self, id: i64, patch: &UserPatch) -> Result<UserProfile, ApiError> {
        self.put(&format!("/users/{id}"), patch)
    }

    pub fn update_weight(&self, id: i64, weight: f64) -> Result<Message, ApiError> {
        self.put(&format!("/users/{id}/weight"), &serde_json::json!({ "weight": weight }))
    }

    pub fn weight_history(&self, id: i64) -> Result<Vec<WeightEntry>, ApiError> {
        self.get(&format!("/users/{id}/weight-history"))
    }

    pub fn user_mealplan_summary(&self, id: i64) -> Result<Vec<MealPlanSummaryRow>, ApiError> {
        self.get(&format!("/users/{id}/mealplan-summary"))
    }

    // ----- recipes -----

    pub fn recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get("/recipes")
    }

    pub fn recipe(&self, id: i64) -> Result<RecipeDetail, ApiError> {
        self.get(&format!("/recipes/{id}"))
    }

    pub fn create_recipe(&self, input: &RecipePatch) -> Result<Recipe, ApiError> {
        self.post("/recipes", input)
    }

    pub fn update_recipe(&self, id: i64, patch: &RecipePatch) -> Result<Recipe, ApiError> {
        self.put(&format!("/recipes/{id}"), patch)
    }

    pub fn delete_recipe(&self, id: i64) -> Result<Message, ApiError> {
        self.delete(&format!("/recipes/{id}"))
    }

    pub fn recipe_calories(&self, id: i64) -> Result<RecipeCalories, ApiError> {
        self.get(&format!("/recipes/{id}/calories"))
    }

    pub fn add_recipe_ingredient(
        &self,
        recipe_id: i64,
        input: &RecipeIngredientInput,
    ) -> Result<RecipeIngredientRow, ApiError> {
        self.post(&format!("/recipes/{recipe_id}/ingredients"), input)
    }

    pub fn update_recipe_ingredient(
        &self,
        ri_id: i64,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> Result<RecipeIngredientRow, ApiError> {
        let mut body = serde_json::Map::new();
        if let Some(q) = quantity {
            body.insert("Quantity".to_string(), q.into());
        }
        if let Some(u) = unit {
            body.insert("Unit".to_string(), u.into());
        }
        self.put(&format!("/recipe-ingredients/{ri_id}"), &body)
    }

    pub fn remove_recipe_ingredient(&self, ri_id: i64) -> Result<Message, ApiError> {
        self.delete(&format!("/recipe-ingredients/{ri_id}"))
    }

    // ----- ingredients -----

    pub fn ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        self.get("/ingredients")
    }

    pub fn ingredient(&self, id: i64) -> Result<Ingredient, ApiError> {
        self.get(&format!("/ingredients/{id}"))
    }

    pub fn create_ingredient(&self, input: &IngredientPatch) -> Result<Ingredient, ApiError> {
        self.post("/ingredients", input)
    }

    pub fn update_ingredient(
        &self,
        id: i64,
        patch: &IngredientPatch,
    ) -> Result<Ingredient, ApiError> {
        self.put(&format!("/ingredients/{id}"), patch)
    }

    pub fn delete_ingredient(&self, id: i64) -> Result<Message, ApiError> {
        self.delete(&format!("/ingredients/{id}"))
    }

    // ----- meal plans -----

    pub fn mealplans(&self) -> Result<Vec<MealPlan>, ApiError> {
        self.get("/mealplans")
    }

    pub fn mealplan(&self, id: i64) -> Result<MealPlanDetail, ApiError> {
        self.get(&format!("/mealplans/{id}"))
    }

    pub fn create_mealplan(&self, input: &MealPlanPatch) -> Result<MealPlan, ApiError> {
        self.post("/mealplans", input)
    }

    pub fn update_mealplan(&self, id: i64, patch: &MealPlanPatch) -> Result<MealPlan, ApiError> {
        self.put(&format!("/mealplans/{id}"), patch)
    }

    pub fn delete_mealplan(&self, id: i64) -> Result<Message, ApiError> {
        self.delete(&format!("/mealplans/{id}"))
    }

    pub fn mealplan_summary(&self, id: i64) -> Result<Vec<MealPlanSummaryRow>, ApiError> {
        self.get(&format!("/mealplans/{id}/summary"))
    }

    pub fn add_plan_recipe(
        &self,
        plan_id: i64,
        input: &PlanRecipeInput,
    ) -> Result<NewPlanEntry, ApiError> {
        self.post(&format!("/mealplans/{plan_id}/recipes"), input)
    }

    pub fn remove_plan_recipe(&self, mpr_id: i64) -> Result<Message, ApiError> {
        self.delete(&format!("/mealplan-recipes/{mpr_id}"))
    }

    pub fn log_plan_day(&self, plan_id: i64, date: &str) -> Result<Message, ApiError> {
        self.post(
            "/mealplans/log-day",
            &serde_json::json!({ "plan_id": plan_id, "date": date }),
        )
    }

    // ----- diet logs -----

    pub fn diet_logs(&self, date: Option<&str>) -> Result<Vec<DietLog>, ApiError> {
        match date {
            Some(d) => self.get_with("/dietlogs", &[("date", d)]),
            None => self.get("/dietlogs"),
        }
    }

    pub fn create_diet_log(&self, input: &DietLogPatch) -> Result<DietLog, ApiError> {
        self.post("/dietlogs", input)
    }

    pub fn update_diet_log(&self, id: i64, patch: &DietLogPatch) -> Result<DietLog, ApiError> {
        self.put(&format!("/dietlogs/{id}"), patch)
    }

    pub fn delete_diet_log(&self, id: i64) -> Result<Message, ApiError> {
        self.delete(&format!("/dietlogs/{id}"))
    }

    pub fn toggle_diet_log(&self, id: i64) -> Result<DietLog, ApiError> {
        self.put_empty(&format!("/dietlogs/{id}/toggle"))
    }

    pub fn diet_summary(&self, days: u32) -> Result<DietSummary, ApiError> {
        let days = days.to_string();
        self.get_with("/dietlogs/summary", &[("days", days.as_str())])
    }

    // ----- feedback -----

    pub fn feedback_for(&self, recipe_id: i64) -> Result<Vec<Feedback>, ApiError> {
        self.get(&format!("/recipes/{recipe_id}/feedback"))
    }

    pub fn add_feedback(&self, recipe_id: i64, input: &FeedbackPatch) -> Result<Message, ApiError> {
        self.post(&format!("/recipes/{recipe_id}/feedback"), input)
    }

    pub fn update_feedback(&self, id: i64, patch: &FeedbackPatch) -> Result<Feedback, ApiError> {
        self.put(&format!("/feedback/{id}"), patch)
    }

    pub fn delete_feedback(&self, id: i64) -> Result<Message, ApiError> {
        self.delete(&format!("/feedback/{id}"))
    }

    // ----- activity & admin -----

    pub fn recipe_activity(&self) -> Result<Vec<ActivityEntry>, ApiError> {
        self.get("/recipe-log")
    }

    pub fn admin_statistics(&self) -> Result<serde_json::Map<String, serde_json::Value>, ApiError> {
        self.get("/admin/statistics")
    }

    pub fn admin_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.get("/admin/users")
    }

    pub fn admin_user(&self, id: i64) -> Result<UserProfile, ApiError> {
        self.get(&format!("/admin/users/{id}"))
    }

    pub fn admin_update_user(&self, id: i64, patch: &UserPatch) -> Result<UserProfile, ApiError> {
        self.put(&format!("/admin/users/{id}"), patch)
    }

    pub fn admin_delete_user(&self, id: i64) -> Result<Message, ApiError> {
        self.delete(&format!("/admin/users/{id}"))
    }

    pub fn admin_reset_password(&self, id: i64, new_password: &str) -> Result<Message, ApiError> {
        self.post(
            &format!("/admin/users/{id}/reset-password"),
            &serde_json::json!({ "new_password": new_password }),
        )
    }
}
