use anyhow::Result;
use clap::Args;

use crate::api::ApiClient;
use crate::models::{Role, SignupRequest};
use crate::session::{Session, SessionStore};

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub date_of_birth: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub height_cm: Option<i32>,
    #[arg(long)]
    pub weight_kg: Option<f64>,
    #[arg(long)]
    pub activity_level: Option<String>,
    #[arg(long)]
    pub dietary_preferences: Option<String>,
    #[arg(long)]
    pub allergies: Option<String>,
}

pub fn login(api: &ApiClient, store: &SessionStore, email: &str, password: &str) -> Result<Role> {
    let resp = api.login(email, password)?;
    let role = resp.role;
    store.set(Session {
        token: resp.access_token,
        user_id: resp.user_id,
        role,
    })?;
    Ok(role)
}

/// Creates the account, then signs in with the same credentials.
pub fn signup(api: &ApiClient, store: &SessionStore, args: &SignupArgs) -> Result<Role> {
    if let Some(dob) = &args.date_of_birth {
        super::check_date(dob)?;
    }
    let req = SignupRequest {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        date_of_birth: args.date_of_birth.clone(),
        gender: args.gender.clone(),
        height_cm: args.height_cm,
        weight_kg: args.weight_kg,
        activity_level: args.activity_level.clone(),
        dietary_preferences: args.dietary_preferences.clone(),
        allergies: args.allergies.clone(),
    };
    let user = api.signup(&req)?;
    println!("Account created for {} ({}).", user.name, user.email);
    login(api, store, &args.email, &args.password)
}

pub fn logout(store: &SessionStore) {
    if !store.clear() {
        println!("Not signed in.");
    }
}

pub fn whoami(store: &SessionStore) {
    match store.current() {
        Some(session) => {
            println!("Signed in as user {} (role: {}).", session.user_id, session.role);
        }
        None => println!("Not signed in."),
    }
}
