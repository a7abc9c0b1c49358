use anyhow::Result;
use clap::Subcommand;

use super::{check_date, opt, opt_fmt};
use crate::api::ApiClient;
use crate::models::{Role, UserPatch};

#[derive(Debug, Subcommand)]
pub enum AdminCmd {
    /// All registered users
    Users,
    /// One user's full profile
    User { id: i64 },
    /// Update any user, including their role
    EditUser {
        id: i64,
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
        weight_kg: Option<f64>,
        #[arg(long)]
        activity_level: Option<String>,
        #[arg(long)]
        dietary_preferences: Option<String>,
        #[arg(long)]
        allergies: Option<String>,
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,
    },
    /// Delete a user and their data
    RmUser { id: i64 },
    /// Set a new password for a user
    ResetPassword {
        id: i64,
        #[arg(long)]
        password: String,
    },
    /// Site-wide statistics
    Stats,
}

fn parse_role(s: &str) -> Result<Role, String> {
    match s {
        "user" => Ok(Role::User),
        "admin" => Ok(Role::Admin),
        other => Err(format!("unknown role '{other}', expected 'user' or 'admin'")),
    }
}

pub fn run(api: &ApiClient, cmd: AdminCmd) -> Result<()> {
    match cmd {
        AdminCmd::Users => users(api),
        AdminCmd::User { id } => {
            let user = api.admin_user(id)?;
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
                "  activity: {} | preferences: {} | allergies: {} | joined: {}",
                opt(user.activity_level.as_deref()),
                opt(user.dietary_preferences.as_deref()),
                opt(user.allergies.as_deref()),
                opt(user.created_at.as_deref())
            );
            Ok(())
        }
        AdminCmd::EditUser {
            id,
            name,
            email,
            date_of_birth,
            gender,
            height_cm,
            weight_kg,
            activity_level,
            dietary_preferences,
            allergies,
            role,
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
                weight_kg,
                activity_level,
                dietary_preferences,
                allergies,
                role,
            };
            let updated = api.admin_update_user(id, &patch)?;
            println!("Updated user {} ({}, role: {}).", updated.id, updated.email, updated.role);
            Ok(())
        }
        AdminCmd::RmUser { id } => {
            let msg = api.admin_delete_user(id)?;
            println!("{}", msg.message);
            users(api)
        }
        AdminCmd::ResetPassword { id, password } => {
            let msg = api.admin_reset_password(id, &password)?;
            println!("{}", msg.message);
            Ok(())
        }
        AdminCmd::Stats => {
            let stats = api.admin_statistics()?;
            if stats.is_empty() {
                println!("No statistics reported.");
                return Ok(());
            }
            let width = stats.keys().map(String::len).max().unwrap_or(0);
            for (metric, value) in &stats {
                let rendered = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                println!("{metric:<width$}  {rendered}");
            }
            Ok(())
        }
    }
}

fn users(api: &ApiClient) -> Result<()> {
    let users = api.admin_users()?;
    if users.is_empty() {
        println!("No users.");
        return Ok(());
    }
    println!("{:<6} {:<25} {:<30} {:<6} {:<20}", "ID", "Name", "Email", "Role", "Joined");
    println!("{}", "-".repeat(90));
    for user in &users {
        println!(
            "{:<6} {:<25} {:<30} {:<6} {:<20}",
            user.id,
            user.name,
            user.email,
            user.role.to_string(),
            opt(user.created_at.as_deref())
        );
    }
    Ok(())
}
