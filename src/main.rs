use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use nutridb::api::ApiClient;
use nutridb::commands;
use nutridb::commands::admin::AdminCmd;
use nutridb::commands::auth::SignupArgs;
use nutridb::commands::dietlogs::LogsCmd;
use nutridb::commands::feedback::FeedbackCmd;
use nutridb::commands::ingredients::IngredientsCmd;
use nutridb::commands::mealplans::PlansCmd;
use nutridb::commands::profile::ProfileCmd;
use nutridb::commands::recipes::RecipesCmd;
use nutridb::config::Config;
use nutridb::error::ApiError;
use nutridb::guard::{self, Access, Outcome};
use nutridb::models::Role;
use nutridb::session::{SessionEvent, SessionStore};

#[derive(Parser)]
#[command(name = "nutridb", version)]
#[command(about = "Track recipes, meal plans and diet logs against a NutritionDB server")]
struct Cli {
    #[command(subcommand)]
    screen: Screen,
}

#[derive(Subcommand)]
enum Screen {
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Signup(SignupArgs),
    /// Sign out
    Logout,
    /// Show the current session
    Whoami,
    /// Your nutrition dashboard
    Dashboard {
        /// Days covered by the summary section
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Recipes
    Recipes {
        #[command(subcommand)]
        cmd: RecipesCmd,
    },
    /// Ingredient catalog
    Ingredients {
        #[command(subcommand)]
        cmd: IngredientsCmd,
    },
    /// Meal plans
    Plans {
        #[command(subcommand)]
        cmd: PlansCmd,
    },
    /// Diet logs
    Logs {
        #[command(subcommand)]
        cmd: LogsCmd,
    },
    /// Recipe feedback
    Feedback {
        #[command(subcommand)]
        cmd: FeedbackCmd,
    },
    /// Your profile and weight history
    Profile {
        #[command(subcommand)]
        cmd: ProfileCmd,
    },
    /// User management and site statistics
    Admin {
        #[command(subcommand)]
        cmd: AdminCmd,
    },
    /// Recipes you created recently
    Activity,
}

/// Access level per screen. Login and signup are public-only, the
/// dashboard, diet-log and profile screens belong to ordinary users,
/// content screens are shared, admin screens are admin-only. Session
/// utilities (logout, whoami) are not gated.
fn access(screen: &Screen) -> Option<Access> {
    match screen {
        Screen::Login { .. } | Screen::Signup(_) => Some(Access::Public),
        Screen::Logout | Screen::Whoami => None,
        Screen::Dashboard { .. } | Screen::Logs { .. } | Screen::Profile { .. } => {
            Some(Access::UserOnly)
        }
        Screen::Recipes { .. }
        | Screen::Ingredients { .. }
        | Screen::Plans { .. }
        | Screen::Feedback { .. }
        | Screen::Activity => Some(Access::RequiresAuth),
        Screen::Admin { .. } => Some(Access::AdminOnly),
    }
}

fn label(screen: &Screen) -> &'static str {
    match screen {
        Screen::Login { .. } => "login",
        Screen::Signup(_) => "signup",
        Screen::Logout => "logout",
        Screen::Whoami => "whoami",
        Screen::Dashboard { .. } => "dashboard",
        Screen::Recipes { .. } => "recipes",
        Screen::Ingredients { .. } => "ingredients",
        Screen::Plans { .. } => "meal plans",
        Screen::Logs { .. } => "diet logs",
        Screen::Feedback { .. } => "feedback",
        Screen::Profile { .. } => "profile",
        Screen::Admin { .. } => "admin",
        Screen::Activity => "activity",
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nutridb=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let store = Arc::new(SessionStore::load(config.session_path.clone()));
    let api = ApiClient::new(&config.api_url, store.clone());

    // Announce session transitions whichever path caused them, whether an
    // explicit login/logout or a rejected token mid-request.
    store.subscribe(|event| match event {
        SessionEvent::SignedIn(role) => println!("Signed in ({role})."),
        SessionEvent::SignedOut => println!("Signed out."),
    });

    match dispatch(&api, &store, cli.screen) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let rejection = err.chain().find_map(|cause| match cause.downcast_ref::<ApiError>() {
                Some(ApiError::AuthExpired(msg)) => Some(msg.clone()),
                _ => None,
            });
            match rejection {
                Some(msg) => eprintln!("{msg}. Run `nutridb login` to sign in again."),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(api: &ApiClient, store: &SessionStore, screen: Screen) -> Result<()> {
    let Some(required) = access(&screen) else {
        return run(api, store, screen);
    };

    let session = store.current();
    match guard::resolve(required, session.as_ref()) {
        Outcome::Render => run(api, store, screen),
        Outcome::RedirectLogin => anyhow::bail!(
            "not signed in (tried to open {}); run `nutridb login --email <EMAIL> --password <PASSWORD>` first",
            label(&screen)
        ),
        Outcome::RedirectHome(role) => {
            if required == Access::Public {
                println!("Already signed in; showing the {} instead.", guard::role_home(role));
            } else {
                println!(
                    "The {} screen is not available for your role; showing the {} instead.",
                    label(&screen),
                    guard::role_home(role)
                );
            }
            println!();
            run_home(api, role)
        }
    }
}

fn run_home(api: &ApiClient, role: Role) -> Result<()> {
    match role {
        Role::User => commands::dashboard::run(api, 7),
        Role::Admin => commands::admin::run(api, AdminCmd::Users),
    }
}

fn run(api: &ApiClient, store: &SessionStore, screen: Screen) -> Result<()> {
    match screen {
        Screen::Login { email, password } => {
            let role = commands::auth::login(api, store, &email, &password)?;
            println!();
            run_home(api, role)
        }
        Screen::Signup(args) => {
            let role = commands::auth::signup(api, store, &args)?;
            println!();
            run_home(api, role)
        }
        Screen::Logout => {
            commands::auth::logout(store);
            Ok(())
        }
        Screen::Whoami => {
            commands::auth::whoami(store);
            Ok(())
        }
        Screen::Dashboard { days } => commands::dashboard::run(api, days),
        Screen::Recipes { cmd } => commands::recipes::run(api, cmd),
        Screen::Ingredients { cmd } => commands::ingredients::run(api, cmd),
        Screen::Plans { cmd } => commands::mealplans::run(api, cmd),
        Screen::Logs { cmd } => commands::dietlogs::run(api, cmd),
        Screen::Feedback { cmd } => commands::feedback::run(api, cmd),
        Screen::Profile { cmd } => commands::profile::run(api, store, cmd),
        Screen::Admin { cmd } => commands::admin::run(api, cmd),
        Screen::Activity => commands::dashboard::activity(api),
    }
}
