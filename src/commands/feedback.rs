use anyhow::Result;
use clap::Subcommand;

use super::opt;
use crate::api::ApiClient;
use crate::models::{Feedback, FeedbackPatch};

#[derive(Debug, Subcommand)]
pub enum FeedbackCmd {
    /// List feedback on a recipe
    List { recipe: i64 },
    /// Rate a recipe (1-5)
    Add {
        recipe: i64,
        #[arg(long)]
        rating: i32,
        #[arg(long)]
        comments: Option<String>,
    },
    /// Change your rating or comment
    Edit {
        id: i64,
        #[arg(long)]
        rating: Option<i32>,
        #[arg(long)]
        comments: Option<String>,
    },
    /// Delete feedback
    Rm { id: i64 },
}

pub fn run(api: &ApiClient, cmd: FeedbackCmd) -> Result<()> {
    match cmd {
        FeedbackCmd::List { recipe } => {
            let rows = api.feedback_for(recipe)?;
            print_feedback(&rows);
            Ok(())
        }
        FeedbackCmd::Add { recipe, rating, comments } => {
            anyhow::ensure!((1..=5).contains(&rating), "rating must be between 1 and 5");
            let input = FeedbackPatch { rating: Some(rating), comments };
            let msg = api.add_feedback(recipe, &input)?;
            println!("{}", msg.message);
            let rows = api.feedback_for(recipe)?;
            print_feedback(&rows);
            Ok(())
        }
        FeedbackCmd::Edit { id, rating, comments } => {
            if let Some(r) = rating {
                anyhow::ensure!((1..=5).contains(&r), "rating must be between 1 and 5");
            }
            let patch = FeedbackPatch { rating, comments };
            let updated = api.update_feedback(id, &patch)?;
            let rows = api.feedback_for(updated.recipe_id)?;
            print_feedback(&rows);
            Ok(())
        }
        FeedbackCmd::Rm { id } => {
            let msg = api.delete_feedback(id)?;
            println!("{}", msg.message);
            Ok(())
        }
    }
}

fn print_feedback(rows: &[Feedback]) {
    if rows.is_empty() {
        println!("No feedback yet.");
        return;
    }
    for fb in rows {
        println!(
            "#{} {} {}  by {}  {}",
            fb.id,
            "*".repeat(fb.rating.clamp(0, 5) as usize),
            fb.rating,
            opt(fb.user_name.as_deref()),
            opt(fb.date.as_deref())
        );
        if let Some(comments) = &fb.comments {
            println!("   {comments}");
        }
    }
}
