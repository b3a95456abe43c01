use crate::{app::Interaction, theme_commands::ThemeCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current session
    Status,

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign into it
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        display_name: String,
    },

    /// Sign out and forget the stored identity
    Logout,

    /// Open a page by path, e.g. "/profile/demo_user"
    Open { path: String },

    /// Home timeline
    Feed,

    /// Trending topics
    Explore,

    Notifications,

    Messages,

    /// Profile page (defaults to the signed-in user)
    Profile { username: Option<String> },

    /// Post a tweet
    Compose { text: String },

    /// Toggle like, retweet or bookmark on a home feed tweet
    Tweet {
        id: u64,

        #[arg(value_enum)]
        action: Interaction,
    },

    /// Toggle following a user
    Follow { username: String },

    /// Theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
}
