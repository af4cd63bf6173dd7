use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AlertsCommands, CoursesCommands, MarketCommands, ToolsCommands, UserCommands, WikiCommands,
};

/// Top-level command tree. Each command maps to one page of the app.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Navigation links for the session language.
    Nav,
    /// Recent weather and pest alerts.
    Home,
    /// Learning hub courses.
    Courses {
        #[command(subcommand)]
        action: CoursesCommands,
    },
    /// Market prices, charts and forecasts.
    Market {
        #[command(subcommand)]
        action: MarketCommands,
    },
    /// Raw weather and pest alert lists.
    Alerts {
        #[command(subcommand)]
        action: AlertsCommands,
    },
    /// Sustainable-practices wiki.
    Wiki {
        #[command(subcommand)]
        action: WikiCommands,
    },
    /// Ask Agri-Bot. Without a question, reads one question per stdin line.
    Chat(ChatArgs),
    /// Farm calculators.
    Tools {
        #[command(subcommand)]
        action: ToolsCommands,
    },
    /// User accounts.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Question to ask (all words are joined).
    #[arg(trailing_var_arg = true, num_args = 0..)]
    pub words: Vec<String>,

    /// User id sent with every question.
    #[arg(long)]
    pub user_id: Option<i64>,

    /// Also print the alert sidebar.
    #[arg(long)]
    pub alerts: bool,
}

impl ChatArgs {
    /// The joined question, or `None` for interactive mode.
    #[must_use]
    pub fn question(&self) -> Option<String> {
        if self.words.is_empty() {
            None
        } else {
            Some(self.words.join(" "))
        }
    }
}
