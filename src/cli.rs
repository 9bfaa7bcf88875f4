use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reverse meal planner — fills the rest of the day around one chosen meal.
#[derive(Parser, Debug)]
#[command(name = "reverse_diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu catalog JSON file.
    #[arg(short, long, default_value = "menu_catalog.json")]
    pub catalog: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the three day-plan alternatives.
    Plan {
        /// Read the plan request from a JSON file instead of prompting.
        #[arg(long)]
        request: Option<PathBuf>,

        /// Emit the result as JSON (the API output contract) instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// List the menu catalog.
    Menus,

    /// Import a CSV catalog export and write it as JSON.
    Import {
        /// CSV file to import.
        input: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            request: None,
            json: false,
        }
    }
}
