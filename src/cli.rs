use bloom::nav::Screen;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bloom")]
#[command(about = "Garden catalog demo with welcome, login and home screens", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Screen to open first: Welcome, Login or Home (overrides config)
    #[arg(long, value_name = "SCREEN")]
    pub start: Option<Screen>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the garden catalog
    Catalog {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the navigation graph
    Routes,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
