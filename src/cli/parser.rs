use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Command-line interface definition for moodtrack
/// Daily mood journal with chart, mood prediction and activity suggestions
#[derive(Parser)]
#[command(
    name = "moodtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small mood journal: log your daily mood and activity, chart it, predict your mood and get activity suggestions",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a custom journal)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the session date (YYYY-MM-DD) instead of the local clock
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<NaiveDate>,

    /// Without a command, an interactive session is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },
}
