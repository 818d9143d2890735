use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tracal")]
#[command(about = "Track meals and calories from the command line", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " ", env!("GIT_HASH")))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a food item
    #[command(alias = "a")]
    Add {
        /// Name of the item (e.g. "Fried rice")
        name: String,

        /// Calorie count, a whole number
        calories: String,
    },

    /// List items and the running total
    #[command(alias = "ls")]
    List,

    /// Edit an item by id
    #[command(alias = "e")]
    Edit {
        /// Id of the item to edit (shown by list)
        id: u64,

        /// New name
        name: String,

        /// New calorie count
        calories: String,
    },

    /// Delete an item by id
    #[command(alias = "rm")]
    Delete {
        /// Id of the item to delete
        id: u64,
    },

    /// Remove every tracked item
    Clear {
        /// Skip the confirmation warning
        #[arg(long)]
        yes: bool,
    },

    /// Show the calorie total
    #[command(alias = "t")]
    Total,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., daily-limit)
        key: Option<String>,

        /// Value to set; "none" unsets (if omitted, prints current value)
        value: Option<String>,
    },
}
