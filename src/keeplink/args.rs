use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keeplink")]
#[command(about = "Keep and recall named links from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the bookmark store directory
    #[arg(short, long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a bookmark
    #[command(alias = "a")]
    Add {
        /// Display name for the link
        name: String,

        /// Target URL (https:// is assumed when no scheme is given)
        url: String,
    },

    /// List bookmarks
    #[command(alias = "ls")]
    List,

    /// Remove a bookmark by its exact name and URL
    #[command(alias = "rm")]
    Remove {
        /// Name of the bookmark
        name: String,

        /// Stored URL of the bookmark
        url: String,
    },

    /// Print the path of the bookmark data file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
