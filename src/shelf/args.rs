use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "Personal library catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this catalog file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        /// Publication year
        #[arg(allow_hyphen_values = true)]
        year: String,
    },

    /// Delete a book by id
    #[command(alias = "rm")]
    Delete { id: String },

    /// Search by title, author, or exact year
    #[command(alias = "s")]
    Search { query: String },

    /// List every book
    #[command(alias = "ls")]
    List,

    /// Set a book's status (available or checked-out)
    Status { id: String, status: String },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
