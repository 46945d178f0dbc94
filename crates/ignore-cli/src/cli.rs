//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ignore Zone - manage the machine-owned block of a .gitignore file
#[derive(Parser, Debug)]
#[command(name = "ignz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Target file (defaults to .gitignore at the project root)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add one or more patterns to the managed zone
    ///
    /// Patterns already present are reported and left alone.
    Add {
        /// Patterns to add, in order
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Remove a pattern from the managed zone
    Remove {
        /// Pattern to remove
        pattern: String,
    },

    /// List the entries of the managed zone
    List,

    /// Check whether a pattern is present
    Check {
        /// Pattern to look up
        pattern: String,

        /// Search the whole file, not just the managed zone
        #[arg(long)]
        global: bool,
    },
}
