//! Ignore Zone CLI
//!
//! Command-line front end for the managed .gitignore zone.

mod cli;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};
use ignore_fs::RootResolver;
use ignore_zone::IgnoreFile;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let file = target_file(cli.file)?;
    match cli.command {
        Commands::Add { patterns } => cmd_add(&file, &patterns),
        Commands::Remove { pattern } => cmd_remove(&file, &pattern),
        Commands::List => cmd_list(&file),
        Commands::Check { pattern, global } => cmd_check(&file, &pattern, global),
    }
}

/// An explicitly given file wins; otherwise manage `.gitignore` at the
/// project root discovered from the current directory.
fn target_file(file: Option<PathBuf>) -> Result<IgnoreFile> {
    match file {
        Some(path) => Ok(IgnoreFile::new(path)),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(IgnoreFile::discover(&cwd, &RootResolver::default()))
        }
    }
}

fn cmd_add(file: &IgnoreFile, patterns: &[String]) -> Result<()> {
    for (pattern, added) in file.ensure_multiple(patterns)? {
        if added {
            println!("{} {}", "added".green(), pattern);
        } else {
            println!("{} {}", "present".yellow(), pattern);
        }
    }
    Ok(())
}

fn cmd_remove(file: &IgnoreFile, pattern: &str) -> Result<()> {
    if file.remove_entry(pattern)? {
        println!("{} {}", "removed".green(), pattern);
        Ok(())
    } else {
        Err(CliError::user(format!("not in managed zone: {pattern}")))
    }
}

fn cmd_list(file: &IgnoreFile) -> Result<()> {
    for entry in file.list_entries()? {
        println!("{entry}");
    }
    Ok(())
}

fn cmd_check(file: &IgnoreFile, pattern: &str, global: bool) -> Result<()> {
    let present = if global {
        file.is_globally_ignored(pattern)?
    } else {
        file.is_ignored(pattern)?
    };

    if present {
        println!("{} {}", "ignored".green(), pattern);
    } else {
        println!("{} {}", "not ignored".yellow(), pattern);
    }
    Ok(())
}
