//! CLI argument definitions for gradeps.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gradeps",
    version,
    about = "Inspect Gradle buildscript repository and dependency declarations",
    long_about = "gradeps loads the bootstrap configuration of a Gradle build script \
                  (the buildscript and allprojects blocks) and reports the declared \
                  repositories and pinned classpath plugins without executing the build."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the build script (defaults to the nearest build.gradle(.kts))
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Duplicate repository policy: reject, dedupe
    #[arg(long, global = true)]
    pub duplicates: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the build script's bootstrap declarations
    Check,

    /// Print the loaded configuration
    Show {
        /// Output format: text, json, gradle
        #[arg(short = 'o', long, default_value = "text")]
        format: String,
    },

    /// List declared repositories in precedence order
    Repos,

    /// List pinned classpath dependencies
    Deps,
}

pub fn parse() -> Cli {
    Cli::parse()
}
