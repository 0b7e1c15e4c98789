//! Command dispatch and handler modules.

mod check;
mod deps;
mod repos;
mod show;

use std::path::PathBuf;

use miette::Result;
use tracing::debug;

use gradeps_core::config::GlobalConfig;
use gradeps_core::repository::DuplicatePolicy;
use gradeps_core::script::LoadOptions;
use gradeps_util::errors::GradepsError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = Context::resolve(&cli)?;
    match cli.command {
        Command::Check => check::exec(&ctx, cli.verbose),
        Command::Show { ref format } => show::exec(&ctx, format),
        Command::Repos => repos::exec(&ctx),
        Command::Deps => deps::exec(&ctx),
    }
}

/// Resolved invocation context: the script to load and the load options.
pub struct Context {
    pub script: PathBuf,
    pub options: LoadOptions,
}

impl Context {
    fn resolve(cli: &Cli) -> Result<Self> {
        let script = match &cli.file {
            Some(path) => {
                if !path.is_file() {
                    return Err(GradepsError::Generic {
                        message: format!("No build script at {}", path.display()),
                    }
                    .into());
                }
                path.clone()
            }
            None => {
                let cwd = std::env::current_dir().map_err(GradepsError::Io)?;
                gradeps_util::fs::find_build_script(&cwd).ok_or_else(|| {
                    GradepsError::Generic {
                        message: "No build.gradle or build.gradle.kts found in this directory \
                                  or any parent"
                            .to_string(),
                    }
                })?
            }
        };

        let duplicates = match cli.duplicates.as_deref() {
            Some("reject") => DuplicatePolicy::Reject,
            Some("dedupe") => DuplicatePolicy::Dedupe,
            Some(other) => {
                return Err(GradepsError::Generic {
                    message: format!(
                        "Unknown duplicate policy '{other}' (expected 'reject' or 'dedupe')"
                    ),
                }
                .into());
            }
            None => GlobalConfig::load().unwrap_or_default().load.duplicates,
        };

        debug!(script = %script.display(), ?duplicates, "resolved invocation context");

        Ok(Self {
            script,
            options: LoadOptions { duplicates },
        })
    }
}
