//! User-facing operations for the gradeps CLI.
//!
//! Each module implements one command: loading a build script's bootstrap
//! declarations and validating or reporting on them.

pub mod ops_check;
pub mod ops_deps;
pub mod ops_repos;
pub mod ops_show;

use std::path::Path;

use gradeps_core::script::{BuildScript, LoadOptions};

/// Load the build script at `path` with the given options.
pub fn load_script(path: &Path, options: &LoadOptions) -> miette::Result<BuildScript> {
    tracing::debug!(path = %path.display(), "loading build script");
    BuildScript::from_path(path, options)
}
