//! The loaded build-script model and its load entry points.

use serde::{Deserialize, Serialize};
use std::path::Path;

use gradeps_util::errors::GradepsError;

use crate::dependency::DependencySpec;
use crate::parser;
use crate::repository::{DuplicatePolicy, RepositoryList};

/// The bootstrap configuration of a Gradle build script.
///
/// All fields are built once at load time and never mutated afterwards; the
/// consumer (an external build orchestrator) only reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildScript {
    /// The `buildscript` block: where the build tool fetches its own plugins
    /// from, and which plugin versions it loads.
    pub buildscript: BootstrapBlock,
    /// The `allprojects` block: repository defaults applied to every
    /// sub-project of a multi-project build.
    pub allprojects: ProjectDefaults,
}

/// Contents of the `buildscript` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapBlock {
    pub repositories: RepositoryList,
    pub dependencies: DependencySpec,
}

/// Repository defaults applied uniformly to all sub-projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDefaults {
    pub repositories: RepositoryList,
}

/// Options controlling a single load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub duplicates: DuplicatePolicy,
}

impl BuildScript {
    /// Load and parse a build script from the given path.
    pub fn from_path(path: &Path, options: &LoadOptions) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GradepsError::Generic {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content, options)
    }

    /// Parse a build script from a string.
    pub fn parse(content: &str, options: &LoadOptions) -> miette::Result<Self> {
        parser::parse(content, options).map_err(Into::into)
    }
}
