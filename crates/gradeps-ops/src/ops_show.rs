//! Operation: print the loaded configuration structure.

use std::path::Path;

use gradeps_core::render;
use gradeps_core::script::LoadOptions;
use gradeps_util::errors::GradepsError;

/// Output format for `gradeps show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Text,
    Json,
    Gradle,
}

impl ShowFormat {
    /// Parse a CLI format name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "gradle" => Some(Self::Gradle),
            _ => None,
        }
    }
}

/// Load the script and print it in the requested format.
pub fn show(path: &Path, options: &LoadOptions, format: ShowFormat) -> miette::Result<()> {
    let script = crate::load_script(path, options)?;

    match format {
        ShowFormat::Json => {
            let json =
                serde_json::to_string_pretty(&script).map_err(|e| GradepsError::Generic {
                    message: format!("Failed to serialize configuration: {e}"),
                })?;
            println!("{json}");
        }
        ShowFormat::Gradle => {
            print!("{}", render::to_gradle(&script));
        }
        ShowFormat::Text => {
            println!("buildscript");
            println!("  repositories");
            for repo in script.buildscript.repositories.iter() {
                println!("    {} ({})", repo.name(), repo.base_url());
            }
            println!("  dependencies");
            for dep in script.buildscript.dependencies.iter() {
                println!("    {} {}", dep.key(), dep.version);
            }
            println!("allprojects");
            println!("  repositories");
            for repo in script.allprojects.repositories.iter() {
                println!("    {} ({})", repo.name(), repo.base_url());
            }
        }
    }

    Ok(())
}
