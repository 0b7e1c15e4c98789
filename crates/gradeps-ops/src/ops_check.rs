//! Operation: validate a build script's bootstrap declarations.

use std::path::Path;

use gradeps_core::script::LoadOptions;
use gradeps_util::status::{status, status_info};

/// Load the script and report a summary, surfacing any load error.
pub fn check(path: &Path, options: &LoadOptions, verbose: bool) -> miette::Result<()> {
    let script = crate::load_script(path, options)?;

    status("Validated", &path.display().to_string());
    status_info(
        "Bootstrap",
        &format!(
            "{} repositories, {} classpath dependencies",
            script.buildscript.repositories.len(),
            script.buildscript.dependencies.len()
        ),
    );
    status_info(
        "Projects",
        &format!(
            "{} default repositories",
            script.allprojects.repositories.len()
        ),
    );

    if verbose {
        for dep in script.buildscript.dependencies.iter() {
            status_info("Pinned", &dep.to_string());
        }
    }

    Ok(())
}
