//! Operation: list pinned classpath dependencies.

use std::path::Path;

use gradeps_core::script::LoadOptions;
use gradeps_util::status::status_warn;

/// Print the classpath dependencies with their pinned versions.
///
/// `-SNAPSHOT` pins are flagged: a changing version defeats the point of
/// pinning the bootstrap classpath.
pub fn deps(path: &Path, options: &LoadOptions) -> miette::Result<()> {
    let script = crate::load_script(path, options)?;
    let dependencies = &script.buildscript.dependencies;

    if dependencies.is_empty() {
        println!("No classpath dependencies declared.");
        return Ok(());
    }

    for dep in dependencies.iter() {
        println!("{} {}", dep.key(), dep.version);
        if dep.is_snapshot_pin() {
            status_warn(
                "Warning",
                &format!("{} pins a changing -SNAPSHOT version", dep.key()),
            );
        }
    }

    Ok(())
}
