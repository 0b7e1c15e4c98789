//! Canonical Kotlin-DSL output for a loaded configuration.

use crate::repository::{Repository, RepositoryList};
use crate::script::BuildScript;

/// Render a build script back to Gradle Kotlin DSL text.
///
/// Reparsing the output yields a structure equal to the input. Inner blocks
/// are emitted only when non-empty; an absent block loads back as an empty
/// list, so equality is preserved either way.
pub fn to_gradle(script: &BuildScript) -> String {
    let mut out = String::new();

    out.push_str("buildscript {\n");
    render_repositories(&mut out, &script.buildscript.repositories);
    if !script.buildscript.dependencies.is_empty() {
        out.push_str("    dependencies {\n");
        for dep in script.buildscript.dependencies.iter() {
            out.push_str(&format!("        classpath(\"{dep}\")\n"));
        }
        out.push_str("    }\n");
    }
    out.push_str("}\n");

    out.push_str("\nallprojects {\n");
    render_repositories(&mut out, &script.allprojects.repositories);
    out.push_str("}\n");

    out
}

fn render_repositories(out: &mut String, repositories: &RepositoryList) {
    if repositories.is_empty() {
        return;
    }
    out.push_str("    repositories {\n");
    for repo in repositories.iter() {
        match repo {
            Repository::Custom { url } => {
                out.push_str(&format!("        maven {{ url = \"{url}\" }}\n"));
            }
            shorthand => {
                // Shorthand variants always carry an identifier.
                let name = shorthand.shorthand().unwrap_or_default();
                out.push_str(&format!("        {name}()\n"));
            }
        }
    }
    out.push_str("    }\n");
}
