//! Operation: list declared repositories in precedence order.

use std::path::Path;

use gradeps_core::repository::RepositoryList;
use gradeps_core::script::LoadOptions;

/// Print both repository lists with their resolved base URLs.
///
/// Positions reflect artifact-lookup precedence: the first listed host is
/// queried first.
pub fn repos(path: &Path, options: &LoadOptions) -> miette::Result<()> {
    let script = crate::load_script(path, options)?;

    print_list("buildscript", &script.buildscript.repositories);
    print_list("allprojects", &script.allprojects.repositories);

    Ok(())
}

fn print_list(block: &str, repositories: &RepositoryList) {
    println!("{block}:");
    if repositories.is_empty() {
        println!("  (none)");
        return;
    }
    for (position, repo) in repositories.iter().enumerate() {
        println!("  {}. {} ({})", position + 1, repo.name(), repo.base_url());
    }
}
