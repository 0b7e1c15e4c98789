//! Repository declarations: recognized shorthand hosts, custom URL entries,
//! and the ordered lists they are collected into.

use serde::{Deserialize, Serialize};

use gradeps_util::errors::GradepsError;

/// Maven Central base URL.
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

/// Google's Maven repository.
pub const GOOGLE_MAVEN_URL: &str = "https://maven.google.com";

/// The Gradle plugin portal's Maven-layout mirror.
pub const GRADLE_PLUGIN_PORTAL_URL: &str = "https://plugins.gradle.org/m2";

/// A repository declared inside a `repositories` block.
///
/// Shorthand hosts form a closed set; anything else must be declared as a
/// `maven { url = "..." }` block and is carried as [`Repository::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Repository {
    Google,
    MavenCentral,
    MavenLocal,
    GradlePluginPortal,
    Custom { url: String },
}

impl Repository {
    /// Resolve a shorthand call identifier (`google`, `mavenCentral`, ...).
    ///
    /// Returns `None` for identifiers outside the recognized set.
    pub fn from_shorthand(name: &str) -> Option<Self> {
        match name {
            "google" => Some(Self::Google),
            "mavenCentral" => Some(Self::MavenCentral),
            "mavenLocal" => Some(Self::MavenLocal),
            "gradlePluginPortal" => Some(Self::GradlePluginPortal),
            _ => None,
        }
    }

    /// The shorthand identifier, or `None` for custom URL entries.
    pub fn shorthand(&self) -> Option<&'static str> {
        match self {
            Self::Google => Some("google"),
            Self::MavenCentral => Some("mavenCentral"),
            Self::MavenLocal => Some("mavenLocal"),
            Self::GradlePluginPortal => Some("gradlePluginPortal"),
            Self::Custom { .. } => None,
        }
    }

    /// Display name used in listings and error messages.
    pub fn name(&self) -> &str {
        match self {
            Self::Custom { url } => url,
            other => other.shorthand().unwrap_or_default(),
        }
    }

    /// Base URL an orchestrator would query for artifacts.
    ///
    /// `mavenLocal` resolves to the local `~/.m2/repository` tree rather than
    /// a remote host.
    pub fn base_url(&self) -> String {
        match self {
            Self::Google => GOOGLE_MAVEN_URL.to_string(),
            Self::MavenCentral => MAVEN_CENTRAL_URL.to_string(),
            Self::GradlePluginPortal => GRADLE_PLUGIN_PORTAL_URL.to_string(),
            Self::MavenLocal => {
                let home = std::env::var("HOME")
                    .or_else(|_| std::env::var("USERPROFILE"))
                    .unwrap_or_else(|_| ".".to_string());
                format!("{home}/.m2/repository")
            }
            Self::Custom { url } => url.trim_end_matches('/').to_string(),
        }
    }
}

/// How duplicate repository declarations within one list are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail the load with a `DuplicateRepository` error.
    #[default]
    Reject,
    /// Keep the first occurrence; later duplicates are dropped so declared
    /// precedence is unchanged.
    Dedupe,
}

/// An ordered repository list; position is artifact-lookup precedence.
///
/// Built once by the parser and never mutated afterwards. An empty
/// `repositories {}` block yields an empty list; no defaults are injected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryList(Vec<Repository>);

impl RepositoryList {
    /// Collect declarations into a list, applying the duplicate policy.
    ///
    /// `list` names the enclosing block (`buildscript`, `allprojects`) for
    /// error reporting.
    pub fn build(
        list: &str,
        entries: Vec<Repository>,
        policy: DuplicatePolicy,
    ) -> Result<Self, GradepsError> {
        let mut kept: Vec<Repository> = Vec::with_capacity(entries.len());
        for repo in entries {
            if kept.contains(&repo) {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(GradepsError::DuplicateRepository {
                            list: list.to_string(),
                            name: repo.name().to_string(),
                        });
                    }
                    DuplicatePolicy::Dedupe => continue,
                }
            }
            kept.push(repo);
        }
        Ok(Self(kept))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Repository> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Repository] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_round_trip() {
        for name in ["google", "mavenCentral", "mavenLocal", "gradlePluginPortal"] {
            let repo = Repository::from_shorthand(name).unwrap();
            assert_eq!(repo.shorthand(), Some(name));
            assert_eq!(repo.name(), name);
        }
    }

    #[test]
    fn unrecognized_shorthand() {
        assert!(Repository::from_shorthand("jcenter").is_none());
        assert!(Repository::from_shorthand("").is_none());
    }

    #[test]
    fn base_urls() {
        assert_eq!(Repository::Google.base_url(), "https://maven.google.com");
        assert_eq!(
            Repository::MavenCentral.base_url(),
            "https://repo.maven.apache.org/maven2"
        );
        let custom = Repository::Custom {
            url: "https://repo.example.com/maven/".to_string(),
        };
        assert_eq!(custom.base_url(), "https://repo.example.com/maven");
    }

    #[test]
    fn build_preserves_declaration_order() {
        let list = RepositoryList::build(
            "buildscript",
            vec![Repository::Google, Repository::MavenCentral],
            DuplicatePolicy::Reject,
        )
        .unwrap();
        assert_eq!(
            list.as_slice(),
            [Repository::Google, Repository::MavenCentral]
        );
    }

    #[test]
    fn build_rejects_duplicates() {
        let err = RepositoryList::build(
            "allprojects",
            vec![
                Repository::Google,
                Repository::MavenCentral,
                Repository::Google,
            ],
            DuplicatePolicy::Reject,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GradepsError::DuplicateRepository { ref list, ref name }
                if list == "allprojects" && name == "google"
        ));
    }

    #[test]
    fn build_dedupes_keeping_first() {
        let list = RepositoryList::build(
            "buildscript",
            vec![
                Repository::MavenCentral,
                Repository::Google,
                Repository::MavenCentral,
            ],
            DuplicatePolicy::Dedupe,
        )
        .unwrap();
        assert_eq!(
            list.as_slice(),
            [Repository::MavenCentral, Repository::Google]
        );
    }

    #[test]
    fn empty_list_is_empty() {
        let list = RepositoryList::build("buildscript", vec![], DuplicatePolicy::Reject).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
