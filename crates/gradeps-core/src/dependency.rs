//! Classpath dependency declarations and the spec they are collected into.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::VersionPin;

/// A buildscript classpath dependency: a Maven coordinate with a pinned
/// version, loaded into the build tool's own execution environment rather
/// than into the application being built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClasspathDependency {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl ClasspathDependency {
    /// Parse `"group:artifact:version"` into a dependency.
    ///
    /// All three parts must be non-empty and the version must be a valid
    /// pin token.
    pub fn parse(s: &str) -> Result<Self, String> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(format!(
                "expected 'group:artifact:version' coordinate, got '{s}'"
            ));
        }
        let (group, artifact, version) = (parts[0], parts[1], parts[2]);
        if group.is_empty() || artifact.is_empty() {
            return Err(format!("coordinate '{s}' has an empty group or artifact"));
        }
        VersionPin::parse(version).map_err(|e| format!("coordinate '{s}': {e}"))?;
        Ok(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
        })
    }

    /// The `group:artifact` key used for version lookups.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// Whether the pinned version is a changing `-SNAPSHOT`.
    pub fn is_snapshot_pin(&self) -> bool {
        VersionPin::parse(&self.version)
            .map(|pin| pin.is_snapshot())
            .unwrap_or(false)
    }
}

impl fmt::Display for ClasspathDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// The ordered classpath dependencies declared in a bootstrap block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec(Vec<ClasspathDependency>);

impl DependencySpec {
    pub fn new(deps: Vec<ClasspathDependency>) -> Self {
        Self(deps)
    }

    /// Pinned version for a `group:artifact` key, if declared.
    ///
    /// When the same coordinate is declared more than once, the first
    /// declaration wins, matching repository precedence semantics.
    pub fn version_of(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|dep| dep.key() == key)
            .map(|dep| dep.version.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClasspathDependency> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coordinate() {
        let dep = ClasspathDependency::parse("com.android.tools.build:gradle:8.1.0").unwrap();
        assert_eq!(dep.group, "com.android.tools.build");
        assert_eq!(dep.artifact, "gradle");
        assert_eq!(dep.version, "8.1.0");
        assert_eq!(dep.key(), "com.android.tools.build:gradle");
        assert_eq!(dep.to_string(), "com.android.tools.build:gradle:8.1.0");
    }

    #[test]
    fn parse_rejects_short_coordinate() {
        assert!(ClasspathDependency::parse("gradle:8.1.0").is_err());
        assert!(ClasspathDependency::parse("a:b:c:d").is_err());
    }

    #[test]
    fn parse_rejects_empty_parts() {
        assert!(ClasspathDependency::parse(":gradle:8.1.0").is_err());
        assert!(ClasspathDependency::parse("com.android.tools.build::8.1.0").is_err());
        assert!(ClasspathDependency::parse("com.android.tools.build:gradle:").is_err());
    }

    #[test]
    fn parse_rejects_invalid_version() {
        assert!(ClasspathDependency::parse("org.jetbrains.kotlin:kotlin-gradle-plugin:latest").is_err());
    }

    #[test]
    fn version_lookup() {
        let spec = DependencySpec::new(vec![
            ClasspathDependency::parse("com.android.tools.build:gradle:8.1.0").unwrap(),
            ClasspathDependency::parse("org.jetbrains.kotlin:kotlin-gradle-plugin:1.9.20").unwrap(),
        ]);
        assert_eq!(
            spec.version_of("com.android.tools.build:gradle"),
            Some("8.1.0")
        );
        assert_eq!(
            spec.version_of("org.jetbrains.kotlin:kotlin-gradle-plugin"),
            Some("1.9.20")
        );
        assert_eq!(spec.version_of("org.jetbrains.kotlin:absent"), None);
    }

    #[test]
    fn snapshot_pin_flagged() {
        let dep = ClasspathDependency::parse("com.example:plugin:1.0-SNAPSHOT").unwrap();
        assert!(dep.is_snapshot_pin());
        let dep = ClasspathDependency::parse("com.example:plugin:1.0").unwrap();
        assert!(!dep.is_snapshot_pin());
    }
}
