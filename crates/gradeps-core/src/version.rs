//! Version pin validation.
//!
//! Classpath pins use Maven-style version tokens: dot/dash separated
//! segments, numeric or textual (`8.1.0`, `1.9.20`, `1.0-SNAPSHOT`,
//! `2.0.0-RC2`). A pin is accepted when it is non-empty, free of
//! whitespace, leads with a digit, and has no empty segments.

use std::fmt;

/// A validated version pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPin {
    original: String,
}

impl VersionPin {
    /// Parse and validate a version token.
    pub fn parse(version: &str) -> Result<Self, String> {
        if version.is_empty() {
            return Err("version must not be empty".to_string());
        }
        if version
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(format!("version '{version}' contains whitespace"));
        }
        if !version.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(format!("version '{version}' does not start with a digit"));
        }
        let mut current = String::new();
        for ch in version.chars() {
            if ch == '.' || ch == '-' {
                if current.is_empty() {
                    return Err(format!("version '{version}' has an empty segment"));
                }
                current.clear();
            } else {
                current.push(ch);
            }
        }
        if current.is_empty() {
            return Err(format!("version '{version}' has an empty segment"));
        }
        Ok(Self {
            original: version.to_string(),
        })
    }

    /// Whether this pin names a changing `-SNAPSHOT` version.
    pub fn is_snapshot(&self) -> bool {
        self.original.ends_with("-SNAPSHOT")
    }

    /// The pin without the `-SNAPSHOT` suffix.
    pub fn base_version(&self) -> &str {
        self.original
            .strip_suffix("-SNAPSHOT")
            .unwrap_or(&self.original)
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl fmt::Display for VersionPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
