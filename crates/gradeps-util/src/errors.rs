use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all gradeps operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GradepsError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The script text could not be parsed into the expected block shape.
    #[error("Syntax error at line {line}: {message}")]
    #[diagnostic(help("Check the build script for unbalanced braces or unterminated strings"))]
    Syntax { line: usize, message: String },

    /// A repository shorthand outside the recognized set.
    #[error("Unknown repository '{name}' at line {line}")]
    #[diagnostic(help(
        "Recognized shorthands: google, mavenCentral, mavenLocal, gradlePluginPortal; \
         other hosts must be declared as maven {{ url = \"...\" }}"
    ))]
    UnknownRepository { line: usize, name: String },

    /// The same repository declared twice within one list.
    #[error("Repository '{name}' declared twice in the {list} block")]
    #[diagnostic(help("Remove the duplicate declaration, or load with the dedupe policy"))]
    DuplicateRepository { list: String, name: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type GradepsResult<T> = miette::Result<T>;
