//! Core types for the gradeps build-script loader.
//!
//! This crate defines the data model for a Gradle bootstrap configuration:
//! ordered repository lists, pinned classpath dependency specs, and the
//! project-wide repository defaults, together with the lexer, parser, and
//! renderer that move between script text and that model.
//!
//! This crate is intentionally free of async code and network I/O. Loading
//! a configuration reads one file and builds immutable structures; fetching
//! anything from the declared repositories is the consumer's business.

pub mod config;
pub mod dependency;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod repository;
pub mod script;
pub mod version;
