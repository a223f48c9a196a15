/// Handles argument parsing.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants used throughout the application.
pub mod constants;

/// Project file inventory used as detector evidence.
pub mod inventory;

/// Project configuration record and closed enum vocabularies.
pub mod config;

/// Project type detection from inventory evidence.
pub mod detect;

/// Placeholder substitution for templates.
pub mod render;

/// Scaffolding and file generation into the target project.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;
