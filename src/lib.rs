/// Handles argument parsing and command dispatch.
pub mod cli;

/// Shared constants: file names, defaults, exit codes.
pub mod constants;

/// Runs npm, npx and node on behalf of the CLI.
pub mod delegate;

/// Defines custom error types.
pub mod error;

/// Extension traits for paths and component names.
pub mod ext;

/// Component generation from templates.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Sources a new project can be created from.
pub mod loader;

/// Read-only views of an existing project.
pub mod project;

/// User confirmation prompts.
pub mod prompt;

/// Module and extension catalog.
pub mod registry;

/// Name validators
pub mod validation;
