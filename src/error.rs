use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Git operation failed. Original error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Prompt failed. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Failed to walk directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Not in a KIMU project directory: '{config_file}' not found. Run this command from the root of a KIMU project.")]
    NotInProjectError { config_file: String },

    #[error("Invalid component type: '{kind}'. Valid types: {available}. Run \"kimu new:list\" to see all available generators.")]
    UnknownGeneratorError { kind: String, available: String },

    #[error("Invalid name '{name}': {reason}.")]
    InvalidNameError { name: String, reason: String },

    #[error("Component already exists: '{target}'. Use --force to overwrite.")]
    ComponentExistsError { target: String },

    #[error("Cannot proceed: project directory '{target}' already exists. Use --force to overwrite it.")]
    ProjectDirectoryExistsError { target: String },

    #[error("Templates directory not found. Tried: {tried}.")]
    TemplatesRootNotFound { tried: String },

    #[error("Generator config not found: '{path}'.")]
    GeneratorConfigNotFound { path: String },

    #[error("Invalid generator config '{path}': {reason}.")]
    GeneratorConfigInvalid { path: String, reason: String },

    #[error("Cannot register in '{file}': {reason}.")]
    ManifestShapeError { file: String, reason: String },

    #[error("{kind} \"{name}\" not found in registry.")]
    PackageNotFound { kind: String, name: String },

    #[error("kimu-core not found. Please ensure kimu-core is installed as a dependency or accessible in your workspace.")]
    KimuCoreNotFound,

    #[error("Build directory '{dist_dir}' not found. Please run \"kimu build\" first.")]
    BuildArtifactsMissing { dist_dir: String },

    /// A delegated tool (npm, node, npx) ran but exited unsuccessfully.
    #[error("'{command}' failed with status: {status}{output}")]
    CommandFailed { command: String, status: ExitStatus, output: String },

    #[error("Your project has {failures} failing check(s). Please fix the failures above.")]
    DiagnosticsFailed { failures: usize },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with kimu's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Process exit code for this error.
    ///
    /// A delegated command that exited with a code passes it through; a child
    /// killed by a signal, and every other error, map to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandFailed { status, .. } => status
                .code()
                .filter(|code| *code != crate::constants::exit_codes::SUCCESS)
                .unwrap_or(crate::constants::exit_codes::FAILURE),
            _ => crate::constants::exit_codes::FAILURE,
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with [`Error::exit_code`]
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
