use crate::constants::{defaults, exit_codes, verbosity, CLI_NAME};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// KIMU CLI: create, extend and run KIMU framework projects.
#[derive(Parser, Debug)]
#[command(name = CLI_NAME, author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding the generator templates.
    #[arg(long = "templates-dir", value_name = "DIR", global = true)]
    pub templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a component from a generator template.
    New(NewArgs),

    /// List available generator types.
    #[command(name = "new:list")]
    NewList,

    /// Create a new KIMU project in a new folder.
    Create(CreateArgs),

    /// Install modules or extensions.
    #[command(subcommand, visible_alias = "i")]
    Install(InstallCommand),

    /// List available or installed modules and extensions.
    #[command(subcommand, visible_alias = "l")]
    List(ListCommand),

    /// Remove installed modules or extensions.
    #[command(subcommand, visible_alias = "rm")]
    Remove(RemoveCommand),

    /// Build the project through its npm scripts.
    Build(BuildArgs),

    /// Start the development server.
    Dev(DevArgs),

    /// Serve the built project.
    Serve(ServeArgs),

    /// Display project information.
    Info(InfoArgs),

    /// Run diagnostics on the current project.
    Doctor,

    /// Display version information.
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Generator type (see `kimu new:list`).
    #[arg(value_name = "TYPE")]
    pub kind: String,

    /// Component name in kebab-case.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Custom target directory.
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Write into an existing component directory.
    #[arg(short, long)]
    pub force: bool,

    /// Skip manifest registration.
    #[arg(long = "no-register")]
    pub no_register: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Project name; also the directory created.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Git URL or local directory to start from.
    #[arg(long, value_name = "URL_OR_PATH")]
    pub template: Option<String>,

    /// Skip `npm install`.
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Initialize a git repository with an initial commit.
    #[arg(long)]
    pub git: bool,

    /// Replace an existing directory.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum InstallCommand {
    /// Install a module from the registry.
    #[command(visible_alias = "m")]
    Module(InstallArgs),

    /// Install an extension from the registry.
    #[command(visible_alias = "e")]
    Extension(InstallArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InstallArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Install a specific version.
    #[arg(long = "version", value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Use a custom registry URL.
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Reinstall if already installed.
    #[arg(short, long)]
    pub force: bool,

    /// Install as a development dependency.
    #[arg(long = "save-dev")]
    pub save_dev: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// Modules available in the registry.
    #[command(visible_alias = "m")]
    Modules(ListArgs),

    /// Extensions available in the registry.
    #[command(visible_alias = "e")]
    Extensions(ListArgs),

    /// Packages installed in the current project.
    #[command(visible_alias = "i")]
    Installed,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Show package descriptions.
    #[arg(long)]
    pub details: bool,
}

#[derive(Subcommand, Debug)]
pub enum RemoveCommand {
    /// Remove an installed module.
    #[command(visible_alias = "m")]
    Module {
        #[arg(value_name = "NAME")]
        name: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove an installed extension.
    #[command(visible_alias = "e")]
    Extension {
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Development build (`build:dev`).
    #[arg(long, conflicts_with_all = ["local", "prod"])]
    pub dev: bool,

    /// Local testing build (`build:local`).
    #[arg(long, conflicts_with = "prod")]
    pub local: bool,

    /// Production build (`build:prod`).
    #[arg(long)]
    pub prod: bool,

    /// Rebuild on changes.
    #[arg(long)]
    pub watch: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DevArgs {
    /// Port to run the server on.
    #[arg(short, long, default_value_t = defaults::DEV_PORT)]
    pub port: u16,

    /// Host to run the server on.
    #[arg(short = 'H', long, default_value = defaults::HOST)]
    pub host: String,

    /// Open a browser window.
    #[arg(long)]
    pub open: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to run the server on.
    #[arg(short, long, default_value_t = defaults::SERVE_PORT)]
    pub port: u16,

    /// Host to run the server on.
    #[arg(short = 'H', long, default_value = defaults::HOST)]
    pub host: String,

    /// Open a browser window.
    #[arg(long)]
    pub open: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Print JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                | ErrorKind::MissingSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
///
/// Without `-v` warnings still show, so skipped templates and manifests are
/// always reported.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
