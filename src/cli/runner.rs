use crate::cli::{
    context::CommandContext,
    create::handle_create,
    generate::{handle_new, handle_new_list},
    packages::{handle_install, handle_list, handle_remove},
    report::{handle_doctor, handle_info, handle_version},
    toolchain::{handle_build, handle_dev, handle_serve},
    Cli, Commands,
};
use crate::error::Result;
use crate::registry::{MockRegistry, Registry};
use std::path::PathBuf;

/// Dispatches a parsed command line to its handler.
pub struct Runner {
    cli: Cli,
    context: CommandContext,
    registry: Box<dyn Registry>,
}

impl Runner {
    /// A runner operating on the process working directory.
    pub fn new(cli: Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::with_cwd(cli, cwd))
    }

    /// A runner operating on `cwd`.
    pub fn with_cwd(cli: Cli, cwd: PathBuf) -> Self {
        let context = CommandContext::new(cwd, cli.verbose, cli.templates_dir.clone());
        Self { cli, context, registry: Box::new(MockRegistry::new()) }
    }

    /// Replaces the package registry.
    pub fn with_registry(mut self, registry: Box<dyn Registry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn run(self) -> Result<()> {
        let context = &self.context;
        match &self.cli.command {
            Commands::New(args) => handle_new(context, args),
            Commands::NewList => handle_new_list(context),
            Commands::Create(args) => handle_create(context, args),
            Commands::Install(command) => handle_install(context, self.registry.as_ref(), command),
            Commands::List(command) => handle_list(context, self.registry.as_ref(), command),
            Commands::Remove(command) => handle_remove(context, command),
            Commands::Build(args) => handle_build(context, args),
            Commands::Dev(args) => handle_dev(context, args),
            Commands::Serve(args) => handle_serve(context, args),
            Commands::Info(args) => handle_info(context, args),
            Commands::Doctor => handle_doctor(context),
            Commands::Version => handle_version(context),
        }
    }
}

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    Runner::new(cli)?.run()
}
