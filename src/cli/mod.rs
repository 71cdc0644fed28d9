pub mod args;
pub mod context;
pub mod create;
pub mod generate;
pub mod packages;
pub mod report;
pub mod runner;
pub mod toolchain;

pub use args::{
    get_log_level_from_verbose, parse_cli, BuildArgs, Cli, Commands, CreateArgs, DevArgs,
    InfoArgs, InstallArgs, InstallCommand, ListArgs, ListCommand, NewArgs, RemoveCommand,
    ServeArgs,
};
pub use runner::{run, Runner};
