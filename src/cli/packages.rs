use crate::cli::{
    context::CommandContext, InstallArgs, InstallCommand, ListArgs, ListCommand, RemoveCommand,
};
use crate::error::Result;
use crate::project::{read_installed_packages, InstalledPackages};
use crate::prompt::confirm;
use crate::registry::{install_package, InstallOptions, PackageKind, Registry};

/// `kimu install module|extension <name>`
pub fn handle_install(
    context: &CommandContext,
    registry: &dyn Registry,
    command: &InstallCommand,
) -> Result<()> {
    let (kind, args): (PackageKind, &InstallArgs) = match command {
        InstallCommand::Module(args) => (PackageKind::Module, args),
        InstallCommand::Extension(args) => (PackageKind::Extension, args),
    };
    log::debug!("Installing {kind} {} into '{}'", args.name, context.cwd().display());

    let options = InstallOptions {
        version: args.package_version.clone(),
        registry: args.registry.clone(),
        force: args.force,
        save_dev: args.save_dev,
    };
    let info = install_package(registry, &args.name, kind, &options)?;
    println!("{} {} installed successfully! (v{})", capitalized(kind), info.name, info.version);
    Ok(())
}

/// `kimu list modules|extensions|installed`
pub fn handle_list(
    context: &CommandContext,
    registry: &dyn Registry,
    command: &ListCommand,
) -> Result<()> {
    let installed = read_installed_packages(context.cwd());
    match command {
        ListCommand::Modules(args) => {
            print_catalog(registry, PackageKind::Module, &installed, args)
        }
        ListCommand::Extensions(args) => {
            print_catalog(registry, PackageKind::Extension, &installed, args)
        }
        ListCommand::Installed => print_installed(&installed),
    }
    Ok(())
}

fn print_catalog(
    registry: &dyn Registry,
    kind: PackageKind,
    installed: &InstalledPackages,
    args: &ListArgs,
) {
    let packages = registry.list(kind);
    let installed_names = match kind {
        PackageKind::Module => &installed.modules,
        PackageKind::Extension => &installed.extensions,
    };

    println!("Found {} {kind}s", packages.len());
    println!("\nAvailable {}s:\n", capitalized(kind));
    for package in packages {
        let is_installed = installed_names.contains(&package.name);
        let (icon, status) = if is_installed { ("✓", " [installed]") } else { ("○", "") };
        println!("  {icon} {} v{}{status}", package.name, package.version);
        if args.details {
            println!("    {}", package.description);
        }
    }
    println!();
}

fn print_installed(installed: &InstalledPackages) {
    if installed.total() == 0 {
        println!("No installed packages detected");
        println!("\nInstalled Packages:\n");
        println!("  (No installed packages found)\n");
        return;
    }

    println!("Found {} installed packages", installed.total());
    println!("\nInstalled Packages:\n");
    for (label, names) in [("Modules", &installed.modules), ("Extensions", &installed.extensions)] {
        if names.is_empty() {
            continue;
        }
        println!("  {label}:");
        for name in names {
            println!("    ✓ {name}");
        }
        println!();
    }
}

/// `kimu remove module|extension <name>`
pub fn handle_remove(context: &CommandContext, command: &RemoveCommand) -> Result<()> {
    match command {
        RemoveCommand::Module { name, yes } => {
            if !confirm(*yes, format!("Remove module '{name}' from this project?"))? {
                println!("Removal of module {name} cancelled.");
                return Ok(());
            }
            crate::delegate::remove_module(context.cwd(), name)?;
            println!("Module {name} removed successfully!");
        }
        RemoveCommand::Extension { name } => {
            log::warn!(
                "Extension removal is not yet implemented. Please remove '{name}' manually or wait for future updates."
            );
        }
    }
    Ok(())
}

fn capitalized(kind: PackageKind) -> &'static str {
    match kind {
        PackageKind::Module => "Module",
        PackageKind::Extension => "Extension",
    }
}
