use crate::cli::{context::CommandContext, InfoArgs};
use crate::constants::{CLI_NAME, CLI_VERSION};
use crate::error::{Error, Result};
use crate::project::{gather_project_info, run_diagnostics, CheckStatus, DiagnosticSummary};

/// `kimu version`
pub fn handle_version(context: &CommandContext) -> Result<()> {
    if context.verbose() {
        println!("KIMU CLI Version Information\n");
        println!("  • CLI Name: {CLI_NAME}");
        println!("  • CLI Version: {CLI_VERSION}");
        println!("  • Platform: {}", std::env::consts::OS);
        println!("  • Architecture: {}", std::env::consts::ARCH);
    } else {
        println!("{CLI_NAME} v{CLI_VERSION}");
    }
    Ok(())
}

/// `kimu info`
pub fn handle_info(context: &CommandContext, args: &InfoArgs) -> Result<()> {
    let info = gather_project_info(context.cwd());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("KIMU CLI Information\n");
    println!("  • CLI Version: {}", info.cli.version);
    if context.verbose() {
        println!("  • Platform: {}", info.environment.platform);
        println!("  • Architecture: {}", info.environment.architecture);
        println!("  • Working Directory: {}", info.environment.cwd);
    }
    println!();

    match info.project {
        Some(project) if project.is_valid => {
            println!("KIMU Project Detected");
            println!("  • Name: {}", project.name);
            println!("  • Version: {}", project.version);
            println!("  • KIMU Core: {}", project.kimu_core);
            println!("  • Template: {}", project.template);
            if !project.modules.is_empty() {
                println!("  • Modules: {}", project.modules.join(", "));
            }
            if !project.extensions.is_empty() {
                println!("  • Extensions: {}", project.extensions.join(", "));
            }
        }
        Some(_) => log::warn!("Invalid KIMU project configuration detected"),
        None => {
            println!("No KIMU project detected in current directory");
            println!("  Run `kimu create <name>` to create a new KIMU project");
        }
    }
    Ok(())
}

/// `kimu doctor`
pub fn handle_doctor(context: &CommandContext) -> Result<()> {
    println!("\nKIMU Project Diagnostics");

    let diagnostics = run_diagnostics(context.cwd());
    for diagnostic in &diagnostics {
        println!("\n{}:", diagnostic.category);
        for check in &diagnostic.checks {
            let icon = match check.status {
                CheckStatus::Pass => "✓",
                CheckStatus::Fail => "✗",
                CheckStatus::Warn => "⚠",
            };
            println!("  {icon} {}: {}", check.name, check.message);
        }
    }

    let summary = DiagnosticSummary::from_diagnostics(&diagnostics);
    println!("\nSummary:\n");
    println!("  ✓ Passed: {}", summary.passed);
    println!("  ✗ Failed: {}", summary.failed);
    println!("  ⚠ Warnings: {}\n", summary.warnings);

    if summary.failed > 0 {
        return Err(Error::DiagnosticsFailed { failures: summary.failed });
    }
    if summary.warnings > 0 {
        println!("Your project is mostly healthy, but has some warnings.\n");
    } else {
        println!("Your project is healthy!\n");
    }
    Ok(())
}
