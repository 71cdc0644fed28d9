use crate::cli::{context::CommandContext, NewArgs};
use crate::error::{Error, Result};
use crate::generator::{ComponentRequest, RegistrationOutcome};

/// `kimu new <type> <name>`
pub fn handle_new(context: &CommandContext, args: &NewArgs) -> Result<()> {
    context.require_project()?;

    let request = ComponentRequest {
        kind: args.kind.clone(),
        name: args.name.clone(),
        path: args.path.clone(),
        force: args.force,
        register: !args.no_register,
    };
    let report = context.generator()?.create(&request)?;

    if let RegistrationOutcome::Registered(manifest) = &report.registration {
        log::debug!("Manifest updated: {}", manifest.display());
    }
    println!("{} {} created successfully!", report.generator, args.name);

    if !report.post_create.is_empty() {
        println!();
        println!("Next steps:");
        for instruction in &report.post_create {
            println!("  • {instruction}");
        }
    }
    Ok(())
}

/// `kimu new:list`
pub fn handle_new_list(context: &CommandContext) -> Result<()> {
    println!("\nAvailable component generators:\n");

    let generator = match context.generator() {
        Ok(generator) => generator,
        Err(Error::TemplatesRootNotFound { tried }) => {
            log::debug!("Templates directory not found. Tried: {tried}");
            println!("  No generators found.");
            println!("  Check templates/generators/ directory.\n");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let generators = generator.list()?;
    if generators.is_empty() {
        println!("  No generators found.");
        println!("  Check {} directory.\n", generator.templates().path().display());
        return Ok(());
    }

    for (kind, descriptor) in generators {
        match descriptor {
            Ok(descriptor) => println!("  {kind:<15} {}", descriptor.description),
            Err(err) => {
                log::debug!("{err}");
                println!("  {kind:<15} (config error)");
            }
        }
    }
    println!("\nUsage: kimu new <type> <name>\n");
    Ok(())
}
