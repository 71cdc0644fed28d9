use crate::cli::{context::CommandContext, BuildArgs, DevArgs, ServeArgs};
use crate::constants::DIST_DIR;
use crate::delegate::{BuildTarget, ExternalCommand, OutputMode};
use crate::error::{Error, Result};

impl BuildArgs {
    pub fn target(&self) -> BuildTarget {
        if self.dev {
            BuildTarget::Dev
        } else if self.local {
            BuildTarget::Local
        } else if self.prod {
            BuildTarget::Prod
        } else {
            BuildTarget::Default
        }
    }
}

/// `kimu build`
pub fn handle_build(context: &CommandContext, args: &BuildArgs) -> Result<()> {
    let mut command = ExternalCommand::npm(context.cwd()).arg("run").arg(args.target().script());
    if args.watch {
        command = command.arg("--").arg("--watch");
    }

    println!("Building KIMU project...");
    command.run(context.output_mode())?;
    println!("Build completed successfully!");
    println!("\nBuild output in: {DIST_DIR}/\n");
    Ok(())
}

/// `kimu dev`
pub fn handle_dev(context: &CommandContext, args: &DevArgs) -> Result<()> {
    let mut command = ExternalCommand::npm(context.cwd())
        .arg("run")
        .arg("dev")
        .env("PORT", args.port.to_string())
        .env("HOST", args.host.clone());
    if args.open {
        command = command.arg("--").arg("--open");
    }

    println!("Starting development server at http://{}:{}", args.host, args.port);
    println!("Press Ctrl+C to stop the server\n");
    command.run(OutputMode::Inherit)
}

/// `kimu serve`
pub fn handle_serve(context: &CommandContext, args: &ServeArgs) -> Result<()> {
    let dist = context.cwd().join(DIST_DIR);
    if !dist.is_dir() {
        return Err(Error::BuildArtifactsMissing { dist_dir: DIST_DIR.to_string() });
    }

    let mut command = ExternalCommand::npx(context.cwd())
        .arg("vite")
        .arg("preview")
        .arg("--port")
        .arg(args.port.to_string())
        .arg("--host")
        .arg(args.host.clone());
    if args.open {
        command = command.arg("--open");
    }

    println!("Serving {DIST_DIR}/ at http://{}:{}", args.host, args.port);
    println!("Press Ctrl+C to stop the server\n");
    command.run(OutputMode::Inherit)
}
