use crate::cli::{context::CommandContext, CreateArgs};
use crate::constants::{DEFAULT_PROJECT_TEMPLATE, INITIAL_COMMIT_MESSAGE, PACKAGE_JSON_FILE};
use crate::delegate::ExternalCommand;
use crate::error::Result;
use crate::ioutils::{prepare_project_dir, read_json, write_json_pretty};
use crate::loader::{fetch_template, git::init_repository};
use crate::validation::validate_project_name;
use std::path::Path;

/// `kimu create <name>`
pub fn handle_create(context: &CommandContext, args: &CreateArgs) -> Result<()> {
    validate_project_name(&args.name)?;
    println!("Creating KIMU project: {}...", args.name);

    let target_dir = prepare_project_dir(context.cwd().join(&args.name), args.force)?;

    if let Err(err) = populate_project(context, args, &target_dir) {
        if target_dir.exists() {
            log::info!("Cleaning up incomplete project '{}'", target_dir.display());
            if let Err(cleanup_err) = std::fs::remove_dir_all(&target_dir) {
                log::warn!("Failed to remove '{}': {cleanup_err}", target_dir.display());
            }
        }
        return Err(err);
    }

    println!("Project {} created successfully!", args.name);
    println!("Location: {}", target_dir.display());
    println!("Next steps:");
    println!("   cd {}", args.name);
    if args.no_install {
        println!("   npm install");
    }
    println!("   npm start");
    Ok(())
}

fn populate_project(context: &CommandContext, args: &CreateArgs, target_dir: &Path) -> Result<()> {
    let template = args.template.as_deref().unwrap_or(DEFAULT_PROJECT_TEMPLATE);
    fetch_template(template, target_dir)?;

    let git_dir = target_dir.join(".git");
    if git_dir.exists() {
        log::info!("Cleaning project (removing .git directory)");
        std::fs::remove_dir_all(&git_dir)?;
    }

    set_package_name(target_dir, &args.name)?;

    if !args.no_install {
        println!("Installing dependencies...");
        ExternalCommand::npm(target_dir).arg("install").run(context.output_mode())?;
    }

    if args.git {
        log::info!("Initializing new git repository");
        init_repository(target_dir, INITIAL_COMMIT_MESSAGE)?;
    }
    Ok(())
}

/// Sets the `name` field of `package.json`, keeping every other key in place.
pub fn set_package_name(project_dir: &Path, name: &str) -> Result<bool> {
    let package_json = project_dir.join(PACKAGE_JSON_FILE);
    if !package_json.is_file() {
        return Ok(false);
    }

    let mut package: serde_json::Value = read_json(&package_json)?;
    match package.as_object_mut() {
        Some(fields) => {
            fields.insert("name".to_string(), serde_json::Value::String(name.to_string()));
        }
        None => {
            log::warn!("{PACKAGE_JSON_FILE} is not a JSON object; leaving it unchanged");
            return Ok(false);
        }
    }
    write_json_pretty(&package_json, &package)?;
    log::info!("Updated {PACKAGE_JSON_FILE} with project name");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn renames_package_in_place() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("package.json"),
            r#"{"name":"kimu-core","version":"1.0.0","scripts":{"dev":"vite"}}"#,
        )
        .unwrap();

        assert!(set_package_name(tmp.path(), "my-app").unwrap());
        assert_eq!(
            fs::read_to_string(tmp.path().join("package.json")).unwrap(),
            "{\n  \"name\": \"my-app\",\n  \"version\": \"1.0.0\",\n  \"scripts\": {\n    \"dev\": \"vite\"\n  }\n}\n"
        );
    }

    #[test]
    fn missing_package_json_is_skipped() {
        let tmp = TempDir::new().unwrap();
        assert!(!set_package_name(tmp.path(), "my-app").unwrap());
        assert!(!tmp.path().join("package.json").exists());
    }
}
