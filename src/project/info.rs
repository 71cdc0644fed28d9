use super::config::KimuConfig;
use crate::constants::{CLI_NAME, CLI_VERSION, KIMU_CONFIG_FILE};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CliInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentInfo {
    pub platform: String,
    pub architecture: String,
    pub cwd: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub name: String,
    pub version: String,
    pub kimu_core: String,
    pub template: String,
    pub modules: Vec<String>,
    pub extensions: Vec<String>,
    pub is_valid: bool,
}

impl ProjectSummary {
    fn from_config(config: KimuConfig) -> Self {
        Self {
            name: config.name.unwrap_or_else(|| "Unknown".to_string()),
            version: config.version.unwrap_or_else(|| "0.0.0".to_string()),
            kimu_core: config.kimu_core.unwrap_or_else(|| "Unknown".to_string()),
            template: config.template.unwrap_or_else(|| "Unknown".to_string()),
            modules: config.modules.installed,
            extensions: config.extensions.installed,
            is_valid: true,
        }
    }

    fn invalid() -> Self {
        Self {
            name: "Invalid".to_string(),
            version: "0.0.0".to_string(),
            kimu_core: "Unknown".to_string(),
            template: "Unknown".to_string(),
            modules: Vec::new(),
            extensions: Vec::new(),
            is_valid: false,
        }
    }
}

/// What `kimu info` reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectInfoData {
    pub cli: CliInfo,
    pub environment: EnvironmentInfo,
    /// Present only when `cwd` holds a `kimu.config.json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectSummary>,
}

/// Collects CLI, environment and project details for `cwd`.
pub fn gather_project_info<P: AsRef<Path>>(cwd: P) -> ProjectInfoData {
    let cwd = cwd.as_ref();
    let project = if cwd.join(KIMU_CONFIG_FILE).is_file() {
        match KimuConfig::load(cwd) {
            Ok(config) => Some(ProjectSummary::from_config(config)),
            Err(err) => {
                log::debug!("Cannot read {KIMU_CONFIG_FILE}: {err}");
                Some(ProjectSummary::invalid())
            }
        }
    } else {
        None
    };

    ProjectInfoData {
        cli: CliInfo { name: CLI_NAME.to_string(), version: CLI_VERSION.to_string() },
        environment: EnvironmentInfo {
            platform: std::env::consts::OS.to_string(),
            architecture: std::env::consts::ARCH.to_string(),
            cwd: cwd.display().to_string(),
        },
        project,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_project_outside_kimu_dir() {
        let tmp = TempDir::new().unwrap();
        let info = gather_project_info(tmp.path());
        assert!(info.project.is_none());
        assert_eq!(info.cli.name, "kimu");
        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("project").is_none());
    }

    #[test]
    fn summarizes_valid_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(KIMU_CONFIG_FILE),
            json!({ "name": "shop", "modules": { "installed": ["router"] } }).to_string(),
        )
        .unwrap();

        let project = gather_project_info(tmp.path()).project.unwrap();
        assert_eq!(project.name, "shop");
        assert_eq!(project.version, "0.0.0");
        assert_eq!(project.kimu_core, "Unknown");
        assert_eq!(project.modules, vec!["router"]);
        assert_eq!(project.extensions, vec!["kimu-home"]);
        assert!(project.is_valid);
    }

    #[test]
    fn marks_unparsable_config_invalid() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(KIMU_CONFIG_FILE), "not json").unwrap();
        let info = gather_project_info(tmp.path());
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["project"]["isValid"], false);
        assert_eq!(value["project"]["name"], "Invalid");
    }
}
