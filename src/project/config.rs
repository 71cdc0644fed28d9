//! Typed view of `kimu.config.json`.
//!
//! Every section falls back to the defaults a freshly created project ships
//! with, so partial configs still deserialize.

use crate::constants::{defaults, DEFAULT_REGISTRY_URL, DIST_DIR, KIMU_CONFIG_FILE};
use crate::error::Result;
use crate::ioutils::read_json;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KimuConfig {
    pub name: Option<String>,
    pub version: Option<String>,
    pub kimu_core: Option<String>,
    pub template: Option<String>,
    pub modules: ModuleConfiguration,
    pub extensions: ExtensionConfiguration,
    pub build: BuildConfiguration,
    pub development: DevelopmentConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfiguration {
    pub installed: Vec<String>,
    pub registry: String,
    pub dependencies: IndexMap<String, String>,
}

impl Default for ModuleConfiguration {
    fn default() -> Self {
        Self {
            installed: Vec::new(),
            registry: DEFAULT_REGISTRY_URL.to_string(),
            dependencies: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfiguration {
    pub installed: Vec<String>,
    pub main: String,
    pub dependencies: IndexMap<String, String>,
}

impl Default for ExtensionConfiguration {
    fn default() -> Self {
        Self {
            installed: vec![defaults::MAIN_EXTENSION.to_string()],
            main: defaults::MAIN_EXTENSION.to_string(),
            dependencies: IndexMap::new(),
        }
    }
}

/// Output module format of the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildFormat {
    Esm,
    Iife,
    Cjs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfiguration {
    pub target: String,
    pub format: BuildFormat,
    pub sourcemap: bool,
    pub minify: bool,
    pub out_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

impl Default for BuildConfiguration {
    fn default() -> Self {
        Self {
            target: defaults::BUILD_TARGET.to_string(),
            format: BuildFormat::Esm,
            sourcemap: true,
            minify: false,
            out_dir: DIST_DIR.to_string(),
            public_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfiguration {
    pub port: u16,
    pub host: String,
    pub open: bool,
}

impl Default for DevelopmentConfiguration {
    fn default() -> Self {
        Self {
            port: defaults::DEV_PORT,
            host: defaults::HOST.to_string(),
            open: true,
        }
    }
}

impl KimuConfig {
    /// Reads `kimu.config.json` from a project root.
    pub fn load<P: AsRef<Path>>(project_root: P) -> Result<Self> {
        read_json(project_root.as_ref().join(KIMU_CONFIG_FILE))
    }
}
