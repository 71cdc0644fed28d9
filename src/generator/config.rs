//! Generator discovery and descriptor loading.
//!
//! A generator type is a directory under the templates root holding a
//! `config.json` descriptor and a `templates/` folder with the sources the
//! descriptor lists. Descriptors are validated against [`DESCRIPTOR_SCHEMA`]
//! before they are deserialized, so a malformed recipe fails at load time
//! with the offending file named.

use crate::constants::generators::{
    CONFIG_FILE, ROOT_DIR, SHARE_DIR, TEMPLATES_DIR, TEMPLATES_DIR_ENV,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// JSON Schema every `config.json` must satisfy.
pub const DESCRIPTOR_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "required": ["name", "description", "targetPath", "files"],
  "properties": {
    "name": { "type": "string" },
    "description": { "type": "string" },
    "targetPath": { "type": "string", "minLength": 1 },
    "files": {
      "type": "array",
      "items": {
        "type": "object",
        "required": ["template", "output"],
        "properties": {
          "template": { "type": "string", "minLength": 1 },
          "output": { "type": "string", "minLength": 1 }
        }
      }
    },
    "registration": {
      "type": "object",
      "properties": {
        "enabled": { "type": "boolean" },
        "file": { "type": "string", "minLength": 1 },
        "type": { "enum": ["array", "object"] },
        "path": { "type": "string" }
      },
      "if": {
        "properties": { "enabled": { "const": true } },
        "required": ["enabled"]
      },
      "then": { "required": ["file", "type"] }
    },
    "postCreate": { "type": "array", "items": { "type": "string" } }
  }
}"#;

/// One template file and where its rendered copy lands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileSpec {
    /// Source path relative to the type's `templates/` directory
    pub template: String,
    /// Output path template relative to the component's target directory
    pub output: String,
}

/// How a newly created component is recorded in a manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationRule {
    /// Render `entry` and push it onto the manifest's root array.
    ArrayAppend { file: PathBuf, entry: serde_json::Value },
    /// Push the raw component name onto the array at a nested key path.
    ObjectPathAppend { file: PathBuf, path: Vec<String> },
}

impl RegistrationRule {
    pub fn file(&self) -> &Path {
        match self {
            RegistrationRule::ArrayAppend { file, .. }
            | RegistrationRule::ObjectPathAppend { file, .. } => file,
        }
    }
}

/// A validated generator recipe.
#[derive(Debug, Clone)]
pub struct GeneratorDescriptor {
    pub name: String,
    pub description: String,
    pub target_path: String,
    pub files: Vec<FileSpec>,
    /// `None` when registration is absent or disabled.
    pub registration: Option<RegistrationRule>,
    pub post_create: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescriptor {
    name: String,
    description: String,
    target_path: String,
    files: Vec<FileSpec>,
    #[serde(default)]
    registration: Option<RawRegistration>,
    #[serde(default)]
    post_create: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawRegistration {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    file: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<RegistrationKind>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    entry: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum RegistrationKind {
    Array,
    Object,
}

impl RawRegistration {
    fn into_rule(self) -> std::result::Result<Option<RegistrationRule>, String> {
        if !self.enabled {
            return Ok(None);
        }
        let file = PathBuf::from(self.file.ok_or("enabled registration requires a \"file\"")?);
        let kind = self.kind.ok_or("enabled registration requires a \"type\"")?;
        let rule = match kind {
            RegistrationKind::Array => {
                let entry = self
                    .entry
                    .ok_or("registration of type \"array\" requires an \"entry\"")?;
                RegistrationRule::ArrayAppend { file, entry }
            }
            RegistrationKind::Object => {
                let raw_path = self
                    .path
                    .ok_or("registration of type \"object\" requires a \"path\"")?;
                let path: Vec<String> = raw_path
                    .split('.')
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect();
                if path.is_empty() {
                    return Err(format!("registration path '{raw_path}' has no keys"));
                }
                RegistrationRule::ObjectPathAppend { file, path }
            }
        };
        Ok(Some(rule))
    }
}

impl GeneratorDescriptor {
    /// Parses and validates descriptor text. `origin` names the file in errors.
    pub fn from_json_str(content: &str, origin: &Path) -> Result<Self> {
        let invalid = |reason: String| Error::GeneratorConfigInvalid {
            path: origin.display().to_string(),
            reason,
        };

        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;

        validate_with_schema(&value).map_err(invalid)?;

        let raw: RawDescriptor =
            serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;

        let registration = match raw.registration {
            Some(registration) => registration.into_rule().map_err(invalid)?,
            None => None,
        };

        Ok(Self {
            name: raw.name,
            description: raw.description,
            target_path: raw.target_path,
            files: raw.files,
            registration,
            post_create: raw.post_create,
        })
    }

    /// Reads a descriptor from disk.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        if !config_path.is_file() {
            return Err(Error::GeneratorConfigNotFound {
                path: config_path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(config_path)?;
        Self::from_json_str(&content, config_path)
    }
}

fn validate_with_schema(value: &serde_json::Value) -> std::result::Result<(), String> {
    let schema: serde_json::Value =
        serde_json::from_str(DESCRIPTOR_SCHEMA).map_err(|e| e.to_string())?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| format!("invalid descriptor schema: {e}"))?;

    let errors: Vec<String> = validator.iter_errors(value).map(|e| e.to_string()).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

/// The directory holding one subdirectory per generator type.
#[derive(Debug, Clone)]
pub struct TemplatesRoot {
    root: PathBuf,
}

impl TemplatesRoot {
    /// Wraps a known directory without checking that it exists.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Picks the first candidate directory that exists.
    pub fn resolve(candidates: &[PathBuf]) -> Result<Self> {
        candidates
            .iter()
            .find(|candidate| candidate.is_dir())
            .map(|root| {
                log::debug!("Using templates directory '{}'", root.display());
                Self::new(root.clone())
            })
            .ok_or_else(|| Error::TemplatesRootNotFound {
                tried: candidates
                    .iter()
                    .map(|c| format!("'{}'", c.display()))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Candidate roots in order of preference: explicit override, the
    /// `KIMU_TEMPLATES_DIR` environment variable, the source checkout, then
    /// the installed layout next to the executable.
    pub fn candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(dir) = explicit {
            candidates.push(dir.to_path_buf());
        }
        if let Some(dir) = std::env::var_os(TEMPLATES_DIR_ENV) {
            candidates.push(PathBuf::from(dir));
        }
        candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(ROOT_DIR));
        if let Some(exe_dir) =
            std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join(ROOT_DIR));
            if let Some(prefix) = exe_dir.parent() {
                candidates.push(prefix.join("share").join(SHARE_DIR));
            }
        }
        candidates
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn type_dir(&self, kind: &str) -> PathBuf {
        self.root.join(kind)
    }

    pub fn config_path(&self, kind: &str) -> PathBuf {
        self.type_dir(kind).join(CONFIG_FILE)
    }

    pub fn templates_dir(&self, kind: &str) -> PathBuf {
        self.type_dir(kind).join(TEMPLATES_DIR)
    }

    /// Names of all generator types, sorted.
    pub fn discover(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut kinds = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(kind) = entry.file_name().to_str().map(str::to_string) else {
                log::debug!("Skipping non UTF-8 generator directory {:?}", entry.file_name());
                continue;
            };
            if self.config_path(&kind).is_file() {
                kinds.push(kind);
            }
        }
        kinds.sort();
        Ok(kinds)
    }

    /// Loads the descriptor of one generator type.
    pub fn load(&self, kind: &str) -> Result<GeneratorDescriptor> {
        GeneratorDescriptor::load(self.config_path(kind))
    }
}
