//! Records generated components in JSON manifests.
//!
//! Registration happens in two steps. [`Registrar::prepare`] reads the
//! manifest and applies the rule in memory, so a manifest of the wrong shape
//! is rejected before anything is generated. [`PreparedRegistration::commit`]
//! then rewrites the manifest in full. Nothing guards against two processes
//! updating the same manifest at once; the last writer wins.

use super::config::{GeneratorDescriptor, RegistrationRule};
use super::placeholder::Placeholders;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::{read_json, write_json_pretty};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// What happened to the manifest during registration.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// The generator has no enabled registration rule.
    Disabled,
    /// The manifest does not exist; nothing was written.
    ManifestMissing(PathBuf),
    /// The manifest was updated.
    Registered(PathBuf),
}

/// A manifest update computed but not yet written.
#[derive(Debug)]
pub enum PreparedRegistration {
    Disabled,
    ManifestMissing(PathBuf),
    Ready {
        /// The rule's file as written in the descriptor
        file: PathBuf,
        manifest_path: PathBuf,
        manifest: Value,
    },
}

impl PreparedRegistration {
    /// Writes the updated manifest, if any.
    pub fn commit(self) -> Result<RegistrationOutcome> {
        match self {
            PreparedRegistration::Disabled => Ok(RegistrationOutcome::Disabled),
            PreparedRegistration::ManifestMissing(path) => {
                Ok(RegistrationOutcome::ManifestMissing(path))
            }
            PreparedRegistration::Ready { file, manifest_path, manifest } => {
                write_json_pretty(&manifest_path, &manifest)?;
                log::info!("Registered in {}", file.display());
                Ok(RegistrationOutcome::Registered(manifest_path))
            }
        }
    }
}

/// Applies registration rules to manifests under a project root.
pub struct Registrar<'a> {
    project_root: &'a Path,
}

impl<'a> Registrar<'a> {
    pub fn new(project_root: &'a Path) -> Self {
        Self { project_root }
    }

    /// Registers `name` according to the descriptor's rule.
    pub fn register(
        &self,
        descriptor: &GeneratorDescriptor,
        name: &str,
        target_path: &str,
    ) -> Result<RegistrationOutcome> {
        self.prepare(descriptor, name, target_path)?.commit()
    }

    /// Computes the descriptor's manifest update without writing it.
    pub fn prepare(
        &self,
        descriptor: &GeneratorDescriptor,
        name: &str,
        target_path: &str,
    ) -> Result<PreparedRegistration> {
        match &descriptor.registration {
            Some(rule) => self.prepare_rule(rule, name, target_path),
            None => Ok(PreparedRegistration::Disabled),
        }
    }

    /// Applies a single rule and writes the manifest.
    pub fn apply(
        &self,
        rule: &RegistrationRule,
        name: &str,
        target_path: &str,
    ) -> Result<RegistrationOutcome> {
        self.prepare_rule(rule, name, target_path)?.commit()
    }

    fn prepare_rule(
        &self,
        rule: &RegistrationRule,
        name: &str,
        target_path: &str,
    ) -> Result<PreparedRegistration> {
        let manifest_path = rule.file().resolve_against(self.project_root);
        if !manifest_path.is_file() {
            log::warn!(
                "Registration file not found: {}. Skipping registration.",
                rule.file().display()
            );
            return Ok(PreparedRegistration::ManifestMissing(manifest_path));
        }

        let mut manifest: Value = read_json(&manifest_path)?;
        let shape_error = |reason: String| Error::ManifestShapeError {
            file: rule.file().display().to_string(),
            reason,
        };

        match rule {
            RegistrationRule::ArrayAppend { entry, .. } => {
                let entry = Placeholders::new(name, target_path).render_json(entry);
                append_to_root_array(&mut manifest, entry).map_err(shape_error)?;
            }
            RegistrationRule::ObjectPathAppend { path, .. } => {
                append_at_path(&mut manifest, path, Value::String(name.to_string()))
                    .map_err(shape_error)?;
            }
        }

        Ok(PreparedRegistration::Ready {
            file: rule.file().to_path_buf(),
            manifest_path,
            manifest,
        })
    }
}

/// Pushes `entry` as the last element of a root-level array.
pub fn append_to_root_array(
    manifest: &mut Value,
    entry: Value,
) -> std::result::Result<(), String> {
    match manifest {
        Value::Array(items) => {
            items.push(entry);
            Ok(())
        }
        other => Err(format!("expected a top-level array, found {}", type_name(other))),
    }
}

/// Walks `path` through nested objects, creating missing levels, and pushes
/// `item` onto the array stored under the last key.
///
/// A missing or `null` value is replaced by a fresh container. Any other
/// value of the wrong type is reported instead of being overwritten.
pub fn append_at_path(
    manifest: &mut Value,
    path: &[String],
    item: Value,
) -> std::result::Result<(), String> {
    let Some((last, parents)) = path.split_last() else {
        return Err("registration path is empty".to_string());
    };

    let parent = nested_object_mut(manifest, parents)?;
    let slot = parent.entry(last.clone()).or_insert(Value::Null);
    if slot.is_null() {
        *slot = Value::Array(Vec::new());
    }

    match slot {
        Value::Array(items) => {
            items.push(item);
            Ok(())
        }
        other => Err(format!(
            "'{}' holds {}, expected an array",
            path.join("."),
            type_name(other)
        )),
    }
}

/// Returns the object found by following `keys` from `root`, creating empty
/// objects for missing or `null` levels.
pub fn nested_object_mut<'v>(
    root: &'v mut Value,
    keys: &[String],
) -> std::result::Result<&'v mut Map<String, Value>, String> {
    let mut current = root;
    let mut walked: Vec<&str> = Vec::with_capacity(keys.len());

    for key in keys {
        let map = match current {
            Value::Object(map) => map,
            other => {
                return Err(format!(
                    "'{}' holds {}, expected an object",
                    display_path(&walked),
                    type_name(other)
                ))
            }
        };
        let child = map.entry(key.clone()).or_insert(Value::Null);
        if child.is_null() {
            *child = Value::Object(Map::new());
        }
        walked.push(key);
        current = child;
    }

    match current {
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "'{}' holds {}, expected an object",
            display_path(&walked),
            type_name(other)
        )),
    }
}

fn display_path(walked: &[&str]) -> String {
    if walked.is_empty() {
        "<root>".to_string()
    } else {
        walked.join(".")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
