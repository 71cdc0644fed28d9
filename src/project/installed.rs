use super::{extensions_manifest_path, modules_manifest_path};
use crate::error::Result;
use crate::ioutils::read_json;
use serde::Deserialize;
use std::path::Path;

/// Names recorded in the project's module and extension manifests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstalledPackages {
    pub modules: Vec<String>,
    pub extensions: Vec<String>,
}

impl InstalledPackages {
    pub fn total(&self) -> usize {
        self.modules.len() + self.extensions.len()
    }
}

/// Manifests either wrap their entries in an object or are a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ModulesManifest {
    Listed(Vec<ManifestEntry>),
    #[serde(rename_all = "camelCase")]
    Wrapped {
        #[serde(default)]
        installed_modules: Vec<ManifestEntry>,
    },
}

impl ModulesManifest {
    fn into_entries(self) -> Vec<ManifestEntry> {
        match self {
            ModulesManifest::Listed(entries) => entries,
            ModulesManifest::Wrapped { installed_modules } => installed_modules,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExtensionsManifest {
    Listed(Vec<ManifestEntry>),
    #[serde(rename_all = "camelCase")]
    Wrapped {
        #[serde(default)]
        installed_extensions: Vec<ManifestEntry>,
    },
}

impl ExtensionsManifest {
    fn into_entries(self) -> Vec<ManifestEntry> {
        match self {
            ExtensionsManifest::Listed(entries) => entries,
            ExtensionsManifest::Wrapped { installed_extensions } => installed_extensions,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tag: Option<String>,
}

fn read_manifests(root: &Path) -> Result<InstalledPackages> {
    let mut installed = InstalledPackages::default();

    let modules_path = modules_manifest_path(root);
    if modules_path.is_file() {
        let manifest: ModulesManifest = read_json(&modules_path)?;
        installed.modules =
            manifest.into_entries().into_iter().filter_map(|entry| entry.name).collect();
    }

    let extensions_path = extensions_manifest_path(root);
    if extensions_path.is_file() {
        let manifest: ExtensionsManifest = read_json(&extensions_path)?;
        installed.extensions = manifest
            .into_entries()
            .into_iter()
            .filter_map(|entry| entry.tag.or(entry.name))
            .collect();
    }

    Ok(installed)
}

/// Reads installed package names under `root`.
///
/// Unreadable manifests are logged and yield an empty result.
pub fn read_installed_packages<P: AsRef<Path>>(root: P) -> InstalledPackages {
    match read_manifests(root.as_ref()) {
        Ok(installed) => installed,
        Err(err) => {
            log::warn!("Cannot read installed packages: {err}");
            InstalledPackages::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ioutils::write_file;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn reads_both_manifests() {
        let tmp = TempDir::new().unwrap();
        write_file(
            &json!({ "installedModules": [{ "name": "router" }, { "name": "i18n" }] }).to_string(),
            modules_manifest_path(tmp.path()),
        )
        .unwrap();
        write_file(
            &json!({ "installedExtensions": [
                { "tag": "kimu-home", "name": "Home" },
                { "name": "dashboard" }
            ] })
            .to_string(),
            extensions_manifest_path(tmp.path()),
        )
        .unwrap();

        let installed = read_installed_packages(tmp.path());
        assert_eq!(installed.modules, vec!["router", "i18n"]);
        assert_eq!(installed.extensions, vec!["kimu-home", "dashboard"]);
        assert_eq!(installed.total(), 4);
    }

    #[test]
    fn reads_bare_array_manifests() {
        let tmp = TempDir::new().unwrap();
        write_file(
            &json!([{ "tag": "kimu-home", "name": "Home" }, { "tag": "chat-panel" }]).to_string(),
            extensions_manifest_path(tmp.path()),
        )
        .unwrap();
        let installed = read_installed_packages(tmp.path());
        assert_eq!(installed.extensions, vec!["kimu-home", "chat-panel"]);
        assert!(installed.modules.is_empty());
    }

    #[test]
    fn missing_manifests_are_empty() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(read_installed_packages(tmp.path()), InstalledPackages::default());
    }

    #[test]
    fn unreadable_manifest_yields_empty_result() {
        let tmp = TempDir::new().unwrap();
        write_file(r#"{"installedModules":[{"name":"router"}]}"#, modules_manifest_path(tmp.path()))
            .unwrap();
        write_file("{ broken", extensions_manifest_path(tmp.path())).unwrap();
        assert_eq!(read_installed_packages(tmp.path()).total(), 0);
    }
}
