//! Catalog of installable modules and extensions.
//!
//! Commands talk to the catalog through the [`Registry`] trait. The only
//! implementation today is [`MockRegistry`], a fixed in-memory catalog; a
//! remote registry would slot in behind the same trait.

pub mod installer;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub use installer::{install_package, InstallOptions};

/// The two kinds of installable package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Module,
    Extension,
}

impl Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PackageKind::Module => "module",
            PackageKind::Extension => "extension",
        };
        write!(f, "{s}")
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PackageKind,
    pub version: String,
    pub description: String,
}

impl PackageInfo {
    pub fn new(name: &str, kind: PackageKind, version: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            version: version.to_string(),
            description: description.to_string(),
        }
    }
}

/// Read access to a package catalog.
pub trait Registry {
    /// Looks a package up by name. Without a kind, modules are searched
    /// before extensions.
    fn package_info(&self, name: &str, kind: Option<PackageKind>) -> Option<PackageInfo>;

    /// Every package of one kind, in catalog order.
    fn list(&self, kind: PackageKind) -> Vec<PackageInfo>;
}

/// Fixed catalog used until a remote registry exists.
#[derive(Debug, Clone)]
pub struct MockRegistry {
    modules: IndexMap<String, PackageInfo>,
    extensions: IndexMap<String, PackageInfo>,
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::from_packages([
            PackageInfo::new("router", PackageKind::Module, "1.2.0", "Routing module"),
            PackageInfo::new("i18n", PackageKind::Module, "1.5.0", "Internationalization module"),
            PackageInfo::new("analytics", PackageKind::Module, "0.8.0", "Analytics tracking module"),
            PackageInfo::new(
                "app-root",
                PackageKind::Extension,
                "1.0.0",
                "Application root component",
            ),
            PackageInfo::new("kimu-dashboard", PackageKind::Extension, "2.1.0", "Dashboard extension"),
        ])
    }
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from arbitrary entries, keeping their order.
    pub fn from_packages<I: IntoIterator<Item = PackageInfo>>(packages: I) -> Self {
        let mut modules = IndexMap::new();
        let mut extensions = IndexMap::new();
        for package in packages {
            let bucket = match package.kind {
                PackageKind::Module => &mut modules,
                PackageKind::Extension => &mut extensions,
            };
            bucket.insert(package.name.clone(), package);
        }
        Self { modules, extensions }
    }

    fn bucket(&self, kind: PackageKind) -> &IndexMap<String, PackageInfo> {
        match kind {
            PackageKind::Module => &self.modules,
            PackageKind::Extension => &self.extensions,
        }
    }
}

impl Registry for MockRegistry {
    fn package_info(&self, name: &str, kind: Option<PackageKind>) -> Option<PackageInfo> {
        match kind {
            Some(kind) => self.bucket(kind).get(name).cloned(),
            None => self.modules.get(name).or_else(|| self.extensions.get(name)).cloned(),
        }
    }

    fn list(&self, kind: PackageKind) -> Vec<PackageInfo> {
        self.bucket(kind).values().cloned().collect()
    }
}
