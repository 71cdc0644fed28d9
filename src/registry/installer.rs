use super::{PackageInfo, PackageKind, Registry};
use crate::error::{Error, Result};

/// Flags accepted by `kimu install`.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub version: Option<String>,
    pub registry: Option<String>,
    pub force: bool,
    pub save_dev: bool,
}

/// Resolves a package through the registry.
///
/// Packages are only looked up; nothing is downloaded or written to the
/// project yet.
pub fn install_package(
    registry: &dyn Registry,
    name: &str,
    kind: PackageKind,
    options: &InstallOptions,
) -> Result<PackageInfo> {
    if let Some(url) = &options.registry {
        log::debug!("Custom registry '{url}' requested; using the built-in catalog");
    }

    let info = registry.package_info(name, Some(kind)).ok_or_else(|| {
        Error::PackageNotFound { kind: kind.to_string(), name: name.to_string() }
    })?;

    if let Some(requested) = &options.version {
        if requested != &info.version {
            log::warn!(
                "Requested {kind} {name}@{requested}, registry provides {}",
                info.version
            );
        }
    }

    log::debug!(
        "Mock installation of {}: {} ({}) force={} save_dev={}",
        info.kind,
        info.name,
        info.version,
        options.force,
        options.save_dev
    );
    Ok(info)
}
