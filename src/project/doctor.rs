//! Project health checks behind `kimu doctor`.
//!
//! Checks only look at the filesystem; nothing is executed.

use crate::constants::{
    DIST_DIR, EXTENSIONS_DIR, EXTENSIONS_MANIFEST_FILE, KIMU_CORE_PACKAGE, MODULES_DIR,
    MODULES_MANIFEST_FILE, NODE_MODULES_DIR, PACKAGE_JSON_FILE, SRC_DIR,
};
use std::fmt::Display;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
}

impl Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
            CheckStatus::Warn => "warn",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

impl DiagnosticCheck {
    fn new(name: &str, status: CheckStatus, message: &str) -> Self {
        Self { name: name.to_string(), status, message: message.to_string() }
    }

    /// `pass` when `present`, `missing` otherwise.
    fn presence(
        name: &str,
        present: bool,
        found: &str,
        missing: CheckStatus,
        not_found: &str,
    ) -> Self {
        if present {
            Self::new(name, CheckStatus::Pass, found)
        } else {
            Self::new(name, missing, not_found)
        }
    }
}

/// A named group of checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub category: String,
    pub checks: Vec<DiagnosticCheck>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticSummary {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl DiagnosticSummary {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut summary = Self::default();
        for check in diagnostics.iter().flat_map(|d| &d.checks) {
            match check.status {
                CheckStatus::Pass => summary.passed += 1,
                CheckStatus::Fail => summary.failed += 1,
                CheckStatus::Warn => summary.warnings += 1,
            }
        }
        summary
    }
}

fn manifest_check(root: &Path, dir: &str, manifest: &str, label: &str) -> DiagnosticCheck {
    let dir_path = root.join(SRC_DIR).join(dir);
    if !dir_path.is_dir() {
        return DiagnosticCheck::new(
            dir,
            CheckStatus::Warn,
            &format!("{SRC_DIR}/{dir}/ directory not found"),
        );
    }
    DiagnosticCheck::presence(
        &format!("{label} manifest"),
        dir_path.join(manifest).is_file(),
        &format!("Found {manifest}"),
        CheckStatus::Warn,
        &format!("{manifest} not found"),
    )
}

pub fn check_project_structure(root: &Path) -> Diagnostic {
    Diagnostic {
        category: "Project Structure".to_string(),
        checks: vec![
            DiagnosticCheck::presence(
                PACKAGE_JSON_FILE,
                root.join(PACKAGE_JSON_FILE).is_file(),
                &format!("Found {PACKAGE_JSON_FILE}"),
                CheckStatus::Fail,
                &format!("{PACKAGE_JSON_FILE} not found"),
            ),
            DiagnosticCheck::presence(
                "src directory",
                root.join(SRC_DIR).is_dir(),
                &format!("Found {SRC_DIR}/ directory"),
                CheckStatus::Fail,
                &format!("{SRC_DIR}/ directory not found"),
            ),
            manifest_check(root, MODULES_DIR, MODULES_MANIFEST_FILE, "modules"),
            manifest_check(root, EXTENSIONS_DIR, EXTENSIONS_MANIFEST_FILE, "extensions"),
        ],
    }
}

pub fn check_dependencies(root: &Path) -> Diagnostic {
    let node_modules = root.join(NODE_MODULES_DIR);
    Diagnostic {
        category: "Dependencies".to_string(),
        checks: vec![
            DiagnosticCheck::presence(
                NODE_MODULES_DIR,
                node_modules.is_dir(),
                "Dependencies installed",
                CheckStatus::Fail,
                "Dependencies not installed. Run: npm install",
            ),
            DiagnosticCheck::presence(
                KIMU_CORE_PACKAGE,
                node_modules.join(KIMU_CORE_PACKAGE).exists(),
                &format!("{KIMU_CORE_PACKAGE} is installed"),
                CheckStatus::Warn,
                &format!("{KIMU_CORE_PACKAGE} not found in dependencies"),
            ),
        ],
    }
}

pub fn check_build_artifacts(root: &Path) -> Diagnostic {
    Diagnostic {
        category: "Build Artifacts".to_string(),
        checks: vec![DiagnosticCheck::presence(
            "dist directory",
            root.join(DIST_DIR).is_dir(),
            "Build artifacts found",
            CheckStatus::Warn,
            "Build artifacts not found. Run: kimu build",
        )],
    }
}

/// Runs every check group against `root`.
pub fn run_diagnostics<P: AsRef<Path>>(root: P) -> Vec<Diagnostic> {
    let root = root.as_ref();
    vec![check_project_structure(root), check_dependencies(root), check_build_artifacts(root)]
}
