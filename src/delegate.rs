//! Runs the JavaScript toolchain (npm, npx, node) on behalf of the CLI.
//!
//! The child inherits the terminal's process group, so Ctrl+C reaches it
//! directly; the CLI only waits for it and reports its exit status.

use crate::constants::{
    KIMU_CORE_PACKAGE, KIMU_CORE_SEARCH_DEPTH, NODE_MODULES_DIR, REMOVE_MODULE_SCRIPT,
};
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// How the child's stdout and stderr are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Stream straight to the terminal
    Inherit,
    /// Collect and attach to the error on failure
    Capture,
}

/// A fully described external invocation.
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: OsString,
    args: Vec<OsString>,
    cwd: PathBuf,
    envs: Vec<(String, String)>,
}

impl ExternalCommand {
    pub fn new<S: Into<OsString>, P: Into<PathBuf>>(program: S, cwd: P) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: cwd.into(), envs: Vec::new() }
    }

    pub fn npm<P: Into<PathBuf>>(cwd: P) -> Self {
        Self::new(if cfg!(windows) { "npm.cmd" } else { "npm" }, cwd)
    }

    pub fn npx<P: Into<PathBuf>>(cwd: P) -> Self {
        Self::new(if cfg!(windows) { "npx.cmd" } else { "npx" }, cwd)
    }

    pub fn node<P: Into<PathBuf>>(cwd: P) -> Self {
        Self::new("node", cwd)
    }

    pub fn arg<S: Into<OsString>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Command line as shown in logs and errors.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|s| s.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs to completion; a non-zero exit status is an error.
    pub fn run(&self, mode: OutputMode) -> Result<()> {
        let display = self.display();
        log::debug!("Running '{display}' in '{}'", self.cwd.display());

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .current_dir(&self.cwd)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit());

        let spawn_error =
            |e: std::io::Error| Error::Other(anyhow::anyhow!("Failed to run '{display}': {e}"));

        match mode {
            OutputMode::Inherit => {
                let status = command
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_error)?;
                if !status.success() {
                    return Err(Error::CommandFailed {
                        command: display,
                        status,
                        output: String::new(),
                    });
                }
            }
            OutputMode::Capture => {
                let output = command.output().map_err(spawn_error)?;
                if !output.status.success() {
                    let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
                    captured.push_str(&String::from_utf8_lossy(&output.stderr));
                    let captured = captured.trim();
                    return Err(Error::CommandFailed {
                        command: display,
                        status: output.status,
                        output: if captured.is_empty() {
                            String::new()
                        } else {
                            format!("\n{captured}")
                        },
                    });
                }
                log::trace!("{}", String::from_utf8_lossy(&output.stdout));
            }
        }
        Ok(())
    }
}

/// Build flavour selected by `kimu build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTarget {
    Default,
    Dev,
    Local,
    Prod,
}

impl BuildTarget {
    /// The npm script implementing this flavour.
    pub fn script(self) -> &'static str {
        match self {
            BuildTarget::Default => "build",
            BuildTarget::Dev => "build:dev",
            BuildTarget::Local => "build:local",
            BuildTarget::Prod => "build:prod",
        }
    }
}

/// Locates a kimu-core checkout providing the module removal script.
///
/// Looks in `node_modules/kimu-core`, then `cwd` itself, then a sibling
/// `kimu-core` directory up to three levels above `cwd`.
pub fn find_kimu_core<P: AsRef<Path>>(cwd: P) -> Option<PathBuf> {
    let cwd = cwd.as_ref();

    let installed = cwd.join(NODE_MODULES_DIR).join(KIMU_CORE_PACKAGE);
    if installed.exists() {
        return Some(installed);
    }

    if cwd.join(REMOVE_MODULE_SCRIPT).is_file() {
        return Some(cwd.to_path_buf());
    }

    cwd.ancestors()
        .skip(1)
        .take(KIMU_CORE_SEARCH_DEPTH)
        .map(|parent| parent.join(KIMU_CORE_PACKAGE))
        .find(|candidate| candidate.join(REMOVE_MODULE_SCRIPT).is_file())
}

/// Runs kimu-core's module removal script for `name`.
pub fn remove_module<P: AsRef<Path>>(cwd: P, name: &str) -> Result<()> {
    let cwd = cwd.as_ref();
    let core = find_kimu_core(cwd).ok_or(Error::KimuCoreNotFound)?;
    log::info!("Using kimu-core at: {}", core.display());

    let script = core.join(REMOVE_MODULE_SCRIPT);
    if !script.is_file() {
        return Err(Error::ProcessError {
            source_path: script.display().to_string(),
            e: "remove-module.js script not found in kimu-core".to_string(),
        });
    }

    ExternalCommand::node(cwd).arg(script).arg(name).run(OutputMode::Inherit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn build_scripts() {
        assert_eq!(BuildTarget::Default.script(), "build");
        assert_eq!(BuildTarget::Dev.script(), "build:dev");
        assert_eq!(BuildTarget::Local.script(), "build:local");
        assert_eq!(BuildTarget::Prod.script(), "build:prod");
    }

    #[test]
    fn displays_command_line() {
        let command = ExternalCommand::npx("/tmp")
            .arg("vite")
            .arg("preview")
            .arg("--port")
            .arg("8080");
        assert!(command.display().ends_with("vite preview --port 8080"));
    }

    #[cfg(unix)]
    #[test]
    fn captured_failure_carries_output() {
        let tmp = TempDir::new().unwrap();
        let err = ExternalCommand::new("sh", tmp.path())
            .arg("-c")
            .arg("echo compile error >&2; exit 3")
            .run(OutputMode::Capture)
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
        match err {
            Error::CommandFailed { status, output, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(output, "\ncompile error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn passes_environment_and_cwd() {
        let tmp = TempDir::new().unwrap();
        ExternalCommand::new("sh", tmp.path())
            .arg("-c")
            .arg("echo \"$PORT:$HOST\" > out.txt")
            .env("PORT", "3000")
            .env("HOST", "localhost")
            .run(OutputMode::Capture)
            .unwrap();
        assert_eq!(fs::read_to_string(tmp.path().join("out.txt")).unwrap(), "3000:localhost\n");
    }

    #[test]
    fn missing_program_is_reported() {
        let tmp = TempDir::new().unwrap();
        let err = ExternalCommand::new("kimu-definitely-not-a-program", tmp.path())
            .run(OutputMode::Capture)
            .unwrap_err();
        assert!(err.to_string().contains("kimu-definitely-not-a-program"));
    }

    #[test]
    fn finds_core_in_node_modules_first() {
        let tmp = TempDir::new().unwrap();
        let core = tmp.path().join("node_modules/kimu-core");
        fs::create_dir_all(&core).unwrap();
        fs::create_dir_all(tmp.path().join("scripts")).unwrap();
        fs::write(tmp.path().join("scripts/remove-module.js"), "").unwrap();
        assert_eq!(find_kimu_core(tmp.path()), Some(core));
    }

    #[test]
    fn finds_core_in_cwd() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("scripts")).unwrap();
        fs::write(tmp.path().join("scripts/remove-module.js"), "").unwrap();
        assert_eq!(find_kimu_core(tmp.path()), Some(tmp.path().to_path_buf()));
    }

    #[test]
    fn finds_sibling_core_within_three_levels() {
        let tmp = TempDir::new().unwrap();
        let sibling = tmp.path().join("kimu-core");
        fs::create_dir_all(sibling.join("scripts")).unwrap();
        fs::write(sibling.join("scripts/remove-module.js"), "").unwrap();

        let near = tmp.path().join("a/b");
        fs::create_dir_all(&near).unwrap();
        assert_eq!(find_kimu_core(&near), Some(sibling.clone()));

        let far = tmp.path().join("a/b/c/d");
        fs::create_dir_all(&far).unwrap();
        assert_eq!(find_kimu_core(&far), None);
    }

    #[test]
    fn remove_module_without_core_fails() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("deep/er/project");
        fs::create_dir_all(&project).unwrap();
        assert!(matches!(remove_module(&project, "router"), Err(Error::KimuCoreNotFound)));
    }
}
