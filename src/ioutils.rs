use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Ensures the directory a new project will be cloned into is safe to use.
///
/// An existing directory is removed when `force` is set.
pub fn prepare_project_dir<P: AsRef<Path>>(project_dir: P, force: bool) -> Result<PathBuf> {
    let project_dir = project_dir.as_ref();
    if project_dir.exists() {
        if !force {
            return Err(Error::ProjectDirectoryExistsError {
                target: project_dir.display().to_string(),
            });
        }
        log::info!("Removing existing directory '{}'", project_dir.display());
        std::fs::remove_dir_all(project_dir)?;
    }
    Ok(project_dir.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Recursively copies `source` into `dest`, skipping any `.git` directory.
pub fn copy_dir<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<usize> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    let mut copied = 0;

    let walker = WalkDir::new(source)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git");

    for entry in walker {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(|e| Error::ProcessError {
            source_path: entry.path().display().to_string(),
            e: e.to_string(),
        })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            copy_file(entry.path(), target.as_path())?;
            copied += 1;
        } else {
            log::debug!("Skipping '{}' (not a regular file)", entry.path().display());
        }
    }
    Ok(copied)
}

/// Reads and parses a JSON document.
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Writes `value` as 2-space indented JSON followed by a newline.
pub fn write_json_pretty<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    write_file(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prepare_project_dir_rejects_existing_without_force() {
        let tmp = TempDir::new().unwrap();
        let err = prepare_project_dir(tmp.path(), false).unwrap_err();
        assert!(matches!(err, Error::ProjectDirectoryExistsError { .. }));
        assert!(tmp.path().exists());
    }

    #[test]
    fn prepare_project_dir_removes_existing_with_force() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("app");
        fs::create_dir_all(project.join("src")).unwrap();
        let result = prepare_project_dir(&project, true).unwrap();
        assert_eq!(result, project);
        assert!(!project.exists());
    }

    #[test]
    fn write_file_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("a/b/c.txt");
        write_file("hello", &target).unwrap();
        assert_eq!(fs::read_to_string(target).unwrap(), "hello");
    }

    #[test]
    fn copy_dir_skips_git_metadata() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("source");
        fs::create_dir_all(source.join(".git/objects")).unwrap();
        fs::create_dir_all(source.join("src/nested")).unwrap();
        fs::write(source.join(".git/HEAD"), "ref").unwrap();
        fs::write(source.join("package.json"), "{}").unwrap();
        fs::write(source.join("src/nested/main.ts"), "export {}").unwrap();

        let dest = tmp.path().join("dest");
        let copied = copy_dir(&source, &dest).unwrap();

        assert_eq!(copied, 2);
        assert!(dest.join("package.json").is_file());
        assert!(dest.join("src/nested/main.ts").is_file());
        assert!(!dest.join(".git").exists());
    }

    #[test]
    fn json_round_trip_uses_two_space_indent_and_newline() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("m.json");
        write_json_pretty(&path, &json!({ "b": [1], "a": true })).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"b\": [\n    1\n  ],\n  \"a\": true\n}\n"
        );
        let value: serde_json::Value = read_json(&path).unwrap();
        assert_eq!(value, json!({ "a": true, "b": [1] }));
    }
}
