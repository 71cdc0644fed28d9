#![allow(dead_code)]

use clap::Parser;
use kimu::cli::{Cli, Runner};
use kimu::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Path of a file or directory under `tests/fixtures`.
pub fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(relative)
}

/// The generators shipped with the CLI.
pub fn bundled_generators() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/generators")
}

/// Copies a fixture directory into `dest`.
pub fn copy_fixture(relative: &str, dest: &Path) {
    kimu::ioutils::copy_dir(fixture(relative), dest).unwrap();
}

/// Runs `kimu <args>` as if launched from `cwd`.
pub fn run_in(cwd: &Path, args: &[&str]) -> Result<()> {
    let cli = Cli::parse_from(std::iter::once("kimu").chain(args.iter().copied()));
    Runner::with_cwd(cli, cwd.to_path_buf()).run()
}

fn relative_files(root: &Path) -> std::collections::BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `actual` - The directory produced by the command under test.
/// * `expected` - The directory with expected output.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {actual:?}");
    println!("Expected output: {expected:?}\n");

    for file in actual_files.difference(&expected_files) {
        println!("  + {file:?}");
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {file:?}");
    }
    for file in actual_files.intersection(&expected_files) {
        let left = fs::read_to_string(actual.join(file)).unwrap_or_default();
        let right = fs::read_to_string(expected.join(file)).unwrap_or_default();
        if left != right {
            println!("\n  File: {file:?}");
            println!("  --- Actual content:\n{left}");
            println!("  --- Expected content:\n{right}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees are identical, printing the differences
/// first when they are not.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    if different {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
