//! Golden-file test harness for playbox.
//!
//! Discovers `.input.js` files under `tests/fixtures/`, compiles them
//! with the default configuration, and compares output against the
//! corresponding `.expected.js` file.
//!
//! Set `PLAYBOX_UPDATE_FIXTURES=1` to overwrite expected files with
//! actual output.

use std::path::{Path, PathBuf};

use pb_compile::compile;
use pb_config::CompilerConfig;

fn fixtures_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is crates/pb_test/, so go up two levels to the
    // workspace root.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
}

fn collect_input_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if !dir.exists() {
        return files;
    }
    for entry in walkdir(dir) {
        if entry
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".input.js"))
        {
            files.push(entry);
        }
    }
    files.sort();
    files
}

fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut result = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                result.extend(walkdir(&path));
            } else {
                result.push(path);
            }
        }
    }
    result
}

#[test]
fn golden_file_tests() {
    let fixtures = fixtures_dir();
    let input_files = collect_input_files(&fixtures);

    assert!(
        !input_files.is_empty(),
        "No test fixtures found in {}",
        fixtures.display()
    );

    let update_mode = std::env::var("PLAYBOX_UPDATE_FIXTURES").is_ok();
    let mut failures = Vec::new();

    for input_path in &input_files {
        let expected_path = input_path
            .to_str()
            .unwrap()
            .replace(".input.js", ".expected.js");
        let expected_path = PathBuf::from(&expected_path);

        let test_name = input_path
            .strip_prefix(&fixtures)
            .unwrap()
            .display()
            .to_string();

        let source = match std::fs::read_to_string(input_path) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{test_name}: failed to read input: {e}"));
                continue;
            }
        };

        let actual = match compile(&source, &CompilerConfig::default()) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!(
                    "{test_name}: compile failed: {e} ({}:{})",
                    e.line, e.column
                ));
                continue;
            }
        };

        if update_mode {
            if let Err(e) = std::fs::write(&expected_path, &actual) {
                failures.push(format!("{test_name}: failed to write expected: {e}"));
            }
            continue;
        }

        if !expected_path.exists() {
            failures.push(format!(
                "{test_name}: missing expected file: {}",
                expected_path.display()
            ));
            continue;
        }

        let expected = match std::fs::read_to_string(&expected_path) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{test_name}: failed to read expected: {e}"));
                continue;
            }
        };
        if actual.trim() != expected.trim() {
            failures.push(format!(
                "{test_name}: output mismatch\n--- expected ---\n{}\n--- actual ---\n{}",
                expected.trim(),
                actual.trim()
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "\n{} golden test(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n\n")
        );
    }
}

#[test]
fn recompile_tests() {
    // Compiled output contains none of the lowered syntax, so compiling
    // it a second time must change nothing.
    let fixtures = fixtures_dir();
    let input_files = collect_input_files(&fixtures);

    let mut failures = Vec::new();

    for input_path in &input_files {
        let test_name = input_path
            .strip_prefix(&fixtures)
            .unwrap()
            .display()
            .to_string();

        let source = match std::fs::read_to_string(input_path) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{test_name}: failed to read: {e}"));
                continue;
            }
        };

        let first = match compile(&source, &CompilerConfig::default()) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{test_name}: compile failed: {e}"));
                continue;
            }
        };

        match compile(&first, &CompilerConfig::default()) {
            Ok(second) => {
                if first.trim() != second.trim() {
                    failures.push(format!(
                        "{test_name}: recompile changed output\n--- first ---\n{}\n--- second ---\n{}",
                        first.trim(),
                        second.trim()
                    ));
                }
            }
            Err(e) => {
                failures.push(format!("{test_name}: recompile failed: {e}"));
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "\n{} recompile test(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n\n")
        );
    }
}
