//! Hygiene: source-level budgets for the client library.
//!
//! Scans `client/src/` (test files and unit-test fixtures excluded) for
//! patterns that crash the process or drop errors without looking at them.
//! Budgets only go down.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

// Panics.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0 };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0 };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0 };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0 };
const TODO: Budget = Budget { pattern: "todo!(", max: 0 };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0 };

// Silent loss.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0 };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0 };

// Structure.
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0 };

fn is_test_only(path: &Path) -> bool {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    name.ends_with("_test.rs") || name == "test_support.rs"
}

fn production_files(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") && !is_test_only(&path) {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn assert_within(budget: &Budget) {
    let mut files = Vec::new();
    production_files(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
    assert!(!files.is_empty(), "no source files found");

    let hits: Vec<(String, usize)> = files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
            (count > 0).then(|| (path.display().to_string(), count))
        })
        .collect();
    let found: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits.iter().map(|(p, c)| format!("  {p}: {c}")).collect::<Vec<_>>().join("\n");

    assert!(
        found <= budget.max,
        "`{}` budget exceeded: found {found}, max {}.\n{listing}",
        budget.pattern,
        budget.max
    );
}

#[test]
fn unwrap_budget() {
    assert_within(&UNWRAP);
}

#[test]
fn expect_budget() {
    assert_within(&EXPECT);
}

#[test]
fn panic_budget() {
    assert_within(&PANIC);
}

#[test]
fn unreachable_budget() {
    assert_within(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_within(&TODO);
}

#[test]
fn unimplemented_budget() {
    assert_within(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_within(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_within(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_within(&ALLOW_DEAD_CODE);
}
