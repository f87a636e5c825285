//! Hygiene: scans the canvas crate's production sources for patterns the
//! project keeps out of browser code.
//!
//! Every pattern has a budget (ideally zero). A panic in the engine takes the
//! whole editor down with it, so the budgets never grow; fix an existing hit
//! before adding one.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
    Budget { pattern: "println!(", max: 0 },
];

/// Only these modules talk to the browser directly.
const BROWSER_MODULES: &[&str] = &["engine.rs", "render.rs"];

/// Production `.rs` files under `src/`, excluding `_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let is_source = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_source && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.display().to_string(), count))
        })
        .collect()
}

fn report(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the canvas crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let total: usize = found.iter().map(|(_, c)| c).sum();
        if total > budget.max {
            failures.push(format!("`{}`: found {total}, max {}\n{}", budget.pattern, budget.max, report(&found)));
        }
    }
    assert!(failures.is_empty(), "budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn browser_access_is_confined() {
    let files = source_files();
    let offenders: Vec<_> = files
        .iter()
        .filter(|f| {
            let name = f.path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
            !BROWSER_MODULES.contains(&name.as_str()) && f.content.contains("web_sys::")
        })
        .map(|f| f.path.display().to_string())
        .collect();
    assert!(offenders.is_empty(), "web_sys used outside {BROWSER_MODULES:?}: {offenders:?}");
}
