//! Source hygiene for the motion crate.
//!
//! Scans production sources (not `*_test.rs`) for constructs that can panic
//! or silently swallow results. The state machines here run inside browser
//! event handlers where a panic takes down the whole page.

use std::fs;
use std::path::Path;

const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "unwrap"),
    (".expect(", "expect"),
    ("panic!(", "panic"),
    ("unreachable!(", "unreachable"),
    ("todo!(", "todo"),
    ("unimplemented!(", "unimplemented"),
    ("let _ =", "silent discard"),
    ("#[allow(dead_code)]", "allow(dead_code)"),
];

fn production_sources() -> Vec<(String, String)> {
    let mut out = Vec::new();
    collect(Path::new("src"), &mut out);
    out
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn sources_were_found() {
    assert!(!production_sources().is_empty(), "run from the motion crate root");
}

#[test]
fn no_forbidden_constructs_in_production_code() {
    let files = production_sources();
    let mut hits = Vec::new();
    for (path, content) in &files {
        for (lineno, line) in content.lines().enumerate() {
            for (pattern, label) in FORBIDDEN {
                if line.contains(pattern) {
                    hits.push(format!("  {path}:{}: {label}", lineno + 1));
                }
            }
        }
    }
    assert!(hits.is_empty(), "forbidden constructs found:\n{}", hits.join("\n"));
}
