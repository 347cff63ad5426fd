//! Layering guardrails to keep the vocabulary crate a leaf.
//!
//! `gdcpp_core` holds lookup tables only. It must not pull in the engine, serde, or anything else: this test scans
//! its `Cargo.toml` and fails if any entry appears under `[dependencies]`.

#[test]
fn vocabulary_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/gdcpp_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        panic!("`gdcpp_core` must stay dependency-free, found: {line}");
    }
}

#[test]
fn engine_depends_on_vocabulary_by_path() {
    let manifest = include_str!("../Cargo.toml");
    assert!(
        manifest.lines().any(|line| line.trim_start().starts_with("gdcpp_core") && line.contains("path")),
        "the root package must use the in-tree `gdcpp_core`"
    );
}
