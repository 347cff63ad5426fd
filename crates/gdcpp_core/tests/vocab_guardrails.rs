use std::collections::HashSet;

use gdcpp_core::NameMapping;
use gdcpp_core::builtins::{FUNCTION_REPLACEMENTS, VARIABLE_REPLACEMENTS, function_replacement, variable_replacement};
use gdcpp_core::hints::{EXPORT_HINTS, GROUP_ANNOTATIONS, is_export_annotation, property_hint};
use gdcpp_core::variant::{TYPE_TAG_PREFIX, VARIANT_TYPES};

fn assert_unique(table: &[NameMapping], what: &str) {
    let mut seen = HashSet::new();
    for entry in table {
        if !seen.insert(entry.script) {
            panic!("duplicate {} spelling {:?}", what, entry.script);
        }
    }
}

#[test]
fn function_replacements_unique_and_resolvable() {
    assert_unique(FUNCTION_REPLACEMENTS, "function");
    for entry in FUNCTION_REPLACEMENTS {
        assert_eq!(
            function_replacement(entry.script),
            Some(entry.native),
            "function replacement not resolvable: {}",
            entry.script
        );
    }
}

#[test]
fn variable_replacements_unique_and_resolvable() {
    assert_unique(VARIABLE_REPLACEMENTS, "variable");
    for entry in VARIABLE_REPLACEMENTS {
        assert_eq!(variable_replacement(entry.script), Some(entry.native));
    }
}

#[test]
fn export_hints_are_export_annotations() {
    assert_unique(EXPORT_HINTS, "export hint");
    for entry in EXPORT_HINTS {
        assert!(is_export_annotation(entry.script), "not an export annotation: {}", entry.script);
        assert!(entry.native.starts_with("PROPERTY_HINT_"), "bad hint constant: {}", entry.native);
        assert_eq!(property_hint(entry.script).as_deref(), Some(entry.native));
    }
}

#[test]
fn group_annotations_do_not_overlap_hints() {
    for group in GROUP_ANNOTATIONS {
        assert!(is_export_annotation(group.script));
        assert!(
            EXPORT_HINTS.iter().all(|hint| hint.script != group.script),
            "group annotation also listed as a hint: {}",
            group.script
        );
    }
}

#[test]
fn variant_tags_are_prefixed_and_unique() {
    let mut seen = HashSet::new();
    for tag in VARIANT_TYPES {
        assert!(tag.starts_with(TYPE_TAG_PREFIX), "tag without prefix: {}", tag);
        assert!(seen.insert(*tag), "duplicate tag {}", tag);
    }
}
