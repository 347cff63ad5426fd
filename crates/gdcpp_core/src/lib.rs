//! Provide the canonical GDScript → godot-cpp vocabulary shared by the gdcpp transpiler.
//!
//! This crate is intentionally small and dependency-free. It contains the lookup tables and pure naming helpers the
//! emission engine consults when it maps script spellings onto native ones:
//! - [`variant`]: the engine's `Variant::Type` tags and the value-type vs owning-handle split,
//! - [`hints`]: `@export_*` annotations and their `PROPERTY_HINT_*` counterparts,
//! - [`builtins`]: global functions and constants with a native equivalent,
//! - [`conventions`]: well-known method names and accessor naming,
//! - [`naming`]: include-path derivation for engine classes.
//!
//! ## Notes
//!
//! - No IO and no global mutable state; every function here is deterministic.

pub mod builtins;
pub mod conventions;
pub mod hints;
pub mod naming;
pub mod variant;

/// A single script spelling and the native spelling it is rewritten to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMapping {
    pub script: &'static str,
    pub native: &'static str,
}

pub(crate) const fn map(script: &'static str, native: &'static str) -> NameMapping {
    NameMapping { script, native }
}

pub(crate) fn lookup(table: &'static [NameMapping], script: &str) -> Option<&'static str> {
    table.iter().find(|m| m.script == script).map(|m| m.native)
}
