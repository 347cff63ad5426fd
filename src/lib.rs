#![forbid(unsafe_code)]
//! gdcpp: GDScript to godot-cpp transpiler backend
//!
//! An upstream parser walks a script and reports what it sees as semantic events (a class begins, a property is
//! declared, a statement is parsed). This crate turns those events into a godot-cpp header/source pair: class
//! declarations, out-of-line method bodies, synthesized accessors and the `_bind_methods` registration table.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod config;

pub use backend::model;
pub use backend::{ClassData, Event, GeneratedFiles, Script, TranspileError, Transpiler, transpile_script};
pub use config::TranspilerConfig;
