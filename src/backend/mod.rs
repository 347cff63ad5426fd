//! Backend: godot-cpp emission.
//!
//! ## Pipeline
//!
//! ```text
//! Event log ──► Transpiler ──► ClassDefinition header fragments ──┐
//!                   │                                            ├──► GeneratedFiles { header, source }
//!                   └────────► LayerStack (root = source body) ──┘
//! ```
//!
//! ## Modules
//!
//! - `model`: statement/expression trees and declaration payloads
//! - `events`: the serialized event log and its replay
//! - `transpiler`: the emission engine
//! - `class_def` / `class_data`: per-class build state and resolver metadata
//! - `types`: script → C++ type translation
//! - `text`: buffers, layers, captured blocks
//! - `lowering`: text-level helpers (range splitting, quoting, prettify)

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod class_data;
pub mod class_def;
pub mod errors;
pub mod events;
pub mod lowering;
pub mod model;
pub mod text;
pub mod transpiler;
pub mod types;

pub use class_data::ClassData;
pub use errors::TranspileError;
pub use events::{Event, Script, transpile_script};
pub use transpiler::{GeneratedFiles, TranspileResult, Transpiler};
