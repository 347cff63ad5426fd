//! Errors raised by the emission engine.

use thiserror::Error;

/// Failure while replaying semantic events into C++ text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranspileError {
    /// A layer pop was requested while only the root layer remained.
    #[error("layer stack underflow: the root layer cannot be popped")]
    LayerUnderflow,
    /// An event named a class that was never declared.
    #[error("class `{0}` was never declared")]
    UnknownClass(String),
    /// A class-level event arrived before any class was declared.
    #[error("no class is being declared")]
    NoCurrentClass,
    /// A binding or accessor referred to a member the class metadata does not know.
    #[error("class `{class}` has no member `{member}`")]
    UnknownMember { class: String, member: String },
    /// A compound write through accessors arrived without its owner expression.
    #[error("compound write to `{member}` through its accessors needs the owner expression")]
    MissingOwner { member: String },
}
