//! Transpiler configuration.

/// Settings that shape the generated C++ without changing its meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspilerConfig {
    /// Base name of the generated pair: names the include guard and the header included by the source.
    pub script_name: String,
    /// Translate script `float` to C++ `float` instead of `double`.
    pub use_floats: bool,
    /// One level of indentation.
    pub indent: String,
}

impl Default for TranspilerConfig {
    fn default() -> Self {
        Self {
            script_name: "script".to_string(),
            use_floats: false,
            indent: "\t".to_string(),
        }
    }
}

impl TranspilerConfig {
    /// Create a config for the given script name with default settings
    pub fn new(script_name: impl Into<String>) -> Self {
        Self {
            script_name: script_name.into(),
            ..Self::default()
        }
    }

    /// Set float precision
    pub fn with_floats(mut self, use_floats: bool) -> Self {
        self.use_floats = use_floats;
        self
    }

    /// Set the indentation unit
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Include guard macro derived from the script name (`player` → `PLAYER_H`).
    pub fn include_guard(&self) -> String {
        let name: String = self
            .script_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect();
        format!("{name}_H")
    }
}
