//! The emission engine.
//!
//! [`Transpiler`] consumes semantic events one at a time and places the C++ text they produce. Each concern lives in
//! its own submodule:
//!
//! - `decls`: classes, enums, annotations, properties, methods, signals, end of class
//! - `bindings`: synthesis of `_bind_methods`
//! - `expressions` / `statements`: per-node translation
//! - `output`: end of script (includes, templates, normalization)
//!
//! ## Emission routing
//!
//! Text reaches the output through two paths. [`Transpiler::emit_inline`] appends to the current staging layer,
//! indented to the scope level. [`Transpiler::emit_structural`] carries newlines and comments, which belong to
//! whatever is being built at the moment: the current layer inside a scope, the class header at class level, the
//! header output before any class exists.

mod bindings;
mod decls;
mod expressions;
mod output;
mod statements;

use std::borrow::Cow;

use indexmap::IndexMap;

use super::class_data::ClassData;
use super::class_def::ClassDefinition;
use super::errors::TranspileError;
use super::model::{Expr, Stmt};
use super::text::{Block, LayerStack, TextBuffer};
use super::types::TypeTranslator;
use crate::config::TranspilerConfig;

pub use output::GeneratedFiles;

/// Result type of every engine operation.
pub type TranspileResult<T = ()> = Result<T, TranspileError>;

/// Stateful C++ emitter for one script.
///
/// All state is owned by the instance; separate scripts use separate transpilers.
#[derive(Debug)]
pub struct Transpiler {
    config: TranspilerConfig,
    level: usize,
    classes: IndexMap<String, ClassDefinition>,
    current: Option<String>,
    types: TypeTranslator,
    layers: LayerStack,
    header: TextBuffer,
}

impl Transpiler {
    pub fn new(config: TranspilerConfig) -> Self {
        let types = TypeTranslator::new(config.use_floats);
        Self {
            config,
            level: 0,
            classes: IndexMap::new(),
            current: None,
            types,
            layers: LayerStack::new(),
            header: TextBuffer::new(),
        }
    }

    /// Current scope depth.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Number of layers on the stack, root included.
    pub fn layer_depth(&self) -> usize {
        self.layers.depth()
    }

    /// Name of the class currently receiving declarations.
    pub fn current_class(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Metadata of a declared class, including methods recorded by the engine.
    pub fn class_data(&self, name: &str) -> Option<&ClassData> {
        self.classes.get(name).map(|class| &class.data)
    }

    /// Text of the root layer emitted so far.
    pub fn source_so_far(&self) -> &str {
        self.layers.root().as_str()
    }

    // ========================================================================
    // Layers
    // ========================================================================

    pub fn push_layer(&mut self) {
        self.layers.push();
    }

    pub fn pop_layer(&mut self) -> TranspileResult<String> {
        self.layers.pop()
    }

    /// Write text to the current layer without indentation.
    fn write(&mut self, text: &str) {
        tracing::trace!(text, "write");
        self.layers.top().write(text);
    }

    // ========================================================================
    // Emission routing
    // ========================================================================

    /// Indent every line break in `text` to the current scope level.
    fn indented<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.level == 0 || !text.contains('\n') {
            return Cow::Borrowed(text);
        }
        let replacement = format!("\n{}", self.config.indent.repeat(self.level));
        Cow::Owned(text.replace('\n', &replacement))
    }

    /// Append text to the current layer, indented to the scope level.
    pub fn emit_inline(&mut self, text: &str) {
        let text = self.indented(text).into_owned();
        self.write(&text);
    }

    /// Append a newline or comment to whatever is being built at the moment.
    pub fn emit_structural(&mut self, text: &str) {
        let text = self.indented(text).into_owned();
        tracing::trace!(text = %text, level = self.level, "structural");
        if self.level > 0 {
            self.layers.top().write(&text);
            return;
        }
        let current = self.current.as_ref().and_then(|name| self.classes.get_mut(name));
        match current {
            Some(class) if !class.is_finished() => class.header_mut().write(&text),
            _ => self.header.write(&text),
        }
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    pub fn up_scope(&mut self) {
        self.emit_inline("\n{");
        self.level += 1;
        tracing::debug!(level = self.level, "scope opened");
    }

    /// Close a scope; does nothing at level 0.
    pub fn down_scope(&mut self) {
        if self.level == 0 {
            return;
        }
        self.level -= 1;
        self.emit_inline("\n}");
        tracing::debug!(level = self.level, "scope closed");
    }

    /// Terminate a statement; only meaningful inside a scope.
    pub fn end_statement(&mut self) {
        if self.level > 0 {
            self.emit_inline(";");
        }
    }

    /// Render `stmts` one level deeper into a staging layer and return them as a block.
    fn capture_block(&mut self, prologue: Vec<String>, stmts: &[Stmt], epilogue: Vec<String>) -> TranspileResult<Block> {
        let level = self.level;
        self.push_layer();
        self.level = level + 1;
        let rendered = stmts.iter().try_for_each(|stmt| self.statement(stmt));
        self.level = level;
        let body = self.pop_layer()?;
        rendered?;
        Ok(Block { level, prologue, body, epilogue })
    }

    /// Write a captured block to the current layer.
    fn place_block(&mut self, block: &Block) {
        let text = block.render(&self.config.indent);
        self.write(&text);
    }

    /// Render an expression into a string without emitting it.
    pub fn render_expr(&mut self, expr: &Expr) -> TranspileResult<String> {
        self.push_layer();
        let rendered = self.expression(expr);
        let text = self.pop_layer()?;
        rendered.map(|()| text)
    }

    // ========================================================================
    // Class lookup
    // ========================================================================

    fn class(&self, name: &str) -> TranspileResult<&ClassDefinition> {
        self.classes.get(name).ok_or_else(|| TranspileError::UnknownClass(name.to_string()))
    }

    fn class_mut(&mut self, name: &str) -> TranspileResult<&mut ClassDefinition> {
        self.classes.get_mut(name).ok_or_else(|| TranspileError::UnknownClass(name.to_string()))
    }

    fn current_name(&self) -> TranspileResult<String> {
        self.current.clone().ok_or(TranspileError::NoCurrentClass)
    }

    fn current_class_mut(&mut self) -> TranspileResult<&mut ClassDefinition> {
        let name = self.current_name()?;
        self.class_mut(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::model::{ClassDecl, Expr, Literal, Stmt};

    pub(super) fn transpiler() -> Transpiler {
        Transpiler::new(TranspilerConfig::new("test"))
    }

    /// A transpiler with `Player : Node2D` declared.
    pub(super) fn with_class(data: ClassData) -> Transpiler {
        let mut t = transpiler();
        t.define_class(&ClassDecl::new("Player", "Node2D"), data).unwrap();
        t
    }

    // ========================================
    // Routing
    // ========================================

    #[test]
    fn test_inline_is_indented_to_level() {
        let mut t = transpiler();
        t.up_scope();
        t.emit_inline("\nx");
        assert_eq!(t.source_so_far(), "\n{\n\tx");
    }

    #[test]
    fn test_structural_goes_to_header_before_any_class() {
        let mut t = transpiler();
        t.emit_structural("//top");
        assert_eq!(t.header.as_str(), "//top");
        assert_eq!(t.source_so_far(), "");
    }

    #[test]
    fn test_structural_goes_to_class_header_at_class_level() {
        let mut t = with_class(ClassData::new());
        t.emit_structural("//member");
        assert!(t.classes["Player"].header().as_str().ends_with("//member"));
        assert_eq!(t.source_so_far(), "");
    }

    #[test]
    fn test_structural_goes_to_layer_inside_scope() {
        let mut t = with_class(ClassData::new());
        t.up_scope();
        t.emit_structural("\n//inside");
        assert_eq!(t.source_so_far(), "\n{\n\t//inside");
    }

    // ========================================
    // Scopes
    // ========================================

    #[test]
    fn test_down_scope_at_zero_is_noop() {
        let mut t = transpiler();
        t.down_scope();
        assert_eq!(t.level(), 0);
        assert_eq!(t.source_so_far(), "");
    }

    #[test]
    fn test_end_statement_only_inside_scope() {
        let mut t = transpiler();
        t.end_statement();
        assert_eq!(t.source_so_far(), "");
        t.up_scope();
        t.end_statement();
        t.down_scope();
        assert_eq!(t.source_so_far(), "\n{;\n}");
    }

    // ========================================
    // Layers
    // ========================================

    #[test]
    fn test_render_expr_leaves_no_trace() {
        let mut t = transpiler();
        t.emit_inline("a");
        let text = t.render_expr(&Expr::Literal(Literal::Bool(true))).unwrap();
        assert_eq!(text, "true");
        assert_eq!(t.source_so_far(), "a");
        assert_eq!(t.layer_depth(), 1);
    }

    #[test]
    fn test_capture_block_restores_level() {
        let mut t = transpiler();
        let block = t.capture_block(vec![], &Stmt::line(Stmt::Break), vec![]).unwrap();
        assert_eq!(block.body, "\n\tbreak;");
        assert_eq!(t.level(), 0);
        assert_eq!(t.layer_depth(), 1);
    }
}
