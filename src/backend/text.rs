//! Text buffers, the layer stack, and captured block spans.
//!
//! Generated C++ is not written in input order: a method body is rendered before its signature is placed, a member
//! initializer is rendered before the engine knows whether it is deferred. Every fragment is therefore produced into
//! a staging layer that the caller pops and places wherever it belongs ("parse now, place later").

use std::fmt;

use super::errors::TranspileError;

/// An append-only text accumulator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    buffer: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text verbatim.
    pub fn write(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Append formatted text.
    pub fn writef(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = fmt::Write::write_fmt(&mut self.buffer, args);
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the buffer and return its text.
    pub fn finish(self) -> String {
        self.buffer
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// LIFO stack of staging buffers over a root layer.
///
/// The root layer holds the body of the source translation unit and can never be popped, so the stack is never
/// empty. Writes always go to the top layer.
#[derive(Debug, Default)]
pub struct LayerStack {
    root: TextBuffer,
    staged: Vec<TextBuffer>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh staging layer.
    pub fn push(&mut self) {
        self.staged.push(TextBuffer::new());
    }

    /// Close the top staging layer and return its text.
    pub fn pop(&mut self) -> Result<String, TranspileError> {
        self.staged.pop().map(TextBuffer::finish).ok_or(TranspileError::LayerUnderflow)
    }

    /// The layer that currently receives writes.
    pub fn top(&mut self) -> &mut TextBuffer {
        self.staged.last_mut().unwrap_or(&mut self.root)
    }

    pub fn root(&self) -> &TextBuffer {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut TextBuffer {
        &mut self.root
    }

    /// Number of layers, root included.
    pub fn depth(&self) -> usize {
        self.staged.len() + 1
    }

    /// Pop every staging layer, appending each one to the layer below it.
    pub fn drain_into_root(&mut self) {
        while let Some(layer) = self.staged.pop() {
            self.top().write(layer.as_str());
        }
    }
}

/// A captured brace-delimited body.
///
/// `prologue` and `epilogue` hold statements (without their `;`) placed before and after the captured body: the
/// deferred initializers of `_ready`, or the `break` that closes a `switch` case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Scope level of the braces themselves.
    pub level: usize,
    pub prologue: Vec<String>,
    pub body: String,
    pub epilogue: Vec<String>,
}

impl Block {
    /// Render the block with its braces indented to `level` and structural statements one level deeper.
    pub fn render(&self, indent: &str) -> String {
        let outer = indent.repeat(self.level);
        let inner = indent.repeat(self.level + 1);
        let mut out = format!("\n{outer}{{");
        for stmt in &self.prologue {
            out.push_str(&format!("\n{inner}{stmt};"));
        }
        out.push_str(&self.body);
        for stmt in &self.epilogue {
            out.push_str(&format!("\n{inner}{stmt};"));
        }
        out.push_str(&format!("\n{outer}}}"));
        out
    }
}
