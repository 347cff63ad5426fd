//! Per-class build state.

use std::collections::HashMap;
use std::mem;

use indexmap::IndexMap;

use super::class_data::ClassData;
use super::model::Param;
use super::text::TextBuffer;

/// Which access section the class header is currently writing into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
}

/// An annotation recorded while the class body is parsed, materialized in `_bind_methods`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Member the annotation decorates; `None` for member-less annotations such as `@export_group`.
    pub member: Option<String>,
    pub name: String,
    pub params: String,
}

/// Everything the engine accumulates for one class until its closing event.
#[derive(Debug)]
pub struct ClassDefinition {
    pub name: String,
    pub data: ClassData,
    header: TextBuffer,
    visibility: Visibility,
    method_args: IndexMap<String, Vec<String>>,
    signals: IndexMap<String, Vec<Param>>,
    onready: Vec<String>,
    statics: Vec<String>,
    annotations: Vec<Annotation>,
    getters: HashMap<String, String>,
    setters: HashMap<String, String>,
    finished: bool,
}

impl ClassDefinition {
    /// Open a class; the header starts with the class line and the public section.
    pub fn new(name: &str, base: &str, data: ClassData) -> Self {
        let mut header = TextBuffer::new();
        header.writef(format_args!("class {name} : public {base} {{\n\tGDCLASS({name}, {base});\npublic:\n"));
        Self {
            name: name.to_string(),
            data,
            header,
            visibility: Visibility::Public,
            method_args: IndexMap::new(),
            signals: IndexMap::new(),
            onready: Vec::new(),
            statics: Vec::new(),
            annotations: Vec::new(),
            getters: HashMap::new(),
            setters: HashMap::new(),
            finished: false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The header, switched to the public section.
    pub fn public(&mut self) -> &mut TextBuffer {
        self.switch_to(Visibility::Public)
    }

    /// The header, switched to the protected section.
    pub fn protected(&mut self) -> &mut TextBuffer {
        self.switch_to(Visibility::Protected)
    }

    fn switch_to(&mut self, visibility: Visibility) -> &mut TextBuffer {
        if self.visibility != visibility {
            self.header.write(match visibility {
                Visibility::Public => "\npublic:\n",
                Visibility::Protected => "\nprotected:\n",
            });
            self.visibility = visibility;
        }
        &mut self.header
    }

    /// The header without touching the access section.
    pub fn header_mut(&mut self) -> &mut TextBuffer {
        &mut self.header
    }

    pub fn header(&self) -> &TextBuffer {
        &self.header
    }

    pub fn record_method(&mut self, name: &str, params: Vec<String>) {
        self.method_args.insert(name.to_string(), params);
    }

    /// Method → parameter names, in definition order.
    pub fn method_args(&self) -> &IndexMap<String, Vec<String>> {
        &self.method_args
    }

    pub fn record_signal(&mut self, name: &str, params: Vec<Param>) {
        self.signals.insert(name.to_string(), params);
    }

    pub fn signals(&self) -> &IndexMap<String, Vec<Param>> {
        &self.signals
    }

    pub fn push_onready(&mut self, stmt: String) {
        self.onready.push(stmt);
    }

    pub fn has_onready(&self) -> bool {
        !self.onready.is_empty()
    }

    /// Take the deferred initializers; they are applied exactly once.
    pub fn take_onready(&mut self) -> Vec<String> {
        mem::take(&mut self.onready)
    }

    pub fn push_static(&mut self, stmt: String) {
        self.statics.push(stmt);
    }

    pub fn take_statics(&mut self) -> Vec<String> {
        mem::take(&mut self.statics)
    }

    pub fn record_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn set_getter(&mut self, member: &str, method: &str) {
        self.getters.insert(member.to_string(), method.to_string());
    }

    pub fn set_setter(&mut self, member: &str, method: &str) {
        self.setters.insert(member.to_string(), method.to_string());
    }

    pub fn getter(&self, member: &str) -> Option<&str> {
        self.getters.get(member).map(String::as_str)
    }

    pub fn setter(&self, member: &str) -> Option<&str> {
        self.setters.get(member).map(String::as_str)
    }

    /// Whether the class still needs a `_bind_methods`.
    pub fn needs_bindings(&self) -> bool {
        !self.annotations.is_empty()
            || !self.data.methods.is_empty()
            || !self.signals.is_empty()
            || !self.data.enums.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Close the class and hand back its header fragment.
    pub fn finish(&mut self) -> String {
        self.finished = true;
        mem::take(&mut self.header).finish()
    }
}
