//! Serialized semantic events.
//!
//! A [`Script`] is the event log an upstream parser produces for one source file. Replaying it through
//! [`Transpiler::apply`] is equivalent to the parser calling the engine directly.

use serde::{Deserialize, Serialize};

use super::class_data::ClassData;
use super::model::{ClassDecl, EnumMember, MethodDef, Param, PropertyDecl, Stmt};
use super::transpiler::{GeneratedFiles, TranspileResult, Transpiler};
use crate::config::TranspilerConfig;

/// One class-level or statement-level event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    DefineClass {
        class: ClassDecl,
        #[serde(default)]
        data: ClassData,
    },
    CurrentClass(String),
    Enum {
        name: String,
        members: Vec<EnumMember>,
    },
    Annotation {
        name: String,
        #[serde(default)]
        params: String,
        #[serde(default)]
        member: Option<String>,
    },
    DeclareProperty(PropertyDecl),
    DefineMethod(MethodDef),
    DefineSignal {
        name: String,
        #[serde(default)]
        params: Vec<Param>,
    },
    EndClass(String),
    /// Layout and comments between declarations.
    Stmt(Stmt),
}

/// The full event log of one script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub events: Vec<Event>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Transpiler {
    /// Dispatch one event to its entry point.
    pub fn apply(&mut self, event: &Event) -> TranspileResult {
        match event {
            Event::DefineClass { class, data } => self.define_class(class, data.clone()),
            Event::CurrentClass(name) => self.set_current_class(name),
            Event::Enum { name, members } => self.enum_decl(name, members),
            Event::Annotation { name, params, member } => self.annotation(name, params, member.as_deref()),
            Event::DeclareProperty(prop) => self.declare_property(prop),
            Event::DefineMethod(method) => self.define_method(method),
            Event::DefineSignal { name, params } => self.define_signal(name, params),
            Event::EndClass(name) => self.end_class(name),
            Event::Stmt(stmt) => self.statement(stmt),
        }
    }
}

/// Replay a script's events and render the generated files.
#[tracing::instrument(skip_all, fields(script = %config.script_name, events = script.events.len()))]
pub fn transpile_script(config: TranspilerConfig, script: &Script) -> TranspileResult<GeneratedFiles> {
    let mut transpiler = Transpiler::new(config);
    for event in &script.events {
        transpiler.apply(event)?;
    }
    transpiler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::errors::TranspileError;

    #[test]
    fn test_event_json_shape() {
        let json = r#"{"events": [
            {"define_class": {"class": {"name": "Player", "base": "Node"}}},
            {"annotation": {"name": "export", "member": "hp"}},
            {"stmt": "newline"},
            {"end_class": "Player"}
        ]}"#;
        let script = Script::from_json(json).unwrap();
        assert_eq!(script.events.len(), 4);
        assert_eq!(
            script.events[1],
            Event::Annotation { name: "export".to_string(), params: String::new(), member: Some("hp".to_string()) }
        );
        assert_eq!(script.events[2], Event::Stmt(Stmt::Newline));
    }

    #[test]
    fn test_replay_reports_errors() {
        let script = Script { events: vec![Event::CurrentClass("Ghost".to_string())] };
        assert_eq!(
            transpile_script(TranspilerConfig::default(), &script),
            Err(TranspileError::UnknownClass("Ghost".to_string()))
        );
    }

    #[test]
    fn test_replay_matches_direct_calls() {
        let decl = ClassDecl::new("Player", "Node");
        let method = MethodDef::new("jump");
        let script = Script {
            events: vec![
                Event::DefineClass { class: decl.clone(), data: ClassData::new() },
                Event::DefineMethod(method.clone()),
            ],
        };
        let replayed = transpile_script(TranspilerConfig::new("player"), &script).unwrap();

        let mut direct = Transpiler::new(TranspilerConfig::new("player"));
        direct.define_class(&decl, ClassData::new()).unwrap();
        direct.define_method(&method).unwrap();
        assert_eq!(replayed, direct.finish().unwrap());
    }
}
