//! Resolver-provided class metadata.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::enum_type_name;

/// What the upstream resolver knows about a class.
///
/// Read-only for the engine except for [`ClassData::register_method`]: every method the engine defines, synthesized
/// accessors included, is recorded so later lookups see it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassData {
    /// Member name → declared type.
    #[serde(default)]
    pub members: IndexMap<String, String>,
    /// Method name → return type (`None` for `void`).
    #[serde(default)]
    pub methods: IndexMap<String, Option<String>>,
    /// Enum constant → enum type (`Stateenum`).
    #[serde(default)]
    pub enums: IndexMap<String, String>,
}

impl ClassData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.members.insert(name.into(), ty.into());
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, return_type: Option<&str>) -> Self {
        self.methods.insert(name.into(), return_type.map(str::to_string));
        self
    }

    pub fn with_enum_constant(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.enums.insert(name.into(), ty.into());
        self
    }

    pub fn member_type(&self, name: &str) -> Option<&str> {
        self.members.get(name).map(String::as_str)
    }

    pub fn register_method(&mut self, name: &str, return_type: Option<String>) {
        self.methods.insert(name.to_string(), return_type);
    }

    /// Distinct native enum type names, sorted (`Stateenum` → `State`).
    pub fn enum_types(&self) -> BTreeSet<String> {
        self.enums.values().map(|ty| enum_type_name(ty).unwrap_or_else(|| ty.clone())).collect()
    }
}
