//! Script type → C++ type translation.

use std::collections::BTreeSet;

use gdcpp_core::conventions::{ARRAY_TYPE_SUFFIX, ENUM_TYPE_SUFFIX, VARIANT_TYPE_NAME};
use gdcpp_core::variant::variant_type_constant;

/// Native name of an enum type (`Player.Stateenum` → `Player::State`), or `None` if `ty` is not an enum type.
pub fn enum_type_name(ty: &str) -> Option<String> {
    ty.strip_suffix(ENUM_TYPE_SUFFIX).filter(|name| !name.is_empty()).map(|name| name.replace('.', "::"))
}

/// Translates script types and records every class used through an owning handle.
#[derive(Debug, Default)]
pub struct TypeTranslator {
    use_floats: bool,
    used_types: BTreeSet<String>,
}

impl TypeTranslator {
    pub fn new(use_floats: bool) -> Self {
        Self { use_floats, used_types: BTreeSet::new() }
    }

    /// Translate a declared type; an absent type is `void`.
    pub fn translate(&mut self, ty: Option<&str>) -> String {
        match ty {
            None => "void".to_string(),
            Some(ty) => self.translate_named(ty),
        }
    }

    /// Translate the type of a member or parameter; an absent type is `Variant`.
    pub fn translate_value(&mut self, ty: Option<&str>) -> String {
        match ty {
            None => VARIANT_TYPE_NAME.to_string(),
            Some(ty) => self.translate_named(ty),
        }
    }

    /// Translate the type of a local or loop variable; an absent type is `auto`.
    pub fn translate_local(&mut self, ty: Option<&str>) -> String {
        match ty {
            None => "auto".to_string(),
            Some(ty) => self.translate_named(ty),
        }
    }

    /// Record a class that needs its header included.
    pub fn mark_used(&mut self, ty: &str) {
        self.used_types.insert(ty.to_string());
    }

    /// Classes used through an owning handle or as a base class, sorted.
    pub fn used_types(&self) -> &BTreeSet<String> {
        &self.used_types
    }

    fn translate_named(&mut self, ty: &str) -> String {
        if ty == VARIANT_TYPE_NAME {
            return ty.to_string();
        }
        if ty == "string" {
            return "String".to_string();
        }
        if ty.ends_with(ARRAY_TYPE_SUFFIX) {
            return "Array".to_string();
        }
        if let Some(name) = enum_type_name(ty) {
            return name;
        }
        if ty == "float" {
            return if self.use_floats { "float" } else { "double" }.to_string();
        }
        if variant_type_constant(ty).is_some() {
            return ty.to_string();
        }
        self.mark_used(ty);
        format!("Ref<{ty}>")
    }
}
