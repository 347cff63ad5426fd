//! `_bind_methods` synthesis.
//!
//! The binding table lists, in order: method bindings, enum constants, a blank line, property and group
//! registrations in annotation order, then signals. Property registrations run first internally because they may
//! synthesize accessors that must appear among the method bindings.

use gdcpp_core::conventions::{BIND_METHODS, getter_name, is_private_method, is_signal_type, setter_name};
use gdcpp_core::hints::{group_kind, is_export_annotation, property_hint};
use gdcpp_core::variant::variant_type_enum;

use super::{TranspileResult, Transpiler};
use crate::backend::model::{MethodDef, Param, Stmt};

/// Reflection type of a signal parameter; untyped parameters are `Variant::NIL`.
fn param_type_enum(param: &Param) -> String {
    match param.ty.as_deref() {
        Some(ty) => variant_type_enum(ty),
        None => "Variant::NIL".to_string(),
    }
}

impl Transpiler {
    pub(super) fn synthesize_bindings(&mut self, class_name: &str) -> TranspileResult {
        tracing::debug!(class = class_name, "synthesizing bindings");
        let registrations = self.property_registrations(class_name)?;

        let class = self.class(class_name)?;
        let mut lines = Vec::new();
        for (method, args) in class.method_args() {
            if is_private_method(method) {
                continue;
            }
            let args: String = args.iter().map(|arg| format!(", \"{arg}\"")).collect();
            lines.push(format!("ClassDB::bind_method(D_METHOD(\"{method}\"{args}), &{class_name}::{method});"));
        }
        for constant in class.data.enums.keys() {
            lines.push(format!(
                "ClassDB::bind_integer_constant(get_class_static(), _gde_constant_get_enum_name({constant}, \"{constant}\"), \"{constant}\", {constant});"
            ));
        }
        lines.push(String::new());
        lines.extend(registrations);
        for (signal, params) in class.signals() {
            let infos: String = params
                .iter()
                .map(|param| format!(", PropertyInfo({}, \"{}\")", param_type_enum(param), param.name))
                .collect();
            lines.push(format!("ClassDB::add_signal(get_class_static(), MethodInfo(\"{signal}\"{infos}));"));
        }

        let body = lines.into_iter().flat_map(|line| [Stmt::Newline, Stmt::Code(line)]);
        self.class_mut(class_name)?.public().write("\n");
        self.emit_inline("\n");
        self.define_method(&MethodDef::new(BIND_METHODS).static_().body(body))
    }

    /// `ClassDB::add_property*` lines, synthesizing missing accessors of exported members.
    fn property_registrations(&mut self, class_name: &str) -> TranspileResult<Vec<String>> {
        let annotations = self.class(class_name)?.annotations().to_vec();
        let mut lines = Vec::with_capacity(annotations.len());
        for annotation in annotations {
            let Some(member) = annotation.member.as_deref() else {
                match group_kind(&annotation.name) {
                    Some(kind) => lines.push(format!(
                        "ClassDB::add_property_{kind}(get_class_static(), \"{}\", \"\");",
                        annotation.params
                    )),
                    None => tracing::warn!(annotation = %annotation.name, "ignoring member-less annotation"),
                }
                continue;
            };
            if !is_export_annotation(&annotation.name) {
                tracing::warn!(annotation = %annotation.name, member, "ignoring non-export annotation");
                continue;
            }
            let ty = self.member_type(class_name, member)?;
            if is_signal_type(&ty) {
                continue;
            }

            let mut line = format!("ClassDB::add_property(get_class_static(), PropertyInfo({}, \"{member}\"", variant_type_enum(&ty));
            if let Some(hint) = property_hint(&annotation.name) {
                line.push_str(&format!(", {hint}, \"{}\"", annotation.params));
            }
            let class = self.class(class_name)?;
            let getter = class.getter(member).map(str::to_string);
            let setter = class.setter(member).map(str::to_string);
            line.push_str(&format!(
                "), \"{}\", \"{}\");",
                setter.clone().unwrap_or_else(|| setter_name(member)),
                getter.clone().unwrap_or_else(|| getter_name(member)),
            ));
            lines.push(line);

            if setter.is_none() {
                self.add_default_setter(member, Some(ty.clone()))?;
            }
            if getter.is_none() {
                self.add_default_getter(member, Some(ty))?;
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::with_class;
    use super::*;
    use crate::backend::class_data::ClassData;
    use crate::backend::errors::TranspileError;
    use crate::backend::model::{AccessorSpec, PropertyDecl};

    fn bind_body(t: &Transpiler) -> &str {
        let source = t.source_so_far();
        let start = source.find("void Player::_bind_methods()").expect("no _bind_methods");
        &source[start..]
    }

    #[test]
    fn test_exported_property_gets_accessors_and_registration() {
        let mut t = with_class(ClassData::new().with_member("speed", "float"));
        t.declare_property(&PropertyDecl::new("speed", "float")).unwrap();
        t.annotation("export_range", "0,10", Some("speed")).unwrap();
        t.end_class("Player").unwrap();

        let source = t.source_so_far();
        assert!(source.contains("void Player::set_speed(double value)\n{\n\tspeed = value;\n}"));
        assert!(source.contains("double Player::get_speed()\n{\n\treturn speed;\n}"));
        assert_eq!(
            bind_body(&t),
            "void Player::_bind_methods()\n{\
             \n\tClassDB::bind_method(D_METHOD(\"set_speed\", \"value\"), &Player::set_speed);\
             \n\tClassDB::bind_method(D_METHOD(\"get_speed\"), &Player::get_speed);\
             \n\t\
             \n\tClassDB::add_property(get_class_static(), PropertyInfo(Variant::FLOAT, \"speed\", PROPERTY_HINT_RANGE, \"0,10\"), \"set_speed\", \"get_speed\");\
             \n}"
        );
        assert!(t.header.as_str().contains("\tstatic void _bind_methods();\n"));
    }

    #[test]
    fn test_plain_export_has_no_hint() {
        let mut t = with_class(ClassData::new().with_member("hp", "int"));
        t.annotation("export", "", Some("hp")).unwrap();
        t.end_class("Player").unwrap();
        assert!(bind_body(&t).contains("PropertyInfo(Variant::INT, \"hp\"), \"set_hp\", \"get_hp\");"));
    }

    #[test]
    fn test_custom_accessors_are_reused() {
        let mut t = with_class(ClassData::new().with_member("hp", "int"));
        let prop = PropertyDecl::new("hp", "int")
            .with_accessor(AccessorSpec::GetterMethod("read_hp".to_string()))
            .with_accessor(AccessorSpec::SetterMethod("write_hp".to_string()));
        t.declare_property(&prop).unwrap();
        t.annotation("export", "", Some("hp")).unwrap();
        t.end_class("Player").unwrap();

        let body = bind_body(&t);
        assert!(body.contains("\"write_hp\", \"read_hp\");"));
        assert!(!t.source_so_far().contains("Player::get_hp"));
        assert!(!t.source_so_far().contains("Player::set_hp"));
    }

    #[test]
    fn test_methods_enums_groups_and_signals_in_order() {
        let data = ClassData::new().with_member("hp", "int").with_enum_constant("IDLE", "Stateenum");
        let mut t = with_class(data);
        t.define_method(&MethodDef::new("jump").param(Param::new("height", "float"))).unwrap();
        t.define_method(&MethodDef::new("_internal")).unwrap();
        t.define_signal("died", &[Param::new("cause", "String"), Param::untyped("extra")]).unwrap();
        t.annotation("export_group", "Stats", None).unwrap();
        t.annotation("export", "", Some("hp")).unwrap();
        t.end_class("Player").unwrap();

        let body = bind_body(&t);
        let order = [
            "ClassDB::bind_method(D_METHOD(\"jump\", \"height\"), &Player::jump);",
            "ClassDB::bind_method(D_METHOD(\"set_hp\", \"value\"), &Player::set_hp);",
            "ClassDB::bind_method(D_METHOD(\"get_hp\"), &Player::get_hp);",
            "ClassDB::bind_integer_constant(get_class_static(), _gde_constant_get_enum_name(IDLE, \"IDLE\"), \"IDLE\", IDLE);",
            "ClassDB::add_property_group(get_class_static(), \"Stats\", \"\");",
            "ClassDB::add_property(get_class_static(), PropertyInfo(Variant::INT, \"hp\"), \"set_hp\", \"get_hp\");",
            "ClassDB::add_signal(get_class_static(), MethodInfo(\"died\", PropertyInfo(Variant::STRING, \"cause\"), PropertyInfo(Variant::NIL, \"extra\")));",
        ];
        let positions: Vec<usize> = order.iter().map(|line| body.find(line).expect(line)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order: {body}");
        assert!(!body.contains("D_METHOD(\"_internal\")"));
    }

    #[test]
    fn test_signal_members_are_not_properties() {
        let mut t = with_class(ClassData::new().with_member("died", "signal"));
        t.annotation("export", "", Some("died")).unwrap();
        t.end_class("Player").unwrap();
        assert!(!bind_body(&t).contains("add_property"));
    }

    #[test]
    fn test_non_export_annotations_are_ignored() {
        let mut t = with_class(ClassData::new().with_member("hp", "int"));
        t.annotation("warning_ignore", "unused", Some("hp")).unwrap();
        t.annotation("tool", "", None).unwrap();
        t.end_class("Player").unwrap();
        assert!(!bind_body(&t).contains("add_property"));
        assert!(!t.source_so_far().contains("get_hp"));
    }

    #[test]
    fn test_unknown_exported_member_is_an_error() {
        let mut t = with_class(ClassData::new());
        t.annotation("export", "", Some("ghost")).unwrap();
        assert_eq!(
            t.end_class("Player"),
            Err(TranspileError::UnknownMember { class: "Player".to_string(), member: "ghost".to_string() })
        );
    }
}
