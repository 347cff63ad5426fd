//! Class-level events: classes, enums, annotations, properties, methods and signals.

use gdcpp_core::conventions::{READY_METHOD, SETTER_VALUE_NAME, getter_name, setter_name};

use super::{TranspileResult, Transpiler};
use crate::backend::class_data::ClassData;
use crate::backend::class_def::{Annotation, ClassDefinition};
use crate::backend::errors::TranspileError;
use crate::backend::model::{AccessorSpec, ClassDecl, EnumMember, Expr, MethodDef, Param, PropertyDecl, Stmt};

impl Transpiler {
    /// Open a class and make it current.
    #[tracing::instrument(skip_all, fields(class = %decl.name, base = %decl.base, tool = decl.is_tool))]
    pub fn define_class(&mut self, decl: &ClassDecl, data: ClassData) -> TranspileResult {
        self.types.mark_used(&decl.base);
        let class = ClassDefinition::new(&decl.name, &decl.base, data);
        self.classes.insert(decl.name.clone(), class);
        self.current = Some(decl.name.clone());
        Ok(())
    }

    /// Switch the class receiving declarations (after a nested class ends).
    pub fn set_current_class(&mut self, name: &str) -> TranspileResult {
        self.class(name)?;
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Declare an enum in the public section.
    pub fn enum_decl(&mut self, name: &str, members: &[EnumMember]) -> TranspileResult {
        let mut def = Vec::with_capacity(members.len());
        for member in members {
            match &member.value {
                Some(value) => def.push(format!("{} = {}", member.name, self.render_expr(value)?)),
                None => def.push(member.name.clone()),
            }
        }
        let def = def.join(", ");
        self.current_class_mut()?.public().writef(format_args!("\tenum {name} {{{def}}};\n"));
        Ok(())
    }

    /// Record an annotation; it takes effect when the class ends.
    pub fn annotation(&mut self, name: &str, params: &str, member: Option<&str>) -> TranspileResult {
        self.current_class_mut()?.record_annotation(Annotation {
            member: member.map(str::to_string),
            name: name.to_string(),
            params: params.to_string(),
        });
        Ok(())
    }

    /// Declare a member variable in the protected section.
    ///
    /// Deferred initializers wait for `_ready`; static initializers are placed in the source after the class.
    pub fn declare_property(&mut self, prop: &PropertyDecl) -> TranspileResult {
        let class_name = self.current_name()?;
        let ty = self.types.translate_value(prop.ty.as_deref());
        let qualifier = if prop.is_const {
            "const "
        } else if prop.is_static {
            "static "
        } else {
            ""
        };
        let mut decl = format!("\t{qualifier}{ty} {}", prop.name);

        let value = prop.value.as_ref().map(|value| self.render_expr(value)).transpose()?;
        let class = self.class_mut(&class_name)?;
        if let Some(value) = value {
            if prop.is_onready {
                class.push_onready(format!("{} = {value}", prop.name));
            } else if prop.is_static {
                class.push_static(format!("{ty} {class_name}::{} = {value}", prop.name));
            } else {
                decl.push_str(" = ");
                decl.push_str(&value);
            }
        }
        decl.push_str(";\n");
        class.protected().write(&decl);

        if !prop.accessors.is_empty() {
            self.declare_accessors(prop)?;
        }
        Ok(())
    }

    fn declare_accessors(&mut self, prop: &PropertyDecl) -> TranspileResult {
        let member = prop.name.as_str();
        let mut get_defined = false;
        let mut set_defined = false;
        for accessor in &prop.accessors {
            match accessor {
                AccessorSpec::GetterMethod(method) => {
                    get_defined = true;
                    self.current_class_mut()?.set_getter(member, method);
                }
                AccessorSpec::SetterMethod(method) => {
                    set_defined = true;
                    self.current_class_mut()?.set_setter(member, method);
                }
                AccessorSpec::Getter { body } => {
                    get_defined = true;
                    self.define_getter(member, prop.ty.clone(), body)?;
                }
                AccessorSpec::Setter { value_name, body } => {
                    set_defined = true;
                    self.define_setter(member, prop.ty.clone(), value_name, body)?;
                }
            }
        }
        if set_defined && !get_defined {
            self.add_default_getter(member, prop.ty.clone())?;
        }
        if get_defined && !set_defined {
            self.add_default_setter(member, prop.ty.clone())?;
        }
        Ok(())
    }

    fn define_getter(&mut self, member: &str, ty: Option<String>, body: &[Stmt]) -> TranspileResult {
        let name = getter_name(member);
        self.current_class_mut()?.set_getter(member, &name);
        let method = MethodDef { name, return_type: ty, body: body.to_vec(), ..MethodDef::default() };
        self.define_method(&method)
    }

    fn define_setter(&mut self, member: &str, ty: Option<String>, value_name: &str, body: &[Stmt]) -> TranspileResult {
        let name = setter_name(member);
        self.current_class_mut()?.set_setter(member, &name);
        let param = Param { name: value_name.to_string(), ty, default: None };
        let method = MethodDef { name, params: vec![param], body: body.to_vec(), ..MethodDef::default() };
        self.define_method(&method)
    }

    /// `get_<member>()` returning the field.
    pub(super) fn add_default_getter(&mut self, member: &str, ty: Option<String>) -> TranspileResult {
        tracing::debug!(member, "synthesizing getter");
        let body = Stmt::line(Stmt::Return(Some(Expr::prop(member))));
        self.define_getter(member, ty, &body)
    }

    /// `set_<member>(value)` assigning the field.
    pub(super) fn add_default_setter(&mut self, member: &str, ty: Option<String>) -> TranspileResult {
        tracing::debug!(member, "synthesizing setter");
        let value_name = if member == SETTER_VALUE_NAME { "p_value" } else { SETTER_VALUE_NAME };
        let body = Stmt::line(Stmt::Expr(Expr::binary(Expr::prop(member), "=", Expr::prop(value_name))));
        self.define_setter(member, ty, value_name, &body)
    }

    /// Define a method: declaration in the public section, out-of-line body in the source.
    #[tracing::instrument(skip_all, fields(method = %method.name))]
    pub fn define_method(&mut self, method: &MethodDef) -> TranspileResult {
        let class_name = self.current_name()?;
        {
            let class = self.class_mut(&class_name)?;
            class.record_method(&method.name, method.params.iter().map(|p| p.name.clone()).collect());
            class.data.register_method(&method.name, method.return_type.clone());
        }

        let ret = self.types.translate(method.return_type.as_deref());
        let declared = self.param_list(&method.params, true)?;
        let defined = self.param_list(&method.params, false)?;

        let prologue = if method.name == READY_METHOD {
            self.class_mut(&class_name)?.take_onready()
        } else {
            Vec::new()
        };
        let block = self.capture_block(prologue, &method.body, Vec::new())?;

        let static_str = if method.is_static { "static " } else { "" };
        let override_str = if method.is_override { " override" } else { "" };
        self.class_mut(&class_name)?
            .public()
            .writef(format_args!("\t{static_str}{ret} {}({declared}){override_str};\n", method.name));
        self.emit_inline(&format!("{ret} {class_name}::{}({defined})", method.name));
        self.place_block(&block);
        Ok(())
    }

    /// `T a, U b = 1`
    pub(super) fn param_list(&mut self, params: &[Param], with_defaults: bool) -> TranspileResult<String> {
        let mut out = Vec::with_capacity(params.len());
        for param in params {
            let mut text = format!("{} {}", self.types.translate_value(param.ty.as_deref()), param.name);
            if let (true, Some(default)) = (with_defaults, &param.default) {
                text.push_str(" = ");
                text.push_str(&self.render_expr(default)?);
            }
            out.push(text);
        }
        Ok(out.join(", "))
    }

    /// Record a signal and leave a marker comment in the header.
    pub fn define_signal(&mut self, name: &str, params: &[Param]) -> TranspileResult {
        let rendered = self.param_list(params, false)?;
        let class = self.current_class_mut()?;
        class.record_signal(name, params.to_vec());
        class.header_mut().writef(format_args!("\t/* signal {name}({rendered}) */\n"));
        Ok(())
    }

    /// Close a class: `_ready` for leftover deferred initializers, `_bind_methods`, header and static placement.
    #[tracing::instrument(skip_all, fields(class = %name))]
    pub fn end_class(&mut self, name: &str) -> TranspileResult {
        if self.class(name)?.is_finished() {
            tracing::debug!("class already closed");
            return Ok(());
        }
        self.current = Some(name.to_string());

        if self.class(name)?.has_onready() {
            self.define_method(&MethodDef::new(READY_METHOD).override_())?;
        }
        if self.class(name)?.needs_bindings() {
            self.synthesize_bindings(name)?;
        }

        let class = self.class_mut(name)?;
        let statics = class.take_statics();
        let enum_types = class.data.enum_types();
        let header = class.finish();

        self.header.write(&header);
        self.header.write("};\n\n");
        for stmt in statics {
            self.layers.root_mut().writef(format_args!("\n{stmt};\n"));
        }
        for ty in enum_types {
            self.header.writef(format_args!("VARIANT_ENUM_CAST({name}::{ty})\n"));
        }
        Ok(())
    }

    /// Member type recorded by the resolver.
    pub(super) fn member_type(&self, class: &str, member: &str) -> TranspileResult<String> {
        self.class(class)?.data.member_type(member).map(str::to_string).ok_or_else(|| {
            TranspileError::UnknownMember { class: class.to_string(), member: member.to_string() }
        })
    }
}
