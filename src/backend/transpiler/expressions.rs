//! Expression translation.

use gdcpp_core::builtins::{function_replacement, variable_replacement};
use gdcpp_core::conventions::{getter_name, is_signal_type, setter_name};
use gdcpp_core::variant::is_owning_handle;

use super::{TranspileResult, Transpiler};
use crate::backend::errors::TranspileError;
use crate::backend::lowering::quote_string;
use crate::backend::model::{Expr, Literal, MemberAccess, Param, Reassignment, Stmt};

/// Operator joining an owner to one of its members; empty for a bare name.
pub(crate) fn access_operator(access: &MemberAccess) -> &'static str {
    if access.is_singleton {
        "::get_singleton()->"
    } else if access.owner_type.is_none() {
        ""
    } else if is_owning_handle(access.owner_type.as_deref()) {
        "->"
    } else {
        "."
    }
}

/// Whether a member is read and written through its generated accessors rather than directly.
///
/// Only members with a known, non-signal type on an owning-handle owner are routed; reads and writes use the same rule.
pub(crate) fn routes_through_accessors(access: &MemberAccess) -> bool {
    !access.name.is_empty()
        && access.member_type.as_deref().is_some_and(|ty| !ty.is_empty() && !is_signal_type(ty))
        && is_owning_handle(access.owner_type.as_deref())
}

/// Native spelling of a script operator.
fn native_operator(op: &str) -> &str {
    match op {
        "and" => "&&",
        "or" => "||",
        "not" => "!",
        other => other,
    }
}

fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "Math_NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Math_INF" } else { "-Math_INF" }.to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl Transpiler {
    /// Emit an expression into the current layer.
    pub fn expression(&mut self, expr: &Expr) -> TranspileResult {
        match expr {
            Expr::Literal(literal) => self.literal(literal),
            Expr::Constant(name) => self.emit_inline(&format!("::{name}")),
            Expr::Property(name) | Expr::Singleton(name) => self.emit_inline(name),
            Expr::Variable(name) => self.emit_inline(variable_replacement(name).unwrap_or(name.as_str())),
            Expr::Reference(access) => self.reference(access),
            Expr::Reassignment(reassignment) => return self.reassignment(reassignment),
            Expr::Call { name, args, global } => return self.call(name, args, *global),
            Expr::Constructor { name, ty, args } => {
                if is_owning_handle(Some(ty)) {
                    self.emit_inline("new ");
                }
                return self.call(name, args, false);
            }
            Expr::Subscription(key) => {
                self.emit_inline("[");
                self.expression(key)?;
                self.emit_inline("]");
            }
            Expr::Operator(op) => match native_operator(op) {
                "!" => self.emit_inline("!"),
                op => self.emit_inline(&format!(" {op} ")),
            },
            Expr::Ternary { condition, then, otherwise } => {
                self.emit_inline("( ");
                self.expression(condition)?;
                self.emit_inline(" ? ");
                self.expression(then)?;
                self.emit_inline(" : ");
                self.expression(otherwise)?;
                self.emit_inline(" )");
            }
            Expr::Subexpression(inner) => {
                self.emit_inline("(");
                self.expression(inner)?;
                self.emit_inline(")");
            }
            Expr::Array(items) => {
                self.emit_inline("/* no array initializer in c++ ! */ {");
                self.comma_separated(items)?;
                self.emit_inline("}");
            }
            Expr::Dict(entries) => {
                self.emit_inline("/* no dictionary initializer in c++ ! */ {");
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        self.emit_inline(", ");
                    }
                    self.emit_inline("{");
                    self.expression(key)?;
                    self.emit_inline(", ");
                    self.expression(value)?;
                    self.emit_inline("}");
                }
                self.emit_inline("}");
            }
            Expr::Lambda { params, body } => return self.lambda(params, body),
            Expr::EmitSignal { name, args } => {
                self.emit_inline(&format!("emit_signal(\"{name}\""));
                for arg in args {
                    self.emit_inline(", ");
                    self.expression(arg)?;
                }
                self.emit_inline(")");
            }
            Expr::ConnectSignal { name, callable } => {
                self.emit_inline(&format!("connect(\"{name}\", "));
                self.expression(callable)?;
                self.emit_inline(")");
            }
            Expr::Chain(parts) => return self.chain(parts),
        }
        Ok(())
    }

    fn literal(&mut self, literal: &Literal) {
        let text = match literal {
            Literal::Str(value) => quote_string(value),
            Literal::Bool(value) => value.to_string(),
            Literal::Int(value) => value.to_string(),
            Literal::Float(value) => render_float(*value),
            Literal::Null => "nullptr".to_string(),
        };
        self.emit_inline(&text);
    }

    fn comma_separated(&mut self, items: &[Expr]) -> TranspileResult {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.emit_inline(", ");
            }
            self.expression(item)?;
        }
        Ok(())
    }

    /// Member read; the owner expression has already been emitted.
    fn reference(&mut self, access: &MemberAccess) {
        self.emit_inline(access_operator(access));
        if routes_through_accessors(access) {
            self.emit_inline(&format!("{}()", getter_name(&access.name)));
        } else {
            self.emit_inline(&access.name);
        }
    }

    /// Fragments in order. An ownerless write inside a chain takes the fragments before it as its owner.
    fn chain(&mut self, parts: &[Expr]) -> TranspileResult {
        let split = parts.iter().enumerate().skip(1).find_map(|(at, part)| match part {
            Expr::Reassignment(write) if write.owner.is_none() => Some((at, write)),
            _ => None,
        });
        let Some((at, write)) = split else {
            return parts.iter().try_for_each(|part| self.expression(part));
        };
        let owner = match &parts[..at] {
            [single] => single.clone(),
            prefix => Expr::Chain(prefix.to_vec()),
        };
        self.reassignment(&Reassignment { owner: Some(Box::new(owner)), ..write.clone() })?;
        parts[at + 1..].iter().try_for_each(|part| self.expression(part))
    }

    /// Member write.
    ///
    /// With an `owner` the whole target is emitted here and the owner text also qualifies the getter of a routed
    /// compound write. Without one the owner has already been emitted and only the access operator is written; a
    /// routed compound write then has no way to qualify its getter and fails.
    fn reassignment(&mut self, reassignment: &Reassignment) -> TranspileResult {
        let Reassignment { owner, target, op, value } = reassignment;
        let qualifier = match owner {
            Some(owner) => format!("{}{}", self.render_expr(owner)?, access_operator(target)),
            None => String::new(),
        };
        if owner.is_some() {
            self.emit_inline(&qualifier);
        } else {
            self.emit_inline(access_operator(target));
        }

        if !routes_through_accessors(target) {
            self.emit_inline(&format!("{} {op} ", target.name));
            return self.expression(value);
        }

        if owner.is_none() && op != "=" {
            return Err(TranspileError::MissingOwner { member: target.name.clone() });
        }
        self.emit_inline(&format!("{}(", setter_name(&target.name)));
        if op == "=" {
            self.expression(value)?;
        } else {
            let binop = op.trim_end_matches('=');
            self.emit_inline(&format!("{qualifier}{}() {binop} ", getter_name(&target.name)));
            self.expression(value)?;
            self.emit_inline(&format!(" /* {op} */"));
        }
        self.emit_inline(")");
        Ok(())
    }

    fn call(&mut self, name: &str, args: &[Expr], global: bool) -> TranspileResult {
        let name = if global { function_replacement(name).unwrap_or(name) } else { name };
        self.emit_inline(&format!("{name}("));
        self.comma_separated(args)?;
        self.emit_inline(")");
        Ok(())
    }

    fn lambda(&mut self, params: &[Param], body: &[Stmt]) -> TranspileResult {
        let params = self.param_list(params, false)?;
        self.emit_inline(&format!("[]({params})"));
        let block = self.capture_block(Vec::new(), body, Vec::new())?;
        self.place_block(&block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::transpiler;
    use super::*;

    fn render(expr: Expr) -> String {
        transpiler().render_expr(&expr).unwrap()
    }

    fn owned(name: &str) -> MemberAccess {
        MemberAccess::new(name).on("Sprite2D").typed("Vector2")
    }

    // ========================================
    // Literals
    // ========================================

    #[test]
    fn test_literals() {
        assert_eq!(render(Expr::str("a \"b\"")), "\"a \\\"b\\\"\"");
        assert_eq!(render(Expr::Literal(Literal::Bool(false))), "false");
        assert_eq!(render(Expr::int(-3)), "-3");
        assert_eq!(render(Expr::float(1.0)), "1.0");
        assert_eq!(render(Expr::float(0.25)), "0.25");
        assert_eq!(render(Expr::Literal(Literal::Null)), "nullptr");
    }

    #[test]
    fn test_non_finite_floats_use_math_constants() {
        assert_eq!(render(Expr::float(f64::INFINITY)), "Math_INF");
        assert_eq!(render(Expr::float(f64::NEG_INFINITY)), "-Math_INF");
        assert_eq!(render(Expr::float(f64::NAN)), "Math_NAN");
    }

    // ========================================
    // Names
    // ========================================

    #[test]
    fn test_names() {
        assert_eq!(render(Expr::Constant("MAX_SPEED".to_string())), "::MAX_SPEED");
        assert_eq!(render(Expr::var("self")), "this");
        assert_eq!(render(Expr::var("PI")), "Math_PI");
        assert_eq!(render(Expr::var("speed")), "speed");
        assert_eq!(render(Expr::prop("self")), "self");
        assert_eq!(render(Expr::Singleton("Input".to_string())), "Input");
    }

    // ========================================
    // Member access
    // ========================================

    #[test]
    fn test_reference_operators() {
        assert_eq!(render(Expr::Reference(MemberAccess::new("x").on("Vector2"))), ".x");
        assert_eq!(render(Expr::Reference(MemberAccess::new("x").on("Node2D"))), "->x");
        let singleton = MemberAccess::new("is_action_pressed").singleton();
        assert_eq!(render(Expr::Reference(singleton)), "::get_singleton()->is_action_pressed");
    }

    #[test]
    fn test_bare_member_has_no_operator() {
        assert_eq!(render(Expr::Reference(MemberAccess::new("health").typed("int"))), "health");
        let expr = Expr::Reassignment(Reassignment {
            owner: None,
            target: MemberAccess::new("health").typed("int"),
            op: "-=".to_string(),
            value: Box::new(Expr::var("i")),
        });
        assert_eq!(render(expr), "health -= i");
    }

    #[test]
    fn test_reference_through_getter() {
        assert_eq!(render(Expr::Reference(owned("position"))), "->get_position()");
        let signal = MemberAccess::new("died").on("Node").typed("signal");
        assert_eq!(render(Expr::Reference(signal)), "->died");
        let untyped = MemberAccess::new("position").on("Sprite2D");
        assert_eq!(render(Expr::Reference(untyped)), "->position");
    }

    #[test]
    fn test_direct_reassignment() {
        let expr = Expr::Reassignment(Reassignment {
            owner: None,
            target: MemberAccess::new("x").on("Vector2").typed("float"),
            op: "+=".to_string(),
            value: Box::new(Expr::int(1)),
        });
        assert_eq!(render(expr), ".x += 1");
    }

    #[test]
    fn test_routed_assignment() {
        let expr = Expr::Reassignment(Reassignment {
            owner: None,
            target: owned("position"),
            op: "=".to_string(),
            value: Box::new(Expr::var("target")),
        });
        assert_eq!(render(expr), "->set_position(target)");
    }

    #[test]
    fn test_routed_compound_assignment_with_owner() {
        let expr = Expr::Reassignment(Reassignment {
            owner: Some(Box::new(Expr::prop("sprite"))),
            target: owned("position"),
            op: "+=".to_string(),
            value: Box::new(Expr::var("offset")),
        });
        assert_eq!(render(expr), "sprite->set_position(sprite->get_position() + offset /* += */)");
    }

    #[test]
    fn test_chained_compound_write_qualifies_getter_with_owner() {
        let write = Reassignment {
            owner: None,
            target: owned("position"),
            op: "+=".to_string(),
            value: Box::new(Expr::var("offset")),
        };
        let expr = Expr::Chain(vec![Expr::prop("sprite"), Expr::Reassignment(write)]);
        assert_eq!(render(expr), "sprite->set_position(sprite->get_position() + offset /* += */)");
    }

    #[test]
    fn test_chained_write_with_longer_owner() {
        let write = Reassignment {
            owner: None,
            target: MemberAccess::new("x").on("Vector2").typed("float"),
            op: "*=".to_string(),
            value: Box::new(Expr::int(2)),
        };
        let owner = [Expr::prop("sprite"), Expr::Reference(MemberAccess::new("offset").on("Sprite2D"))];
        let expr = Expr::Chain(owner.into_iter().chain([Expr::Reassignment(write)]).collect());
        assert_eq!(render(expr), "sprite->offset.x *= 2");
    }

    #[test]
    fn test_routed_compound_write_without_owner_fails() {
        let expr = Expr::Reassignment(Reassignment {
            owner: None,
            target: owned("position"),
            op: "+=".to_string(),
            value: Box::new(Expr::var("offset")),
        });
        let mut t = transpiler();
        assert_eq!(
            t.render_expr(&expr),
            Err(TranspileError::MissingOwner { member: "position".to_string() })
        );
    }

    #[test]
    fn test_read_and_write_route_identically() {
        for access in [owned("position"), MemberAccess::new("x").on("Vector2").typed("float")] {
            let read = render(Expr::Chain(vec![Expr::prop("owner"), Expr::Reference(access.clone())]));
            let write = render(Expr::Chain(vec![
                Expr::prop("owner"),
                Expr::Reassignment(Reassignment {
                    owner: None,
                    target: access.clone(),
                    op: "-=".to_string(),
                    value: Box::new(Expr::int(1)),
                }),
            ]));
            assert_eq!(read.contains("get_"), write.contains("set_"));
            let prefix = format!("owner{}", access_operator(&access));
            assert!(read.starts_with(&prefix) && write.starts_with(&prefix));
        }
    }

    // ========================================
    // Calls
    // ========================================

    #[test]
    fn test_calls() {
        assert_eq!(render(Expr::global_call("print", vec![Expr::str("hi")])), "UtilityFunctions::print(\"hi\")");
        assert_eq!(render(Expr::global_call("my_func", vec![])), "my_func()");
        assert_eq!(render(Expr::call("print", vec![Expr::int(1), Expr::int(2)])), "print(1, 2)");
    }

    #[test]
    fn test_constructors() {
        let node = Expr::Constructor { name: "Node2D".to_string(), ty: "Node2D".to_string(), args: vec![] };
        assert_eq!(render(node), "new Node2D()");
        let vector = Expr::Constructor {
            name: "Vector2".to_string(),
            ty: "Vector2".to_string(),
            args: vec![Expr::int(1), Expr::int(2)],
        };
        assert_eq!(render(vector), "Vector2(1, 2)");
    }

    // ========================================
    // Operators and composites
    // ========================================

    #[test]
    fn test_operators() {
        let expr = Expr::Chain(vec![
            Expr::op("not"),
            Expr::var("a"),
            Expr::op("and"),
            Expr::var("b"),
            Expr::op("or"),
            Expr::var("c"),
            Expr::op("=="),
            Expr::int(1),
        ]);
        assert_eq!(render(expr), "!a && b || c == 1");
    }

    #[test]
    fn test_ternary_subexpression_subscription() {
        let ternary = Expr::Ternary {
            condition: Box::new(Expr::var("ok")),
            then: Box::new(Expr::int(1)),
            otherwise: Box::new(Expr::int(2)),
        };
        assert_eq!(render(ternary), "( ok ? 1 : 2 )");
        assert_eq!(render(Expr::Subexpression(Box::new(Expr::binary(Expr::var("a"), "+", Expr::var("b"))))), "(a + b)");
        assert_eq!(render(Expr::Chain(vec![Expr::var("items"), Expr::Subscription(Box::new(Expr::int(0)))])), "items[0]");
    }

    #[test]
    fn test_collection_literals() {
        assert_eq!(
            render(Expr::Array(vec![Expr::int(1), Expr::int(2)])),
            "/* no array initializer in c++ ! */ {1, 2}"
        );
        assert_eq!(
            render(Expr::Dict(vec![(Expr::str("a"), Expr::int(1)), (Expr::str("b"), Expr::int(2))])),
            "/* no dictionary initializer in c++ ! */ {{\"a\", 1}, {\"b\", 2}}"
        );
    }

    #[test]
    fn test_signals() {
        let emit = Expr::EmitSignal { name: "hit".to_string(), args: vec![Expr::int(5)] };
        assert_eq!(render(emit), "emit_signal(\"hit\", 5)");
        let connect = Expr::ConnectSignal { name: "hit".to_string(), callable: Box::new(Expr::var("on_hit")) };
        assert_eq!(render(connect), "connect(\"hit\", on_hit)");
    }

    #[test]
    fn test_lambda() {
        let lambda = Expr::Lambda {
            params: vec![Param::new("x", "int")],
            body: Stmt::line(Stmt::Return(Some(Expr::binary(Expr::var("x"), "*", Expr::int(2))))).to_vec(),
        };
        assert_eq!(render(lambda), "[](int x)\n{\n\treturn x * 2;\n}");
    }
}
