//! Statement translation: control flow, loops, `match` lowering and layout events.

use gdcpp_core::conventions::{SELF_NAME, SWITCHABLE_TYPES, THIS_NAME};

use super::{TranspileResult, Transpiler};
use crate::backend::lowering::{RangeLoop, replace_last};
use crate::backend::model::{Expr, MatchCase, Pattern, Stmt};

const SWITCH_CASE_EPILOGUE: &str = "break";

impl Transpiler {
    /// Emit a statement-level event.
    pub fn statement(&mut self, stmt: &Stmt) -> TranspileResult {
        match stmt {
            Stmt::Newline => self.emit_structural("\n"),
            Stmt::UpScope => self.up_scope(),
            Stmt::DownScope => self.down_scope(),
            Stmt::EndStatement => self.end_statement(),
            Stmt::Comment(text) => self.emit_structural(&format!("//{text}")),
            Stmt::MultilineComment(text) => self.emit_structural(&format!("/*{text}*/")),
            Stmt::Code(code) => self.emit_inline(code),
            Stmt::Expr(expr) => return self.expression(expr),
            Stmt::DeclareVariable { name, ty, value } => {
                let ty = self.types.translate_local(ty.as_deref());
                self.emit_inline(&format!("{ty} {name}"));
                if let Some(value) = value {
                    self.emit_inline(" = ");
                    return self.expression(value);
                }
            }
            Stmt::Return(value) => match value {
                Some(value) => {
                    self.emit_inline("return ");
                    return self.expression(value);
                }
                None => self.emit_inline("return"),
            },
            Stmt::If(condition) => return self.condition("if(", condition),
            Stmt::Elif(condition) => return self.condition("else if(", condition),
            Stmt::Else => self.emit_inline("else"),
            Stmt::While(condition) => return self.condition("while(", condition),
            Stmt::For { name, ty, iterable } => return self.for_loop(name, ty.as_deref(), iterable),
            Stmt::Break => self.emit_inline("break"),
            Stmt::Continue => self.emit_inline("continue"),
            Stmt::Pass => {}
            Stmt::Await { object, signal } => self.await_signal(object, signal),
            Stmt::Match { scrutinee, scrutinee_type, cases } => {
                let switchable = scrutinee_type.as_deref().is_some_and(|ty| SWITCHABLE_TYPES.contains(&ty));
                return if switchable {
                    self.match_switch(scrutinee, cases)
                } else {
                    self.match_chain(scrutinee, cases)
                };
            }
        }
        Ok(())
    }

    fn condition(&mut self, keyword: &str, condition: &Expr) -> TranspileResult {
        self.emit_inline(keyword);
        self.expression(condition)?;
        self.emit_inline(")");
        Ok(())
    }

    /// `range(...)` becomes a counted loop; anything else a range-based `for`.
    fn for_loop(&mut self, name: &str, ty: Option<&str>, iterable: &Expr) -> TranspileResult {
        let iterator = self.render_expr(iterable)?;
        let ty = self.types.translate_local(ty);
        let header = match RangeLoop::parse(&iterator) {
            Some(range) => range.render(&ty, name),
            None => format!("for({ty} {name} : {iterator})"),
        };
        self.emit_inline(&header);
        Ok(())
    }

    fn await_signal(&mut self, object: &str, signal: &str) {
        let object = match object.strip_prefix(SELF_NAME) {
            Some("") => THIS_NAME.to_string(),
            Some(rest) => match rest.strip_prefix('.') {
                Some(field) => format!("{THIS_NAME}->{field}"),
                None => object.to_string(),
            },
            None => object.to_string(),
        };
        let signal = replace_last(&replace_last(signal, "get_", ""), "()", "");
        self.emit_inline(&format!("/* await {object}->{signal}; */ // no equivalent to await in c++ !"));
    }

    /// Literal scrutinee: `switch` with one labeled block per case, each closed by `break;`.
    fn match_switch(&mut self, scrutinee: &Expr, cases: &[MatchCase]) -> TranspileResult {
        self.emit_inline("switch(");
        self.expression(scrutinee)?;
        self.emit_inline(")");
        self.up_scope();
        for case in cases {
            match &case.pattern {
                Pattern::Wildcard => self.emit_inline("\ndefault:"),
                Pattern::Value(pattern) => {
                    self.emit_inline("\ncase ");
                    self.expression(pattern)?;
                    self.emit_inline(":");
                }
            }
            let body = match &case.guard {
                Some(guard) => {
                    let mut guarded = vec![Stmt::Newline, Stmt::If(guard.clone()), Stmt::UpScope];
                    guarded.extend(case.body.iter().cloned());
                    guarded.push(Stmt::DownScope);
                    guarded
                }
                None => case.body.clone(),
            };
            let block = self.capture_block(Vec::new(), &body, vec![SWITCH_CASE_EPILOGUE.to_string()])?;
            self.place_block(&block);
        }
        self.down_scope();
        Ok(())
    }

    /// Any other scrutinee: `if / else if / else` chain in case order.
    fn match_chain(&mut self, scrutinee: &Expr, cases: &[MatchCase]) -> TranspileResult {
        let subject = self.render_expr(scrutinee)?;
        for (i, case) in cases.iter().enumerate() {
            let keyword = if i == 0 { "if(" } else { "\nelse if(" };
            match (&case.pattern, &case.guard) {
                (Pattern::Wildcard, None) if i == 0 => self.emit_inline("if(true)"),
                (Pattern::Wildcard, None) => self.emit_inline("\nelse"),
                (Pattern::Wildcard, Some(guard)) => self.condition(keyword, guard)?,
                (Pattern::Value(pattern), guard) => {
                    self.emit_inline(&format!("{keyword}{subject} == "));
                    self.expression(pattern)?;
                    if let Some(guard) = guard {
                        self.emit_inline(" && ");
                        self.expression(guard)?;
                    }
                    self.emit_inline(")");
                }
            }
            let block = self.capture_block(Vec::new(), &case.body, Vec::new())?;
            self.place_block(&block);
        }
        Ok(())
    }
}
