//! Statement and expression trees handed to the emission engine.
//!
//! The upstream parser has already resolved names and types; these nodes only carry what the engine needs to choose a
//! C++ spelling. Method, lambda and match-case bodies are owned statement lists so the engine can capture them as
//! blocks and place them after the fact.

use serde::{Deserialize, Serialize};

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Null,
}

/// A member read or write target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberAccess {
    pub name: String,
    /// Declared type of the object the member is looked up on.
    #[serde(default)]
    pub owner_type: Option<String>,
    /// Declared type of the member itself, when the resolver knows it.
    #[serde(default)]
    pub member_type: Option<String>,
    /// The owner is an engine singleton (`Input`, `Engine`, ...).
    #[serde(default)]
    pub is_singleton: bool,
}

impl MemberAccess {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn on(mut self, owner_type: impl Into<String>) -> Self {
        self.owner_type = Some(owner_type.into());
        self
    }

    pub fn typed(mut self, member_type: impl Into<String>) -> Self {
        self.member_type = Some(member_type.into());
        self
    }

    pub fn singleton(mut self) -> Self {
        self.is_singleton = true;
        self
    }
}

/// An assignment to a member, possibly through a compound operator (`+=`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reassignment {
    /// Expression that evaluates to the owner object; also qualifies the getter of a routed compound write.
    #[serde(default)]
    pub owner: Option<Box<Expr>>,
    pub target: MemberAccess,
    pub op: String,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Literal(Literal),
    /// A named constant, emitted with global scope qualification (`::NAME`).
    Constant(String),
    /// A member of the current class, emitted verbatim.
    Property(String),
    /// A local or global identifier.
    Variable(String),
    Singleton(String),
    /// Member read through an owner.
    Reference(MemberAccess),
    Reassignment(Reassignment),
    Call {
        name: String,
        #[serde(default)]
        args: Vec<Expr>,
        /// Global script function (looked up in the builtin replacement table).
        #[serde(default)]
        global: bool,
    },
    Constructor {
        name: String,
        ty: String,
        #[serde(default)]
        args: Vec<Expr>,
    },
    /// `[key]` applied to the preceding fragment.
    Subscription(Box<Expr>),
    Operator(String),
    Ternary {
        condition: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Subexpression(Box<Expr>),
    Array(Vec<Expr>),
    Dict(Vec<(Expr, Expr)>),
    Lambda {
        #[serde(default)]
        params: Vec<Param>,
        #[serde(default)]
        body: Vec<Stmt>,
    },
    EmitSignal {
        name: String,
        #[serde(default)]
        args: Vec<Expr>,
    },
    ConnectSignal {
        name: String,
        callable: Box<Expr>,
    },
    /// Fragments rendered back to back (`a`, ` + `, `b`).
    Chain(Vec<Expr>),
}

impl Expr {
    pub fn int(value: i64) -> Self {
        Expr::Literal(Literal::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Expr::Literal(Literal::Float(value))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::Str(value.into()))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn prop(name: impl Into<String>) -> Self {
        Expr::Property(name.into())
    }

    pub fn op(op: impl Into<String>) -> Self {
        Expr::Operator(op.into())
    }

    /// Call of a global script function.
    pub fn global_call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call { name: name.into(), args, global: true }
    }

    /// Call of a method or user function.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call { name: name.into(), args, global: false }
    }

    /// `lhs <op> rhs` as a fragment chain.
    pub fn binary(lhs: Expr, op: impl Into<String>, rhs: Expr) -> Self {
        Expr::Chain(vec![lhs, Expr::Operator(op.into()), rhs])
    }
}

/// A function, lambda or signal parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default)]
    pub ty: Option<String>,
    #[serde(default)]
    pub default: Option<Expr>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { name: name.into(), ty: Some(ty.into()), default: None }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self { name: name.into(), ty: None, default: None }
    }

    pub fn with_default(mut self, default: Expr) -> Self {
        self.default = Some(default);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Wildcard,
    Value(Expr),
}

/// One arm of a `match`, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCase {
    pub pattern: Pattern,
    #[serde(default)]
    pub guard: Option<Expr>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

/// A statement-level event.
///
/// Layout events (`Newline`, `UpScope`, `DownScope`, `EndStatement`) are sent by the parser alongside the statements
/// themselves, the same way it sees them in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    Newline,
    UpScope,
    DownScope,
    EndStatement,
    Comment(String),
    MultilineComment(String),
    /// Raw C++ text.
    Code(String),
    Expr(Expr),
    DeclareVariable {
        name: String,
        #[serde(default)]
        ty: Option<String>,
        #[serde(default)]
        value: Option<Expr>,
    },
    Return(Option<Expr>),
    If(Expr),
    Elif(Expr),
    Else,
    While(Expr),
    For {
        name: String,
        #[serde(default)]
        ty: Option<String>,
        iterable: Expr,
    },
    Break,
    Continue,
    Pass,
    Await {
        object: String,
        signal: String,
    },
    Match {
        scrutinee: Expr,
        #[serde(default)]
        scrutinee_type: Option<String>,
        cases: Vec<MatchCase>,
    },
}

impl Stmt {
    /// A statement on its own line: newline, the statement, and its terminator.
    pub fn line(stmt: Stmt) -> [Stmt; 3] {
        [Stmt::Newline, stmt, Stmt::EndStatement]
    }
}

/// How a property exposes itself to the binding table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorSpec {
    /// `get = method_name`
    GetterMethod(String),
    /// `set = method_name`
    SetterMethod(String),
    /// `get: <body>`
    Getter { body: Vec<Stmt> },
    /// `set(value_name): <body>`
    Setter { value_name: String, body: Vec<Stmt> },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(default)]
    pub ty: Option<String>,
    #[serde(default)]
    pub value: Option<Expr>,
    #[serde(default)]
    pub accessors: Vec<AccessorSpec>,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_onready: bool,
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { name: name.into(), ty: Some(ty.into()), ..Self::default() }
    }

    pub fn with_value(mut self, value: Expr) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_accessor(mut self, accessor: AccessorSpec) -> Self {
        self.accessors.push(accessor);
        self
    }

    pub fn onready(mut self) -> Self {
        self.is_onready = true;
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_override: bool,
}

impl MethodDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn body(mut self, body: impl IntoIterator<Item = Stmt>) -> Self {
        self.body = body.into_iter().collect();
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub base: String,
    #[serde(default)]
    pub is_tool: bool,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self { name: name.into(), base: base.into(), is_tool: false }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    #[serde(default)]
    pub value: Option<Expr>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), value: None }
    }

    pub fn with_value(mut self, value: Expr) -> Self {
        self.value = Some(value);
        self
    }
}
