//! The closed AST this engine mutates.
//!
//! The external parser lowers its own tree into these variants; everything the
//! engine does afterwards is a total match over this finite set of construct
//! kinds. Spans are byte ranges into the raw source; nodes synthesized during
//! mutation carry [`Span::DUMMY`].

use strum::{Display, EnumString};

/// A byte range into the original source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub lo: u32,
    pub hi: u32,
}

impl Span {
    pub const DUMMY: Self = Self { lo: 0, hi: 0 };

    pub fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    pub fn is_dummy(self) -> bool {
        self == Self::DUMMY
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "%")]
    Rem,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = "<=")]
    Le,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = ">=")]
    Ge,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Ne,
    #[strum(serialize = "===")]
    StrictEq,
    #[strum(serialize = "!==")]
    StrictNe,
    #[strum(serialize = "&")]
    BitAnd,
    #[strum(serialize = "|")]
    BitOr,
    #[strum(serialize = "^")]
    BitXor,
    #[strum(serialize = "<<")]
    Shl,
    #[strum(serialize = ">>")]
    Shr,
    #[strum(serialize = ">>>")]
    UShr,
    #[strum(serialize = "instanceof")]
    InstanceOf,
    #[strum(serialize = "in")]
    In,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum LogicalOp {
    #[strum(serialize = "&&")]
    And,
    #[strum(serialize = "||")]
    Or,
    #[strum(serialize = "??")]
    Nullish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum AssignOp {
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "+=")]
    AddAssign,
    #[strum(serialize = "-=")]
    SubAssign,
    #[strum(serialize = "*=")]
    MulAssign,
    #[strum(serialize = "/=")]
    DivAssign,
    #[strum(serialize = "%=")]
    RemAssign,
    #[strum(serialize = "<<=")]
    ShlAssign,
    #[strum(serialize = ">>=")]
    ShrAssign,
    #[strum(serialize = ">>>=")]
    UShrAssign,
    #[strum(serialize = "&=")]
    BitAndAssign,
    #[strum(serialize = "|=")]
    BitOrAssign,
    #[strum(serialize = "^=")]
    BitXorAssign,
    #[strum(serialize = "&&=")]
    AndAssign,
    #[strum(serialize = "||=")]
    OrAssign,
    #[strum(serialize = "??=")]
    NullishAssign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum UnaryOp {
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "~")]
    BitNot,
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "typeof")]
    TypeOf,
    #[strum(serialize = "void")]
    Void,
    #[strum(serialize = "delete")]
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum UpdateOp {
    #[strum(serialize = "++")]
    Inc,
    #[strum(serialize = "--")]
    Dec,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Ident(String),
    /// Numeric literal, kept as raw source text.
    Number(String),
    Str(String),
    /// `quasis.len() == exprs.len() + 1`, interleaved as in source.
    Template {
        quasis: Vec<String>,
        exprs: Vec<Expr>,
    },
    Regex {
        pattern: String,
        flags: String,
    },
    Bool(bool),
    Null,
    Array(Vec<Expr>),
    Object(Vec<Property>),
    Arrow {
        params: Vec<String>,
        body: ArrowBody,
    },
    Unary {
        op: UnaryOp,
        arg: Box<Expr>,
    },
    Update {
        op: UpdateOp,
        prefix: bool,
        arg: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assign {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// Ternary `test ? consequent : alternate`.
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Member {
        object: Box<Expr>,
        property: Box<Expr>,
        computed: bool,
        optional: bool,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        optional: bool,
    },
    New {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArrowBody {
    Expr(Box<Expr>),
    Block(Vec<Stmt>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expr,
}

/// Non-computed keys are plain names, not expressions; they are structurally
/// outside the traversal and can never be mutated.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyKey {
    Ident(String),
    Str(String),
    Computed(Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub span: Span,
    pub kind: StmtKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Expr(Expr),
    VarDecl {
        kind: DeclKind,
        decls: Vec<VarDeclarator>,
    },
    Block(Vec<Stmt>),
    If {
        test: Expr,
        consequent: Box<Stmt>,
        alternate: Option<Box<Stmt>>,
    },
    While {
        test: Expr,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        test: Expr,
    },
    For {
        init: Option<Box<Stmt>>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Box<Stmt>,
    },
    Switch {
        discriminant: Expr,
        cases: Vec<SwitchCase>,
    },
    Return(Option<Expr>),
    Break,
    Continue,
    FunctionDecl {
        name: String,
        params: Vec<String>,
        body: Vec<Stmt>,
    },
    ClassDecl {
        name: String,
        members: Vec<ClassMember>,
    },
    /// Opaque import declaration; never traversed.
    Import {
        source: String,
    },
    /// Opaque export declaration; never traversed.
    Export {
        source: String,
    },
    /// Type-only construct; never traversed.
    TypeAlias {
        name: String,
    },
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclKind {
    Var,
    Let,
    Const,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VarDeclarator {
    pub name: String,
    pub init: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchCase {
    pub span: Span,
    /// `None` for the `default:` case.
    pub test: Option<Expr>,
    pub consequent: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassMember {
    pub key: PropertyKey,
    pub kind: ClassMemberKind,
    /// Decorator expressions; present for fidelity, never traversed.
    pub decorators: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClassMemberKind {
    Method { params: Vec<String>, body: Vec<Stmt> },
    Property { value: Option<Expr> },
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Self {
            span: Span::DUMMY,
            kind,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Ident(name.into()))
    }

    pub fn number(raw: impl Into<String>) -> Self {
        Self::new(ExprKind::Number(raw.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ExprKind::Str(value.into()))
    }

    /// A template literal without interpolations.
    pub fn template(raw: impl Into<String>) -> Self {
        Self::new(ExprKind::Template {
            quasis: vec![raw.into()],
            exprs: Vec::new(),
        })
    }

    pub fn regex(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Self::new(ExprKind::Regex {
            pattern: pattern.into(),
            flags: flags.into(),
        })
    }

    pub fn bool_lit(value: bool) -> Self {
        Self::new(ExprKind::Bool(value))
    }

    pub fn array(elements: Vec<Expr>) -> Self {
        Self::new(ExprKind::Array(elements))
    }

    pub fn object(properties: Vec<Property>) -> Self {
        Self::new(ExprKind::Object(properties))
    }

    pub fn unary(op: UnaryOp, arg: Expr) -> Self {
        Self::new(ExprKind::Unary {
            op,
            arg: Box::new(arg),
        })
    }

    pub fn update(op: UpdateOp, prefix: bool, arg: Expr) -> Self {
        Self::new(ExprKind::Update {
            op,
            prefix,
            arg: Box::new(arg),
        })
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::new(ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn logical(op: LogicalOp, left: Expr, right: Expr) -> Self {
        Self::new(ExprKind::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn assign(op: AssignOp, target: Expr, value: Expr) -> Self {
        Self::new(ExprKind::Assign {
            op,
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    pub fn conditional(test: Expr, consequent: Expr, alternate: Expr) -> Self {
        Self::new(ExprKind::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }

    pub fn member(object: Expr, property: Expr, computed: bool, optional: bool) -> Self {
        Self::new(ExprKind::Member {
            object: Box::new(object),
            property: Box::new(property),
            computed,
            optional,
        })
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::Call {
            callee: Box::new(callee),
            args,
            optional: false,
        })
    }

    pub fn optional_call(callee: Expr, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::Call {
            callee: Box::new(callee),
            args,
            optional: true,
        })
    }

    pub fn new_expr(callee: Expr, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::New {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn arrow(params: Vec<String>, body: ArrowBody) -> Self {
        Self::new(ExprKind::Arrow { params, body })
    }

    /// True for string and template literals; the "textual operand" guard of
    /// the arithmetic and assignment families.
    pub fn is_textual(&self) -> bool {
        matches!(self.kind, ExprKind::Str(_) | ExprKind::Template { .. })
    }

    pub fn is_undefined_ident(&self) -> bool {
        matches!(&self.kind, ExprKind::Ident(name) if name == "undefined")
    }
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Self {
            span: Span::DUMMY,
            kind,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn expr(expr: Expr) -> Self {
        Self::new(StmtKind::Expr(expr))
    }

    pub fn block(body: Vec<Stmt>) -> Self {
        Self::new(StmtKind::Block(body))
    }

    pub fn if_stmt(test: Expr, consequent: Stmt, alternate: Option<Stmt>) -> Self {
        Self::new(StmtKind::If {
            test,
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        })
    }

    pub fn while_stmt(test: Expr, body: Stmt) -> Self {
        Self::new(StmtKind::While {
            test,
            body: Box::new(body),
        })
    }

    pub fn var_decl(kind: DeclKind, decls: Vec<VarDeclarator>) -> Self {
        Self::new(StmtKind::VarDecl { kind, decls })
    }

    pub fn ret(arg: Option<Expr>) -> Self {
        Self::new(StmtKind::Return(arg))
    }
}

/// An AST fragment of any of the three mutable node shapes. Mutators yield
/// these as candidates and placers weave them back in as branches.
#[derive(Clone, Debug, PartialEq)]
pub enum Replacement {
    Expr(Expr),
    Stmt(Stmt),
    Case(SwitchCase),
}

/// Shared view of a traversed node, handed to mutators and placers.
#[derive(Clone, Copy, Debug)]
pub enum Target<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    Case(&'a SwitchCase),
}

impl Target<'_> {
    pub fn span(&self) -> Span {
        match self {
            Self::Expr(e) => e.span,
            Self::Stmt(s) => s.span,
            Self::Case(c) => c.span,
        }
    }

    pub fn to_replacement(&self) -> Replacement {
        match self {
            Self::Expr(e) => Replacement::Expr((*e).clone()),
            Self::Stmt(s) => Replacement::Stmt((*s).clone()),
            Self::Case(c) => Replacement::Case((*c).clone()),
        }
    }
}

/// Mutable view of a traversed node; what placers rewrite in place.
#[derive(Debug)]
pub enum NodeMut<'a> {
    Expr(&'a mut Expr),
    Stmt(&'a mut Stmt),
    Case(&'a mut SwitchCase),
}

impl NodeMut<'_> {
    pub fn reborrow(&mut self) -> NodeMut<'_> {
        match self {
            Self::Expr(e) => NodeMut::Expr(e),
            Self::Stmt(s) => NodeMut::Stmt(s),
            Self::Case(c) => NodeMut::Case(c),
        }
    }

    pub fn target(&self) -> Target<'_> {
        match self {
            Self::Expr(e) => Target::Expr(e),
            Self::Stmt(s) => Target::Stmt(s),
            Self::Case(c) => Target::Case(c),
        }
    }

    pub fn span(&self) -> Span {
        self.target().span()
    }
}

/// What a known callee identifier tells us about the surrounding call; used by
/// the string-literal exclusions and the regex-constructor detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalleeHint {
    Require,
    Symbol,
    RegExpCtor,
    ArrayCtor,
    Other,
}

impl CalleeHint {
    pub fn of(callee: &Expr) -> Self {
        match &callee.kind {
            ExprKind::Ident(name) => match name.as_str() {
                "require" => Self::Require,
                "Symbol" => Self::Symbol,
                "RegExp" => Self::RegExpCtor,
                "Array" => Self::ArrayCtor,
                _ => Self::Other,
            },
            _ => Self::Other,
        }
    }
}

/// The syntactic position of a node relative to its parent. Computed by the
/// walker and consumed by parent-context guards in mutators and placers; an
/// owned enum instead of a parent pointer so the walk never aliases the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ParentContext {
    /// Top-level statement of the program.
    Root,
    /// Statement inside a block, function body or class method body.
    Block,
    /// Statement inside a switch-case consequent.
    CaseBody,
    /// Statement body of an `if`/`else`/loop.
    NestedStmt,
    IfTest,
    WhileTest,
    DoWhileTest,
    ForTest,
    ForInit,
    ForUpdate,
    SwitchDiscriminant,
    CaseOfSwitch,
    CaseTest,
    LogicalOperand(LogicalOp),
    BinaryOperand,
    UnaryArg,
    UpdateArg,
    AssignTarget,
    AssignValue,
    ConditionalTest,
    ConditionalBranch,
    Callee {
        optional: bool,
    },
    Argument {
        callee: CalleeHint,
        index: usize,
        /// Flags string of `new RegExp(pattern, flags)`, present only on the
        /// pattern argument.
        regex_flags: Option<String>,
        new_expr: bool,
    },
    MemberObject,
    /// Computed member property expression.
    MemberProperty,
    ObjectValue,
    ComputedKey,
    ArrayElement,
    TemplateExpr,
    VarInit,
    ReturnArg,
    /// Expression directly under an expression statement (directive-prologue
    /// position for string literals).
    ExprStmt,
    ArrowBody,
    ClassPropertyValue,
}

/// The children of a node, in traversal order, each paired with the parent
/// context it is visited under.
///
/// This is the single source of truth for child ordering: the walker iterates
/// it and [`child_at`] indexes into it, so a child path recorded during the
/// walk always resolves to the same node afterwards. Import/export/type
/// declarations and decorators yield no children.
pub fn children_mut(node: NodeMut<'_>) -> Vec<(ParentContext, NodeMut<'_>)> {
    match node {
        NodeMut::Expr(expr) => expr_children(expr),
        NodeMut::Stmt(stmt) => stmt_children(stmt),
        NodeMut::Case(case) => {
            let mut children: Vec<(ParentContext, NodeMut<'_>)> = Vec::new();
            if let Some(test) = &mut case.test {
                children.push((ParentContext::CaseTest, NodeMut::Expr(test)));
            }
            children.extend(
                case.consequent
                    .iter_mut()
                    .map(|stmt| (ParentContext::CaseBody, NodeMut::Stmt(stmt))),
            );
            children
        }
    }
}

/// The `seg`-th child of `node` in the ordering of [`children_mut`].
pub fn child_at(node: NodeMut<'_>, seg: usize) -> Option<NodeMut<'_>> {
    children_mut(node).into_iter().nth(seg).map(|(_, child)| child)
}

fn expr_children(expr: &mut Expr) -> Vec<(ParentContext, NodeMut<'_>)> {
    match &mut expr.kind {
        ExprKind::Ident(_)
        | ExprKind::Number(_)
        | ExprKind::Str(_)
        | ExprKind::Regex { .. }
        | ExprKind::Bool(_)
        | ExprKind::Null => Vec::new(),
        ExprKind::Template { exprs, .. } => exprs
            .iter_mut()
            .map(|e| (ParentContext::TemplateExpr, NodeMut::Expr(e)))
            .collect(),
        ExprKind::Array(elements) => elements
            .iter_mut()
            .map(|e| (ParentContext::ArrayElement, NodeMut::Expr(e)))
            .collect(),
        ExprKind::Object(properties) => {
            let mut children = Vec::new();
            for property in properties {
                if let PropertyKey::Computed(key) = &mut property.key {
                    children.push((ParentContext::ComputedKey, NodeMut::Expr(key)));
                }
                children.push((ParentContext::ObjectValue, NodeMut::Expr(&mut property.value)));
            }
            children
        }
        ExprKind::Arrow { body, .. } => match body {
            ArrowBody::Expr(expr) => vec![(ParentContext::ArrowBody, NodeMut::Expr(expr))],
            ArrowBody::Block(stmts) => stmts
                .iter_mut()
                .map(|s| (ParentContext::Block, NodeMut::Stmt(s)))
                .collect(),
        },
        ExprKind::Unary { arg, .. } => vec![(ParentContext::UnaryArg, NodeMut::Expr(arg))],
        ExprKind::Update { arg, .. } => vec![(ParentContext::UpdateArg, NodeMut::Expr(arg))],
        ExprKind::Binary { left, right, .. } => vec![
            (ParentContext::BinaryOperand, NodeMut::Expr(left)),
            (ParentContext::BinaryOperand, NodeMut::Expr(right)),
        ],
        ExprKind::Logical { op, left, right } => {
            let op = *op;
            vec![
                (ParentContext::LogicalOperand(op), NodeMut::Expr(left)),
                (ParentContext::LogicalOperand(op), NodeMut::Expr(right)),
            ]
        }
        ExprKind::Assign { target, value, .. } => vec![
            (ParentContext::AssignTarget, NodeMut::Expr(target)),
            (ParentContext::AssignValue, NodeMut::Expr(value)),
        ],
        ExprKind::Conditional {
            test,
            consequent,
            alternate,
        } => vec![
            (ParentContext::ConditionalTest, NodeMut::Expr(test)),
            (ParentContext::ConditionalBranch, NodeMut::Expr(consequent)),
            (ParentContext::ConditionalBranch, NodeMut::Expr(alternate)),
        ],
        ExprKind::Member {
            object,
            property,
            computed,
            ..
        } => {
            let mut children = vec![(ParentContext::MemberObject, NodeMut::Expr(&mut **object))];
            if *computed {
                children.push((ParentContext::MemberProperty, NodeMut::Expr(property)));
            }
            children
        }
        ExprKind::Call {
            callee,
            args,
            optional,
        } => {
            let hint = CalleeHint::of(callee);
            let optional = *optional;
            let mut children = vec![(
                ParentContext::Callee { optional },
                NodeMut::Expr(&mut **callee),
            )];
            children.extend(args.iter_mut().enumerate().map(|(index, arg)| {
                (
                    ParentContext::Argument {
                        callee: hint,
                        index,
                        regex_flags: None,
                        new_expr: false,
                    },
                    NodeMut::Expr(arg),
                )
            }));
            children
        }
        ExprKind::New { callee, args } => {
            let hint = CalleeHint::of(callee);
            let regex_flags = if hint == CalleeHint::RegExpCtor {
                args.get(1).and_then(|arg| match &arg.kind {
                    ExprKind::Str(flags) => Some(flags.clone()),
                    _ => None,
                })
            } else {
                None
            };
            let mut children = vec![(
                ParentContext::Callee { optional: false },
                NodeMut::Expr(&mut **callee),
            )];
            children.extend(args.iter_mut().enumerate().map(|(index, arg)| {
                (
                    ParentContext::Argument {
                        callee: hint,
                        index,
                        regex_flags: if index == 0 { regex_flags.clone() } else { None },
                        new_expr: true,
                    },
                    NodeMut::Expr(arg),
                )
            }));
            children
        }
    }
}

fn stmt_children(stmt: &mut Stmt) -> Vec<(ParentContext, NodeMut<'_>)> {
    match &mut stmt.kind {
        StmtKind::Expr(expr) => vec![(ParentContext::ExprStmt, NodeMut::Expr(expr))],
        StmtKind::VarDecl { decls, .. } => decls
            .iter_mut()
            .filter_map(|decl| decl.init.as_mut())
            .map(|init| (ParentContext::VarInit, NodeMut::Expr(init)))
            .collect(),
        StmtKind::Block(body) => body
            .iter_mut()
            .map(|s| (ParentContext::Block, NodeMut::Stmt(s)))
            .collect(),
        StmtKind::If {
            test,
            consequent,
            alternate,
        } => {
            let mut children = vec![
                (ParentContext::IfTest, NodeMut::Expr(test)),
                (ParentContext::NestedStmt, NodeMut::Stmt(consequent)),
            ];
            if let Some(alternate) = alternate {
                children.push((ParentContext::NestedStmt, NodeMut::Stmt(alternate)));
            }
            children
        }
        StmtKind::While { test, body } => vec![
            (ParentContext::WhileTest, NodeMut::Expr(test)),
            (ParentContext::NestedStmt, NodeMut::Stmt(body)),
        ],
        StmtKind::DoWhile { body, test } => vec![
            (ParentContext::NestedStmt, NodeMut::Stmt(body)),
            (ParentContext::DoWhileTest, NodeMut::Expr(test)),
        ],
        StmtKind::For {
            init,
            test,
            update,
            body,
        } => {
            let mut children = Vec::new();
            if let Some(init) = init {
                children.push((ParentContext::ForInit, NodeMut::Stmt(init)));
            }
            if let Some(test) = test {
                children.push((ParentContext::ForTest, NodeMut::Expr(test)));
            }
            if let Some(update) = update {
                children.push((ParentContext::ForUpdate, NodeMut::Expr(update)));
            }
            children.push((ParentContext::NestedStmt, NodeMut::Stmt(body)));
            children
        }
        StmtKind::Switch {
            discriminant,
            cases,
        } => {
            let mut children = vec![(
                ParentContext::SwitchDiscriminant,
                NodeMut::Expr(discriminant),
            )];
            children.extend(
                cases
                    .iter_mut()
                    .map(|case| (ParentContext::CaseOfSwitch, NodeMut::Case(case))),
            );
            children
        }
        StmtKind::Return(arg) => arg
            .as_mut()
            .map(|expr| (ParentContext::ReturnArg, NodeMut::Expr(expr)))
            .into_iter()
            .collect(),
        StmtKind::FunctionDecl { body, .. } => body
            .iter_mut()
            .map(|s| (ParentContext::Block, NodeMut::Stmt(s)))
            .collect(),
        StmtKind::ClassDecl { members, .. } => {
            let mut children = Vec::new();
            for member in members {
                // decorators and non-computed keys are deliberately not visited
                if let PropertyKey::Computed(key) = &mut member.key {
                    children.push((ParentContext::ComputedKey, NodeMut::Expr(key)));
                }
                match &mut member.kind {
                    ClassMemberKind::Method { body, .. } => {
                        children.extend(
                            body.iter_mut()
                                .map(|s| (ParentContext::Block, NodeMut::Stmt(s))),
                        );
                    }
                    ClassMemberKind::Property { value: Some(value) } => {
                        children.push((ParentContext::ClassPropertyValue, NodeMut::Expr(value)));
                    }
                    ClassMemberKind::Property { value: None } => {}
                }
            }
            children
        }
        StmtKind::Break
        | StmtKind::Continue
        | StmtKind::Import { .. }
        | StmtKind::Export { .. }
        | StmtKind::TypeAlias { .. }
        | StmtKind::Empty => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_at_matches_children_order() {
        let mut stmt = Stmt::if_stmt(
            Expr::binary(BinaryOp::Lt, Expr::ident("a"), Expr::ident("b")),
            Stmt::expr(Expr::call(
                Expr::member(Expr::ident("text"), Expr::ident("trim"), false, false),
                vec![],
            )),
            None,
        );

        let children: Vec<ParentContext> = children_mut(NodeMut::Stmt(&mut stmt))
            .into_iter()
            .map(|(ctx, _)| ctx)
            .collect();
        assert_eq!(
            children,
            vec![ParentContext::IfTest, ParentContext::NestedStmt]
        );

        // seg 0 is the test expression
        let NodeMut::Expr(test) = child_at(NodeMut::Stmt(&mut stmt), 0).unwrap() else {
            panic!("expected expression child");
        };
        assert!(matches!(test.kind, ExprKind::Binary { .. }));
        assert!(child_at(NodeMut::Stmt(&mut stmt), 2).is_none());
    }

    #[test]
    fn regex_ctor_argument_carries_flags() {
        let mut expr = Expr::new_expr(
            Expr::ident("RegExp"),
            vec![Expr::string(r"\d{4}"), Expr::string("gi")],
        );
        let children = children_mut(NodeMut::Expr(&mut expr));
        // callee, pattern arg, flags arg
        assert_eq!(children.len(), 3);
        match &children[1].0 {
            ParentContext::Argument {
                callee,
                index,
                regex_flags,
                new_expr,
            } => {
                assert_eq!(*callee, CalleeHint::RegExpCtor);
                assert_eq!(*index, 0);
                assert_eq!(regex_flags.as_deref(), Some("gi"));
                assert!(new_expr);
            }
            other => panic!("unexpected context: {other:?}"),
        }
    }

    #[test]
    fn object_keys_are_not_children_unless_computed() {
        let mut expr = Expr::object(vec![
            Property {
                key: PropertyKey::Str("k".into()),
                value: Expr::string("v"),
            },
            Property {
                key: PropertyKey::Computed(Expr::ident("dyn")),
                value: Expr::bool_lit(true),
            },
        ]);
        let contexts: Vec<ParentContext> = children_mut(NodeMut::Expr(&mut expr))
            .into_iter()
            .map(|(ctx, _)| ctx)
            .collect();
        assert_eq!(
            contexts,
            vec![
                ParentContext::ObjectValue,
                ParentContext::ComputedKey,
                ParentContext::ObjectValue,
            ]
        );
    }

    #[test]
    fn operator_tokens_round_trip() {
        assert_eq!(BinaryOp::StrictEq.to_string(), "===");
        assert_eq!("??".parse::<LogicalOp>().unwrap(), LogicalOp::Nullish);
        assert_eq!(AssignOp::NullishAssign.to_string(), "??=");
        assert_eq!(UpdateOp::Dec.to_string(), "--");
    }
}
