//! Expression AST nodes
//!
//! Expressions form an owned tree: every sub-expression belongs exclusively
//! to its parent node, so no sharing or cycles can exist by construction.

use crate::common::Span;
use crate::lexer::BinOp;

/// Expression node
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Expressions are compared structurally; spans do not participate.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// Expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Numeric literal: 42, 3.14
    Number(f64),

    /// Variable reference: x
    Variable(String),

    /// Function call: foo(a, b)
    Call { callee: String, args: Vec<Expr> },

    /// Binary operation: a + b
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional whose value is the selected branch: if c then a else b
    If {
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },

    /// Binding-on-first-use assignment: x = value
    Assign { target: String, value: Box<Expr> },
}

/// Canonical printer. Binary and conditional nodes are fully parenthesized
/// so that re-parsing the output reproduces a structurally equal tree.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => write!(f, "{n}"),
            ExprKind::Variable(name) => write!(f, "{name}"),
            ExprKind::Call { callee, args } => {
                write!(f, "{callee}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            ExprKind::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::If {
                condition,
                then_expr,
                else_expr,
            } => write!(f, "(if {condition} then {then_expr} else {else_expr})"),
            ExprKind::Assign { target, value } => write!(f, "{target} = {value}"),
        }
    }
}
