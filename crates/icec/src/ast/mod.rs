//! Abstract Syntax Tree definitions

mod expr;
mod program;

pub use expr::{Expr, ExprKind};
pub use program::{Function, Program, Prototype};
