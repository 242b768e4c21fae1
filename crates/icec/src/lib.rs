//! Ice Compiler - front end for the Ice expression language
//!
//! Ice is a small expression-oriented language: functions are defined with
//! `def`, declared with `extern`, and everything else at the top level is an
//! expression evaluated at program entry.
//!
//! ## Architecture
//!
//! The front end is a three-stage pipeline, each stage running to completion
//! (or first error) before the next begins:
//! - **Lexer** (`lexer/`): text to an Eof-terminated token sequence
//! - **Parser** (`parser/`): tokens to a `Program` via recursive descent
//!   with precedence climbing
//! - **Semantic analyzer** (`sema/`): scope-aware reference and arity checks
//! - **Common** (`common/`): shared infrastructure (errors, spans)
//! - **Driver** (`driver/`): pipeline orchestration
//!
//! Code generation is not part of this crate: a backend consumes the
//! validated `Program` this pipeline produces.

pub mod ast;
pub mod common;
pub mod driver;
pub mod lexer;
pub mod parser;
pub mod sema;

// Re-exports for convenience
pub use ast::{Expr, ExprKind, Function, Program, Prototype};
pub use common::{
    CompileError, CompileResult, DiagnosticReporter, SemanticError, Span, SyntaxError,
};
pub use driver::{compile_source, CompileContext, CompileOptions};
pub use lexer::{BinOp, Lexer, Token, TokenKind};
pub use parser::Parser;
pub use sema::SemanticAnalyzer;
