//! Common infrastructure shared across the pipeline stages

mod error;
mod span;

pub use error::{CompileError, CompileResult, DiagnosticReporter, SemanticError, SyntaxError};
pub use span::Span;
