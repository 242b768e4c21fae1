//! Error types and diagnostic reporting
//!
//! Two disjoint taxonomies, both fail-fast: syntax errors raised by the
//! parser at the first grammar violation, and semantic errors raised by the
//! analyzer at the first unresolved reference. The first error anywhere
//! aborts the pipeline; there is no multi-error batching and no warnings.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use thiserror::Error;

use super::Span;

/// Structural violations detected while parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("expected a number")]
    ExpectedNumber,

    #[error("expected an identifier")]
    ExpectedIdentifier,

    #[error("expected a binary operator")]
    ExpectedOperator,

    #[error("missing '{0}'")]
    MissingDelimiter(char),

    #[error("expected an expression")]
    ExpectedExpression,

    #[error("expected a function name")]
    ExpectedFunctionName,

    #[error("unexpected token {0}")]
    UnexpectedToken(String),

    #[error("undefined operator '{0}'")]
    UndefinedOperator(char),
}

/// Reference violations detected while analyzing a parsed program
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("undefined function '{0}'")]
    UndefinedFunction(String),

    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    #[error("'{name}' expects {expected} argument(s), found {found}")]
    IncorrectArgumentCount {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("duplicate argument '{0}'")]
    DuplicateArgument(String),

    #[error("duplicate variable '{0}'")]
    DuplicateVariable(String),
}

/// Compile error with source location
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("syntax error: {error}")]
    Syntax { error: SyntaxError, span: Span },

    #[error("semantic error: {error}")]
    Semantic { error: SemanticError, span: Span },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub fn syntax(error: SyntaxError, span: Span) -> Self {
        Self::Syntax { error, span }
    }

    pub fn semantic(error: SemanticError, span: Span) -> Self {
        Self::Semantic { error, span }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn report_error(&self, file_id: usize, error: &CompileError) {
        let diagnostic = match error {
            CompileError::Syntax { error, span } => Diagnostic::error()
                .with_message("Syntax error")
                .with_labels(vec![
                    Label::primary(file_id, span.start..span.end).with_message(error.to_string()),
                ]),

            CompileError::Semantic { error, span } => Diagnostic::error()
                .with_message("Semantic error")
                .with_labels(vec![
                    Label::primary(file_id, span.start..span.end).with_message(error.to_string()),
                ]),

            CompileError::Io(err) => {
                Diagnostic::error().with_message(format!("IO error: {err}"))
            }
        };

        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &diagnostic);
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
