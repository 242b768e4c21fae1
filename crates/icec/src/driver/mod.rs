//! Compilation driver and pipeline orchestration
//!
//! Runs lex -> parse -> analyze to completion, or stops at the first error
//! and reports it. The validated `Program` is what a code-generation
//! backend consumes: one callable unit per definition plus a synthetic
//! entry routine evaluating the top-level expressions in order.

use crate::ast::Program;
use crate::common::{CompileResult, DiagnosticReporter};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::sema::SemanticAnalyzer;

/// Configuration options for one compilation
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub dump_tokens: bool,
    pub dump_ast: bool,
    pub verbose: bool,
}

/// Compilation context providing access to diagnostics and file info
pub struct CompileContext<'a> {
    pub filename: String,
    pub file_id: usize,
    pub reporter: &'a DiagnosticReporter,
}

impl<'a> CompileContext<'a> {
    pub fn new(filename: String, file_id: usize, reporter: &'a DiagnosticReporter) -> Self {
        Self {
            filename,
            file_id,
            reporter,
        }
    }
}

/// Run the front-end pipeline over one source file and return the
/// semantically validated program, reporting the first error encountered.
pub fn compile_source(
    source: &str,
    ctx: &CompileContext,
    options: &CompileOptions,
) -> CompileResult<Program> {
    if options.dump_tokens {
        eprintln!("=== Tokens ===");
        for token in Lexer::new(source).tokenize_all() {
            eprintln!("{token:?}");
        }
        eprintln!("=== End Tokens ===\n");
    }

    if options.verbose {
        eprintln!("Parsing {}...", ctx.filename);
    }
    let program = match Parser::new(source).parse() {
        Ok(program) => program,
        Err(e) => {
            ctx.reporter.report_error(ctx.file_id, &e);
            return Err(e);
        }
    };

    if options.dump_ast {
        eprintln!("=== AST ===");
        eprintln!("{program:#?}");
        eprintln!("=== End AST ===\n");
    }

    if options.verbose {
        eprintln!("Analyzing...");
    }
    if let Err(e) = SemanticAnalyzer::new(&program).analyze() {
        ctx.reporter.report_error(ctx.file_id, &e);
        return Err(e);
    }

    Ok(program)
}
