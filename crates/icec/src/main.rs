//! Ice Compiler front end - checks an Ice source file and prints it in
//! canonical form
//!
//! Usage: icec [OPTIONS] <input>

use anyhow::Context;
use clap::Parser as ClapParser;
use ice_compiler::driver::{compile_source, CompileContext, CompileOptions};
use ice_compiler::DiagnosticReporter;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "icec")]
#[command(version = "0.1.0")]
#[command(about = "Front end for the Ice expression language", long_about = None)]
struct Args {
    /// Input source file (.ice)
    #[arg(required = true)]
    input: PathBuf,

    /// Dump tokens (for debugging)
    #[arg(long)]
    dump_tokens: bool,

    /// Dump AST (for debugging)
    #[arg(long)]
    dump_ast: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let filename = args.input.display().to_string();

    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    let options = CompileOptions {
        dump_tokens: args.dump_tokens,
        dump_ast: args.dump_ast,
        verbose: args.verbose,
    };
    let ctx = CompileContext::new(filename, file_id, &reporter);

    // The first error has already been reported with its source label;
    // propagating it sets the exit status.
    let program = compile_source(&source, &ctx, &options)?;

    print!("{program}");

    if args.verbose {
        eprintln!("Successfully checked {}", args.input.display());
    }

    Ok(())
}
