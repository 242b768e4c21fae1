//! Semantic analysis: scope-aware reference and arity validation

mod analyzer;
mod scope;

pub use analyzer::SemanticAnalyzer;
pub use scope::{SymbolTable, MAIN_SCOPE};
