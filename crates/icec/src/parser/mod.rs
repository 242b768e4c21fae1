//! Parser: token sequence to a complete `Program`, or the first error

#[allow(clippy::module_inception)]
mod parser;

pub use parser::Parser;
