//! Lexer: raw text to an ordered, Eof-terminated token sequence

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{BinOp, Token, TokenKind};
