//! Token definitions for the Ice lexer

use crate::common::Span;
use logos::Logos;

/// Binary operator kind carried by an operator token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Assign,
}

impl BinOp {
    /// Binding power used by the precedence-climbing loop.
    ///
    /// `%` has no binding power: an operator the table does not cover ends
    /// the combining loop, so the accumulated left-hand side is returned.
    pub fn precedence(self) -> Option<i32> {
        match self {
            BinOp::Add | BinOp::Sub => Some(20),
            BinOp::Mul | BinOp::Div => Some(40),
            BinOp::Assign => Some(0),
            BinOp::Rem => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Rem => '%',
            BinOp::Assign => '=',
        }
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Token with source location
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokens are compared structurally; spans do not participate.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// All token kinds in Ice
///
/// `Word` is internal to the lexer: a maximal run of alphanumeric characters
/// and dots, which the scanner classifies into a number or an identifier
/// (keywords are matched directly and never reach classification).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum TokenKind {
    // === Keywords ===
    #[token("def")]
    Def,
    #[token("extern")]
    Extern,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,

    // === Operators ===
    #[token("+", |_| BinOp::Add)]
    #[token("-", |_| BinOp::Sub)]
    #[token("*", |_| BinOp::Mul)]
    #[token("/", |_| BinOp::Div)]
    #[token("%", |_| BinOp::Rem)]
    #[token("=", |_| BinOp::Assign)]
    Operator(BinOp),

    // === Words (classified by the scanner) ===
    #[regex(r"[A-Za-z0-9_.]+", |lex| lex.slice().to_string())]
    Word(String),

    // Produced by the scanner, never by logos directly
    Number(f64),
    Identifier(String),

    /// A single unrecognized character. Lexing never fails; rejection of
    /// invalid input is deferred to the parser.
    Other(char),

    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Def => write!(f, "keyword 'def'"),
            TokenKind::Extern => write!(f, "keyword 'extern'"),
            TokenKind::If => write!(f, "keyword 'if'"),
            TokenKind::Then => write!(f, "keyword 'then'"),
            TokenKind::Else => write!(f, "keyword 'else'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Operator(op) => write!(f, "operator '{op}'"),
            TokenKind::Word(s) => write!(f, "word '{s}'"),
            TokenKind::Number(n) => write!(f, "number '{n}'"),
            TokenKind::Identifier(s) => write!(f, "identifier '{s}'"),
            TokenKind::Other(c) => write!(f, "'{c}'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_table() {
        assert_eq!(BinOp::Add.precedence(), Some(20));
        assert_eq!(BinOp::Sub.precedence(), Some(20));
        assert_eq!(BinOp::Mul.precedence(), Some(40));
        assert_eq!(BinOp::Div.precedence(), Some(40));
        assert_eq!(BinOp::Assign.precedence(), Some(0));
        assert_eq!(BinOp::Rem.precedence(), None);
    }

    #[test]
    fn test_structural_token_equality() {
        let a = Token::new(TokenKind::Identifier("x".to_string()), Span::new(0, 1));
        let b = Token::new(TokenKind::Identifier("x".to_string()), Span::new(7, 8));
        let c = Token::new(TokenKind::Identifier("y".to_string()), Span::new(0, 1));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let n = Token::new(TokenKind::Number(1.5), Span::new(0, 3));
        let m = Token::new(TokenKind::Number(1.5), Span::new(4, 7));
        assert_eq!(n, m);
    }
}
