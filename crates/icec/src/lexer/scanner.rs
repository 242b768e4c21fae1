//! Lexer implementation using logos
//!
//! This stage cannot fail: unrecognized characters are emitted as
//! `TokenKind::Other` tokens and rejected later by the parser.

use super::token::{Token, TokenKind};
use crate::common::Span;
use logos::Logos;

/// Lexer for Ice source code
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    at_eof: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            at_eof: false,
        }
    }

    /// Get the next token; after the source is exhausted, returns `Eof`
    /// tokens indefinitely.
    pub fn next_token(&mut self) -> Token {
        if self.at_eof {
            let len = self.inner.source().len();
            return Token::new(TokenKind::Eof, Span::new(len, len));
        }

        match self.inner.next() {
            Some(Ok(kind)) => {
                let span = self.inner.span();
                Token::new(classify(kind), Span::new(span.start, span.end))
            }
            Some(Err(())) => {
                let span = self.inner.span();
                let c = self.inner.slice().chars().next().unwrap_or('\0');
                Token::new(TokenKind::Other(c), Span::new(span.start, span.end))
            }
            None => {
                self.at_eof = true;
                let len = self.inner.source().len();
                Token::new(TokenKind::Eof, Span::new(len, len))
            }
        }
    }

    /// Tokenize the entire source, ending with exactly one `Eof` token
    pub fn tokenize_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Get the source being lexed
    pub fn source(&self) -> &'a str {
        self.inner.source()
    }
}

/// Classify a scanned word: parseable as a double is a number, anything
/// else is an identifier. Keywords never reach this point.
fn classify(kind: TokenKind) -> TokenKind {
    match kind {
        TokenKind::Word(word) => match word.parse::<f64>() {
            Ok(value) => TokenKind::Number(value),
            Err(_) => TokenKind::Identifier(word),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::BinOp;

    #[test]
    fn test_keywords() {
        let source = "def extern if then else";
        let mut lexer = Lexer::new(source);

        assert!(matches!(lexer.next_token().kind, TokenKind::Def));
        assert!(matches!(lexer.next_token().kind, TokenKind::Extern));
        assert!(matches!(lexer.next_token().kind, TokenKind::If));
        assert!(matches!(lexer.next_token().kind, TokenKind::Then));
        assert!(matches!(lexer.next_token().kind, TokenKind::Else));
        assert!(matches!(lexer.next_token().kind, TokenKind::Eof));
    }

    #[test]
    fn test_identifiers() {
        let source = "foo bar_baz test123 define";
        let mut lexer = Lexer::new(source);

        assert!(matches!(
            lexer.next_token().kind,
            TokenKind::Identifier(s) if s == "foo"
        ));
        assert!(matches!(
            lexer.next_token().kind,
            TokenKind::Identifier(s) if s == "bar_baz"
        ));
        assert!(matches!(
            lexer.next_token().kind,
            TokenKind::Identifier(s) if s == "test123"
        ));
        // Not a keyword: the run extends past "def"
        assert!(matches!(
            lexer.next_token().kind,
            TokenKind::Identifier(s) if s == "define"
        ));
    }

    #[test]
    fn test_numbers() {
        let source = "42 3.14 .5 10.";
        let mut lexer = Lexer::new(source);

        assert!(matches!(lexer.next_token().kind, TokenKind::Number(n) if n == 42.0));
        assert!(matches!(lexer.next_token().kind, TokenKind::Number(n) if n == 3.14));
        assert!(matches!(lexer.next_token().kind, TokenKind::Number(n) if n == 0.5));
        assert!(matches!(lexer.next_token().kind, TokenKind::Number(n) if n == 10.0));
    }

    #[test]
    fn test_word_classification() {
        // A maximal run that fails to parse as a double is an identifier,
        // even when it starts with a digit.
        let mut lexer = Lexer::new("1abc 1.2.3");
        assert!(matches!(
            lexer.next_token().kind,
            TokenKind::Identifier(s) if s == "1abc"
        ));
        assert!(matches!(
            lexer.next_token().kind,
            TokenKind::Identifier(s) if s == "1.2.3"
        ));
    }

    #[test]
    fn test_operators_and_punctuation() {
        let source = "+ - * / % = ( ) , ; :";
        let mut lexer = Lexer::new(source);

        assert!(matches!(lexer.next_token().kind, TokenKind::Operator(BinOp::Add)));
        assert!(matches!(lexer.next_token().kind, TokenKind::Operator(BinOp::Sub)));
        assert!(matches!(lexer.next_token().kind, TokenKind::Operator(BinOp::Mul)));
        assert!(matches!(lexer.next_token().kind, TokenKind::Operator(BinOp::Div)));
        assert!(matches!(lexer.next_token().kind, TokenKind::Operator(BinOp::Rem)));
        assert!(matches!(lexer.next_token().kind, TokenKind::Operator(BinOp::Assign)));
        assert!(matches!(lexer.next_token().kind, TokenKind::LParen));
        assert!(matches!(lexer.next_token().kind, TokenKind::RParen));
        assert!(matches!(lexer.next_token().kind, TokenKind::Comma));
        assert!(matches!(lexer.next_token().kind, TokenKind::Semi));
        assert!(matches!(lexer.next_token().kind, TokenKind::Colon));
    }

    #[test]
    fn test_unrecognized_characters_do_not_fail() {
        let tokens = Lexer::new("x # y").tokenize_all();
        assert!(matches!(&tokens[0].kind, TokenKind::Identifier(s) if s == "x"));
        assert!(matches!(tokens[1].kind, TokenKind::Other('#')));
        assert!(matches!(&tokens[2].kind, TokenKind::Identifier(s) if s == "y"));
        assert!(matches!(tokens[3].kind, TokenKind::Eof));
    }

    #[test]
    fn test_simple_definition() {
        let source = "def f(x) x + 1;";
        let tokens = Lexer::new(source).tokenize_all();

        assert!(matches!(tokens[0].kind, TokenKind::Def));
        assert!(matches!(&tokens[1].kind, TokenKind::Identifier(s) if s == "f"));
        assert!(matches!(tokens[2].kind, TokenKind::LParen));
        assert!(matches!(&tokens[3].kind, TokenKind::Identifier(s) if s == "x"));
        assert!(matches!(tokens[4].kind, TokenKind::RParen));
        assert!(matches!(&tokens[5].kind, TokenKind::Identifier(s) if s == "x"));
        assert!(matches!(tokens[6].kind, TokenKind::Operator(BinOp::Add)));
        assert!(matches!(tokens[7].kind, TokenKind::Number(n) if n == 1.0));
        assert!(matches!(tokens[8].kind, TokenKind::Semi));
        assert!(matches!(tokens[9].kind, TokenKind::Eof));
        assert_eq!(tokens.len(), 10);
    }

    #[test]
    fn test_lexing_is_deterministic() {
        let source = "def f(x) if x then 1 else 0; f(2);";
        let a = Lexer::new(source).tokenize_all();
        let b = Lexer::new(source).tokenize_all();
        assert_eq!(a, b);
    }

    #[test]
    fn test_spans_cover_slices() {
        let source = "abc 12";
        let tokens = Lexer::new(source).tokenize_all();
        assert_eq!(&source[tokens[0].span.start..tokens[0].span.end], "abc");
        assert_eq!(&source[tokens[1].span.start..tokens[1].span.end], "12");
    }
}
