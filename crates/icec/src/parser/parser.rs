//! Recursive descent parser for Ice
//!
//! Every grammar choice is resolved by single-token lookahead; there is no
//! backtracking and no error recovery. Binary operators are folded by
//! precedence climbing. Parsing stops at the first structural violation.

use crate::ast::{Expr, ExprKind, Function, Program, Prototype};
use crate::common::{CompileError, CompileResult, Span, SyntaxError};
use crate::lexer::{BinOp, Lexer, Token, TokenKind};

/// Recursive descent parser for Ice
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parse a complete program: definitions, extern declarations, and
    /// top-level expressions, each terminated by a semicolon.
    pub fn parse(&mut self) -> CompileResult<Program> {
        let mut program = Program::new();

        while !self.at_end() {
            match self.current.kind {
                TokenKind::Def => {
                    let function = self.parse_definition()?;
                    program.add_definition(function);
                }
                TokenKind::Extern => {
                    let proto = self.parse_extern()?;
                    program.add_extern(proto);
                }
                _ => {
                    let expr = self.parse_expression()?;
                    program.add_expression(expr);
                }
            }
            self.expect_delimiter(&TokenKind::Semi, ';')?;
        }

        Ok(program)
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        std::mem::replace(&mut self.current, self.lexer.next_token())
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require a structural token, e.g. the semicolon after a top-level unit
    fn expect_delimiter(&mut self, kind: &TokenKind, delimiter: char) -> CompileResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(CompileError::syntax(
                SyntaxError::MissingDelimiter(delimiter),
                self.current.span,
            ))
        }
    }

    /// Binding power of the current token, or -1 when it is not an operator
    /// the precedence table covers. -1 ends the combining loop.
    fn token_precedence(&self) -> i32 {
        match self.current.kind {
            TokenKind::Operator(op) => op.precedence().unwrap_or(-1),
            _ => -1,
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn parse_expression(&mut self) -> CompileResult<Expr> {
        let lhs = self.parse_primary()?;
        self.parse_binary_rhs(0, lhs)
    }

    /// Precedence climbing: fold `lhs (op primary)*` into a tree, combining
    /// left-associatively at equal precedence and absorbing a tighter-binding
    /// follow-on operator into the right-hand side first.
    fn parse_binary_rhs(&mut self, expr_prec: i32, lhs: Expr) -> CompileResult<Expr> {
        let mut lhs = lhs;
        loop {
            let prec = self.token_precedence();
            if prec < expr_prec {
                return Ok(lhs);
            }

            let op_token = self.advance();
            let TokenKind::Operator(op) = op_token.kind else {
                return Err(CompileError::syntax(
                    SyntaxError::ExpectedOperator,
                    op_token.span,
                ));
            };

            let mut rhs = self.parse_primary()?;

            // If the operator after the right-hand side binds tighter, let
            // it take the right-hand side first.
            let next_prec = self.token_precedence();
            if prec < next_prec {
                rhs = self.parse_binary_rhs(prec + 1, rhs)?;
            }

            let span = lhs.span.merge(rhs.span);
            lhs = if op == BinOp::Assign {
                // `=` builds an assignment, not a binary node, and its
                // target must be a bare variable reference.
                let ExprKind::Variable(target) = lhs.kind else {
                    return Err(CompileError::syntax(
                        SyntaxError::ExpectedIdentifier,
                        lhs.span,
                    ));
                };
                Expr::new(
                    ExprKind::Assign {
                        target,
                        value: Box::new(rhs),
                    },
                    span,
                )
            } else {
                Expr::new(
                    ExprKind::Binary {
                        op,
                        left: Box::new(lhs),
                        right: Box::new(rhs),
                    },
                    span,
                )
            };
        }
    }

    fn parse_primary(&mut self) -> CompileResult<Expr> {
        match self.current.kind {
            TokenKind::Identifier(_) => self.parse_identifier_expr(),
            TokenKind::Number(_) => self.parse_number(),
            TokenKind::LParen => self.parse_paren_expr(),
            TokenKind::If => self.parse_if_expr(),
            TokenKind::Other(c) => Err(CompileError::syntax(
                SyntaxError::UndefinedOperator(c),
                self.current.span,
            )),
            _ => Err(CompileError::syntax(
                SyntaxError::ExpectedExpression,
                self.current.span,
            )),
        }
    }

    fn parse_number(&mut self) -> CompileResult<Expr> {
        let token = self.advance();
        let TokenKind::Number(value) = token.kind else {
            return Err(CompileError::syntax(SyntaxError::ExpectedNumber, token.span));
        };
        Ok(Expr::new(ExprKind::Number(value), token.span))
    }

    /// An identifier is a bare variable reference unless the very next token
    /// is an open paren, in which case it is a call.
    fn parse_identifier_expr(&mut self) -> CompileResult<Expr> {
        let token = self.advance();
        let TokenKind::Identifier(name) = token.kind else {
            return Err(CompileError::syntax(
                SyntaxError::ExpectedIdentifier,
                token.span,
            ));
        };

        if !self.check(&TokenKind::LParen) {
            return Ok(Expr::new(ExprKind::Variable(name), token.span));
        }

        let (args, list_span) = self.parse_paren_list(Self::parse_expression)?;
        let span = token.span.merge(list_span);
        Ok(Expr::new(ExprKind::Call { callee: name, args }, span))
    }

    fn parse_paren_expr(&mut self) -> CompileResult<Expr> {
        self.expect_delimiter(&TokenKind::LParen, '(')?;
        let expr = self.parse_expression()?;
        self.expect_delimiter(&TokenKind::RParen, ')')?;
        Ok(expr)
    }

    /// `if` condition [`then`] then-expr `else` else-expr. The `then`
    /// keyword is skipped when present; the `else` is mandatory.
    fn parse_if_expr(&mut self) -> CompileResult<Expr> {
        let if_token = self.advance();
        let condition = self.parse_expression()?;
        self.match_token(&TokenKind::Then);
        let then_expr = self.parse_expression()?;

        if !self.match_token(&TokenKind::Else) {
            return Err(CompileError::syntax(
                SyntaxError::UnexpectedToken(self.current.kind.to_string()),
                self.current.span,
            ));
        }
        let else_expr = self.parse_expression()?;

        let span = if_token.span.merge(else_expr.span);
        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                then_expr: Box::new(then_expr),
                else_expr: Box::new(else_expr),
            },
            span,
        ))
    }

    /// Parenthesized, comma-separated list of anything: shared by call
    /// arguments and prototype parameters. After each element the next token
    /// must be `)` (stop) or `,` (continue). Returns the elements and the
    /// span from the opening to the closing paren.
    fn parse_paren_list<T>(
        &mut self,
        mut element: impl FnMut(&mut Self) -> CompileResult<T>,
    ) -> CompileResult<(Vec<T>, Span)> {
        let open = self.expect_delimiter(&TokenKind::LParen, '(')?;

        let mut items = Vec::new();
        if self.check(&TokenKind::RParen) {
            let close = self.advance();
            return Ok((items, open.span.merge(close.span)));
        }

        loop {
            items.push(element(self)?);

            if self.check(&TokenKind::RParen) {
                let close = self.advance();
                return Ok((items, open.span.merge(close.span)));
            }
            if !self.match_token(&TokenKind::Comma) {
                return Err(CompileError::syntax(
                    SyntaxError::MissingDelimiter(')'),
                    self.current.span,
                ));
            }
        }
    }

    // =========================================================================
    // Prototypes and definitions
    // =========================================================================

    fn parse_param(&mut self) -> CompileResult<String> {
        let token = self.advance();
        let TokenKind::Identifier(name) = token.kind else {
            return Err(CompileError::syntax(
                SyntaxError::ExpectedIdentifier,
                token.span,
            ));
        };
        Ok(name)
    }

    fn parse_prototype(&mut self) -> CompileResult<Prototype> {
        let token = self.advance();
        let TokenKind::Identifier(name) = token.kind else {
            return Err(CompileError::syntax(
                SyntaxError::ExpectedFunctionName,
                token.span,
            ));
        };

        let (params, list_span) = self.parse_paren_list(Self::parse_param)?;
        let span = token.span.merge(list_span);
        Ok(Prototype::new(name, params, span))
    }

    fn parse_definition(&mut self) -> CompileResult<Function> {
        self.advance(); // def
        let prototype = self.parse_prototype()?;
        let body = self.parse_expression()?;
        Ok(Function::new(prototype, body))
    }

    fn parse_extern(&mut self) -> CompileResult<Prototype> {
        self.advance(); // extern
        self.parse_prototype()
    }
}
