//! Program-level aggregates: prototypes, definitions, and the top-level unit

use super::Expr;
use crate::common::Span;
use std::collections::HashMap;

/// A function's external signature: its name and parameter names
#[derive(Debug, Clone)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
    pub span: Span,
}

impl Prototype {
    pub fn new(name: String, params: Vec<String>, span: Span) -> Self {
        Self { name, params, span }
    }

    /// Number of parameters this function expects
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl PartialEq for Prototype {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params
    }
}

impl std::fmt::Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(", "))
    }
}

/// A prototype paired with exactly one body expression
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

impl Function {
    pub fn new(prototype: Prototype, body: Expr) -> Self {
        Self { prototype, body }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "def {} {}", self.prototype, self.body)
    }
}

/// The top-level aggregate produced by the parser.
///
/// The prototype map covers both standalone `extern` declarations and
/// definitions' prototypes, keyed by name with last write winning, so a
/// redefinition silently shadows the earlier signature.
#[derive(Debug, Default)]
pub struct Program {
    externs: Vec<Prototype>,
    prototypes: HashMap<String, Prototype>,
    definitions: Vec<Function>,
    expressions: Vec<Expr>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently registered signature for `name`, if any
    pub fn prototype(&self, name: &str) -> Option<&Prototype> {
        self.prototypes.get(name)
    }

    pub fn prototypes(&self) -> impl Iterator<Item = &Prototype> {
        self.prototypes.values()
    }

    pub fn externs(&self) -> &[Prototype] {
        &self.externs
    }

    /// Definitions in source order
    pub fn definitions(&self) -> &[Function] {
        &self.definitions
    }

    /// Top-level expressions in source order
    pub fn expressions(&self) -> &[Expr] {
        &self.expressions
    }

    pub fn add_extern(&mut self, proto: Prototype) {
        self.prototypes.insert(proto.name.clone(), proto.clone());
        self.externs.push(proto);
    }

    pub fn add_definition(&mut self, function: Function) {
        self.prototypes.insert(
            function.prototype.name.clone(),
            function.prototype.clone(),
        );
        self.definitions.push(function);
    }

    pub fn add_expression(&mut self, expr: Expr) {
        self.expressions.push(expr);
    }
}

/// Canonical form: externs, then definitions, then top-level expressions,
/// one semicolon-terminated unit per line. Re-parseable.
impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for proto in &self.externs {
            writeln!(f, "extern {proto};")?;
        }
        for function in &self.definitions {
            writeln!(f, "{function};")?;
        }
        for expr in &self.expressions {
            writeln!(f, "{expr};")?;
        }
        Ok(())
    }
}
