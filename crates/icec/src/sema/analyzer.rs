//! Semantic analyzer - reference and arity validation
//!
//! Verifies, before any code generation is attempted, that every referenced
//! name is bound with the expected arity. Two phases: signature collection
//! over the prototype map, then a recursive walk of every function body and
//! top-level expression. Stops at the first violation; the parsed `Program`
//! remains valid and inspectable either way.

use super::scope::{SymbolTable, MAIN_SCOPE};
use crate::ast::{Expr, ExprKind, Program};
use crate::common::{CompileError, CompileResult, SemanticError};

/// Semantic analyzer for one program; owns its symbol table for the run
pub struct SemanticAnalyzer<'a> {
    program: &'a Program,
    symbols: SymbolTable,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            symbols: SymbolTable::new(),
        }
    }

    /// Validate every reference in the program, or return the first violation
    pub fn analyze(&mut self) -> CompileResult<()> {
        // Phase 1: signature collection. Each prototype gets a scope holding
        // its parameters.
        for proto in self.program.prototypes() {
            self.symbols.add_scope(&proto.name);
            for param in &proto.params {
                if !self.symbols.bind(&proto.name, param) {
                    return Err(CompileError::semantic(
                        SemanticError::DuplicateArgument(param.clone()),
                        proto.span,
                    ));
                }
            }
        }

        // Phase 2: body validation. Definition bodies run under their
        // function's scope, top-level expressions under the reserved one.
        for function in self.program.definitions() {
            self.check_expr(&function.body, &function.prototype.name)?;
        }
        for expr in self.program.expressions() {
            self.check_expr(expr, MAIN_SCOPE)?;
        }

        Ok(())
    }

    fn check_expr(&mut self, expr: &Expr, scope: &str) -> CompileResult<()> {
        match &expr.kind {
            ExprKind::Number(_) => Ok(()),

            ExprKind::Binary { left, right, .. } => {
                self.check_expr(left, scope)?;
                self.check_expr(right, scope)
            }

            ExprKind::If {
                condition,
                then_expr,
                else_expr,
            } => {
                self.check_expr(condition, scope)?;
                self.check_expr(then_expr, scope)?;
                self.check_expr(else_expr, scope)
            }

            ExprKind::Call { callee, args } => {
                let Some(proto) = self.program.prototype(callee) else {
                    return Err(CompileError::semantic(
                        SemanticError::UndefinedFunction(callee.clone()),
                        expr.span,
                    ));
                };
                let expected = proto.arity();

                // Arguments are checked under the caller's scope
                for arg in args {
                    self.check_expr(arg, scope)?;
                }

                if args.len() != expected {
                    return Err(CompileError::semantic(
                        SemanticError::IncorrectArgumentCount {
                            name: callee.clone(),
                            expected,
                            found: args.len(),
                        },
                        expr.span,
                    ));
                }
                Ok(())
            }

            ExprKind::Variable(name) => {
                // A name is visible in its own scope or, failing that, in the
                // top-level scope: top-level bindings leak into function
                // bodies. Deliberate visibility rule, preserved as is.
                if self.symbols.is_bound(scope, name)
                    || self.symbols.is_bound(MAIN_SCOPE, name)
                {
                    Ok(())
                } else {
                    Err(CompileError::semantic(
                        SemanticError::UndefinedVariable(name.clone()),
                        expr.span,
                    ))
                }
            }

            ExprKind::Assign { target, value } => {
                // Value first, then bind-on-first-use: rebinding a name that
                // already exists in this scope is an error.
                self.check_expr(value, scope)?;
                if !self.symbols.bind(scope, target) {
                    return Err(CompileError::semantic(
                        SemanticError::DuplicateVariable(target.clone()),
                        expr.span,
                    ));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn analyze(source: &str) -> CompileResult<()> {
        let program = Parser::new(source).parse().unwrap();
        SemanticAnalyzer::new(&program).analyze()
    }

    #[test]
    fn test_valid_program_passes() {
        analyze("def add(x, y) x + y; add(1, 2);").unwrap();
    }

    #[test]
    fn test_incorrect_argument_count() {
        let err = analyze("def f(x, y) x + y; f(1);").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::IncorrectArgumentCount {
                    expected: 2,
                    found: 1,
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn test_undefined_variable_at_top_level() {
        let err = analyze("x + y;").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::UndefinedVariable(name),
                ..
            } if name == "x"
        ));
    }

    #[test]
    fn test_undefined_variable_in_body() {
        let err = analyze("def f(x) x + y; f(1);").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::UndefinedVariable(name),
                ..
            } if name == "y"
        ));
    }

    #[test]
    fn test_undefined_function() {
        let err = analyze("g(1);").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::UndefinedFunction(name),
                ..
            } if name == "g"
        ));
    }

    #[test]
    fn test_duplicate_parameter() {
        let err = analyze("def f(x, x) x;").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::DuplicateArgument(name),
                ..
            } if name == "x"
        ));
    }

    #[test]
    fn test_assignment_binds_on_first_use() {
        analyze("x = 1; x + 2;").unwrap();
    }

    #[test]
    fn test_rebinding_is_a_duplicate_variable() {
        let err = analyze("x = 1; x = 2;").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::DuplicateVariable(name),
                ..
            } if name == "x"
        ));
    }

    #[test]
    fn test_assigning_to_a_parameter_is_a_duplicate_variable() {
        let err = analyze("def f(x) x = 1; f(2);").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::DuplicateVariable(name),
                ..
            } if name == "x"
        ));
    }

    #[test]
    fn test_extern_participates_in_arity_checking() {
        analyze("extern sin(x); sin(1);").unwrap();

        let err = analyze("extern sin(x); sin(1, 2);").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::IncorrectArgumentCount { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_redefinition_shadows_earlier_signature() {
        // Last write wins in the prototype map, so calls are checked
        // against the most recent arity.
        analyze("def f(x) x; def f(x, y) x + y; f(1, 2);").unwrap();

        let err = analyze("def f(x) x; def f(x, y) x + y; f(1);").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::IncorrectArgumentCount { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_conditionals_recurse_into_all_branches() {
        let err = analyze("def f(x) if x then x else q; f(1);").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::UndefinedVariable(name),
                ..
            } if name == "q"
        ));
    }

    #[test]
    fn test_function_names_are_not_variables() {
        let err = analyze("def f(x) x; f;").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Semantic {
                error: SemanticError::UndefinedVariable(name),
                ..
            } if name == "f"
        ));
    }

    #[test]
    fn test_top_level_bindings_are_visible_from_function_scopes() {
        // The lookup falls back to the top-level scope when a name is not
        // bound in the current one.
        let program = Parser::new("def f() g; f();").parse().unwrap();
        let mut analyzer = SemanticAnalyzer::new(&program);
        analyzer.symbols.bind(MAIN_SCOPE, "g");
        analyzer.analyze().unwrap();
    }

    #[test]
    fn test_program_remains_inspectable_after_a_semantic_error() {
        let program = Parser::new("def f(x, y) x; f(1);").parse().unwrap();
        assert!(SemanticAnalyzer::new(&program).analyze().is_err());
        assert_eq!(program.definitions().len(), 1);
        assert_eq!(program.expressions().len(), 1);
    }
}
