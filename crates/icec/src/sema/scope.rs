//! Symbol table: scope name to symbol bindings
//!
//! One scope per function plus the reserved top-level scope. Built once per
//! analysis run by a `SemanticAnalyzer` and discarded with it, so runs stay
//! independent.

use std::collections::HashMap;

/// Reserved scope name for the top-level unit
pub const MAIN_SCOPE: &str = "main";

/// Per-analysis symbol state: scope name -> (symbol name -> existence marker)
#[derive(Debug)]
pub struct SymbolTable {
    scopes: HashMap<String, HashMap<String, usize>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut scopes = HashMap::new();
        scopes.insert(MAIN_SCOPE.to_string(), HashMap::new());
        Self { scopes }
    }

    /// Create an empty scope for `name`, replacing any existing one
    pub fn add_scope(&mut self, name: &str) {
        self.scopes.insert(name.to_string(), HashMap::new());
    }

    /// Bind `symbol` in `scope`. Returns false if the symbol was already
    /// bound there; the caller decides which duplicate error that is.
    pub fn bind(&mut self, scope: &str, symbol: &str) -> bool {
        let bindings = self.scopes.entry(scope.to_string()).or_default();
        if bindings.contains_key(symbol) {
            return false;
        }
        bindings.insert(symbol.to_string(), 1);
        true
    }

    pub fn is_bound(&self, scope: &str, symbol: &str) -> bool {
        self.scopes
            .get(scope)
            .is_some_and(|bindings| bindings.contains_key(symbol))
    }

    pub fn has_scope(&self, name: &str) -> bool {
        self.scopes.contains_key(name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_rejects_duplicates_per_scope() {
        let mut table = SymbolTable::new();
        table.add_scope("f");

        assert!(table.bind("f", "x"));
        assert!(!table.bind("f", "x"));
        // Same name in a different scope is fine
        assert!(table.bind(MAIN_SCOPE, "x"));
    }

    #[test]
    fn test_main_scope_exists_from_the_start() {
        let table = SymbolTable::new();
        assert!(table.has_scope(MAIN_SCOPE));
        assert!(!table.is_bound(MAIN_SCOPE, "x"));
    }

    #[test]
    fn test_add_scope_resets_bindings() {
        let mut table = SymbolTable::new();
        table.add_scope("f");
        assert!(table.bind("f", "x"));
        table.add_scope("f");
        assert!(!table.is_bound("f", "x"));
    }
}
