//! Rule for postfix increment/decrement operators.
//!
//! Postfix `++`/`--` copies its operand, which matters for iterators and
//! other class types; the prefix form is preferred except on primitive loop
//! counters.

use cpp_inspector_core::{Check, Diagnostic, Node, NodeKind, Rule};

/// Rule name for unary-operator.
pub const NAME: &str = "unary-operator";

/// Operand types for which the postfix form is tolerated.
const COUNTER_TYPES: [&str; 2] = ["int", "size_t"];

/// Checks unary operator expressions anywhere in the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnaryOperatorRule;

impl UnaryOperatorRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for UnaryOperatorRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Prefers prefix increment/decrement outside primitive counters"
    }

    fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        root.post_order()
            .filter(|n| n.kind == NodeKind::UnaryOperator)
            .collect()
    }

    fn checks(&self) -> &[Check] {
        &[check_postfix]
    }
}

fn check_postfix(op: &Node, out: &mut Vec<Diagnostic>) {
    if op.name != "postfix '++'" && op.name != "postfix '--'" {
        return;
    }
    let allowed = op
        .ty
        .as_deref()
        .is_some_and(|ty| COUNTER_TYPES.contains(&ty));
    if !allowed {
        out.push(Diagnostic::new(
            op.line,
            op.kind.clone(),
            "Use prefix form (++i) of the increment and decrement operators \
             with iterators and other template objects",
            "Preincrement_and_Predecrement",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpp_inspector_core::build_tree;

    fn diagnostics(body: &str) -> Vec<Diagnostic> {
        let dump = format!(
            "TranslationUnitDecl 0x1 <<invalid sloc>> <invalid sloc>\n{body}"
        );
        let root = build_tree(&dump, "/src/t.cc");
        let mut out = Vec::new();
        UnaryOperatorRule::new().run(&root, &mut out);
        out
    }

    #[test]
    fn postfix_on_int_counter_is_clean() {
        let out = diagnostics(
            "`-FunctionDecl 0x2 </src/t.cc:1:1, line:5:1> line:1:6 Run 'void ()'\n\
             \x20 `-UnaryOperator 0x3 <line:3:8, col:9> 'int' postfix '++'",
        );
        assert!(out.is_empty());
    }

    #[test]
    fn postfix_on_iterator_is_flagged() {
        let out = diagnostics(
            "`-FunctionDecl 0x2 </src/t.cc:1:1, line:5:1> line:1:6 Run 'void ()'\n\
             \x20 `-UnaryOperator 0x3 <line:3:8, col:9> 'std::vector<int>::iterator' postfix '++'",
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].reference, "Preincrement_and_Predecrement");
        assert_eq!(out[0].line, 3);
    }

    #[test]
    fn prefix_form_is_clean() {
        let out = diagnostics(
            "`-FunctionDecl 0x2 </src/t.cc:1:1, line:5:1> line:1:6 Run 'void ()'\n\
             \x20 `-UnaryOperator 0x3 <line:3:8, col:9> 'std::vector<int>::iterator' prefix '++'",
        );
        assert!(out.is_empty());
    }
}
