//! Rule for `sizeof` applied to a type.
//!
//! `sizeof(varname)` keeps working when the variable's type changes;
//! `sizeof(type)` silently goes stale. A size-of-type expression has no
//! child expression in the dump, which is how the two are told apart.

use cpp_inspector_core::{Check, Diagnostic, Node, NodeKind, Rule};

/// Rule name for sizeof-expr.
pub const NAME: &str = "sizeof-expr";

/// Checks size/type-trait expressions anywhere in the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeofRule;

impl SizeofRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SizeofRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Prefers sizeof(varname) to sizeof(type)"
    }

    fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        root.post_order()
            .filter(|n| n.kind == NodeKind::UnaryExprOrTypeTrait)
            .collect()
    }

    fn checks(&self) -> &[Check] {
        &[check_target]
    }
}

fn check_target(expr: &Node, out: &mut Vec<Diagnostic>) {
    if expr.children.is_empty() {
        out.push(Diagnostic::new(
            expr.line,
            expr.kind.clone(),
            "Prefer sizeof(varname) to sizeof(type)",
            "sizeof",
        ));
    }
}
