//! Rule for block-scope variable declarations.
//!
//! Literal-initialized constants follow the `kConstValue` convention and
//! should be `constexpr`; other locals are all lowercase without a trailing
//! underscore; and every local is initialized where it is declared.

use cpp_inspector_core::{Check, Diagnostic, Node, NodeKind, Rule, VarScope};

use crate::support::{is_all_lowercase, is_const_literal_decl, is_constant_name};

/// Rule name for local-var.
pub const NAME: &str = "local-var";

/// Checks block-scope variable declarations anywhere in the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalVarRule;

impl LocalVarRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for LocalVarRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Local naming conventions, constexpr constants, mandatory initialization"
    }

    fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        root.post_order()
            .filter(|n| n.kind == NodeKind::VarDecl && n.scope == Some(VarScope::Local))
            .collect()
    }

    fn checks(&self) -> &[Check] {
        &[check_naming, check_constexpr, check_initialized]
    }
}

fn check_naming(var: &Node, out: &mut Vec<Diagnostic>) {
    if var.name.is_empty() {
        return;
    }
    if is_const_literal_decl(var) {
        if !is_constant_name(&var.name) {
            out.push(Diagnostic::new(
                var.line,
                var.kind.clone(),
                "Static const variable name should be like `kConstValue`",
                "Variable_Names",
            ));
        }
    } else if !is_all_lowercase(&var.name) {
        out.push(Diagnostic::new(
            var.line,
            var.kind.clone(),
            "Local variable name should be all lowercase",
            "Variable_Names",
        ));
    }
    // Flagged independently of the convention checks above.
    if var.name.ends_with('_') {
        out.push(Diagnostic::new(
            var.line,
            var.kind.clone(),
            "Local variable name should not end with '_'",
            "Variable_Names",
        ));
    }
}

/// A true constant should be `constexpr`, which clang echoes in the
/// declaration's dump line.
fn check_constexpr(var: &Node, out: &mut Vec<Diagnostic>) {
    if is_const_literal_decl(var) && !var.raw.contains("constexpr") {
        out.push(Diagnostic::new(
            var.line,
            var.kind.clone(),
            "Use constexpr to define true constants",
            "Use_of_constexpr",
        ));
    }
}

/// A declaration with no initializer expression has no children in the dump.
fn check_initialized(var: &Node, out: &mut Vec<Diagnostic>) {
    if var.children.is_empty() {
        out.push(Diagnostic::new(
            var.line,
            var.kind.clone(),
            "Initialization should not be separated from declaration",
            "Local_Variables",
        ));
    }
}
