//! Rule for file-scope variable declarations.
//!
//! Literal-initialized constants follow the `kConstValue` convention,
//! everything else is all lowercase, and a trailing underscore is always a
//! violation. Separately, only primitive types may have static storage
//! duration at all.

use cpp_inspector_core::{Check, Diagnostic, Node, NodeKind, Rule, VarScope};

use crate::support::{
    is_all_lowercase, is_const_literal_decl, is_constant_name, unqualified_type, BASIC_DATA_TYPES,
};

/// Rule name for global-var.
pub const NAME: &str = "global-var";

/// Checks variable declarations at translation-unit level.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalVarRule;

impl GlobalVarRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for GlobalVarRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Global naming conventions; forbids non-primitive static storage"
    }

    fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        root.children
            .iter()
            .filter(|n| n.kind == NodeKind::VarDecl && n.scope == Some(VarScope::Global))
            .collect()
    }

    fn checks(&self) -> &[Check] {
        &[check_naming, check_storage_type]
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
            "Global variable name should be all lowercase",
            "Variable_Names",
        ));
    }
    // Flagged independently of the convention checks above.
    if var.name.ends_with('_') {
        out.push(Diagnostic::new(
            var.line,
            var.kind.clone(),
            "Global variable name should not end with '_'",
            "Variable_Names",
        ));
    }
}

fn check_storage_type(var: &Node, out: &mut Vec<Diagnostic>) {
    let Some(ty) = var.ty.as_deref() else {
        return;
    };
    if !BASIC_DATA_TYPES.contains(&unqualified_type(ty).as_str()) {
        out.push(Diagnostic::new(
            var.line,
            var.kind.clone(),
            "Objects with static storage duration are forbidden",
            "Static_and_Global_Variables",
        ));
    }
}
