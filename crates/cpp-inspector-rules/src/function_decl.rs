//! Rule for function and method declarations.
//!
//! Functions use CamelCase names, reference parameters must be
//! const-qualified, and output (pointer) parameters trail all input
//! parameters.

use cpp_inspector_core::{Check, Diagnostic, Node, NodeKind, Rule};

use crate::support::flag_non_camel_case;

/// Rule name for function-decl.
pub const NAME: &str = "function-decl";

/// Checks function and method declarations anywhere in the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionRule;

impl FunctionRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FunctionRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Function naming, const reference parameters, output parameter order"
    }

    fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        root.post_order()
            .filter(|n| n.kind.is_function_like())
            .collect()
    }

    fn checks(&self) -> &[Check] {
        &[check_naming, check_reference_params, check_param_order]
    }
}

fn check_naming(func: &Node, out: &mut Vec<Diagnostic>) {
    flag_non_camel_case(func, "Function name should be CamelCase", "Function_Names", out);
}

/// A parameter taken by reference must be const: `const T&` passes,
/// plain `T&` is flagged. The diagnostic points at the function.
fn check_reference_params(func: &Node, out: &mut Vec<Diagnostic>) {
    for param in params(func) {
        let Some(ty) = param.ty.as_deref() else {
            continue;
        };
        if ty.contains('&') && !ty.contains("const") {
            out.push(Diagnostic::new(
                func.line,
                func.kind.clone(),
                "Reference parameters should be declared 'const'",
                "Variable_Names",
            ));
        }
    }
}

/// Once a pointer-typed parameter has been seen left-to-right, every later
/// non-pointer parameter is an input following an output.
fn check_param_order(func: &Node, out: &mut Vec<Diagnostic>) {
    let mut pointer_seen = false;
    for param in params(func) {
        let is_pointer = param.ty.as_deref().is_some_and(|ty| ty.contains('*'));
        if pointer_seen && !is_pointer {
            out.push(Diagnostic::new(
                func.line,
                func.kind.clone(),
                "Output parameters should appear after input parameters",
                "Output_Parameters",
            ));
        }
        if is_pointer {
            pointer_seen = true;
        }
    }
}

fn params(func: &Node) -> impl Iterator<Item = &Node> {
    func.children
        .iter()
        .filter(|child| child.kind == NodeKind::ParmDecl)
}
