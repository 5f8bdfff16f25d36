//! Rule forbidding C-style casts.
//!
//! Every occurrence is flagged; the named cast forms (`static_cast`,
//! `const_cast`, `reinterpret_cast`) say what the conversion is allowed to
//! do, a C-style cast says nothing.

use cpp_inspector_core::{Check, Diagnostic, Node, NodeKind, Rule};

/// Rule name for c-style-cast.
pub const NAME: &str = "c-style-cast";

/// Flags every C-style cast expression in the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct CStyleCastRule;

impl CStyleCastRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CStyleCastRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forbids C style casts in favor of named casts"
    }

    fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        root.post_order()
            .filter(|n| n.kind == NodeKind::CStyleCast)
            .collect()
    }

    fn checks(&self) -> &[Check] {
        &[check_cast]
    }
}

fn check_cast(cast: &Node, out: &mut Vec<Diagnostic>) {
    out.push(Diagnostic::new(
        cast.line,
        cast.kind.clone(),
        "Use C++ style cast 'static_cast<int>' instead of C style cast '(int)'",
        "Casting",
    ));
}
