//! Rule trait for defining style rules.

use crate::node::Node;
use crate::types::Diagnostic;

/// One check: inspects a selected node and appends any violations.
///
/// Checks must never fail for a node their rule selected; a check that
/// cannot evaluate its condition (empty name, missing type) treats the node
/// as conforming.
pub type Check = fn(&Node, &mut Vec<Diagnostic>);

/// A structural style rule over the decoded dump tree.
///
/// A rule is a selection predicate plus an ordered list of checks. Running
/// a rule means running every check, in declared order, over every node the
/// selector yields, in selector order. Rules are independent: a rule's
/// diagnostics never influence another rule's traversal or results.
///
/// # Example
///
/// ```ignore
/// use cpp_inspector_core::{Check, Diagnostic, Node, NodeKind, Rule};
///
/// pub struct CStyleCast;
///
/// impl Rule for CStyleCast {
///     fn name(&self) -> &'static str { "c-style-cast" }
///
///     fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
///         root.post_order()
///             .filter(|n| n.kind == NodeKind::CStyleCast)
///             .collect()
///     }
///
///     fn checks(&self) -> &[Check] {
///         &[checks::flag_cast]
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "c-style-cast").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Selects the nodes this rule inspects.
    ///
    /// Top-level rules yield the root's direct children in declaration
    /// order; tree-wide rules yield the whole tree depth-first post-order
    /// (children before their parent).
    fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node>;

    /// The rule's checks, in the order they run.
    fn checks(&self) -> &[Check];

    /// Runs every check over every selected node, appending diagnostics.
    fn run(&self, root: &Node, diagnostics: &mut Vec<Diagnostic>) {
        for check in self.checks() {
            for node in self.select(root) {
                check(node, diagnostics);
            }
        }
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
