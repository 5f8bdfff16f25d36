//! Rule for data member naming.
//!
//! Member names are all lowercase with a trailing underscore (`count_`).
//! The two requirements are flagged independently.

use cpp_inspector_core::{Check, Diagnostic, Node, NodeKind, Rule};

use crate::support::is_all_lowercase;

/// Rule name for field-decl.
pub const NAME: &str = "field-decl";

/// Checks data member declarations anywhere in the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRule;

impl FieldRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FieldRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Data member names are lowercase with a trailing underscore"
    }

    fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        root.post_order()
            .filter(|n| n.kind == NodeKind::FieldDecl)
            .collect()
    }

    fn checks(&self) -> &[Check] {
        &[check_naming]
    }
}

fn check_naming(field: &Node, out: &mut Vec<Diagnostic>) {
    if field.name.is_empty() {
        return;
    }
    if !is_all_lowercase(&field.name) {
        out.push(Diagnostic::new(
            field.line,
            field.kind.clone(),
            "Data member name should be all lowercase",
            "Variable_Names",
        ));
    }
    if !field.name.ends_with('_') {
        out.push(Diagnostic::new(
            field.line,
            field.kind.clone(),
            "Data member name should end with '_'",
            "Variable_Names",
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
        FieldRule::new().run(&root, &mut out);
        out
    }

    fn class_with_field(name: &str) -> String {
        format!(
            "`-CXXRecordDecl 0x2 </src/t.cc:1:1, line:1:7> line:1:7 class Widget definition\n\
             \x20 `-FieldDecl 0x3 <line:2:3, col:7> col:7 {name} 'int'"
        )
    }

    #[test]
    fn conforming_name_is_clean() {
        assert!(diagnostics(&class_with_field("count_")).is_empty());
    }

    #[test]
    fn uppercase_with_trailing_underscore() {
        // kConstant_ satisfies the trailing underscore but not lowercase.
        let out = diagnostics(&class_with_field("kConstant_"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "Data member name should be all lowercase");
    }

    #[test]
    fn missing_trailing_underscore() {
        let out = diagnostics(&class_with_field("count"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "Data member name should end with '_'");
        assert_eq!(out[0].line, 2);
    }

    #[test]
    fn both_violations_flagged_independently() {
        let out = diagnostics(&class_with_field("Count"));
        assert_eq!(out.len(), 2);
    }
}
