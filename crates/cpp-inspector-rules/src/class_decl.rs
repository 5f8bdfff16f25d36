//! Rule for class declarations: member visibility and naming.
//!
//! Data members must sit behind a `private:` specifier, and class names use
//! CamelCase (leading uppercase, no underscores). Only top-level class
//! declarations are considered.

use cpp_inspector_core::{Access, Check, Diagnostic, Node, NodeKind, Rule};

use crate::support::flag_non_camel_case;

/// Rule name for class-decl.
pub const NAME: &str = "class-decl";

/// Checks top-level class declarations for member visibility and naming.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassRule;

impl ClassRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ClassRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Data members must be private; class names use CamelCase"
    }

    fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        root.children
            .iter()
            .filter(|n| n.kind == NodeKind::RecordDecl)
            .collect()
    }

    fn checks(&self) -> &[Check] {
        &[check_member_visibility, check_naming]
    }
}

/// Walks the class body in declaration order, tracking the accessibility in
/// effect (classes start `public` as far as this check is concerned), and
/// flags every data member that is not private.
fn check_member_visibility(class: &Node, out: &mut Vec<Diagnostic>) {
    let mut current = Access::Public;
    for child in &class.children {
        if child.kind == NodeKind::AccessSpec {
            if let Some(access) = child.access {
                current = access;
            }
        }
        if child.kind == NodeKind::FieldDecl && current != Access::Private {
            out.push(Diagnostic::new(
                child.line,
                child.kind.clone(),
                "Data member should be private",
                "Access_Control",
            ));
        }
    }
}

fn check_naming(class: &Node, out: &mut Vec<Diagnostic>) {
    flag_non_camel_case(class, "Class name should be CamelCase", "Type_Names", out);
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
        ClassRule::new().run(&root, &mut out);
        out
    }

    #[test]
    fn public_field_in_lowercase_class() {
        // class foo_bar { public: int x; };
        let out = diagnostics(
            "`-CXXRecordDecl 0x2 </src/t.cc:1:1, line:1:7> line:1:7 class foo_bar definition\n\
             \x20 |-AccessSpecDecl 0x3 <line:1:17, col:23> col:17 public\n\
             \x20 `-FieldDecl 0x4 <line:2:3, col:7> col:7 x 'int'",
        );
        assert_eq!(out.len(), 3);
        // Visibility first (first declared check), then both naming flags.
        assert_eq!(out[0].line, 2);
        assert_eq!(out[0].reference, "Access_Control");
        assert_eq!(out[1].line, 1);
        assert_eq!(out[1].reference, "Type_Names");
        assert_eq!(out[2].line, 1);
    }

    #[test]
    fn private_field_is_clean() {
        let out = diagnostics(
            "`-CXXRecordDecl 0x2 </src/t.cc:1:1, line:1:7> line:1:7 class FooBar definition\n\
             \x20 |-AccessSpecDecl 0x3 <line:2:1, col:8> col:1 private\n\
             \x20 `-FieldDecl 0x4 <line:3:3, col:7> col:7 x_ 'int'",
        );
        assert!(out.is_empty());
    }

    #[test]
    fn protected_field_is_flagged() {
        let out = diagnostics(
            "`-CXXRecordDecl 0x2 </src/t.cc:1:1, line:1:7> line:1:7 class FooBar definition\n\
             \x20 |-AccessSpecDecl 0x3 <line:2:1, col:11> col:1 protected\n\
             \x20 `-FieldDecl 0x4 <line:3:3, col:7> col:7 x_ 'int'",
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].reference, "Access_Control");
    }

    #[test]
    fn nested_classes_are_not_selected() {
        // Only direct children of the translation unit are considered.
        let out = diagnostics(
            "`-FunctionDecl 0x2 </src/t.cc:1:1, line:9:1> line:1:6 Run 'void ()'\n\
             \x20 `-CXXRecordDecl 0x3 <line:2:3, line:4:3> line:2:9 class bad_name definition",
        );
        assert!(out.is_empty());
    }
}
