//! Shared helpers for naming and type checks.

use cpp_inspector_core::{Diagnostic, Node};

/// Primitive types allowed for objects with static storage duration.
pub(crate) const BASIC_DATA_TYPES: [&str; 6] = ["int", "size_t", "bool", "char", "float", "double"];

/// True when the name contains no uppercase letters.
pub(crate) fn is_all_lowercase(name: &str) -> bool {
    !name.chars().any(char::is_uppercase)
}

/// The `kConstValue` constant-naming convention: at least two characters,
/// leading `k`, second character not lowercase, no underscores.
pub(crate) fn is_constant_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('k')
        && chars.next().is_some_and(|c| !c.is_lowercase())
        && !name.contains('_')
}

/// True for a `const`-qualified declaration initialized directly by an
/// integer or floating literal.
pub(crate) fn is_const_literal_decl(node: &Node) -> bool {
    node.ty.as_deref().is_some_and(|ty| ty.contains("const"))
        && node
            .children
            .first()
            .is_some_and(|child| child.kind.is_numeric_literal())
}

/// Type spelling with cv and storage qualifier tokens removed.
pub(crate) fn unqualified_type(ty: &str) -> String {
    ty.split_whitespace()
        .filter(|token| !matches!(*token, "const" | "volatile" | "constexpr" | "static"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flags a declaration whose name is not CamelCase: one diagnostic when the
/// first character is lowercase, another when the name contains an
/// underscore. An empty name cannot be evaluated and is left alone.
pub(crate) fn flag_non_camel_case(
    node: &Node,
    message: &str,
    reference: &'static str,
    out: &mut Vec<Diagnostic>,
) {
    let Some(first) = node.name.chars().next() else {
        return;
    };
    if first.is_lowercase() {
        out.push(Diagnostic::new(
            node.line,
            node.kind.clone(),
            message,
            reference,
        ));
    }
    if node.name.contains('_') {
        out.push(Diagnostic::new(
            node.line,
            node.kind.clone(),
            message,
            reference,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_name_convention() {
        assert!(is_constant_name("kConstValue"));
        assert!(is_constant_name("kMax"));
        assert!(is_constant_name("k2pi"));
        assert!(!is_constant_name("k"));
        assert!(!is_constant_name("kvalue"));
        assert!(!is_constant_name("Kvalue"));
        assert!(!is_constant_name("MAX"));
        assert!(!is_constant_name("kConst_Value"));
        assert!(!is_constant_name(""));
    }

    #[test]
    fn lowercase_check_ignores_digits_and_underscores() {
        assert!(is_all_lowercase("count_2"));
        assert!(!is_all_lowercase("kConstant_"));
    }

    #[test]
    fn strips_qualifiers() {
        assert_eq!(unqualified_type("const int"), "int");
        assert_eq!(unqualified_type("int"), "int");
        assert_eq!(unqualified_type("static const std::string"), "std::string");
        assert_eq!(unqualified_type("const char *"), "char *");
    }
}
