//! # cpp-inspector-rules
//!
//! Built-in style rules for cpp-inspector.
//!
//! ## Available rules
//!
//! | Name | Selects | Checks |
//! |------|---------|--------|
//! | `field-decl` | data members, tree-wide | lowercase name, trailing underscore |
//! | `function-decl` | functions/methods, tree-wide | CamelCase name, const references, output parameter order |
//! | `c-style-cast` | cast expressions, tree-wide | always flagged |
//! | `sizeof-expr` | sizeof expressions, tree-wide | applied to a type instead of a variable |
//! | `unary-operator` | unary operators, tree-wide | postfix ++/-- outside primitive counters |
//! | `local-var` | block-scope variables, tree-wide | naming, constexpr constants, initialization |
//! | `global-var` | file-scope variables, top-level | naming, forbidden static storage types |
//! | `class-decl` | class declarations, top-level | member visibility, CamelCase name |
//!
//! ## Usage
//!
//! ```ignore
//! use cpp_inspector_core::Inspector;
//! use cpp_inspector_rules::default_rules;
//!
//! let mut builder = Inspector::builder();
//! for rule in default_rules() {
//!     builder = builder.rule_box(rule);
//! }
//! let inspector = builder.build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod c_style_cast;
mod class_decl;
mod field_decl;
mod function_decl;
mod global_var;
mod local_var;
mod sizeof_expr;
mod support;
mod unary_operator;

pub use c_style_cast::CStyleCastRule;
pub use class_decl::ClassRule;
pub use field_decl::FieldRule;
pub use function_decl::FunctionRule;
pub use global_var::GlobalVarRule;
pub use local_var::LocalVarRule;
pub use sizeof_expr::SizeofRule;
pub use unary_operator::UnaryOperatorRule;

use cpp_inspector_core::RuleBox;

/// Returns every built-in rule in its fixed registration order.
///
/// The order is part of the output contract: diagnostics are emitted
/// rule-major, so reordering this list reorders the sequence.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(FieldRule::new()),
        Box::new(FunctionRule::new()),
        Box::new(CStyleCastRule::new()),
        Box::new(SizeofRule::new()),
        Box::new(UnaryOperatorRule::new()),
        Box::new(LocalVarRule::new()),
        Box::new(GlobalVarRule::new()),
        Box::new(ClassRule::new()),
    ]
}

/// Looks up built-in rules by name, warning-free: unknown names yield `None`.
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    match name {
        field_decl::NAME => Some(Box::new(FieldRule::new())),
        function_decl::NAME => Some(Box::new(FunctionRule::new())),
        c_style_cast::NAME => Some(Box::new(CStyleCastRule::new())),
        sizeof_expr::NAME => Some(Box::new(SizeofRule::new())),
        unary_operator::NAME => Some(Box::new(UnaryOperatorRule::new())),
        local_var::NAME => Some(Box::new(LocalVarRule::new())),
        global_var::NAME => Some(Box::new(GlobalVarRule::new())),
        class_decl::NAME => Some(Box::new(ClassRule::new())),
        _ => None,
    }
}
