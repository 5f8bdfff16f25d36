//! Core types for style diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use serde::Serialize;

use crate::node::NodeKind;

/// Base URL of the style guide that diagnostic references point into.
pub const STYLE_GUIDE_URL: &str = "https://google.github.io/styleguide/cppguide.html";

/// A located style violation produced by a rule check.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Resolved line number in the inspected file (0 when unresolvable).
    pub line: usize,
    /// Kind of the node the violation was found on.
    pub kind: NodeKind,
    /// Human-readable message.
    pub message: String,
    /// Style-guide section anchor (e.g. `Variable_Names`).
    pub reference: &'static str,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        line: usize,
        kind: NodeKind,
        message: impl Into<String>,
        reference: &'static str,
    ) -> Self {
        Self {
            line,
            kind,
            message: message.into(),
            reference,
        }
    }

    /// Full URL of the referenced style-guide section.
    #[must_use]
    pub fn reference_url(&self) -> String {
        format!("{STYLE_GUIDE_URL}#{}", self.reference)
    }

    /// Renders the diagnostic in the canonical single-line form.
    #[must_use]
    pub fn render(&self) -> String {
        format!("line {}: {} {}", self.line, self.message, self.reference_url())
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Converts a [`Diagnostic`] to a miette diagnostic for rich error display.
#[allow(dead_code)] // Public API for miette integration
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("line {line}: {message}")]
pub struct DiagnosticReport {
    line: usize,
    message: String,
    #[help]
    help: Option<String>,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(d: &Diagnostic) -> Self {
        Self {
            line: d.line,
            message: d.message.clone(),
            help: Some(format!("see {}", d.reference_url())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_canonical_form() {
        let d = Diagnostic::new(3, NodeKind::FieldDecl, "Data member should be private", "Access_Control");
        assert_eq!(
            d.render(),
            "line 3: Data member should be private \
             https://google.github.io/styleguide/cppguide.html#Access_Control"
        );
    }

    #[test]
    fn display_matches_render() {
        let d = Diagnostic::new(1, NodeKind::CStyleCast, "msg", "Casting");
        assert_eq!(format!("{d}"), d.render());
    }

    #[test]
    fn serializes_kind_as_clang_spelling() {
        let d = Diagnostic::new(2, NodeKind::RecordDecl, "msg", "Type_Names");
        let json = serde_json::to_value(&d).expect("serializable");
        assert_eq!(json["kind"], "CXXRecordDecl");
        assert_eq!(json["line"], 2);
    }

    #[test]
    fn report_carries_help_url() {
        let d = Diagnostic::new(4, NodeKind::VarDecl, "msg", "Variable_Names");
        let report = DiagnosticReport::from(&d);
        assert!(format!("{report}").contains("line 4"));
    }
}
