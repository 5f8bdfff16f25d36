//! Inspection engine orchestrating rule execution over a dump.

use tracing::{debug, info};

use crate::config::Config;
use crate::node::Node;
use crate::rule::{Rule, RuleBox};
use crate::tree::build_tree;
use crate::types::Diagnostic;

/// Builder for configuring an [`Inspector`].
#[derive(Default)]
pub struct InspectorBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl InspectorBuilder {
    /// Creates a new builder with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the inspector.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the inspector.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the inspector.
    #[must_use]
    pub fn build(self) -> Inspector {
        Inspector {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs registered rules over the tree decoded from a dump.
///
/// Use [`Inspector::builder()`] to construct an instance. The run is
/// synchronous and owns no state across runs; the diagnostic sequence for a
/// fixed dump and rule set is fully deterministic: rules run in registration
/// order, checks in declared order, selected nodes in selector order.
pub struct Inspector {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Inspector {
    /// Creates a new builder for configuring an inspector.
    #[must_use]
    pub fn builder() -> InspectorBuilder {
        InspectorBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Parses `dump` and runs all enabled rules, returning the ordered
    /// diagnostic sequence for `inspected_file`.
    #[must_use]
    pub fn run(&self, dump: &str, inspected_file: &str) -> Vec<Diagnostic> {
        let root = build_tree(dump, inspected_file);
        self.run_tree(&root)
    }

    /// Runs all enabled rules over an already-built tree.
    #[must_use]
    pub fn run_tree(&self, root: &Node) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            rule.run(root, &mut diagnostics);
        }

        info!(
            "Inspection complete: {} diagnostics from {} rules",
            diagnostics.len(),
            self.rules.len()
        );

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::rule::Check;

    struct CastRule;

    fn flag(node: &Node, out: &mut Vec<Diagnostic>) {
        out.push(Diagnostic::new(
            node.line,
            node.kind.clone(),
            "C style cast",
            "Casting",
        ));
    }

    impl Rule for CastRule {
        fn name(&self) -> &'static str {
            "c-style-cast"
        }

        fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
            root.post_order()
                .filter(|n| n.kind == NodeKind::CStyleCast)
                .collect()
        }

        fn checks(&self) -> &[Check] {
            &[flag]
        }
    }

    const DUMP: &str = "TranslationUnitDecl 0x1 <<invalid sloc>> <invalid sloc>\n\
        `-CStyleCastExpr 0x2 </src/x.cc:1:1, line:1:9> 'int' <NoOp>";

    #[test]
    fn runs_registered_rules() {
        let inspector = Inspector::builder().rule(CastRule).build();
        let diagnostics = inspector.run(DUMP, "/src/x.cc");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 1);
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let config = Config::parse("[rules.c-style-cast]\nenabled = false")
            .expect("valid toml");
        let inspector = Inspector::builder().rule(CastRule).config(config).build();
        assert!(inspector.run(DUMP, "/src/x.cc").is_empty());
    }

    #[test]
    fn deterministic_across_runs() {
        let inspector = Inspector::builder().rule(CastRule).build();
        let first: Vec<String> = inspector
            .run(DUMP, "/src/x.cc")
            .iter()
            .map(Diagnostic::render)
            .collect();
        let second: Vec<String> = inspector
            .run(DUMP, "/src/x.cc")
            .iter()
            .map(Diagnostic::render)
            .collect();
        assert_eq!(first, second);
    }
}
