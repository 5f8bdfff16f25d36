//! Check command implementation.

use anyhow::{Context, Result};
use cpp_inspector_core::{Inspector, RuleBox};
use cpp_inspector_rules::{default_rules, rule_by_name};
use std::path::Path;

use crate::frontend;

use super::output::OutputFormat;

/// Runs the check command.
pub fn run(
    file: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = super::load_config(config_path)?;

    let dump = frontend::ast_dump(file, &config.frontend)
        .with_context(|| format!("Failed to obtain AST dump for {}", file.display()))?;

    let mut builder = Inspector::builder().config(config);
    for rule in select_rules(rules_filter) {
        builder = builder.rule_box(rule);
    }
    let inspector = builder.build();

    tracing::info!(
        "Inspecting {} with {} rules",
        file.display(),
        inspector.rule_count()
    );

    let diagnostics = inspector.run(&dump, &file.to_string_lossy());

    super::output::print(&diagnostics, file, format)?;

    if !diagnostics.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn select_rules(rules_filter: Option<String>) -> Vec<RuleBox> {
    let Some(filter) = rules_filter else {
        return default_rules();
    };

    let mut rules = Vec::new();
    for name in filter.split(',').map(str::trim) {
        match rule_by_name(name) {
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }
    rules
}
