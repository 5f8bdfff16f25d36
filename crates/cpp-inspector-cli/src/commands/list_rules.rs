//! List rules command implementation.

use cpp_inspector_rules::default_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<18} Description", "Name");
    println!("{}", "-".repeat(80));

    for rule in default_rules() {
        println!("{:<18} {}", rule.name(), rule.description());
    }

    println!("\nAll rules run by default. Use --rules to narrow the set, e.g.:");
    println!("  cpp-inspector check --rules class-decl,field-decl file.cc");
    println!("\nRules can also be disabled per project in cpp-inspector.toml:");
    println!("  [rules.c-style-cast]");
    println!("  enabled = false");
}
