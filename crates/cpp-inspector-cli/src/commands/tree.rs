//! Tree command implementation.
//!
//! Prints the decoded node tree for a source file, after header pruning and
//! location inheritance. Useful when writing or debugging rules.

use anyhow::{Context, Result};
use cpp_inspector_core::{build_tree, Node};
use std::path::Path;

use crate::frontend;

/// Runs the tree command.
pub fn run(file: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let dump = frontend::ast_dump(file, &config.frontend)
        .with_context(|| format!("Failed to obtain AST dump for {}", file.display()))?;

    let root = build_tree(&dump, &file.to_string_lossy());
    print_node(&root, 0);
    Ok(())
}

fn print_node(node: &Node, depth: usize) {
    let mut line = format!("{}{}", "  ".repeat(depth), node.kind);
    if !node.name.is_empty() {
        line.push_str(&format!(" {}", node.name));
    }
    if let Some(ty) = &node.ty {
        line.push_str(&format!(" '{ty}'"));
    }
    if node.line > 0 {
        line.push_str(&format!("  (line {})", node.line));
    }
    println!("{line}");

    for child in &node.children {
        print_node(child, depth + 1);
    }
}
