//! Reconstruction of the node tree from raw dump text.
//!
//! Clang nests the dump by indenting each line with marker characters
//! (`|-`, `` `- ``, spaces). The nesting depth of a line is the byte index
//! of its first ASCII-uppercase character (every kind keyword starts with
//! one) divided by the fixed marker width of 2. Depth 0 is reserved for the
//! `TranslationUnitDecl` root and must never recur.
//!
//! Nodes whose resolved origin file differs from the inspected file come
//! from headers and are pruned together with their entire subtree.

use tracing::{debug, warn};

use crate::node::{Node, NodeKind};

/// Width in bytes of one nesting marker step.
pub const MARKER_WIDTH: usize = 2;

/// Builds the pruned node tree for `inspected_file` from full dump text.
///
/// Lines preceding the translation-unit marker (compiler diagnostics,
/// warnings) are discarded. A dump without the marker degrades to an empty
/// root, which produces zero diagnostics downstream.
#[must_use]
pub fn build_tree(dump: &str, inspected_file: &str) -> Node {
    let mut lines = dump.lines();
    let root_line = lines.find(|l| l.starts_with("TranslationUnitDecl"));

    let mut root = match root_line {
        Some(line) => Node::decode(line, None),
        None => {
            warn!("dump contains no TranslationUnitDecl marker, yielding empty tree");
            Node::decode("TranslationUnitDecl", None)
        }
    };
    let facts = root.own_location();
    root.line = facts.line.unwrap_or(0);
    root.file = facts.file;

    // Frontier: one entry per depth on the path to the most recent retained
    // node, strictly increasing depth, root at the bottom.
    let mut frontier: Vec<(usize, Node)> = vec![(0, root)];

    // Last resolved origin file seen at each depth. Unlike the frontier this
    // survives pruning, so a sibling that omits its file inherits the
    // excluded file instead of a retained ancestor's.
    let mut file_at_depth: Vec<Option<String>> = Vec::new();

    for line in lines {
        let Some(offset) = line.find(|c: char| c.is_ascii_uppercase()) else {
            continue;
        };
        let depth = offset / MARKER_WIDTH;
        if depth == 0 {
            warn!("second top-level line in dump, skipping: {line}");
            continue;
        }

        // Close every frontier entry at this depth or deeper.
        while frontier.last().is_some_and(|(d, _)| *d >= depth) {
            attach_top(&mut frontier);
        }

        let parent_depth = frontier.last().map(|(d, _)| *d);
        if parent_depth != Some(depth - 1) {
            // Either the true parent was pruned or the depth jumped by more
            // than one step; the line and everything nested under it are
            // skipped.
            debug!("no parent at depth {}, skipping: {line}", depth - 1);
            continue;
        }

        let text = &line[offset..];
        let parent = frontier.last().map(|(_, n)| n);
        let mut node = Node::decode(text, parent.map(|n| &n.kind));

        let facts = node.own_location();
        node.line = facts
            .line
            .unwrap_or_else(|| parent.map_or(0, |p| p.line));
        node.file = facts
            .file
            .or_else(|| file_at_depth.get(depth).cloned().flatten())
            .or_else(|| parent.and_then(|p| p.file.clone()));

        if let Some(file) = &node.file {
            if file_at_depth.len() <= depth {
                file_at_depth.resize(depth + 1, None);
            }
            file_at_depth[depth] = Some(file.clone());
        }

        if node.file.as_deref() != Some(inspected_file) {
            debug!(
                "pruning {} from {:?} (inspecting {inspected_file})",
                node.kind, node.file
            );
            continue;
        }

        frontier.push((depth, node));
    }

    // Close everything still open.
    while frontier.len() > 1 {
        attach_top(&mut frontier);
    }
    let (_, root) = frontier.remove(0);
    root
}

/// Pops the top frontier entry and attaches it to the entry below.
fn attach_top(frontier: &mut Vec<(usize, Node)>) {
    if frontier.len() < 2 {
        return;
    }
    if let Some((_, node)) = frontier.pop() {
        if let Some((_, parent)) = frontier.last_mut() {
            parent.children.push(node);
        }
    }
}

/// True when the node is the synthetic translation-unit root.
#[must_use]
pub fn is_root(node: &Node) -> bool {
    node.kind == NodeKind::TranslationUnit
}
