//! Decoded dump nodes and the kind-specific line decoder.
//!
//! Each dump line starts with a node-kind keyword followed by a layout that
//! depends on the kind. Decoding is strictly best-effort: a line that does
//! not match the expected shape for its kind produces a node with default
//! (empty/unset) fields rather than an error, so one odd line never aborts
//! an inspection run.

use serde::{Serialize, Serializer};

use crate::location::{parse_location, LocationFacts};

/// The closed set of node kinds the inspector recognizes.
///
/// Unrecognized keywords land in [`NodeKind::Other`] with the raw keyword
/// preserved, so future clang output degrades instead of crashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of the dump (`TranslationUnitDecl`).
    TranslationUnit,
    /// `CXXRecordDecl` - class/struct declaration.
    RecordDecl,
    /// `AccessSpecDecl` - `public:`/`protected:`/`private:` marker.
    AccessSpec,
    /// `FunctionDecl` - free function declaration.
    FunctionDecl,
    /// `CXXMethodDecl` - member function declaration.
    MethodDecl,
    /// `FieldDecl` - data member declaration.
    FieldDecl,
    /// `VarDecl` - variable declaration.
    VarDecl,
    /// `ParmVarDecl` - function parameter declaration.
    ParmDecl,
    /// `UnaryOperator` - e.g. `postfix '++'`.
    UnaryOperator,
    /// `UnaryExprOrTypeTraitExpr` - `sizeof`/`alignof` expression.
    UnaryExprOrTypeTrait,
    /// `CStyleCastExpr` - `(int)x` style cast.
    CStyleCast,
    /// `IntegerLiteral` initializer.
    IntegerLiteral,
    /// `FloatingLiteral` initializer.
    FloatingLiteral,
    /// Allocation/deallocation operator functions excluded from inspection.
    NotInspected,
    /// Any other kind keyword, kept verbatim.
    Other(String),
}

impl NodeKind {
    /// The clang spelling of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::TranslationUnit => "TranslationUnitDecl",
            Self::RecordDecl => "CXXRecordDecl",
            Self::AccessSpec => "AccessSpecDecl",
            Self::FunctionDecl => "FunctionDecl",
            Self::MethodDecl => "CXXMethodDecl",
            Self::FieldDecl => "FieldDecl",
            Self::VarDecl => "VarDecl",
            Self::ParmDecl => "ParmVarDecl",
            Self::UnaryOperator => "UnaryOperator",
            Self::UnaryExprOrTypeTrait => "UnaryExprOrTypeTraitExpr",
            Self::CStyleCast => "CStyleCastExpr",
            Self::IntegerLiteral => "IntegerLiteral",
            Self::FloatingLiteral => "FloatingLiteral",
            Self::NotInspected => "NotInspected",
            Self::Other(raw) => raw,
        }
    }

    fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "TranslationUnitDecl" => Self::TranslationUnit,
            "CXXRecordDecl" => Self::RecordDecl,
            "AccessSpecDecl" => Self::AccessSpec,
            "FunctionDecl" => Self::FunctionDecl,
            "CXXMethodDecl" => Self::MethodDecl,
            "FieldDecl" => Self::FieldDecl,
            "VarDecl" => Self::VarDecl,
            "ParmVarDecl" => Self::ParmDecl,
            "UnaryOperator" => Self::UnaryOperator,
            "UnaryExprOrTypeTraitExpr" => Self::UnaryExprOrTypeTrait,
            "CStyleCastExpr" => Self::CStyleCast,
            "IntegerLiteral" => Self::IntegerLiteral,
            "FloatingLiteral" => Self::FloatingLiteral,
            other => Self::Other(other.to_string()),
        }
    }

    /// True for function and method declarations.
    #[must_use]
    pub fn is_function_like(&self) -> bool {
        matches!(self, Self::FunctionDecl | Self::MethodDecl)
    }

    /// True for integer and floating literal initializers.
    #[must_use]
    pub fn is_numeric_literal(&self) -> bool {
        matches!(self, Self::IntegerLiteral | Self::FloatingLiteral)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Whether a variable declaration lives at file/namespace or block level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarScope {
    /// File/namespace-level storage.
    Global,
    /// Block-level storage.
    Local,
}

/// Accessibility spelled by an access-specifier node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `public:`
    Public,
    /// `protected:`
    Protected,
    /// `private:`
    Private,
}

impl Access {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

/// Operator spellings that downgrade a function declaration to
/// [`NodeKind::NotInspected`].
const ALLOC_OPERATORS: [&str; 4] = ["new", "delete", "new[]", "delete[]"];

/// One decoded entry of the dump tree.
///
/// Nodes are created once during tree construction and immutable afterwards.
/// `line` and `file` are the *resolved* location; the tree builder fills them
/// in from ancestors when the line itself carried none.
#[derive(Debug, Clone)]
pub struct Node {
    /// Decoded node kind.
    pub kind: NodeKind,
    /// Identifier or operator spelling, empty when not applicable.
    pub name: String,
    /// Type spelling with surrounding quotes stripped, when applicable.
    pub ty: Option<String>,
    /// Variable scope, variable declarations only.
    pub scope: Option<VarScope>,
    /// Spelled accessibility, access-specifier nodes only.
    pub access: Option<Access>,
    /// Resolved line number (0 when unresolvable).
    pub line: usize,
    /// Resolved origin file.
    pub file: Option<String>,
    /// The dump line this node was decoded from, indentation stripped.
    pub raw: String,
    /// Retained children, in dump (= source) order.
    pub children: Vec<Node>,
}

impl Node {
    /// Decodes a single dump line, already stripped of leading indentation.
    ///
    /// `parent_kind` is the kind of the node this line nests under; it is
    /// only consulted to derive variable scope. Location facts are left
    /// unresolved here (see [`crate::tree::build_tree`]).
    #[must_use]
    pub fn decode(text: &str, parent_kind: Option<&NodeKind>) -> Self {
        let words: Vec<&str> = text.split_whitespace().collect();
        let keyword = words.first().copied().unwrap_or_default();
        let mut kind = NodeKind::from_keyword(keyword);

        let mut name = String::new();
        let mut ty = None;
        let mut scope = None;
        let mut access = None;

        match kind {
            NodeKind::FieldDecl => {
                if let [.., n, t] = words.as_slice() {
                    name = (*n).to_string();
                    ty = Some(unquote(t).to_string());
                }
            }
            NodeKind::UnaryOperator => {
                if words.len() >= 4 {
                    name = format!("{} {}", words[words.len() - 2], words[words.len() - 1]);
                    ty = Some(unquote(words[words.len() - 3]).to_string());
                }
            }
            NodeKind::VarDecl => {
                ty = first_quoted(text).map(str::to_string);
                name = name_before_signature(text);
                scope = Some(match parent_kind {
                    Some(NodeKind::TranslationUnit) => VarScope::Global,
                    _ => VarScope::Local,
                });
            }
            NodeKind::RecordDecl => {
                if words.len() >= 3 {
                    name = words[words.len() - 2].to_string();
                }
            }
            NodeKind::AccessSpec => {
                if let Some(last) = words.last() {
                    name = unquote(last).to_string();
                    access = Access::from_keyword(&name);
                }
            }
            NodeKind::FunctionDecl | NodeKind::MethodDecl => {
                name = name_before_signature(text);
            }
            NodeKind::ParmDecl => {
                ty = first_quoted(text).map(str::to_string);
                name = name_before_signature(text);
            }
            _ => {
                if words.len() > 1 {
                    name = words[1..].join(" ");
                }
            }
        }

        if kind.is_function_like() && ALLOC_OPERATORS.contains(&name.as_str()) {
            kind = NodeKind::NotInspected;
        }

        Self {
            kind,
            name,
            ty,
            scope,
            access,
            line: 0,
            file: None,
            raw: text.to_string(),
            children: Vec::new(),
        }
    }

    /// Location facts carried by this node's own line.
    #[must_use]
    pub fn own_location(&self) -> LocationFacts {
        parse_location(&self.raw)
    }

    /// Depth-first post-order traversal: children before their parent, the
    /// node itself last.
    #[must_use]
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder {
            stack: vec![(self, 0)],
        }
    }
}

/// Iterator over a subtree in depth-first post-order.
pub struct PostOrder<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        loop {
            let (node, next_child) = self.stack.last_mut()?;
            if let Some(child) = node.children.get(*next_child) {
                *next_child += 1;
                self.stack.push((child, 0));
            } else {
                let (node, _) = self.stack.pop()?;
                return Some(node);
            }
        }
    }
}

/// Contents of the first single-quoted segment of the line, if any.
fn first_quoted(text: &str) -> Option<&str> {
    let start = text.find('\'')?;
    let rest = &text[start + 1..];
    let end = rest.find('\'')?;
    Some(&rest[..end])
}

/// The identifier directly preceding the quoted type signature.
///
/// Clang prints `... <locations> used name 'type signature' ...` for
/// functions, parameters, and variables: the display name is the last
/// whitespace token before the first quote. Without a quote the last token
/// of the whole line is the best available fallback.
fn name_before_signature(text: &str) -> String {
    let head = match text.find('\'') {
        Some(idx) => &text[..idx],
        None => text,
    };
    head.split_whitespace().last().unwrap_or_default().to_string()
}

fn unquote(s: &str) -> &str {
    s.trim_matches('\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_field() {
        let node = Node::decode(
            "FieldDecl 0x1f4a <line:3:3, col:7> col:7 count_ 'int'",
            Some(&NodeKind::RecordDecl),
        );
        assert_eq!(node.kind, NodeKind::FieldDecl);
        assert_eq!(node.name, "count_");
        assert_eq!(node.ty.as_deref(), Some("int"));
    }

    #[test]
    fn decodes_record() {
        let node = Node::decode(
            "CXXRecordDecl 0x1f00 <foo.cc:1:1, line:4:1> line:1:7 class FooBar definition",
            Some(&NodeKind::TranslationUnit),
        );
        assert_eq!(node.kind, NodeKind::RecordDecl);
        assert_eq!(node.name, "FooBar");
    }

    #[test]
    fn decodes_access_spec() {
        let node = Node::decode(
            "AccessSpecDecl 0x2000 <line:2:1, col:7> col:1 public",
            Some(&NodeKind::RecordDecl),
        );
        assert_eq!(node.kind, NodeKind::AccessSpec);
        assert_eq!(node.name, "public");
        assert_eq!(node.access, Some(Access::Public));
    }

    #[test]
    fn decodes_function_with_signature() {
        let node = Node::decode(
            "FunctionDecl 0x2100 <line:6:1, line:8:1> line:6:6 used Compute 'void (int *, int)'",
            Some(&NodeKind::TranslationUnit),
        );
        assert_eq!(node.kind, NodeKind::FunctionDecl);
        assert_eq!(node.name, "Compute");
    }

    #[test]
    fn operator_new_is_not_inspected() {
        let node = Node::decode(
            "FunctionDecl 0x2200 <<invalid sloc>> <invalid sloc> implicit operator new 'void *(unsigned long)'",
            Some(&NodeKind::TranslationUnit),
        );
        assert_eq!(node.kind, NodeKind::NotInspected);
    }

    #[test]
    fn decodes_parameter() {
        let node = Node::decode(
            "ParmVarDecl 0x2300 <col:14, col:19> col:19 out 'int *'",
            Some(&NodeKind::FunctionDecl),
        );
        assert_eq!(node.kind, NodeKind::ParmDecl);
        assert_eq!(node.name, "out");
        assert_eq!(node.ty.as_deref(), Some("int *"));
    }

    #[test]
    fn var_scope_follows_parent() {
        let global = Node::decode(
            "VarDecl 0x2400 <foo.cc:1:1, col:17> col:11 max 'const int' cinit",
            Some(&NodeKind::TranslationUnit),
        );
        assert_eq!(global.scope, Some(VarScope::Global));
        assert_eq!(global.name, "max");
        assert_eq!(global.ty.as_deref(), Some("const int"));

        let local = Node::decode(
            "VarDecl 0x2500 <col:3, col:11> col:7 i 'int' cinit",
            Some(&NodeKind::Other("CompoundStmt".to_string())),
        );
        assert_eq!(local.scope, Some(VarScope::Local));
    }

    #[test]
    fn decodes_unary_operator() {
        let node = Node::decode(
            "UnaryOperator 0x2600 <col:3, col:4> 'int' postfix '++'",
            None,
        );
        assert_eq!(node.kind, NodeKind::UnaryOperator);
        assert_eq!(node.name, "postfix '++'");
        assert_eq!(node.ty.as_deref(), Some("int"));
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let node = Node::decode("CompoundStmt 0x2700 <col:20, line:8:1>", None);
        assert_eq!(node.kind, NodeKind::Other("CompoundStmt".to_string()));
    }

    #[test]
    fn malformed_line_degrades() {
        let node = Node::decode("FieldDecl", None);
        assert_eq!(node.kind, NodeKind::FieldDecl);
        assert!(node.name.is_empty());
        assert!(node.ty.is_none());
    }

    #[test]
    fn post_order_children_first() {
        let mut root = Node::decode("TranslationUnitDecl", None);
        let mut a = Node::decode("A 1", None);
        a.children.push(Node::decode("B 2", None));
        root.children.push(a);
        root.children.push(Node::decode("C 3", None));

        let names: Vec<&str> = root.post_order().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["2", "1", "3", ""]);
    }
}
