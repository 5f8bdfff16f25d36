//! # cpp-inspector-core
//!
//! Core framework for C++ style inspection driven by clang AST dump text.
//!
//! The pipeline has two stages:
//!
//! 1. [`build_tree`] parses the indentation-structured dump into a tree of
//!    typed [`Node`]s, inheriting source locations down the tree and pruning
//!    everything that originates from included headers.
//! 2. [`Inspector`] runs a registry of independent [`Rule`]s over the tree,
//!    accumulating ordered [`Diagnostic`]s.
//!
//! ## Example
//!
//! ```ignore
//! use cpp_inspector_core::Inspector;
//!
//! let inspector = Inspector::builder()
//!     .rule(MyRule)
//!     .build();
//!
//! for diagnostic in inspector.run(&dump_text, "/src/foo.cc") {
//!     println!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod location;
mod node;
mod rule;
mod tree;
mod types;

pub use config::{Config, ConfigError, FrontEndConfig, RuleConfig};
pub use engine::{Inspector, InspectorBuilder};
pub use location::{parse_location, LocationFacts};
pub use node::{Access, Node, NodeKind, PostOrder, VarScope};
pub use rule::{Check, Rule, RuleBox};
pub use tree::{build_tree, is_root, MARKER_WIDTH};
pub use types::{Diagnostic, DiagnosticReport, STYLE_GUIDE_URL};
