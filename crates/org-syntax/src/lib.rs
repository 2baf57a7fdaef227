//! Org syntax tree: kinds, the rowan language binding, relation primitives
//! and the generated typed AST.
//!
//! The tree is lossless and untyped: every node and token carries one
//! [`SyntaxKind`]. [`ast`] layers typed wrappers over it.

pub mod ast;
pub mod relation;
pub mod syntax;

pub use syntax::{OrgLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
