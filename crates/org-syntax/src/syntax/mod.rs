//! Rowan-based concrete syntax tree types for Org.
//!
//! Defines the `OrgLanguage` marker type that connects [`SyntaxKind`] to
//! rowan's generic tree infrastructure, plus type aliases for convenience.

mod green;
mod kind;

pub use green::{blank_line, node, root, token, GreenElement};
pub use kind::SyntaxKind;

/// Marker type for Org's language in rowan's generic tree system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrgLanguage {}

impl rowan::Language for OrgLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        // Rowan only stores kinds that we previously gave it via kind_to_raw.
        SyntaxKind::from_raw(raw.0).unwrap_or(SyntaxKind::ERROR)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A CST node (interior node with children).
pub type SyntaxNode = rowan::SyntaxNode<OrgLanguage>;

/// A CST token (leaf node with text).
pub type SyntaxToken = rowan::SyntaxToken<OrgLanguage>;

/// Either a node or a token in the CST.
pub type SyntaxElement = rowan::SyntaxElement<OrgLanguage>;
