//! Relation primitives: generic navigation over the untyped tree.
//!
//! The generated typed AST delegates every accessor to exactly one function
//! here or in `rowan::ast::support`. All of them are pure reads of the live
//! tree; nothing is cached, so edits to a mutable tree show up on the next
//! call.

use std::iter::successors;

use rowan::ast::AstNode;

use crate::syntax::{OrgLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

pub use rowan::ast::support::{child, children, token};

/// Which edge of a node [`blank_lines`] looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Leading,
    Trailing,
}

/// The last direct child of `parent` that casts to `N`.
pub fn last_child<N: AstNode<Language = OrgLanguage>>(parent: &SyntaxNode) -> Option<N> {
    successors(parent.last_child(), |node| node.prev_sibling()).find_map(N::cast)
}

/// The last direct-child token of `kind`, scanning from the trailing end.
pub fn last_token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    successors(parent.last_child_or_token(), |element| {
        element.prev_sibling_or_token()
    })
    .filter_map(SyntaxElement::into_token)
    .find(|token| token.kind() == kind)
}

/// The immediate parent of `node`, if it casts to `N`.
pub fn parent<N: AstNode<Language = OrgLanguage>>(node: &SyntaxNode) -> Option<N> {
    node.parent().and_then(N::cast)
}

/// Number of consecutive `BLANK_LINE` elements at one edge of `node`'s
/// direct children.
pub fn blank_lines(node: &SyntaxNode, direction: Direction) -> usize {
    let is_blank = |element: &SyntaxElement| element.kind() == SyntaxKind::BLANK_LINE;
    match direction {
        Direction::Leading => successors(node.first_child_or_token(), |element| {
            element.next_sibling_or_token()
        })
        .take_while(is_blank)
        .count(),
        Direction::Trailing => successors(node.last_child_or_token(), |element| {
            element.prev_sibling_or_token()
        })
        .take_while(is_blank)
        .count(),
    }
}
