//! Green tree construction.
//!
//! Small constructors used by tree producers (and tests) to assemble
//! lossless green trees without driving a `GreenNodeBuilder` by hand.

use rowan::{GreenNode, GreenToken, NodeOrToken};

use super::{SyntaxKind, SyntaxNode};

pub type GreenElement = NodeOrToken<GreenNode, GreenToken>;

#[inline]
pub fn token(kind: SyntaxKind, text: &str) -> GreenElement {
    GreenElement::Token(GreenToken::new(kind.into(), text))
}

#[inline]
pub fn node<I>(kind: SyntaxKind, children: I) -> GreenElement
where
    I: IntoIterator<Item = GreenElement>,
    I::IntoIter: ExactSizeIterator,
{
    GreenElement::Node(GreenNode::new(kind.into(), children))
}

/// A `BLANK_LINE` node: optional whitespace followed by an optional line
/// ending (absent on the last line of the input).
pub fn blank_line(ws: &str, nl: &str) -> GreenElement {
    debug_assert!(ws.bytes().all(|c| c.is_ascii_whitespace()));
    debug_assert!(nl.is_empty() || nl == "\n" || nl == "\r\n");

    let mut children = Vec::with_capacity(2);
    if !ws.is_empty() {
        children.push(token(SyntaxKind::WHITESPACE, ws));
    }
    if !nl.is_empty() {
        children.push(token(SyntaxKind::NEW_LINE, nl));
    }
    node(SyntaxKind::BLANK_LINE, children)
}

/// Build a syntax tree rooted at a new node of `kind`.
pub fn root<I>(kind: SyntaxKind, children: I) -> SyntaxNode
where
    I: IntoIterator<Item = GreenElement>,
    I::IntoIter: ExactSizeIterator,
{
    SyntaxNode::new_root(GreenNode::new(kind.into(), children))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_lossless() {
        let tree = root(
            SyntaxKind::PARAGRAPH,
            vec![token(SyntaxKind::TEXT, "a\n"), blank_line("    ", "")],
        );
        assert_eq!(tree.kind(), SyntaxKind::PARAGRAPH);
        assert_eq!(tree.text().to_string(), "a\n    ");
        insta::assert_debug_snapshot!(tree, @r###"
        PARAGRAPH@0..6
          TEXT@0..2 "a\n"
          BLANK_LINE@2..6
            WHITESPACE@2..6 "    "
        "###);
    }

    #[test]
    fn blank_line_skips_empty_parts() {
        let GreenElement::Node(line) = blank_line("", "\n") else {
            panic!("blank line must be a node");
        };
        assert_eq!(line.children().len(), 1);
        assert_eq!(line.to_string(), "\n");
    }
}
