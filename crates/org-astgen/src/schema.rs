//! Node Specification data model.
//!
//! A [`Schema`] is an ordered list of [`NodeSpec`]s. Each spec names one typed
//! wrapper, the tree kinds it accepts, and the relations it exposes as
//! accessor methods. Specs are built with a small chaining API so the schema
//! table in [`crate::org`] reads like a declaration list.

use std::fmt;

/// The navigational relation an accessor method exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationKind {
    /// First direct-child token of a kind.
    Token,
    /// Last direct-child token of a kind, scanned from the trailing end.
    LastToken,
    /// Immediate parent, down-cast to a wrapper type.
    Parent,
    /// First direct child down-castable to a wrapper type.
    FirstChild,
    /// Last direct child down-castable to a wrapper type.
    LastChild,
    /// All direct children down-castable to a wrapper type, in order.
    Children,
}

impl RelationKind {
    /// Emission order of relation categories inside one wrapper.
    pub const ORDER: [RelationKind; 6] = [
        RelationKind::Token,
        RelationKind::LastToken,
        RelationKind::Parent,
        RelationKind::FirstChild,
        RelationKind::LastChild,
        RelationKind::Children,
    ];

    /// Whether the relation target names a tree kind (as opposed to a
    /// wrapper type).
    pub fn targets_kind(self) -> bool {
        matches!(self, RelationKind::Token | RelationKind::LastToken)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Token => "token",
            RelationKind::LastToken => "last_token",
            RelationKind::Parent => "parent",
            RelationKind::FirstChild => "first_child",
            RelationKind::LastChild => "last_child",
            RelationKind::Children => "children",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared relation: `kind(method, target)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,
    /// Name of the generated accessor method.
    pub method: String,
    /// A tree kind for token relations, a wrapper type name otherwise.
    pub target: String,
}

/// Specification of one typed wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub name: String,
    pub kinds: Vec<String>,
    /// Relations in declaration order.
    pub relations: Vec<Relation>,
    pub pre_blank: bool,
    pub post_blank: bool,
}

impl NodeSpec {
    pub fn new<I, S>(name: impl Into<String>, kinds: I) -> NodeSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NodeSpec {
            name: name.into(),
            kinds: kinds.into_iter().map(Into::into).collect(),
            relations: Vec::new(),
            pre_blank: false,
            post_blank: false,
        }
    }

    pub fn relation(
        mut self,
        kind: RelationKind,
        method: impl Into<String>,
        target: impl Into<String>,
    ) -> NodeSpec {
        self.relations.push(Relation {
            kind,
            method: method.into(),
            target: target.into(),
        });
        self
    }

    pub fn token(self, method: impl Into<String>, kind: impl Into<String>) -> NodeSpec {
        self.relation(RelationKind::Token, method, kind)
    }

    pub fn last_token(self, method: impl Into<String>, kind: impl Into<String>) -> NodeSpec {
        self.relation(RelationKind::LastToken, method, kind)
    }

    pub fn parent(self, method: impl Into<String>, ty: impl Into<String>) -> NodeSpec {
        self.relation(RelationKind::Parent, method, ty)
    }

    pub fn first_child(self, method: impl Into<String>, ty: impl Into<String>) -> NodeSpec {
        self.relation(RelationKind::FirstChild, method, ty)
    }

    pub fn last_child(self, method: impl Into<String>, ty: impl Into<String>) -> NodeSpec {
        self.relation(RelationKind::LastChild, method, ty)
    }

    pub fn children(self, method: impl Into<String>, ty: impl Into<String>) -> NodeSpec {
        self.relation(RelationKind::Children, method, ty)
    }

    /// Expose `pre_blank()`: blank lines before the node's content.
    pub fn pre_blank(mut self) -> NodeSpec {
        self.pre_blank = true;
        self
    }

    /// Expose `post_blank()`: blank lines after the node's content.
    pub fn post_blank(mut self) -> NodeSpec {
        self.post_blank = true;
        self
    }
}

/// The generator's input: every node spec, plus optionally the universe of
/// tree kinds the specs may mention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub nodes: Vec<NodeSpec>,
    /// When set, every kind named by a spec must appear here.
    pub known_kinds: Option<Vec<String>>,
}

impl Schema {
    pub fn new(nodes: Vec<NodeSpec>) -> Schema {
        Schema {
            nodes,
            known_kinds: None,
        }
    }

    pub fn with_known_kinds<I, S>(mut self, kinds: I) -> Schema
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_kinds = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    pub fn node(&self, name: &str) -> Option<&NodeSpec> {
        self.nodes.iter().find(|node| node.name == name)
    }
}
