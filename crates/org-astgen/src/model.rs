//! Typed accessor model: what gets emitted, before it becomes Rust syntax.
//!
//! Lowering fixes every ordering decision. Wrappers are sorted by name and
//! accessors follow the relation category order, so emission is a plain walk
//! over this model.

use crate::schema::{NodeSpec, RelationKind, Schema};

/// Which edge of a node a blank-line accessor counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankEdge {
    Leading,
    Trailing,
}

/// The body of one generated accessor, i.e. which primitive it calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorKind {
    Token { kind: String },
    LastToken { kind: String },
    Parent { ty: String },
    FirstChild { ty: String },
    LastChild { ty: String },
    Children { ty: String },
    BlankLines { edge: BlankEdge },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub method: String,
    pub kind: AccessorKind,
}

/// One wrapper type and everything emitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperDef {
    pub name: String,
    pub kinds: Vec<String>,
    pub accessors: Vec<Accessor>,
}

/// Lower a validated schema into wrapper definitions, in emission order.
pub fn lower(schema: &Schema) -> Vec<WrapperDef> {
    let mut wrappers: Vec<WrapperDef> = schema.nodes.iter().map(lower_node).collect();
    wrappers.sort_by(|a, b| a.name.cmp(&b.name));
    wrappers
}

fn lower_node(node: &NodeSpec) -> WrapperDef {
    let mut accessors = Vec::new();

    for category in RelationKind::ORDER {
        for relation in node.relations.iter().filter(|r| r.kind == category) {
            let target = relation.target.clone();
            let kind = match category {
                RelationKind::Token => AccessorKind::Token { kind: target },
                RelationKind::LastToken => AccessorKind::LastToken { kind: target },
                RelationKind::Parent => AccessorKind::Parent { ty: target },
                RelationKind::FirstChild => AccessorKind::FirstChild { ty: target },
                RelationKind::LastChild => AccessorKind::LastChild { ty: target },
                RelationKind::Children => AccessorKind::Children { ty: target },
            };
            accessors.push(Accessor {
                method: relation.method.clone(),
                kind,
            });
        }
    }

    if node.pre_blank {
        accessors.push(Accessor {
            method: "pre_blank".to_string(),
            kind: AccessorKind::BlankLines {
                edge: BlankEdge::Leading,
            },
        });
    }
    if node.post_blank {
        accessors.push(Accessor {
            method: "post_blank".to_string(),
            kind: AccessorKind::BlankLines {
                edge: BlankEdge::Trailing,
            },
        });
    }

    // A kind listed twice would only repeat an equality test.
    let mut kinds: Vec<String> = Vec::with_capacity(node.kinds.len());
    for kind in &node.kinds {
        if !kinds.contains(kind) {
            kinds.push(kind.clone());
        }
    }

    WrapperDef {
        name: node.name.clone(),
        kinds,
        accessors,
    }
}
