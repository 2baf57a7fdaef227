//! Schema validation.
//!
//! Runs every check over the whole schema and reports all problems at once,
//! so one regeneration shows every mistake. Emission only starts once this
//! pass returns `Ok`.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::GenConfig;
use crate::emit::PRELUDE_TYPES;
use crate::error::{SchemaError, SchemaErrors};
use crate::schema::Schema;

/// Method names taken by the blank-line accessors.
const PRE_BLANK: &str = "pre_blank";
const POST_BLANK: &str = "post_blank";

/// Whether `name` can be emitted verbatim as a Rust identifier.
pub(crate) fn is_ident(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}

/// Check the schema, collecting every error found.
///
/// `config` supplies the language type the artifact imports, which no
/// wrapper may shadow.
pub fn validate(schema: &Schema, config: &GenConfig) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();

    let known_kinds: Option<FxHashSet<&str>> = schema
        .known_kinds
        .as_ref()
        .map(|kinds| kinds.iter().map(String::as_str).collect());

    let mut node_names: FxHashSet<&str> = FxHashSet::default();
    for node in &schema.nodes {
        if !is_ident(&node.name) {
            errors.push(SchemaError::InvalidIdent {
                node: node.name.clone(),
                ident: node.name.clone(),
            });
        }
        if PRELUDE_TYPES.contains(&node.name.as_str()) || node.name == config.language {
            errors.push(SchemaError::ReservedName {
                node: node.name.clone(),
            });
        }
        if !node_names.insert(node.name.as_str()) {
            errors.push(SchemaError::DuplicateNode {
                name: node.name.clone(),
            });
        }
    }

    let mut kind_owner: FxHashMap<&str, &str> = FxHashMap::default();
    for node in &schema.nodes {
        if node.kinds.is_empty() {
            errors.push(SchemaError::EmptyKinds {
                node: node.name.clone(),
            });
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for kind in node.kinds.iter().filter(|kind| seen.insert(kind.as_str())) {
            check_kind(&node.name, kind, known_kinds.as_ref(), &mut errors);

            match kind_owner.get(kind.as_str()) {
                Some(&owner) if owner != node.name => {
                    errors.push(SchemaError::OverlappingKind {
                        kind: kind.clone(),
                        first: owner.to_string(),
                        second: node.name.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    kind_owner.insert(kind.as_str(), node.name.as_str());
                }
            }
        }

        let mut methods: FxHashSet<&str> = FxHashSet::default();
        let blank_methods = [(node.pre_blank, PRE_BLANK), (node.post_blank, POST_BLANK)];
        let declared = node
            .relations
            .iter()
            .map(|relation| relation.method.as_str())
            .chain(
                blank_methods
                    .iter()
                    .filter(|(enabled, _)| *enabled)
                    .map(|(_, method)| *method),
            );
        for method in declared {
            if !is_ident(method) {
                errors.push(SchemaError::InvalidIdent {
                    node: node.name.clone(),
                    ident: method.to_string(),
                });
            }
            if !methods.insert(method) {
                errors.push(SchemaError::DuplicateMethod {
                    node: node.name.clone(),
                    method: method.to_string(),
                });
            }
        }

        for relation in &node.relations {
            if relation.kind.targets_kind() {
                check_kind(&node.name, &relation.target, known_kinds.as_ref(), &mut errors);
            } else if !node_names.contains(relation.target.as_str()) {
                errors.push(SchemaError::UnresolvedType {
                    node: node.name.clone(),
                    method: relation.method.clone(),
                    relation: relation.kind,
                    target: relation.target.clone(),
                });
            }
        }
    }

    match SchemaErrors::from_vec(errors) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}

fn check_kind(
    node: &str,
    kind: &str,
    known_kinds: Option<&FxHashSet<&str>>,
    errors: &mut Vec<SchemaError>,
) {
    if !is_ident(kind) {
        errors.push(SchemaError::InvalidIdent {
            node: node.to_string(),
            ident: kind.to_string(),
        });
    } else if known_kinds.is_some_and(|known| !known.contains(kind)) {
        errors.push(SchemaError::UnknownKind {
            node: node.to_string(),
            kind: kind.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NodeSpec, RelationKind};

    fn check(schema: &Schema) -> Result<(), SchemaErrors> {
        validate(schema, &GenConfig::default())
    }

    fn errors_of(schema: &Schema) -> Vec<SchemaError> {
        check(schema)
            .expect_err("schema should be rejected")
            .errors()
            .to_vec()
    }

    #[test]
    fn accepts_well_formed_schema() {
        let schema = Schema::new(vec![
            NodeSpec::new("Headline", ["HEADLINE"])
                .children("headlines", "Headline")
                .token("stars", "HEADLINE_STARS")
                .post_blank(),
            NodeSpec::new("HeadlineTitle", ["HEADLINE_TITLE"]).parent("headline", "Headline"),
        ]);
        assert_eq!(check(&schema), Ok(()));
    }

    #[test]
    fn rejects_overlapping_kinds() {
        let schema = Schema::new(vec![
            NodeSpec::new("A", ["HEADLINE"]),
            NodeSpec::new("B", ["HEADLINE", "SECTION"]),
        ]);
        assert_eq!(
            errors_of(&schema),
            vec![SchemaError::OverlappingKind {
                kind: "HEADLINE".to_string(),
                first: "A".to_string(),
                second: "B".to_string(),
            }]
        );
    }

    #[test]
    fn repeated_kind_within_one_node_is_not_an_overlap() {
        let schema = Schema::new(vec![NodeSpec::new("A", ["HEADLINE", "HEADLINE"])]);
        assert_eq!(check(&schema), Ok(()));
    }

    #[test]
    fn repeated_kind_in_a_later_node_is_reported_once() {
        let schema = Schema::new(vec![
            NodeSpec::new("A", ["HEADLINE"]),
            NodeSpec::new("B", ["HEADLINE", "HEADLINE"]),
        ]);
        assert_eq!(
            errors_of(&schema),
            vec![SchemaError::OverlappingKind {
                kind: "HEADLINE".to_string(),
                first: "A".to_string(),
                second: "B".to_string(),
            }]
        );
    }

    #[test]
    fn rejects_names_the_artifact_imports() {
        let schema = Schema::new(vec![
            NodeSpec::new("Direction", ["DRAWER_BEGIN"]),
            NodeSpec::new("SyntaxNode", ["DRAWER_END"]),
            NodeSpec::new("Drawer", ["DRAWER"]),
        ]);
        assert_eq!(
            errors_of(&schema),
            vec![
                SchemaError::ReservedName {
                    node: "Direction".to_string()
                },
                SchemaError::ReservedName {
                    node: "SyntaxNode".to_string()
                },
            ]
        );
    }

    #[test]
    fn rejects_the_configured_language_name() {
        let schema = Schema::new(vec![NodeSpec::new("MarkupLanguage", ["DOCUMENT"])]);
        assert_eq!(check(&schema), Ok(()));

        let config = GenConfig {
            language: "MarkupLanguage".to_string(),
            ..GenConfig::default()
        };
        assert_eq!(
            validate(&schema, &config)
                .expect_err("wrapper shadows the language type")
                .errors(),
            [SchemaError::ReservedName {
                node: "MarkupLanguage".to_string()
            }]
        );
    }

    #[test]
    fn type_references_resolve_regardless_of_order() {
        let schema = Schema::new(vec![
            NodeSpec::new("Document", ["DOCUMENT"]).first_child("section", "Section"),
            NodeSpec::new("Section", ["SECTION"]),
        ]);
        assert_eq!(check(&schema), Ok(()));
    }

    #[test]
    fn reports_every_error_in_one_pass() {
        let schema = Schema::new(vec![
            NodeSpec::new("Document", ["DOCUMENT"])
                .first_child("section", "Sektion")
                .children("section", "Headline")
                .pre_blank(),
            NodeSpec::new("Empty", Vec::<String>::new()),
            NodeSpec::new("Document", ["SECTION"]),
        ]);

        assert_eq!(
            errors_of(&schema),
            vec![
                SchemaError::DuplicateNode {
                    name: "Document".to_string()
                },
                SchemaError::DuplicateMethod {
                    node: "Document".to_string(),
                    method: "section".to_string(),
                },
                SchemaError::UnresolvedType {
                    node: "Document".to_string(),
                    method: "section".to_string(),
                    relation: RelationKind::FirstChild,
                    target: "Sektion".to_string(),
                },
                SchemaError::UnresolvedType {
                    node: "Document".to_string(),
                    method: "section".to_string(),
                    relation: RelationKind::Children,
                    target: "Headline".to_string(),
                },
                SchemaError::EmptyKinds {
                    node: "Empty".to_string()
                },
            ]
        );
    }

    #[test]
    fn blank_accessors_claim_their_method_names() {
        let schema = Schema::new(vec![NodeSpec::new("Section", ["SECTION"])
            .token("post_blank", "BLANK_LINE")
            .post_blank()]);
        assert_eq!(
            errors_of(&schema),
            vec![SchemaError::DuplicateMethod {
                node: "Section".to_string(),
                method: "post_blank".to_string(),
            }]
        );
    }

    #[test]
    fn rejects_names_that_are_not_identifiers() {
        let schema = Schema::new(vec![NodeSpec::new("Link", ["LINK"])
            .token("type", "LINK_PATH")
            .token("path", "LINK PATH")]);
        assert_eq!(
            errors_of(&schema),
            vec![
                SchemaError::InvalidIdent {
                    node: "Link".to_string(),
                    ident: "type".to_string(),
                },
                SchemaError::InvalidIdent {
                    node: "Link".to_string(),
                    ident: "LINK PATH".to_string(),
                },
            ]
        );
    }

    #[test]
    fn checks_kinds_against_known_universe() {
        let schema = Schema::new(vec![NodeSpec::new("Code", ["CODE"])
            .token("text", "TXT")
            .last_token("end", "TEXT")])
        .with_known_kinds(["CODE", "TEXT"]);
        assert_eq!(
            errors_of(&schema),
            vec![SchemaError::UnknownKind {
                node: "Code".to_string(),
                kind: "TXT".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_kinds_pass_without_a_universe() {
        let schema = Schema::new(vec![NodeSpec::new("Code", ["CODE"]).token("text", "TXT")]);
        assert_eq!(check(&schema), Ok(()));
    }
}
