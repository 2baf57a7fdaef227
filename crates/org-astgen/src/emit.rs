//! Emission of the accessor model as Rust syntax.
//!
//! Every accessor body is a single call into `rowan::ast::support` or the
//! relation module; nothing here filters, caches or post-processes results.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse_quote;

use crate::model::{Accessor, AccessorKind, BlankEdge, WrapperDef};

/// Type-namespace names the artifact refers to besides the configured
/// language. A wrapper with one of these names would shadow it.
pub const PRELUDE_TYPES: &[&str] = &[
    "AstChildren",
    "AstNode",
    "Direction",
    "Option",
    "SyntaxKind",
    "SyntaxNode",
    "SyntaxToken",
    "bool",
    "support",
    "usize",
];

/// Resolved import paths for the artifact prelude.
pub struct Imports {
    pub language: syn::Ident,
    pub syntax_module: syn::Path,
    pub relation_module: syn::Path,
}

/// Build the whole artifact as a `syn::File`.
pub fn emit_file(imports: &Imports, wrappers: &[WrapperDef]) -> syn::File {
    let mut items = prelude(imports);
    for wrapper in wrappers {
        items.extend(emit_wrapper(imports, wrapper));
    }
    syn::File {
        shebang: None,
        attrs: Vec::new(),
        items,
    }
}

fn prelude(imports: &Imports) -> Vec<syn::Item> {
    let Imports {
        language,
        syntax_module,
        relation_module,
    } = imports;
    vec![
        parse_quote! {
            use rowan::ast::{support, AstChildren, AstNode};
        },
        parse_quote! {
            use #syntax_module::{#language, SyntaxKind, SyntaxKind::*, SyntaxNode, SyntaxToken};
        },
        parse_quote! {
            use #relation_module::{blank_lines, last_child, last_token, parent, Direction};
        },
    ]
}

fn emit_wrapper(imports: &Imports, wrapper: &WrapperDef) -> Vec<syn::Item> {
    let name = format_ident!("{}", wrapper.name);
    let language = &imports.language;

    let kind_list = wrapper
        .kinds
        .iter()
        .map(|kind| format!("`{}`", kind))
        .collect::<Vec<_>>()
        .join(", ");
    let doc = format!(" Typed view of a {} node.", kind_list);

    let predicate = wrapper
        .kinds
        .iter()
        .map(|kind| {
            let kind = format_ident!("{}", kind);
            quote!(kind == #kind)
        })
        .reduce(|acc, test| quote!(#acc || #test))
        .unwrap_or_else(|| quote!(false));

    let mut items: Vec<syn::Item> = vec![
        parse_quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct #name {
                pub(crate) syntax: SyntaxNode,
            }
        },
        parse_quote! {
            impl AstNode for #name {
                type Language = #language;

                fn can_cast(kind: SyntaxKind) -> bool {
                    #predicate
                }

                fn cast(node: SyntaxNode) -> Option<#name> {
                    Self::can_cast(node.kind()).then(|| #name { syntax: node })
                }

                fn syntax(&self) -> &SyntaxNode {
                    &self.syntax
                }
            }
        },
    ];

    if !wrapper.accessors.is_empty() {
        let methods = wrapper.accessors.iter().map(emit_accessor);
        items.push(parse_quote! {
            impl #name {
                #(#methods)*
            }
        });
    }

    items
}

fn emit_accessor(accessor: &Accessor) -> TokenStream {
    let method = format_ident!("{}", accessor.method);
    match &accessor.kind {
        AccessorKind::Token { kind } => {
            let doc = format!(" First `{}` token among the direct children.", kind);
            let kind = format_ident!("{}", kind);
            quote! {
                #[doc = #doc]
                pub fn #method(&self) -> Option<SyntaxToken> {
                    support::token(&self.syntax, #kind)
                }
            }
        }
        AccessorKind::LastToken { kind } => {
            let doc = format!(" Last `{}` token among the direct children.", kind);
            let kind = format_ident!("{}", kind);
            quote! {
                #[doc = #doc]
                pub fn #method(&self) -> Option<SyntaxToken> {
                    last_token(&self.syntax, #kind)
                }
            }
        }
        AccessorKind::Parent { ty } => {
            let doc = format!(" Enclosing node, if it is a `{}`.", ty);
            let ty = format_ident!("{}", ty);
            quote! {
                #[doc = #doc]
                pub fn #method(&self) -> Option<#ty> {
                    parent(&self.syntax)
                }
            }
        }
        AccessorKind::FirstChild { ty } => {
            let doc = format!(" First direct child that is a `{}`.", ty);
            let ty = format_ident!("{}", ty);
            quote! {
                #[doc = #doc]
                pub fn #method(&self) -> Option<#ty> {
                    support::child(&self.syntax)
                }
            }
        }
        AccessorKind::LastChild { ty } => {
            let doc = format!(" Last direct child that is a `{}`.", ty);
            let ty = format_ident!("{}", ty);
            quote! {
                #[doc = #doc]
                pub fn #method(&self) -> Option<#ty> {
                    last_child(&self.syntax)
                }
            }
        }
        AccessorKind::Children { ty } => {
            let doc = format!(" Direct children that are `{}`s, in order.", ty);
            let ty = format_ident!("{}", ty);
            quote! {
                #[doc = #doc]
                pub fn #method(&self) -> AstChildren<#ty> {
                    support::children(&self.syntax)
                }
            }
        }
        AccessorKind::BlankLines { edge } => {
            let (direction, doc) = match edge {
                BlankEdge::Leading => (
                    format_ident!("Leading"),
                    " Number of blank lines before the content.",
                ),
                BlankEdge::Trailing => (
                    format_ident!("Trailing"),
                    " Number of blank lines after the content.",
                ),
            };
            quote! {
                #[doc = #doc]
                pub fn #method(&self) -> usize {
                    blank_lines(&self.syntax, Direction::#direction)
                }
            }
        }
    }
}
