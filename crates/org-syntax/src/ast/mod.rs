//! Typed AST layer on top of the rowan CST.
//!
//! Every wrapper type in this module is generated by `build.rs` from the
//! node table in `org_astgen::org`. A wrapper is a newtype around
//! `SyntaxNode`: `cast()` is a kind check and each accessor is a single call
//! into [`crate::relation`] or `rowan::ast::support`. Edit the node table,
//! never the generated file.

#[allow(clippy::all, unused_imports)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/ast_generated.rs"));
}

pub use generated::*;
pub use rowan::ast::{AstChildren, AstNode};
