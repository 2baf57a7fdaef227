//! Typed AST generator for the Org syntax tree.
//!
//! Compiles a [`Schema`] of node specifications into Rust source: one wrapper
//! type per spec, implementing `rowan::ast::AstNode`, with one accessor method
//! per declared relation. The run is split into stages that can be tested on
//! their own:
//!
//! 1. [`validate`]: report every schema error, or nothing.
//! 2. [`model::lower`]: fix emission order in a typed accessor model.
//! 3. [`emit::emit_file`]: build a `syn::File` with `quote!`.
//! 4. [`render`]: pretty-print it behind a header comment.
//!
//! Output is all-or-nothing: a schema with any error produces no text, and
//! [`write_artifact`] never touches the destination in that case.

pub mod config;
pub mod emit;
pub mod error;
pub mod model;
pub mod org;
pub mod schema;
pub mod validate;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

pub use config::GenConfig;
pub use error::{GenError, SchemaError, SchemaErrors};
pub use schema::{NodeSpec, Relation, RelationKind, Schema};
pub use validate::validate;

use emit::Imports;

/// Generate the artifact text for `schema`.
pub fn generate(schema: &Schema, config: &GenConfig) -> Result<String, GenError> {
    config.check()?;
    validate(schema, config)?;

    let imports = resolve_imports(config)?;
    let wrappers = model::lower(schema);
    let file = emit::emit_file(&imports, &wrappers);
    Ok(render(config, &file))
}

/// Pretty-print an emitted file behind the configured header.
pub fn render(config: &GenConfig, file: &syn::File) -> String {
    let mut out = String::new();
    out.push_str("// ");
    out.push_str(&config.header);
    out.push_str("\n\n");
    out.push_str(&prettyplease::unparse(file));
    out
}

fn resolve_imports(config: &GenConfig) -> Result<Imports, GenError> {
    let invalid = |what: &str| GenError::Config(format!("`{}` cannot be emitted", what));
    Ok(Imports {
        language: syn::parse_str(&config.language).map_err(|_| invalid(&config.language))?,
        syntax_module: syn::parse_str(&config.syntax_module)
            .map_err(|_| invalid(&config.syntax_module))?,
        relation_module: syn::parse_str(&config.relation_module)
            .map_err(|_| invalid(&config.relation_module))?,
    })
}

/// What [`write_artifact`] did with the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file already held identical contents and was left alone.
    Unchanged,
}

/// Regenerate the artifact at `path`.
///
/// The text is produced in full before the file is opened, so a schema error
/// leaves any previous artifact untouched. Identical contents are not
/// rewritten, which keeps cargo from seeing a fresh mtime.
pub fn write_artifact(
    path: &Path,
    schema: &Schema,
    config: &GenConfig,
) -> Result<WriteOutcome, GenError> {
    let text = generate(schema, config)?;
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == text) {
        return Ok(WriteOutcome::Unchanged);
    }
    replace_file(path, &text)?;
    Ok(WriteOutcome::Written)
}

/// Write `text` to a temporary file beside `path`, then rename it over
/// `path`. Readers see either the old file or the new one, never a prefix.
fn replace_file(path: &Path, text: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Whether the artifact at `path` matches what `schema` generates now.
///
/// A missing file counts as stale.
pub fn check_artifact(path: &Path, schema: &Schema, config: &GenConfig) -> Result<bool, GenError> {
    let text = generate(schema, config)?;
    match std::fs::read_to_string(path) {
        Ok(existing) => Ok(existing == text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}
