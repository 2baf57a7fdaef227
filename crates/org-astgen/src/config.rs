//! Generator configuration: the paths the generated artifact imports.
//!
//! Defaults match the `org-syntax` crate layout. A build script reads the
//! TOML form from a file next to its manifest (`org-syntax/astgen.toml`):
//!
//! ```toml
//! language = "OrgLanguage"
//! syntax_module = "crate::syntax"
//! relation_module = "crate::relation"
//! header = "generated by org-astgen, do not edit"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::GenError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Name of the rowan `Language` type, exported by `syntax_module`.
    pub language: String,
    /// Module exporting the language, `SyntaxKind`, `SyntaxNode` and
    /// `SyntaxToken`.
    pub syntax_module: String,
    /// Module exporting `last_token`, `last_child`, `parent`, `blank_lines`
    /// and `Direction`.
    pub relation_module: String,
    /// First line of the artifact, emitted as a `//` comment.
    pub header: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            language: "OrgLanguage".to_string(),
            syntax_module: "crate::syntax".to_string(),
            relation_module: "crate::relation".to_string(),
            header: "generated by org-astgen, do not modify it directly".to_string(),
        }
    }
}

impl GenConfig {
    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<GenConfig, GenError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a TOML config; missing keys keep their defaults.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<GenConfig, GenError> {
        let config: GenConfig = toml::from_str(content)
            .map_err(|e| GenError::Config(format!("failed to parse config: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    /// Reject values that cannot be emitted as Rust paths.
    pub fn check(&self) -> Result<(), GenError> {
        if syn::parse_str::<syn::Ident>(&self.language).is_err() {
            return Err(GenError::Config(format!(
                "`{}` is not a valid language type name",
                self.language
            )));
        }
        for path in [&self.syntax_module, &self.relation_module] {
            if syn::parse_str::<syn::Path>(path).is_err() {
                return Err(GenError::Config(format!("`{}` is not a valid module path", path)));
            }
        }
        if self.header.contains('\n') {
            return Err(GenError::Config("header must be a single line".to_string()));
        }
        Ok(())
    }
}
