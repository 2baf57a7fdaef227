//! Error types for schema validation and artifact generation.

use std::fmt;
use std::io;

use crate::schema::RelationKind;

/// A problem in the schema, detected before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two specs share a wrapper type name.
    DuplicateNode { name: String },
    /// A spec accepts no tree kind at all.
    EmptyKinds { node: String },
    /// A tree kind is accepted by two wrapper types.
    OverlappingKind {
        kind: String,
        first: String,
        second: String,
    },
    /// Two accessors of one spec share a method name.
    DuplicateMethod { node: String, method: String },
    /// A relation targets a wrapper type no spec declares.
    UnresolvedType {
        node: String,
        method: String,
        relation: RelationKind,
        target: String,
    },
    /// A spec names a tree kind outside the known kind enumeration.
    UnknownKind { node: String, kind: String },
    /// A name cannot be emitted as a Rust identifier.
    InvalidIdent { node: String, ident: String },
    /// A wrapper name would shadow a type the generated module imports.
    ReservedName { node: String },
}

impl SchemaError {
    /// Stable code for each error kind.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::DuplicateNode { .. } => "S0001",
            SchemaError::EmptyKinds { .. } => "S0002",
            SchemaError::OverlappingKind { .. } => "S0003",
            SchemaError::DuplicateMethod { .. } => "S0004",
            SchemaError::UnresolvedType { .. } => "S0005",
            SchemaError::UnknownKind { .. } => "S0006",
            SchemaError::InvalidIdent { .. } => "S0007",
            SchemaError::ReservedName { .. } => "S0008",
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateNode { name } => {
                write!(f, "node `{}` is declared more than once", name)
            }
            SchemaError::EmptyKinds { node } => {
                write!(f, "node `{}` accepts no tree kind", node)
            }
            SchemaError::OverlappingKind {
                kind,
                first,
                second,
            } => write!(
                f,
                "kind `{}` is accepted by both `{}` and `{}`",
                kind, first, second
            ),
            SchemaError::DuplicateMethod { node, method } => {
                write!(f, "node `{}` declares method `{}` more than once", node, method)
            }
            SchemaError::UnresolvedType {
                node,
                method,
                relation,
                target,
            } => write!(
                f,
                "`{}::{}` ({}) refers to unknown node `{}`",
                node, method, relation, target
            ),
            SchemaError::UnknownKind { node, kind } => {
                write!(f, "node `{}` refers to unknown kind `{}`", node, kind)
            }
            SchemaError::InvalidIdent { node, ident } => {
                write!(f, "node `{}`: `{}` is not a valid identifier", node, ident)
            }
            SchemaError::ReservedName { node } => write!(
                f,
                "node `{}` collides with a name the generated module imports",
                node
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Every schema error found in one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaErrors {
    errors: Vec<SchemaError>,
}

impl SchemaErrors {
    /// Returns `None` when there is nothing to report.
    pub fn from_vec(errors: Vec<SchemaError>) -> Option<SchemaErrors> {
        if errors.is_empty() {
            None
        } else {
            Some(SchemaErrors { errors })
        }
    }

    pub fn errors(&self) -> &[SchemaError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.errors.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "error[{}]: {}", err.code(), err)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

/// Failure of a generation run that touches the outside world.
#[derive(Debug)]
pub enum GenError {
    Schema(SchemaErrors),
    Config(String),
    Io(io::Error),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Schema(errors) => write!(f, "{}", errors),
            GenError::Config(msg) => write!(f, "invalid generator config: {}", msg),
            GenError::Io(err) => write!(f, "failed to write artifact: {}", err),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Schema(errors) => Some(errors),
            GenError::Config(_) => None,
            GenError::Io(err) => Some(err),
        }
    }
}

impl From<SchemaErrors> for GenError {
    fn from(errors: SchemaErrors) -> Self {
        GenError::Schema(errors)
    }
}

impl From<io::Error> for GenError {
    fn from(err: io::Error) -> Self {
        GenError::Io(err)
    }
}
