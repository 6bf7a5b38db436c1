//! Error types for catalog construction, typing and fact handling.

use std::path::PathBuf;

/// A generic constructor was applied to an argument type it cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("type mismatch applying {constructor}: expected {expected}, found {found}")]
    Mismatch {
        constructor: String,
        expected: String,
        found: String,
    },
}

/// Why a predicate registration was dropped from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("predicate {predicate}: invalid type tag {tag:?}")]
    InvalidTypeTag { predicate: String, tag: char },

    #[error("predicate {predicate}: empty type signature")]
    EmptySignature { predicate: String },

    /// Not fatal: the later registration replaces the earlier one.
    #[error("predicate {predicate} registered twice")]
    DuplicateName { predicate: String },
}

/// Raw argument text did not contain enough arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("predicate {predicate}: missing argument at position {position}")]
    MissingArgument { predicate: String, position: usize },
}

/// A ground fact does not fit the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactError {
    #[error("unknown predicate {0}")]
    UnknownPredicate(String),

    #[error("fact does not type check against {signature}")]
    IllTyped { signature: String },

    #[error("fact for {predicate} has a variable at position {position}")]
    NotGround { predicate: String, position: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid restriction options: {0}")]
    Parse(#[from] toml::de::Error),
}
