//! Error types for reference resolution and document loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing, resolving or collecting local `$ref` pointers.
///
/// Every variant aborts the enclosing traversal; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("unsupported reference \"{reference}\": only local \"#/...\" pointers are allowed")]
    UnsupportedReference { reference: String },

    #[error("malformed reference \"{reference}\": empty segment in {segments:?}")]
    MalformedReference {
        reference: String,
        segments: Vec<String>,
    },

    #[error("cannot resolve \"{segment}\" of {namespace:?}: expected object or array, got {found}")]
    InvalidResolveBase {
        namespace: Vec<String>,
        segment: String,
        found: &'static str,
    },

    #[error("unresolved property \"{segment}\" in {namespace:?}")]
    UnresolvedProperty {
        namespace: Vec<String>,
        segment: String,
    },

    #[error("reference {namespace:?} resolves to null")]
    EmptyResolveTarget { namespace: Vec<String> },

    #[error("cyclic reference \"{reference}\" (chain: {})", chain.join(" -> "))]
    CyclicReference {
        reference: String,
        chain: Vec<String>,
    },
}

impl ReferenceError {
    /// Returns the exit code for this error type.
    ///
    /// Reference errors always describe a malformed document.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors while reading a document from disk or a string.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            LoadError::InvalidJson { .. } => 2,
        }
    }
}
