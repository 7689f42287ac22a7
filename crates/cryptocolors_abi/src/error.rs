//! Error types for interface table operations.

use std::fmt;

use thiserror::Error;

/// The two independent namespaces of an interface table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Callable operations (functions and the constructor).
    Operation,
    /// Emitted notifications (events).
    Notification,
    /// Either category; used by unscoped lookups.
    Any,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Operation => f.write_str("operation"),
            Category::Notification => f.write_str("notification"),
            Category::Any => f.write_str("entry"),
        }
    }
}

/// Errors raised while loading or querying an interface table.
#[derive(Error, Debug)]
pub enum AbiError {
    /// No entry with the requested name exists in the table.
    #[error("{category} not found: {name}")]
    NotFound {
        /// Category that was searched.
        category: Category,
        /// Requested name, signature or hash.
        name: String,
    },

    /// A parameter carries a type tag outside the known vocabulary.
    #[error("Invalid type tag: {tag}")]
    InvalidType {
        /// The offending tag.
        tag: String,
    },

    /// Two entries share a signature within one category.
    #[error("Duplicate {category}: {signature}")]
    DuplicateEntry {
        /// Category holding the duplicate.
        category: Category,
        /// The repeated signature.
        signature: String,
    },

    /// An operation is declared both payable and constant.
    #[error("Operation {name} cannot be both payable and constant")]
    PayableConstant {
        /// Operation name.
        name: String,
    },

    /// A named entry kind was declared without a name.
    #[error("{kind} entry is missing a name")]
    MissingName {
        /// The entry discriminator, e.g. `function`.
        kind: String,
    },

    /// Malformed JSON representation.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure reading a table from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AbiError {
    /// Create a not found error.
    pub fn not_found<S: Into<String>>(category: Category, name: S) -> Self {
        Self::NotFound {
            category,
            name: name.into(),
        }
    }

    /// Create an invalid type error.
    pub fn invalid_type<S: Into<String>>(tag: S) -> Self {
        Self::InvalidType { tag: tag.into() }
    }

    /// Create a duplicate entry error.
    pub fn duplicate<S: Into<String>>(category: Category, signature: S) -> Self {
        Self::DuplicateEntry {
            category,
            signature: signature.into(),
        }
    }

    /// Returns true when the error is a failed lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for interface table operations.
pub type AbiResult<T> = std::result::Result<T, AbiError>;
