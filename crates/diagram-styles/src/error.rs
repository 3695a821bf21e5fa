//! Error types for style registration and validation.

use thiserror::Error;

/// Broad classification of registration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an unusable argument (empty, blank or missing tag).
    InvalidArgument,
    /// A rule keyed by the same tag is already registered.
    DuplicateKey,
}

/// Which of the two registries a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Element,
    Relationship,
}

impl StyleKind {
    /// Returns the lowercase name of the kind ("element" or "relationship").
    pub fn name(self) -> &'static str {
        match self {
            StyleKind::Element => "element",
            StyleKind::Relationship => "relationship",
        }
    }

    /// Returns the kind's name prefixed with its capitalized indefinite article.
    fn with_article(self) -> &'static str {
        match self {
            StyleKind::Element => "An element",
            StyleKind::Relationship => "A relationship",
        }
    }
}

impl std::fmt::Display for StyleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error raised when registering a style rule.
///
/// The registry is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("A tag must be specified.")]
    MissingTag,

    #[error("{} style for the tag \"{tag}\" already exists.", .kind.with_article())]
    DuplicateTag { kind: StyleKind, tag: String },
}

impl StyleError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StyleError::MissingTag => ErrorKind::InvalidArgument,
            StyleError::DuplicateTag { .. } => ErrorKind::DuplicateKey,
        }
    }
}

/// Finding reported by the advisory validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{value}' is not a valid hex colour code ({kind} style \"{tag}\", field {field})")]
    InvalidColor {
        kind: StyleKind,
        tag: String,
        field: &'static str,
        value: String,
    },
}
