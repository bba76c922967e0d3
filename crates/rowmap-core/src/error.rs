use crate::coerce::CoercionError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure the mapping layer can report. All variants are returned to
/// the immediate caller; nothing is retried internally.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("unsupported record type '{path}': {reason}")]
    UnsupportedType {
        path: String,
        reason: UnsupportedReason,
    },

    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("invalid range boundary for '{path}': {reason}")]
    InvalidBoundary { path: String, reason: String },

    #[error("invalid column '{name}' for '{path}': {reason}")]
    InvalidColumn {
        path: String,
        name: String,
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn unsupported(path: impl Into<String>, reason: UnsupportedReason) -> Self {
        Self::UnsupportedType {
            path: path.into(),
            reason,
        }
    }

    pub(crate) fn invalid_boundary(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBoundary {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_column(
        path: impl Into<String>,
        name: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidColumn {
            path: path.into(),
            name: name.into(),
            reason,
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedType { .. } => ErrorClass::Unsupported,
            Self::Coercion(_) => ErrorClass::TypeMismatch,
            Self::InvalidBoundary { .. } | Self::InvalidColumn { .. } => {
                ErrorClass::InvalidArgument
            }
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// UnsupportedReason
/// Why a type could not be resolved into a schema.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum UnsupportedReason {
    #[error("not a record (resolved to '{0}')")]
    NotARecord(String),

    #[error("no persisted fields")]
    NoPersistedFields,

    #[error("column '{column}' is declared by both '{first}' and '{second}'")]
    DuplicateColumn {
        column: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("invalid tag on member '{member}': {detail}")]
    InvalidTag {
        member: &'static str,
        detail: String,
    },
}

///
/// ErrorClass
/// Stable classification of [`Error`] variants.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Unsupported,
    TypeMismatch,
    InvalidArgument,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unsupported => "unsupported",
            Self::TypeMismatch => "type_mismatch",
            Self::InvalidArgument => "invalid_argument",
        };
        write!(f, "{label}")
    }
}
