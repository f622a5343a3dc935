use std::path::PathBuf;

use thiserror::Error;

use crate::edit::JsonKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The property path was empty, blank, or contained a blank segment.
    #[error("nested property path '{path}' is empty or contains a blank segment")]
    InvalidPath { path: String },

    #[error("nested property '{segment}' in '{path}' does not exist")]
    PropertyNotFound { segment: String, path: String },

    /// A segment that had to be traversed holds null or a non-object value.
    #[error("nested property '{segment}' in '{path}' is {found}, it cannot be used as the next object")]
    NullIntermediate {
        segment: String,
        path: String,
        found: JsonKind,
    },

    /// A typed get resolved an explicit null and the target type is not nullable.
    #[error("nested property '{path}' is null, it cannot be read as {expected}")]
    NullValue { path: String, expected: &'static str },

    #[error("cannot read {found} as {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: JsonKind,
    },

    #[error("expected an array, found {found}")]
    NotAnArray { found: JsonKind },

    #[error("value at index {index} within the array is null")]
    NullElement { index: usize },

    #[error("failed to parse '{}' as JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{}' is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("top-level value of '{}' is {found}, expected an object", path.display())]
    NotAnObject { path: PathBuf, found: JsonKind },

    #[error("no file path is known for this document and none was given")]
    NoKnownPath,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for every way a file's contents can fail to be a JSON object.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. } | Error::Encoding { .. } | Error::NotAnObject { .. }
        )
    }

    /// True when a present null (or non-object) value stood where a value or
    /// container was required.
    pub fn is_null_error(&self) -> bool {
        matches!(self, Error::NullIntermediate { .. } | Error::NullValue { .. })
    }

    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Error::TypeMismatch { .. } | Error::NotAnArray { .. } | Error::NullElement { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
