use std::{fmt, io};

use thiserror::Error;

use crate::records::RecordType;

/// A named field that failed a structural or business rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field_name} {message}")]
pub struct FieldError {
    pub field_name: String,
    pub value: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field_name: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}

/// Which of the three JSON decode passes failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    Root,
    Header,
    Control,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DecodeStage::Root => "file",
            DecodeStage::Header => "FileHeader",
            DecodeStage::Control => "FileControl",
        };
        f.write_str(label)
    }
}

/// Error type that captures failures while building or validating a file.
#[derive(Debug, Error)]
pub enum IclError {
    #[error("nil file")]
    NilFile,
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Raised by a record validator and passed up the tree untouched.
    #[error("{error}")]
    Record {
        record_type: RecordType,
        error: FieldError,
    },
    #[error("no JSON data provided")]
    NoData,
    #[error("problem reading {stage}: {source}")]
    Decode {
        stage: DecodeStage,
        #[source]
        source: serde_json::Error,
    },
}

impl IclError {
    pub(crate) fn record(
        record_type: RecordType,
        field_name: &str,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        IclError::Record {
            record_type,
            error: FieldError::new(field_name, value, message),
        }
    }

    /// The field-level details, when the error carries any.
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            IclError::Field(error) | IclError::Record { error, .. } => Some(error),
            _ => None,
        }
    }
}

pub type IclResult<T> = Result<T, IclError>;

/// Failures while loading or storing the processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("no configuration directory available")]
    NoConfigDir,
}
