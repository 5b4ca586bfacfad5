use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Cannot list directory {path}: {message}")]
    Traversal { path: PathBuf, message: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule #{index} in rule set '{rule_set}': {message}")]
    RuleValidation {
        rule_set: String,
        index: usize,
        message: String,
    },
}

impl RewriteError {
    /// Stable label used in reports and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            RewriteError::Traversal { .. } => "traversal_error",
            RewriteError::Read { .. } => "read_error",
            RewriteError::Decode { .. } => "decode_error",
            RewriteError::Write { .. } => "write_error",
            RewriteError::RuleValidation { .. } => "rule_validation_error",
        }
    }

    /// Path the error is attached to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            RewriteError::Traversal { path, .. }
            | RewriteError::Read { path, .. }
            | RewriteError::Decode { path, .. }
            | RewriteError::Write { path, .. } => Some(path),
            RewriteError::RuleValidation { .. } => None,
        }
    }
}
