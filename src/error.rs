use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("invalid version argument: {0}")]
    Usage(String),

    #[error("invalid version '{input}': expected MAJOR.MINOR.PATCH")]
    Parse { input: String },

    #[error("cannot bump {version}: version component overflow")]
    Overflow { version: String },

    #[error("git working tree not clean, please commit all changes before versioning")]
    DirtyWorkingTree,

    #[error("version already exists: {0}")]
    VersionExists(String),

    #[error("invalid project descriptor {}: {reason}", .path.display())]
    Descriptor { path: PathBuf, reason: String },

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed ({status}): {stderr}")]
    Subprocess {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{} operations failed: {}", .0.len(), join_messages(.0))]
    Multiple(Vec<BumpError>),
}

/// Convenience type alias for Results in bump
pub type Result<T> = std::result::Result<T, BumpError>;

fn join_messages(errors: &[BumpError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl BumpError {
    /// Create a usage error for an unrecognized bump argument
    pub fn usage(value: impl Into<String>) -> Self {
        BumpError::Usage(value.into())
    }

    /// Create a parse error naming the offending version string
    pub fn parse(input: impl Into<String>) -> Self {
        BumpError::Parse {
            input: input.into(),
        }
    }

    /// Create an I/O error tied to the file it happened on
    pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        BumpError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a descriptor validation error
    pub fn descriptor(path: &Path, reason: impl Into<String>) -> Self {
        BumpError::Descriptor {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Fold the failures of independent operations into a single result.
    ///
    /// Nested `Multiple` errors are flattened; a lone failure is returned as-is.
    pub fn aggregate(errors: Vec<BumpError>) -> Result<()> {
        let mut flat = Vec::with_capacity(errors.len());
        for err in errors {
            match err {
                BumpError::Multiple(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }

        match flat.len() {
            0 => Ok(()),
            1 => Err(flat.remove(0)),
            _ => Err(BumpError::Multiple(flat)),
        }
    }
}
