//! Error types for the stack designs.

use crate::types::Version;
use thiserror::Error;

/// Main error type for stack operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("cannot pop from an empty stack")]
    EmptyStack,

    #[error("version out of range: {version} (latest is {latest})")]
    VersionOutOfRange { version: Version, latest: Version },

    #[error("index out of range: {index} (content length is {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for stack operations.
pub type Result<T> = std::result::Result<T, StackError>;
