//! Error types reported by tool preparation routines.

use thiserror::Error;

/// Errors a tool can raise while preparing itself.
///
/// These never abort a preparation cycle. The pipeline records the tool as
/// unavailable and hands the error to its observer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Generic preparation failure.
    #[error("Preparation failed: {0}")]
    Preparation(String),

    /// A remote resource the tool depends on could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The per-tool settings were rejected by the tool.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// The preparation routine panicked.
    #[error("Preparation panicked: {0}")]
    Panicked(String),
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;
