//! Error types for tool registry construction.

use thiserror::Error;

/// Fatal configuration errors.
///
/// Unlike [`quill_tool_core::ToolError`], these stop a preparation cycle
/// before any tool runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The editor configuration has no `tools` entry.
    #[error("Can't start without tools")]
    MissingTools,
}

/// Result type for registry operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
