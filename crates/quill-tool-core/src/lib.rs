//! # quill-tool-core
//!
//! Core traits and types for Quill editor tools.
//!
//! A tool is a pluggable editor capability identified by the name it is
//! registered under. Before a tool can be used it may need to prepare itself
//! (load a script, warm a cache, reach a remote service). Tools that need this
//! implement [`HasPrepare`] and return it from [`Tool::as_has_prepare`].
//!
//! ## Example
//!
//! ```
//! use async_trait::async_trait;
//! use quill_tool_core::prelude::*;
//! use std::any::Any;
//!
//! struct Delimiter;
//!
//! #[async_trait]
//! impl HasPrepare for Delimiter {
//!     async fn prepare(&self, _config: &ToolConfig) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! impl Tool for Delimiter {
//!     fn as_has_prepare(&self) -> Option<&dyn HasPrepare> {
//!         Some(self)
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//! ```

pub mod config;
pub mod error;

use async_trait::async_trait;
use std::any::Any;
use std::sync::Arc;

pub use config::{ToolConfig, DEFAULT_ICON_CLASS_NAME};
pub use error::{Result, ToolError};

/// An editor tool definition.
///
/// The registry owns definitions for the lifetime of a preparation cycle and
/// never mutates them.
pub trait Tool: Send + Sync {
    /// The tool's preparation routine, if it has one.
    fn as_has_prepare(&self) -> Option<&dyn HasPrepare> {
        None
    }

    /// Access the concrete tool type.
    fn as_any(&self) -> &dyn Any;
}

/// A tool that must prepare itself before it is usable.
///
/// The routine may complete immediately or suspend on asynchronous work.
/// Returning an error marks the tool unavailable for the current cycle.
#[async_trait]
pub trait HasPrepare: Send + Sync {
    async fn prepare(&self, config: &ToolConfig) -> Result<()>;
}

/// Shared handle to a tool definition.
pub type ToolDefinition = Arc<dyn Tool>;

pub mod prelude {
    pub use crate::{
        HasPrepare, Result, Tool, ToolConfig, ToolDefinition, ToolError,
        DEFAULT_ICON_CLASS_NAME,
    };
}
