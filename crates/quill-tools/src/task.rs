//! A single tool preparation step.

use futures::FutureExt;
use quill_tool_core::{ToolConfig, ToolDefinition, ToolError};
use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;

/// Lifecycle of one preparation task.
///
/// `Pending -> Running -> {Succeeded, Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// A tool's preparation routine paired with the name it is registered under.
///
/// Only built for tools that expose a routine.
pub struct PreparationTask {
    name: String,
    tool: ToolDefinition,
    config: ToolConfig,
    state: TaskState,
}

impl PreparationTask {
    /// Build a task, or `None` if the tool has no preparation routine.
    pub fn new(name: impl Into<String>, tool: ToolDefinition, config: ToolConfig) -> Option<Self> {
        tool.as_has_prepare()?;
        Some(Self {
            name: name.into(),
            tool,
            config,
            state: TaskState::Pending,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tool(&self) -> &ToolDefinition {
        &self.tool
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Run the preparation routine to completion.
    ///
    /// A panic inside the routine is reported as [`ToolError::Panicked`].
    /// A task runs at most once; later calls do not invoke the routine again.
    pub async fn execute(&mut self) -> Result<(), ToolError> {
        if self.state != TaskState::Pending {
            return match self.state {
                TaskState::Succeeded => Ok(()),
                _ => Err(ToolError::Preparation(format!(
                    "task '{}' already {}",
                    self.name, self.state
                ))),
            };
        }

        self.state = TaskState::Running;

        let result = match self.tool.as_has_prepare() {
            // The call itself sits inside the guarded future so a routine that
            // panics before returning its future is caught too.
            Some(prepare) => AssertUnwindSafe(async { prepare.prepare(&self.config).await })
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| {
                    Err(ToolError::Panicked(panic_message(payload.as_ref())))
                }),
            None => Err(ToolError::Preparation(format!(
                "tool '{}' has no preparation routine",
                self.name
            ))),
        };

        self.state = if result.is_ok() {
            TaskState::Succeeded
        } else {
            TaskState::Failed
        };
        result
    }
}

impl fmt::Debug for PreparationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparationTask")
            .field("name", &self.name)
            .field("state", &self.state)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
