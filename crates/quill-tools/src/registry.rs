//! # Tool Registry
//!
//! Holds the tool definitions and per-tool configuration for one editor
//! instance, plus the partitions written by the preparation pipeline.
//!
//! Definitions are stored in registration order. The mapping is fixed once
//! the registry is built; tools are not added or removed mid-cycle.

use crate::config::{EditorConfig, ToolMap};
use crate::error::{ConfigError, ConfigResult};
use crate::partition::Partitions;
use quill_tool_core::{ToolConfig, ToolDefinition};
use std::collections::HashMap;
use tracing::debug;

/// Registry of tool definitions for one editor instance.
///
/// # Example
///
/// ```no_run
/// use quill_tools::{EditorConfig, PreparationPipeline, ToolRegistry};
///
/// # async fn example() -> Result<(), quill_tools::ConfigError> {
/// let mut registry = ToolRegistry::new(EditorConfig::new())?;
/// PreparationPipeline::default().run(&mut registry).await;
///
/// for name in registry.available().keys() {
///     println!("ready: {name}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct ToolRegistry {
    tools: ToolMap,
    tools_config: HashMap<String, ToolConfig>,
    partitions: Partitions,
}

impl ToolRegistry {
    /// Build a registry from the host configuration.
    ///
    /// Copies every entry of `config.tools` without inspecting the
    /// definitions themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingTools`] if the configuration has no
    /// `tools` entry.
    pub fn new(config: EditorConfig) -> ConfigResult<Self> {
        let EditorConfig {
            tools,
            tools_config,
        } = config;
        let tools = tools.ok_or(ConfigError::MissingTools)?;

        debug!("Registered {} tool(s)", tools.len());

        Ok(Self {
            tools,
            tools_config,
            partitions: Partitions::new(),
        })
    }

    /// Get a tool definition by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// Check if a tool is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Iterate over `(name, definition)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ToolDefinition)> {
        self.tools.iter().map(|(name, tool)| (name.as_str(), tool))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Configuration for the tool registered under `name`.
    ///
    /// Falls back to [`ToolConfig::default`] when the host supplied none.
    pub fn config_for(&self, name: &str) -> ToolConfig {
        self.tools_config.get(name).cloned().unwrap_or_default()
    }

    /// Tools whose preparation routine succeeded in the last cycle.
    pub fn available(&self) -> &ToolMap {
        self.partitions.available()
    }

    /// Tools whose preparation routine failed in the last cycle.
    pub fn unavailable(&self) -> &ToolMap {
        self.partitions.unavailable()
    }

    /// Check if `name` was prepared successfully.
    pub fn is_available(&self, name: &str) -> bool {
        self.partitions.available().contains_key(name)
    }

    pub fn partitions(&self) -> &Partitions {
        &self.partitions
    }

    pub(crate) fn partitions_mut(&mut self) -> &mut Partitions {
        &mut self.partitions
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .field("tools_config", &self.tools_config)
            .field("partitions", &self.partitions)
            .finish()
    }
}
