//! Editor configuration consumed by the tool registry.

use indexmap::IndexMap;
use quill_tool_core::{ToolConfig, ToolDefinition};
use std::collections::HashMap;
use std::sync::Arc;

/// Tool definitions keyed by name, in registration order.
pub type ToolMap = IndexMap<String, ToolDefinition>;

/// Configuration supplied by the host when the editor starts.
#[derive(Clone, Default)]
pub struct EditorConfig {
    /// Tool definitions by name. `None` means the host never supplied a
    /// `tools` entry, which the registry rejects.
    pub tools: Option<ToolMap>,
    /// Per-tool configuration by name.
    pub tools_config: HashMap<String, ToolConfig>,
}

impl EditorConfig {
    /// Create a configuration with an empty `tools` entry.
    pub fn new() -> Self {
        Self {
            tools: Some(ToolMap::new()),
            tools_config: HashMap::new(),
        }
    }

    /// Append a tool definition under `name`.
    ///
    /// Re-using a name replaces the definition but keeps its original
    /// position.
    pub fn with_tool<T>(mut self, name: impl Into<String>, tool: T) -> Self
    where
        T: quill_tool_core::Tool + 'static,
    {
        self.tools
            .get_or_insert_with(ToolMap::new)
            .insert(name.into(), Arc::new(tool));
        self
    }

    /// Append an already shared tool definition under `name`.
    pub fn with_definition(mut self, name: impl Into<String>, tool: ToolDefinition) -> Self {
        self.tools
            .get_or_insert_with(ToolMap::new)
            .insert(name.into(), tool);
        self
    }

    /// Set the configuration for the tool registered under `name`.
    pub fn with_tool_config(mut self, name: impl Into<String>, config: ToolConfig) -> Self {
        self.tools_config.insert(name.into(), config);
        self
    }
}

impl std::fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorConfig")
            .field(
                "tools",
                &self
                    .tools
                    .as_ref()
                    .map(|tools| tools.keys().collect::<Vec<_>>()),
            )
            .field("tools_config", &self.tools_config)
            .finish()
    }
}
