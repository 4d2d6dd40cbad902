//! # tool-builtin
//!
//! First-party sample tools for the Quill editor.
//!
//! These tools do not talk to any real service. They exist to exercise the
//! preparation pipeline from the editor binary and from tests:
//!
//! - `paragraph` has no preparation routine.
//! - `markdown` checks its configured flavor.
//! - `embed` checks its configured services and fails when `offline` is set.

use async_trait::async_trait;
use quill_tool_core::prelude::*;
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;
use tracing::debug;

/// Markdown flavors the `markdown` tool understands.
pub const MARKDOWN_FLAVORS: &[&str] = &["commonmark", "gfm"];

/// Services the `embed` tool can embed.
pub const EMBED_SERVICES: &[&str] = &["youtube", "vimeo", "twitter", "codepen"];

/// Names of the built-in tools, in default toolbox order.
pub fn builtin_names() -> &'static [&'static str] {
    &["paragraph", "markdown", "embed"]
}

/// Look up a built-in tool by name.
pub fn builtin_tool(name: &str) -> Option<ToolDefinition> {
    match name {
        "paragraph" => Some(Arc::new(ParagraphTool::new())),
        "markdown" => Some(Arc::new(MarkdownTool::new())),
        "embed" => Some(Arc::new(EmbedTool::new())),
        _ => None,
    }
}

// ============================================================================
// Paragraph
// ============================================================================

/// Plain text block. Needs no preparation.
#[derive(Debug, Default)]
pub struct ParagraphTool;

impl ParagraphTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for ParagraphTool {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Markdown
// ============================================================================

/// Markdown block.
#[derive(Debug, Default)]
pub struct MarkdownTool;

impl MarkdownTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HasPrepare for MarkdownTool {
    async fn prepare(&self, config: &ToolConfig) -> Result<()> {
        let flavor = match config.setting("flavor") {
            None => "commonmark",
            Some(Value::String(flavor)) => flavor.as_str(),
            Some(other) => {
                return Err(ToolError::InvalidSettings(format!(
                    "flavor must be a string, got {other}"
                )))
            }
        };

        if !MARKDOWN_FLAVORS.contains(&flavor) {
            return Err(ToolError::InvalidSettings(format!(
                "unknown markdown flavor: {flavor}"
            )));
        }

        debug!("Markdown tool ready ({})", flavor);
        Ok(())
    }
}

impl Tool for MarkdownTool {
    fn as_has_prepare(&self) -> Option<&dyn HasPrepare> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Embed
// ============================================================================

/// Embedded third-party content block.
#[derive(Debug, Default)]
pub struct EmbedTool;

impl EmbedTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HasPrepare for EmbedTool {
    async fn prepare(&self, config: &ToolConfig) -> Result<()> {
        if config.setting("offline").and_then(Value::as_bool) == Some(true) {
            return Err(ToolError::Network("network down".to_string()));
        }

        let services = match config.setting("services") {
            None => return Ok(()),
            Some(Value::Array(services)) => services,
            Some(_) => {
                return Err(ToolError::InvalidSettings(
                    "services must be a list".to_string(),
                ))
            }
        };

        for service in services {
            match service.as_str() {
                Some(name) if EMBED_SERVICES.contains(&name) => {}
                _ => {
                    return Err(ToolError::InvalidSettings(format!(
                        "unsupported embed service: {service}"
                    )))
                }
            }
        }

        debug!("Embed tool ready ({} service(s))", services.len());
        Ok(())
    }
}

impl Tool for EmbedTool {
    fn as_has_prepare(&self) -> Option<&dyn HasPrepare> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
