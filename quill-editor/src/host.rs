//! Editor host wiring.
//!
//! Turns the file configuration into an [`EditorConfig`] by resolving tool
//! names against the built-in catalog, then runs one preparation cycle.

use crate::config::Config;
use anyhow::{Context, Result};
use quill_tools::{EditorConfig, PreparationObserver, ToolMap, ToolsModule};
use std::sync::Arc;
use tracing::{info, warn};

/// Build the editor configuration handed to the tools module.
///
/// Unknown tool names are logged and skipped. A file without a `tools` entry
/// produces an [`EditorConfig`] without one, so the tools module reports the
/// missing entry itself.
pub fn editor_config(config: &Config) -> EditorConfig {
    let tools = config.tools.as_ref().map(|names| {
        let mut tools = ToolMap::new();
        for name in names {
            match tool_builtin::builtin_tool(name) {
                Some(tool) => {
                    tools.insert(name.clone(), tool);
                }
                None => warn!("Unknown tool '{}' in configuration, skipping", name),
            }
        }
        tools
    });

    EditorConfig {
        tools,
        tools_config: config.tools_config.clone(),
    }
}

/// Prepare the configured tools and return the ready module.
pub async fn prepare_tools(
    config: &Config,
    observer: Arc<dyn PreparationObserver>,
) -> Result<ToolsModule> {
    let mut module = ToolsModule::new(editor_config(config), observer);
    module
        .prepare()
        .await
        .context("Failed to prepare editor tools")?;

    info!(
        "Available tools: {:?}",
        module.available().keys().collect::<Vec<_>>()
    );
    if !module.unavailable().is_empty() {
        warn!(
            "Unavailable tools: {:?}",
            module.unavailable().keys().collect::<Vec<_>>()
        );
    }

    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_config_resolves_builtin_tools() {
        let config = Config {
            tools: Some(vec!["embed".to_string(), "paragraph".to_string()]),
            ..Config::default()
        };

        let editor = editor_config(&config);
        let names: Vec<_> = editor.tools.unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["embed", "paragraph"]);
    }

    #[test]
    fn test_editor_config_skips_unknown_tools() {
        let config = Config {
            tools: Some(vec!["table".to_string(), "markdown".to_string()]),
            ..Config::default()
        };

        let editor = editor_config(&config);
        let names: Vec<_> = editor.tools.unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["markdown"]);
    }

    #[test]
    fn test_editor_config_without_tools() {
        let config = Config {
            tools: None,
            ..Config::default()
        };

        assert!(editor_config(&config).tools.is_none());
    }
}
