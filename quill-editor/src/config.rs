//! Configuration file loading and management
//!
//! This module handles loading and parsing the editor configuration from
//! `$XDG_CONFIG_HOME/quill/editor.toml`. If the configuration file doesn't
//! exist, a default configuration is created with documented comments.

use anyhow::{Context, Result};
use quill_tool_core::ToolConfig;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Main editor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Tool names to register, in toolbox order.
    /// Leaving this out is a configuration error at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    /// Editor-wide settings
    #[serde(default)]
    pub editor: EditorSection,
    /// Per-tool configuration keyed by tool name
    #[serde(default)]
    pub tools_config: HashMap<String, ToolConfig>,
}

/// Editor-wide settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorSection {
    /// Log level (trace, debug, info, warn, error)
    /// Default: "info"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tools: Some(
                tool_builtin::builtin_names()
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            ),
            editor: EditorSection::default(),
            tools_config: HashMap::new(),
        }
    }
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the specified path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default XDG config location
    ///
    /// If the configuration file doesn't exist, creates a default configuration
    /// file with documented comments.
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_file(&config_path)?;
        }

        Self::load(&config_path)
    }

    /// Get the default configuration file path
    ///
    /// Returns `$XDG_CONFIG_HOME/quill/editor.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "quill-editor", "quill")
            .context("Failed to determine project directories")?;

        Ok(dirs.config_dir().join("editor.toml"))
    }

    /// Create a default configuration file with documented comments
    fn create_default_file(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write default config file: {}", path.display()))?;

        tracing::info!("Created default configuration file at: {}", path.display());
        Ok(())
    }

    /// Generate the default configuration file content with comments
    pub fn default_config_content() -> String {
        r#"# Quill Editor Configuration

# Tools to register, in toolbox order.
# Each tool with a preparation routine is prepared in this order at startup.
# Removing this line stops the editor with "Can't start without tools".
tools = ["paragraph", "markdown", "embed"]

[editor]
# Log level: trace, debug, info, warn, error
# Default: "info"
log_level = "info"

# Per-tool configuration
# Each tool can be configured with:
# - icon_class_name: Toolbar icon (default: "default-icon")
# - display_in_toolbox: Show in the toolbox (default: false)
# - enable_line_breaks: Enter inserts a line break (default: false)
# - settings: Tool-specific settings (varies by tool)

[tools_config.markdown]
display_in_toolbox = true

[tools_config.markdown.settings]
# One of: commonmark, gfm
flavor = "commonmark"

[tools_config.embed]
display_in_toolbox = true

[tools_config.embed.settings]
services = ["youtube", "vimeo"]
# Simulate a network outage during preparation
# offline = true
"#
        .to_string()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.editor.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log_level: {}. Must be one of: {}",
                self.editor.log_level,
                valid_log_levels.join(", ")
            );
        }

        if let Some(tools) = &self.tools {
            let mut seen = HashSet::new();
            for name in tools {
                if name.trim().is_empty() {
                    anyhow::bail!("Tool names must not be empty");
                }
                if !seen.insert(name.as_str()) {
                    anyhow::bail!("Tool '{}' is listed more than once", name);
                }
            }
        }

        Ok(())
    }

    /// Parsed log level for the tracing subscriber
    pub fn log_level(&self) -> tracing::Level {
        self.editor
            .log_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}
