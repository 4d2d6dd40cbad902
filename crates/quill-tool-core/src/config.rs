//! Per-tool configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Icon class used when a tool does not configure one.
pub const DEFAULT_ICON_CLASS_NAME: &str = "default-icon";

/// Configuration handed to a tool's preparation routine.
///
/// Hosts supply one of these per tool name. Tools without an entry receive
/// [`ToolConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Icon shown for the tool in the toolbar
    /// Default: "default-icon"
    pub icon_class_name: String,
    /// Whether the tool is listed in the toolbox
    /// Default: false
    pub display_in_toolbox: bool,
    /// Whether Enter inserts a line break instead of a new block
    /// Default: false
    pub enable_line_breaks: bool,
    /// Tool-specific settings as an arbitrary JSON object
    pub settings: Value,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            icon_class_name: DEFAULT_ICON_CLASS_NAME.to_string(),
            display_in_toolbox: false,
            enable_line_breaks: false,
            settings: Value::Object(serde_json::Map::new()),
        }
    }
}

impl ToolConfig {
    /// Replace the tool-specific settings.
    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }

    /// Look up one tool-specific setting by key.
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_tool_config() {
        let config = ToolConfig::default();
        assert_eq!(config.icon_class_name, "default-icon");
        assert!(!config.display_in_toolbox);
        assert!(!config.enable_line_breaks);
        assert_eq!(config.settings, json!({}));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ToolConfig =
            serde_json::from_value(json!({ "display_in_toolbox": true })).unwrap();
        assert!(config.display_in_toolbox);
        assert_eq!(config.icon_class_name, DEFAULT_ICON_CLASS_NAME);
        assert!(config.setting("anything").is_none());
    }

    #[test]
    fn test_settings_lookup() {
        let config = ToolConfig::default().with_settings(json!({ "flavor": "gfm" }));
        assert_eq!(config.setting("flavor"), Some(&json!("gfm")));
    }
}
