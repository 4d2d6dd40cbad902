//! Host-facing tools module.
//!
//! Wraps registry construction and one preparation cycle behind the shape
//! an editor host expects: hand over the configuration at startup, call
//! [`ToolsModule::prepare`] once, then read the available and unavailable
//! tools.

use crate::config::{EditorConfig, ToolMap};
use crate::error::ConfigResult;
use crate::observer::PreparationObserver;
use crate::pipeline::{PreparationPipeline, PreparationReport};
use crate::registry::ToolRegistry;
use quill_tool_core::ToolConfig;
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

fn empty_tool_map() -> &'static ToolMap {
    static EMPTY: OnceLock<ToolMap> = OnceLock::new();
    EMPTY.get_or_init(ToolMap::new)
}

/// The editor's tools module.
pub struct ToolsModule {
    config: Option<EditorConfig>,
    pipeline: PreparationPipeline,
    registry: Option<ToolRegistry>,
    report: Option<PreparationReport>,
}

impl ToolsModule {
    /// Create the module. The configuration is not checked until
    /// [`prepare`](Self::prepare) runs.
    pub fn new(config: EditorConfig, observer: Arc<dyn PreparationObserver>) -> Self {
        Self {
            config: Some(config),
            pipeline: PreparationPipeline::new(observer),
            registry: None,
            report: None,
        }
    }

    /// Configuration used for tools the host did not configure.
    pub fn default_config() -> ToolConfig {
        ToolConfig::default()
    }

    /// Build the registry and run one preparation cycle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::MissingTools`] if the configuration has
    /// no `tools` entry. No preparation routine runs in that case.
    pub async fn prepare(&mut self) -> ConfigResult<&PreparationReport> {
        let mut registry = match self.registry.take() {
            Some(registry) => registry,
            None => {
                let config = self.config.take().unwrap_or_default();
                ToolRegistry::new(config).inspect_err(|e| warn!("Tools module: {}", e))?
            }
        };

        let report = self.pipeline.run(&mut registry).await;
        info!(
            "Tools module ready: {} available, {} unavailable",
            registry.available().len(),
            registry.unavailable().len()
        );

        self.registry = Some(registry);
        Ok(self.report.insert(report))
    }

    /// Tools whose preparation succeeded. Empty before [`prepare`](Self::prepare).
    pub fn available(&self) -> &ToolMap {
        self.registry
            .as_ref()
            .map(ToolRegistry::available)
            .unwrap_or(empty_tool_map())
    }

    /// Tools whose preparation failed. Empty before [`prepare`](Self::prepare).
    pub fn unavailable(&self) -> &ToolMap {
        self.registry
            .as_ref()
            .map(ToolRegistry::unavailable)
            .unwrap_or(empty_tool_map())
    }

    /// The registry, once [`prepare`](Self::prepare) has built it.
    pub fn registry(&self) -> Option<&ToolRegistry> {
        self.registry.as_ref()
    }

    /// Report of the most recent cycle.
    pub fn last_report(&self) -> Option<&PreparationReport> {
        self.report.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::observer::NoopObserver;

    #[tokio::test]
    async fn test_prepare_without_tools_entry() {
        let mut module = ToolsModule::new(EditorConfig::default(), Arc::new(NoopObserver));
        let err = module.prepare().await.unwrap_err();

        assert_eq!(err, ConfigError::MissingTools);
        assert!(module.registry().is_none());
        assert!(module.last_report().is_none());
    }

    #[tokio::test]
    async fn test_accessors_empty_before_prepare() {
        let module = ToolsModule::new(EditorConfig::new(), Arc::new(NoopObserver));
        assert!(module.available().is_empty());
        assert!(module.unavailable().is_empty());
    }

    #[tokio::test]
    async fn test_prepare_empty_tools() {
        let mut module = ToolsModule::new(EditorConfig::new(), Arc::new(NoopObserver));
        let report = module.prepare().await.unwrap();

        assert!(report.is_empty());
        assert!(module.registry().unwrap().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = ToolsModule::default_config();
        assert_eq!(config.icon_class_name, "default-icon");
        assert!(!config.display_in_toolbox);
        assert!(!config.enable_line_breaks);
    }
}
