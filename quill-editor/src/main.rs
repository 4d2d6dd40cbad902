//! # quill-editor
//!
//! The Quill editor host.
//!
//! At startup the host:
//! - Loads the editor configuration
//! - Registers the configured tools in toolbox order
//! - Runs each tool's preparation routine, one at a time
//! - Reports which tools are available and which failed to prepare
//!
//! ## Configuration
//!
//! The editor reads `$XDG_CONFIG_HOME/quill/editor.toml`, or the path given as
//! the first argument.
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin quill-editor
//!
//! # With a specific config file
//! cargo run --bin quill-editor -- ./editor.toml
//! ```

use anyhow::Result;
use quill_editor::config::Config;
use quill_editor::{host, logging};
use quill_tools::TracingObserver;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let log_handle = logging::init();

    info!("Starting quill-editor v{}", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    log_handle.set_level(config.log_level())?;

    let module = host::prepare_tools(&config, Arc::new(TracingObserver)).await?;

    if let Some(registry) = module.registry() {
        let unprepared: Vec<_> = registry
            .names()
            .into_iter()
            .filter(|name| {
                !module.available().contains_key(*name) && !module.unavailable().contains_key(*name)
            })
            .collect();
        info!("Tools without preparation: {:?}", unprepared);
    }

    info!("Editor startup complete");
    Ok(())
}
