//! Log output for the editor binary.
//!
//! Logging starts at `INFO` before the configuration is read, so messages
//! emitted while loading it (such as creating the default file) are kept.
//! The configured level is applied once the file has been parsed.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, Registry};

/// Handle for changing the log level after logging has started.
#[derive(Clone)]
pub struct LogHandle {
    handle: reload::Handle<LevelFilter, Registry>,
}

impl LogHandle {
    /// Replace the active maximum level.
    pub fn set_level(&self, level: Level) -> Result<()> {
        self.handle
            .modify(|filter| *filter = LevelFilter::from_level(level))
            .context("Failed to update log level")
    }

    /// The active maximum level.
    pub fn level(&self) -> Result<LevelFilter> {
        self.handle
            .with_current(|filter| *filter)
            .context("Failed to read log level")
    }
}

/// Build the reloadable level filter without installing it.
pub fn level_layer() -> (reload::Layer<LevelFilter, Registry>, LogHandle) {
    let (layer, handle) = reload::Layer::new(LevelFilter::INFO);
    (layer, LogHandle { handle })
}

/// Install the global subscriber at `INFO`.
pub fn init() -> LogHandle {
    let (filter, handle) = level_layer();
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
    handle
}
