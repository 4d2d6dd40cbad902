//! # quill-tools
//!
//! Tool registry and preparation pipeline for the Quill editor.
//!
//! The host hands the editor a set of named tools. Before the editor exposes
//! them, each tool that has a preparation routine gets to run it. This crate
//! runs those routines one after another in registration order, keeps going
//! when one fails, and splits the tools into *available* and *unavailable*.
//!
//! ## Flow
//!
//! ```text
//! EditorConfig ──► ToolRegistry::new ──► PreparationPipeline::run ──► available()
//!   { tools }        (MissingTools?)       task 1 → task 2 → ...       unavailable()
//! ```
//!
//! Tools without a preparation routine are not placed in either partition.
//! Hosts that want a complete usable set fold them in from
//! [`ToolRegistry::names`].

pub mod config;
pub mod error;
pub mod module;
pub mod observer;
pub mod partition;
pub mod pipeline;
pub mod registry;
pub mod task;

pub use config::{EditorConfig, ToolMap};
pub use error::{ConfigError, ConfigResult};
pub use module::ToolsModule;
pub use observer::{NoopObserver, PreparationObserver, TracingObserver};
pub use partition::Partitions;
pub use pipeline::{PreparationPipeline, PreparationReport, TaskOutcome};
pub use registry::ToolRegistry;
pub use task::{PreparationTask, TaskState};
