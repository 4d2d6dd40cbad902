//! Observability hooks for preparation cycles.
//!
//! The pipeline never exposes per-tool errors through its result. Anything
//! that wants them (logs, metrics, a host status panel) implements
//! [`PreparationObserver`] and is handed to the pipeline at construction.

use crate::pipeline::PreparationReport;
use quill_tool_core::ToolError;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Receives preparation progress from the pipeline.
///
/// Every method has an empty default, so observers only implement what they
/// care about. Calls arrive in execution order from a single task.
pub trait PreparationObserver: Send + Sync {
    /// A cycle is about to run `task_count` tasks.
    fn cycle_started(&self, _cycle_id: Uuid, _task_count: usize) {}

    /// A tool's routine is about to run.
    fn task_started(&self, _name: &str) {}

    /// A tool's routine completed successfully.
    fn task_succeeded(&self, _name: &str, _elapsed: Duration) {}

    /// A tool's routine failed or panicked.
    fn task_failed(&self, _name: &str, _error: &ToolError, _elapsed: Duration) {}

    /// Every task has been attempted.
    fn cycle_finished(&self, _report: &PreparationReport) {}
}

/// Observer that writes progress to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PreparationObserver for TracingObserver {
    fn cycle_started(&self, cycle_id: Uuid, task_count: usize) {
        info!("Preparing {} tool(s) (cycle {})", task_count, cycle_id);
    }

    fn task_started(&self, name: &str) {
        debug!("Preparing tool '{}'", name);
    }

    fn task_succeeded(&self, name: &str, elapsed: Duration) {
        debug!("Tool '{}' prepared in {}ms", name, elapsed.as_millis());
    }

    fn task_failed(&self, name: &str, error: &ToolError, _elapsed: Duration) {
        warn!("Tool '{}' was not loaded. Preparation failed: {}", name, error);
    }

    fn cycle_finished(&self, report: &PreparationReport) {
        info!(
            "Tools prepared: {} available, {} unavailable in {}ms",
            report.succeeded().len(),
            report.failed().len(),
            report.duration_ms
        );
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PreparationObserver for NoopObserver {}
