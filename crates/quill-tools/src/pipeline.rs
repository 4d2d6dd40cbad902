//! Sequential tool preparation.
//!
//! The [`PreparationPipeline`] walks a [`ToolRegistry`] in registration order,
//! runs each tool's preparation routine and sorts the tool into the
//! registry's available or unavailable partition:
//!
//! - Only tools that expose a routine get a task; others are skipped and end
//!   up in neither partition.
//! - Tasks run one at a time. Task *i + 1* starts only after task *i* has
//!   succeeded or failed, so the toolbox order downstream is reproducible.
//! - A failing (or panicking) routine marks its tool unavailable and the
//!   cycle moves on. Individual failures never fail the cycle.
//!
//! There is no timeout and no retry. A routine that never completes stalls
//! the whole cycle.

use crate::observer::{PreparationObserver, TracingObserver};
use crate::registry::ToolRegistry;
use crate::task::{PreparationTask, TaskState};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// Outcome of one task within a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    /// Name the tool is registered under
    pub name: String,
    /// Final task state (`Succeeded` or `Failed`)
    pub state: TaskState,
    /// Time spent in the routine
    pub duration_ms: u64,
}

/// Summary of one preparation cycle.
///
/// Failure details are reported to the observer only.
#[derive(Debug, Clone)]
pub struct PreparationReport {
    /// Identifier for correlating observer events
    pub cycle_id: Uuid,
    /// When the cycle started
    pub started_at: DateTime<Utc>,
    /// Wall time for the whole cycle
    pub duration_ms: u64,
    /// One entry per task, in execution order
    pub outcomes: Vec<TaskOutcome>,
}

impl PreparationReport {
    fn new(cycle_id: Uuid, started_at: DateTime<Utc>) -> Self {
        Self {
            cycle_id,
            started_at,
            duration_ms: 0,
            outcomes: Vec::new(),
        }
    }

    /// Names of tools whose routine succeeded, in execution order.
    pub fn succeeded(&self) -> Vec<&str> {
        self.names_in(TaskState::Succeeded)
    }

    /// Names of tools whose routine failed, in execution order.
    pub fn failed(&self) -> Vec<&str> {
        self.names_in(TaskState::Failed)
    }

    /// Names of every tool that was attempted, in execution order.
    pub fn attempted(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn names_in(&self, state: TaskState) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.state == state)
            .map(|o| o.name.as_str())
            .collect()
    }
}

/// Runs tool preparation routines one after another.
///
/// # Example
///
/// ```no_run
/// use quill_tools::{EditorConfig, PreparationPipeline, ToolRegistry, TracingObserver};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), quill_tools::ConfigError> {
/// let mut registry = ToolRegistry::new(EditorConfig::new())?;
/// let pipeline = PreparationPipeline::new(Arc::new(TracingObserver));
///
/// let report = pipeline.run(&mut registry).await;
/// println!("{} tool(s) failed", report.failed().len());
/// # Ok(())
/// # }
/// ```
pub struct PreparationPipeline {
    observer: Arc<dyn PreparationObserver>,
}

impl PreparationPipeline {
    /// Create a pipeline reporting to `observer`.
    pub fn new(observer: Arc<dyn PreparationObserver>) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &Arc<dyn PreparationObserver> {
        &self.observer
    }

    /// Build the ordered task list for `registry`.
    ///
    /// One task per tool that exposes a preparation routine, in registration
    /// order.
    pub fn tasks(&self, registry: &ToolRegistry) -> Vec<PreparationTask> {
        registry
            .iter()
            .filter_map(|(name, tool)| {
                PreparationTask::new(name, Arc::clone(tool), registry.config_for(name))
            })
            .collect()
    }

    /// Run one preparation cycle over `registry`.
    ///
    /// Resolves once every task has been attempted. Successful tools are
    /// recorded in [`ToolRegistry::available`], failed ones in
    /// [`ToolRegistry::unavailable`]. Running a second cycle on the same
    /// registry re-runs every routine and rebuilds both partitions in
    /// registration order.
    pub async fn run(&self, registry: &mut ToolRegistry) -> PreparationReport {
        let cycle_started = Instant::now();
        let mut report = PreparationReport::new(Uuid::new_v4(), Utc::now());
        let tasks = self.tasks(registry);

        registry.partitions_mut().clear();
        self.observer.cycle_started(report.cycle_id, tasks.len());

        if tasks.is_empty() {
            debug!("No tools require preparation");
            self.observer.cycle_finished(&report);
            return report;
        }

        for mut task in tasks {
            self.observer.task_started(task.name());
            let started = Instant::now();
            let result = task.execute().await;
            let elapsed = started.elapsed();

            let partitions = registry.partitions_mut();
            match result {
                Ok(()) => {
                    partitions.mark_available(task.name(), Arc::clone(task.tool()));
                    self.observer.task_succeeded(task.name(), elapsed);
                }
                Err(e) => {
                    partitions.mark_unavailable(task.name(), Arc::clone(task.tool()));
                    self.observer.task_failed(task.name(), &e, elapsed);
                }
            }

            report.outcomes.push(TaskOutcome {
                name: task.name().to_string(),
                state: task.state(),
                duration_ms: elapsed.as_millis() as u64,
            });
        }

        report.duration_ms = cycle_started.elapsed().as_millis() as u64;
        self.observer.cycle_finished(&report);
        report
    }
}

impl Default for PreparationPipeline {
    fn default() -> Self {
        Self::new(Arc::new(TracingObserver))
    }
}
