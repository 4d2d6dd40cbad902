//! Test fixtures for integration tests.
//!
//! Scripted tools with instrumented preparation routines and an observer
//! that records every event it receives.

#![allow(dead_code)]

use async_trait::async_trait;
use quill_tool_core::prelude::*;
use quill_tools::{PreparationObserver, PreparationReport};
use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// One recorded invocation of a preparation routine.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub name: String,
    pub sequence: usize,
    pub started: Instant,
    pub finished: Instant,
    pub settings: serde_json::Value,
}

/// Shared log of routine invocations across tools.
#[derive(Debug, Default, Clone)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Invocation>>>,
    counter: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.name).collect()
    }

    pub fn count_for(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| c.name == name).count()
    }

    /// Highest number of routines observed running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn enter(&self) -> usize {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    fn exit(&self, invocation: Invocation) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(invocation);
    }
}

/// What a scripted routine does when invoked.
#[derive(Debug, Clone)]
pub enum Outcome {
    Succeed,
    Fail(ToolError),
    /// Fail on the first invocation only, then succeed.
    FailFirst(ToolError),
    Panic(&'static str),
}

/// A tool whose preparation routine follows a script.
pub struct ScriptedTool {
    name: String,
    delay: Duration,
    outcome: Outcome,
    log: CallLog,
    attempts: AtomicUsize,
}

impl ScriptedTool {
    pub fn succeeding(name: &str, log: &CallLog) -> Self {
        Self::new(name, Outcome::Succeed, log)
    }

    pub fn failing(name: &str, error: ToolError, log: &CallLog) -> Self {
        Self::new(name, Outcome::Fail(error), log)
    }

    pub fn panicking(name: &str, message: &'static str, log: &CallLog) -> Self {
        Self::new(name, Outcome::Panic(message), log)
    }

    pub fn new(name: &str, outcome: Outcome, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            delay: Duration::ZERO,
            outcome,
            log: log.clone(),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl HasPrepare for ScriptedTool {
    async fn prepare(&self, config: &ToolConfig) -> Result<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        let sequence = self.log.enter();
        let started = Instant::now();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.log.exit(Invocation {
            name: self.name.clone(),
            sequence,
            started,
            finished: Instant::now(),
            settings: config.settings.clone(),
        });

        match &self.outcome {
            Outcome::Succeed => Ok(()),
            Outcome::Fail(error) => Err(error.clone()),
            Outcome::FailFirst(error) if attempt == 0 => Err(error.clone()),
            Outcome::FailFirst(_) => Ok(()),
            Outcome::Panic(message) => panic!("{}", message),
        }
    }
}

impl Tool for ScriptedTool {
    fn as_has_prepare(&self) -> Option<&dyn HasPrepare> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A tool that panics while building its preparation future, before the
/// future is ever polled.
pub struct EagerPanicTool;

impl HasPrepare for EagerPanicTool {
    fn prepare<'life0, 'life1, 'async_trait>(
        &'life0 self,
        _config: &'life1 ToolConfig,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'async_trait>>
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        panic!("settings check failed")
    }
}

impl Tool for EagerPanicTool {
    fn as_has_prepare(&self) -> Option<&dyn HasPrepare> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A tool with no preparation routine.
pub struct StaticTool;

impl Tool for StaticTool {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Observer event, flattened for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CycleStarted(usize),
    TaskStarted(String),
    TaskSucceeded(String),
    TaskFailed(String, ToolError),
    CycleFinished(usize),
}

/// Observer that records every event.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl PreparationObserver for RecordingObserver {
    fn cycle_started(&self, _cycle_id: Uuid, task_count: usize) {
        self.push(Event::CycleStarted(task_count));
    }

    fn task_started(&self, name: &str) {
        self.push(Event::TaskStarted(name.to_string()));
    }

    fn task_succeeded(&self, name: &str, _elapsed: Duration) {
        self.push(Event::TaskSucceeded(name.to_string()));
    }

    fn task_failed(&self, name: &str, error: &ToolError, _elapsed: Duration) {
        self.push(Event::TaskFailed(name.to_string(), error.clone()));
    }

    fn cycle_finished(&self, report: &PreparationReport) {
        self.push(Event::CycleFinished(report.outcomes.len()));
    }
}
