//! Available / unavailable split produced by a preparation cycle.

use crate::config::ToolMap;
use quill_tool_core::ToolDefinition;

/// The two disjoint tool partitions.
///
/// Only tools that ran a preparation routine appear here. A name is recorded
/// in exactly one partition; recording it again moves it. Each cycle clears
/// both maps first, so entries follow registration order.
#[derive(Clone, Default)]
pub struct Partitions {
    available: ToolMap,
    unavailable: ToolMap,
}

impl Partitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tools whose preparation routine succeeded.
    pub fn available(&self) -> &ToolMap {
        &self.available
    }

    /// Tools whose preparation routine failed.
    pub fn unavailable(&self) -> &ToolMap {
        &self.unavailable
    }

    pub(crate) fn mark_available(&mut self, name: &str, tool: ToolDefinition) {
        self.unavailable.shift_remove(name);
        self.available.insert(name.to_string(), tool);
    }

    pub(crate) fn mark_unavailable(&mut self, name: &str, tool: ToolDefinition) {
        self.available.shift_remove(name);
        self.unavailable.insert(name.to_string(), tool);
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.unavailable.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.available.clear();
        self.unavailable.clear();
    }
}

impl std::fmt::Debug for Partitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Partitions")
            .field("available", &self.available.keys().collect::<Vec<_>>())
            .field("unavailable", &self.unavailable.keys().collect::<Vec<_>>())
            .finish()
    }
}
