//! Quill editor library
//!
//! This module exports the host components of the editor binary for testing purposes.

pub mod config;
pub mod host;
pub mod logging;
