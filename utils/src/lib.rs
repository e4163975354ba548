//! Shared utilities for the coinkey workspace.

pub mod logging;

pub use logging::init_tracing_with;
