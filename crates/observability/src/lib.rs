//! Tracing/logging setup shared by everything embedding the engine.

pub mod tracing;

pub use tracing::{init, init_with_filter};
