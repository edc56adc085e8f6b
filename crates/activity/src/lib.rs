//! `steward-activity` — user inactivity detection.
//!
//! A two-state machine (Active/Idle) drives session-expiration UI: the
//! pure [`engine::IdleEngine`] decides transitions from observed activity
//! and deadlines, and [`monitor::IdleMonitor`] runs it on a tokio task
//! with debounced timer plumbing and guaranteed teardown.

pub mod config;
pub mod engine;
pub mod monitor;

pub use config::{ActivityKind, IdleConfig};
pub use engine::{IdleEngine, IdleTransition};
pub use monitor::{IdleMonitor, IdleObserver};
