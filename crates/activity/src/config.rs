//! Idle-monitor configuration.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A user interaction kind the monitor may treat as activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PointerMove,
    PointerPress,
    KeyPress,
    Scroll,
    Touch,
}

impl ActivityKind {
    /// Every interaction kind.
    pub fn all() -> HashSet<Self> {
        [
            Self::PointerMove,
            Self::PointerPress,
            Self::KeyPress,
            Self::Scroll,
            Self::Touch,
        ]
        .into_iter()
        .collect()
    }
}

/// Caller-supplied monitor configuration.
///
/// Nothing here is defaulted to a magic duration: the idle window, the
/// debounce window, and the qualifying event set all come from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleConfig {
    /// Duration of inactivity after which the user is considered idle.
    pub idle_timeout: Duration,
    /// Window used to coalesce bursts of activity into one timer reset.
    pub debounce: Duration,
    /// Interaction kinds that count as activity; others are ignored.
    pub events: HashSet<ActivityKind>,
}

impl IdleConfig {
    /// Configuration qualifying every interaction kind.
    pub fn new(idle_timeout: Duration, debounce: Duration) -> Self {
        Self {
            idle_timeout,
            debounce,
            events: ActivityKind::all(),
        }
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = ActivityKind>) -> Self {
        self.events = events.into_iter().collect();
        self
    }

    pub fn qualifies(&self, kind: ActivityKind) -> bool {
        self.events.contains(&kind)
    }
}
