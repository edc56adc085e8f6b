//! Pure idle state machine.
//!
//! The engine owns no timers. Callers feed it activity observations and
//! poll it at the deadline it announces; the engine answers with the
//! transition (if any) that deadline produced. This keeps every timing
//! rule deterministic and testable without a runtime.

use std::time::Duration;

use tokio::time::Instant;

/// State transition produced by a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleTransition {
    /// The idle window elapsed with no settled activity.
    BecameIdle,
    /// Settled activity arrived while idle.
    BecameActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active,
    Idle,
}

/// Two-state idle machine with a trailing-edge debounce.
///
/// # Invariants
/// - While Active, the idle deadline is armed; it is reset only when a
///   burst of activity settles (one reset per settled burst, not one per
///   event).
/// - While Idle, the idle deadline is disarmed; the next settled burst
///   produces exactly one `BecameActive` and re-arms it.
/// - `BecameIdle` fires exactly once per period of inactivity.
#[derive(Debug)]
pub struct IdleEngine {
    idle_timeout: Duration,
    debounce: Duration,
    phase: Phase,
    idle_deadline: Instant,
    debounce_deadline: Option<Instant>,
}

impl IdleEngine {
    /// Start optimistic: the user is assumed present and the idle deadline
    /// is armed immediately.
    pub fn new(idle_timeout: Duration, debounce: Duration, now: Instant) -> Self {
        Self {
            idle_timeout,
            debounce,
            phase: Phase::Active,
            idle_deadline: now + idle_timeout,
            debounce_deadline: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Observe a qualifying activity event.
    ///
    /// Trailing-edge debounce: every event pushes the settle point, so a
    /// burst collapses into a single reset when it goes quiet.
    pub fn record_activity(&mut self, now: Instant) {
        self.debounce_deadline = Some(now + self.debounce);
    }

    /// Reset the idle deadline immediately, bypassing the debounce.
    ///
    /// Used by callers that need an explicit reset affordance. While idle
    /// this behaves like settled activity.
    pub fn force_reset(&mut self, now: Instant) -> Option<IdleTransition> {
        self.debounce_deadline = None;
        self.idle_deadline = now + self.idle_timeout;
        if self.phase == Phase::Idle {
            self.phase = Phase::Active;
            return Some(IdleTransition::BecameActive);
        }
        None
    }

    /// The next instant the caller must poll [`Self::on_deadline`] at, if
    /// any. `None` means nothing is pending (idle, no unsettled burst).
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.phase, self.debounce_deadline) {
            (Phase::Active, Some(settle)) => Some(settle.min(self.idle_deadline)),
            (Phase::Active, None) => Some(self.idle_deadline),
            (Phase::Idle, pending) => pending,
        }
    }

    /// Advance the machine to `now`, producing at most one transition.
    pub fn on_deadline(&mut self, now: Instant) -> Option<IdleTransition> {
        if let Some(settle) = self.debounce_deadline {
            if now >= settle {
                // The burst went quiet: one reset side effect.
                return self.force_reset(now);
            }
        }

        if self.phase == Phase::Active && now >= self.idle_deadline {
            self.phase = Phase::Idle;
            return Some(IdleTransition::BecameIdle);
        }

        None
    }
}
