//! Tokio driver for the idle engine.

use std::future;
use std::sync::Arc;

use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::{ActivityKind, IdleConfig};
use crate::engine::{IdleEngine, IdleTransition};

/// Callbacks invoked on state transitions, exactly once per transition.
pub trait IdleObserver: Send + Sync + 'static {
    fn on_idle(&self);
    fn on_active(&self);
}

enum MonitorMessage {
    Activity(ActivityKind),
    Reset,
}

/// Handle to a running idle monitor.
///
/// The monitor task owns every timer it uses, so stopping the task (via
/// [`IdleMonitor::shutdown`], dropping the handle, or the last sender
/// going away) structurally releases them all.
#[derive(Debug)]
pub struct IdleMonitor {
    tx: mpsc::UnboundedSender<MonitorMessage>,
    shutdown: Arc<Notify>,
    state_rx: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl IdleMonitor {
    /// Spawn the monitor task. Starts Active with the idle deadline armed.
    pub fn spawn(config: IdleConfig, observer: Arc<dyn IdleObserver>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(false);
        let shutdown = Arc::new(Notify::new());

        let task = tokio::spawn(run(config, observer, rx, state_tx, shutdown.clone()));

        Self {
            tx,
            shutdown,
            state_rx,
            task,
        }
    }

    /// Report an interaction event. Non-qualifying kinds are ignored by
    /// the monitor; bursts are debounced into a single timer reset.
    pub fn record_activity(&self, kind: ActivityKind) {
        let _ = self.tx.send(MonitorMessage::Activity(kind));
    }

    /// Reset the idle deadline immediately (no debounce).
    pub fn reset_timer(&self) {
        let _ = self.tx.send(MonitorMessage::Reset);
    }

    /// Current idle state.
    pub fn is_idle(&self) -> bool {
        *self.state_rx.borrow()
    }

    /// Subscribe to idle-state changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state_rx.clone()
    }

    /// Request the monitor task to stop. Idempotent; safe to call after
    /// the task has already finished.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Whether the monitor task has exited.
    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for IdleMonitor {
    fn drop(&mut self) {
        self.shutdown.notify_one();
    }
}

async fn run(
    config: IdleConfig,
    observer: Arc<dyn IdleObserver>,
    mut rx: mpsc::UnboundedReceiver<MonitorMessage>,
    state_tx: watch::Sender<bool>,
    shutdown: Arc<Notify>,
) {
    let mut engine = IdleEngine::new(config.idle_timeout, config.debounce, Instant::now());
    tracing::debug!(
        idle_timeout_ms = config.idle_timeout.as_millis() as u64,
        debounce_ms = config.debounce.as_millis() as u64,
        "idle monitor started"
    );

    loop {
        let deadline = engine.next_deadline();
        let wait = async {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => future::pending().await,
            }
        };

        tokio::select! {
            _ = shutdown.notified() => break,
            message = rx.recv() => match message {
                Some(MonitorMessage::Activity(kind)) => {
                    if config.qualifies(kind) {
                        engine.record_activity(Instant::now());
                    }
                }
                Some(MonitorMessage::Reset) => {
                    apply(engine.force_reset(Instant::now()), &state_tx, &observer);
                }
                // Every handle is gone; nobody can observe us anymore.
                None => break,
            },
            _ = wait => {
                apply(engine.on_deadline(Instant::now()), &state_tx, &observer);
            }
        }
    }

    tracing::debug!("idle monitor stopped");
}

fn apply(
    transition: Option<IdleTransition>,
    state_tx: &watch::Sender<bool>,
    observer: &Arc<dyn IdleObserver>,
) {
    match transition {
        Some(IdleTransition::BecameIdle) => {
            tracing::debug!("user became idle");
            let _ = state_tx.send(true);
            observer.on_idle();
        }
        Some(IdleTransition::BecameActive) => {
            tracing::debug!("user became active");
            let _ = state_tx.send(false);
            observer.on_active();
        }
        None => {}
    }
}
