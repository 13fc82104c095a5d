//! # Periodic Unit
//!
//! Fixed-cadence background execution of one async callback.

use crate::config::PeriodicConfig;
use crate::domain::{TaskFn, TaskFuture};
use crate::error::{SchedulerError, TaskError};
use crate::ports::inbound::ScheduledUnit;
use async_trait::async_trait;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info};

/// A named unit that invokes its callback once per interval on a
/// background task.
///
/// Tick scheduling: the loop sleeps until the current deadline, then
/// re-anchors the deadline to `now + interval` *before* invoking the
/// callback. Callback duration therefore never skews the cadence, and a
/// late tick does not produce a burst of catch-up ticks. Ticks are
/// strictly sequential: the callback for tick N+1 never starts before
/// the callback for tick N has completed.
///
/// A callback error is fatal to the unit: the loop exits, the unit
/// reports not running, and the fault is retained until read via
/// [`take_fault`](Self::take_fault). There is no automatic retry; a
/// caller that wants one wraps its own callback.
pub struct PeriodicTask {
    name: String,
    interval: Duration,
    callback: TaskFn,
    active: Arc<AtomicBool>,
    handle: Mutex<Option<JoinHandle<()>>>,
    fault: Arc<Mutex<Option<SchedulerError>>>,
}

impl PeriodicTask {
    /// Create a new periodic unit in the stopped state.
    pub fn new<F, Fut>(name: impl Into<String>, interval: Duration, callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), TaskError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            interval,
            callback: Arc::new(move || Box::pin(callback()) as TaskFuture),
            active: Arc::new(AtomicBool::new(false)),
            handle: Mutex::new(None),
            fault: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a periodic unit from its runtime configuration.
    pub fn from_config<F, Fut>(config: &PeriodicConfig, callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), TaskError>> + Send + 'static,
    {
        Self::new(config.name.clone(), config.interval(), callback)
    }

    /// The configured tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the unit has terminated on a callback fault.
    pub fn has_fault(&self) -> bool {
        self.fault.lock().unwrap().is_some()
    }

    /// Take the retained fault, if any, leaving the slot empty.
    pub fn take_fault(&self) -> Option<SchedulerError> {
        self.fault.lock().unwrap().take()
    }

    fn start_inner(&self) {
        let mut handle = self.handle.lock().unwrap();
        if self.active.load(Ordering::SeqCst) {
            debug!("[mn-01] periodic unit \"{}\" already running", self.name);
            return;
        }
        // Reap a handle left over from a fault or a previous run.
        if let Some(old) = handle.take() {
            old.abort();
        }

        self.active.store(true, Ordering::SeqCst);
        *self.fault.lock().unwrap() = None;

        let name = self.name.clone();
        let interval = self.interval;
        let callback = Arc::clone(&self.callback);
        let active = Arc::clone(&self.active);
        let fault = Arc::clone(&self.fault);

        let task = tokio::task::spawn(async move {
            info!(
                "[mn-01] periodic unit \"{}\" started (interval: {:?})",
                name, interval
            );
            let mut deadline = Instant::now() + interval;
            loop {
                // Suspension point: cancellation from stop() lands here
                // or inside the callback's own awaits.
                tokio::time::sleep_until(deadline).await;
                // Re-anchor before the tick so callback duration does
                // not skew the cadence and lag never compounds.
                deadline = Instant::now() + interval;
                if let Err(e) = (callback)().await {
                    error!(
                        "[mn-01] periodic unit \"{}\" callback failed, unit stopped: {}",
                        name, e
                    );
                    *fault.lock().unwrap() = Some(SchedulerError::CallbackFailed(e));
                    active.store(false, Ordering::SeqCst);
                    break;
                }
            }
        });

        *handle = Some(task);
    }

    async fn stop_inner(&self) {
        self.active.store(false, Ordering::SeqCst);
        let handle = self.handle.lock().unwrap().take();
        let Some(handle) = handle else {
            debug!(
                "[mn-01] periodic unit \"{}\" not running, stop is a no-op",
                self.name
            );
            return;
        };

        handle.abort();
        match handle.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => {
                debug!("[mn-01] periodic unit \"{}\" observed cancellation", self.name);
            }
            Err(e) => {
                // A callback panic surfaces here, at join.
                error!("[mn-01] periodic unit \"{}\" panicked: {}", self.name, e);
                *self.fault.lock().unwrap() =
                    Some(SchedulerError::CallbackPanicked(e.to_string()));
            }
        }
        info!("[mn-01] periodic unit \"{}\" stopped", self.name);
    }
}

#[async_trait]
impl ScheduledUnit for PeriodicTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) {
        self.start_inner();
    }

    async fn stop(&self) {
        self.stop_inner().await;
    }

    fn is_running(&self) -> bool {
        self.active.load(Ordering::SeqCst)
            && self
                .handle
                .lock()
                .unwrap()
                .as_ref()
                .map(|h| !h.is_finished())
                .unwrap_or(false)
    }
}

impl std::fmt::Debug for PeriodicTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeriodicTask")
            .field("name", &self.name)
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish()
    }
}
