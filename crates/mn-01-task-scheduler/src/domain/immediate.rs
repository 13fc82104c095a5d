//! # Immediate Unit
//!
//! Opportunistic execution of queued one-shot callbacks.

use crate::domain::TaskFuture;
use crate::error::{SchedulerError, TaskError};
use crate::ports::inbound::ScheduledUnit;
use async_trait::async_trait;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// A named unit that drains a LIFO queue of one-shot callbacks on a
/// background task, yielding one scheduling quantum whenever the queue
/// is empty.
///
/// Producers on any thread queue work with [`add`](Self::add); the
/// unit's background task is the sole consumer. The most recently added
/// callback runs first, and queued callbacks run sequentially, never
/// concurrently with each other inside the same unit. Work queued while
/// the unit is stopped stays buffered until the next `start()`.
///
/// Callback faults follow the same contract as the periodic unit: fatal,
/// logged at error level, retained until read. Unexecuted callbacks stay
/// queued.
pub struct ImmediateTask {
    name: String,
    queue: Arc<Mutex<Vec<TaskFuture>>>,
    active: Arc<AtomicBool>,
    handle: Mutex<Option<JoinHandle<()>>>,
    fault: Arc<Mutex<Option<SchedulerError>>>,
}

impl ImmediateTask {
    /// Create a new immediate unit in the stopped state with an empty
    /// queue.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queue: Arc::new(Mutex::new(Vec::new())),
            active: Arc::new(AtomicBool::new(false)),
            handle: Mutex::new(None),
            fault: Arc::new(Mutex::new(None)),
        }
    }

    /// Queue a one-shot callback.
    ///
    /// Safe to call from any thread, whether or not the unit is running;
    /// adding to a stopped unit buffers the work for its next start. The
    /// last callback added is the first to run.
    pub fn add<Fut>(&self, task: Fut)
    where
        Fut: Future<Output = std::result::Result<(), TaskError>> + Send + 'static,
    {
        self.queue.lock().unwrap().push(Box::pin(task));
    }

    /// Number of callbacks currently queued.
    pub fn queued(&self) -> usize {
        self.queue.lock().unwrap().len()
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
            debug!("[mn-01] immediate unit \"{}\" already running", self.name);
            return;
        }
        if let Some(old) = handle.take() {
            old.abort();
        }

        self.active.store(true, Ordering::SeqCst);
        *self.fault.lock().unwrap() = None;

        let name = self.name.clone();
        let queue = Arc::clone(&self.queue);
        let active = Arc::clone(&self.active);
        let fault = Arc::clone(&self.fault);

        let task = tokio::task::spawn(async move {
            info!("[mn-01] immediate unit \"{}\" started", name);
            loop {
                // The guard is released before any await: the queue
                // mutex is never held across a suspension point.
                let next = queue.lock().unwrap().pop();
                match next {
                    Some(task) => {
                        if let Err(e) = task.await {
                            error!(
                                "[mn-01] immediate unit \"{}\" callback failed, unit stopped: {}",
                                name, e
                            );
                            *fault.lock().unwrap() = Some(SchedulerError::CallbackFailed(e));
                            active.store(false, Ordering::SeqCst);
                            break;
                        }
                    }
                    // Empty queue: give up exactly one scheduling
                    // quantum, then re-check. This is also the loop's
                    // cancellation point while idle.
                    None => tokio::task::yield_now().await,
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
                "[mn-01] immediate unit \"{}\" not running, stop is a no-op",
                self.name
            );
            return;
        };

        handle.abort();
        match handle.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => {
                debug!(
                    "[mn-01] immediate unit \"{}\" observed cancellation",
                    self.name
                );
            }
            Err(e) => {
                error!("[mn-01] immediate unit \"{}\" panicked: {}", self.name, e);
                *self.fault.lock().unwrap() =
                    Some(SchedulerError::CallbackPanicked(e.to_string()));
            }
        }
        info!(
            "[mn-01] immediate unit \"{}\" stopped ({} callbacks still queued)",
            self.name,
            self.queue.lock().unwrap().len()
        );
    }
}

#[async_trait]
impl ScheduledUnit for ImmediateTask {
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

impl std::fmt::Debug for ImmediateTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmediateTask")
            .field("name", &self.name)
            .field("queued", &self.queued())
            .field("running", &self.is_running())
            .finish()
    }
}
