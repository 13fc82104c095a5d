//! # Inbound Ports (Driving Ports / API)
//!
//! Lifecycle contract shared by every scheduled unit.

use async_trait::async_trait;

/// Lifecycle of a named, repeatable unit of background work.
///
/// Implementations must be thread-safe (`Send + Sync`); a unit is
/// typically shared behind an `Arc` between the owning loop and the
/// code that decides when it runs.
#[async_trait]
pub trait ScheduledUnit: Send + Sync {
    /// The unit's name, as used in log lines.
    fn name(&self) -> &str;

    /// Launch the unit's background task.
    ///
    /// Idempotent: calling `start` on a running unit is a no-op. Must be
    /// called from within a tokio runtime.
    fn start(&self);

    /// Cancel the background task and wait for it to unwind.
    ///
    /// Does not return until the task has observed cancellation and
    /// exited; no callback invocation happens after `stop` returns. The
    /// cancellation signal itself is swallowed and never surfaced to the
    /// caller. Calling `stop` on a stopped (or never-started) unit is a
    /// no-op.
    async fn stop(&self);

    /// Whether the background task is currently alive.
    fn is_running(&self) -> bool;
}
