//! # Task Scheduler Subsystem (MN-01)
//!
//! Runs caller-supplied async callbacks on background tasks without
//! blocking the caller, under two cadence policies:
//!
//! - [`PeriodicTask`]: fixed-interval ticks. The next deadline is
//!   re-anchored before each callback runs, so callback duration never
//!   skews the cadence and lag never compounds across ticks.
//! - [`ImmediateTask`]: drains a LIFO queue of one-shot callbacks,
//!   yielding one scheduling quantum whenever the queue is empty.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): the two unit implementations
//! - **Ports Layer** (`ports/`): the [`ScheduledUnit`] lifecycle trait
//!
//! ## Lifecycle
//!
//! Units are created stopped. `start()` is an idempotent synchronous
//! spawn; `stop()` cancels the background task and does not return until
//! it has fully unwound, so no callback runs after `stop()` completes.
//! A callback error is fatal to its unit: the unit stops ticking, logs
//! at error level, and retains the fault for the owner to inspect. A
//! silently dead production tick is an availability failure, so faults
//! are never swallowed.

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export public API
pub use config::PeriodicConfig;
pub use domain::immediate::ImmediateTask;
pub use domain::periodic::PeriodicTask;
pub use domain::{TaskFn, TaskFuture};
pub use error::{Result, SchedulerError, TaskError};
pub use ports::inbound::ScheduledUnit;
