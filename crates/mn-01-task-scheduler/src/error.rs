//! Error types for the task scheduler subsystem

use thiserror::Error;

/// Result type alias for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Error produced by a scheduled callback.
///
/// Callbacks report failures as boxed errors so any caller error type
/// fits the fixed callback signature.
pub type TaskError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that terminate a scheduled unit
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The unit's callback returned an error; the unit has stopped ticking
    #[error("Task callback failed: {0}")]
    CallbackFailed(TaskError),

    /// The unit's callback panicked; the unit has stopped ticking
    #[error("Task callback panicked: {0}")]
    CallbackPanicked(String),
}
