//! # Domain Layer
//!
//! The two scheduled-unit implementations and the callback abstraction
//! they share.

pub mod immediate;
pub mod periodic;

use crate::error::TaskError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A boxed future produced by one invocation of a scheduled callback.
pub type TaskFuture = Pin<Box<dyn Future<Output = std::result::Result<(), TaskError>> + Send>>;

/// A repeatedly invokable scheduled callback.
///
/// Callers supply any async closure; the scheduler stores it as a plain
/// function value with a fixed signature.
pub type TaskFn = Arc<dyn Fn() -> TaskFuture + Send + Sync>;
