//! # Meridian Node Support Kit Test Suite
//!
//! Unified test crate for cross-subsystem flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Scheduler + authentication choreography
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mn-tests
//!
//! # Integration flows only
//! cargo test -p mn-tests integration::
//! ```

pub mod integration;

/// Initialize tracing for test runs; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mn_01_task_scheduler=debug,mn_02_tx_auth=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
