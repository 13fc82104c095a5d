//! # Error Types
//!
//! Errors shared across subsystem boundaries.

use thiserror::Error;

/// Errors produced when parsing a textual address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The address does not start with the network tag.
    #[error("Invalid network tag: address must start with \"hx\"")]
    InvalidTag,

    /// The address has the wrong overall length.
    #[error("Invalid address length: {0} characters")]
    InvalidLength(usize),

    /// The address body is not lowercase hex.
    #[error("Invalid address body: expected 40 lowercase hex characters")]
    InvalidHex,
}
