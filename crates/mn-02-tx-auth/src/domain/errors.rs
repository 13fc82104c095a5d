//! # Authentication Errors
//!
//! Error taxonomy for the transaction-authentication gate. Every
//! variant folds into plain rejection (`false`) at the public `verify`
//! boundary; the typed variants exist for callers and logs that need to
//! know why a transaction was rejected.

use thiserror::Error;

/// Errors that can occur while authenticating a transaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The message digest has the wrong length (expected 32 bytes).
    #[error("Invalid digest length: {0} bytes (expected 32)")]
    InvalidDigestLength(usize),

    /// The signature has the wrong length (expected 65 bytes).
    #[error("Invalid signature length: {0} bytes (expected 65)")]
    InvalidSignatureLength(usize),

    /// The recovery id byte is outside the valid range 0-3.
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// The 64-byte compact portion does not parse as an ECDSA signature.
    #[error("Malformed compact signature")]
    MalformedSignature,

    /// Public-key recovery failed (no curve point fits the signature).
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The recovered address does not match the claimed sender.
    #[error("Sender mismatch: claimed {claimed}, recovered {recovered}")]
    SenderMismatch {
        /// Address the transaction claims to be from.
        claimed: String,
        /// Address derived from the recovered public key.
        recovered: String,
    },
}
