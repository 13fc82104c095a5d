//! # Inbound Ports (Driving Ports / API)
//!
//! Trait that defines the public API of this subsystem.

use crate::domain::entities::{AuthRequest, BatchAuthResult};

/// Primary transaction-authentication API.
///
/// This is the entry point the transaction-intake loop calls before a
/// transaction may enter a block. Implementations must be thread-safe
/// (`Send + Sync`); verification keeps no per-call state and may be
/// invoked from any number of concurrent call sites.
pub trait TxAuthenticationApi: Send + Sync {
    /// Authenticate one transaction.
    ///
    /// Returns `true` iff the signature is a well-formed recoverable
    /// secp256k1 signature over `digest` whose recovered public key
    /// derives exactly `claimed_sender`. Malformed input and recovery
    /// failure yield `false`, never an error: malformed is simply
    /// unauthenticated.
    fn verify(&self, digest: &[u8], signature: &[u8], claimed_sender: &str) -> bool;

    /// Authenticate a batch of transactions in parallel.
    ///
    /// Verdicts are returned in request order.
    fn verify_batch(&self, requests: &[AuthRequest]) -> BatchAuthResult;
}
