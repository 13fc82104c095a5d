//! Transaction authentication service
//!
//! Wires the domain recovery logic to the [`TxAuthenticationApi`] port
//! and adds the diagnostic logging around each decision.

use crate::domain::entities::{AuthRequest, BatchAuthResult, RecoverableSignature};
use crate::domain::recovery::{digest_from_slice, recover_sender};
use crate::ports::inbound::TxAuthenticationApi;
use tracing::{debug, info};

/// Concrete implementation of the transaction-authentication gate.
///
/// Stateless: the underlying curve arithmetic keeps no mutable state, so
/// one instance is effectively a read-only cryptographic context that
/// any number of concurrent callers may share without locking. Cheap to
/// clone; construct once at process start.
#[derive(Debug, Clone, Default)]
pub struct TxAuthService;

impl TxAuthService {
    /// Create the authentication service.
    pub fn new() -> Self {
        debug!("[mn-02] transaction authentication service initialized");
        Self
    }
}

impl TxAuthenticationApi for TxAuthService {
    fn verify(&self, digest: &[u8], signature: &[u8], claimed_sender: &str) -> bool {
        let digest = match digest_from_slice(digest) {
            Ok(digest) => digest,
            Err(e) => {
                debug!("[mn-02] rejected: {}", e);
                return false;
            }
        };
        let signature = match RecoverableSignature::from_slice(signature) {
            Ok(signature) => signature,
            Err(e) => {
                debug!("[mn-02] rejected: {}", e);
                return false;
            }
        };

        match recover_sender(&digest, &signature) {
            Ok(recovered) if recovered.as_str() == claimed_sender => {
                debug!("[mn-02] sender authenticated: {}", recovered);
                true
            }
            Ok(recovered) => {
                info!(
                    "[mn-02] sender mismatch: claimed {}, recovered {}",
                    claimed_sender, recovered
                );
                false
            }
            Err(e) => {
                info!("[mn-02] rejected: {}", e);
                false
            }
        }
    }

    fn verify_batch(&self, requests: &[AuthRequest]) -> BatchAuthResult {
        use rayon::prelude::*;

        let results: Vec<bool> = requests
            .par_iter()
            .map(|req| self.verify(&req.digest, &req.signature, &req.sender))
            .collect();

        let result = BatchAuthResult::from_results(results);
        debug!(
            "[mn-02] batch verified: {} accepted, {} rejected",
            result.accepted, result.rejected
        );
        result
    }
}
