//! # Domain Entities
//!
//! Wire-format value types for transaction authentication.

use super::errors::AuthError;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

/// Wire length of a message digest (SHA3-256).
pub const DIGEST_LEN: usize = 32;

/// Length of the compact (r || s) portion of a signature.
pub const COMPACT_LEN: usize = 64;

/// Wire length of a recoverable signature: compact part plus one
/// recovery-id byte.
pub const SIGNATURE_LEN: usize = COMPACT_LEN + 1;

/// A recoverable ECDSA signature in wire format.
///
/// Layout: 64-byte compact signature (r || s) followed by a 1-byte
/// recovery id in the range 0-3.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// Raw signature bytes.
    #[serde_as(as = "Bytes")]
    pub bytes: [u8; SIGNATURE_LEN],
}

impl RecoverableSignature {
    /// Parse a signature from raw wire bytes, validating the length.
    pub fn from_slice(raw: &[u8]) -> Result<Self, AuthError> {
        if raw.len() != SIGNATURE_LEN {
            return Err(AuthError::InvalidSignatureLength(raw.len()));
        }
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes.copy_from_slice(raw);
        Ok(Self { bytes })
    }

    /// The 64-byte compact (r || s) portion.
    pub fn compact(&self) -> &[u8] {
        &self.bytes[..COMPACT_LEN]
    }

    /// The trailing recovery-id byte (unvalidated).
    pub fn recovery_id(&self) -> u8 {
        self.bytes[COMPACT_LEN]
    }
}

/// One entry of a batch authentication request.
///
/// Carries raw wire bytes on purpose: shape validation is part of the
/// gate, and malformed entries must flow through to a `false` verdict
/// rather than fail construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Digest of the transaction's canonical serialization.
    pub digest: Vec<u8>,
    /// Recoverable signature bytes.
    pub signature: Vec<u8>,
    /// Textual address the transaction claims as sender.
    pub sender: String,
}

/// Result of batch authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchAuthResult {
    /// Per-request verdicts, in request order.
    pub results: Vec<bool>,
    /// Count of authenticated requests.
    pub accepted: usize,
    /// Count of rejected requests.
    pub rejected: usize,
}

impl BatchAuthResult {
    /// Build a batch result from individual verdicts.
    pub fn from_results(results: Vec<bool>) -> Self {
        let accepted = results.iter().filter(|&&ok| ok).count();
        let rejected = results.len() - accepted;
        Self {
            results,
            accepted,
            rejected,
        }
    }
}
