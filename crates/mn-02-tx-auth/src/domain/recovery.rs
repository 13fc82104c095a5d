//! # Public-Key Recovery and Address Derivation (secp256k1)
//!
//! Pure domain logic for the authentication gate.
//!
//! Address derivation is bit-exact and load-bearing: the 64 payload
//! bytes of the uncompressed public key (SEC1 format byte dropped) are
//! hashed with SHA3-256, the low 20 bytes of the digest become the
//! address body, and the two-character network tag is prepended. Any
//! deviation in byte order, hash function, or which half of the digest
//! is kept silently mismatches every address.
//!
//! The gate is recovery-only: a signature authenticates iff public-key
//! recovery succeeds and the derived address matches the claimed
//! sender. No independent ECDSA verification against the recovered key
//! is performed, and no low-S malleability filter is applied.

use super::entities::{RecoverableSignature, DIGEST_LEN};
use super::errors::AuthError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Sha3_256};
use shared_types::{Address, Hash, ADDRESS_BODY_LEN};

/// SHA3-256 hash function.
pub fn sha3_256(data: &[u8]) -> Hash {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; DIGEST_LEN];
    hash.copy_from_slice(&result);
    hash
}

/// Parse a 32-byte digest from raw wire bytes, validating the length.
pub fn digest_from_slice(raw: &[u8]) -> Result<Hash, AuthError> {
    let digest: Hash = raw
        .try_into()
        .map_err(|_| AuthError::InvalidDigestLength(raw.len()))?;
    Ok(digest)
}

/// Derive the canonical address from a 65-byte uncompressed public key.
///
/// Pure helper, usable independently of the gate. The leading SEC1
/// format byte is dropped; the address is derived from the raw point
/// coordinates only.
pub fn address_from_public_key(uncompressed: &[u8; 65]) -> Address {
    address_from_point_payload(&uncompressed[1..])
}

/// Derive the canonical address from a recovered verifying key.
pub fn address_from_verifying_key(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    address_from_point_payload(&point.as_bytes()[1..])
}

/// Address body = low 20 bytes of SHA3-256 over the 64 coordinate bytes.
fn address_from_point_payload(payload: &[u8]) -> Address {
    let digest = sha3_256(payload);
    let mut body = [0u8; ADDRESS_BODY_LEN];
    body.copy_from_slice(&digest[DIGEST_LEN - ADDRESS_BODY_LEN..]);
    Address::from_body(&body)
}

/// Recover the sender address from a signature over a message digest.
///
/// The recovery id must be in the raw range 0-3; 27/28-style ids are
/// rejected as malformed.
pub fn recover_sender(
    digest: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, AuthError> {
    let recovery_id = RecoveryId::from_byte(signature.recovery_id())
        .ok_or(AuthError::InvalidRecoveryId(signature.recovery_id()))?;

    let sig =
        Signature::from_slice(signature.compact()).map_err(|_| AuthError::MalformedSignature)?;

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| AuthError::RecoveryFailed)?;

    Ok(address_from_verifying_key(&recovered_key))
}

/// Recover the sender and check it against the claimed address.
pub fn authenticate_sender(
    digest: &Hash,
    signature: &RecoverableSignature,
    claimed: &Address,
) -> Result<(), AuthError> {
    let recovered = recover_sender(digest, signature)?;
    if &recovered != claimed {
        return Err(AuthError::SenderMismatch {
            claimed: claimed.to_string(),
            recovered: recovered.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// UNIT TESTS
// =============================================================================
