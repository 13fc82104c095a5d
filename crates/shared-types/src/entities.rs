//! # Core Domain Entities
//!
//! Defines the account-identity entities shared by the scheduler and
//! transaction-authentication subsystems.

use crate::errors::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte message digest (SHA3-256).
pub type Hash = [u8; 32];

/// Network tag prepended to every account address.
pub const ADDRESS_PREFIX: &str = "hx";

/// Length of the binary address body (low 20 bytes of the pubkey hash).
pub const ADDRESS_BODY_LEN: usize = 20;

/// A canonical textual account address.
///
/// Format: the two-character network tag followed by exactly 40 lowercase
/// hex characters encoding the 20-byte address body. Equality is exact,
/// case-sensitive string equality; the same public key always derives the
/// same `Address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Build an address from its 20-byte body.
    ///
    /// Infallible and deterministic: the body is hex-encoded lowercase
    /// and prefixed with the network tag.
    pub fn from_body(body: &[u8; ADDRESS_BODY_LEN]) -> Self {
        Self(format!("{}{}", ADDRESS_PREFIX, hex::encode(body)))
    }

    /// Parse and validate a textual address.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let body = text
            .strip_prefix(ADDRESS_PREFIX)
            .ok_or(AddressError::InvalidTag)?;
        if body.len() != ADDRESS_BODY_LEN * 2 {
            return Err(AddressError::InvalidLength(text.len()));
        }
        if !body.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(AddressError::InvalidHex);
        }
        Ok(Self(text.to_owned()))
    }

    /// The full textual form, tag included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the 20-byte body.
    pub fn body(&self) -> [u8; ADDRESS_BODY_LEN] {
        let mut body = [0u8; ADDRESS_BODY_LEN];
        // The constructor validated the hex body, so decoding cannot fail.
        let decoded = hex::decode(&self.0[ADDRESS_PREFIX.len()..]).unwrap_or_default();
        if decoded.len() == ADDRESS_BODY_LEN {
            body.copy_from_slice(&decoded);
        }
        body
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
