//! # Transaction Authentication Subsystem (MN-02)
//!
//! Decides whether a submitted transaction was signed by the key whose
//! derived address matches the claimed sender.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): trait definition of the public API
//! - **Service Layer** (`service.rs`): wires domain logic to the port
//!
//! ## Authentication Semantics
//!
//! The gate recovers the signer's public key from a recoverable
//! secp256k1 signature over the message digest, derives the canonical
//! `hx` address from the recovered key (SHA3-256 of the uncompressed
//! point payload, low 20 bytes), and accepts iff the derived address
//! equals the claimed sender exactly. Recovery is the only check: the
//! gate does not additionally run standard ECDSA verification against
//! the recovered key.
//!
//! Malformed input is simply unauthenticated. Wrong digest or signature
//! lengths, an out-of-range recovery id, and algebraic recovery failures
//! all yield `false` from [`TxAuthService::verify`], never a panic.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{
    AuthRequest, BatchAuthResult, RecoverableSignature, COMPACT_LEN, DIGEST_LEN, SIGNATURE_LEN,
};
pub use domain::errors::AuthError;
pub use domain::recovery::{
    address_from_public_key, address_from_verifying_key, authenticate_sender, digest_from_slice,
    recover_sender, sha3_256,
};
pub use ports::inbound::TxAuthenticationApi;
pub use service::TxAuthService;
