//! # Domain Layer
//!
//! Pure authentication logic: wire entities, the error taxonomy, and
//! key recovery with address derivation. No I/O.

pub mod entities;
pub mod errors;
pub mod recovery;
