//! # Shared Types Crate
//!
//! Cross-crate domain types for the Meridian node support kit.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Types that cross a crate boundary are
//!   defined here, not duplicated per subsystem.
//! - **Canonical Text Addresses**: An [`Address`] is the textual account
//!   identifier (`hx` tag + 40 hex characters); components compare
//!   addresses as exact strings, never as re-parsed bytes.

pub mod entities;
pub mod errors;

pub use entities::{Address, Hash, ADDRESS_BODY_LEN, ADDRESS_PREFIX};
pub use errors::AddressError;
