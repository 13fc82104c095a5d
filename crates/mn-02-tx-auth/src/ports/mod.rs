//! Port definitions for the transaction-authentication subsystem

pub mod inbound;

pub use inbound::TxAuthenticationApi;
