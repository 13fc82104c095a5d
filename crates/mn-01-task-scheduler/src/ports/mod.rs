//! Port definitions for the task scheduler subsystem

pub mod inbound;

pub use inbound::ScheduledUnit;
