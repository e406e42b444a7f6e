//! Traits shared by the movesem crates.
//!
//! # Modules
//!
//! - [`memory_owner`]: Reporting of the heap allocation held by an exclusively
//!   owning value, used to observe ownership transfer.

pub mod memory_owner;
