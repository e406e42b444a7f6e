//! Command implementations for movesem

pub mod list;
pub mod run;
