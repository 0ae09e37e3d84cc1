//! Fixed-size counter bank with reset tracking and an active/inactive
//! lifecycle.
//!
//! This crate provides one component, [`CounterBank`]: an in-memory bank
//! of non-negative counters for embedding in a larger system such as a
//! sensor-monitoring application. Each counter tracks how many times it
//! has been reset; once any counter's reset tally reaches the limit set
//! at construction, the bank latches to inactive and rejects mutation
//! until explicitly reactivated.
//!
//! - [`CounterBank`]: the bank itself
//! - [`BankState`]: the active/inactive lifecycle state
//! - [`BankError`]: precondition violations surfaced to the caller

mod bank;
mod error;
mod state;

pub use bank::CounterBank;
pub use error::{BankError, BankResult};
pub use state::BankState;
