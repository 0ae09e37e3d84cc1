//! CounterBank - fixed-size counter collection with reset tracking.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::{BankError, BankResult, BankState};

/// A fixed-size bank of non-negative counters with per-counter reset
/// tracking and an active/inactive lifecycle.
///
/// Each counter carries a tally of how many times it has been reset. When
/// any tally reaches the limit configured at construction, the whole bank
/// latches to [`BankState::Inactive`] and rejects further mutation until
/// [`CounterBank::reactivate`] is called. Reads are always allowed.
///
/// The bank is a plain in-memory value with no internal locking; callers
/// sharing one across threads must wrap it in their own synchronization.
///
/// # Examples
///
/// ```
/// use counter_bank::CounterBank;
///
/// let mut bank = CounterBank::new(3, 2).unwrap();
/// bank.increment(0).unwrap();
/// bank.increment(0).unwrap();
/// assert_eq!(bank.value(0).unwrap(), 2);
///
/// bank.reset(0).unwrap();
/// assert_eq!(bank.value(0).unwrap(), 0);
/// assert_eq!(bank.reset_count(0).unwrap(), 1);
/// assert!(bank.is_active());
///
/// // Second reset hits the limit of 2 and deactivates the bank.
/// bank.reset(0).unwrap();
/// assert!(!bank.is_active());
/// assert!(bank.increment(1).is_err());
///
/// bank.reactivate();
/// assert!(bank.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterBank {
    /// Counter values; length fixed at construction.
    counters: Vec<u64>,
    /// Per-counter reset tallies, each in `0..=max_resets`.
    reset_counts: Vec<u32>,
    /// Reset limit that deactivates the bank; immutable.
    max_resets: u32,
    /// Lifecycle state.
    state: BankState,
}

impl CounterBank {
    /// Creates a bank of `size` counters that deactivates once any
    /// counter has been reset `max_resets` times.
    ///
    /// All counters and reset tallies start at zero and the bank starts
    /// active.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InvalidArgument`] if `size` or `max_resets`
    /// is zero.
    pub fn new(size: usize, max_resets: u32) -> BankResult<Self> {
        if size == 0 {
            return Err(BankError::invalid_argument(
                "size",
                "must be positive, got 0",
            ));
        }
        if max_resets == 0 {
            return Err(BankError::invalid_argument(
                "max_resets",
                "must be positive, got 0",
            ));
        }

        Ok(Self {
            counters: vec![0; size],
            reset_counts: vec![0; size],
            max_resets,
            state: BankState::Active,
        })
    }

    /// Validates that `index` addresses a counter in this bank.
    fn check_index(&self, index: usize) -> BankResult<()> {
        if index >= self.counters.len() {
            return Err(BankError::index_out_of_range(index, self.counters.len()));
        }
        Ok(())
    }

    /// Validates that the bank accepts mutations.
    fn check_active(&self) -> BankResult<()> {
        if self.state.is_inactive() {
            return Err(BankError::InactiveBank);
        }
        Ok(())
    }

    /// Increments the counter at `index` by one.
    ///
    /// A counter at `u64::MAX` saturates rather than wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::IndexOutOfRange`] for an invalid index, or
    /// [`BankError::InactiveBank`] if the bank is inactive. The index is
    /// checked first.
    pub fn increment(&mut self, index: usize) -> BankResult<()> {
        self.check_index(index)?;
        self.check_active()?;

        self.counters[index] = self.counters[index].saturating_add(1);
        Ok(())
    }

    /// Returns the value of the counter at `index`.
    ///
    /// Readable regardless of bank state.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::IndexOutOfRange`] for an invalid index.
    pub fn value(&self, index: usize) -> BankResult<u64> {
        self.check_index(index)?;
        Ok(self.counters[index])
    }

    /// Returns how many times the counter at `index` has been reset since
    /// construction or the last reactivation.
    ///
    /// Readable regardless of bank state.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::IndexOutOfRange`] for an invalid index.
    pub fn reset_count(&self, index: usize) -> BankResult<u32> {
        self.check_index(index)?;
        Ok(self.reset_counts[index])
    }

    /// Returns the number of counters currently holding `value`.
    ///
    /// Linear scan over the bank; readable regardless of bank state.
    pub fn counters_with_value(&self, value: u64) -> usize {
        self.counters.iter().filter(|&&c| c == value).count()
    }

    /// Resets the counter at `index` to zero and bumps its reset tally.
    ///
    /// If the tally reaches the bank's reset limit, the bank latches to
    /// inactive. This is the only operation that deactivates the bank.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::IndexOutOfRange`] for an invalid index, or
    /// [`BankError::InactiveBank`] if the bank is inactive. The index is
    /// checked first; a failed call changes nothing.
    pub fn reset(&mut self, index: usize) -> BankResult<()> {
        self.check_index(index)?;
        self.check_active()?;

        self.counters[index] = 0;
        self.reset_counts[index] += 1;
        debug!(
            "Reset counter {} ({} of {} resets used)",
            index, self.reset_counts[index], self.max_resets
        );

        if self.reset_counts[index] >= self.max_resets {
            self.state = BankState::Inactive;
            info!(
                "Counter bank deactivated: counter {} reached the reset limit of {}",
                index, self.max_resets
            );
        }
        Ok(())
    }

    /// Resets every counter and every reset tally to zero.
    ///
    /// The bank stays active; this never changes lifecycle state.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InactiveBank`] if the bank is inactive.
    pub fn reset_bank(&mut self) -> BankResult<()> {
        self.check_active()?;

        self.counters.fill(0);
        self.reset_counts.fill(0);
        debug!("Reset all {} counters and reset tallies", self.counters.len());
        Ok(())
    }

    /// Restores the bank to active and clears every reset tally.
    ///
    /// Counter values are preserved; this is the one operation that
    /// restores activity while keeping counter magnitudes. Callable in
    /// any state and always succeeds.
    pub fn reactivate(&mut self) {
        self.state = BankState::Active;
        self.reset_counts.fill(0);
        info!(
            "Counter bank reactivated ({} counters, values preserved)",
            self.counters.len()
        );
    }

    /// Returns a one-line human-readable summary of the bank.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Returns the bank's lifecycle state.
    pub fn state(&self) -> BankState {
        self.state
    }

    /// Returns true if the bank accepts mutations.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns the number of counters in the bank.
    pub fn size(&self) -> usize {
        self.counters.len()
    }

    /// Returns the reset limit that deactivates the bank.
    pub fn max_resets(&self) -> u32 {
        self.max_resets
    }

    /// Borrows the counter values, for callers that snapshot or export
    /// bank state through their own mechanism.
    pub fn counters(&self) -> &[u64] {
        &self.counters
    }

    /// Borrows the per-counter reset tallies.
    pub fn reset_counts(&self) -> &[u32] {
        &self.reset_counts
    }
}

impl fmt::Display for CounterBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CounterBank[{}]: {} counters, limit {} resets per counter",
            self.state,
            self.counters.len(),
            self.max_resets
        )
    }
}
