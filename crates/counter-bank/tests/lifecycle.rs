//! Integration tests for the counter bank lifecycle.
//!
//! Exercises the full active -> inactive -> reactivated cycle through the
//! public API, the way an embedding monitor application would drive it.

use counter_bank::{BankError, BankState, CounterBank};
use pretty_assertions::assert_eq;

/// Test helper that drives a counter to deactivation by resetting it
/// until the bank's limit is hit.
fn deactivate_via(bank: &mut CounterBank, index: usize) {
    while bank.is_active() {
        bank.reset(index).expect("reset while active");
    }
}

#[test]
fn test_full_monitoring_cycle() {
    // A 3-sensor bank that tolerates 2 resets per sensor.
    let mut bank = CounterBank::new(3, 2).unwrap();

    bank.increment(0).unwrap();
    bank.increment(0).unwrap();
    assert_eq!(bank.value(0).unwrap(), 2);

    // First reset of sensor 0: value clears, tally at 1, still active.
    bank.reset(0).unwrap();
    assert_eq!(bank.value(0).unwrap(), 0);
    assert_eq!(bank.reset_count(0).unwrap(), 1);
    assert!(bank.is_active());

    // Second reset hits the limit and deactivates the whole bank.
    bank.reset(0).unwrap();
    assert_eq!(bank.reset_count(0).unwrap(), 2);
    assert_eq!(bank.state(), BankState::Inactive);

    // Mutations on other sensors are now rejected too.
    assert_eq!(bank.increment(1).unwrap_err(), BankError::InactiveBank);

    // Reactivation clears tallies but keeps counter values.
    bank.reactivate();
    assert!(bank.is_active());
    assert_eq!(bank.reset_count(0).unwrap(), 0);
    assert_eq!(bank.value(0).unwrap(), 0);
    assert_eq!(bank.value(1).unwrap(), 0);
}

#[test]
fn test_reactivation_preserves_accumulated_values() {
    let mut bank = CounterBank::new(4, 1).unwrap();
    for _ in 0..5 {
        bank.increment(2).unwrap();
    }
    bank.increment(3).unwrap();

    deactivate_via(&mut bank, 0);
    let values_before: Vec<u64> = (0..4).map(|i| bank.value(i).unwrap()).collect();

    bank.reactivate();
    let values_after: Vec<u64> = (0..4).map(|i| bank.value(i).unwrap()).collect();
    assert_eq!(values_before, values_after);
    assert_eq!(values_after, vec![0, 0, 5, 1]);
}

#[test]
fn test_bulk_reset_only_while_active() {
    let mut bank = CounterBank::new(2, 3).unwrap();
    bank.increment(0).unwrap();
    bank.reset(1).unwrap();

    // Active: bulk reset clears everything and keeps the bank active.
    bank.reset_bank().unwrap();
    assert!(bank.is_active());
    assert_eq!(bank.counters(), &[0, 0]);
    assert_eq!(bank.reset_counts(), &[0, 0]);

    // Inactive: bulk reset is rejected and state is untouched.
    deactivate_via(&mut bank, 0);
    bank.increment(1).unwrap_err();
    let snapshot = bank.clone();
    assert_eq!(bank.reset_bank().unwrap_err(), BankError::InactiveBank);
    assert_eq!(bank, snapshot);
}

#[test]
fn test_independent_banks_do_not_interact() {
    let mut a = CounterBank::new(2, 1).unwrap();
    let mut b = CounterBank::new(2, 1).unwrap();

    deactivate_via(&mut a, 0);
    assert!(!a.is_active());
    assert!(b.is_active());
    b.increment(0).unwrap();
    assert_eq!(b.value(0).unwrap(), 1);
}

#[test]
fn test_fresh_bank_value_census() {
    let bank = CounterBank::new(5, 2).unwrap();
    assert_eq!(bank.counters_with_value(0), 5);
    assert_eq!(bank.counters_with_value(1), 0);
}

#[test]
fn test_out_of_range_reads() {
    let bank = CounterBank::new(3, 2).unwrap();
    assert_eq!(
        bank.value(3).unwrap_err(),
        BankError::IndexOutOfRange { index: 3, size: 3 }
    );
    assert_eq!(
        bank.reset_count(usize::MAX).unwrap_err(),
        BankError::IndexOutOfRange {
            index: usize::MAX,
            size: 3
        }
    );
}

#[test]
fn test_state_snapshot_serializes() {
    let mut bank = CounterBank::new(2, 2).unwrap();
    bank.increment(0).unwrap();
    bank.reset(1).unwrap();

    let json = serde_json::to_value(&bank).unwrap();
    assert_eq!(json["counters"], serde_json::json!([1, 0]));
    assert_eq!(json["reset_counts"], serde_json::json!([0, 1]));
    assert_eq!(json["max_resets"], 2);
    assert_eq!(json["state"], "active");
}

#[test]
fn test_describe_reports_state_and_shape() {
    let mut bank = CounterBank::new(3, 1).unwrap();
    assert_eq!(
        bank.describe(),
        "CounterBank[active]: 3 counters, limit 1 resets per counter"
    );

    deactivate_via(&mut bank, 1);
    assert!(bank.describe().contains("inactive"));
}
