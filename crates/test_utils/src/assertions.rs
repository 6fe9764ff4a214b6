//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_inventory::{AlertCode, DecedentResult, DecisionStep, Quota};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts the amount of a Money value, ignoring scale
pub fn assert_amount(money: &Money, expected: Decimal) {
    assert_eq!(
        money.amount(),
        expected,
        "Expected {} {}, got {}",
        money.currency().symbol(),
        expected,
        money
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that quota percentages add up to one within a tolerance
pub fn assert_percentages_sum_to_one(quotas: &[Quota], tolerance: Decimal) {
    let total: Decimal = quotas.iter().map(|q| q.percentage).sum();
    let diff = (total - Decimal::ONE).abs();
    assert!(
        diff <= tolerance,
        "Quota percentages sum to {}, expected 1 (tolerance {})",
        total,
        tolerance
    );
}

/// Asserts that a result carries an alert with the given code
pub fn assert_has_alert(result: &DecedentResult, code: AlertCode) {
    assert!(
        result.has_alert(code),
        "Expected alert {:?} for {}, got {:?}",
        code,
        result.decedent_name,
        result.alerts.iter().map(|a| a.code).collect::<Vec<_>>()
    );
}

/// Asserts that a decision trail has its twelve steps in order
pub fn assert_trail_complete(trail: &[DecisionStep]) {
    assert_eq!(trail.len(), 12, "Decision trail should have 12 steps");
    for (index, step) in trail.iter().enumerate() {
        assert_eq!(
            step.number as usize,
            index + 1,
            "Step '{}' is out of order",
            step.title
        );
    }
}
