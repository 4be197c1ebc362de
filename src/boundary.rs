//! Entry points for hosts that pass loosely typed values.
//!
//! JavaScript numbers arrive as `f64` and listings arrive as already
//! decoded slots; these helpers apply the checks the typed API assumes
//! and are what the `wasm` exports call.

use crate::compare::{BestValueEvaluator, Slot};
use crate::error::EvalError;
use crate::loyalty::{LoyaltyStatus, LoyaltyTier, LoyaltyTierCalculator};

/// Converts a host number into a points balance.
///
/// NaN, infinities, fractions, and values outside `i64` are rejected with
/// [`EvalError::MalformedPoints`]; negative whole numbers with
/// [`EvalError::InvalidPoints`].
pub fn points_from_f64(points: f64) -> Result<i64, EvalError> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    if !points.is_finite() || points.fract() != 0.0 || points.abs() >= i64::MAX as f64 {
        return Err(EvalError::MalformedPoints {
            value: points.to_string(),
        });
    }
    let whole = points as i64;
    if whole < 0 {
        return Err(EvalError::InvalidPoints { points: whole });
    }
    Ok(whole)
}

/// Winning slot indices for `field_key` under the vehicle policy table.
pub fn best_value_slots(slots: &[Slot], field_key: &str) -> Vec<usize> {
    BestValueEvaluator::vehicle()
        .evaluate(slots, field_key)
        .into()
}

/// Loyalty status for a host-supplied `points` number.
pub fn loyalty_status(points: f64, tiers: &[LoyaltyTier]) -> Result<LoyaltyStatus, EvalError> {
    LoyaltyTierCalculator::evaluate(points_from_f64(points)?, tiers)
}
