//! Loyalty tier evaluation.
//!
//! # Algorithm
//!
//! 1. Current tier: scanning from the top, the first tier whose threshold
//!    the balance reaches (the zero floor always qualifies)
//! 2. Next tier: the tier right above the current one, if any
//! 3. Progress: 1.0 at the top tier, otherwise the balance's position
//!    between the two thresholds, clamped to `[0, 1]`

use super::config::{validate_tiers, RewardCatalog, TierTable};
use super::types::{LoyaltyStatus, LoyaltyTier, Reward};
use crate::error::EvalError;

/// Computes loyalty status and reward eligibility.
pub struct LoyaltyTierCalculator;

impl LoyaltyTierCalculator {
    /// Evaluates `points` against an unvalidated tier list.
    ///
    /// # Errors
    ///
    /// - [`EvalError::InvalidTierTable`] if `tiers` is empty, does not start
    ///   at 0, is not strictly ascending, or repeats a name
    /// - [`EvalError::InvalidPoints`] if `points` is negative
    ///
    /// # Examples
    ///
    /// ```
    /// use carfast_eval::loyalty::{LoyaltyTierCalculator, TierTable};
    ///
    /// let table = TierTable::carfast();
    /// let status = LoyaltyTierCalculator::evaluate(3_000, table.tiers()).unwrap();
    ///
    /// assert_eq!(status.current.name, "SILVER");
    /// assert_eq!(status.next.as_ref().map(|t| t.name.as_str()), Some("GOLD"));
    /// assert!((status.progress - 0.5).abs() < 1e-12);
    /// ```
    pub fn evaluate(points: i64, tiers: &[LoyaltyTier]) -> Result<LoyaltyStatus, EvalError> {
        validate_tiers(tiers)?;
        let points = checked_points(points)?;
        Ok(status_for(points, tiers))
    }

    /// Evaluates `points` against an already validated table.
    pub fn evaluate_table(points: i64, table: &TierTable) -> Result<LoyaltyStatus, EvalError> {
        let points = checked_points(points)?;
        Ok(status_for(points, table.tiers()))
    }

    /// Whether a balance of `points` covers `reward`.
    pub fn can_redeem(points: u64, reward: &Reward) -> bool {
        points >= reward.cost
    }

    /// Rewards affordable with `points`, in catalog order.
    pub fn redeemable(points: u64, catalog: &RewardCatalog) -> Vec<&Reward> {
        catalog
            .rewards()
            .iter()
            .filter(|r| Self::can_redeem(points, r))
            .collect()
    }
}

fn checked_points(points: i64) -> Result<u64, EvalError> {
    u64::try_from(points).map_err(|_| EvalError::InvalidPoints { points })
}

/// `tiers` must have passed [`validate_tiers`].
fn status_for(points: u64, tiers: &[LoyaltyTier]) -> LoyaltyStatus {
    let idx = tiers
        .iter()
        .rposition(|t| t.min_points <= points)
        .unwrap_or(0);
    let current = tiers[idx].clone();
    let next = tiers.get(idx + 1).cloned();

    let progress = match &next {
        None => 1.0,
        Some(next) => {
            let span = next.min_points.saturating_sub(current.min_points);
            if span == 0 {
                1.0
            } else {
                let done = points.saturating_sub(current.min_points);
                (done as f64 / span as f64).clamp(0.0, 1.0)
            }
        }
    };

    log::trace!(
        "{points} points: tier {} -> {:?}, progress {progress:.3}",
        current.name,
        next.as_ref().map(|t| t.name.as_str())
    );

    LoyaltyStatus {
        points,
        current,
        next,
        progress,
    }
}
