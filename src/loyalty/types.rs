//! Loyalty tiers, derived status, and rewards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named loyalty bracket reached once cumulative points hit `min_points`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoyaltyTier {
    pub name: String,
    pub min_points: u64,
}

impl LoyaltyTier {
    pub fn new(name: impl Into<String>, min_points: u64) -> Self {
        Self {
            name: name.into(),
            min_points,
        }
    }
}

/// Where a points balance sits in a tier table.
///
/// Recomputed from scratch on every evaluation; never mutated in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoyaltyStatus {
    /// Balance the status was computed for.
    pub points: u64,
    /// Highest tier whose threshold is reached.
    pub current: LoyaltyTier,
    /// Lowest tier whose threshold is not yet reached; `None` at the top.
    pub next: Option<LoyaltyTier>,
    /// Progress from `current` towards `next`, in `[0, 1]`. 1.0 at the top.
    pub progress: f64,
}

impl LoyaltyStatus {
    /// Points still needed to reach the next tier.
    pub fn points_to_next(&self) -> Option<u64> {
        self.next
            .as_ref()
            .map(|t| t.min_points.saturating_sub(self.points))
    }

    /// Progress as a whole percentage, as shown on the progress label.
    pub fn progress_percent(&self) -> u32 {
        (self.progress * 100.0).round() as u32
    }

    pub fn is_top_tier(&self) -> bool {
        self.next.is_none()
    }
}

/// A reward that can be bought with loyalty points.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub cost: u64,
}

impl Reward {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(points: u64, next: Option<u64>, progress: f64) -> LoyaltyStatus {
        LoyaltyStatus {
            points,
            current: LoyaltyTier::new("SILVER", 1000),
            next: next.map(|m| LoyaltyTier::new("GOLD", m)),
            progress,
        }
    }

    #[test]
    fn test_points_to_next() {
        assert_eq!(status(3000, Some(5000), 0.5).points_to_next(), Some(2000));
        assert_eq!(status(3000, None, 1.0).points_to_next(), None);
    }

    #[test]
    fn test_progress_percent_rounds() {
        assert_eq!(status(0, Some(1), 0.124).progress_percent(), 12);
        assert_eq!(status(0, Some(1), 0.126).progress_percent(), 13);
        assert_eq!(status(0, None, 1.0).progress_percent(), 100);
    }

    #[test]
    fn test_is_top_tier() {
        assert!(status(0, None, 1.0).is_top_tier());
        assert!(!status(0, Some(5000), 0.0).is_top_tier());
    }
}
