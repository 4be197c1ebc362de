//! Tier tables and reward catalogs.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{LoyaltyTier, Reward};
use crate::error::EvalError;

/// Checks that `tiers` is non-empty, starts at 0, is strictly ascending
/// by threshold, and has unique names.
pub fn validate_tiers(tiers: &[LoyaltyTier]) -> Result<(), EvalError> {
    let result = check_tiers(tiers);
    if let Err(ref err) = result {
        log::debug!("rejecting tier table: {err}");
    }
    result
}

fn check_tiers(tiers: &[LoyaltyTier]) -> Result<(), EvalError> {
    let floor = tiers
        .first()
        .ok_or_else(|| EvalError::tier_table("tier list is empty"))?;
    if floor.min_points != 0 {
        return Err(EvalError::tier_table(format!(
            "floor tier `{}` must start at 0, got {}",
            floor.name, floor.min_points
        )));
    }
    for pair in tiers.windows(2) {
        if pair[1].min_points <= pair[0].min_points {
            return Err(EvalError::tier_table(format!(
                "thresholds must be strictly ascending: `{}` ({}) follows `{}` ({})",
                pair[1].name, pair[1].min_points, pair[0].name, pair[0].min_points
            )));
        }
    }
    let mut names = HashSet::new();
    for tier in tiers {
        if !names.insert(tier.name.as_str()) {
            return Err(EvalError::tier_table(format!(
                "duplicate tier name `{}`",
                tier.name
            )));
        }
    }
    Ok(())
}

/// A validated, immutable tier list.
///
/// # Examples
///
/// ```
/// use carfast_eval::loyalty::{LoyaltyTier, TierTable};
///
/// let table = TierTable::new(vec![
///     LoyaltyTier::new("MEMBER", 0),
///     LoyaltyTier::new("VIP", 2_500),
/// ])
/// .unwrap();
/// assert_eq!(table.top().name, "VIP");
///
/// assert!(TierTable::new(vec![LoyaltyTier::new("VIP", 2_500)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<LoyaltyTier>", into = "Vec<LoyaltyTier>")
)]
pub struct TierTable {
    tiers: Vec<LoyaltyTier>,
}

impl TierTable {
    pub fn new(tiers: Vec<LoyaltyTier>) -> Result<Self, EvalError> {
        validate_tiers(&tiers)?;
        Ok(Self { tiers })
    }

    /// BRONZE 0, SILVER 1000, GOLD 5000, PLATINUM 10000.
    pub fn carfast() -> Self {
        Self {
            tiers: vec![
                LoyaltyTier::new("BRONZE", 0),
                LoyaltyTier::new("SILVER", 1_000),
                LoyaltyTier::new("GOLD", 5_000),
                LoyaltyTier::new("PLATINUM", 10_000),
            ],
        }
    }

    pub fn tiers(&self) -> &[LoyaltyTier] {
        &self.tiers
    }

    /// The zero-threshold tier.
    pub fn floor(&self) -> &LoyaltyTier {
        &self.tiers[0]
    }

    /// The highest tier.
    pub fn top(&self) -> &LoyaltyTier {
        &self.tiers[self.tiers.len() - 1]
    }

    pub fn get(&self, name: &str) -> Option<&LoyaltyTier> {
        self.tiers.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always `false`: a table holds at least its floor tier.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::carfast()
    }
}

impl TryFrom<Vec<LoyaltyTier>> for TierTable {
    type Error = EvalError;

    fn try_from(tiers: Vec<LoyaltyTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<TierTable> for Vec<LoyaltyTier> {
    fn from(table: TierTable) -> Self {
        table.tiers
    }
}

/// Rewards offered in exchange for points, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct RewardCatalog {
    rewards: Vec<Reward>,
}

impl RewardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn carfast() -> Self {
        Self::new()
            .with_reward(Reward::new("reward1", "10 free tokens", 500))
            .with_reward(Reward::new("reward2", "20% off next subscription", 1_000))
            .with_reward(Reward::new("reward3", "1 month Premium access", 2_000))
    }

    pub fn with_reward(mut self, reward: Reward) -> Self {
        self.rewards.push(reward);
        self
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn get(&self, id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }

    /// Checks that reward ids are non-empty and unique.
    pub fn validate(&self) -> Result<(), EvalError> {
        let mut ids = HashSet::new();
        for reward in &self.rewards {
            if reward.id.is_empty() {
                return Err(EvalError::EmptyRewardId);
            }
            if !ids.insert(reward.id.as_str()) {
                return Err(EvalError::DuplicateReward {
                    id: reward.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(err: EvalError) -> String {
        match err {
            EvalError::InvalidTierTable { reason } => reason,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_carfast_table_is_valid() {
        let t = TierTable::carfast();
        assert!(validate_tiers(t.tiers()).is_ok());
        assert_eq!(t.floor().name, "BRONZE");
        assert_eq!(t.top().name, "PLATINUM");
        assert_eq!(t.get("GOLD").map(|g| g.min_points), Some(5_000));
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_empty_rejected() {
        let err = TierTable::new(vec![]).unwrap_err();
        assert!(reason(err).contains("empty"));
    }

    #[test]
    fn test_nonzero_floor_rejected() {
        let err = TierTable::new(vec![LoyaltyTier::new("SILVER", 1000)]).unwrap_err();
        assert!(reason(err).contains("start at 0"));
    }

    #[test]
    fn test_unsorted_rejected() {
        let err = TierTable::new(vec![
            LoyaltyTier::new("BRONZE", 0),
            LoyaltyTier::new("GOLD", 5000),
            LoyaltyTier::new("SILVER", 1000),
        ])
        .unwrap_err();
        assert!(reason(err).contains("strictly ascending"));
    }

    #[test]
    fn test_equal_thresholds_rejected() {
        let err = TierTable::new(vec![
            LoyaltyTier::new("BRONZE", 0),
            LoyaltyTier::new("SILVER", 1000),
            LoyaltyTier::new("SILVER+", 1000),
        ])
        .unwrap_err();
        assert!(reason(err).contains("strictly ascending"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = TierTable::new(vec![
            LoyaltyTier::new("BRONZE", 0),
            LoyaltyTier::new("BRONZE", 10),
        ])
        .unwrap_err();
        assert!(reason(err).contains("duplicate"));
    }

    #[test]
    fn test_reward_catalog() {
        let c = RewardCatalog::carfast();
        assert!(c.validate().is_ok());
        assert_eq!(c.rewards().len(), 3);
        assert_eq!(c.get("reward2").map(|r| r.cost), Some(1_000));

        let dup = RewardCatalog::new()
            .with_reward(Reward::new("a", "A", 1))
            .with_reward(Reward::new("a", "B", 2));
        assert_eq!(dup.validate(), Err(EvalError::DuplicateReward { id: "a".into() }));

        let unnamed = RewardCatalog::new().with_reward(Reward::new("", "Nameless", 1));
        assert_eq!(unnamed.validate(), Err(EvalError::EmptyRewardId));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_tier_table_deserialize_validates() {
        let ok: TierTable = serde_json::from_str(
            r#"[{"name":"BRONZE","min_points":0},{"name":"SILVER","min_points":1000}]"#,
        )
        .unwrap();
        assert_eq!(ok.top().name, "SILVER");

        let bad = serde_json::from_str::<TierTable>(r#"[{"name":"SILVER","min_points":1000}]"#);
        assert!(bad.is_err());
    }
}
