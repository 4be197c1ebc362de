//! Loyalty tier and progress computation.
//!
//! Maps a cumulative points balance onto an ascending tier table: the tier
//! reached, the tier above it, and how far the balance is between the two.
//! Also answers which rewards a balance can pay for.
//!
//! Tier tables are configuration: malformed tables and negative balances
//! are reported as errors instead of being defaulted.

mod calculator;
mod config;
mod types;

pub use calculator::LoyaltyTierCalculator;
pub use config::{validate_tiers, RewardCatalog, TierTable};
pub use types::{LoyaltyStatus, LoyaltyTier, Reward};
