//! Error type shared by the comparison and loyalty modules.

/// Errors raised by table validation and loyalty evaluation.
///
/// The best-value evaluator itself never fails; these errors come from
/// building configuration (policy tables, tier tables, comparison sets)
/// and from invalid loyalty inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The tier list is empty, unsorted, lacks a zero floor, or repeats a name.
    #[error("invalid tier table: {reason}")]
    InvalidTierTable { reason: String },

    /// A negative points balance was supplied.
    #[error("invalid points: {points} (must be >= 0)")]
    InvalidPoints { points: i64 },

    /// A points value that is not a finite whole number.
    #[error("invalid points: {value} (must be a whole number)")]
    MalformedPoints { value: String },

    /// A reward in a catalog has an empty id.
    #[error("reward id must not be empty")]
    EmptyRewardId,

    /// Two rewards in a catalog share an id.
    #[error("reward id `{id}` appears more than once")]
    DuplicateReward { id: String },

    /// A field key was classified twice with the same policy.
    #[error("field `{key}` is classified more than once")]
    DuplicateField { key: String },

    /// A field key was classified twice with different policies.
    #[error("field `{key}` has conflicting policies")]
    ConflictingPolicy { key: String },

    /// A policy entry or layout field has an empty key.
    #[error("field key must not be empty")]
    EmptyFieldKey,

    /// A numeric layout field has no explicit policy.
    #[error("numeric field `{key}` has no comparison policy")]
    UnclassifiedField { key: String },

    /// Every slot of the comparison set is occupied.
    #[error("comparison is full ({capacity} slots)")]
    ComparisonFull { capacity: usize },

    /// A slot index beyond the comparison capacity.
    #[error("slot {index} out of range (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },
}

impl EvalError {
    pub(crate) fn tier_table(reason: impl Into<String>) -> Self {
        EvalError::InvalidTierTable {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EvalError::InvalidPoints { points: -1 }.to_string(),
            "invalid points: -1 (must be >= 0)"
        );
        assert_eq!(
            EvalError::tier_table("empty").to_string(),
            "invalid tier table: empty"
        );
        assert_eq!(
            EvalError::SlotOutOfRange {
                index: 4,
                capacity: 3
            }
            .to_string(),
            "slot 4 out of range (capacity 3)"
        );
        assert_eq!(
            EvalError::DuplicateReward { id: "reward1".into() }.to_string(),
            "reward id `reward1` appears more than once"
        );
    }
}
