//! Best-value evaluation.
//!
//! # Algorithm
//!
//! 1. Resolve the field's policy; `NotComparable` yields no winner
//! 2. Collect defined numeric values from occupied slots
//! 3. Fewer than two candidates yields no winner
//! 4. Take the minimum (lower is better) or maximum (higher is better)
//! 5. Every slot holding that value is a winner

use std::collections::BTreeMap;

use super::config::{ComparisonLayout, FieldPolicy, PolicyTable};
use super::types::{BestValue, Slot};
use crate::error::EvalError;

/// Minimum number of candidates for a winner to be designated.
const MIN_CANDIDATES: usize = 2;

/// Per-field evaluation results for a whole comparison layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlights {
    by_field: BTreeMap<String, BestValue>,
}

impl Highlights {
    /// Result for `field_key`, if the layout contained it.
    pub fn get(&self, field_key: &str) -> Option<&BestValue> {
        self.by_field.get(field_key)
    }

    /// Whether the cell at (`field_key`, `slot`) should be highlighted.
    pub fn is_highlighted(&self, field_key: &str, slot: usize) -> bool {
        self.by_field
            .get(field_key)
            .is_some_and(|v| v.is_winner(slot))
    }

    /// Fields that have at least one winner, with their winning slots.
    pub fn winners(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.by_field
            .iter()
            .filter(|(_, v)| !v.winners().is_empty())
            .map(|(k, v)| (k.as_str(), v.winners()))
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}

/// Determines which comparison slots hold the best value of a field.
///
/// Stateless apart from its immutable [`PolicyTable`]; safe to share
/// between threads.
///
/// # Examples
///
/// ```
/// use carfast_eval::compare::{BestValue, BestValueEvaluator, ComparableEntity};
///
/// let evaluator = BestValueEvaluator::vehicle();
/// let slots = vec![
///     Some(ComparableEntity::new().with("price", 100.0)),
///     None,
///     Some(ComparableEntity::new().with("price", 200.0)),
/// ];
///
/// assert_eq!(evaluator.evaluate(&slots, "price"), BestValue::Winners(vec![0]));
/// assert_eq!(evaluator.evaluate(&slots, "make"), BestValue::NoWinner);
/// ```
#[derive(Debug, Clone)]
pub struct BestValueEvaluator {
    policies: PolicyTable,
}

impl BestValueEvaluator {
    /// Creates an evaluator after validating `policies`.
    pub fn new(policies: PolicyTable) -> Result<Self, EvalError> {
        policies.validate()?;
        Ok(Self { policies })
    }

    /// Evaluator backed by [`PolicyTable::vehicle`].
    pub fn vehicle() -> Self {
        Self {
            policies: PolicyTable::vehicle(),
        }
    }

    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Evaluates `field_key` across `slots`.
    ///
    /// Empty slots and missing or non-numeric values are skipped. Works for
    /// any number of slots.
    pub fn evaluate(&self, slots: &[Slot], field_key: &str) -> BestValue {
        let policy = self.policies.policy(field_key);
        if policy == FieldPolicy::NotComparable {
            return BestValue::NoWinner;
        }

        let candidates: Vec<(usize, f64)> = slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref()?.number(field_key).map(|v| (i, v)))
            .collect();

        if candidates.len() < MIN_CANDIDATES {
            log::debug!(
                "field `{field_key}`: {} candidate(s), no winner",
                candidates.len()
            );
            return BestValue::NoWinner;
        }

        let values = candidates.iter().map(|&(_, v)| v);
        let best = match policy {
            FieldPolicy::HigherIsBetter => values.fold(f64::NEG_INFINITY, f64::max),
            _ => values.fold(f64::INFINITY, f64::min),
        };
        let winners: Vec<usize> = candidates
            .iter()
            .filter(|&&(_, v)| v == best)
            .map(|&(i, _)| i)
            .collect();

        log::trace!("field `{field_key}`: best {best} at slots {winners:?}");
        BestValue::Winners(winners)
    }

    /// Whether `slot` holds the best value of `field_key`.
    pub fn is_best(&self, slots: &[Slot], field_key: &str, slot: usize) -> bool {
        self.evaluate(slots, field_key).is_winner(slot)
    }

    /// Evaluates every row of `layout`.
    pub fn highlight(&self, slots: &[Slot], layout: &ComparisonLayout) -> Highlights {
        Highlights {
            by_field: layout
                .fields()
                .map(|f| (f.key.clone(), self.evaluate(slots, &f.key)))
                .collect(),
        }
    }
}

impl Default for BestValueEvaluator {
    fn default() -> Self {
        Self::vehicle()
    }
}
