//! Bounded set of comparison slots.

use super::types::{ComparableEntity, Slot};
use crate::error::EvalError;

/// Number of vehicles the comparison table shows side by side.
pub const DEFAULT_CAPACITY: usize = 3;

/// Fixed-capacity, positional collection of compared entities.
///
/// Removing an entity leaves its slot empty; other entities keep their
/// positions so highlighted columns do not shift.
///
/// # Examples
///
/// ```
/// use carfast_eval::compare::{ComparableEntity, ComparisonSet};
///
/// let mut set = ComparisonSet::new();
/// let a = set.add(ComparableEntity::new().with("price", 9_000.0)).unwrap();
/// let b = set.add(ComparableEntity::new().with("price", 8_000.0)).unwrap();
/// assert_eq!((a, b), (0, 1));
///
/// set.remove(0).unwrap();
/// assert!(set.slots()[0].is_none());
/// assert_eq!(set.add(ComparableEntity::new()).unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSet {
    slots: Vec<Slot>,
}

impl ComparisonSet {
    /// Creates an empty set with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Places `entity` in the first empty slot and returns its index.
    pub fn add(&mut self, entity: ComparableEntity) -> Result<usize, EvalError> {
        let capacity = self.capacity();
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, s)| s.is_none())
            .ok_or(EvalError::ComparisonFull { capacity })?;
        *slot = Some(entity);
        Ok(index)
    }

    /// Empties slot `index`, returning the entity it held.
    pub fn remove(&mut self, index: usize) -> Result<Option<ComparableEntity>, EvalError> {
        let capacity = self.capacity();
        self.slots
            .get_mut(index)
            .map(Option::take)
            .ok_or(EvalError::SlotOutOfRange { index, capacity })
    }

    pub fn get(&self, index: usize) -> Option<&ComparableEntity> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Positional view, suitable for [`BestValueEvaluator::evaluate`](super::BestValueEvaluator::evaluate).
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}

impl Default for ComparisonSet {
    fn default() -> Self {
        Self::new()
    }
}
