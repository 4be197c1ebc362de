//! Comparison data: field values, entities, and evaluation outcomes.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single field value of a compared entity.
///
/// Only [`FieldValue::Number`] takes part in best-value comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Returns the numeric value, or `None` for text and NaN.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// An entity placed in a comparison slot (typically a vehicle listing).
///
/// # Examples
///
/// ```
/// use carfast_eval::compare::ComparableEntity;
///
/// let car = ComparableEntity::new()
///     .with("make", "Peugeot")
///     .with("price", 18_500.0)
///     .with("mileage", 42_000.0);
///
/// assert_eq!(car.number("price"), Some(18_500.0));
/// assert_eq!(car.number("make"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct ComparableEntity {
    fields: BTreeMap<String, FieldValue>,
}

impl ComparableEntity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Numeric value at `key`; missing, textual, and NaN values yield `None`.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(FieldValue::as_number)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ComparableEntity {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Listing values as they arrive from JSON or JS: anything that is not a
/// number or a string is accepted and dropped.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldValue {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ComparableEntity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, RawFieldValue>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                RawFieldValue::Number(v) => Some((key, FieldValue::Number(v))),
                RawFieldValue::Text(v) => Some((key, FieldValue::Text(v))),
                RawFieldValue::Other(_) => None,
            })
            .collect())
    }
}

/// A positional comparison slot. `None` is an unoccupied slot.
pub type Slot = Option<ComparableEntity>;

/// Outcome of evaluating one field across the comparison slots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "Vec<usize>", from = "Vec<usize>")
)]
pub enum BestValue {
    /// Slot indices holding the best value, ascending. Ties are all listed.
    Winners(Vec<usize>),

    /// The field is not comparable or has fewer than two candidates.
    NoWinner,
}

impl BestValue {
    /// Whether `slot` holds the best value.
    pub fn is_winner(&self, slot: usize) -> bool {
        match self {
            BestValue::Winners(slots) => slots.contains(&slot),
            BestValue::NoWinner => false,
        }
    }

    /// Winning slots; empty for [`BestValue::NoWinner`].
    pub fn winners(&self) -> &[usize] {
        match self {
            BestValue::Winners(slots) => slots,
            BestValue::NoWinner => &[],
        }
    }
}

impl From<BestValue> for Vec<usize> {
    fn from(value: BestValue) -> Self {
        match value {
            BestValue::Winners(slots) => slots,
            BestValue::NoWinner => Vec::new(),
        }
    }
}

impl From<Vec<usize>> for BestValue {
    fn from(slots: Vec<usize>) -> Self {
        if slots.is_empty() {
            BestValue::NoWinner
        } else {
            BestValue::Winners(slots)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_skips_text_and_nan() {
        let e = ComparableEntity::new()
            .with("price", 100.0)
            .with("fuel_type", "diesel")
            .with("power", f64::NAN);

        assert_eq!(e.number("price"), Some(100.0));
        assert_eq!(e.number("fuel_type"), None);
        assert_eq!(e.number("power"), None);
        assert_eq!(e.number("missing"), None);
        assert_eq!(e.len(), 3);
    }

    #[test]
    fn test_from_iter() {
        let e: ComparableEntity = [("price", 1.0), ("mileage", 2.0)].into_iter().collect();
        assert_eq!(e.number("mileage"), Some(2.0));
    }

    #[test]
    fn test_best_value_accessors() {
        let v = BestValue::Winners(vec![0, 2]);
        assert!(v.is_winner(0));
        assert!(!v.is_winner(1));
        assert_eq!(v.winners(), &[0, 2]);
        assert!(BestValue::NoWinner.winners().is_empty());
        assert_eq!(BestValue::from(Vec::new()), BestValue::NoWinner);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shapes() {
        let e: ComparableEntity =
            serde_json::from_str(r#"{"make":"Renault","price":12000}"#).unwrap();
        assert_eq!(e.number("price"), Some(12000.0));
        assert_eq!(e.get("make"), Some(&FieldValue::Text("Renault".into())));

        let json = serde_json::to_string(&BestValue::Winners(vec![1])).unwrap();
        assert_eq!(json, "[1]");
        let none: BestValue = serde_json::from_str("[]").unwrap();
        assert_eq!(none, BestValue::NoWinner);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_drops_null_bool_and_nested_values() {
        let e: ComparableEntity = serde_json::from_str(
            r#"{"price":100,"power":null,"is_new":true,"features":["gps"],"dealer":{"id":7},"make":"Kia"}"#,
        )
        .unwrap();
        assert_eq!(e.number("price"), Some(100.0));
        assert_eq!(e.get("power"), None);
        assert_eq!(e.get("is_new"), None);
        assert_eq!(e.get("features"), None);
        assert_eq!(e.get("dealer"), None);
        assert_eq!(e.get("make"), Some(&FieldValue::Text("Kia".into())));
        assert_eq!(e.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_slots_with_gaps() {
        let slots: Vec<Slot> =
            serde_json::from_str(r#"[{"price":100,"power":null},null,{"price":80,"is_new":false}]"#)
                .unwrap();
        assert_eq!(slots.len(), 3);
        assert!(slots[1].is_none());
        assert_eq!(slots[2].as_ref().and_then(|e| e.number("price")), Some(80.0));
    }
}
