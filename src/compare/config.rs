//! Field policies and comparison layouts.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Directionality of a comparison field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FieldPolicy {
    /// Smaller values win (price, mileage, ...).
    LowerIsBetter,
    /// Larger values win (safety rating, power, ...).
    HigherIsBetter,
    /// Never highlighted.
    #[default]
    NotComparable,
}

/// Explicit classification of field keys into [`FieldPolicy`] values.
///
/// Keys not listed resolve to [`FieldPolicy::NotComparable`]. Entries are
/// kept in insertion order until [`validate`](Self::validate) is called so
/// that double classifications are reported rather than silently merged.
///
/// # Examples
///
/// ```
/// use carfast_eval::compare::{FieldPolicy, PolicyTable};
///
/// let table = PolicyTable::new()
///     .with_field("price", FieldPolicy::LowerIsBetter)
///     .with_field("power", FieldPolicy::HigherIsBetter);
///
/// assert!(table.validate().is_ok());
/// assert_eq!(table.policy("price"), FieldPolicy::LowerIsBetter);
/// assert_eq!(table.policy("color"), FieldPolicy::NotComparable);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PolicyTable {
    entries: Vec<(String, FieldPolicy)>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The classification used by the CarFast vehicle comparison table.
    ///
    /// `power` and `top_speed` are highlighted here; the earlier web table
    /// never highlighted them.
    pub fn vehicle() -> Self {
        Self::new()
            .with_lower_is_better(["price", "mileage", "acceleration", "fuel_consumption"])
            .with_higher_is_better(["safety_rating", "power", "top_speed"])
            .with_not_comparable(["year", "engine_size", "airbags"])
    }

    pub fn with_field(mut self, key: impl Into<String>, policy: FieldPolicy) -> Self {
        self.entries.push((key.into(), policy));
        self
    }

    pub fn with_lower_is_better<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.with_fields(keys, FieldPolicy::LowerIsBetter)
    }

    pub fn with_higher_is_better<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.with_fields(keys, FieldPolicy::HigherIsBetter)
    }

    /// Records numeric fields that are deliberately never highlighted.
    pub fn with_not_comparable<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.with_fields(keys, FieldPolicy::NotComparable)
    }

    fn with_fields<I, K>(mut self, keys: I, policy: FieldPolicy) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.entries
            .extend(keys.into_iter().map(|k| (k.into(), policy)));
        self
    }

    /// Policy for `key`. The first entry wins if the table was never validated.
    pub fn policy(&self, key: &str) -> FieldPolicy {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| *p)
            .unwrap_or_default()
    }

    /// Whether `key` has an explicit entry (including `NotComparable`).
    pub fn is_classified(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every key is non-empty and classified exactly once.
    pub fn validate(&self) -> Result<(), EvalError> {
        let mut seen: BTreeMap<&str, FieldPolicy> = BTreeMap::new();
        for (key, policy) in &self.entries {
            if key.is_empty() {
                return Err(EvalError::EmptyFieldKey);
            }
            if let Some(previous) = seen.insert(key.as_str(), *policy) {
                let err = if previous == *policy {
                    EvalError::DuplicateField { key: key.clone() }
                } else {
                    EvalError::ConflictingPolicy { key: key.clone() }
                };
                log::debug!("rejecting policy table: {err}");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Validates the table and checks that every numeric field of `layout`
    /// has an explicit classification.
    pub fn validate_against(&self, layout: &ComparisonLayout) -> Result<(), EvalError> {
        self.validate()?;
        layout.validate()?;
        for field in layout.fields() {
            if field.kind == FieldKind::Numeric && !self.is_classified(&field.key) {
                log::debug!("numeric field `{}` is not classified", field.key);
                return Err(EvalError::UnclassifiedField {
                    key: field.key.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Value kind of a layout field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FieldKind {
    Numeric,
    Text,
}

/// A row of the comparison table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
}

impl LayoutField {
    pub fn numeric(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Numeric,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Text,
        }
    }
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonCategory {
    pub name: String,
    pub fields: Vec<LayoutField>,
}

/// Ordered categories rendered by a comparison table.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ComparisonLayout {
    categories: Vec<ComparisonCategory>,
}

impl ComparisonLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four-category layout of the vehicle comparison table.
    pub fn vehicle() -> Self {
        Self::new()
            .with_category(
                "General",
                vec![
                    LayoutField::text("make", "Make"),
                    LayoutField::text("model", "Model"),
                    LayoutField::numeric("year", "Year"),
                    LayoutField::numeric("price", "Price"),
                ],
            )
            .with_category(
                "Characteristics",
                vec![
                    LayoutField::numeric("mileage", "Mileage"),
                    LayoutField::text("fuel_type", "Fuel"),
                    LayoutField::text("transmission", "Transmission"),
                    LayoutField::numeric("engine_size", "Engine"),
                ],
            )
            .with_category(
                "Performance",
                vec![
                    LayoutField::numeric("power", "Power"),
                    LayoutField::numeric("acceleration", "0-100 km/h"),
                    LayoutField::numeric("top_speed", "Top speed"),
                    LayoutField::numeric("fuel_consumption", "Consumption"),
                ],
            )
            .with_category(
                "Safety",
                vec![
                    LayoutField::numeric("safety_rating", "Overall rating"),
                    LayoutField::numeric("airbags", "Airbags"),
                    LayoutField::text("assistance_systems", "Driver assistance"),
                    LayoutField::text("crash_test", "Crash test"),
                ],
            )
    }

    pub fn with_category(mut self, name: impl Into<String>, fields: Vec<LayoutField>) -> Self {
        self.categories.push(ComparisonCategory {
            name: name.into(),
            fields,
        });
        self
    }

    pub fn categories(&self) -> &[ComparisonCategory] {
        &self.categories
    }

    /// All rows in display order.
    pub fn fields(&self) -> impl Iterator<Item = &LayoutField> {
        self.categories.iter().flat_map(|c| c.fields.iter())
    }

    /// Checks that row keys are non-empty and unique across categories.
    pub fn validate(&self) -> Result<(), EvalError> {
        let mut seen = std::collections::BTreeSet::new();
        for field in self.fields() {
            if field.key.is_empty() {
                return Err(EvalError::EmptyFieldKey);
            }
            if !seen.insert(field.key.as_str()) {
                return Err(EvalError::DuplicateField {
                    key: field.key.clone(),
                });
            }
        }
        Ok(())
    }
}
