//! Comparison best-value highlighting.
//!
//! Given up to a handful of vehicles placed in positional slots, decides
//! which slot holds the best value of each row. Each field is classified
//! by an explicit [`PolicyTable`] as lower-is-better, higher-is-better, or
//! not comparable.
//!
//! - Empty slots and non-numeric values are skipped, never treated as zero.
//! - A winner needs at least two candidates.
//! - Ties are all winners; no tie-break is applied.

mod config;
mod evaluator;
mod set;
mod types;

pub use config::{
    ComparisonCategory, ComparisonLayout, FieldKind, FieldPolicy, LayoutField, PolicyTable,
};
pub use evaluator::{BestValueEvaluator, Highlights};
pub use set::{ComparisonSet, DEFAULT_CAPACITY};
pub use types::{BestValue, ComparableEntity, FieldValue, Slot};
