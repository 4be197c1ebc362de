//! Pure decision core of the CarFast marketplace front-end.
//!
//! Two independent, stateless computations:
//!
//! - **Comparison** ([`compare`]): for vehicles placed side by side, decide
//!   which slots hold the best value of each field under an explicit
//!   lower-is-better / higher-is-better policy table.
//! - **Loyalty** ([`loyalty`]): map a points balance onto a tier table,
//!   yielding the current tier, the next tier, and progress towards it.
//!
//! # Architecture
//!
//! Both modules are leaf components with no I/O and no shared mutable
//! state. Listings, subscriptions, payments, and registry lookups are
//! fetched by the application shell and handed in as plain values.
//!
//! [`boundary`] holds the checked entry points for loosely typed hosts.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all data types; tier tables
//!   are validated on deserialization.
//! - `wasm`: `wasm-bindgen` exports for the web shell (implies `serde`).

pub mod boundary;
pub mod compare;
pub mod error;
pub mod loyalty;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::EvalError;
