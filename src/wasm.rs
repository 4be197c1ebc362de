//! JavaScript bindings for the web front-end.
//!
//! Inputs and outputs cross the boundary as plain JS values through
//! `serde-wasm-bindgen`. Vehicles are objects (or `null` for an empty
//! slot); tiers are `{ name, min_points }` objects. Checks live in
//! [`crate::boundary`].

use wasm_bindgen::prelude::*;

use crate::boundary;
use crate::compare::Slot;
use crate::error::EvalError;
use crate::loyalty::LoyaltyTier;

fn to_js(err: EvalError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

/// Winning slot indices for `field_key` under the vehicle policy table.
#[wasm_bindgen(js_name = bestValueSlots)]
pub fn best_value_slots(vehicles: JsValue, field_key: &str) -> Result<JsValue, JsValue> {
    let slots: Vec<Slot> = serde_wasm_bindgen::from_value(vehicles)?;
    let winners = boundary::best_value_slots(&slots, field_key);
    Ok(serde_wasm_bindgen::to_value(&winners)?)
}

/// Loyalty status for `points` against `tiers`.
///
/// `points` must be a non-negative whole number.
#[wasm_bindgen(js_name = loyaltyStatus)]
pub fn loyalty_status(points: f64, tiers: JsValue) -> Result<JsValue, JsValue> {
    let tiers: Vec<LoyaltyTier> = serde_wasm_bindgen::from_value(tiers)?;
    let status = boundary::loyalty_status(points, &tiers).map_err(to_js)?;
    Ok(serde_wasm_bindgen::to_value(&status)?)
}
