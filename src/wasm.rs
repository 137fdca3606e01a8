//! WebAssembly bindings for browser front ends.
//!
//! Values cross the boundary as plain JS objects shaped like the serde
//! representation: camelCase fields, `{ tables, guests }` for plans.
//!
//! ## Example (JavaScript)
//! ```js
//! import { availableCriteria, runAutoAssign, applyAssignments } from 'u-seating';
//!
//! const tags = availableCriteria(guests, 'tag');
//! const preview = runAutoAssign(tables, guests, {
//!   mode: 'tag',
//!   selectedCriteria: tags.map(t => t.value),
//!   strictMode: false,
//! });
//! const plan = applyAssignments({ tables, guests }, preview.assignments);
//! ```

use wasm_bindgen::prelude::*;

use crate::assign::{AssignConfig, Assignment, AutoAssigner};
use crate::grouping::{self, GroupMode};
use crate::model::{Guest, Table};
use crate::plan::SeatingPlan;

fn decode<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&format!("invalid {what}: {e}")))
}

fn encode<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&format!("encode error: {e}")))
}

/// Runs an auto-assign simulation and returns `{ assignments, skipped }`.
///
/// Throws on an empty selection or malformed input.
#[wasm_bindgen(js_name = runAutoAssign)]
pub fn run_auto_assign(tables: JsValue, guests: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let tables: Vec<Table> = decode(tables, "tables")?;
    let guests: Vec<Guest> = decode(guests, "guests")?;
    let config: AssignConfig = decode(config, "config")?;
    let result = AutoAssigner::new().run(&tables, &guests, &config)?;
    encode(&result)
}

/// Lists `{ value, guests }` for each criterion value carried by an
/// unseated guest. `mode` is `"category"` or `"tag"`.
#[wasm_bindgen(js_name = availableCriteria)]
pub fn available_criteria(guests: JsValue, mode: &str) -> Result<JsValue, JsError> {
    let guests: Vec<Guest> = decode(guests, "guests")?;
    let mode: GroupMode = mode.parse()?;
    encode(&grouping::available_criteria(&guests, mode))
}

/// Lists `{ tableId, guestA, seatA, guestB, seatB }` for every excluded
/// pair seated together in a `{ tables, guests }` plan.
#[wasm_bindgen(js_name = seatConflicts)]
pub fn seat_conflicts(plan: JsValue) -> Result<JsValue, JsError> {
    let plan: SeatingPlan = decode(plan, "plan")?;
    encode(&plan.conflicts())
}

/// Commits assignments into a `{ tables, guests }` plan and returns the
/// updated plan. The input plan object is not modified.
#[wasm_bindgen(js_name = applyAssignments)]
pub fn apply_assignments(plan: JsValue, assignments: JsValue) -> Result<JsValue, JsError> {
    let mut plan: SeatingPlan = decode(plan, "plan")?;
    let assignments: Vec<Assignment> = decode(assignments, "assignments")?;
    plan.apply_assignments(&assignments)?;
    encode(&plan)
}
