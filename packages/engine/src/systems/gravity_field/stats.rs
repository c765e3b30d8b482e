use wasm_bindgen::prelude::*;

/// What the last `GravityField::step` did. Timings stay zero unless perf
/// metrics are enabled on the field.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct StepStats {
    pub(super) recomputed: bool,
    pub(super) step_ms: f64,
    pub(super) recompute_ms: f64,
    pub(super) apply_ms: f64,
    pub(super) active_bodies: u32,
    pub(super) pairs_evaluated: u32,
    pub(super) forces_applied: u32,
    pub(super) reorientations: u32,
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn recomputed(&self) -> bool { self.recomputed }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn recompute_ms(&self) -> f64 { self.recompute_ms }
    #[wasm_bindgen(getter)]
    pub fn apply_ms(&self) -> f64 { self.apply_ms }
    #[wasm_bindgen(getter)]
    pub fn active_bodies(&self) -> u32 { self.active_bodies }
    #[wasm_bindgen(getter)]
    pub fn pairs_evaluated(&self) -> u32 { self.pairs_evaluated }
    #[wasm_bindgen(getter)]
    pub fn forces_applied(&self) -> u32 { self.forces_applied }
    #[wasm_bindgen(getter)]
    pub fn reorientations(&self) -> u32 { self.reorientations }
}
