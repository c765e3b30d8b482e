use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::math::{Quat, Vec3};
use crate::domain::{BodyHandle, BodyState, GravityConfig};
use crate::systems::gravity_field::{ForceAccumulator, GravityField, StepStats};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BodySnapshot {
    handle: u64,
    mass: Option<f32>,
    active: bool,
    position: Vec3,
    rotation: Quat,
    gravity_velocity: Vec3,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldSnapshot<'a> {
    format_version: u32,
    last_recompute_time: Option<f64>,
    config: &'a GravityConfig,
    bodies: Vec<BodySnapshot>,
}

/// JS-facing gravity world.
///
/// The page drives the clock and its own integrator: call `step`, then read
/// the accumulated force of each body with `force_*` (cleared on the next
/// `step`). Handles cross the boundary as u64 (BigInt).
#[wasm_bindgen]
pub struct GravityWorld {
    field: GravityField,
    sink: ForceAccumulator,
}

#[wasm_bindgen]
impl GravityWorld {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            field: GravityField::new(),
            sink: ForceAccumulator::new(),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<GravityWorld, JsValue> {
        let config = GravityConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            field: GravityField::with_config(config),
            sink: ForceAccumulator::new(),
        })
    }

    pub fn set_config_json(&mut self, json: String) -> Result<(), JsValue> {
        let config = GravityConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.field.set_config(config).map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.field.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.field.enable_perf_metrics(enabled);
    }

    // === BODY API ===

    /// Register a body. Pass `undefined` as mass for an inert placeholder.
    /// Returns the body handle.
    pub fn register(&mut self, mass: Option<f32>, x: f32, y: f32, z: f32) -> u64 {
        self.field
            .register(BodyState::new(mass, Vec3::new(x, y, z)))
            .to_bits()
    }

    /// Remove one body. Unknown handles are ignored.
    pub fn unregister(&mut self, handle: u64) -> bool {
        let handle = BodyHandle::from_bits(handle);
        self.sink.forget(handle);
        self.field.unregister(handle)
    }

    pub fn clear(&mut self) {
        self.field.clear();
        self.sink.drain();
    }

    pub fn set_mass(&mut self, handle: u64, mass: Option<f32>) -> bool {
        self.field.set_mass(BodyHandle::from_bits(handle), mass)
    }

    pub fn set_position(&mut self, handle: u64, x: f32, y: f32, z: f32) -> bool {
        self.field
            .set_position(BodyHandle::from_bits(handle), Vec3::new(x, y, z))
    }

    pub fn set_rotation(&mut self, handle: u64, w: f32, x: f32, y: f32, z: f32) -> bool {
        self.field
            .set_rotation(BodyHandle::from_bits(handle), Quat::new(w, x, y, z))
    }

    pub fn set_use_gravity(&mut self, handle: u64, use_gravity: bool) -> bool {
        self.field
            .set_use_gravity(BodyHandle::from_bits(handle), use_gravity)
    }

    pub fn set_auto_orient(&mut self, handle: u64, enabled: bool, sqr_mag_threshold: f32) -> bool {
        self.field
            .set_auto_orient(BodyHandle::from_bits(handle), enabled, sqr_mag_threshold)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.field.len()
    }

    #[wasm_bindgen(getter)]
    pub fn active_count(&self) -> usize {
        self.field.active_count()
    }

    pub fn contains(&self, handle: u64) -> bool {
        self.field.contains(BodyHandle::from_bits(handle))
    }

    /// Step the gravity field forward (`now` in seconds, `dt` in seconds)
    pub fn step(&mut self, now: f64, dt: f32) -> StepStats {
        self.sink.drain();
        self.field.step(now, dt, &mut self.sink)
    }

    // === READBACK ===

    pub fn force_x(&self, handle: u64) -> f32 {
        self.sink.force(BodyHandle::from_bits(handle)).x
    }

    pub fn force_y(&self, handle: u64) -> f32 {
        self.sink.force(BodyHandle::from_bits(handle)).y
    }

    pub fn force_z(&self, handle: u64) -> f32 {
        self.sink.force(BodyHandle::from_bits(handle)).z
    }

    /// Cached gravity vector as [x, y, z] (empty for unknown handles)
    pub fn gravity_velocity(&self, handle: u64) -> Vec<f32> {
        match self.field.gravity_velocity(BodyHandle::from_bits(handle)) {
            Some(g) => vec![g.x, g.y, g.z],
            None => Vec::new(),
        }
    }

    /// Current orientation as [w, x, y, z] (empty for unknown handles)
    pub fn rotation(&self, handle: u64) -> Vec<f32> {
        match self.field.body(BodyHandle::from_bits(handle)) {
            Some(b) => {
                let q = b.rotation();
                vec![q.w, q.v.x, q.v.y, q.v.z]
            }
            None => Vec::new(),
        }
    }

    /// Telemetry dump of every registered body
    pub fn snapshot_json(&self) -> String {
        let bodies = self
            .field
            .iter()
            .filter_map(|b| {
                Some(BodySnapshot {
                    handle: b.handle()?.to_bits(),
                    mass: b.mass(),
                    active: b.is_active(),
                    position: b.position(),
                    rotation: b.rotation(),
                    gravity_velocity: b.gravity_velocity(),
                })
            })
            .collect();
        let out = FieldSnapshot {
            format_version: 1,
            last_recompute_time: self.field.last_recompute_time(),
            config: self.field.config(),
            bodies,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for GravityWorld {
    fn default() -> Self {
        Self::new()
    }
}
