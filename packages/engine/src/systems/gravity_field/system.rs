use crate::core::math::{Quat, Vec3};
use crate::core::utils::perf_timer::{timed, PerfTimer};
use crate::domain::{BodyHandle, BodyState, GravityConfig};

use super::apply::apply;
use super::backend::PhysicsBackend;
use super::recompute::recompute;
use super::registry::BodyRegistry;
use super::stats::StepStats;

/// Owns every registered body and drives the two-tier gravity update:
/// pairwise recomputation on a wall-clock cadence, application every step.
pub struct GravityField {
    registry: BodyRegistry,
    config: GravityConfig,
    /// `None` until the first recomputation
    last_recompute_time: Option<f64>,
    perf_enabled: bool,
}

impl GravityField {
    pub fn new() -> Self {
        Self::with_config(GravityConfig::default())
    }

    /// Create a field with custom tuning. Invalid values are replaced by defaults.
    pub fn with_config(config: GravityConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                engine_warn!("invalid gravity config ({}), using defaults", e);
                GravityConfig::default()
            }
        };
        Self {
            registry: BodyRegistry::new(),
            config,
            last_recompute_time: None,
            perf_enabled: false,
        }
    }

    // === Configuration ===

    pub fn config(&self) -> &GravityConfig {
        &self.config
    }

    /// Replace the tuning. Rejected configs leave the current one in place.
    pub fn set_config(&mut self, config: GravityConfig) -> Result<(), String> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Enable or disable per-step timings (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    pub fn last_recompute_time(&self) -> Option<f64> {
        self.last_recompute_time
    }

    /// Make the next `step` recompute regardless of the cadence
    pub fn force_recompute(&mut self) {
        self.last_recompute_time = None;
    }

    // === Registry ===

    /// Add a body. Bodies without a usable mass are kept as inert placeholders.
    pub fn register(&mut self, body: BodyState) -> BodyHandle {
        let inert = !body.is_active();
        let handle = self.registry.insert(body);
        if inert {
            engine_warn!(
                "body {}:{} has no usable mass, registered as inert",
                handle.index(),
                handle.generation()
            );
        }
        handle
    }

    /// Remove exactly one body.
    ///
    /// Returns `false` (and does nothing) for unknown, stale or already
    /// removed handles, so redundant calls are safe.
    pub fn unregister(&mut self, handle: BodyHandle) -> bool {
        self.registry.remove(handle).is_some()
    }

    /// Remove all bodies (used by the facade's `clear`)
    pub fn clear(&mut self) {
        self.registry.clear();
        self.last_recompute_time = None;
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.registry.get(handle).is_some()
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&BodyState> {
        self.registry.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut BodyState> {
        self.registry.get_mut(handle)
    }

    /// Cached gravity of the last recomputation (diagnostics/telemetry)
    pub fn gravity_velocity(&self, handle: BodyHandle) -> Option<Vec3> {
        self.registry.get(handle).map(|b| b.gravity_velocity())
    }

    /// Registered bodies in stable slot order
    pub fn iter(&self) -> impl Iterator<Item = &BodyState> {
        self.registry.iter()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    pub fn active_count(&self) -> usize {
        self.registry.iter().filter(|b| b.is_active()).count()
    }

    // === Host updates ===

    pub fn set_mass(&mut self, handle: BodyHandle, mass: Option<f32>) -> bool {
        self.update(handle, |b| b.set_mass(mass))
    }

    pub fn set_position(&mut self, handle: BodyHandle, position: Vec3) -> bool {
        self.update(handle, |b| b.set_position(position))
    }

    pub fn set_rotation(&mut self, handle: BodyHandle, rotation: Quat) -> bool {
        self.update(handle, |b| b.set_rotation(rotation))
    }

    pub fn set_use_gravity(&mut self, handle: BodyHandle, use_gravity: bool) -> bool {
        self.update(handle, |b| b.set_use_gravity(use_gravity))
    }

    pub fn set_auto_orient(&mut self, handle: BodyHandle, enabled: bool, sqr_mag_threshold: f32) -> bool {
        self.update(handle, |b| b.set_auto_orient(enabled, sqr_mag_threshold))
    }

    fn update(&mut self, handle: BodyHandle, f: impl FnOnce(&mut BodyState)) -> bool {
        match self.registry.get_mut(handle) {
            Some(body) => {
                f(body);
                true
            }
            None => false,
        }
    }

    // === Simulation ===

    /// Advance one host frame.
    ///
    /// Recomputes when the cadence is due (or nothing was computed yet), then
    /// applies the cached gravity of every body.
    pub fn step<B: PhysicsBackend + ?Sized>(&mut self, now: f64, dt: f32, backend: &mut B) -> StepStats {
        let perf_on = self.perf_enabled;
        let step_start = if perf_on { Some(PerfTimer::start()) } else { None };
        let mut stats = StepStats::default();

        self.pull_transforms(&*backend);

        if self.recompute_due(now) {
            let (pairs, ms) = timed(perf_on, || self.recompute());
            self.last_recompute_time = Some(now);
            stats.recomputed = true;
            stats.pairs_evaluated = pairs;
            stats.recompute_ms = ms;
        }

        let (counts, ms) = timed(perf_on, || self.apply(dt, backend));
        stats.apply_ms = ms;
        stats.forces_applied = counts.0;
        stats.reorientations = counts.1;
        stats.active_bodies = self.active_count() as u32;

        if let Some(t0) = step_start {
            stats.step_ms = t0.elapsed_ms();
        }
        stats
    }

    fn recompute_due(&self, now: f64) -> bool {
        match self.last_recompute_time {
            None => true,
            Some(last) => now - last >= self.config.recompute_interval as f64,
        }
    }

    /// Recompute every body's cached gravity from current positions.
    ///
    /// Returns the number of pair interactions evaluated.
    pub fn recompute(&mut self) -> u32 {
        recompute(&mut self.registry, self.config.mass_multiplier)
    }

    /// Apply cached gravity (and auto-orientation) for a step of `dt` seconds.
    ///
    /// Returns `(forces_applied, reorientations)`.
    pub fn apply<B: PhysicsBackend + ?Sized>(&mut self, dt: f32, backend: &mut B) -> (u32, u32) {
        let counts = apply(&mut self.registry, backend, self.config.rotation_adjustment_speed, dt);
        (counts.forces_applied, counts.reorientations)
    }

    /// Refresh cached poses from the backend, where it provides them
    fn pull_transforms<B: PhysicsBackend + ?Sized>(&mut self, backend: &B) {
        for body in self.registry.iter_mut() {
            let Some(handle) = body.handle else {
                continue;
            };
            if let Some(t) = backend.transform(handle) {
                body.position = t.position;
                body.rotation = t.rotation.normalize();
            }
        }
    }
}

impl Default for GravityField {
    fn default() -> Self {
        Self::new()
    }
}
