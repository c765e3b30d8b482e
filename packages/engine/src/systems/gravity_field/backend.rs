use std::collections::HashMap;

use crate::core::math::{Quat, Vec3};
use crate::domain::BodyHandle;

/// Pose of a body as the host's integrator sees it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Capabilities the gravity field needs from the host's physical integrator.
///
/// The field never integrates anything itself: it hands forces and
/// orientations back through this trait and reads poses from it.
pub trait PhysicsBackend {
    /// Current pose of `handle`. `None` keeps the pose cached in the field
    /// (set through `GravityField::set_position` / `set_rotation`).
    fn transform(&self, _handle: BodyHandle) -> Option<Transform> {
        None
    }

    /// Apply a force for this step (already scaled by dt)
    fn apply_force(&mut self, handle: BodyHandle, force: Vec3);

    /// Write a new world orientation
    fn set_orientation(&mut self, handle: BodyHandle, rotation: Quat);
}

/// Backend that only records what the field asked for.
///
/// Hosts that run their own integrator drain it once per frame; the JS
/// facade uses it as its only backend.
#[derive(Default)]
pub struct ForceAccumulator {
    forces: HashMap<BodyHandle, Vec3>,
    orientations: HashMap<BodyHandle, Quat>,
}

impl ForceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total force applied to `handle` since the last drain
    pub fn force(&self, handle: BodyHandle) -> Vec3 {
        self.forces.get(&handle).copied().unwrap_or_default()
    }

    /// Last orientation written for `handle` since the last drain
    pub fn orientation(&self, handle: BodyHandle) -> Option<Quat> {
        self.orientations.get(&handle).copied()
    }

    /// Take every accumulated force, leaving the accumulator empty
    pub fn drain(&mut self) -> Vec<(BodyHandle, Vec3)> {
        self.orientations.clear();
        let mut out: Vec<(BodyHandle, Vec3)> = self.forces.drain().collect();
        out.sort_by_key(|(h, _)| *h);
        out
    }

    pub fn forget(&mut self, handle: BodyHandle) {
        self.forces.remove(&handle);
        self.orientations.remove(&handle);
    }
}

impl PhysicsBackend for ForceAccumulator {
    fn apply_force(&mut self, handle: BodyHandle, force: Vec3) {
        *self.forces.entry(handle).or_default() += force;
    }

    fn set_orientation(&mut self, handle: BodyHandle, rotation: Quat) {
        self.orientations.insert(handle, rotation);
    }
}
