use crate::core::math::{Quat, Vec3};
use crate::domain::BodyState;

use super::backend::PhysicsBackend;
use super::registry::BodyRegistry;

#[derive(Clone, Copy, Default)]
pub(super) struct ApplyCounts {
    pub(super) forces_applied: u32,
    pub(super) reorientations: u32,
}

/// Orientation one step closer to "up opposite gravity".
///
/// Slerps toward the aligned target by `speed * dt` (clamped to [0, 1]), so
/// repeated steps close the gap exponentially instead of snapping.
pub fn orient_toward_gravity(rotation: Quat, gravity: Vec3, speed: f32, dt: f32) -> Quat {
    let up = rotation.rotate(Vec3::UP);
    let target = Quat::from_to_rotation(up, -gravity) * rotation;
    rotation.slerp(&target, speed * dt)
}

#[inline]
fn should_orient(body: &BodyState) -> bool {
    body.auto_orient_downwards
        && body.gravity_velocity.length_squared() > body.auto_orient_sqr_mag_threshold
}

/// Push every cached gravity vector into the backend.
pub(super) fn apply<B: PhysicsBackend + ?Sized>(
    registry: &mut BodyRegistry,
    backend: &mut B,
    rotation_adjustment_speed: f32,
    dt: f32,
) -> ApplyCounts {
    let mut counts = ApplyCounts::default();

    for body in registry.iter_mut() {
        let Some(handle) = body.handle else {
            continue;
        };
        if !body.is_active() || body.gravity_velocity.is_zero() {
            continue;
        }

        backend.apply_force(handle, body.gravity_velocity * dt);
        counts.forces_applied += 1;

        if should_orient(body) {
            body.rotation = orient_toward_gravity(
                body.rotation,
                body.gravity_velocity,
                rotation_adjustment_speed,
                dt,
            );
            backend.set_orientation(handle, body.rotation);
            counts.reorientations += 1;
        }
    }

    counts
}
