use crate::core::math::{Quat, Vec3};

use super::handle::BodyHandle;

/// Per-body gravity state
///
/// A body is either *active* (resolvable mass, takes part in the force sum)
/// or *inert* (no usable mass: kept as a placeholder, contributes and
/// receives nothing).
#[derive(Clone, Debug)]
pub struct BodyState {
    // === Identity ===
    pub(crate) handle: Option<BodyHandle>,

    // === Physics State ===
    /// Mass supplied by the host; `None` when the host cannot resolve one
    pub(crate) mass: Option<f32>,
    /// World position, refreshed from the host before recomputation
    pub(crate) position: Vec3,
    /// World orientation; the engine writes it only when auto-orienting
    pub(crate) rotation: Quat,
    /// Cached result of the last recomputation
    pub(crate) gravity_velocity: Vec3,

    // === Host flags ===
    pub(crate) use_gravity: bool,
    pub(crate) auto_orient_downwards: bool,
    pub(crate) auto_orient_sqr_mag_threshold: f32,
}

impl BodyState {
    pub fn new(mass: Option<f32>, position: Vec3) -> Self {
        Self {
            handle: None,
            mass,
            position,
            rotation: Quat::identity(),
            gravity_velocity: Vec3::zero(),
            use_gravity: true,
            auto_orient_downwards: false,
            auto_orient_sqr_mag_threshold: 0.0,
        }
    }

    /// Placeholder for an entity whose mass the host cannot resolve
    pub fn inert(position: Vec3) -> Self {
        Self::new(None, position)
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation.normalize();
        self
    }

    pub fn with_use_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self
    }

    pub fn with_auto_orient(mut self, enabled: bool, sqr_mag_threshold: f32) -> Self {
        self.auto_orient_downwards = enabled;
        self.auto_orient_sqr_mag_threshold = sqr_mag_threshold;
        self
    }

    /// Handle assigned on registration (`None` before that)
    pub fn handle(&self) -> Option<BodyHandle> {
        self.handle
    }

    /// The usable mass, if any
    #[inline]
    pub fn mass(&self) -> Option<f32> {
        self.mass.filter(|m| m.is_finite() && *m > 0.0)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.mass().is_some()
    }

    /// Active and opted in to gravity: both a source and a receiver
    #[inline]
    pub fn participates(&self) -> bool {
        self.use_gravity && self.is_active()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Local +Y axis in world space
    pub fn up(&self) -> Vec3 {
        self.rotation.rotate(Vec3::UP)
    }

    pub fn gravity_velocity(&self) -> Vec3 {
        self.gravity_velocity
    }

    pub fn use_gravity(&self) -> bool {
        self.use_gravity
    }

    pub fn auto_orient_downwards(&self) -> bool {
        self.auto_orient_downwards
    }

    pub fn auto_orient_sqr_mag_threshold(&self) -> f32 {
        self.auto_orient_sqr_mag_threshold
    }

    pub fn set_mass(&mut self, mass: Option<f32>) {
        self.mass = mass;
        if !self.is_active() {
            self.gravity_velocity = Vec3::zero();
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    pub fn set_use_gravity(&mut self, use_gravity: bool) {
        self.use_gravity = use_gravity;
    }

    pub fn set_auto_orient(&mut self, enabled: bool, sqr_mag_threshold: f32) {
        self.auto_orient_downwards = enabled;
        self.auto_orient_sqr_mag_threshold = sqr_mag_threshold;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_masses_make_body_inert() {
        for mass in [None, Some(0.0), Some(-1.0), Some(f32::NAN), Some(f32::INFINITY)] {
            let body = BodyState::new(mass, Vec3::zero());
            assert!(!body.is_active(), "mass {:?} should be inert", mass);
            assert!(!body.participates());
        }
        assert!(BodyState::new(Some(2.0), Vec3::zero()).is_active());
    }

    #[test]
    fn losing_mass_clears_cached_gravity() {
        let mut body = BodyState::new(Some(1.0), Vec3::zero());
        body.gravity_velocity = Vec3::new(1.0, 0.0, 0.0);
        body.set_mass(None);
        assert_eq!(body.gravity_velocity(), Vec3::ZERO);
    }

    #[test]
    fn up_follows_rotation() {
        let quarter = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_2);
        let body = BodyState::new(Some(1.0), Vec3::zero()).with_rotation(quarter);
        let up = body.up();
        assert!((up - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }
}
