//! Quaternion utilities for body orientation.
//!
//! Convention: q = [w; x; y; z] where w is scalar, (x,y,z) is vector part.

use super::vec3::Vec3;

/// A unit quaternion representing a 3D rotation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quat {
    /// Scalar part (w).
    pub w: f32,
    /// Vector part (x, y, z).
    pub v: Vec3,
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, v: Vec3::new(x, y, z) }
    }

    /// Identity quaternion (no rotation).
    pub const fn identity() -> Self {
        Self { w: 1.0, v: Vec3::ZERO }
    }

    /// axis should be a unit vector, angle in radians.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self { w: c, v: axis * s }
    }

    /// Shortest-arc rotation taking direction `from` onto direction `to`.
    ///
    /// Returns identity when either input is (near-)zero.
    pub fn from_to_rotation(from: Vec3, to: Vec3) -> Self {
        let a = from.normalize();
        let b = to.normalize();
        if a.is_zero() || b.is_zero() {
            return Self::identity();
        }

        let d = a.dot(b);
        if d >= 1.0 - 1e-6 {
            return Self::identity();
        }
        if d <= -1.0 + 1e-6 {
            // Antiparallel: any perpendicular axis works for a half turn.
            let axis = a.any_orthogonal().normalize();
            return Self::from_axis_angle(axis, std::f32::consts::PI);
        }

        Self { w: 1.0 + d, v: a.cross(b) }.normalize()
    }

    pub fn dot(&self, other: &Quat) -> f32 {
        self.w * other.w + self.v.dot(other.v)
    }

    pub fn normalize(&self) -> Self {
        let norm = self.dot(self).sqrt();
        if norm < 1e-12 {
            return Self::identity();
        }
        Self { w: self.w / norm, v: self.v * (1.0 / norm) }
    }

    /// Conjugate of the quaternion (inverse for unit quaternions).
    pub fn conjugate(&self) -> Quat {
        Quat { w: self.w, v: -self.v }
    }

    /// Rotate a vector by this quaternion.
    pub fn rotate(&self, p: Vec3) -> Vec3 {
        // p' = p + 2w(v x p) + 2 v x (v x p)
        let t = self.v.cross(p) * 2.0;
        p + t * self.w + self.v.cross(t)
    }

    /// Spherical interpolation toward `target`; `t` is clamped to [0, 1].
    pub fn slerp(&self, target: &Quat, t: f32) -> Quat {
        let t = t.clamp(0.0, 1.0);
        let mut end = *target;
        let mut cos_theta = self.dot(target);

        // Take the short way around.
        if cos_theta < 0.0 {
            end = Quat { w: -end.w, v: -end.v };
            cos_theta = -cos_theta;
        }

        if cos_theta > 0.9995 {
            // Nearly parallel: nlerp is accurate and avoids dividing by ~0.
            let q = Quat {
                w: self.w + (end.w - self.w) * t,
                v: self.v + (end.v - self.v) * t,
            };
            return q.normalize();
        }

        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let a = ((1.0 - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        Quat {
            w: self.w * a + end.w * b,
            v: self.v * a + end.v * b,
        }
        .normalize()
    }

    /// Angle in radians between two orientations.
    pub fn angle_to(&self, other: &Quat) -> f32 {
        let d = self.dot(other).abs().min(1.0);
        2.0 * d.acos()
    }
}

impl std::ops::Mul for Quat {
    type Output = Quat;

    /// Hamilton product: `self * rhs` applies `rhs` first, then `self`.
    fn mul(self, rhs: Quat) -> Quat {
        Quat {
            w: self.w * rhs.w - self.v.dot(rhs.v),
            v: self.v.cross(rhs.v) + rhs.v * self.w + self.v * rhs.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPS, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_vec_close(Quat::identity().rotate(v), v);
    }

    #[test]
    fn test_axis_angle_quarter_turn() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_2);
        assert_vec_close(q.rotate(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_from_to_rotation_maps_direction() {
        let from = Vec3::UP;
        let to = Vec3::new(1.0, 1.0, 0.0);
        let q = Quat::from_to_rotation(from, to);
        assert_vec_close(q.rotate(from), to.normalize());
    }

    #[test]
    fn test_from_to_rotation_antiparallel() {
        let q = Quat::from_to_rotation(Vec3::UP, -Vec3::UP);
        assert_vec_close(q.rotate(Vec3::UP), -Vec3::UP);
    }

    #[test]
    fn test_slerp_endpoints_and_clamp() {
        let a = Quat::identity();
        let b = Quat::from_axis_angle(Vec3::UP, 1.0);
        assert!(a.slerp(&b, 0.0).angle_to(&a) < EPS);
        assert!(a.slerp(&b, 1.0).angle_to(&b) < 1e-2);
        assert!(a.slerp(&b, 5.0).angle_to(&b) < 1e-2);
        assert!(a.slerp(&b, -1.0).angle_to(&a) < EPS);
    }

    #[test]
    fn test_slerp_halfway() {
        let a = Quat::identity();
        let b = Quat::from_axis_angle(Vec3::UP, 1.0);
        let mid = a.slerp(&b, 0.5);
        assert!((mid.angle_to(&a) - 0.5).abs() < 1e-2);
    }

    #[test]
    fn test_mul_composes() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_2);
        let qq = q * q;
        assert_vec_close(qq.rotate(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(-1.0, 0.0, 0.0));
    }
}
