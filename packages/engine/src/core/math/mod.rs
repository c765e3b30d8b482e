//! Small f32 math types shared by the gravity field and the host facade.

mod quat;
mod vec3;

pub use quat::Quat;
pub use vec3::Vec3;
