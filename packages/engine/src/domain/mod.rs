//! Domain data: body state, handles and engine configuration.

pub mod body;
pub mod config;
pub mod handle;

pub use body::BodyState;
pub use config::GravityConfig;
pub use handle::BodyHandle;
