//! Gravity Engine - pairwise gravity field for host simulations (native + WASM)
//!
//! Architecture:
//! - core/      - Math types, logging and timing utilities
//! - domain/    - Body state, handles, configuration
//! - systems/   - The gravity field itself
//! - api/       - wasm-bindgen facade for JS hosts

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod api;

pub use systems::gravity_field;

use wasm_bindgen::prelude::*;

#[doc(hidden)]
pub use web_sys as __web_sys;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Gravity engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::GravityWorld;
pub use crate::core::math::{Quat, Vec3};
pub use domain::{BodyHandle, BodyState, GravityConfig};
pub use systems::gravity_field::{
    ForceAccumulator, GravityField, PhysicsBackend, StepStats, Transform,
};
