#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use gravity_engine::GravityWorld;

#[wasm_bindgen_test]
fn wasm_world_steps_and_logs() {
    gravity_engine::init();
    let mut world = GravityWorld::new();
    let a = world.register(Some(1.0), 0.0, 0.0, 0.0);
    world.register(Some(1.0), 10.0, 0.0, 0.0);
    world.step(0.0, 1.0);
    assert!(world.force_x(a) > 9.0);
}
