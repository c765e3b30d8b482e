use gravity_engine::{BodyState, ForceAccumulator, GravityField, Vec3};

#[test]
fn perf_smoke_step() {
    let mut field = GravityField::new();
    field.enable_perf_metrics(true);
    for i in 0..256 {
        let f = i as f32;
        field.register(BodyState::new(Some(1.0 + (i % 7) as f32), Vec3::new(f.sin() * 50.0, f * 0.5, f.cos() * 50.0)));
    }
    let mut sink = ForceAccumulator::new();
    let stats = field.step(0.0, 1.0 / 60.0, &mut sink);
    assert!(stats.recomputed());
    assert_eq!(stats.pairs_evaluated(), 256 * 255);
    assert_eq!(stats.forces_applied(), 256);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.recompute_ms() >= 0.0);
}
