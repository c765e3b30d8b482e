//! Pairwise gravity sum (brute force, O(n²)).
//!
//! Each receiver's total is accumulated sequentially over the sources in
//! slot order, so results are bit-identical between runs and between the
//! serial and parallel paths.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::Vec3;

use super::registry::{BodyRegistry, Slot};

/// Snapshot of one body acting as a gravity source
#[derive(Clone, Copy)]
pub(super) struct Source {
    slot: usize,
    position: Vec3,
    mass: f32,
}

/// Every active, gravity-enabled body in slot order
pub(super) fn collect_sources(registry: &BodyRegistry) -> Vec<Source> {
    registry
        .slots()
        .iter()
        .enumerate()
        .filter_map(|(slot, s)| {
            let body = s.body.as_ref()?;
            if !body.use_gravity {
                return None;
            }
            Some(Source {
                slot,
                position: body.position,
                mass: body.mass()?,
            })
        })
        .collect()
}

/// Softened attraction of all `sources` on a receiver at `position`,
/// skipping the receiver's own slot.
#[inline]
pub(super) fn field_at(slot: usize, position: Vec3, sources: &[Source], mass_multiplier: f32) -> Vec3 {
    let mut gravity = Vec3::zero();
    for src in sources {
        if src.slot == slot {
            continue;
        }
        let dir = src.position - position;
        // 1 + r² keeps the force finite at zero separation.
        let magnitude = src.mass * mass_multiplier / (1.0 + dir.length_squared());
        gravity += dir.normalize() * magnitude;
    }
    gravity
}

fn update_slot(slot: usize, s: &mut Slot, sources: &[Source], mass_multiplier: f32) -> u32 {
    let Some(body) = s.body.as_mut() else {
        return 0;
    };
    if !body.participates() {
        body.gravity_velocity = Vec3::zero();
        return 0;
    }
    body.gravity_velocity = field_at(slot, body.position, sources, mass_multiplier);
    // Every source except the receiver itself.
    sources.len().saturating_sub(1) as u32
}

/// Recompute every body's cached gravity. Returns pairs evaluated.
pub(super) fn recompute(registry: &mut BodyRegistry, mass_multiplier: f32) -> u32 {
    let sources = collect_sources(registry);

    // Each worker writes only the slot it owns; sources are a read-only snapshot.
    #[cfg(feature = "parallel")]
    let slots = registry.slots_mut().par_iter_mut();
    #[cfg(not(feature = "parallel"))]
    let slots = registry.slots_mut().iter_mut();

    slots
        .enumerate()
        .map(|(slot, s)| update_slot(slot, s, &sources, mass_multiplier))
        .sum()
}
