//! Building collapse
//!
//! A collapsed building loses height at a constant rate until it is at or
//! under the floor. The check happens before the decrement, so the final
//! step can undershoot the floor by up to one frame's worth of collapse.

use super::state::Building;

/// Shrink a collapsed building by `rate * dt`, stopping once at or under `min_height`
pub fn advance(building: &mut Building, dt: f32, rate: f32, min_height: f32) {
    if building.collapsed && building.height > min_height {
        building.height -= rate * dt;
    }
    debug_assert!(building.height >= 0.0, "building height went negative");
}
