//! Impact detection between an aircraft and its building
//!
//! The only collision rule in the scene: an aircraft hits once its nose
//! reaches the building's x.

use glam::Vec2;

use super::state::Lane;

/// True once the nose (`aircraft_x + nose_offset`) is at or past `building_x`
#[inline]
pub fn has_reached(aircraft_x: f32, nose_offset: f32, building_x: f32) -> bool {
    aircraft_x + nose_offset >= building_x
}

/// Resolve a lane's impact for this frame
///
/// On the first frame the aircraft has reached its building, marks the
/// aircraft crashed and the building collapsed, and returns the blast origin
/// (building x, aircraft y). Returns `None` if the aircraft has not arrived or
/// already crashed.
pub fn resolve_impact(lane: &mut Lane, nose_offset: f32) -> Option<Vec2> {
    if lane.aircraft.crashed {
        return None;
    }
    if !has_reached(lane.aircraft.pos.x, nose_offset, lane.building.x) {
        return None;
    }

    lane.aircraft.crashed = true;
    lane.building.collapsed = true;
    Some(Vec2::new(lane.building.x, lane.aircraft.pos.y))
}
