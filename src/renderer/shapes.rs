//! Triangle-list generation for scene primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{AircraftView, BuildingView, ParticleView};

/// Segments per cloud puff
const CLOUD_SEGMENTS: usize = 12;
/// Window grid per building face
const WINDOW_COLUMNS: usize = 5;
const WINDOW_ROWS: usize = 10;
const WINDOW_GAP: f32 = 0.01;
const ANTENNA_WIDTH: f32 = 0.005;
/// Half the side of a particle quad
const PARTICLE_HALF: f32 = 0.004;

/// Axis-aligned rectangle from its lower-left corner
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;
    out.extend_from_slice(&[
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]);
}

/// Convex polygon as a fan around its first point
pub fn fan(out: &mut Vec<Vertex>, points: &[Vec2], color: [f32; 4]) {
    for pair in points[1..].windows(2) {
        out.push(Vertex::at(points[0], color));
        out.push(Vertex::at(pair[0], color));
        out.push(Vertex::at(pair[1], color));
    }
}

/// Ground band below the buildings, fading from sky at the bottom edge to
/// grass at the building line
pub fn ground(out: &mut Vec<Vertex>) {
    let (bottom, top) = (-1.0, GROUND_Y);
    out.extend_from_slice(&[
        Vertex::new(-1.0, bottom, colors::SKY),
        Vertex::new(1.0, bottom, colors::SKY),
        Vertex::new(1.0, top, colors::GRASS),
        Vertex::new(-1.0, bottom, colors::SKY),
        Vertex::new(1.0, top, colors::GRASS),
        Vertex::new(-1.0, top, colors::GRASS),
    ]);
}

/// Three overlapping flattened puffs
pub fn cloud(out: &mut Vec<Vertex>, pos: Vec2) {
    for puff in 0..3 {
        let center = pos + Vec2::new(puff as f32 * CLOUD_SIZE * 0.5, 0.0);
        for i in 0..CLOUD_SEGMENTS {
            let a0 = i as f32 / CLOUD_SEGMENTS as f32 * TAU;
            let a1 = (i + 1) as f32 / CLOUD_SEGMENTS as f32 * TAU;
            let p0 = center + Vec2::new(a0.cos() * CLOUD_SIZE, a0.sin() * CLOUD_SIZE * 0.5);
            let p1 = center + Vec2::new(a1.cos() * CLOUD_SIZE, a1.sin() * CLOUD_SIZE * 0.5);
            out.push(Vertex::at(center, colors::CLOUD));
            out.push(Vertex::at(p0, colors::CLOUD));
            out.push(Vertex::at(p1, colors::CLOUD));
        }
    }
}

/// Trunk plus a triangular crown
pub fn tree(out: &mut Vec<Vertex>, base: Vec2) {
    rect(
        out,
        base + Vec2::new(TREE_WIDTH / 4.0, 0.0),
        Vec2::new(TREE_WIDTH / 2.0, TREE_HEIGHT / 3.0),
        colors::TRUNK,
    );
    out.extend_from_slice(&[
        Vertex::at(base + Vec2::new(0.0, TREE_HEIGHT / 3.0), colors::FOLIAGE),
        Vertex::at(base + Vec2::new(TREE_WIDTH / 2.0, TREE_HEIGHT), colors::FOLIAGE),
        Vertex::at(base + Vec2::new(TREE_WIDTH, TREE_HEIGHT / 3.0), colors::FOLIAGE),
    ]);
}

/// Building body with a window grid and optional rooftop antenna
pub fn building(out: &mut Vec<Vertex>, view: &BuildingView) {
    let base = Vec2::new(view.x, GROUND_Y);
    rect(out, base, Vec2::new(BUILDING_WIDTH, view.height), colors::BUILDING);

    let cell = Vec2::new(
        BUILDING_WIDTH / WINDOW_COLUMNS as f32,
        view.height / WINDOW_ROWS as f32,
    );
    let pane = cell - Vec2::splat(WINDOW_GAP);
    if pane.x > 0.0 && pane.y > 0.0 {
        for col in 0..WINDOW_COLUMNS {
            for row in 0..WINDOW_ROWS {
                let min = base + cell * Vec2::new(col as f32, row as f32);
                rect(out, min, pane, colors::WINDOW);
            }
        }
    }

    if view.antenna {
        let foot = Vec2::new(view.x + BUILDING_WIDTH / 2.0 - ANTENNA_WIDTH / 2.0, view.roof_y);
        rect(out, foot, Vec2::new(ANTENNA_WIDTH, ANTENNA_HEIGHT), colors::ANTENNA);
    }
}

/// Aircraft outline at `PLANE_SCALE`, nose pointing +x. Hidden once crashed.
pub fn aircraft(out: &mut Vec<Vertex>, view: &AircraftView) {
    if !view.visible {
        return;
    }
    let at = |x: f32, y: f32| view.pos + Vec2::new(x, y) * PLANE_SCALE;

    let body = [at(0.0, 0.0), at(0.5, 0.05), at(0.6, 0.0), at(0.5, -0.05)];
    fan(out, &body, colors::FUSELAGE);

    for sign in [1.0, -1.0] {
        out.extend_from_slice(&[
            Vertex::at(at(0.2, 0.0), colors::WING),
            Vertex::at(at(0.35, 0.15 * sign), colors::WING),
            Vertex::at(at(0.4, 0.0), colors::WING),
            Vertex::at(at(0.45, 0.0), colors::WING),
            Vertex::at(at(0.55, 0.1 * sign), colors::WING),
            Vertex::at(at(0.55, 0.0), colors::WING),
        ]);
    }

    for x in [0.1, 0.2, 0.3] {
        rect(out, at(x, -0.02), Vec2::new(0.05, 0.02) * PLANE_SCALE, colors::PORTHOLE);
    }
}

/// Small square faded by remaining lifetime
pub fn particle(out: &mut Vec<Vertex>, view: &ParticleView) {
    let [r, g, b] = colors::BLAST;
    rect(
        out,
        view.pos - Vec2::splat(PARTICLE_HALF),
        Vec2::splat(PARTICLE_HALF * 2.0),
        [r, g, b, view.alpha],
    );
}
