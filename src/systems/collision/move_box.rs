use crate::math::Vec2;

use super::move_point::{reflect, sanitize_elasticity};
use super::perf::{bump, PERF_BOUNCES};
use super::types::TileQuery;

/// True if the rectangle `pos ± half_extent` touches any solid cell.
///
/// Every covered cell is checked, so boxes wider than a tile cannot
/// straddle a solid tile between their corners.
pub fn test_box(q: &TileQuery, pos: Vec2, half_extent: Vec2) -> bool {
    let hx = half_extent.x.abs();
    let hy = half_extent.y.abs();
    let (x0, y0) = q.cell_of(pos.x - hx, pos.y - hy);
    let (x1, y1) = q.cell_of(pos.x + hx, pos.y + hy);

    // A corner outside the grid touches the solid border
    if !q.grid.in_bounds(x0, y0) || !q.grid.in_bounds(x1, y1) {
        return true;
    }

    for cy in y0..=y1 {
        for cx in x0..=x1 {
            if q.is_cell_solid(cx, cy) {
                return true;
            }
        }
    }
    false
}

/// Advance a box by one tick of velocity with per-axis sweeps.
///
/// Motion is split into `floor(|vel|) + 1` sub-steps. A blocked sub-step
/// keeps the old coordinate on each blocked axis and reflects that axis,
/// so a box pushed diagonally into a wall slides along it. Travel in one
/// call is capped at the grid's reach, which keeps the sub-step count
/// bounded by the map size. Returns the bounce count.
pub fn move_box(q: &TileQuery, pos: &mut Vec2, vel: &mut Vec2, half_extent: Vec2, elasticity: f32) -> u32 {
    let mut p = *pos;
    let mut v = *vel;
    if !p.is_finite() || !v.is_finite() {
        return 0;
    }

    let distance = v.length();
    if !distance.is_finite() || distance <= q.settings.min_velocity {
        return 0;
    }

    let elasticity = sanitize_elasticity(elasticity);
    let travel = distance.min(q.grid.reach(q.settings.tile_size));
    let max = travel as u64;
    let fraction = travel / distance / (max + 1) as f32;
    let mut bounces = 0u32;

    for _ in 0..=max {
        let mut next = p + v * fraction;

        if test_box(q, next, half_extent) {
            let mut hits = 0;

            if test_box(q, Vec2::new(p.x, next.y), half_extent) {
                next.y = p.y;
                if reflect(&mut v.y, elasticity) {
                    bounces += 1;
                }
                hits += 1;
            }

            if test_box(q, Vec2::new(next.x, p.y), half_extent) {
                next.x = p.x;
                if reflect(&mut v.x, elasticity) {
                    bounces += 1;
                }
                hits += 1;
            }

            // Neither axis alone collides: diagonal corner
            if hits == 0 {
                next = p;
                if reflect(&mut v.x, elasticity) {
                    bounces += 1;
                }
                if reflect(&mut v.y, elasticity) {
                    bounces += 1;
                }
            }
        }

        p = next;
    }

    *pos = p;
    *vel = v;
    bump(&PERF_BOUNCES, bounces as u64);
    bounces
}
