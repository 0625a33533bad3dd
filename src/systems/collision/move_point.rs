use crate::math::Vec2;

use super::intersect::intersect_line;
use super::perf::{bump, PERF_BOUNCES};
use super::types::TileQuery;

#[inline]
pub(super) fn sanitize_elasticity(elasticity: f32) -> f32 {
    if elasticity.is_nan() {
        0.0
    } else {
        elasticity.clamp(0.0, 1.0)
    }
}

/// Reflect one velocity component. Returns false for a zero component,
/// nothing bounces off a wall it is not moving towards.
#[inline]
pub(super) fn reflect(v: &mut f32, elasticity: f32) -> bool {
    if *v == 0.0 {
        return false;
    }
    *v *= -elasticity;
    true
}

/// Advance a point by one tick of velocity, bouncing off solid tiles.
///
/// When the path is blocked the point rests on the last free sample before
/// the wall and each blocked axis is reflected. Returns the bounce count.
pub fn move_point(q: &TileQuery, pos: &mut Vec2, vel: &mut Vec2, elasticity: f32) -> u32 {
    let v = *vel;
    let start = *pos;
    let speed = v.length();
    if !v.is_finite() || !start.is_finite() || !speed.is_finite() || speed <= q.settings.min_velocity {
        return 0;
    }

    let elasticity = sanitize_elasticity(elasticity);
    let end = start + v;
    let hit = intersect_line(q, start, end, true);
    if !hit.blocked {
        *pos = end;
        return 0;
    }

    let x_blocked = intersect_line(q, start, Vec2::new(end.x, start.y), true).blocked;
    let y_blocked = intersect_line(q, start, Vec2::new(start.x, end.y), true).blocked;

    let mut bounces = 0u32;
    if x_blocked && reflect(&mut vel.x, elasticity) {
        bounces += 1;
    }
    if y_blocked && reflect(&mut vel.y, elasticity) {
        bounces += 1;
    }

    // Neither axis alone is blocked: the path clips a tile corner
    if bounces == 0 {
        if reflect(&mut vel.x, elasticity) {
            bounces += 1;
        }
        if reflect(&mut vel.y, elasticity) {
            bounces += 1;
        }
    }

    *pos = hit.before;
    bump(&PERF_BOUNCES, bounces as u64);
    bounces
}
