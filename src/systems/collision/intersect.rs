use crate::domain::tiles::COL_SOLID;
use crate::math::Vec2;

use super::perf::{bump, PERF_LINE_HITS, PERF_LINE_SAMPLES};
use super::types::{LineHit, TileQuery};

/// Walk `p0 -> p1` in fixed steps and stop at the first blocking cell.
///
/// The step count is `ceil(length / line_step)` (at least one), and both
/// endpoints are sampled, so a zero-length segment checks its single
/// point. Door tiles only block when `check_doors` is set and the door is
/// closed. Segments longer than the grid's reach are walked only up to
/// the reach, where every sample is already outside the map.
pub fn intersect_line(q: &TileQuery, p0: Vec2, p1: Vec2, check_doors: bool) -> LineHit {
    let distance = p0.distance(p1);
    if !p0.is_finite() || !p1.is_finite() || !distance.is_finite() {
        return LineHit {
            collision: p0,
            before: p0,
            blocked: true,
            flags: COL_SOLID,
        };
    }

    let reach = q.grid.reach(q.settings.tile_size);
    let (end, length) = if distance > reach {
        (p0.mix(p1, reach / distance), reach)
    } else {
        (p1, distance)
    };
    let steps = ((length / q.settings.line_step).ceil() as u64).max(1);

    let mut last = p0;
    for i in 0..=steps {
        let pos = p0.mix(end, i as f32 / steps as f32);
        let (cx, cy) = q.cell_of(pos.x, pos.y);
        if q.blocks_line(cx, cy, check_doors) {
            bump(&PERF_LINE_SAMPLES, i + 1);
            bump(&PERF_LINE_HITS, 1);
            return LineHit {
                collision: pos.round(),
                before: last,
                blocked: true,
                flags: q.grid.classify(cx, cy),
            };
        }
        last = pos;
    }

    bump(&PERF_LINE_SAMPLES, steps + 1);
    LineHit::clear(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::perf::take_collision_perf_counters;
    use super::super::test_support::Fixture;
    use crate::domain::tiles::{COL_DOOR, COL_NOHOOK};

    #[test]
    fn zero_length_segment_is_not_blocked() {
        let f = Fixture::new(&["...", "...", "..."]);
        let a = Vec2::new(48.0, 48.0);
        let hit = intersect_line(&f.query(), a, a, false);
        assert!(!hit.blocked);
        assert_eq!(hit.collision, a);
        assert_eq!(hit.before, a);
    }

    #[test]
    fn open_segment_reports_end_twice() {
        let f = Fixture::new(&["....", "...."]);
        let a = Vec2::new(10.0, 10.0);
        let b = Vec2::new(110.0, 50.0);
        let hit = intersect_line(&f.query(), a, b, false);
        assert_eq!(hit, LineHit::clear(b));
    }

    #[test]
    fn stops_at_first_wall_with_free_point_before() {
        let f = Fixture::new(&["..3."]);
        let q = f.query();
        let hit = intersect_line(&q, Vec2::new(10.0, 16.0), Vec2::new(120.0, 16.0), false);
        assert!(hit.blocked);
        assert_eq!(hit.flags, COL_SOLID | COL_NOHOOK);
        // first sample inside the wall column is x=64
        assert_eq!(q.cell_of(hit.collision.x, hit.collision.y), (2, 0));
        assert!(!q.is_solid(hit.before.x, hit.before.y));
        assert!(hit.collision.x - hit.before.x <= q.settings.line_step + 0.5);
    }

    #[test]
    fn segment_leaving_the_map_is_blocked() {
        let f = Fixture::new(&["..", ".."]);
        let hit = intersect_line(&f.query(), Vec2::new(32.0, 32.0), Vec2::new(32.0, 200.0), false);
        assert!(hit.blocked);
        assert_eq!(hit.flags, COL_SOLID);
        assert!(hit.before.y < 64.0);
    }

    #[test]
    fn very_long_segment_stops_at_the_border_in_bounded_samples() {
        let f = Fixture::new(&["...", "...", "..."]);
        let q = f.query();
        let _ = take_collision_perf_counters();

        let hit = intersect_line(&q, Vec2::new(48.0, 48.0), Vec2::new(1e30, 48.0), false);
        assert!(hit.blocked);
        assert_eq!(hit.flags, COL_SOLID);
        assert_eq!(q.cell_of(hit.before.x, hit.before.y), (2, 1));

        let (samples, hits, _) = take_collision_perf_counters();
        assert_eq!(hits, 1);
        assert!(samples as f32 <= q.grid.reach(q.settings.tile_size) / q.settings.line_step + 2.0);
    }

    #[test]
    fn overflowing_length_is_blocked_at_start() {
        let f = Fixture::new(&["..."]);
        let a = Vec2::new(-3e38, 0.0);
        let hit = intersect_line(&f.query(), a, Vec2::new(3e38, 0.0), false);
        assert!(hit.blocked);
        assert_eq!(hit.before, a);
    }

    #[test]
    fn doors_only_block_when_checked_and_closed() {
        let mut f = Fixture::new(&[".6."]);
        let a = Vec2::new(10.0, 16.0);
        let b = Vec2::new(85.0, 16.0);

        assert!(!intersect_line(&f.query(), a, b, false).blocked);
        let hit = intersect_line(&f.query(), a, b, true);
        assert!(hit.blocked);
        assert_eq!(hit.flags, COL_DOOR);

        f.doors.set_region(1, 0, 2, 1, true);
        assert!(!intersect_line(&f.query(), a, b, true).blocked);
    }

    #[test]
    fn same_geometry_gives_same_answer() {
        let f = Fixture::new(&["....", ".#..", "...."]);
        let a = Vec2::new(5.0, 5.0);
        let b = Vec2::new(100.0, 70.0);
        let first = intersect_line(&f.query(), a, b, false);
        for _ in 0..3 {
            assert_eq!(intersect_line(&f.query(), a, b, false), first);
        }
    }
}
