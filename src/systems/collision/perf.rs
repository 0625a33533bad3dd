use std::cell::Cell;

// Counters are per thread; batch steps on rayon workers are not folded in.
thread_local! {
    pub static PERF_LINE_SAMPLES: Cell<u64> = const { Cell::new(0) };
    pub static PERF_LINE_HITS: Cell<u64> = const { Cell::new(0) };
    pub static PERF_BOUNCES: Cell<u64> = const { Cell::new(0) };
}

#[inline]
pub(super) fn bump(counter: &'static std::thread::LocalKey<Cell<u64>>, n: u64) {
    counter.with(|c| c.set(c.get().saturating_add(n)));
}

/// (line samples, line hits, bounces) since the last take
pub fn take_collision_perf_counters() -> (u64, u64, u64) {
    let samples = PERF_LINE_SAMPLES.with(|c| c.replace(0));
    let hits = PERF_LINE_HITS.with(|c| c.replace(0));
    let bounces = PERF_BOUNCES.with(|c| c.replace(0));
    (samples, hits, bounces)
}
