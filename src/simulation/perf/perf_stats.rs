use wasm_bindgen::prelude::*;

use crate::systems::collision::take_collision_perf_counters;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionPerf {
    pub(super) line_samples: u64,
    pub(super) line_hits: u64,
    pub(super) bounces: u64,
}

#[wasm_bindgen]
impl CollisionPerf {
    #[wasm_bindgen(getter)]
    pub fn line_samples(&self) -> f64 { self.line_samples as f64 }
    #[wasm_bindgen(getter)]
    pub fn line_hits(&self) -> f64 { self.line_hits as f64 }
    #[wasm_bindgen(getter)]
    pub fn bounces(&self) -> f64 { self.bounces as f64 }
}

impl CollisionPerf {
    pub fn samples(&self) -> u64 { self.line_samples }
    pub fn hits(&self) -> u64 { self.line_hits }
    pub fn bounce_count(&self) -> u64 { self.bounces }
}

pub(super) fn take() -> CollisionPerf {
    let (line_samples, line_hits, bounces) = take_collision_perf_counters();
    CollisionPerf { line_samples, line_hits, bounces }
}
