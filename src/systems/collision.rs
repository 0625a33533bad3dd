//! Collision queries and motion resolution against the tile grid
//!
//! Everything here is a pure function of a `TileQuery` view. Points are
//! classified by rounding to the nearest world unit first, and the line
//! sampler and both integrators go through that same classification.

mod classify;
mod intersect;
mod move_box;
mod move_point;
mod perf;
mod types;

#[cfg(test)]
mod test_support;

pub use intersect::intersect_line;
pub use move_box::{move_box, test_box};
pub use move_point::move_point;
pub use perf::take_collision_perf_counters;
pub use types::{LineHit, TileQuery};
