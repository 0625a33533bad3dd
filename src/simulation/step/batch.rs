use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::math::Vec2;

use super::Collision;

/// Motion state of one entity for a batch step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionBody {
    pub pos: Vec2,
    pub vel: Vec2,
    /// `None` integrates as a point, `Some` as a box of that half extent
    pub half_extent: Option<Vec2>,
    pub elasticity: f32,
    /// Bounces from the last step
    #[serde(default)]
    pub bounces: u32,
}

impl MotionBody {
    pub fn point(pos: Vec2, vel: Vec2, elasticity: f32) -> Self {
        Self { pos, vel, half_extent: None, elasticity, bounces: 0 }
    }

    pub fn boxed(pos: Vec2, vel: Vec2, half_extent: Vec2, elasticity: f32) -> Self {
        Self { pos, vel, half_extent: Some(half_extent), elasticity, bounces: 0 }
    }
}

#[inline]
fn step_one(world: &Collision, body: &mut MotionBody) {
    body.bounces = match body.half_extent {
        Some(half) => world.move_box(&mut body.pos, &mut body.vel, half, body.elasticity),
        None => world.move_point(&mut body.pos, &mut body.vel, body.elasticity),
    };
}

/// Bodies only read the grid and doors, so each one can be stepped
/// independently of the others.
pub(super) fn step_bodies(world: &Collision, bodies: &mut [MotionBody]) {
    #[cfg(feature = "parallel")]
    {
        bodies.par_iter_mut().for_each(|body| step_one(world, body));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for body in bodies.iter_mut() {
            step_one(world, body);
        }
    }
}
