use crate::domain::settings::CollisionSettings;

use super::Collision;

fn apply(world: &mut Collision, next: CollisionSettings) -> Result<(), String> {
    next.validate()?;
    world.settings = next;
    Ok(())
}

pub(super) fn set_line_step(world: &mut Collision, step: f32) -> Result<(), String> {
    apply(world, CollisionSettings { line_step: step, ..world.settings })
}

pub(super) fn set_min_velocity(world: &mut Collision, v: f32) -> Result<(), String> {
    apply(world, CollisionSettings { min_velocity: v, ..world.settings })
}
