use tracing::debug;

use super::Collision;

pub(super) fn set_door(world: &mut Collision, start_x: i32, start_y: i32, end_x: i32, end_y: i32, open: bool) -> u32 {
    let changed = world.doors.set_region(start_x, start_y, end_x, end_y, open);
    if changed > 0 {
        debug!(start_x, start_y, end_x, end_y, open, changed, "door region toggled");
    }
    changed
}

pub(super) fn reset_doors(world: &mut Collision) {
    world.doors.reset();
}
