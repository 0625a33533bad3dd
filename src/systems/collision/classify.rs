use crate::domain::tiles::{has_flag, TileFlags, TileKind, COL_DOOR, COL_SOLID};
use crate::spatial::doors::DoorState;

use super::types::TileQuery;

/// World coordinate to cell: snap to the nearest unit, then floor-divide.
/// Non-finite input lands far outside any grid.
#[inline]
fn to_cell(v: f32, tile_size: f32) -> i32 {
    if !v.is_finite() {
        return i32::MIN;
    }
    (v.round() / tile_size).floor() as i32
}

impl<'a> TileQuery<'a> {
    #[inline]
    pub fn cell_of(&self, x: f32, y: f32) -> (i32, i32) {
        let ts = self.settings.tile_size;
        (to_cell(x, ts), to_cell(y, ts))
    }

    /// Solid for motion: static solid tiles plus doors that are closed
    #[inline]
    pub fn is_cell_solid(&self, cx: i32, cy: i32) -> bool {
        let flags = self.grid.classify(cx, cy);
        has_flag(flags, COL_SOLID) || (has_flag(flags, COL_DOOR) && !self.doors.is_open(cx, cy))
    }

    /// Line sampling only honours door state when asked to
    #[inline]
    pub(super) fn blocks_line(&self, cx: i32, cy: i32, check_doors: bool) -> bool {
        let flags = self.grid.classify(cx, cy);
        if has_flag(flags, COL_SOLID) {
            return true;
        }
        check_doors && has_flag(flags, COL_DOOR) && !self.doors.is_open(cx, cy)
    }

    #[inline]
    pub fn is_solid(&self, x: f32, y: f32) -> bool {
        let (cx, cy) = self.cell_of(x, y);
        self.is_cell_solid(cx, cy)
    }

    #[inline]
    pub fn collision_flags(&self, x: f32, y: f32) -> TileFlags {
        let (cx, cy) = self.cell_of(x, y);
        self.grid.classify(cx, cy)
    }

    #[inline]
    pub fn tile_kind_at(&self, x: f32, y: f32) -> TileKind {
        let (cx, cy) = self.cell_of(x, y);
        self.grid.tile_kind(cx, cy)
    }

    #[inline]
    pub fn is_door_open(&self, cx: i32, cy: i32) -> bool {
        self.doors.is_open(cx, cy)
    }

    pub fn door_state(&self, x: f32, y: f32) -> DoorState {
        let (cx, cy) = self.cell_of(x, y);
        if !has_flag(self.grid.classify(cx, cy), COL_DOOR) {
            DoorState::NotDoor
        } else if self.doors.is_open(cx, cy) {
            DoorState::Open
        } else {
            DoorState::Closed
        }
    }
}
