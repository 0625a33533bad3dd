use crate::domain::settings::CollisionSettings;
use crate::domain::tiles::{TileFlags, COL_NONE};
use crate::math::Vec2;
use crate::spatial::doors::DoorRegistry;
use crate::spatial::grid::TileGrid;

/// Read-only view of everything a collision query needs
#[derive(Clone, Copy)]
pub struct TileQuery<'a> {
    pub grid: &'a TileGrid,
    pub doors: &'a DoorRegistry,
    pub settings: &'a CollisionSettings,
}

/// Result of a line intersection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineHit {
    /// First blocked sample snapped to whole units, or the segment end
    pub collision: Vec2,
    /// Last free sample before `collision`, or the segment end
    pub before: Vec2,
    pub blocked: bool,
    /// Flags of the blocking cell (`COL_NONE` when not blocked)
    pub flags: TileFlags,
}

impl LineHit {
    #[inline]
    pub fn clear(end: Vec2) -> Self {
        Self {
            collision: end,
            before: end,
            blocked: false,
            flags: COL_NONE,
        }
    }
}
