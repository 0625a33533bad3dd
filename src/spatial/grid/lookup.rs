use crate::domain::tiles::{COL_SOLID, TILE_SOLID};

use super::*;

impl TileGrid {
    /// Flags of a cell. Outside the grid everything is solid so nothing
    /// can leave the map through a boundary query.
    #[inline]
    pub fn classify(&self, x: i32, y: i32) -> TileFlags {
        match self.checked_index(x, y) {
            Some(idx) => self.flags[idx],
            None => COL_SOLID,
        }
    }

    #[inline]
    pub fn tile_kind(&self, x: i32, y: i32) -> TileKind {
        match self.checked_index(x, y) {
            Some(idx) => self.kinds[idx],
            None => TILE_SOLID,
        }
    }

    #[inline]
    pub fn teleport_number(&self, x: i32, y: i32) -> u8 {
        self.checked_index(x, y).map_or(0, |idx| self.numbers[idx])
    }

    /// Row-major iteration over `(x, y, kind, number)`
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, TileKind, u8)> + '_ {
        self.kinds
            .iter()
            .zip(self.numbers.iter())
            .enumerate()
            .map(move |(idx, (&kind, &number))| {
                let (x, y) = self.coords(idx);
                (x, y, kind, number)
            })
    }
}
