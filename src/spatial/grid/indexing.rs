use super::*;

impl TileGrid {
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    /// Cell of a row-major slot, used when scanning the tile arrays
    #[inline]
    pub(super) fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx % w) as u32, (idx / w) as u32)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Row-major slot of an in-grid cell, `None` outside
    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Farthest a path can run from an in-grid point before it must have
    /// left the map, in world units
    #[inline]
    pub fn reach(&self, tile_size: f32) -> f32 {
        (self.width as f32 + self.height as f32 + 1.0) * tile_size
    }
}
