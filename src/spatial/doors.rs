//! Door registry - per-cell open/closed overrides
//!
//! Doors are addressed by rectangles of tile coordinates, never by id.
//! Each write stamps its state onto every cell of the rectangle, so when
//! two regions overlap the most recent write owns the shared cells.

use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorState {
    /// The cell is not a door tile
    NotDoor,
    Closed,
    Open,
}

/// Half-open rectangle of cells, `[x0, x1) x [y0, y1)`, already clamped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl CellRect {
    /// Normalise corners and clamp to a `width x height` grid.
    /// Returns `None` when nothing of the rectangle lies inside the grid.
    pub fn clamped(start_x: i32, start_y: i32, end_x: i32, end_y: i32, width: u32, height: u32) -> Option<Self> {
        let clamp = |v: i32, max: u32| v.clamp(0, max as i32) as u32;
        let x0 = clamp(start_x.min(end_x), width);
        let x1 = clamp(start_x.max(end_x), width);
        let y0 = clamp(start_y.min(end_y), height);
        let y1 = clamp(start_y.max(end_y), height);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Self { x0, y0, x1, y1 })
    }

    pub fn area(&self) -> u32 {
        (self.x1 - self.x0) * (self.y1 - self.y0)
    }
}

pub struct DoorRegistry {
    width: u32,
    height: u32,
    open: Vec<bool>,
}

impl DoorRegistry {
    /// All doors start closed
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            open: vec![false; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.open[(y as u32 * self.width + x as u32) as usize]
    }

    /// Stamp `open` onto the rectangle. Returns how many cells changed,
    /// so rewriting a region with its current state reports 0.
    pub fn set_region(&mut self, start_x: i32, start_y: i32, end_x: i32, end_y: i32, open: bool) -> u32 {
        let Some(rect) = CellRect::clamped(start_x, start_y, end_x, end_y, self.width, self.height) else {
            return 0;
        };

        let mut changed = 0u32;
        for y in rect.y0..rect.y1 {
            let row = (y * self.width) as usize;
            for x in rect.x0..rect.x1 {
                let cell = &mut self.open[row + x as usize];
                if *cell != open {
                    *cell = open;
                    changed += 1;
                }
            }
        }

        trace!(
            x0 = rect.x0,
            y0 = rect.y0,
            x1 = rect.x1,
            y1 = rect.y1,
            open,
            changed,
            "door region written"
        );
        changed
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    /// Close every door again (map restart)
    pub fn reset(&mut self) {
        self.open.fill(false);
    }
}
