//! TileGrid - Structure of Arrays tile storage
//!
//! Built once from a decoded layer and never mutated afterwards. Kinds,
//! flags and teleporter numbers live in parallel row-major arrays so a
//! classification is a single index into `flags`.

use crate::domain::layer::TileLayer;
use crate::domain::tiles::{flags_for_kind, TileFlags, TileKind};

mod indexing;
mod lookup;

pub struct TileGrid {
    width: u32,
    height: u32,

    kinds: Vec<TileKind>,   // raw tile index as loaded
    flags: Vec<TileFlags>,  // collision flags folded from kind
    numbers: Vec<u8>,       // teleporter channel (0 for other tiles)
}

impl TileGrid {
    pub fn from_layer(layer: &TileLayer) -> Result<Self, String> {
        layer.validate()?;

        let size = layer.tiles.len();
        let mut kinds = Vec::with_capacity(size);
        let mut flags = Vec::with_capacity(size);
        let mut numbers = Vec::with_capacity(size);

        for tile in layer.tiles.iter() {
            kinds.push(tile.index);
            flags.push(flags_for_kind(tile.index));
            numbers.push(tile.number);
        }

        Ok(Self {
            width: layer.width,
            height: layer.height,
            kinds,
            flags,
            numbers,
        })
    }

    /// Number of cells carrying every bit of `flag`
    pub fn count_with_flag(&self, flag: TileFlags) -> usize {
        self.flags.iter().filter(|&&f| f & flag == flag).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tiles::{COL_DOOR, COL_NOHOOK, COL_SOLID, TILE_DEATH, TILE_SOLID};

    fn grid(rows: &[&str]) -> TileGrid {
        TileGrid::from_layer(&TileLayer::from_rows(rows).unwrap()).unwrap()
    }

    #[test]
    fn classify_is_stable_across_calls() {
        let g = grid(&["#.2", "3.6"]);
        for y in 0..2 {
            for x in 0..3 {
                let first = g.classify(x, y);
                for _ in 0..4 {
                    assert_eq!(g.classify(x, y), first);
                }
            }
        }
    }

    #[test]
    fn out_of_grid_is_solid() {
        let g = grid(&["..", ".."]);
        assert_eq!(g.classify(-1, 0), COL_SOLID);
        assert_eq!(g.classify(0, -1), COL_SOLID);
        assert_eq!(g.classify(2, 0), COL_SOLID);
        assert_eq!(g.classify(0, 2), COL_SOLID);
        assert_eq!(g.tile_kind(5, 5), TILE_SOLID);
    }

    #[test]
    fn kinds_and_flags_line_up() {
        let g = grid(&["#.2", "3.6"]);
        assert_eq!(g.tile_kind(2, 0), TILE_DEATH);
        assert_eq!(g.classify(0, 1), COL_SOLID | COL_NOHOOK);
        assert_eq!(g.classify(2, 1), COL_DOOR);
        assert_eq!(g.count_with_flag(COL_SOLID), 2);
    }

    #[test]
    fn slots_are_row_major() {
        let g = grid(&["...", "..."]);
        assert_eq!(g.checked_index(2, 1), Some(5));
        assert_eq!(g.checked_index(3, 0), None);
        assert_eq!(g.checked_index(0, -1), None);
        let last = g.cells().last().map(|(x, y, _, _)| (x, y));
        assert_eq!(last, Some((2, 1)));
        assert_eq!(g.reach(32.0), 192.0);
    }

    #[test]
    fn rejects_invalid_layer() {
        let layer = TileLayer { width: 3, height: 3, tiles: Vec::new() };
        assert!(TileGrid::from_layer(&layer).is_err());
    }
}
