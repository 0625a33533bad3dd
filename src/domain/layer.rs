use serde::{Deserialize, Serialize};

use super::tiles::{TileKind, TILE_AIR};

/// One cell of the decoded game layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerTile {
    pub index: TileKind,
    /// Teleporter channel for teleporter tiles, 0 otherwise
    #[serde(default)]
    pub number: u8,
}

impl LayerTile {
    pub const fn new(index: TileKind) -> Self {
        Self { index, number: 0 }
    }

    pub const fn teleport(index: TileKind, channel: u8) -> Self {
        Self { index, number: channel }
    }
}

/// Decoded game layer, row-major
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileLayer {
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<LayerTile>,
}

impl TileLayer {
    /// Empty (all air) layer
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            tiles: vec![LayerTile::new(TILE_AIR); size],
        }
    }

    /// Build a layer from raw indices, one row per string slice element.
    /// Used by map tooling and tests: `'#'` solid, `'.'` air, digits are raw indices.
    pub fn from_rows(rows: &[&str]) -> Result<Self, String> {
        let height = rows.len() as u32;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u32;
        let mut tiles = Vec::with_capacity((width * height) as usize);

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as u32 != width {
                return Err(format!("row {} has {} columns, expected {}", y, row.chars().count(), width));
            }
            for ch in row.chars() {
                let index = match ch {
                    '.' => TILE_AIR,
                    '#' => super::tiles::TILE_SOLID,
                    c => c
                        .to_digit(10)
                        .map(|d| d as TileKind)
                        .ok_or_else(|| format!("unknown tile glyph '{}' in row {}", c, y))?,
                };
                tiles.push(LayerTile::new(index));
            }
        }

        let layer = Self { width, height, tiles };
        layer.validate()?;
        Ok(layer)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let layer: TileLayer = serde_json::from_str(json).map_err(|e| e.to_string())?;
        layer.validate()?;
        Ok(layer)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("layer has empty dimensions: {}x{}", self.width, self.height));
        }
        let expected = (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(|| format!("layer dimensions overflow: {}x{}", self.width, self.height))?;
        if self.tiles.len() != expected {
            return Err(format!(
                "layer has {} tiles, expected {} for {}x{}",
                self.tiles.len(),
                expected,
                self.width,
                self.height
            ));
        }
        Ok(())
    }

    pub fn set(&mut self, x: u32, y: u32, tile: LayerTile) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) as usize;
            self.tiles[idx] = tile;
        }
    }
}
