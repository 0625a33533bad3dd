use crate::domain::layer::TileLayer;
use crate::domain::settings::CollisionSettings;
use crate::spatial::doors::DoorRegistry;
use crate::spatial::grid::TileGrid;

use super::types::TileQuery;

/// Owned grid + doors for exercising the collision functions directly
pub(crate) struct Fixture {
    pub grid: TileGrid,
    pub doors: DoorRegistry,
    pub settings: CollisionSettings,
}

impl Fixture {
    pub fn new(rows: &[&str]) -> Self {
        let layer = TileLayer::from_rows(rows).expect("fixture rows should form a valid layer");
        let grid = TileGrid::from_layer(&layer).expect("fixture layer should load");
        let doors = DoorRegistry::new(grid.width(), grid.height());
        Self {
            grid,
            doors,
            settings: CollisionSettings::default(),
        }
    }

    pub fn query(&self) -> TileQuery<'_> {
        TileQuery {
            grid: &self.grid,
            doors: &self.doors,
            settings: &self.settings,
        }
    }
}
