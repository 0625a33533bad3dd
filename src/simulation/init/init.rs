use tracing::debug;

use crate::domain::layer::TileLayer;
use crate::domain::settings::CollisionSettings;
use crate::domain::tiles::{COL_DOOR, COL_SOLID};
use crate::spatial::doors::DoorRegistry;
use crate::spatial::grid::TileGrid;
use crate::spatial::teleports::TeleportIndex;

use super::Collision;

pub(super) fn create_collision(layer: &TileLayer, settings: CollisionSettings) -> Result<Collision, String> {
    settings.validate()?;

    let grid = TileGrid::from_layer(layer)?;
    let teleports = TeleportIndex::build(&grid, settings.tile_size);
    let doors = DoorRegistry::new(grid.width(), grid.height());

    debug!(
        width = grid.width(),
        height = grid.height(),
        solid_tiles = grid.count_with_flag(COL_SOLID),
        door_tiles = grid.count_with_flag(COL_DOOR),
        teleport_channels = teleports.channel_count(),
        tile_size = settings.tile_size,
        "collision map loaded"
    );

    Ok(Collision {
        grid,
        teleports,
        doors,
        settings,
    })
}
