//! Teleporter index: channel -> exit positions
//!
//! Built by a single row-major scan of the grid. Channels are indexed
//! directly into a `Vec` that grows to the highest channel present.

use tracing::warn;

use crate::domain::tiles::{is_teleport_kind, TILE_TELEPORT_OUT};
use crate::math::Vec2;
use crate::spatial::grid::TileGrid;

/// Returned when a position has nowhere to teleport to
pub const NO_TELEPORT: Vec2 = Vec2::new(-1.0, -1.0);

#[derive(Clone, Debug, Default)]
struct Channel {
    exits: Vec<Vec2>,
    entries: u32,
}

#[derive(Clone, Debug, Default)]
pub struct TeleportIndex {
    channels: Vec<Channel>,
}

impl TeleportIndex {
    pub fn build(grid: &TileGrid, tile_size: f32) -> Self {
        let mut channels: Vec<Channel> = Vec::new();

        for (x, y, kind, number) in grid.cells() {
            if !is_teleport_kind(kind) {
                continue;
            }
            let ch = number as usize;
            if ch >= channels.len() {
                channels.resize_with(ch + 1, Channel::default);
            }
            if kind == TILE_TELEPORT_OUT {
                channels[ch].exits.push(Vec2::new(
                    (x as f32 + 0.5) * tile_size,
                    (y as f32 + 0.5) * tile_size,
                ));
            } else {
                channels[ch].entries += 1;
            }
        }

        for (ch, c) in channels.iter().enumerate() {
            if c.entries > 0 && c.exits.is_empty() {
                warn!(channel = ch, entries = c.entries, "teleporter channel has no exit");
            }
        }

        Self { channels }
    }

    /// All exits of a channel in scan order, empty for unknown channels
    pub fn destinations(&self, channel: u8) -> &[Vec2] {
        self.channels
            .get(channel as usize)
            .map(|c| c.exits.as_slice())
            .unwrap_or(&[])
    }

    /// A single exit, `pick` wraps around the channel's exit list
    pub fn destination(&self, channel: u8, pick: usize) -> Vec2 {
        let exits = self.destinations(channel);
        if exits.is_empty() {
            NO_TELEPORT
        } else {
            exits[pick % exits.len()]
        }
    }

    pub fn entry_count(&self, channel: u8) -> u32 {
        self.channels.get(channel as usize).map_or(0, |c| c.entries)
    }

    /// Number of channels with at least one exit
    pub fn channel_count(&self) -> usize {
        self.channels.iter().filter(|c| !c.exits.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layer::{LayerTile, TileLayer};
    use crate::domain::tiles::TILE_TELEPORT_IN;

    fn index_for(layer: &TileLayer) -> TeleportIndex {
        let grid = TileGrid::from_layer(layer).unwrap();
        TeleportIndex::build(&grid, 32.0)
    }

    #[test]
    fn exits_are_tile_centres_in_scan_order() {
        let mut layer = TileLayer::new(4, 3);
        layer.set(3, 0, LayerTile::teleport(TILE_TELEPORT_OUT, 2));
        layer.set(1, 2, LayerTile::teleport(TILE_TELEPORT_OUT, 2));
        layer.set(0, 1, LayerTile::teleport(TILE_TELEPORT_IN, 2));

        let idx = index_for(&layer);
        assert_eq!(
            idx.destinations(2),
            &[Vec2::new(112.0, 16.0), Vec2::new(48.0, 80.0)]
        );
        assert_eq!(idx.entry_count(2), 1);
        assert_eq!(idx.channel_count(), 1);
    }

    #[test]
    fn unknown_channel_is_empty() {
        let idx = index_for(&TileLayer::new(2, 2));
        assert!(idx.destinations(0).is_empty());
        assert!(idx.destinations(255).is_empty());
        assert_eq!(idx.destination(9, 0), NO_TELEPORT);
    }

    #[test]
    fn pick_wraps_around() {
        let mut layer = TileLayer::new(2, 1);
        layer.set(0, 0, LayerTile::teleport(TILE_TELEPORT_OUT, 0));
        layer.set(1, 0, LayerTile::teleport(TILE_TELEPORT_OUT, 0));

        let idx = index_for(&layer);
        assert_eq!(idx.destination(0, 3), Vec2::new(48.0, 16.0));
    }
}
