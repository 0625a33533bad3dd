//! Collision - the per-map engine context
//!
//! One instance is built when a map loads and dropped when it unloads.
//! It owns the frozen tile grid and teleporter index plus the mutable
//! door registry. Queries borrow `&self`; door writes and settings need
//! `&mut self`, so doors can only change between ticks.
//!
//! The heavy lifting lives in systems/collision, this type only wires
//! the pieces together.

use crate::domain::layer::TileLayer;
use crate::domain::settings::CollisionSettings;
use crate::domain::tiles::{TileFlags, TileKind, TILE_TELEPORT_IN};
use crate::math::Vec2;
use crate::spatial::doors::{DoorRegistry, DoorState};
use crate::spatial::grid::TileGrid;
use crate::spatial::teleports::TeleportIndex;
use crate::systems::collision::{self, LineHit, TileQuery};

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/doors.rs"]
mod doors;
#[path = "step/batch.rs"]
mod batch;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
pub mod facade;

pub use batch::MotionBody;
pub use facade::CollisionWorld;
pub use perf_stats::CollisionPerf;

pub struct Collision {
    grid: TileGrid,
    teleports: TeleportIndex,
    doors: DoorRegistry,
    settings: CollisionSettings,
}

impl Collision {
    /// Load a decoded layer with default settings
    pub fn new(layer: &TileLayer) -> Result<Self, String> {
        init::create_collision(layer, CollisionSettings::default())
    }

    pub fn with_settings(layer: &TileLayer, settings: CollisionSettings) -> Result<Self, String> {
        init::create_collision(layer, settings)
    }

    pub fn from_layer_json(json: &str) -> Result<Self, String> {
        let layer = TileLayer::from_json(json)?;
        Self::new(&layer)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn settings(&self) -> &CollisionSettings { &self.settings }

    pub fn set_line_step(&mut self, step: f32) -> Result<(), String> {
        settings::set_line_step(self, step)
    }

    pub fn set_min_velocity(&mut self, v: f32) -> Result<(), String> {
        settings::set_min_velocity(self, v)
    }

    #[inline]
    fn query(&self) -> TileQuery<'_> {
        TileQuery {
            grid: &self.grid,
            doors: &self.doors,
            settings: &self.settings,
        }
    }

    // === Tile grid (cell coordinates) ===

    /// Raw flags of a cell, `COL_SOLID` outside the grid
    pub fn classify(&self, cx: i32, cy: i32) -> TileFlags {
        self.grid.classify(cx, cy)
    }

    pub fn tile_kind(&self, cx: i32, cy: i32) -> TileKind {
        self.grid.tile_kind(cx, cy)
    }

    pub fn is_door_open(&self, cx: i32, cy: i32) -> bool {
        self.query().is_door_open(cx, cy)
    }

    // === Point classification (world coordinates) ===

    pub fn cell_of(&self, x: f32, y: f32) -> (i32, i32) {
        self.query().cell_of(x, y)
    }

    /// Solid tile or closed door at the rounded cell
    pub fn check_point(&self, x: f32, y: f32) -> bool {
        self.query().is_solid(x, y)
    }

    /// Full flag set at the rounded cell (death, healing, poison...)
    pub fn collision_flags(&self, x: f32, y: f32) -> TileFlags {
        self.query().collision_flags(x, y)
    }

    pub fn tile_kind_at(&self, pos: Vec2) -> TileKind {
        self.query().tile_kind_at(pos.x, pos.y)
    }

    // === Lines and motion ===

    pub fn intersect_line(&self, from: Vec2, to: Vec2, check_doors: bool) -> LineHit {
        collision::intersect_line(&self.query(), from, to, check_doors)
    }

    /// Move a point one tick, returns the bounce count
    pub fn move_point(&self, pos: &mut Vec2, vel: &mut Vec2, elasticity: f32) -> u32 {
        collision::move_point(&self.query(), pos, vel, elasticity)
    }

    /// Move a box one tick, returns the bounce count
    pub fn move_box(&self, pos: &mut Vec2, vel: &mut Vec2, half_extent: Vec2, elasticity: f32) -> u32 {
        collision::move_box(&self.query(), pos, vel, half_extent, elasticity)
    }

    pub fn test_box(&self, pos: Vec2, half_extent: Vec2) -> bool {
        collision::test_box(&self.query(), pos, half_extent)
    }

    /// Integrate many bodies against the same grid (parallel with the `parallel` feature)
    pub fn step_bodies(&self, bodies: &mut [MotionBody]) {
        batch::step_bodies(self, bodies);
    }

    // === Teleporters ===

    /// Every exit of a channel in row-major discovery order
    pub fn teleport_destinations(&self, channel: u8) -> &[Vec2] {
        self.teleports.destinations(channel)
    }

    /// Channel of the teleporter entry under `pos`
    pub fn teleport_channel_at(&self, pos: Vec2) -> Option<u8> {
        let (cx, cy) = self.cell_of(pos.x, pos.y);
        if self.grid.tile_kind(cx, cy) == TILE_TELEPORT_IN {
            Some(self.grid.teleport_number(cx, cy))
        } else {
            None
        }
    }

    /// Exit for the entry under `pos`; `pick` selects among several exits.
    /// `NO_TELEPORT` when `pos` is not an entry or its channel has no exit.
    pub fn teleport(&self, pos: Vec2, pick: usize) -> Vec2 {
        match self.teleport_channel_at(pos) {
            Some(channel) => self.teleports.destination(channel, pick),
            None => crate::spatial::teleports::NO_TELEPORT,
        }
    }

    // === Doors ===

    /// Open or close the half-open tile rectangle `[start, end)`.
    /// Returns how many cells changed state.
    pub fn set_door(&mut self, start_x: i32, start_y: i32, end_x: i32, end_y: i32, open: bool) -> u32 {
        doors::set_door(self, start_x, start_y, end_x, end_y, open)
    }

    pub fn is_door(&self, x: f32, y: f32) -> DoorState {
        self.query().door_state(x, y)
    }

    pub fn reset_doors(&mut self) {
        doors::reset_doors(self);
    }

    // === Perf ===

    /// Counters accumulated on the calling thread since the last take
    pub fn take_perf_counters(&self) -> CollisionPerf {
        perf_stats::take()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
