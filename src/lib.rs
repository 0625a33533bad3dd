//! Tilecollide Engine - tile-grid collision and motion resolution
//!
//! Answers two questions every tick for every moving entity: what is
//! at this point or region, and where does a point or box end up after
//! one tick of velocity, bouncing off solid tiles.
//!
//! Architecture:
//! - math/        - Vec2
//! - domain/      - tile kinds, flags, decoded layers, settings
//! - spatial/     - tile grid store, teleporter index, door registry
//! - systems/     - point/line/box collision and motion integration
//! - simulation/  - per-map engine context and JS facade

pub mod math;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool initialization for browser builds
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine (browser only)
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"tilecollide engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::layer::{LayerTile, TileLayer};
pub use domain::settings::CollisionSettings;
pub use domain::tiles::*;
pub use math::Vec2;
pub use simulation::{Collision, CollisionPerf, CollisionWorld, MotionBody};
pub use spatial::doors::DoorState;
pub use spatial::teleports::NO_TELEPORT;
pub use systems::collision::LineHit;

// Export flag constants for JS
#[wasm_bindgen]
pub fn col_solid() -> u8 { COL_SOLID }
#[wasm_bindgen]
pub fn col_death() -> u8 { COL_DEATH }
#[wasm_bindgen]
pub fn col_nohook() -> u8 { COL_NOHOOK }
#[wasm_bindgen]
pub fn col_healing() -> u8 { COL_HEALING }
#[wasm_bindgen]
pub fn col_poison() -> u8 { COL_POISON }
#[wasm_bindgen]
pub fn col_door() -> u8 { COL_DOOR }
