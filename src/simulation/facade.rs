use wasm_bindgen::prelude::*;

use crate::domain::layer::TileLayer;
use crate::domain::settings::CollisionSettings;
use crate::math::Vec2;
use crate::spatial::doors::DoorState;

use super::perf_stats::CollisionPerf;
use super::Collision;

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct LineResult {
    x: f32,
    y: f32,
    before_x: f32,
    before_y: f32,
    blocked: bool,
    flags: u8,
}

#[wasm_bindgen]
impl LineResult {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.y }
    #[wasm_bindgen(getter)]
    pub fn before_x(&self) -> f32 { self.before_x }
    #[wasm_bindgen(getter)]
    pub fn before_y(&self) -> f32 { self.before_y }
    #[wasm_bindgen(getter)]
    pub fn blocked(&self) -> bool { self.blocked }
    #[wasm_bindgen(getter)]
    pub fn flags(&self) -> u8 { self.flags }
}

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct MotionResult {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    bounces: u32,
}

#[wasm_bindgen]
impl MotionResult {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.y }
    #[wasm_bindgen(getter)]
    pub fn vx(&self) -> f32 { self.vx }
    #[wasm_bindgen(getter)]
    pub fn vy(&self) -> f32 { self.vy }
    #[wasm_bindgen(getter)]
    pub fn bounces(&self) -> u32 { self.bounces }
}

impl MotionResult {
    fn new(pos: Vec2, vel: Vec2, bounces: u32) -> Self {
        Self { x: pos.x, y: pos.y, vx: vel.x, vy: vel.y, bounces }
    }
}

/// JS handle to one loaded map
#[wasm_bindgen]
pub struct CollisionWorld {
    core: Collision,
}

#[wasm_bindgen]
impl CollisionWorld {
    /// Load a decoded layer given as JSON (`{width, height, tiles: [{index, number}]}`)
    #[wasm_bindgen(constructor)]
    pub fn new(layer_json: String) -> Result<CollisionWorld, JsValue> {
        let core = Collision::from_layer_json(&layer_json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(layer_json: String, settings_json: String) -> Result<CollisionWorld, JsValue> {
        let layer = TileLayer::from_json(&layer_json).map_err(|e| JsValue::from_str(&e))?;
        let settings = CollisionSettings::from_json(&settings_json).map_err(|e| JsValue::from_str(&e))?;
        let core = Collision::with_settings(&layer, settings).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    pub fn check_point(&self, x: f32, y: f32) -> bool {
        self.core.check_point(x, y)
    }

    pub fn collision_flags(&self, x: f32, y: f32) -> u8 {
        self.core.collision_flags(x, y)
    }

    pub fn tile_kind(&self, cx: i32, cy: i32) -> u8 {
        self.core.tile_kind(cx, cy)
    }

    pub fn intersect_line(&self, x0: f32, y0: f32, x1: f32, y1: f32, check_doors: bool) -> LineResult {
        let hit = self.core.intersect_line(Vec2::new(x0, y0), Vec2::new(x1, y1), check_doors);
        LineResult {
            x: hit.collision.x,
            y: hit.collision.y,
            before_x: hit.before.x,
            before_y: hit.before.y,
            blocked: hit.blocked,
            flags: hit.flags,
        }
    }

    pub fn move_point(&self, x: f32, y: f32, vx: f32, vy: f32, elasticity: f32) -> MotionResult {
        let mut pos = Vec2::new(x, y);
        let mut vel = Vec2::new(vx, vy);
        let bounces = self.core.move_point(&mut pos, &mut vel, elasticity);
        MotionResult::new(pos, vel, bounces)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn move_box(&self, x: f32, y: f32, vx: f32, vy: f32, half_w: f32, half_h: f32, elasticity: f32) -> MotionResult {
        let mut pos = Vec2::new(x, y);
        let mut vel = Vec2::new(vx, vy);
        let bounces = self.core.move_box(&mut pos, &mut vel, Vec2::new(half_w, half_h), elasticity);
        MotionResult::new(pos, vel, bounces)
    }

    pub fn test_box(&self, x: f32, y: f32, half_w: f32, half_h: f32) -> bool {
        self.core.test_box(Vec2::new(x, y), Vec2::new(half_w, half_h))
    }

    /// Exits of a channel flattened as `[x0, y0, x1, y1, ...]`
    pub fn teleport_destinations(&self, channel: u8) -> js_sys::Float32Array {
        let flat: Vec<f32> = self
            .core
            .teleport_destinations(channel)
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect();
        js_sys::Float32Array::from(&flat[..])
    }

    pub fn set_door(&mut self, start_x: i32, start_y: i32, end_x: i32, end_y: i32, open: bool) -> u32 {
        self.core.set_door(start_x, start_y, end_x, end_y, open)
    }

    /// 0 = not a door, 1 = closed, 2 = open
    pub fn is_door(&self, x: f32, y: f32) -> u8 {
        match self.core.is_door(x, y) {
            DoorState::NotDoor => 0,
            DoorState::Closed => 1,
            DoorState::Open => 2,
        }
    }

    pub fn take_perf_counters(&self) -> CollisionPerf {
        self.core.take_perf_counters()
    }
}
