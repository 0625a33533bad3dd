use serde::{Deserialize, Serialize};

pub const DEFAULT_TILE_SIZE: f32 = 32.0;
/// One world unit per sample keeps single-tile walls from being skipped
pub const DEFAULT_LINE_STEP: f32 = 1.0;
pub const DEFAULT_MIN_VELOCITY: f32 = 0.00001;
/// Finer sampling than this only multiplies the work of a line walk
pub const MIN_LINE_STEP: f32 = 1.0 / 64.0;

/// Tunables for one loaded map
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollisionSettings {
    /// World units per tile edge
    pub tile_size: f32,
    /// Sampling distance for line intersection
    pub line_step: f32,
    /// Speeds at or below this are treated as resting
    pub min_velocity: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            line_step: DEFAULT_LINE_STEP,
            min_velocity: DEFAULT_MIN_VELOCITY,
        }
    }
}

impl CollisionSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: CollisionSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        check_positive("tileSize", self.tile_size)?;
        check_positive("lineStep", self.line_step)?;
        if self.line_step < MIN_LINE_STEP {
            return Err(format!("lineStep must be at least {}, got {}", MIN_LINE_STEP, self.line_step));
        }
        check_positive("minVelocity", self.min_velocity)?;
        Ok(())
    }
}

fn check_positive(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be a positive finite number, got {}", name, v))
    }
}
