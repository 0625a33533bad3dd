pub mod layer;
pub mod settings;
pub mod tiles;
