pub mod doors;
pub mod grid;
pub mod teleports;
