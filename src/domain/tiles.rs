//! Tile kinds and collision flags
//!
//! Raw tile indices come straight from the map's game layer. At load time
//! every index is folded into a flag mask, so hot-path queries never look
//! at the raw index again.

pub type TileKind = u8;
pub type TileFlags = u8;

// === Raw tile indices ===
pub const TILE_AIR: TileKind = 0;
pub const TILE_SOLID: TileKind = 1;
pub const TILE_DEATH: TileKind = 2;
pub const TILE_NOHOOK: TileKind = 3;
pub const TILE_HEALING: TileKind = 4;
pub const TILE_POISON: TileKind = 5;
pub const TILE_DOOR: TileKind = 6;
pub const TILE_TELEPORT_IN: TileKind = 7;
pub const TILE_TELEPORT_OUT: TileKind = 8;

/// Indices above this are entity markers (spawns, pickups), not collision
pub const TILE_ENTITY_OFFSET: TileKind = 128;

// === Collision flags ===
pub const COL_NONE: TileFlags = 0;
pub const COL_SOLID: TileFlags = 1 << 0;
pub const COL_DEATH: TileFlags = 1 << 1;
pub const COL_NOHOOK: TileFlags = 1 << 2;
pub const COL_HEALING: TileFlags = 1 << 3;
pub const COL_POISON: TileFlags = 1 << 4;
pub const COL_DOOR: TileFlags = 1 << 5;

/// Fold a raw tile index into its collision flags
#[inline]
pub fn flags_for_kind(kind: TileKind) -> TileFlags {
    if kind > TILE_ENTITY_OFFSET {
        return COL_NONE;
    }
    match kind {
        TILE_SOLID => COL_SOLID,
        TILE_DEATH => COL_DEATH,
        TILE_NOHOOK => COL_SOLID | COL_NOHOOK,
        TILE_HEALING => COL_HEALING,
        TILE_POISON => COL_POISON,
        TILE_DOOR => COL_DOOR,
        _ => COL_NONE,
    }
}

#[inline]
pub fn is_teleport_kind(kind: TileKind) -> bool {
    kind == TILE_TELEPORT_IN || kind == TILE_TELEPORT_OUT
}

#[inline]
pub fn has_flag(flags: TileFlags, flag: TileFlags) -> bool {
    flags & flag != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nohook_is_also_solid() {
        let f = flags_for_kind(TILE_NOHOOK);
        assert!(has_flag(f, COL_SOLID));
        assert!(has_flag(f, COL_NOHOOK));
    }

    #[test]
    fn entity_and_unknown_indices_have_no_flags() {
        assert_eq!(flags_for_kind(200), COL_NONE);
        assert_eq!(flags_for_kind(42), COL_NONE);
        assert_eq!(flags_for_kind(TILE_TELEPORT_IN), COL_NONE);
    }

    #[test]
    fn door_tiles_are_not_statically_solid() {
        assert_eq!(flags_for_kind(TILE_DOOR), COL_DOOR);
    }
}
