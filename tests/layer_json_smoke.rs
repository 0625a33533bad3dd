use tilecollide_engine::{Collision, CollisionSettings, TileLayer, Vec2, TILE_NOHOOK, TILE_SOLID};

const LAYER_JSON: &str = r#"{
    "width": 3,
    "height": 2,
    "tiles": [
        {"index": 1}, {"index": 0}, {"index": 3},
        {"index": 7, "number": 4}, {"index": 0}, {"index": 8, "number": 4}
    ]
}"#;

#[test]
fn layer_json_loads_into_a_world() {
    let world = Collision::from_layer_json(LAYER_JSON).expect("layer json should load");

    assert_eq!(world.width(), 3);
    assert_eq!(world.height(), 2);
    assert_eq!(world.tile_kind(0, 0), TILE_SOLID);
    assert_eq!(world.tile_kind(2, 0), TILE_NOHOOK);
    assert_eq!(world.teleport_destinations(4), &[Vec2::new(80.0, 48.0)]);
    assert_eq!(world.teleport(Vec2::new(16.0, 48.0), 0), Vec2::new(80.0, 48.0));
}

#[test]
fn malformed_layers_are_errors() {
    assert!(Collision::from_layer_json("{").is_err());
    assert!(Collision::from_layer_json(r#"{"width":2,"height":2,"tiles":[]}"#).is_err());
    assert!(Collision::from_layer_json(r#"{"width":0,"height":0,"tiles":[]}"#).is_err());
}

#[test]
fn settings_json_changes_tile_size() {
    let layer = TileLayer::from_json(LAYER_JSON).unwrap();
    let settings = CollisionSettings::from_json(r#"{"tileSize": 16}"#).unwrap();
    let world = Collision::with_settings(&layer, settings).unwrap();

    assert_eq!(world.cell_of(20.0, 4.0), (1, 0));
    assert_eq!(world.teleport_destinations(4), &[Vec2::new(40.0, 24.0)]);
}
