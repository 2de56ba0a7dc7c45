//! Per-frame game state records handed to the renderer.
//! Everything here is owned by the game client; the renderer only reads it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

/// Playable area rectangle. Expected `left < right` and `top < bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// World dimensions; the world spans `0..width` by `0..height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub mass: f64,
    #[serde(default)]
    pub name: String,
    pub color: String,
    pub border_color: String,
}

impl Cell {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub hue: f64,
}

/// Ejected ("fire food") mass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub hue: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Virus {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Outline width of player-owned shapes.
    pub border: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { border: 6.0 }
    }
}

/// One frame of game state as sent by the game client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Local player's primary cell in world coordinates; `None` while spectating.
    pub player: Option<Cell>,
    pub world: WorldSize,
    pub cells: Vec<Cell>,
    pub foods: Vec<Food>,
    pub masses: Vec<Mass>,
    pub viruses: Vec<Virus>,
    pub player_config: PlayerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_reads_camel_case_client_json() {
        let raw = json!({
            "player": { "x": 10.0, "y": 20.0, "radius": 30.0, "mass": 12.0,
                        "name": "me", "color": "#f00", "borderColor": "#a00" },
            "world": { "width": 5000.0, "height": 4000.0 },
            "viruses": [{ "x": 1.0, "y": 2.0, "radius": 80.0, "fill": "#33ff33",
                          "stroke": "#19D119", "strokeWidth": 20.0 }],
            "playerConfig": { "border": 4.0 }
        });
        let snap: Snapshot = serde_json::from_value(raw).unwrap();
        let player = snap.player.unwrap();
        assert_eq!(player.border_color, "#a00");
        assert_eq!(player.position(), Point::new(10.0, 20.0));
        assert_eq!(snap.world.width, 5000.0);
        assert_eq!(snap.viruses[0].stroke_width, 20.0);
        assert_eq!(snap.player_config.border, 4.0);
        assert!(snap.cells.is_empty());
        assert!(snap.foods.is_empty());
    }

    #[test]
    fn snapshot_missing_fields_fall_back_to_defaults() {
        let snap: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snap.player.is_none());
        assert_eq!(snap.player_config, PlayerConfig::default());
    }

    #[test]
    fn unnamed_cell_gets_empty_name() {
        let cell: Cell = serde_json::from_value(json!({
            "x": 0.0, "y": 0.0, "radius": 1.0, "mass": 1.0,
            "color": "red", "borderColor": "black"
        }))
        .unwrap();
        assert_eq!(cell.name, "");
    }
}
