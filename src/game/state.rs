use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::coords::CubeCoord;
use crate::game::action::{EdgeId, GameAction, NodeId};
use crate::types::{ActionPrompt, BuildingKind, Color, Direction, Resource};

/// One hex of the board, tagged the way the server encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tile {
    ResourceTile {
        id: u16,
        resource: Resource,
        number: u8,
    },
    Desert {
        id: u16,
    },
    Port {
        id: u16,
        direction: Direction,
        resource: Option<Resource>,
    },
    Water,
}

impl Tile {
    pub fn id(&self) -> Option<u16> {
        match *self {
            Tile::ResourceTile { id, .. } | Tile::Desert { id } | Tile::Port { id, .. } => Some(id),
            Tile::Water => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlacedTile {
    pub coordinate: CubeCoord,
    pub tile: Tile,
}

/// Vertex of the grid: meeting point of up to three tiles, identified by one
/// adjacent tile plus the direction of the vertex from that tile's center.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub tile_coordinate: CubeCoord,
    pub direction: Direction,
    pub building: Option<BuildingKind>,
    pub color: Option<Color>,
}

/// Potential road location between two adjacent nodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub tile_coordinate: CubeCoord,
    pub direction: Direction,
    pub color: Option<Color>,
}

/// Per-slot view of one player's public state. Replaces the server's flat
/// `P{slot}_*` string keys with a record indexed by seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerSnapshot {
    pub has_rolled: bool,
    pub actual_victory_points: u8,
}

fn players_from_flat_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<PlayerSnapshot>, D::Error> {
    let flat: HashMap<String, Value> = HashMap::deserialize(deserializer)?;
    let mut players: Vec<PlayerSnapshot> = Vec::new();
    for (key, value) in &flat {
        let Some(rest) = key.strip_prefix('P') else {
            continue;
        };
        let Some((slot, field)) = rest.split_once('_') else {
            continue;
        };
        let Ok(slot) = slot.parse::<usize>() else {
            continue;
        };
        if players.len() <= slot {
            players.resize_with(slot + 1, PlayerSnapshot::default);
        }
        match field {
            "HAS_ROLLED" => players[slot].has_rolled = value.as_bool().unwrap_or(false),
            "ACTUAL_VICTORY_POINTS" => {
                players[slot].actual_victory_points = value.as_u64().unwrap_or(0) as u8
            }
            _ => {}
        }
    }
    Ok(players)
}

/// Server-authoritative snapshot, replaced wholesale on every response and
/// never mutated in place.
#[derive(Debug, Clone, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub tiles: Vec<PlacedTile>,
    /// Keyed by node id on the wire.
    #[serde(default)]
    pub nodes: HashMap<NodeId, Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Tiles surrounding each node, in the server's adjacency order.
    #[serde(default)]
    pub adjacent_tiles: HashMap<NodeId, Vec<Tile>>,
    /// Seat order; slot `i` belongs to `colors[i]`.
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub bot_colors: Vec<Color>,
    pub current_color: Color,
    pub current_prompt: ActionPrompt,
    #[serde(default)]
    pub current_playable_actions: Vec<GameAction>,
    #[serde(default)]
    pub is_initial_build_phase: bool,
    #[serde(default)]
    pub robber_coordinate: CubeCoord,
    #[serde(default)]
    pub winning_color: Option<Color>,
    #[serde(rename = "player_state", deserialize_with = "players_from_flat_map", default)]
    pub players: Vec<PlayerSnapshot>,
}

impl GameState {
    /// True when a human needs to act.
    pub fn is_players_turn(&self) -> bool {
        !self.bot_colors.contains(&self.current_color)
    }

    /// Color of the (single) human seat, if any.
    pub fn human_color(&self) -> Option<Color> {
        self.colors
            .iter()
            .copied()
            .find(|color| !self.bot_colors.contains(color))
    }

    pub fn player_slot(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|c| *c == color)
    }

    pub fn player(&self, color: Color) -> Option<&PlayerSnapshot> {
        self.player_slot(color)
            .and_then(|slot| self.players.get(slot))
    }

    pub fn find_tile_by_coordinate(&self, coordinate: CubeCoord) -> Option<&PlacedTile> {
        self.tiles
            .iter()
            .find(|placed| placed.coordinate == coordinate)
    }

    pub fn find_tile_by_id(&self, id: u16) -> Option<&PlacedTile> {
        self.tiles.iter().find(|placed| placed.tile.id() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_seat_state(current: &str) -> GameState {
        serde_json::from_value(json!({
            "colors": ["BLUE", "RED"],
            "bot_colors": ["BLUE"],
            "current_color": current,
            "current_prompt": "PLAY_TURN",
        }))
        .unwrap()
    }

    #[test]
    fn players_turn_follows_bot_colors() {
        assert!(two_seat_state("RED").is_players_turn());
        assert!(!two_seat_state("BLUE").is_players_turn());
    }

    #[test]
    fn human_color_skips_bots() {
        assert_eq!(two_seat_state("BLUE").human_color(), Some(Color::Red));
        let all_bots: GameState = serde_json::from_value(json!({
            "colors": ["BLUE", "RED"],
            "bot_colors": ["BLUE", "RED"],
            "current_color": "BLUE",
            "current_prompt": "PLAY_TURN",
        }))
        .unwrap();
        assert_eq!(all_bots.human_color(), None);
    }

    #[test]
    fn flat_player_state_becomes_slot_records() {
        let state: GameState = serde_json::from_value(json!({
            "colors": ["BLUE", "RED"],
            "bot_colors": ["BLUE"],
            "current_color": "RED",
            "current_prompt": "PLAY_TURN",
            "player_state": {
                "P0_HAS_ROLLED": true,
                "P0_ACTUAL_VICTORY_POINTS": 4,
                "P1_HAS_ROLLED": false,
                "P1_ACTUAL_VICTORY_POINTS": 2,
                "P1_PLAYED_KNIGHT": 1,
            },
        }))
        .unwrap();
        assert!(state.player(Color::Blue).unwrap().has_rolled);
        assert_eq!(state.player(Color::Blue).unwrap().actual_victory_points, 4);
        assert!(!state.player(Color::Red).unwrap().has_rolled);
        assert_eq!(state.player(Color::Red).unwrap().actual_victory_points, 2);
        assert_eq!(state.player_slot(Color::Red), Some(1));
    }

    #[test]
    fn decodes_server_shaped_document() {
        let state: GameState = serde_json::from_value(json!({
            "tiles": [
                {"coordinate": [0, 0, 0],
                 "tile": {"id": 0, "type": "RESOURCE_TILE", "resource": "BRICK", "number": 6}},
                {"coordinate": [1, -1, 0], "tile": {"id": 1, "type": "DESERT"}},
                {"coordinate": [3, -3, 0],
                 "tile": {"id": 0, "type": "PORT", "direction": "WEST", "resource": null}},
                {"coordinate": [2, -3, 1], "tile": {"type": "WATER"}},
            ],
            "nodes": {
                "0": {"id": 0, "tile_coordinate": [0, 0, 0], "direction": "NORTH",
                       "building": "SETTLEMENT", "color": "RED"},
                "1": {"id": 1, "tile_coordinate": [0, 0, 0], "direction": "NORTHEAST",
                       "building": null, "color": null},
            },
            "edges": [
                {"id": [0, 1], "tile_coordinate": [0, 0, 0], "direction": "NORTHEAST",
                 "color": null},
            ],
            "adjacent_tiles": {
                "0": [{"id": 0, "type": "RESOURCE_TILE", "resource": "BRICK", "number": 6}],
            },
            "colors": ["RED", "BLUE"],
            "bot_colors": ["BLUE"],
            "current_color": "RED",
            "current_prompt": "MOVE_ROBBER",
            "current_playable_actions": [["RED", "MOVE_ROBBER", [[1, -1, 0], null]]],
            "is_initial_build_phase": false,
            "robber_coordinate": [0, 0, 0],
            "winning_color": null,
        }))
        .unwrap();

        assert_eq!(state.tiles.len(), 4);
        assert_eq!(
            state.nodes.get(&0).unwrap().building,
            Some(BuildingKind::Settlement)
        );
        assert_eq!(state.edges[0].id, (0, 1));
        assert_eq!(state.current_prompt, ActionPrompt::MoveRobber);
        assert_eq!(state.current_playable_actions.len(), 1);
        assert_eq!(
            state
                .find_tile_by_coordinate(CubeCoord::new(1, -1, 0))
                .unwrap()
                .tile,
            Tile::Desert { id: 1 }
        );
        assert_eq!(state.find_tile_by_id(1).unwrap().coordinate, CubeCoord::new(1, -1, 0));
        assert!(state.find_tile_by_coordinate(CubeCoord::new(2, -2, 0)).is_none());
    }
}
