use itertools::Itertools;

use crate::game::state::{PlacedTile, Tile};
use crate::game::{GameAction, GameState, NodeId};
use crate::types::Color;

fn actor(game: &GameState, color: Color) -> &'static str {
    if game.bot_colors.contains(&color) {
        "BOT"
    } else {
        "YOU"
    }
}

fn short_tile_string(tile: &Tile) -> String {
    match tile {
        Tile::ResourceTile { number, .. } => number.to_string(),
        Tile::Desert { .. } => "DESERT".to_string(),
        Tile::Port { .. } => "PORT".to_string(),
        Tile::Water => "WATER".to_string(),
    }
}

fn tile_string(placed: &PlacedTile) -> Option<String> {
    match &placed.tile {
        Tile::ResourceTile {
            number, resource, ..
        } => Some(format!("{number} {resource}")),
        Tile::Desert { .. } => Some("THE DESERT".to_string()),
        _ => None,
    }
}

/// Label for the tiles around a node, like "6-DESERT-8".
fn node_tiles_string(game: &GameState, node: NodeId) -> String {
    match game.adjacent_tiles.get(&node) {
        Some(tiles) => tiles.iter().map(short_tile_string).join("-"),
        None => {
            log::warn!("node {node} has no adjacency entry in the snapshot");
            "?".to_string()
        }
    }
}

/// Label for the pair of tiles an edge runs between.
fn edge_tiles_string(game: &GameState, edge: (NodeId, NodeId)) -> String {
    let (Some(a_tiles), Some(b_tiles)) = (
        game.adjacent_tiles.get(&edge.0),
        game.adjacent_tiles.get(&edge.1),
    ) else {
        log::warn!(
            "edge ({}, {}) has no adjacency entries in the snapshot",
            edge.0,
            edge.1
        );
        return "?".to_string();
    };
    let b_ids: Vec<Option<u16>> = b_tiles.iter().map(Tile::id).collect();
    a_tiles
        .iter()
        .filter(|tile| b_ids.contains(&tile.id()))
        .map(short_tile_string)
        .join("-")
}

/// One-line description of an action, suitable for a snackbar or game log.
pub fn humanize_action(game: &GameState, action: &GameAction) -> String {
    let player = actor(game, action.color());
    match action {
        GameAction::Roll { dice, .. } => match dice {
            Some((a, b)) => format!("{player} ROLLED A {}", a + b),
            None => {
                log::warn!("ROLL action carries no outcome");
                format!("{player} ROLLED")
            }
        },
        GameAction::Discard { .. } => format!("{player} DISCARDED"),
        GameAction::BuyDevelopmentCard { .. } => format!("{player} BOUGHT DEVELOPMENT CARD"),
        GameAction::BuildSettlement { node, .. } => {
            format!("{player} BUILT SETTLEMENT ON {}", node_tiles_string(game, *node))
        }
        GameAction::BuildCity { node, .. } => {
            format!("{player} BUILT CITY ON {}", node_tiles_string(game, *node))
        }
        GameAction::BuildRoad { edge, .. } => {
            format!("{player} BUILT ROAD ON {}", edge_tiles_string(game, *edge))
        }
        GameAction::PlayKnightCard { .. } => format!("{player} PLAYED KNIGHT CARD"),
        GameAction::PlayRoadBuilding { .. } => format!("{player} PLAYED ROAD BUILDING"),
        GameAction::PlayMonopoly { resource, .. } => {
            format!("{player} MONOPOLIZED {resource}")
        }
        GameAction::PlayYearOfPlenty { first, second, .. } => match second {
            Some(second) => {
                format!("{player} PLAYED YEAR OF PLENTY. CLAIMED {first} AND {second}")
            }
            None => format!("{player} PLAYED YEAR OF PLENTY. CLAIMED {first}"),
        },
        GameAction::MoveRobber {
            coordinate, stolen, ..
        } => {
            let target = match game.find_tile_by_coordinate(*coordinate).and_then(tile_string) {
                Some(target) => target,
                None => {
                    log::warn!(
                        "robber destination [{}, {}, {}] is not a robbable tile",
                        coordinate.x,
                        coordinate.y,
                        coordinate.z
                    );
                    "?".to_string()
                }
            };
            match stolen {
                Some(resource) => format!("{player} ROBBED {target} (STOLE {resource})"),
                None => format!("{player} ROBBED {target}"),
            }
        }
        GameAction::MaritimeTrade { .. } => {
            // humanize_trade_action is total for this variant.
            let label = humanize_trade_action(action).unwrap_or_default();
            format!("{player} TRADED {label}")
        }
        GameAction::EndTurn { .. } => format!("{player} ENDED TURN"),
    }
}

/// Trade menu label, like "3 BRICK => WHEAT". `None` for non-trade actions.
pub fn humanize_trade_action(action: &GameAction) -> Option<String> {
    let GameAction::MaritimeTrade { give, receive, .. } = action else {
        return None;
    };
    let given: Vec<_> = give.iter().flatten().collect();
    let first = given.first()?;
    Some(format!("{} {first} => {receive}", given.len()))
}
