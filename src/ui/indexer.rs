use std::collections::{HashMap, HashSet};

use crate::coords::CubeCoord;
use crate::game::{EdgeId, GameAction, GameState, NodeId};
use crate::types::ActionType;
use crate::ui::store::ClientState;

/// Canonical unordered form of an edge id, so a click handler keyed on
/// either endpoint ordering hits the same entry.
pub fn edge_key((a, b): EdgeId) -> EdgeId {
    if a <= b { (a, b) } else { (b, a) }
}

/// Which build kind node clicks should mean right now, if any.
fn node_build_kind(game: &GameState, state: &ClientState) -> Option<ActionType> {
    if game.is_initial_build_phase {
        // Initial placement ignores local mode flags entirely.
        Some(ActionType::BuildSettlement)
    } else if state.is_building_settlement {
        Some(ActionType::BuildSettlement)
    } else if state.is_building_city {
        Some(ActionType::BuildCity)
    } else {
        None
    }
}

/// Map from node id to the action clicking that node submits. Empty whenever
/// no snapshot is loaded, a bot is deciding, or no node-targeting mode is
/// active. Every value comes straight out of `current_playable_actions`.
pub fn node_actions(state: &ClientState) -> HashMap<NodeId, GameAction> {
    let Some(game) = &state.game_state else {
        return HashMap::new();
    };
    if !game.is_players_turn() {
        return HashMap::new();
    }
    let Some(kind) = node_build_kind(game, state) else {
        return HashMap::new();
    };
    let actions: HashMap<NodeId, GameAction> = game
        .current_playable_actions
        .iter()
        .filter(|action| action.action_type() == kind)
        .filter_map(|action| Some((action.node_id()?, action.clone())))
        .collect();
    if !game.nodes.is_empty() {
        for id in actions.keys() {
            if !game.nodes.contains_key(id) {
                log::warn!("playable action targets node {id} absent from the snapshot");
            }
        }
    }
    actions
}

/// Map from canonical edge id to the road-build action for that edge. Active
/// during the initial placement phase and in either road-building mode.
pub fn edge_actions(state: &ClientState) -> HashMap<EdgeId, GameAction> {
    let Some(game) = &state.game_state else {
        return HashMap::new();
    };
    if !game.is_players_turn() {
        return HashMap::new();
    }
    let road_mode =
        game.is_initial_build_phase || state.is_building_road || state.is_road_building;
    if !road_mode {
        return HashMap::new();
    }
    let actions: HashMap<EdgeId, GameAction> = game
        .current_playable_actions
        .iter()
        .filter(|action| action.action_type() == ActionType::BuildRoad)
        .filter_map(|action| Some((edge_key(action.edge_id()?), action.clone())))
        .collect();
    if !game.edges.is_empty() {
        let known: HashSet<EdgeId> = game.edges.iter().map(|edge| edge_key(edge.id)).collect();
        for id in actions.keys() {
            if !known.contains(id) {
                log::warn!(
                    "playable action targets edge ({}, {}) absent from the snapshot",
                    id.0,
                    id.1
                );
            }
        }
    }
    actions
}

/// The `MOVE_ROBBER` action for a clicked tile, if the robber may go there.
/// Only answers while the robber-moving mode is active; a tile with no
/// matching action (such as the robber's current tile) is simply `None`.
pub fn resolve_robber_target(state: &ClientState, coordinate: CubeCoord) -> Option<&GameAction> {
    if !state.is_moving_robber {
        return None;
    }
    let game = state.game_state.as_ref()?;
    game.current_playable_actions.iter().find(|action| {
        matches!(action, GameAction::MoveRobber { coordinate: target, .. } if *target == coordinate)
    })
}
