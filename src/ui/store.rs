use crate::game::GameState;

/// Local, ephemeral UI state: what the next click should mean. Owned by the
/// caller and threaded by value through [`reduce`]; there is no shared
/// mutable context behind it. The server snapshot rides along so indexing
/// always reads mode flags against the state they were set for.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    pub game_state: Option<GameState>,
    pub is_building_road: bool,
    pub is_building_settlement: bool,
    pub is_building_city: bool,
    pub is_playing_monopoly: bool,
    pub is_playing_year_of_plenty: bool,
    pub is_road_building: bool,
    /// Free roads left on a played Road Building card.
    pub free_roads_available: u8,
    pub is_moving_robber: bool,
    pub is_left_drawer_open: bool,
    pub is_right_drawer_open: bool,
}

impl ClientState {
    /// A resource-selection or road-building card flow is mid-way; build and
    /// trade menus stay closed until it resolves.
    pub fn is_playing_dev_card(&self) -> bool {
        self.is_playing_monopoly || self.is_playing_year_of_plenty || self.is_road_building
    }

    fn with_modes_cleared(self) -> ClientState {
        ClientState {
            is_building_road: false,
            is_building_settlement: false,
            is_building_city: false,
            is_playing_monopoly: false,
            is_playing_year_of_plenty: false,
            is_road_building: false,
            free_roads_available: 0,
            is_moving_robber: false,
            ..self
        }
    }
}

/// Everything that can change the UI state. Menu clicks set a mode; a fresh
/// server snapshot clears them again.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    SetGameState(Box<GameState>),
    ToggleBuildingRoad,
    StartBuildingSettlement,
    StartBuildingCity,
    StartPlayingMonopoly,
    CancelMonopoly,
    StartPlayingYearOfPlenty,
    CancelYearOfPlenty,
    PlayRoadBuilding,
    StartMovingRobber,
    SetLeftDrawerOpen(bool),
    SetRightDrawerOpen(bool),
}

/// Pure reduction step. Modes are mutually exclusive: entering one clears the
/// others. A new snapshot clears every mode except road building, which
/// decrements its counter once per snapshot and clears once the counter has
/// already reached zero (so the card's two placements both stay clickable).
pub fn reduce(state: ClientState, event: ClientEvent) -> ClientState {
    match event {
        ClientEvent::SetGameState(game_state) => {
            let (is_road_building, free_roads_available) = if state.is_road_building {
                if state.free_roads_available == 0 {
                    (false, 0)
                } else {
                    (true, state.free_roads_available - 1)
                }
            } else {
                (false, 0)
            };
            ClientState {
                game_state: Some(*game_state),
                is_road_building,
                free_roads_available,
                ..state.with_modes_cleared()
            }
        }
        ClientEvent::ToggleBuildingRoad => {
            let was_building = state.is_building_road;
            ClientState {
                is_building_road: !was_building,
                ..state.with_modes_cleared()
            }
        }
        ClientEvent::StartBuildingSettlement => ClientState {
            is_building_settlement: true,
            ..state.with_modes_cleared()
        },
        ClientEvent::StartBuildingCity => ClientState {
            is_building_city: true,
            ..state.with_modes_cleared()
        },
        ClientEvent::StartPlayingMonopoly => ClientState {
            is_playing_monopoly: true,
            ..state.with_modes_cleared()
        },
        ClientEvent::CancelMonopoly => ClientState {
            is_playing_monopoly: false,
            ..state
        },
        ClientEvent::StartPlayingYearOfPlenty => ClientState {
            is_playing_year_of_plenty: true,
            ..state.with_modes_cleared()
        },
        ClientEvent::CancelYearOfPlenty => ClientState {
            is_playing_year_of_plenty: false,
            ..state
        },
        ClientEvent::PlayRoadBuilding => ClientState {
            is_road_building: true,
            free_roads_available: 2,
            ..state.with_modes_cleared()
        },
        ClientEvent::StartMovingRobber => ClientState {
            is_moving_robber: true,
            ..state.with_modes_cleared()
        },
        ClientEvent::SetLeftDrawerOpen(open) => ClientState {
            is_left_drawer_open: open,
            ..state
        },
        ClientEvent::SetRightDrawerOpen(open) => ClientState {
            is_right_drawer_open: open,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> Box<GameState> {
        Box::new(
            serde_json::from_value(json!({
                "colors": ["RED", "BLUE"],
                "bot_colors": ["BLUE"],
                "current_color": "RED",
                "current_prompt": "PLAY_TURN",
            }))
            .unwrap(),
        )
    }

    #[test]
    fn snapshot_clears_every_mode() {
        let state = ClientState {
            is_building_settlement: true,
            is_building_city: true,
            is_building_road: true,
            is_playing_monopoly: true,
            is_playing_year_of_plenty: true,
            is_moving_robber: true,
            is_left_drawer_open: true,
            ..ClientState::default()
        };
        let state = reduce(state, ClientEvent::SetGameState(snapshot()));
        assert!(!state.is_building_settlement);
        assert!(!state.is_building_city);
        assert!(!state.is_building_road);
        assert!(!state.is_playing_monopoly);
        assert!(!state.is_playing_year_of_plenty);
        assert!(!state.is_moving_robber);
        assert!(state.game_state.is_some());
        // Drawer visibility is not a mode; it survives snapshots.
        assert!(state.is_left_drawer_open);
    }

    #[test]
    fn road_building_survives_exactly_two_placements() {
        let state = reduce(ClientState::default(), ClientEvent::PlayRoadBuilding);
        assert!(state.is_road_building);
        assert_eq!(state.free_roads_available, 2);

        // Reply to the card play itself.
        let state = reduce(state, ClientEvent::SetGameState(snapshot()));
        assert!(state.is_road_building);
        assert_eq!(state.free_roads_available, 1);

        // Reply to the first free road.
        let state = reduce(state, ClientEvent::SetGameState(snapshot()));
        assert!(state.is_road_building);
        assert_eq!(state.free_roads_available, 0);

        // Reply to the second free road: the mode finally clears.
        let state = reduce(state, ClientEvent::SetGameState(snapshot()));
        assert!(!state.is_road_building);
        assert_eq!(state.free_roads_available, 0);
    }

    #[test]
    fn toggle_building_road() {
        let state = reduce(ClientState::default(), ClientEvent::ToggleBuildingRoad);
        assert!(state.is_building_road);
        let state = reduce(state, ClientEvent::ToggleBuildingRoad);
        assert!(!state.is_building_road);
    }

    #[test]
    fn entering_a_mode_clears_the_others() {
        let state = reduce(ClientState::default(), ClientEvent::StartBuildingSettlement);
        let state = reduce(state, ClientEvent::StartBuildingCity);
        assert!(!state.is_building_settlement);
        assert!(state.is_building_city);
        let state = reduce(state, ClientEvent::StartMovingRobber);
        assert!(!state.is_building_city);
        assert!(state.is_moving_robber);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let state = reduce(ClientState::default(), ClientEvent::StartPlayingMonopoly);
        assert!(state.is_playing_monopoly);
        let state = reduce(state, ClientEvent::CancelMonopoly);
        assert!(!state.is_playing_monopoly);

        let state = reduce(state, ClientEvent::StartPlayingYearOfPlenty);
        let state = reduce(state, ClientEvent::CancelYearOfPlenty);
        assert!(!state.is_playing_year_of_plenty);
    }

    #[test]
    fn drawer_events_touch_nothing_else() {
        let state = reduce(ClientState::default(), ClientEvent::StartBuildingSettlement);
        let state = reduce(state, ClientEvent::SetLeftDrawerOpen(true));
        let state = reduce(state, ClientEvent::SetRightDrawerOpen(true));
        assert!(state.is_building_settlement);
        assert!(state.is_left_drawer_open);
        assert!(state.is_right_drawer_open);
    }
}
