use std::collections::HashSet;

use crate::game::{GameAction, GameState};
use crate::types::{ActionPrompt, ActionType};
use crate::ui::prompt::humanize_trade_action;
use crate::ui::store::ClientState;

/// Dev-card kinds currently playable, for enabling "Use" menu entries.
pub fn playable_dev_card_kinds(game: &GameState) -> HashSet<ActionType> {
    game.current_playable_actions
        .iter()
        .map(GameAction::action_type)
        .filter(|kind| {
            matches!(
                kind,
                ActionType::PlayKnightCard
                    | ActionType::PlayRoadBuilding
                    | ActionType::PlayMonopoly
                    | ActionType::PlayYearOfPlenty
            )
        })
        .collect()
}

/// Buy/build kinds currently affordable, for enabling "Buy" menu entries.
/// Always empty during initial placement, where the board itself drives.
pub fn build_action_kinds(game: &GameState) -> HashSet<ActionType> {
    if game.is_initial_build_phase {
        return HashSet::new();
    }
    game.current_playable_actions
        .iter()
        .map(GameAction::action_type)
        .filter(|kind| {
            matches!(
                kind,
                ActionType::BuyDevelopmentCard
                    | ActionType::BuildSettlement
                    | ActionType::BuildCity
                    | ActionType::BuildRoad
            )
        })
        .collect()
}

/// Maritime trades on offer, sorted by their menu label.
pub fn trade_actions(game: &GameState) -> Vec<GameAction> {
    let mut trades: Vec<GameAction> = game
        .current_playable_actions
        .iter()
        .filter(|action| action.action_type() == ActionType::MaritimeTrade)
        .cloned()
        .collect();
    trades.sort_by_cached_key(|action| humanize_trade_action(action).unwrap_or_default());
    trades
}

/// What the main toolbar button does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptButton {
    Discard,
    Rob,
    Select,
    Roll,
    End,
}

/// Derives the main button from the server prompt and the local modes:
/// discard and robber prompts win, then a pending resource selection, then
/// the roll (while the current player has not rolled), otherwise end turn.
pub fn prompt_button(state: &ClientState) -> Option<PromptButton> {
    let game = state.game_state.as_ref()?;
    let has_rolled = game
        .player(game.current_color)
        .map(|player| player.has_rolled)
        .unwrap_or(false);
    let button = if game.current_prompt == ActionPrompt::Discard {
        PromptButton::Discard
    } else if game.current_prompt == ActionPrompt::MoveRobber {
        PromptButton::Rob
    } else if state.is_playing_year_of_plenty || state.is_playing_monopoly {
        PromptButton::Select
    } else if game.current_prompt == ActionPrompt::PlayTurn && !has_rolled {
        PromptButton::Roll
    } else {
        PromptButton::End
    };
    Some(button)
}
