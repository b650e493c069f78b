use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::coords::CubeCoord;
use crate::types::{ActionType, Color, Resource};

pub type NodeId = u16;

/// Unordered pair of node ids. The server reports either ordering; compare
/// through [`crate::ui::indexer::edge_key`].
pub type EdgeId = (NodeId, NodeId);

/// One action a player can submit (or the server can report). On the wire
/// this is the positional tuple `[COLOR, KIND, payload]`; here every payload
/// is checked at construction rather than at each use site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// `dice` is `None` when submitting (the server rolls), `Some` on replies.
    Roll {
        color: Color,
        dice: Option<(u8, u8)>,
    },
    Discard {
        color: Color,
    },
    BuyDevelopmentCard {
        color: Color,
    },
    BuildSettlement {
        color: Color,
        node: NodeId,
    },
    BuildCity {
        color: Color,
        node: NodeId,
    },
    BuildRoad {
        color: Color,
        edge: EdgeId,
    },
    PlayKnightCard {
        color: Color,
    },
    PlayRoadBuilding {
        color: Color,
    },
    PlayMonopoly {
        color: Color,
        resource: Resource,
    },
    PlayYearOfPlenty {
        color: Color,
        first: Resource,
        second: Option<Resource>,
    },
    MoveRobber {
        color: Color,
        coordinate: CubeCoord,
        victim: Option<Color>,
        stolen: Option<Resource>,
    },
    /// Four give slots (trailing `None`s for better-than-4:1 rates) and the
    /// resource received, exactly as the server flattens it.
    MaritimeTrade {
        color: Color,
        give: [Option<Resource>; 4],
        receive: Resource,
    },
    EndTurn {
        color: Color,
    },
}

impl GameAction {
    pub fn color(&self) -> Color {
        match *self {
            GameAction::Roll { color, .. }
            | GameAction::Discard { color }
            | GameAction::BuyDevelopmentCard { color }
            | GameAction::BuildSettlement { color, .. }
            | GameAction::BuildCity { color, .. }
            | GameAction::BuildRoad { color, .. }
            | GameAction::PlayKnightCard { color }
            | GameAction::PlayRoadBuilding { color }
            | GameAction::PlayMonopoly { color, .. }
            | GameAction::PlayYearOfPlenty { color, .. }
            | GameAction::MoveRobber { color, .. }
            | GameAction::MaritimeTrade { color, .. }
            | GameAction::EndTurn { color } => color,
        }
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            GameAction::Roll { .. } => ActionType::Roll,
            GameAction::Discard { .. } => ActionType::Discard,
            GameAction::BuyDevelopmentCard { .. } => ActionType::BuyDevelopmentCard,
            GameAction::BuildSettlement { .. } => ActionType::BuildSettlement,
            GameAction::BuildCity { .. } => ActionType::BuildCity,
            GameAction::BuildRoad { .. } => ActionType::BuildRoad,
            GameAction::PlayKnightCard { .. } => ActionType::PlayKnightCard,
            GameAction::PlayRoadBuilding { .. } => ActionType::PlayRoadBuilding,
            GameAction::PlayMonopoly { .. } => ActionType::PlayMonopoly,
            GameAction::PlayYearOfPlenty { .. } => ActionType::PlayYearOfPlenty,
            GameAction::MoveRobber { .. } => ActionType::MoveRobber,
            GameAction::MaritimeTrade { .. } => ActionType::MaritimeTrade,
            GameAction::EndTurn { .. } => ActionType::EndTurn,
        }
    }

    /// Target node for settlement/city builds.
    pub fn node_id(&self) -> Option<NodeId> {
        match *self {
            GameAction::BuildSettlement { node, .. } | GameAction::BuildCity { node, .. } => {
                Some(node)
            }
            _ => None,
        }
    }

    /// Target edge for road builds.
    pub fn edge_id(&self) -> Option<EdgeId> {
        match *self {
            GameAction::BuildRoad { edge, .. } => Some(edge),
            _ => None,
        }
    }
}

impl Serialize for GameAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.color())?;
        seq.serialize_element(&self.action_type())?;
        match self {
            GameAction::Roll { dice, .. } => seq.serialize_element(dice)?,
            GameAction::BuildSettlement { node, .. } | GameAction::BuildCity { node, .. } => {
                seq.serialize_element(node)?
            }
            GameAction::BuildRoad { edge, .. } => seq.serialize_element(edge)?,
            GameAction::PlayMonopoly { resource, .. } => seq.serialize_element(resource)?,
            GameAction::PlayYearOfPlenty { first, second, .. } => {
                let picks: Vec<Resource> = std::iter::once(*first).chain(*second).collect();
                seq.serialize_element(&picks)?
            }
            GameAction::MoveRobber {
                coordinate,
                victim,
                stolen,
                ..
            } => seq.serialize_element(&(coordinate, victim, stolen))?,
            GameAction::MaritimeTrade { give, receive, .. } => {
                let slots: Vec<Option<Resource>> = give
                    .iter()
                    .copied()
                    .chain(std::iter::once(Some(*receive)))
                    .collect();
                seq.serialize_element(&slots)?
            }
            GameAction::Discard { .. }
            | GameAction::BuyDevelopmentCard { .. }
            | GameAction::PlayKnightCard { .. }
            | GameAction::PlayRoadBuilding { .. }
            | GameAction::EndTurn { .. } => seq.serialize_element(&Value::Null)?,
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for GameAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ActionVisitor;

        impl<'de> Visitor<'de> for ActionVisitor {
            type Value = GameAction;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [color, action_type, payload] tuple")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<GameAction, A::Error> {
                let color: Color = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let action_type: ActionType = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                // The payload element is omitted entirely for some kinds.
                let payload: Value = seq.next_element()?.unwrap_or(Value::Null);
                decode_payload(color, action_type, payload).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_seq(ActionVisitor)
    }
}

fn decode_payload(
    color: Color,
    action_type: ActionType,
    payload: Value,
) -> Result<GameAction, String> {
    let type_err = |err: serde_json::Error| format!("bad {action_type} payload: {err}");
    Ok(match action_type {
        ActionType::Roll => GameAction::Roll {
            color,
            dice: serde_json::from_value(payload).map_err(type_err)?,
        },
        ActionType::Discard => GameAction::Discard { color },
        ActionType::BuyDevelopmentCard => GameAction::BuyDevelopmentCard { color },
        ActionType::BuildSettlement => GameAction::BuildSettlement {
            color,
            node: serde_json::from_value(payload).map_err(type_err)?,
        },
        ActionType::BuildCity => GameAction::BuildCity {
            color,
            node: serde_json::from_value(payload).map_err(type_err)?,
        },
        ActionType::BuildRoad => GameAction::BuildRoad {
            color,
            edge: serde_json::from_value(payload).map_err(type_err)?,
        },
        ActionType::PlayKnightCard => GameAction::PlayKnightCard { color },
        ActionType::PlayRoadBuilding => GameAction::PlayRoadBuilding { color },
        ActionType::PlayMonopoly => GameAction::PlayMonopoly {
            color,
            resource: serde_json::from_value(payload).map_err(type_err)?,
        },
        ActionType::PlayYearOfPlenty => {
            let picks: Vec<Resource> = serde_json::from_value(payload).map_err(type_err)?;
            match picks.as_slice() {
                [first] => GameAction::PlayYearOfPlenty {
                    color,
                    first: *first,
                    second: None,
                },
                [first, second] => GameAction::PlayYearOfPlenty {
                    color,
                    first: *first,
                    second: Some(*second),
                },
                _ => return Err("YEAR_OF_PLENTY expects one or two resources".to_string()),
            }
        }
        ActionType::MoveRobber => {
            // Both [coord, victim] and [coord, victim, stolen] occur.
            let mut parts: Vec<Value> = serde_json::from_value(payload).map_err(type_err)?;
            if parts.is_empty() || parts.len() > 3 {
                return Err("MOVE_ROBBER expects [coordinate, victim?, stolen?]".to_string());
            }
            while parts.len() < 3 {
                parts.push(Value::Null);
            }
            let stolen = parts.pop().unwrap_or(Value::Null);
            let victim = parts.pop().unwrap_or(Value::Null);
            let coordinate = parts.pop().unwrap_or(Value::Null);
            GameAction::MoveRobber {
                color,
                coordinate: serde_json::from_value(coordinate).map_err(type_err)?,
                victim: serde_json::from_value(victim).map_err(type_err)?,
                stolen: serde_json::from_value(stolen).map_err(type_err)?,
            }
        }
        ActionType::MaritimeTrade => {
            let slots: [Option<Resource>; 5] =
                serde_json::from_value(payload).map_err(type_err)?;
            let receive = slots[4].ok_or("MARITIME_TRADE missing received resource")?;
            GameAction::MaritimeTrade {
                color,
                give: [slots[0], slots[1], slots[2], slots[3]],
                receive,
            }
        }
        ActionType::EndTurn => GameAction::EndTurn { color },
    })
}
