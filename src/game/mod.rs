pub mod action;
pub mod state;

pub use action::{EdgeId, GameAction, NodeId};
pub use state::{Edge, GameState, Node, PlacedTile, PlayerSnapshot, Tile};
