#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

//! Core of a browser Catan client: hex-grid pixel geometry, the local
//! interaction-mode state machine, and the indexing that turns the server's
//! playable actions into clickable board elements. Rendering and networking
//! live elsewhere; this crate only computes.

pub mod coords;
pub mod game;
pub mod layout;
pub mod types;
pub mod ui;

pub use coords::{CubeCoord, SQRT3, cube_to_axial, tile_pixel_vector};
pub use game::{EdgeId, GameAction, GameState, NodeId};
pub use layout::{EdgeTransform, LayoutError, compute_hex_size, edge_transform, node_delta};
pub use types::{ActionPrompt, ActionType, BuildingKind, Color, Direction, Resource};
pub use ui::store::{ClientEvent, ClientState, reduce};
