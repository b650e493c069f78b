pub mod indexer;
pub mod prompt;
pub mod store;
pub mod submit;
pub mod toolbar;

pub use indexer::{edge_actions, edge_key, node_actions, resolve_robber_target};
pub use store::{ClientEvent, ClientState, reduce};
pub use submit::{ActionSink, SubmissionGuard};
