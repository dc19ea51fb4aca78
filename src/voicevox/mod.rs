//! VOICEVOX engine adapter: the accent-phrase schema and the projection
//! from the prosodic tree into it.

mod project;
mod schema;

pub use project::{project_utterance, Projection};
pub use schema::{AccentPhrase, Mora};
