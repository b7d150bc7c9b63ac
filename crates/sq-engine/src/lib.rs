//! Game engine for Sorque.
//!
//! Wraps a shared, immutable [`sq_core::World`] with per-session player state
//! and exposes the verbs a presentation layer drives: look, move, perform an
//! interaction, and restart. Query methods ([`Game::compass`],
//! [`Game::visible_interactions`]) compute the next menu without mutating
//! anything. Endings are not modelled here; callers watch
//! [`Game::is_dead`] and the current room.

/// Exit descriptors for compass menus.
pub mod compass;
/// Fixed engine texts.
pub mod config;
/// Error types for the engine.
pub mod error;
/// The game session and its verbs.
pub mod game;
/// Player state management.
pub mod player;
/// Serializable session snapshots.
pub mod snapshot;

pub use compass::ExitView;
pub use config::Messages;
pub use error::{EngineError, EngineResult};
pub use game::{ActionOutcome, Game};
pub use player::PlayerState;
pub use snapshot::Snapshot;
