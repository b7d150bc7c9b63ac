//! Error types for the engine.

use sq_core::RoomId;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised when placing a session somewhere the world cannot support.
///
/// Verbs never fail: blocked moves and unavailable interactions are ordinary
/// outcomes reported through their return text.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A room referenced by the caller or a snapshot does not exist.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),
}
