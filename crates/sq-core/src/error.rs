use crate::direction::Direction;
use crate::id::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Integrity violations detected while assembling a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The world has no rooms at all.
    #[error("world has no rooms; cannot determine a start room")]
    NoRooms,

    /// Two rooms share an ID.
    #[error("duplicate room id \"{0}\"")]
    DuplicateRoom(RoomId),

    /// The start room is not in the registry.
    #[error("start room \"{0}\" not in rooms")]
    UnknownStartRoom(RoomId),

    /// An exit points at a room that does not exist.
    #[error("exit {direction} from room \"{room}\" leads to unknown room \"{target}\"")]
    DanglingExit {
        /// Room owning the exit.
        room: RoomId,
        /// Exit direction.
        direction: Direction,
        /// The missing target.
        target: RoomId,
    },

    /// A room declares two exits in the same direction.
    #[error("room \"{room}\" has more than one exit {direction}")]
    DuplicateExit {
        /// Room owning the exits.
        room: RoomId,
        /// The repeated direction.
        direction: Direction,
    },

    /// Interaction IDs must be unique within their room.
    #[error("room \"{room}\" has more than one interaction with id \"{interaction}\"")]
    DuplicateInteraction {
        /// Room owning the interactions.
        room: RoomId,
        /// The repeated interaction ID.
        interaction: String,
    },
}
