use std::fmt;

use sq_core::RoomId;

/// A tolerated authoring problem. The world still loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Room the problem was found in, if it is room-specific.
    pub room: Option<RoomId>,
    /// Human-readable description.
    pub message: String,
}

impl LoadWarning {
    pub(crate) fn in_room(room: &RoomId, message: impl Into<String>) -> Self {
        Self {
            room: Some(room.clone()),
            message: message.into(),
        }
    }

    pub(crate) fn global(message: impl Into<String>) -> Self {
        Self {
            room: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.room {
            Some(room) => write!(f, "warning: room \"{room}\": {}", self.message),
            None => write!(f, "warning: {}", self.message),
        }
    }
}
