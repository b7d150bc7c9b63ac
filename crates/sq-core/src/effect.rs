//! Effects that modify player state.

use crate::id::{ItemId, RoomId};

/// A single state mutation performed by an interaction.
///
/// Effects run in list order with no rollback, so a later effect always
/// observes (and may override) an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Set a flag.
    AddFlag {
        /// Flag name.
        flag: String,
    },
    /// Clear a flag.
    RemoveFlag {
        /// Flag name.
        flag: String,
    },
    /// Put an item in the inventory.
    AddItem {
        /// Item ID.
        item: ItemId,
    },
    /// Take an item out of the inventory.
    RemoveItem {
        /// Item ID.
        item: ItemId,
    },
    /// Move the player. Ignored when the room does not exist.
    SetRoom {
        /// Target room.
        room: RoomId,
    },
    /// Kill the player. Death stays set until restart.
    KillPlayer {
        /// Narrative appended to the interaction's output.
        message: Option<String>,
    },
}

impl Effect {
    /// Shorthand for [`Effect::AddFlag`].
    pub fn add_flag(flag: impl Into<String>) -> Self {
        Self::AddFlag { flag: flag.into() }
    }

    /// Shorthand for [`Effect::RemoveFlag`].
    pub fn remove_flag(flag: impl Into<String>) -> Self {
        Self::RemoveFlag { flag: flag.into() }
    }

    /// Shorthand for [`Effect::AddItem`].
    pub fn add_item(item: impl Into<ItemId>) -> Self {
        Self::AddItem { item: item.into() }
    }

    /// Shorthand for [`Effect::RemoveItem`].
    pub fn remove_item(item: impl Into<ItemId>) -> Self {
        Self::RemoveItem { item: item.into() }
    }

    /// Shorthand for [`Effect::SetRoom`].
    pub fn set_room(room: impl Into<RoomId>) -> Self {
        Self::SetRoom { room: room.into() }
    }

    /// Shorthand for [`Effect::KillPlayer`].
    pub fn kill(message: Option<&str>) -> Self {
        Self::KillPlayer {
            message: message.map(str::to_string),
        }
    }
}
