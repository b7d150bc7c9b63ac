//! Player state management.

use std::collections::BTreeSet;

use sq_core::{Conditions, ItemId, RoomId};

/// The mutable half of a session: where the player is and what they know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Current room.
    pub room: RoomId,
    /// Flags set so far.
    pub flags: BTreeSet<String>,
    /// Items held.
    pub inventory: BTreeSet<ItemId>,
    /// Whether a kill effect has fired since the last restart.
    pub dead: bool,
}

impl PlayerState {
    /// Fresh state in `room`.
    pub fn new(room: RoomId) -> Self {
        Self {
            room,
            flags: BTreeSet::new(),
            inventory: BTreeSet::new(),
            dead: false,
        }
    }

    /// Set a flag. Returns `false` if it was already set.
    pub fn add_flag(&mut self, flag: impl Into<String>) -> bool {
        self.flags.insert(flag.into())
    }

    /// Clear a flag. Returns `false` if it was not set.
    pub fn remove_flag(&mut self, flag: &str) -> bool {
        self.flags.remove(flag)
    }

    /// Add an item. Returns `false` if it was already held.
    pub fn add_item(&mut self, item: ItemId) -> bool {
        self.inventory.insert(item)
    }

    /// Remove an item. Returns `false` if it was not held.
    pub fn remove_item(&mut self, item: &ItemId) -> bool {
        self.inventory.remove(item)
    }

    /// Return to a fresh state in `room`.
    pub fn reset(&mut self, room: RoomId) {
        self.room = room;
        self.flags.clear();
        self.inventory.clear();
        self.dead = false;
    }
}

impl Conditions for PlayerState {
    fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    fn has_item(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }
}
