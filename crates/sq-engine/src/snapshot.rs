use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sq_core::{ItemId, RoomId};

/// Everything needed to resume a session against the same world.
///
/// The last message is UI-only and deliberately not captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Room restart returns to.
    pub start_room_id: RoomId,
    /// Room the player is in; the start room when absent.
    #[serde(default)]
    pub current_room_id: Option<RoomId>,
    /// Flags, serialized in sorted order.
    #[serde(default)]
    pub flags: BTreeSet<String>,
    /// Inventory, serialized in sorted order.
    #[serde(default)]
    pub inventory: BTreeSet<ItemId>,
    /// Death status.
    #[serde(default)]
    pub dead: bool,
}

impl Snapshot {
    /// Room the player should resume in.
    pub fn resume_room(&self) -> &RoomId {
        self.current_room_id.as_ref().unwrap_or(&self.start_room_id)
    }
}
