use std::collections::{HashMap, HashSet};

use crate::effect::Effect;
use crate::error::{WorldError, WorldResult};
use crate::id::RoomId;
use crate::room::Room;

/// The validated room registry. Immutable once built.
///
/// Construction checks referential integrity, so every exit target and the
/// start room are guaranteed to exist. Share it between sessions behind an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct World {
    rooms: Vec<Room>,
    start: usize,

    // Indexes
    by_id: HashMap<RoomId, usize>,
}

impl World {
    /// Build a world from rooms in authored order.
    pub fn new(rooms: Vec<Room>, start_room: RoomId) -> WorldResult<Self> {
        if rooms.is_empty() {
            return Err(WorldError::NoRooms);
        }

        let mut by_id = HashMap::with_capacity(rooms.len());
        for (index, room) in rooms.iter().enumerate() {
            if by_id.insert(room.id.clone(), index).is_some() {
                return Err(WorldError::DuplicateRoom(room.id.clone()));
            }
        }

        let start = *by_id
            .get(&start_room)
            .ok_or(WorldError::UnknownStartRoom(start_room))?;

        for room in &rooms {
            let mut directions = HashSet::new();
            for exit in &room.exits {
                if !directions.insert(&exit.direction) {
                    return Err(WorldError::DuplicateExit {
                        room: room.id.clone(),
                        direction: exit.direction.clone(),
                    });
                }
                if !by_id.contains_key(&exit.to) {
                    return Err(WorldError::DanglingExit {
                        room: room.id.clone(),
                        direction: exit.direction.clone(),
                        target: exit.to.clone(),
                    });
                }
            }

            let mut ids = HashSet::new();
            for interaction in &room.interactions {
                if !ids.insert(interaction.id.as_str()) {
                    return Err(WorldError::DuplicateInteraction {
                        room: room.id.clone(),
                        interaction: interaction.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            rooms,
            start,
            by_id,
        })
    }

    /// ID of the room new sessions start in.
    pub fn start_room_id(&self) -> &RoomId {
        &self.rooms[self.start].id
    }

    /// The room new sessions start in.
    pub fn start_room(&self) -> &Room {
        &self.rooms[self.start]
    }

    /// Look up a room.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.by_id.get(id).map(|&index| &self.rooms[index])
    }

    /// Whether a room exists.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All rooms in authored order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// `set_room` effects whose target does not exist, as
    /// `(room, interaction, target)`.
    ///
    /// These are tolerated at run time (the effect does nothing) but usually
    /// indicate an authoring mistake.
    pub fn unknown_set_room_targets(&self) -> Vec<(&RoomId, &str, &RoomId)> {
        let mut found = Vec::new();
        for room in &self.rooms {
            for interaction in &room.interactions {
                for effect in &interaction.effects {
                    if let Effect::SetRoom { room: target } = effect {
                        if !self.contains(target.as_str()) {
                            found.push((&room.id, interaction.id.as_str(), target));
                        }
                    }
                }
            }
        }
        found
    }
}
