//! Game session: player state layered over a shared world.

use std::collections::BTreeSet;
use std::sync::Arc;

use sq_core::{DescriptionKind, Direction, Effect, Interaction, ItemId, Room, RoomId, World};
use tracing::{debug, trace};

use crate::compass::{self, ExitView};
use crate::config::Messages;
use crate::error::{EngineError, EngineResult};
use crate::player::PlayerState;
use crate::snapshot::Snapshot;

/// Result of performing an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Narrative to show; never empty.
    pub text: String,
    /// Whether this interaction killed the player.
    pub dead: bool,
}

/// One player's session.
///
/// The world is shared and read-only; everything mutable lives in the
/// session's [`PlayerState`] and changes only through the verbs below.
#[derive(Debug, Clone)]
pub struct Game {
    world: Arc<World>,
    start_room_id: RoomId,
    player: PlayerState,
    messages: Messages,
    last_message: String,
}

impl Game {
    /// Start a session in the world's start room.
    pub fn new(world: Arc<World>) -> Self {
        let start = world.start_room_id().clone();
        Self::starting_at(world, start)
    }

    /// Start a session in a specific room, which restart will also return to.
    pub fn at_room(world: Arc<World>, room: &str) -> EngineResult<Self> {
        let start = world
            .room(room)
            .map(|r| r.id.clone())
            .ok_or_else(|| EngineError::RoomNotFound(RoomId::new(room)))?;
        Ok(Self::starting_at(world, start))
    }

    /// Rebuild a session from a snapshot without replaying any effects.
    pub fn from_snapshot(world: Arc<World>, snapshot: &Snapshot) -> EngineResult<Self> {
        let mut game = Self::new(world);
        game.restore(snapshot)?;
        Ok(game)
    }

    fn starting_at(world: Arc<World>, start: RoomId) -> Self {
        Self {
            world,
            player: PlayerState::new(start.clone()),
            start_room_id: start,
            messages: Messages::default(),
            last_message: String::new(),
        }
    }

    /// Replace the built-in engine texts.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The shared world.
    pub fn world(&self) -> &Arc<World> {
        &self.world
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Room restart returns to.
    pub fn start_room_id(&self) -> &RoomId {
        &self.start_room_id
    }

    /// Current room ID.
    pub fn current_room_id(&self) -> &RoomId {
        &self.player.room
    }

    /// The current room.
    pub fn room(&self) -> &Room {
        current_room(&self.world, &self.player.room)
    }

    /// Flags set so far.
    pub fn flags(&self) -> &BTreeSet<String> {
        &self.player.flags
    }

    /// Items held.
    pub fn inventory(&self) -> &BTreeSet<ItemId> {
        &self.player.inventory
    }

    /// Whether the player has died since the last restart.
    pub fn is_dead(&self) -> bool {
        self.player.dead
    }

    /// Text returned by the most recent verb.
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// Short description of the current room, overrides applied.
    pub fn desc_short(&self) -> &str {
        self.room()
            .description(&self.player, DescriptionKind::Short)
    }

    /// Long description of the current room, overrides applied.
    pub fn desc_long(&self) -> &str {
        self.room().description(&self.player, DescriptionKind::Long)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Exits of the current room in canonical compass order.
    pub fn compass(&self) -> Vec<ExitView> {
        compass::exits(self.room(), &self.player, &self.messages.compass_locked)
    }

    /// Interactions currently offered, ordered by sort key then label.
    pub fn visible_interactions(&self) -> Vec<&Interaction> {
        let mut visible: Vec<&Interaction> = self
            .room()
            .interactions
            .iter()
            .filter(|i| i.is_visible(&self.player))
            .collect();
        visible.sort_by(|a, b| a.sort.cmp(&b.sort).then_with(|| a.label.cmp(&b.label)));
        visible
    }

    // -----------------------------------------------------------------------
    // Verbs
    // -----------------------------------------------------------------------

    /// Look around: reveal the room's on-look flags and return its long text.
    pub fn look(&mut self) -> &str {
        let world = Arc::clone(&self.world);
        let room = current_room(&world, &self.player.room);
        for flag in &room.on_look_add_flags {
            if self.player.add_flag(flag.as_str()) {
                trace!(room = %room.id, flag = %flag, "flag revealed by look");
            }
        }
        self.last_message = self.desc_long().to_string();
        &self.last_message
    }

    /// Try to leave through the exit in `direction`.
    ///
    /// Returns the new room's short text, the exit's locked text, or the
    /// "can't go" message. Only a successful move changes state.
    pub fn move_to(&mut self, direction: &str) -> &str {
        let direction = Direction::parse(direction);
        let world = Arc::clone(&self.world);
        let room = current_room(&world, &self.player.room);

        self.last_message = match room.exit(&direction) {
            None => {
                debug!(room = %room.id, %direction, "no exit");
                self.messages.cant_go.clone()
            }
            Some(exit) if exit.is_locked(&self.player) => {
                debug!(room = %room.id, %direction, "exit locked");
                exit.locked_text
                    .clone()
                    .unwrap_or_else(|| self.messages.locked.clone())
            }
            Some(exit) => {
                debug!(from = %room.id, to = %exit.to, %direction, "moved");
                self.player.room = exit.to.clone();
                self.desc_short().to_string()
            }
        };
        &self.last_message
    }

    /// Perform an interaction of the current room.
    ///
    /// Unknown and currently hidden interactions both answer "nothing
    /// happens" without touching state. Otherwise every effect runs in order,
    /// even after a kill, and the player's death status becomes whether this
    /// interaction killed them.
    pub fn perform(&mut self, interaction_id: &str) -> ActionOutcome {
        let world = Arc::clone(&self.world);
        let room = current_room(&world, &self.player.room);

        let interaction = match room.interaction(interaction_id) {
            Some(i) if i.is_visible(&self.player) => i,
            _ => {
                debug!(room = %room.id, interaction = interaction_id, "interaction unavailable");
                self.last_message = self.messages.nothing_happens.clone();
                return ActionOutcome {
                    text: self.last_message.clone(),
                    dead: false,
                };
            }
        };

        let mut lines: Vec<&str> = Vec::new();
        if let Some(text) = interaction.text.as_deref().filter(|t| !t.is_empty()) {
            lines.push(text);
        }

        let mut killed = false;
        for effect in &interaction.effects {
            trace!(interaction = %interaction.id, ?effect, "applying effect");
            match effect {
                Effect::AddFlag { flag } => {
                    self.player.add_flag(flag.as_str());
                }
                Effect::RemoveFlag { flag } => {
                    self.player.remove_flag(flag);
                }
                Effect::AddItem { item } => {
                    self.player.add_item(item.clone());
                }
                Effect::RemoveItem { item } => {
                    self.player.remove_item(item);
                }
                Effect::SetRoom { room: target } => {
                    if world.contains(target.as_str()) {
                        self.player.room = target.clone();
                    } else {
                        debug!(target = %target, "set_room target missing; ignored");
                    }
                }
                Effect::KillPlayer { message } => {
                    killed = true;
                    if let Some(message) = message.as_deref().filter(|m| !m.is_empty()) {
                        lines.push(message);
                    }
                }
            }
        }

        self.player.dead = killed;
        if interaction.once {
            self.player.add_flag(interaction.done_flag());
        }

        let text = lines.join("\n").trim().to_string();
        self.last_message = if text.is_empty() {
            self.desc_short().to_string()
        } else {
            text
        };
        debug!(interaction = %interaction.id, killed, "interaction performed");

        ActionOutcome {
            text: self.last_message.clone(),
            dead: killed,
        }
    }

    /// Reset player state to the start of the game. The world is untouched.
    pub fn restart(&mut self) -> &str {
        self.player.reset(self.start_room_id.clone());
        self.last_message = self.desc_short().to_string();
        debug!(start = %self.start_room_id, "restarted");
        &self.last_message
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// Capture the resumable part of the session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            start_room_id: self.start_room_id.clone(),
            current_room_id: Some(self.player.room.clone()),
            flags: self.player.flags.clone(),
            inventory: self.player.inventory.clone(),
            dead: self.player.dead,
        }
    }

    /// Load a snapshot into this session. State is unchanged on error.
    pub fn restore(&mut self, snapshot: &Snapshot) -> EngineResult<()> {
        for room in [&snapshot.start_room_id, snapshot.resume_room()] {
            if !self.world.contains(room.as_str()) {
                return Err(EngineError::RoomNotFound(room.clone()));
            }
        }

        self.start_room_id = snapshot.start_room_id.clone();
        self.player = PlayerState {
            room: snapshot.resume_room().clone(),
            flags: snapshot.flags.clone(),
            inventory: snapshot.inventory.clone(),
            dead: snapshot.dead,
        };
        self.last_message.clear();
        debug!(room = %self.player.room, "snapshot restored");
        Ok(())
    }
}

/// The room `id` names; every path that sets the player's room validates it
/// first, so the start room is only a formality.
fn current_room<'w>(world: &'w World, id: &RoomId) -> &'w Room {
    world.room(id.as_str()).unwrap_or_else(|| world.start_room())
}
