use serde::Serialize;
use sq_core::{Conditions, Direction, Room, RoomId};

/// UI-facing description of one exit from the current room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitView {
    /// Direction key.
    pub direction: Direction,
    /// Button label.
    pub label: String,
    /// Target room.
    pub target: RoomId,
    /// Whether the exit is currently blocked.
    pub locked: bool,
    /// Text to show if the player tries a locked exit.
    pub locked_message: String,
}

/// Describe a room's exits in canonical compass order.
///
/// Custom directions follow the compass ones in authored order.
pub(crate) fn exits(room: &Room, state: &impl Conditions, default_locked: &str) -> Vec<ExitView> {
    let mut views: Vec<ExitView> = room
        .exits
        .iter()
        .map(|exit| ExitView {
            direction: exit.direction.clone(),
            label: exit.display_label(),
            target: exit.to.clone(),
            locked: exit.is_locked(state),
            locked_message: exit
                .locked_text
                .clone()
                .unwrap_or_else(|| default_locked.to_string()),
        })
        .collect();
    views.sort_by_key(|view| view.direction.compass_rank().unwrap_or(usize::MAX));
    views
}
