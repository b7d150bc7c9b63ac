//! Start room resolution.

use serde_json::{Map, Value};
use sq_core::{Room, RoomId, WorldError};

use crate::warning::LoadWarning;

/// Top-level keys checked for the start room, in priority order.
const TOP_LEVEL_KEYS: &[&str] = &["start_room", "start", "startRoom"];
/// Keys checked inside `meta` after the top-level ones.
const META_KEYS: &[&str] = &["start_room", "start_room_id"];

/// Pick the start room: the first declared candidate naming an existing room,
/// else the first room in the document.
pub(crate) fn resolve(
    doc: &Map<String, Value>,
    rooms: &[Room],
    warnings: &mut Vec<LoadWarning>,
) -> Result<RoomId, WorldError> {
    let meta = doc.get("meta").and_then(Value::as_object);
    let candidates = TOP_LEVEL_KEYS
        .iter()
        .map(|key| (*key, doc.get(*key)))
        .chain(
            META_KEYS
                .iter()
                .map(|key| (*key, meta.and_then(|m| m.get(*key)))),
        );

    for (key, value) in candidates {
        let Some(candidate) = value.and_then(scalar_string) else {
            continue;
        };
        if rooms.iter().any(|r| r.id.as_str() == candidate) {
            return Ok(RoomId::new(candidate));
        }
        warnings.push(LoadWarning::global(format!(
            "start room \"{candidate}\" (from `{key}`) is not a room; ignored"
        )));
    }

    rooms
        .first()
        .map(|room| room.id.clone())
        .ok_or(WorldError::NoRooms)
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
