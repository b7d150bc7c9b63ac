//! Normalisation of the raw document into world model types.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use sq_core::{
    DescriptionOverride, Direction, Effect, Exit, Interaction, ItemId, Room, RoomId, Visibility,
};

use crate::error::{LoadError, LoadResult};
use crate::raw::{
    ItemRef, OneOrMany, RawEffect, RawExit, RawInteraction, RawOverride, RawRoom, RawVisibility,
    Scalar, truthy,
};
use crate::warning::LoadWarning;

/// Label used when an interaction has none.
const DEFAULT_LABEL: &str = "Interact";

/// The room entries of a document, in document order.
///
/// Rooms live under `rooms` when present; otherwise every top-level mapping
/// except `meta` is a room.
pub(crate) fn room_entries(doc: &Map<String, Value>) -> LoadResult<Vec<(&str, &Value)>> {
    match doc.get("rooms") {
        Some(Value::Object(rooms)) => Ok(rooms.iter().map(|(k, v)| (k.as_str(), v)).collect()),
        Some(Value::Null) => Ok(Vec::new()),
        Some(_) => Err(LoadError::NotAMapping("`rooms`")),
        None => Ok(doc
            .iter()
            .filter(|(key, value)| key.as_str() != "meta" && value.is_object())
            .map(|(k, v)| (k.as_str(), v))
            .collect()),
    }
}

/// Build one room from its document entry.
pub(crate) fn room(key: &str, value: &Value, warnings: &mut Vec<LoadWarning>) -> LoadResult<Room> {
    let raw: RawRoom = serde_json::from_value(value.clone()).map_err(|source| LoadError::Room {
        room: key.to_string(),
        source,
    })?;

    let id = raw
        .id
        .map(Scalar::into_string)
        .map(RoomId::new)
        .unwrap_or_else(|| RoomId::new(key));

    let mut room = Room::new(id.clone());
    room.name = raw.name;
    room.desc_short = raw.desc_short.unwrap_or_default();
    room.desc_long = raw.desc_long.unwrap_or_default();
    room.on_look_add_flags = flag_set(raw.on_look_add_flags);

    for (direction, exit) in raw.exits.unwrap_or_default() {
        let raw_exit: RawExit =
            serde_json::from_value(exit).map_err(|source| LoadError::Exit {
                room: key.to_string(),
                direction: direction.clone(),
                source,
            })?;
        room.exits.push(self::exit(&direction, raw_exit));
    }

    for raw_interaction in raw.interactions.unwrap_or_default() {
        room.interactions
            .push(interaction(&id, raw_interaction, warnings));
    }

    for raw_override in raw.desc_overrides.unwrap_or_default() {
        room.desc_overrides
            .push(description_override(&id, raw_override, warnings));
    }
    let shadowing = room
        .desc_overrides
        .iter()
        .position(|o| o.visibility.is_unconditional());
    if let Some(index) = shadowing.filter(|i| i + 1 < room.desc_overrides.len()) {
        warnings.push(LoadWarning::in_room(
            &id,
            format!(
                "description override #{} has no conditions; the overrides after it never apply",
                index + 1
            ),
        ));
    }

    Ok(room)
}

fn exit(direction: &str, raw: RawExit) -> Exit {
    Exit {
        direction: Direction::parse(direction),
        to: RoomId::new(raw.to.into_string()),
        locked_by_item: raw.locked_by_item.map(ItemRef::into_item),
        locked_by_flag: raw.locked_by_flag.map(Scalar::into_string),
        locked_text: raw.locked_text,
        label: raw.label,
    }
}

fn interaction(room: &RoomId, raw: RawInteraction, warnings: &mut Vec<LoadWarning>) -> Interaction {
    let id = raw.id.into_string();
    let mut effects = Vec::new();
    for (index, raw_effect) in raw.effects.unwrap_or_default().into_iter().enumerate() {
        let expanded = self::effects(raw_effect);
        if expanded.is_empty() {
            warnings.push(LoadWarning::in_room(
                room,
                format!("interaction \"{id}\": effect #{} has no recognised key; skipped", index + 1),
            ));
        }
        effects.extend(expanded);
    }

    Interaction {
        label: raw.label.unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        text: raw.text,
        once: raw.once.unwrap_or(false),
        visibility: visibility(raw.visibility),
        effects,
        sort: raw.sort.unwrap_or(0),
        id,
    }
}

/// Expand one effect object into effects, in fixed key order.
fn effects(raw: RawEffect) -> Vec<Effect> {
    let mut out = Vec::new();
    if let Some(flag) = raw.add_flag {
        out.push(Effect::AddFlag {
            flag: flag.into_string(),
        });
    }
    if let Some(flag) = raw.remove_flag {
        out.push(Effect::RemoveFlag {
            flag: flag.into_string(),
        });
    }
    if let Some(item) = raw.add_item {
        out.push(Effect::AddItem {
            item: item.into_item(),
        });
    }
    if let Some(item) = raw.remove_item {
        out.push(Effect::RemoveItem {
            item: item.into_item(),
        });
    }
    if let Some(room) = raw.set_room {
        out.push(Effect::SetRoom {
            room: RoomId::new(room.into_string()),
        });
    }
    if raw.kill_player.as_ref().is_some_and(truthy) {
        out.push(Effect::KillPlayer {
            message: raw.message,
        });
    }
    out
}

fn description_override(
    room: &RoomId,
    raw: RawOverride,
    warnings: &mut Vec<LoadWarning>,
) -> DescriptionOverride {
    if raw.short.is_none() && raw.long.is_none() {
        warnings.push(LoadWarning::in_room(
            room,
            "description override has neither `short` nor `long` text",
        ));
    }
    if raw.priority.is_some_and(|p| p != 0) {
        warnings.push(LoadWarning::in_room(
            room,
            "description override `priority` is ignored; overrides apply in list order",
        ));
    }
    DescriptionOverride {
        short: raw.short,
        long: raw.long,
        visibility: visibility(raw.visibility),
    }
}

fn visibility(raw: RawVisibility) -> Visibility {
    Visibility {
        require_flags: flag_set(raw.visible_if_flags),
        forbid_flags: flag_set(raw.visible_if_not_flags),
        require_items: item_set(raw.visible_if_items),
        forbid_items: item_set(raw.visible_if_not_items),
    }
}

fn flag_set(raw: Option<OneOrMany<Scalar>>) -> BTreeSet<String> {
    raw.map(OneOrMany::into_vec)
        .unwrap_or_default()
        .into_iter()
        .map(Scalar::into_string)
        .filter(|f| !f.is_empty())
        .collect()
}

fn item_set(raw: Option<OneOrMany<ItemRef>>) -> BTreeSet<ItemId> {
    raw.map(OneOrMany::into_vec)
        .unwrap_or_default()
        .into_iter()
        .map(ItemRef::into_item)
        .filter(|i| !i.as_str().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn load_room(value: Value) -> (Room, Vec<LoadWarning>) {
        let mut warnings = Vec::new();
        let room = room("key", &value, &mut warnings).unwrap();
        (room, warnings)
    }

    #[test]
    fn room_id_defaults_to_key() {
        let (room, _) = load_room(json!({"name": "Yard"}));
        assert_eq!(room.id.as_str(), "key");
        assert_eq!(room.name.as_deref(), Some("Yard"));
        assert_eq!(room.desc_short, "");
    }

    #[test]
    fn explicit_room_id_overrides_key() {
        let (room, _) = load_room(json!({"id": 7}));
        assert_eq!(room.id.as_str(), "7");
    }

    #[test]
    fn scalar_or_list_predicates() {
        let (room, _) = load_room(json!({
            "on_look_add_flags": "saw_glint",
            "interactions": [{
                "id": "x",
                "visible_if_flags": ["a", "b"],
                "visible_if_not_items": "hatchet",
                "visible_if_items": [{"id": "lamp", "hidden": true}, "rope"]
            }]
        }));
        assert!(room.on_look_add_flags.contains("saw_glint"));
        let vis = &room.interactions[0].visibility;
        assert_eq!(vis.require_flags.len(), 2);
        assert!(vis.forbid_items.contains("hatchet"));
        assert!(vis.require_items.contains("lamp"));
        assert!(vis.require_items.contains("rope"));
    }

    #[test]
    fn interaction_defaults() {
        let (room, _) = load_room(json!({"interactions": [{"id": "poke"}]}));
        let it = &room.interactions[0];
        assert_eq!(it.label, "Interact");
        assert!(!it.once);
        assert_eq!(it.sort, 0);
        assert!(it.effects.is_empty());
        assert!(it.visibility.is_unconditional());
    }

    #[test]
    fn effect_keys_expand_in_fixed_order() {
        let (room, warnings) = load_room(json!({"interactions": [{
            "id": "combo",
            "effects": [
                {"kill_player": true, "message": "Ouch.", "add_item": "scar", "add_flag": "hurt"},
                {"set_room": "cellar"},
                {"remove_flag": "hurt", "remove_item": {"id": "scar"}},
                {"kill_player": false},
                {"kill_player": true}
            ]
        }]}));
        assert_eq!(
            room.interactions[0].effects,
            vec![
                Effect::add_flag("hurt"),
                Effect::add_item("scar"),
                Effect::kill(Some("Ouch.")),
                Effect::set_room("cellar"),
                Effect::remove_flag("hurt"),
                Effect::remove_item("scar"),
                Effect::kill(None),
            ]
        );
        // `{"kill_player": false}` does nothing
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("effect #4"));
    }

    #[test]
    fn exits_keep_document_order_and_normalise_directions() {
        let (room, _) = load_room(json!({"exits": {
            "south": {"to": "yard"},
            "N": {"to": "forest", "locked_by_item": {"id": "hatchet"}, "locked_text": "Brambles."},
            "portal": {"to": 2, "label": "Step through", "locked_by_flag": "charged"}
        }}));
        let dirs: Vec<_> = room.exits.iter().map(|e| e.direction.clone()).collect();
        assert_eq!(
            dirs,
            vec![
                Direction::South,
                Direction::North,
                Direction::Custom("portal".to_string())
            ]
        );
        assert_eq!(room.exits[1].locked_by_item, Some(ItemId::new("hatchet")));
        assert_eq!(room.exits[2].to.as_str(), "2");
        assert_eq!(room.exits[2].locked_by_flag.as_deref(), Some("charged"));
    }

    #[test]
    fn malformed_exit_names_room_and_direction() {
        let mut warnings = Vec::new();
        let err = room("yard", &json!({"exits": {"north": {"locked_text": "x"}}}), &mut warnings)
            .unwrap_err();
        assert!(matches!(
            &err,
            LoadError::Exit { room, direction, .. } if room == "yard" && direction == "north"
        ));
    }

    #[test]
    fn malformed_room_is_error() {
        let mut warnings = Vec::new();
        let err = room("yard", &json!({"interactions": "nope"}), &mut warnings).unwrap_err();
        assert!(matches!(err, LoadError::Room { .. }));
    }

    #[test]
    fn override_warnings() {
        let (room, warnings) = load_room(json!({"desc_overrides": [
            {"visible_if_flags": "x"},
            {"short": "Lit.", "priority": 5}
        ]}));
        assert_eq!(room.desc_overrides.len(), 2);
        assert_eq!(warnings.len(), 2);
        assert_eq!(room.desc_overrides[1].short.as_deref(), Some("Lit."));
    }

    #[test]
    fn unconditional_override_shadows_later_ones() {
        let (_, warnings) = load_room(json!({"desc_overrides": [
            {"short": "Always."},
            {"short": "Lit.", "visible_if_flags": "lamp_on"}
        ]}));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("override #1"));

        // Last in the list: nothing to shadow
        let (_, warnings) = load_room(json!({"desc_overrides": [
            {"short": "Lit.", "visible_if_flags": "lamp_on"},
            {"short": "Otherwise."}
        ]}));
        assert!(warnings.is_empty());
    }

    #[test]
    fn top_level_rooms_skip_meta_and_scalars() {
        let doc = json!({
            "start_room": "a",
            "meta": {"title": "x"},
            "a": {"desc_short": "A"},
            "b": {"desc_short": "B"}
        });
        let map = doc.as_object().unwrap();
        let keys: Vec<_> = room_entries(map).unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn rooms_must_be_a_mapping() {
        let doc = json!({"rooms": ["a", "b"]});
        assert!(matches!(
            room_entries(doc.as_object().unwrap()),
            Err(LoadError::NotAMapping(_))
        ));
    }
}
