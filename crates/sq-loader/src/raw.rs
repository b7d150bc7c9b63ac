//! Serde shapes of the authored world format.
//!
//! These mirror what authors actually write, loose typing included. They are
//! normalised into `sq_core` types by the `convert` module and never escape
//! this crate.

use serde::Deserialize;
use serde_json::{Map, Value};
use sq_core::ItemId;

/// A scalar that should be read as a string (IDs are sometimes numbers).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    pub(crate) fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// A field that may hold one value or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(v) => v,
            OneOrMany::One(x) => vec![x],
        }
    }
}

/// An item reference: a bare ID, or an object from the older item format
/// (`{ "id": "lamp", "hidden": true }`). Extra keys are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ItemRef {
    Id(Scalar),
    Entry { id: Scalar },
}

impl ItemRef {
    pub(crate) fn into_item(self) -> ItemId {
        match self {
            ItemRef::Id(id) | ItemRef::Entry { id } => ItemId::new(id.into_string()),
        }
    }
}

/// One room entry.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRoom {
    pub id: Option<Scalar>,
    pub name: Option<String>,
    pub desc_short: Option<String>,
    pub desc_long: Option<String>,
    pub on_look_add_flags: Option<OneOrMany<Scalar>>,
    pub exits: Option<Map<String, Value>>,
    pub interactions: Option<Vec<RawInteraction>>,
    pub desc_overrides: Option<Vec<RawOverride>>,
}

/// One exit, keyed by direction in the room's `exits` map.
#[derive(Debug, Deserialize)]
pub(crate) struct RawExit {
    pub to: Scalar,
    #[serde(default)]
    pub locked_by_item: Option<ItemRef>,
    #[serde(default)]
    pub locked_by_flag: Option<Scalar>,
    #[serde(default)]
    pub locked_text: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Predicate fields shared by interactions and overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawVisibility {
    pub visible_if_flags: Option<OneOrMany<Scalar>>,
    pub visible_if_not_flags: Option<OneOrMany<Scalar>>,
    pub visible_if_items: Option<OneOrMany<ItemRef>>,
    pub visible_if_not_items: Option<OneOrMany<ItemRef>>,
}

/// One interaction.
#[derive(Debug, Deserialize)]
pub(crate) struct RawInteraction {
    pub id: Scalar,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub once: Option<bool>,
    #[serde(flatten)]
    pub visibility: RawVisibility,
    #[serde(default)]
    pub effects: Option<Vec<RawEffect>>,
    #[serde(default)]
    pub sort: Option<i64>,
}

/// One effect object. Several keys may appear together.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEffect {
    pub add_flag: Option<Scalar>,
    pub remove_flag: Option<Scalar>,
    pub add_item: Option<ItemRef>,
    pub remove_item: Option<ItemRef>,
    pub set_room: Option<Scalar>,
    pub kill_player: Option<Value>,
    pub message: Option<String>,
}

/// One description override.
#[derive(Debug, Deserialize)]
pub(crate) struct RawOverride {
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
    #[serde(flatten)]
    pub visibility: RawVisibility,
    #[serde(default)]
    pub priority: Option<i64>,
}

/// Loose truthiness for flags like `kill_player`.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
