use std::collections::BTreeSet;

use crate::condition::{Conditions, Visibility};
use crate::direction::Direction;
use crate::effect::Effect;
use crate::id::{ItemId, RoomId};

/// Which of a room's two descriptions to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionKind {
    /// One-line text shown on arrival.
    Short,
    /// Full text shown on look.
    Long,
}

/// A directional, possibly locked, edge to another room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Direction key within the owning room.
    pub direction: Direction,
    /// Target room.
    pub to: RoomId,
    /// Item that must be held to pass.
    pub locked_by_item: Option<ItemId>,
    /// Flag that must be set to pass.
    pub locked_by_flag: Option<String>,
    /// Message shown while locked.
    pub locked_text: Option<String>,
    /// UI label; defaults to the title-cased direction.
    pub label: Option<String>,
}

impl Exit {
    /// An always-passable exit.
    pub fn new(direction: impl Into<Direction>, to: impl Into<RoomId>) -> Self {
        Self {
            direction: direction.into(),
            to: to.into(),
            locked_by_item: None,
            locked_by_flag: None,
            locked_text: None,
            label: None,
        }
    }

    /// Require an item to pass.
    pub fn locked_by_item(mut self, item: impl Into<ItemId>) -> Self {
        self.locked_by_item = Some(item.into());
        self
    }

    /// Require a flag to pass.
    pub fn locked_by_flag(mut self, flag: impl Into<String>) -> Self {
        self.locked_by_flag = Some(flag.into());
        self
    }

    /// Set the locked message.
    pub fn with_locked_text(mut self, text: impl Into<String>) -> Self {
        self.locked_text = Some(text.into());
        self
    }

    /// Set the UI label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether the item or flag lock currently blocks passage.
    pub fn is_locked(&self, state: &impl Conditions) -> bool {
        let item_missing = self
            .locked_by_item
            .as_ref()
            .is_some_and(|item| !state.has_item(item));
        let flag_missing = self
            .locked_by_flag
            .as_deref()
            .is_some_and(|flag| !state.has_flag(flag));
        item_missing || flag_missing
    }

    /// The authored label, or the title-cased direction.
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.direction.title())
    }
}

/// An authored action a player may perform in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// Stable ID, unique within the room.
    pub id: String,
    /// Menu label.
    pub label: String,
    /// Narrative shown when performed.
    pub text: Option<String>,
    /// Hide after the first successful performance.
    pub once: bool,
    /// When the interaction is offered.
    pub visibility: Visibility,
    /// Mutations applied in order.
    pub effects: Vec<Effect>,
    /// Menu ordering key; ties broken by label.
    pub sort: i64,
}

impl Interaction {
    /// Create a repeatable, always-visible interaction with no effects.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            text: None,
            once: false,
            visibility: Visibility::default(),
            effects: Vec::new(),
            sort: 0,
        }
    }

    /// Set the narrative text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Make the interaction single-use.
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Set the visibility predicates.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Append an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: i64) -> Self {
        self.sort = sort;
        self
    }

    /// Flag recording that a `once` interaction has been performed.
    pub fn done_flag(&self) -> String {
        format!("done:{}", self.id)
    }

    /// Whether the interaction is currently offered.
    pub fn is_visible(&self, state: &impl Conditions) -> bool {
        if self.once && state.has_flag(&self.done_flag()) {
            return false;
        }
        self.visibility.is_satisfied(state)
    }
}

/// A conditional replacement for a room's description text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionOverride {
    /// Replacement short text.
    pub short: Option<String>,
    /// Replacement long text.
    pub long: Option<String>,
    /// When the override applies.
    pub visibility: Visibility,
}

impl DescriptionOverride {
    /// An override that applies when `visibility` holds.
    pub fn when(visibility: Visibility) -> Self {
        Self {
            short: None,
            long: None,
            visibility,
        }
    }

    /// Set the short text.
    pub fn with_short(mut self, text: impl Into<String>) -> Self {
        self.short = Some(text.into());
        self
    }

    /// Set the long text.
    pub fn with_long(mut self, text: impl Into<String>) -> Self {
        self.long = Some(text.into());
        self
    }

    /// The replacement for `kind`, if this override carries one.
    pub fn text(&self, kind: DescriptionKind) -> Option<&str> {
        match kind {
            DescriptionKind::Short => self.short.as_deref(),
            DescriptionKind::Long => self.long.as_deref(),
        }
        .filter(|t| !t.is_empty())
    }
}

/// A node in the world graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique key.
    pub id: RoomId,
    /// Display name.
    pub name: Option<String>,
    /// Text shown on arrival.
    pub desc_short: String,
    /// Text shown on look.
    pub desc_long: String,
    /// Exits in authored order.
    pub exits: Vec<Exit>,
    /// Interactions in authored order.
    pub interactions: Vec<Interaction>,
    /// Flags set whenever the player looks around.
    pub on_look_add_flags: BTreeSet<String>,
    /// Conditional descriptions; the first visible one wins.
    pub desc_overrides: Vec<DescriptionOverride>,
}

impl Room {
    /// Create an empty room.
    pub fn new(id: impl Into<RoomId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            desc_short: String::new(),
            desc_long: String::new(),
            exits: Vec::new(),
            interactions: Vec::new(),
            on_look_add_flags: BTreeSet::new(),
            desc_overrides: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set both base descriptions.
    pub fn with_descriptions(mut self, short: impl Into<String>, long: impl Into<String>) -> Self {
        self.desc_short = short.into();
        self.desc_long = long.into();
        self
    }

    /// Add an exit.
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.exits.push(exit);
        self
    }

    /// Add an interaction.
    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interactions.push(interaction);
        self
    }

    /// Add a flag set on look.
    pub fn with_look_flag(mut self, flag: impl Into<String>) -> Self {
        self.on_look_add_flags.insert(flag.into());
        self
    }

    /// Add a description override.
    pub fn with_override(mut self, desc_override: DescriptionOverride) -> Self {
        self.desc_overrides.push(desc_override);
        self
    }

    /// Display name, falling back to the ID.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }

    /// The exit in `direction`, if any.
    pub fn exit(&self, direction: &Direction) -> Option<&Exit> {
        self.exits.iter().find(|e| &e.direction == direction)
    }

    /// The interaction with `id`, if any, regardless of visibility.
    pub fn interaction(&self, id: &str) -> Option<&Interaction> {
        self.interactions.iter().find(|i| i.id == id)
    }

    /// Render a description, applying the first visible override.
    ///
    /// When the winning override lacks text for `kind`, the base text is used.
    pub fn description(&self, state: &impl Conditions, kind: DescriptionKind) -> &str {
        let base = match kind {
            DescriptionKind::Short => self.desc_short.as_str(),
            DescriptionKind::Long => self.desc_long.as_str(),
        };
        self.desc_overrides
            .iter()
            .find(|ov| ov.visibility.is_satisfied(state))
            .and_then(|ov| ov.text(kind))
            .unwrap_or(base)
    }
}
