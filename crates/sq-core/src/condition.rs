//! Visibility evaluation for interactions and description overrides.

use std::collections::BTreeSet;

use crate::id::ItemId;

/// Read access to the player facts that visibility rules inspect.
///
/// Implemented by the engine's player state; kept as a trait so the world
/// model does not depend on the engine.
pub trait Conditions {
    /// Whether a flag is currently set.
    fn has_flag(&self, flag: &str) -> bool;
    /// Whether an item is in the inventory.
    fn has_item(&self, item: &ItemId) -> bool;
}

/// The four predicate sets gating an interaction or description override.
///
/// Satisfied when every required flag and item is present and no forbidden
/// flag or item is. Empty sets impose nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    /// Flags that must all be set.
    pub require_flags: BTreeSet<String>,
    /// Flags that must all be absent.
    pub forbid_flags: BTreeSet<String>,
    /// Items that must all be held.
    pub require_items: BTreeSet<ItemId>,
    /// Items that must all be absent.
    pub forbid_items: BTreeSet<ItemId>,
}

impl Visibility {
    /// A visibility with no requirements (always satisfied).
    pub fn always() -> Self {
        Self::default()
    }

    /// Require a flag.
    pub fn requiring_flag(mut self, flag: impl Into<String>) -> Self {
        self.require_flags.insert(flag.into());
        self
    }

    /// Forbid a flag.
    pub fn forbidding_flag(mut self, flag: impl Into<String>) -> Self {
        self.forbid_flags.insert(flag.into());
        self
    }

    /// Require an item.
    pub fn requiring_item(mut self, item: impl Into<ItemId>) -> Self {
        self.require_items.insert(item.into());
        self
    }

    /// Forbid an item.
    pub fn forbidding_item(mut self, item: impl Into<ItemId>) -> Self {
        self.forbid_items.insert(item.into());
        self
    }

    /// True when no predicate set is populated.
    pub fn is_unconditional(&self) -> bool {
        self.require_flags.is_empty()
            && self.forbid_flags.is_empty()
            && self.require_items.is_empty()
            && self.forbid_items.is_empty()
    }

    /// Evaluate against the current player facts.
    pub fn is_satisfied(&self, state: &impl Conditions) -> bool {
        self.require_flags.iter().all(|f| state.has_flag(f))
            && !self.forbid_flags.iter().any(|f| state.has_flag(f))
            && self.require_items.iter().all(|i| state.has_item(i))
            && !self.forbid_items.iter().any(|i| state.has_item(i))
    }
}
