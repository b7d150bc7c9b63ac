//! Core types for Sorque: rooms, exits, interactions, and the world registry.
//!
//! This crate defines the immutable data model that the loader produces and
//! the engine consumes. It is independent of any file format: you can build a
//! [`World`] programmatically with the builder methods on [`Room`] and friends.

/// Visibility predicates shared by interactions and description overrides.
pub mod condition;
/// Compass directions for exits.
pub mod direction;
/// State mutations applied by interactions.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Identifier newtypes.
pub mod id;
/// Rooms, exits, interactions, and description overrides.
pub mod room;
/// The validated room registry.
pub mod world;

pub use condition::{Conditions, Visibility};
pub use direction::Direction;
pub use effect::Effect;
pub use error::{WorldError, WorldResult};
pub use id::{ItemId, RoomId};
pub use room::{DescriptionKind, DescriptionOverride, Exit, Interaction, Room};
pub use world::World;
