//! Error types for world loading.

use std::path::PathBuf;

use miette::Diagnostic;
use sq_core::WorldError;
use thiserror::Error;

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Fatal problems that prevent a world from being built.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    /// The world file could not be read.
    #[error("cannot read {}", path.display())]
    #[diagnostic(code(sorque::load::io))]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("invalid JSON: {0}")]
    #[diagnostic(code(sorque::load::json))]
    Json(#[from] serde_json::Error),

    /// The document is not valid YAML.
    #[error("invalid YAML: {0}")]
    #[diagnostic(code(sorque::load::yaml))]
    Yaml(#[from] serde_yaml::Error),

    /// The top level (or its `rooms` entry) is not a mapping.
    #[error("{0} must be a mapping of room id to room")]
    #[diagnostic(
        code(sorque::load::shape),
        help("put rooms under a top-level `rooms` key, or key them by id at top level")
    )]
    NotAMapping(&'static str),

    /// A room entry has the wrong shape.
    #[error("room \"{room}\" is malformed: {source}")]
    #[diagnostic(code(sorque::load::room))]
    Room {
        /// Key of the offending room.
        room: String,
        /// What serde rejected.
        #[source]
        source: serde_json::Error,
    },

    /// An exit entry has the wrong shape.
    #[error("exit {direction} in room \"{room}\" is malformed: {source}")]
    #[diagnostic(
        code(sorque::load::exit),
        help("each exit needs a `to` room id; lock fields are optional")
    )]
    Exit {
        /// Owning room.
        room: String,
        /// Exit key.
        direction: String,
        /// What serde rejected.
        #[source]
        source: serde_json::Error,
    },

    /// The rooms do not form a valid world.
    #[error(transparent)]
    #[diagnostic(
        code(sorque::load::integrity),
        help("every exit must lead to a room defined in the same file")
    )]
    World(#[from] WorldError),
}
