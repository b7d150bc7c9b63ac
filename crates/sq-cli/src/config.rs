//! Configuration for a play session.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Configuration for a play session.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Rooms that end the game when entered.
    pub endings: BTreeSet<String>,
    /// Maximum number of transcript lines kept.
    pub transcript_limit: usize,
    /// Where `save` writes the snapshot.
    pub save_path: Option<PathBuf>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            endings: BTreeSet::new(),
            transcript_limit: 400,
            save_path: None,
        }
    }
}

impl PlayConfig {
    /// Add ending rooms.
    pub fn with_endings<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endings.extend(rooms.into_iter().map(Into::into));
        self
    }

    /// Set the transcript limit (at least one line).
    pub fn with_transcript_limit(mut self, lines: usize) -> Self {
        self.transcript_limit = lines.max(1);
        self
    }

    /// Set the snapshot file.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    /// Whether entering `room` ends the game.
    pub fn is_ending(&self, room: &str) -> bool {
        self.endings.contains(room)
    }

    /// The snapshot file, if one is configured.
    pub fn save_path(&self) -> Option<&Path> {
        self.save_path.as_deref()
    }
}
