//! Fixed texts the engine answers with.

/// Messages for the engine's built-in outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Reply when no exit leads in the requested direction.
    pub cant_go: String,
    /// Reply when an interaction is unknown or not currently visible.
    pub nothing_happens: String,
    /// Reply when moving through a locked exit without authored text.
    pub locked: String,
    /// Locked text reported by the compass when the exit has none.
    pub compass_locked: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            cant_go: "You can't go that way.".to_string(),
            nothing_happens: "Nothing happens.".to_string(),
            locked: "It's stuck. You can't force it.".to_string(),
            compass_locked: "It's stuck. You'll need something to pry it open.".to_string(),
        }
    }
}

impl Messages {
    /// Set the reply for missing exits.
    pub fn with_cant_go(mut self, text: impl Into<String>) -> Self {
        self.cant_go = text.into();
        self
    }

    /// Set the reply for unavailable interactions.
    pub fn with_nothing_happens(mut self, text: impl Into<String>) -> Self {
        self.nothing_happens = text.into();
        self
    }

    /// Set the default locked reply for moves.
    pub fn with_locked(mut self, text: impl Into<String>) -> Self {
        self.locked = text.into();
        self
    }

    /// Set the default locked text for compass entries.
    pub fn with_compass_locked(mut self, text: impl Into<String>) -> Self {
        self.compass_locked = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_messages() {
        let msgs = Messages::default();
        assert_eq!(msgs.cant_go, "You can't go that way.");
        assert_eq!(msgs.nothing_happens, "Nothing happens.");
    }

    #[test]
    fn builder_methods() {
        let msgs = Messages::default()
            .with_cant_go("No.")
            .with_locked("Locked.");
        assert_eq!(msgs.cant_go, "No.");
        assert_eq!(msgs.locked, "Locked.");
        assert_eq!(msgs.nothing_happens, "Nothing happens.");
    }
}
