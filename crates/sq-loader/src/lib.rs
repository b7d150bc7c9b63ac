//! World loader for Sorque.
//!
//! Reads authored JSON or YAML world documents, normalises their loose typing
//! (scalar-or-list predicates, string-or-object item references, multi-key
//! effect objects), resolves the start room, and validates referential
//! integrity. The result is an immutable [`sq_core::World`] plus any
//! non-fatal [`LoadWarning`]s.

mod convert;
/// Error types for world loading.
pub mod error;
mod raw;
mod start;
mod warning;

use std::path::Path;

use serde_json::Value;
use sq_core::World;
use tracing::{debug, warn};

pub use error::{LoadError, LoadResult};
pub use warning::LoadWarning;

/// Source format of a world document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

impl Format {
    /// Guess the format from a file extension; anything but `.yaml`/`.yml`
    /// is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// A successfully loaded world.
#[derive(Debug)]
pub struct Loaded {
    /// The validated world.
    pub world: World,
    /// Problems tolerated during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Load a world file, picking the format from its extension.
pub fn load_path(path: &Path) -> LoadResult<Loaded> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading world file");
    load_str(&source, Format::from_path(path))
}

/// Load a world from source text.
pub fn load_str(source: &str, format: Format) -> LoadResult<Loaded> {
    let doc: Value = match format {
        Format::Json => serde_json::from_str(source)?,
        Format::Yaml => serde_yaml::from_str(source)?,
    };
    load_value(doc)
}

/// Load a world from an already-parsed document.
pub fn load_value(doc: Value) -> LoadResult<Loaded> {
    let Value::Object(doc) = doc else {
        return Err(LoadError::NotAMapping("the world document"));
    };

    let mut warnings = Vec::new();
    if doc.contains_key("global_interactions") {
        warnings.push(LoadWarning::global(
            "`global_interactions` are not supported; interactions belong to rooms",
        ));
    }

    let rooms = convert::room_entries(&doc)?
        .into_iter()
        .map(|(key, value)| convert::room(key, value, &mut warnings))
        .collect::<LoadResult<Vec<_>>>()?;

    let start = start::resolve(&doc, &rooms, &mut warnings)?;
    let world = World::new(rooms, start)?;

    for (room, interaction, target) in world.unknown_set_room_targets() {
        warnings.push(LoadWarning::in_room(
            room,
            format!("interaction \"{interaction}\" moves to unknown room \"{target}\"; it will do nothing"),
        ));
    }

    for warning in &warnings {
        warn!("{warning}");
    }
    debug!(
        rooms = world.room_count(),
        start = %world.start_room_id(),
        warnings = warnings.len(),
        "world loaded"
    );

    Ok(Loaded { world, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sq_core::{Direction, WorldError};
    use std::io::Write;

    const TWO_ROOMS: &str = r#"{
        "start_room": "1",
        "rooms": {
            "1": {"name": "Porch", "desc_short": "A porch.", "exits": {"south": {"to": "2"}}},
            "2": {"name": "Garden", "desc_short": "A garden.", "exits": {"north": {"to": "1"}}}
        }
    }"#;

    #[test]
    fn loads_json() {
        let loaded = load_str(TWO_ROOMS, Format::Json).unwrap();
        assert_eq!(loaded.world.room_count(), 2);
        assert_eq!(loaded.world.start_room_id().as_str(), "1");
        assert!(loaded.warnings.is_empty());
        let porch = loaded.world.room("1").unwrap();
        assert_eq!(porch.exit(&Direction::South).unwrap().to.as_str(), "2");
    }

    #[test]
    fn loads_yaml() {
        let source = r#"
start: cellar
yard:
  name: Yard
  desc_short: A yard.
  exits:
    down: { to: cellar }
cellar:
  desc_short: A cellar.
  exits:
    up: { to: yard, locked_by_flag: ladder_fixed }
  interactions:
    - id: pet_dog
      label: Pet the dog
      effects:
        - kill_player: true
          message: The dog bites you.
"#;
        let loaded = load_str(source, Format::Yaml).unwrap();
        assert_eq!(loaded.world.start_room_id().as_str(), "cellar");
        let ids: Vec<_> = loaded.world.rooms().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["yard", "cellar"]);
        let cellar = loaded.world.room("cellar").unwrap();
        assert_eq!(cellar.interactions[0].effects.len(), 1);
    }

    #[test]
    fn dangling_exit_is_fatal() {
        let source = r#"{"rooms": {"yard": {"exits": {"north": {"to": "forest"}}}}}"#;
        let err = load_str(source, Format::Json).unwrap_err();
        assert!(matches!(err, LoadError::World(WorldError::DanglingExit { .. })));
        let msg = err.to_string();
        assert!(msg.contains("yard") && msg.contains("north") && msg.contains("forest"));
    }

    #[test]
    fn empty_world_is_fatal() {
        for source in [r#"{"rooms": {}}"#, r#"{"start_room": "x"}"#, r#"{"rooms": null}"#] {
            let err = load_str(source, Format::Json).unwrap_err();
            assert!(matches!(err, LoadError::World(WorldError::NoRooms)), "{source}");
        }
    }

    #[test]
    fn non_object_document_is_fatal() {
        assert!(matches!(
            load_str("[1, 2]", Format::Json),
            Err(LoadError::NotAMapping(_))
        ));
        assert!(matches!(
            load_str("{not json", Format::Json),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn unknown_set_room_is_a_warning() {
        let source = r#"{"rooms": {"a": {"interactions": [
            {"id": "jump", "effects": [{"set_room": "void"}]}
        ]}}}"#;
        let loaded = load_str(source, Format::Json).unwrap();
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].message.contains("void"));
    }

    #[test]
    fn global_interactions_warn() {
        let source = r#"{"global_interactions": [{"id": "wait"}], "rooms": {"a": {}}}"#;
        let loaded = load_str(source, Format::Json).unwrap();
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn duplicate_interaction_is_fatal() {
        let source = r#"{"rooms": {"a": {"interactions": [{"id": "x"}, {"id": "x"}]}}}"#;
        assert!(matches!(
            load_str(source, Format::Json),
            Err(LoadError::World(WorldError::DuplicateInteraction { .. }))
        ));
    }

    #[test]
    fn load_path_picks_format_from_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "rooms:\n  only:\n    desc_short: Alone.").unwrap();
        let loaded = load_path(file.path()).unwrap();
        assert_eq!(loaded.world.start_room_id().as_str(), "only");
    }

    #[test]
    fn load_path_missing_file() {
        let err = load_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn format_from_path() {
        assert_eq!(Format::from_path(Path::new("w.YAML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("w.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("w")), Format::Json);
    }
}
