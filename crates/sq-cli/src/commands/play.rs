//! Interactive play on stdin/stdout.

use std::io;
use std::path::Path;
use std::sync::Arc;

use sq_engine::{Game, Snapshot};

use crate::config::PlayConfig;
use crate::session::{Finish, Session};

/// Load a world and play it until the player quits, reaches an ending, or
/// input runs out.
pub fn run(path: &Path, config: PlayConfig, resume: bool) -> Result<(), String> {
    let loaded = super::load_world(path)?;
    let world = Arc::new(loaded.world);

    for room in &config.endings {
        if !world.contains(room) {
            return Err(format!("ending room '{room}' is not in the world"));
        }
    }

    let game = if resume {
        let snapshot = read_snapshot(config.save_path())?;
        Game::from_snapshot(world, &snapshot).map_err(|e| format!("cannot resume: {e}"))?
    } else {
        Game::new(world)
    };

    let mut session = Session::new(game, config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let finish = session
        .run(stdin.lock(), &mut stdout)
        .map_err(|e| format!("terminal I/O failed: {e}"))?;
    tracing::debug!(?finish, "session over");

    if let Finish::Ending(room) = finish {
        tracing::info!(%room, "ending reached");
    }
    Ok(())
}

fn read_snapshot(path: Option<&Path>) -> Result<Snapshot, String> {
    let path = path.ok_or("--resume needs --save FILE")?;
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read save file '{}': {e}", path.display()))?;
    serde_json::from_str(&json)
        .map_err(|e| format!("save file '{}' is not a snapshot: {e}", path.display()))
}
