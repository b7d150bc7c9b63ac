use std::path::Path;

use colored::Colorize;

pub fn run(path: &Path) -> Result<(), String> {
    let loaded = super::load_world(path)?;
    let world = &loaded.world;

    println!("  {} '{}'.", "All checks passed for".green(), path.display());
    println!(
        "  {} rooms, start room '{}'",
        world.room_count(),
        world.start_room_id()
    );

    Ok(())
}
