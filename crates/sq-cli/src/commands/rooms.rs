use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: &Path) -> Result<(), String> {
    let loaded = super::load_world(path)?;
    let world = &loaded.world;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Exits", "Actions", "Description"]);

    for room in world.rooms() {
        let desc = if room.desc_short.chars().count() > 60 {
            let cut: String = room.desc_short.chars().take(57).collect();
            format!("{cut}...")
        } else if room.desc_short.is_empty() {
            "-".to_string()
        } else {
            room.desc_short.clone()
        };

        let id = if *world.start_room_id() == room.id {
            format!("{} (start)", room.id)
        } else {
            room.id.to_string()
        };

        table.add_row(vec![
            id,
            room.name.clone().unwrap_or_else(|| "-".to_string()),
            room.exits.len().to_string(),
            room.interactions.len().to_string(),
            desc,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", world.room_count());

    Ok(())
}
