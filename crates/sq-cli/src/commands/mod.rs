pub mod check;
pub mod play;
pub mod rooms;

use std::path::Path;

use colored::Colorize;
use sq_loader::Loaded;

/// Load a world file and print its warnings.
/// Returns the loaded world, or renders the load error and fails.
fn load_world(path: &Path) -> Result<Loaded, String> {
    match sq_loader::load_path(path) {
        Ok(loaded) => {
            print_warnings(&loaded);
            Ok(loaded)
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            Err(format!("could not load '{}'", path.display()))
        }
    }
}

/// Print load warnings to stderr.
fn print_warnings(loaded: &Loaded) {
    for warning in &loaded.warnings {
        eprintln!("{}", warning.to_string().yellow());
    }
    let count = loaded.warnings.len();
    if count > 0 {
        eprintln!("  {} warning{}", count, if count == 1 { "" } else { "s" });
    }
}
