//! CLI frontend for the Sorque adventure engine.

mod commands;
mod config;
mod input;
mod session;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::PlayConfig;

#[derive(Parser)]
#[command(
    name = "sorque",
    about = "Sorque: play and check room-based text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a world file
    Check {
        /// World file (.json, .yaml or .yml)
        world: PathBuf,
    },

    /// List the rooms of a world
    Rooms {
        /// World file (.json, .yaml or .yml)
        world: PathBuf,
    },

    /// Play a world, reading commands from stdin
    Play {
        /// World file (.json, .yaml or .yml)
        world: PathBuf,

        /// Room that ends the game when entered (repeatable)
        #[arg(short, long = "end", value_name = "ROOM")]
        ending: Vec<String>,

        /// File the `save` command writes to
        #[arg(short, long, value_name = "FILE")]
        save: Option<PathBuf>,

        /// Resume from the save file instead of starting fresh
        #[arg(short, long, requires = "save")]
        resume: bool,

        /// Number of transcript lines to keep
        #[arg(long, default_value = "400")]
        transcript: usize,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { world } => commands::check::run(&world),
        Commands::Rooms { world } => commands::rooms::run(&world),
        Commands::Play {
            world,
            ending,
            save,
            resume,
            transcript,
        } => {
            let mut config = PlayConfig::default()
                .with_endings(ending)
                .with_transcript_limit(transcript);
            if let Some(path) = save {
                config = config.with_save_path(path);
            }
            commands::play::run(&world, config, resume)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
