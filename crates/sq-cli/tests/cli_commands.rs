//! Integration tests for the `sorque` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a small JSON world.
fn test_world() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("world.json"),
        r#"{
    "start_room": "porch",
    "rooms": {
        "porch": {
            "name": "Porch",
            "desc_short": "A creaky porch.",
            "desc_long": "A creaky porch. Something glints under the mat.",
            "on_look_add_flags": "saw_glint",
            "exits": {
                "north": {"to": "hall", "locked_by_item": "key", "locked_text": "The door is locked."}
            },
            "interactions": [
                {"id": "take_key", "label": "Take the key", "text": "You pocket a small key.",
                 "once": true, "visible_if_flags": "saw_glint", "effects": [{"add_item": "key"}]},
                {"id": "eat_berries", "label": "Eat the berries",
                 "effects": [{"kill_player": true, "message": "They were poisonous."}]}
            ]
        },
        "hall": {
            "name": "Hall",
            "desc_short": "A dusty hall.",
            "exits": {"south": {"to": "porch"}, "down": {"to": "cellar"}}
        },
        "cellar": {"name": "Cellar", "desc_short": "Treasure, at last."}
    }
}"#,
    )
    .unwrap();
    dir
}

fn world_path(dir: &TempDir) -> String {
    dir.path().join("world.json").to_str().unwrap().to_string()
}

fn sorque() -> Command {
    Command::cargo_bin("sorque").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_valid_world() {
    let dir = test_world();
    sorque()
        .args(["check", world_path(&dir).as_str()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("3 rooms"))
                .and(predicate::str::contains("'porch'")),
        );
}

#[test]
fn check_dangling_exit_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{"rooms": {"yard": {"exits": {"north": {"to": "forest"}}}}}"#,
    )
    .unwrap();

    sorque()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("forest").and(predicate::str::contains("error:")));
}

#[test]
fn check_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("warn.yaml");
    fs::write(
        &path,
        "start_room: attic\nrooms:\n  yard:\n    desc_short: A yard.\n",
    )
    .unwrap();

    sorque()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("attic"))
        .stdout(predicate::str::contains("'yard'"));
}

#[test]
fn check_missing_file_fails() {
    sorque()
        .args(["check", "/nonexistent/world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load"));
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_table() {
    let dir = test_world();
    sorque()
        .args(["rooms", world_path(&dir).as_str()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("porch (start)")
                .and(predicate::str::contains("Hall"))
                .and(predicate::str::contains("Treasure, at last."))
                .and(predicate::str::contains("3 rooms")),
        );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_locked_then_unlocked() {
    let dir = test_world();
    sorque()
        .args(["play", world_path(&dir).as_str()])
        .write_stdin("n\nlook\ndo take_key\ni\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The door is locked.")
                .and(predicate::str::contains("Something glints"))
                .and(predicate::str::contains("You pocket a small key."))
                .and(predicate::str::contains("You are carrying: key"))
                .and(predicate::str::contains("== Hall ==")),
        );
}

#[test]
fn play_reaches_ending() {
    let dir = test_world();
    sorque()
        .args(["play", world_path(&dir).as_str(), "--end", "cellar"])
        .write_stdin("look\ndo take_key\nn\ndown\nlook\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("*** The End: Cellar ***"));
}

#[test]
fn play_death_and_restart() {
    let dir = test_world();
    sorque()
        .args(["play", world_path(&dir).as_str()])
        .write_stdin("do eat_berries\nn\nrestart\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("They were poisonous.")
                .and(predicate::str::contains("*** You have died ***"))
                .and(predicate::str::contains("You are dead."))
                .and(predicate::str::contains("You start over."))
                .and(predicate::str::contains("Goodbye.")),
        );
}

#[test]
fn play_save_and_resume() {
    let dir = test_world();
    let save = dir.path().join("save.json");
    let save = save.to_str().unwrap();

    sorque()
        .args(["play", world_path(&dir).as_str(), "--save", save])
        .write_stdin("look\ndo take_key\nn\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    sorque()
        .args(["play", world_path(&dir).as_str(), "--save", save, "--resume"])
        .write_stdin("i\n")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("== Hall ==")
                .and(predicate::str::contains("You are carrying: key")),
        );
}

#[test]
fn play_unknown_ending_room_fails() {
    let dir = test_world();
    sorque()
        .args(["play", world_path(&dir).as_str(), "--end", "moon"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("moon"));
}

#[test]
fn resume_requires_save() {
    let dir = test_world();
    sorque()
        .args(["play", world_path(&dir).as_str(), "--resume"])
        .assert()
        .failure();
}
