//! The line-oriented play loop.
//!
//! A [`Session`] drives one [`Game`] from any `BufRead` and writes to any
//! `Write`, so the loop runs the same against a terminal or a test buffer.
//! Everything the player is shown also goes into a bounded transcript.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use sq_core::{Direction, RoomId};
use sq_engine::Game;
use tracing::debug;

use crate::config::PlayConfig;
use crate::input::{self, HELP, PlayCommand};

const DEAD_REMINDER: &str = "You are dead. Type `restart` to try again, or `quit`.";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finish {
    /// The player typed `quit`.
    Quit,
    /// The player entered an ending room.
    Ending(RoomId),
    /// Input ran out.
    EndOfInput,
}

/// One interactive play-through.
pub struct Session {
    game: Game,
    config: PlayConfig,
    transcript: VecDeque<String>,
}

impl Session {
    /// Wrap a game with the given play configuration.
    pub fn new(game: Game, config: PlayConfig) -> Self {
        Self {
            game,
            config,
            transcript: VecDeque::new(),
        }
    }

    /// The underlying game.
    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The kept transcript, oldest line first.
    #[cfg(test)]
    pub fn transcript(&self) -> impl Iterator<Item = &str> {
        self.transcript.iter().map(String::as_str)
    }

    /// Play until `quit`, an ending room, or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> io::Result<Finish> {
        self.intro(out)?;

        for line in reader.lines() {
            let line = line?;
            let command = input::parse(&line);
            if command != PlayCommand::Empty {
                self.record(format!("> {}", line.trim()));
            }
            debug!(?command, "player command");
            if let Some(finish) = self.step(command, out)? {
                return Ok(finish);
            }
        }
        Ok(Finish::EndOfInput)
    }

    fn intro<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let text = self.game.desc_short().to_string();
        self.heading(out)?;
        self.say(out, &text)?;
        self.say(out, "Type `help` for a list of commands.")?;
        if self.game.is_dead() {
            self.say(out, DEAD_REMINDER)?;
        }
        Ok(())
    }

    /// Execute one command. `Some` means the session is over.
    fn step<W: Write>(&mut self, command: PlayCommand, out: &mut W) -> io::Result<Option<Finish>> {
        match command {
            PlayCommand::Look => {
                if self.game.is_dead() {
                    return self.say(out, DEAD_REMINDER).map(|()| None);
                }
                let text = self.game.look().to_string();
                self.heading(out)?;
                self.say(out, &text)?;
            }
            PlayCommand::Go { direction } => return self.go(&direction, out),
            PlayCommand::Do { id } => return self.perform(&id, out),
            PlayCommand::Choose(n) => {
                let id = n
                    .checked_sub(1)
                    .and_then(|i| self.game.visible_interactions().get(i).map(|it| it.id.clone()));
                match id {
                    Some(id) => return self.perform(&id, out),
                    None => self.say(out, &format!("There is no action {n}."))?,
                }
            }
            PlayCommand::Exits => self.exits(out)?,
            PlayCommand::Actions => self.actions(out)?,
            PlayCommand::Inventory => {
                let text = if self.game.inventory().is_empty() {
                    "You are empty-handed.".to_string()
                } else {
                    let items: Vec<&str> =
                        self.game.inventory().iter().map(|i| i.as_str()).collect();
                    format!("You are carrying: {}", items.join(", "))
                };
                self.say(out, &text)?;
            }
            PlayCommand::Flags => {
                let text = if self.game.flags().is_empty() {
                    "No flags set.".to_string()
                } else {
                    let flags: Vec<&str> = self.game.flags().iter().map(String::as_str).collect();
                    format!("Flags: {}", flags.join(", "))
                };
                self.say(out, &text)?;
            }
            PlayCommand::Restart => {
                let text = self.game.restart().to_string();
                self.say(out, "You start over.")?;
                self.heading(out)?;
                self.say(out, &text)?;
            }
            PlayCommand::Save => self.save(out)?,
            PlayCommand::History => {
                for line in &self.transcript {
                    writeln!(out, "{line}")?;
                }
            }
            PlayCommand::Help => {
                for line in HELP {
                    self.say(out, line)?;
                }
            }
            PlayCommand::Quit => {
                self.say(out, "Goodbye.")?;
                return Ok(Some(Finish::Quit));
            }
            PlayCommand::Empty => {}
            PlayCommand::Unknown { input } => {
                let direction = Direction::parse(&input);
                if self.game.room().exit(&direction).is_some() {
                    return self.go(&input, out);
                }
                self.say(
                    out,
                    &format!("I don't understand \"{input}\". Type `help` for commands."),
                )?;
            }
        }
        Ok(None)
    }

    fn go<W: Write>(&mut self, direction: &str, out: &mut W) -> io::Result<Option<Finish>> {
        if self.game.is_dead() {
            return self.say(out, DEAD_REMINDER).map(|()| None);
        }
        let before = self.game.current_room_id().clone();
        let text = self.game.move_to(direction).to_string();
        if *self.game.current_room_id() != before {
            self.heading(out)?;
        }
        self.say(out, &text)?;
        self.after_move(&before, out)
    }

    fn perform<W: Write>(&mut self, id: &str, out: &mut W) -> io::Result<Option<Finish>> {
        if self.game.is_dead() {
            return self.say(out, DEAD_REMINDER).map(|()| None);
        }
        let before = self.game.current_room_id().clone();
        let outcome = self.game.perform(id);
        if !outcome.dead && *self.game.current_room_id() != before {
            self.heading(out)?;
        }
        self.say(out, &outcome.text)?;
        if outcome.dead {
            self.say(out, "*** You have died ***")?;
            self.say(out, DEAD_REMINDER)?;
            return Ok(None);
        }
        self.after_move(&before, out)
    }

    /// Announce an ending if the player just walked into one.
    fn after_move<W: Write>(&mut self, before: &RoomId, out: &mut W) -> io::Result<Option<Finish>> {
        let room = self.game.current_room_id().clone();
        if room == *before || !self.config.is_ending(room.as_str()) {
            return Ok(None);
        }
        let title = self.game.room().title().to_string();
        self.say(out, &format!("*** The End: {title} ***"))?;
        Ok(Some(Finish::Ending(room)))
    }

    fn exits<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let exits = self.game.compass();
        if exits.is_empty() {
            return self.say(out, "There are no exits.");
        }
        for exit in exits {
            let lock = if exit.locked { " (locked)" } else { "" };
            let line = format!("  {:<10} {}{lock}", exit.direction.name(), exit.label);
            self.say(out, &line)?;
        }
        Ok(())
    }

    fn actions<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let lines: Vec<String> = self
            .game
            .visible_interactions()
            .iter()
            .enumerate()
            .map(|(i, it)| format!("  {}. {} [{}]", i + 1, it.label, it.id))
            .collect();
        if lines.is_empty() {
            return self.say(out, "Nothing to do here.");
        }
        for line in &lines {
            self.say(out, line)?;
        }
        Ok(())
    }

    fn save<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(path) = self.config.save_path().map(|p| p.to_path_buf()) else {
            return self.say(out, "No save file configured; start with --save FILE.");
        };
        let result = serde_json::to_string_pretty(&self.game.snapshot())
            .map_err(io::Error::other)
            .and_then(|json| std::fs::write(&path, json));
        match result {
            Ok(()) => {
                debug!(path = %path.display(), "snapshot saved");
                self.say(out, &format!("Saved to {}.", path.display()))
            }
            Err(e) => self.say(out, &format!("Could not save to {}: {e}", path.display())),
        }
    }

    fn heading<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let line = format!("== {} ==", self.game.room().title());
        self.say(out, &line)
    }

    /// Print text and keep it in the transcript.
    fn say<W: Write>(&mut self, out: &mut W, text: &str) -> io::Result<()> {
        for line in text.lines() {
            writeln!(out, "{line}")?;
            self.record(line.to_string());
        }
        Ok(())
    }

    fn record(&mut self, line: String) {
        self.transcript.push_back(line);
        while self.transcript.len() > self.config.transcript_limit {
            self.transcript.pop_front();
        }
    }
}
