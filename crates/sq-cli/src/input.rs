//! Parsing of player input lines.

use sq_core::Direction;

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Look around the current room.
    Look,
    /// Leave through an exit.
    Go {
        /// Direction as typed; the engine normalises it.
        direction: String,
    },
    /// Perform an interaction by id.
    Do {
        /// Interaction id.
        id: String,
    },
    /// Perform the n-th entry of the actions menu (1-based).
    Choose(usize),
    /// List the exits.
    Exits,
    /// List the available actions.
    Actions,
    /// Show carried items.
    Inventory,
    /// Show set flags.
    Flags,
    /// Start over.
    Restart,
    /// Write a snapshot to the save file.
    Save,
    /// Print the kept transcript.
    History,
    /// List the commands.
    Help,
    /// Leave the game.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else. May still name a custom exit of the current room.
    Unknown {
        /// The trimmed input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const LOOK_VERBS: &[&str] = &["look", "l"];
const GO_VERBS: &[&str] = &["go", "move", "walk"];
const DO_VERBS: &[&str] = &["do", "use"];
const EXITS_VERBS: &[&str] = &["exits", "compass"];
const ACTIONS_VERBS: &[&str] = &["actions", "a"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const FLAGS_VERBS: &[&str] = &["flags"];
const RESTART_VERBS: &[&str] = &["restart"];
const SAVE_VERBS: &[&str] = &["save"];
const HISTORY_VERBS: &[&str] = &["history", "transcript"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

/// Parse a player input line into a command.
pub fn parse(input: &str) -> PlayCommand {
    let input = input.trim();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = words.first() else {
        return PlayCommand::Empty;
    };
    let verb = first.to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]).join(" ");

    if let Ok(n) = verb.parse::<usize>() {
        return PlayCommand::Choose(n);
    }

    // Bare compass direction
    if words.len() == 1 && !matches!(Direction::parse(&verb), Direction::Custom(_)) {
        return PlayCommand::Go { direction: verb };
    }

    let is = |verbs: &[&str]| verbs.contains(&verb.as_str());

    if is(GO_VERBS) {
        return if rest.is_empty() {
            PlayCommand::Unknown {
                input: input.to_string(),
            }
        } else {
            PlayCommand::Go { direction: rest }
        };
    }
    if is(DO_VERBS) {
        if rest.is_empty() {
            return PlayCommand::Actions;
        }
        return match rest.parse::<usize>() {
            Ok(n) => PlayCommand::Choose(n),
            Err(_) => PlayCommand::Do { id: rest },
        };
    }
    if !rest.is_empty() {
        return PlayCommand::Unknown {
            input: input.to_string(),
        };
    }
    if is(LOOK_VERBS) {
        return PlayCommand::Look;
    }
    if is(EXITS_VERBS) {
        return PlayCommand::Exits;
    }
    if is(ACTIONS_VERBS) {
        return PlayCommand::Actions;
    }
    if is(INVENTORY_VERBS) {
        return PlayCommand::Inventory;
    }
    if is(FLAGS_VERBS) {
        return PlayCommand::Flags;
    }
    if is(RESTART_VERBS) {
        return PlayCommand::Restart;
    }
    if is(SAVE_VERBS) {
        return PlayCommand::Save;
    }
    if is(HISTORY_VERBS) {
        return PlayCommand::History;
    }
    if is(HELP_VERBS) {
        return PlayCommand::Help;
    }
    if is(QUIT_VERBS) {
        return PlayCommand::Quit;
    }

    PlayCommand::Unknown {
        input: input.to_string(),
    }
}

/// One-line summaries printed by `help`.
pub const HELP: &[&str] = &[
    "look (l)            describe the room in full",
    "go <dir>, <dir>     leave through an exit (n, se, up, in, ...)",
    "do <id>, <number>   perform an action",
    "exits, actions      list exits or actions",
    "inventory (i)       list carried items",
    "flags               list story flags",
    "restart             start over",
    "save                write a snapshot to the save file",
    "history             show the transcript",
    "quit (q)            leave the game",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn go(d: &str) -> PlayCommand {
        PlayCommand::Go {
            direction: d.to_string(),
        }
    }

    #[test]
    fn bare_directions() {
        assert_eq!(parse("n"), go("n"));
        assert_eq!(parse("  North "), go("north"));
        assert_eq!(parse("in"), go("in"));
        assert_eq!(parse("D"), go("d"));
    }

    #[test]
    fn go_takes_any_direction() {
        assert_eq!(parse("go south"), go("south"));
        assert_eq!(parse("walk through portal"), go("through portal"));
        assert!(matches!(parse("go"), PlayCommand::Unknown { .. }));
    }

    #[test]
    fn do_by_id_or_number() {
        assert_eq!(
            parse("do pet_dog"),
            PlayCommand::Do {
                id: "pet_dog".to_string()
            }
        );
        assert_eq!(parse("do 2"), PlayCommand::Choose(2));
        assert_eq!(parse("3"), PlayCommand::Choose(3));
        assert_eq!(parse("do"), PlayCommand::Actions);
    }

    #[test]
    fn simple_verbs() {
        assert_eq!(parse("l"), PlayCommand::Look);
        assert_eq!(parse("LOOK"), PlayCommand::Look);
        assert_eq!(parse("i"), PlayCommand::Inventory);
        assert_eq!(parse("exits"), PlayCommand::Exits);
        assert_eq!(parse("actions"), PlayCommand::Actions);
        assert_eq!(parse("flags"), PlayCommand::Flags);
        assert_eq!(parse("restart"), PlayCommand::Restart);
        assert_eq!(parse("save"), PlayCommand::Save);
        assert_eq!(parse("history"), PlayCommand::History);
        assert_eq!(parse("?"), PlayCommand::Help);
        assert_eq!(parse("q"), PlayCommand::Quit);
        assert_eq!(parse(""), PlayCommand::Empty);
    }

    #[test]
    fn extra_words_are_unknown() {
        assert!(matches!(parse("look at dog"), PlayCommand::Unknown { .. }));
        assert_eq!(
            parse("xyzzy"),
            PlayCommand::Unknown {
                input: "xyzzy".to_string()
            }
        );
    }
}
