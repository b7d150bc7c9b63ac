use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of an exit.
///
/// The compass vocabulary is fixed, but authors may use any other word
/// ("portal", "ladder"); those are kept as [`Direction::Custom`] and sort after
/// the compass directions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    /// North.
    North,
    /// Northeast.
    Northeast,
    /// East.
    East,
    /// Southeast.
    Southeast,
    /// South.
    South,
    /// Southwest.
    Southwest,
    /// West.
    West,
    /// Northwest.
    Northwest,
    /// Up.
    Up,
    /// Down.
    Down,
    /// In.
    In,
    /// Out.
    Out,
    /// Any other authored direction, stored lowercased.
    Custom(String),
}

impl Direction {
    /// Canonical compass ordering used for menus.
    pub const COMPASS: [Direction; 12] = [
        Self::North,
        Self::Northeast,
        Self::East,
        Self::Southeast,
        Self::South,
        Self::Southwest,
        Self::West,
        Self::Northwest,
        Self::Up,
        Self::Down,
        Self::In,
        Self::Out,
    ];

    /// Parse a direction, accepting the usual abbreviations.
    ///
    /// Never fails: unknown words become [`Direction::Custom`].
    pub fn parse(s: &str) -> Self {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "n" | "north" => Self::North,
            "ne" | "northeast" => Self::Northeast,
            "e" | "east" => Self::East,
            "se" | "southeast" => Self::Southeast,
            "s" | "south" => Self::South,
            "sw" | "southwest" => Self::Southwest,
            "w" | "west" => Self::West,
            "nw" | "northwest" => Self::Northwest,
            "u" | "up" => Self::Up,
            "d" | "down" => Self::Down,
            "in" | "inside" => Self::In,
            "out" | "outside" => Self::Out,
            _ => Self::Custom(lower),
        }
    }

    /// The canonical name of this direction.
    pub fn name(&self) -> &str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
            Self::Custom(name) => name,
        }
    }

    /// Position in [`Direction::COMPASS`], or `None` for custom directions.
    pub fn compass_rank(&self) -> Option<usize> {
        Self::COMPASS.iter().position(|d| d == self)
    }

    /// Default UI label: the name with each word capitalised.
    pub fn title(&self) -> String {
        self.name()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for Direction {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Direction> for String {
    fn from(d: Direction) -> Self {
        d.name().to_string()
    }
}
