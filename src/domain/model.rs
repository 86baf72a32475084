use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Heading after a 90° turn, indexed by `[turn][direction]`.
const TURN_MAP: [[Direction; 4]; 2] = [
    // Left: N→W, E→N, S→E, W→S
    [Direction::West, Direction::North, Direction::East, Direction::South],
    // Right: N→E, E→S, S→W, W→N
    [Direction::East, Direction::South, Direction::West, Direction::North],
];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn turned(self, turn: Turn) -> Direction {
        let row = match turn {
            Turn::Left => 0,
            Turn::Right => 1,
        };
        TURN_MAP[row][self.index()]
    }

    /// Unit displacement `(dx, dy)` for one step forward.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Direction::from_letter(letter)
                .ok_or_else(|| format!("unknown direction '{}', expected one of N, E, S, W", s)),
            _ => Err(format!(
                "direction must be a single letter (N, E, S, W), got '{}'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
}

impl TryFrom<char> for Command {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            'L' => Ok(Command::TurnLeft),
            'R' => Ok(Command::TurnRight),
            'M' => Ok(Command::MoveForward),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub direction: Direction,
}

impl Position {
    pub fn new(x: i64, y: i64, direction: Direction) -> Self {
        Self { x, y, direction }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.direction)
    }
}

/// Rendering of a finished mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// One `"<x> <y> <direction>"` line per rover.
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unsupported output format '{}'", other)),
        }
    }
}

/// One rover as read from the input: where it lands and what it is told to do.
///
/// `commands` is kept verbatim; unknown letters are only rejected when the
/// rover executes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverSpec {
    pub position: Position,
    pub commands: String,
}

impl RoverSpec {
    /// Number of command letters, counted as characters rather than bytes.
    pub fn command_count(&self) -> usize {
        self.commands.chars().count()
    }
}
