use crate::core::plateau::Plateau;
use crate::domain::model::{Direction, Position, RoverSpec};
use crate::utils::error::{Result, RoverError};
use serde::Serialize;

/// Parsed mission input: the shared plateau and the rovers in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionPlan {
    pub plateau: Plateau,
    pub rovers: Vec<RoverSpec>,
}

/// Parses
///
/// ```text
/// <width> <height>
/// <x> <y> <direction>
/// <commands>
/// ...
/// ```
///
/// Every line is trimmed. Numbers, token counts and direction letters are
/// checked here; command letters are not.
pub fn parse_input(input: &str) -> Result<MissionPlan> {
    let lines: Vec<&str> = input.trim().split('\n').map(str::trim).collect();

    let plateau = parse_plateau(lines[0])?;
    tracing::debug!(
        "Parsed plateau {}x{}",
        plateau.width(),
        plateau.height()
    );

    let mut rovers = Vec::new();
    let mut i = 1;
    while i < lines.len() {
        let position = parse_position(lines[i], i + 1)?;
        let commands = lines.get(i + 1).ok_or_else(|| RoverError::ParseError {
            line: i + 2,
            message: format!("missing command line for rover at '{}'", lines[i]),
        })?;

        rovers.push(RoverSpec {
            position,
            commands: commands.to_string(),
        });
        i += 2;
    }

    tracing::debug!("Parsed {} rover(s)", rovers.len());
    Ok(MissionPlan { plateau, rovers })
}

fn parse_plateau(line: &str) -> Result<Plateau> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(RoverError::ParseError {
            line: 1,
            message: format!("expected '<width> <height>', got '{}'", line),
        });
    }

    let width = parse_number(fields[0], "width", 1)?;
    let height = parse_number(fields[1], "height", 1)?;
    Ok(Plateau::new(width, height))
}

fn parse_position(line: &str, line_no: usize) -> Result<Position> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(RoverError::ParseError {
            line: line_no,
            message: format!("expected '<x> <y> <direction>', got '{}'", line),
        });
    }

    let x = parse_number(fields[0], "x", line_no)?;
    let y = parse_number(fields[1], "y", line_no)?;
    let direction = fields[2]
        .parse::<Direction>()
        .map_err(|message| RoverError::ParseError {
            line: line_no,
            message,
        })?;

    Ok(Position::new(x, y, direction))
}

fn parse_number(token: &str, field: &str, line_no: usize) -> Result<i64> {
    token.parse::<i64>().map_err(|e| RoverError::ParseError {
        line: line_no,
        message: format!("invalid {} '{}': {}", field, token, e),
    })
}
