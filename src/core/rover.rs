use crate::core::plateau::Plateau;
use crate::domain::model::{Command, Position, Turn};
use crate::utils::error::{Result, RoverError};

/// A single rover driving on a shared, read-only plateau.
///
/// The position always satisfies the plateau bounds: construction rejects an
/// out-of-bounds landing and a rejected move leaves the position untouched.
#[derive(Debug)]
pub struct MarsRover<'a> {
    position: Position,
    plateau: &'a Plateau,
}

impl<'a> MarsRover<'a> {
    pub fn new(initial_position: Position, plateau: &'a Plateau) -> Result<Self> {
        if !plateau.is_within_bounds(initial_position.x, initial_position.y) {
            tracing::warn!(
                "Rover landing at ({}, {}) rejected: plateau is {}x{}",
                initial_position.x,
                initial_position.y,
                plateau.width(),
                plateau.height()
            );
            return Err(RoverError::InitialPositionOutOfBounds {
                x: initial_position.x,
                y: initial_position.y,
            });
        }

        Ok(Self {
            position: initial_position,
            plateau,
        })
    }

    /// Current state as `"<x> <y> <direction>"`.
    pub fn get_position(&self) -> String {
        self.position.to_string()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn turn_left(&mut self) {
        self.turn(Turn::Left);
    }

    pub fn turn_right(&mut self) {
        self.turn(Turn::Right);
    }

    fn turn(&mut self, turn: Turn) {
        let heading = self.position.direction.turned(turn);
        tracing::debug!("Turn {:?}: {} -> {}", turn, self.position.direction, heading);
        self.position.direction = heading;
    }

    pub fn move_forward(&mut self) -> Result<()> {
        let (dx, dy) = self.position.direction.delta();
        let target = self
            .position
            .x
            .checked_add(dx)
            .zip(self.position.y.checked_add(dy))
            .filter(|&(x, y)| self.plateau.is_within_bounds(x, y));

        let Some((new_x, new_y)) = target else {
            return Err(RoverError::MoveOutOfBounds {
                x: self.position.x,
                y: self.position.y,
                direction: self.position.direction,
            });
        };

        tracing::debug!(
            "Move: ({}, {}) -> ({}, {})",
            self.position.x,
            self.position.y,
            new_x,
            new_y
        );
        self.position.x = new_x;
        self.position.y = new_y;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::TurnLeft => self.turn_left(),
            Command::TurnRight => self.turn_right(),
            Command::MoveForward => self.move_forward()?,
        }
        Ok(())
    }

    /// Applies every command letter in order, stopping at the first failure.
    pub fn execute_commands(&mut self, commands: &str) -> Result<()> {
        for c in commands.chars() {
            let command =
                Command::try_from(c).map_err(|command| RoverError::InvalidCommand { command })?;
            self.execute(command)?;
        }
        Ok(())
    }
}
