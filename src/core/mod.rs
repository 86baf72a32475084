pub mod engine;
pub mod mission;
pub mod parser;
pub mod plateau;
pub mod rover;

pub use crate::domain::model::{Command, Direction, OutputFormat, Position, RoverSpec, Turn};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
