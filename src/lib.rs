pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::toml_config::MissionConfig;
pub use crate::core::{
    engine::MissionEngine,
    mission::{run_mars_rover, run_mission, MissionReport},
    parser::{parse_input, MissionPlan},
    plateau::Plateau,
    rover::MarsRover,
};
pub use domain::model::{Command, Direction, OutputFormat, Position, RoverSpec};
pub use utils::error::{Result, RoverError};
