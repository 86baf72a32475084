use crate::core::parser::{parse_input, MissionPlan};
use crate::core::rover::MarsRover;
use crate::domain::model::{OutputFormat, Position};
use crate::utils::error::Result;
use serde::Serialize;

/// Final rover states of a completed run, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MissionReport {
    pub rovers: Vec<Position>,
}

impl MissionReport {
    pub fn to_text(&self) -> String {
        self.rovers
            .iter()
            .map(Position::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Drives every rover of an already parsed plan, one after the other.
///
/// The first failing rover aborts the run; no partial report is produced.
pub fn execute_plan(plan: &MissionPlan) -> Result<MissionReport> {
    let mut rovers = Vec::with_capacity(plan.rovers.len());

    for (index, spec) in plan.rovers.iter().enumerate() {
        let mut rover = MarsRover::new(spec.position, &plan.plateau)?;
        if let Err(e) = rover.execute_commands(&spec.commands) {
            tracing::error!(
                "Rover #{} failed at {}: {}",
                index + 1,
                rover.get_position(),
                e
            );
            return Err(e);
        }

        tracing::info!(
            "Rover #{} finished at {} ({} command(s))",
            index + 1,
            rover.get_position(),
            spec.command_count()
        );
        rovers.push(rover.position());
    }

    Ok(MissionReport { rovers })
}

pub fn run_mission(input: &str) -> Result<MissionReport> {
    let plan = parse_input(input)?;
    execute_plan(&plan)
}

/// Parses `input`, runs every rover and returns their final positions, one per line.
pub fn run_mars_rover(input: &str) -> Result<String> {
    Ok(run_mission(input)?.to_text())
}
