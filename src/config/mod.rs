#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use crate::domain::model::OutputFormat;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use cli::STDIO_PATH;
#[cfg(feature = "cli")]
use toml_config::MissionConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mars-rover")]
#[command(about = "Drive rovers across a plateau and report where they end up")]
pub struct CliConfig {
    /// Mission input file, or '-' for stdin (the default)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 以設定檔補齊命令列未指定的欄位，命令列優先
    pub fn merge_file(&mut self, file: &MissionConfig) {
        if self.input.is_none() {
            self.input = file.input.path.clone();
        }
        if self.output.is_none() {
            self.output = file.output.path.clone();
        }
        if self.format.is_none() {
            self.format = file.output_format();
        }
        self.verbose |= file.verbose();
        self.log_json |= file.json_logs();
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(STDIO_PATH)
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validation::validate_non_empty_string("input", input)?;
            validation::validate_path("input", input)?;
        }
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}
