use crate::domain::model::OutputFormat;
use crate::utils::error::{Result, RoverError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional mission settings file; every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl MissionConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RoverError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MISSION_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RoverError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output
            .format
            .as_deref()
            .and_then(|format| format.parse().ok())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }
}

impl Validate for MissionConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input.path {
            validation::validate_path("input.path", path)?;
        }
        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }
        if let Some(format) = &self.output.format {
            validation::validate_format("output.format", format)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
path = "missions/day1.txt"

[output]
format = "json"
path = "./reports/day1.json"

[logging]
verbose = true
json = true
"#;

        let config = MissionConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input.path.as_deref(), Some("missions/day1.txt"));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert!(config.verbose());
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MissionConfig::from_toml_str("").unwrap();
        assert!(config.input.path.is_none());
        assert!(config.output_format().is_none());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MARS_ROVER_TEST_REPORT", "/tmp/rover-report.txt");

        let toml_content = r#"
[output]
path = "${MARS_ROVER_TEST_REPORT}"
"#;

        let config = MissionConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.path.as_deref(), Some("/tmp/rover-report.txt"));

        std::env::remove_var("MARS_ROVER_TEST_REPORT");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let toml_content = r#"
[input]
path = "${MARS_ROVER_TEST_UNSET_VAR}"
"#;

        let config = MissionConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.input.path.as_deref(),
            Some("${MARS_ROVER_TEST_UNSET_VAR}")
        );
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[output]
format = "csv"
"#;

        let config = MissionConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = MissionConfig::from_toml_str("[output\nformat = ").unwrap_err();
        assert!(matches!(err, RoverError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"text\"\n")
            .unwrap();

        let config = MissionConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Text));
    }
}
