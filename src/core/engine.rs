use crate::core::mission::execute_plan;
use crate::core::parser::parse_input;
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::{Result, RoverError};
use std::time::Instant;

/// Reads the mission text through a [`Storage`], runs it and renders the report.
pub struct MissionEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MissionEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub async fn run(&self) -> Result<String> {
        let start = Instant::now();
        tracing::info!("Reading mission input from: {}", self.config.input_path());

        let raw = self.storage.read_file(self.config.input_path()).await?;
        let input = String::from_utf8(raw).map_err(|e| RoverError::ParseError {
            line: 0,
            message: format!("input is not valid UTF-8: {}", e),
        })?;

        let plan = parse_input(&input)?;
        tracing::info!(
            "Plateau {}x{} with {} rover(s)",
            plan.plateau.width(),
            plan.plateau.height(),
            plan.rovers.len()
        );

        let report = execute_plan(&plan)?;
        let rendered = report.render(self.config.output_format())?;

        if let Some(output_path) = self.config.output_path() {
            self.storage
                .write_file(output_path, rendered.as_bytes())
                .await?;
            tracing::info!("Report written to: {}", output_path);
        }

        tracing::debug!("Mission completed in {:?}", start.elapsed());
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OutputFormat;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.as_bytes().to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                RoverError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        output_path: Option<String>,
        format: OutputFormat,
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> &str {
            "mission.txt"
        }

        fn output_path(&self) -> Option<&str> {
            self.output_path.as_deref()
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

    const INPUT: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

    #[tokio::test]
    async fn test_engine_renders_text() {
        let storage = MockStorage::with_file("mission.txt", INPUT);
        let config = TestConfig {
            output_path: None,
            format: OutputFormat::Text,
        };

        let engine = MissionEngine::new(storage, config);
        assert_eq!(engine.run().await.unwrap(), "1 3 N\n5 1 E");
    }

    #[tokio::test]
    async fn test_engine_writes_json_report() {
        let storage = MockStorage::with_file("mission.txt", INPUT);
        let config = TestConfig {
            output_path: Some("report.json".to_string()),
            format: OutputFormat::Json,
        };

        let engine = MissionEngine::new(storage.clone(), config);
        let rendered = engine.run().await.unwrap();

        let written = storage.get_file("report.json").await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), rendered);
        assert!(rendered.contains("\"direction\": \"E\""));
    }

    #[tokio::test]
    async fn test_engine_missing_input() {
        let storage = MockStorage::with_file("other.txt", INPUT);
        let config = TestConfig {
            output_path: None,
            format: OutputFormat::Text,
        };

        let err = MissionEngine::new(storage, config).run().await.unwrap_err();
        assert!(matches!(err, RoverError::IoError(_)));
    }

    #[tokio::test]
    async fn test_engine_does_not_write_on_failure() {
        let storage = MockStorage::with_file("mission.txt", "5 5\n0 0 S\nM\n");
        let config = TestConfig {
            output_path: Some("report.txt".to_string()),
            format: OutputFormat::Text,
        };

        let engine = MissionEngine::new(storage.clone(), config);
        assert!(engine.run().await.unwrap_err().is_out_of_bounds());
        assert!(storage.get_file("report.txt").await.is_none());
    }
}
