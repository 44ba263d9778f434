//! Configuration system for trivia.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::DEFAULT_PAGE_SIZE;
use crate::error::{TriviaError, TriviaResult};

/// Main catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    /// Questions per listing page.
    pub page_size: usize,
    /// Path to the SQLite database. `:memory:` keeps everything in process.
    pub database_path: PathBuf,
    /// Optional JSON fixture loaded into an empty store at startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        let trivia_dir = dirs::home_dir()
            .map(|h| h.join(".trivia"))
            .unwrap_or_else(|| PathBuf::from(".trivia"));

        Self {
            page_size: DEFAULT_PAGE_SIZE,
            database_path: trivia_dir.join("trivia.db"),
            seed_path: None,
        }
    }
}

impl TriviaConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> TriviaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| TriviaError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| TriviaError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| TriviaError::Configuration(e.to_string())),
            _ => Err(TriviaError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Override fields with any `TRIVIA_*` environment variables that are set.
    pub fn merge_env(mut self) -> Self {
        if let Some(size) = std::env::var("TRIVIA_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.page_size = size;
        }

        if let Ok(path) = std::env::var("TRIVIA_DB_PATH") {
            self.database_path = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("TRIVIA_SEED_PATH") {
            self.seed_path = Some(PathBuf::from(path));
        }

        self
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> TriviaConfigBuilder {
        TriviaConfigBuilder::default()
    }
}

/// Builder for TriviaConfig.
#[derive(Default)]
pub struct TriviaConfigBuilder {
    config: TriviaConfig,
}

impl TriviaConfigBuilder {
    /// Set the listing page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Set the database path.
    pub fn database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.database_path = path.into();
        self
    }

    /// Set the seed fixture path.
    pub fn seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.seed_path = Some(path.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TriviaConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = TriviaConfig::default();
        assert_eq!(config.page_size, 10);
        assert!(config.database_path.ends_with("trivia.db"));
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_from_toml() {
        let file = write_config(".toml", "page_size = 5\ndatabase_path = \":memory:\"\n");
        let config = TriviaConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.database_path, PathBuf::from(":memory:"));
    }

    #[test]
    fn test_from_json_and_yaml() {
        let json = write_config(".json", r#"{"page_size": 7, "seed_path": "seed.json"}"#);
        let config = TriviaConfig::from_file(json.path()).unwrap();
        assert_eq!(config.page_size, 7);
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));

        let yaml = write_config(".yaml", "page_size: 3\n");
        assert_eq!(TriviaConfig::from_file(yaml.path()).unwrap().page_size, 3);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".ini", "page_size=1");
        let err = TriviaConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TriviaError::Configuration(_)));
    }

    #[test]
    fn test_builder() {
        let config = TriviaConfig::builder()
            .page_size(25)
            .database_path(":memory:")
            .seed_path("fixtures/trivia.json")
            .build();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.database_path, PathBuf::from(":memory:"));
        assert_eq!(config.seed_path, Some(PathBuf::from("fixtures/trivia.json")));
    }
}
