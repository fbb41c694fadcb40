use resume_builder::config::{Config, LlmConfig, LogsConfig, ServerConfig};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        llm: LlmConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            temperature: None,
            max_tokens: None,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

/// Write a config file into a fresh temporary directory
pub async fn write_config_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, content).await.unwrap();
    (temp_dir, path)
}

pub const FULL_CONFIG_YAML: &str = r#"
llm:
  base_url: "https://llm.example.com/v1"
  api_key: "yaml-key"
  model: "custom-model"
  temperature: 0.2
  max_tokens: 1024

server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"
"#;

pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 8081
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-port"
"#;
