use serde::Deserialize;

use super::{ConfigContentProvider, FileContentConfigProvider, Validate};

/// Loads, validates and caches a YAML configuration. An absent config
/// source yields the type's defaults.
pub struct ConfigManager<TConfigContentProvider, TConfig>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Validate + Default,
{
    config_content_provider: TConfigContentProvider,
    config: std::sync::Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TConfigContentProvider, TConfig> ConfigManager<TConfigContentProvider, TConfig>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Validate + Default,
{
    pub fn new(config_content_provider: TConfigContentProvider) -> Self {
        Self {
            config_content_provider,
            config: std::sync::Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config = match self.config_content_provider.get_config_content()? {
            Some(content) => serde_yaml_ng::from_str::<TConfig>(&content)
                .map_err(|e| format!("Failed to deserialize config: {}", e))?,
            None => TConfig::default(),
        };

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        cells: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self { cells: 20 }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.cells == 0 {
                return Err("cells must be greater than 0".to_string());
            }
            Ok(())
        }
    }

    struct MemoryContentProvider {
        content: Option<String>,
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.clone())
        }
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager = ConfigManager::new(MemoryContentProvider { content: None });
        let config: TestConfig = manager.get_config().unwrap();
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn test_content_is_deserialized_and_validated() {
        let manager = ConfigManager::new(MemoryContentProvider {
            content: Some("cells: 32".to_string()),
        });
        let config: TestConfig = manager.get_config().unwrap();
        assert_eq!(config.cells, 32);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let manager = ConfigManager::new(MemoryContentProvider {
            content: Some("cells: 0".to_string()),
        });
        let result: Result<TestConfig, String> = manager.get_config();
        assert!(result.unwrap_err().contains("validation"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let manager = ConfigManager::new(MemoryContentProvider {
            content: Some("cells: [oops".to_string()),
        });
        let result: Result<TestConfig, String> = manager.get_config();
        assert!(result.unwrap_err().contains("deserialize"));
    }
}
