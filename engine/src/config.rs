use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Mutex;

/// Semantic checks a settings struct runs after deserialization and
/// before every save.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Yaml settings file with an in-memory cache. A missing file is not
/// an error: `load` hands back the default settings instead.
pub struct ConfigStore<TConfig> {
    path: PathBuf,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigStore<TConfig>
where
    TConfig: Clone + Serialize + DeserializeOwned + Validate + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: Mutex::new(None),
        }
    }

    pub fn load(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TConfig::default());
            }
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: TConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}
