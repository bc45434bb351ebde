use engine::config::{ConfigStore, Validate};
use engine::types::Mark;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_store() -> ConfigStore<Config> {
    ConfigStore::new(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub ai_enabled: bool,
    pub ai_mark: Mark,
    pub window_width: f32,
    pub window_height: f32,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.window_width < 240.0 || self.window_width > 4096.0 {
            return Err("window_width must be between 240 and 4096".to_string());
        }
        if self.window_height < 280.0 || self.window_height > 4096.0 {
            return Err("window_height must be between 280 and 4096".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_enabled: false,
            ai_mark: Mark::O,
            window_width: 420.0,
            window_height: 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let store: ConfigStore<Config> = ConfigStore::new(get_temp_file_path());
        assert_eq!(store.load().unwrap(), Config::default());
    }

    #[test]
    fn test_config_round_trip() {
        let path = get_temp_file_path();
        let store: ConfigStore<Config> = ConfigStore::new(path.clone());

        let config = Config {
            ai_enabled: true,
            ai_mark: Mark::X,
            window_width: 640.0,
            window_height: 720.0,
        };
        store.save(&config).unwrap();

        // A fresh store reads it back from disk, not from the cache.
        let reloaded_store: ConfigStore<Config> = ConfigStore::new(path.clone());
        assert_eq!(reloaded_store.load().unwrap(), config);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_save_rejects_invalid_window_size() {
        let store: ConfigStore<Config> = ConfigStore::new(get_temp_file_path());
        let config = Config {
            window_width: 10.0,
            ..Config::default()
        };
        assert!(store.save(&config).is_err());
    }
}
