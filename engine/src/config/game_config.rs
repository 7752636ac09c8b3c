use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::tictactoe::{BotType, FirstPlayerMode, MIN_BOARD_SIZE};

pub const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

/// Boards above this size take too long to search to the end.
pub const PRACTICAL_SEARCH_SIZE: usize = 3;

pub type GameConfigManager = ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer>;

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(path: Option<&str>) -> GameConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub first_player: FirstPlayerMode,
    pub bot: BotType,
    pub log_prefix: Option<String>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(format!(
                "board_size must be at least {}, got {}",
                MIN_BOARD_SIZE, self.board_size
            ));
        }
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
            first_player: FirstPlayerMode::Human,
            bot: BotType::Minimax,
            log_prefix: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigContentProvider, ConfigError, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: GameConfig = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_yaml_field_names() {
        let content = "board_size: 4\nfirst_player: random\nbot: parallel-minimax\nlog_prefix: ttt\n";
        let config: GameConfig = YamlConfigSerializer::new().deserialize(content).unwrap();

        assert_eq!(
            config,
            GameConfig {
                board_size: 4,
                first_player: FirstPlayerMode::Random,
                bot: BotType::ParallelMinimax,
                log_prefix: Some("ttt".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let config: GameConfig = YamlConfigSerializer::new()
            .deserialize("board_size: 5\n")
            .unwrap();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.first_player, FirstPlayerMode::Human);
        assert_eq!(config.bot, BotType::Minimax);
        assert_eq!(config.log_prefix, None);
    }

    #[test]
    fn test_missing_board_size_uses_default() {
        let config: GameConfig = YamlConfigSerializer::new()
            .deserialize("first_player: ai\n")
            .unwrap();
        assert_eq!(config.board_size, 3);
        assert_eq!(config.first_player, FirstPlayerMode::Ai);
        assert_eq!(config.bot, BotType::Minimax);
    }

    #[test]
    fn test_manager_saves_and_loads() {
        let config = GameConfig {
            board_size: 4,
            first_player: FirstPlayerMode::Ai,
            ..GameConfig::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_str()));

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();
        assert_eq!(config, loaded);

        let content = manager.content_provider().get_config_content().unwrap();
        assert!(content.unwrap().contains("board_size: 4"));

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(get_temp_file_path().as_str()));
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_small_board_is_rejected() {
        let config = GameConfig {
            board_size: 2,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_str()));
        assert!(matches!(
            manager.set_config(&config),
            Err(ConfigError::Invalid(_))
        ));

        let provider = FileContentConfigProvider::new(file_path.clone());
        provider.set_config_content("board_size: 1\n").unwrap();
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider.set_config_content("board_size: [not, a, number]\n").unwrap();

        let manager = get_config_manager(Some(file_path.as_str()));
        assert!(matches!(
            manager.get_config(),
            Err(ConfigError::Deserialize(_))
        ));

        let _ = std::fs::remove_file(&file_path);
    }
}
