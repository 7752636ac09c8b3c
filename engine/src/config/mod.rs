mod config_content_provider;
mod config_manager;
mod config_serializer;
mod error;
mod game_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use error::ConfigError;
pub use game_config::{
    CONFIG_FILE_NAME, GameConfig, GameConfigManager, PRACTICAL_SEARCH_SIZE, default_config_path,
    get_config_manager,
};
pub use validate::Validate;
