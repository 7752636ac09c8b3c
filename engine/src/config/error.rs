use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to deserialize config: {0}")]
    Deserialize(serde_yaml_ng::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(serde_yaml_ng::Error),

    #[error("Config validation error: {0}")]
    Invalid(String),
}
