//! Загрузка `RoundConfig` из JSON.
//!
//! Все поля необязательные: чего нет в файле – берётся из `Default`.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::table::RoundConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Битый JSON конфига: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(String),
}

/// Разобрать и проверить конфиг из строки.
pub fn parse_round_config(json: &str) -> Result<RoundConfig, ConfigError> {
    let config: RoundConfig = serde_json::from_str(json)?;
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// Прочитать и проверить конфиг из файла.
pub fn load_round_config(path: impl AsRef<Path>) -> Result<RoundConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    parse_round_config(&raw)
}
