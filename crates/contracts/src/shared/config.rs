use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Настройки витрины (`config.toml` рядом со страницей)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Номер WhatsApp в международном формате без `+` (ej. 5491123456789)
    pub whatsapp_number: String,
    /// Ключ корзины в localStorage
    pub storage_key: String,
    pub products_xlsx: String,
    pub products_json: String,
    pub search_debounce_ms: u32,
    /// Сколько держится надпись "Agregado ✓" на кнопке
    pub added_feedback_ms: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.toml inválido: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Значения по умолчанию; `public/config.toml` повторяет их
impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "542634655146".to_string(),
            storage_key: "nc_cart".to_string(),
            products_xlsx: "products.xlsx".to_string(),
            products_json: "products.json".to_string(),
            search_debounce_ms: 220,
            added_feedback_ms: 1200,
        }
    }
}

impl StoreConfig {
    /// Разбирает `config.toml`; отсутствующие ключи берутся из значений по умолчанию
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Как [`StoreConfig::from_toml`], но при ошибке откатывается на умолчания
    pub fn from_toml_or_default(text: &str) -> Self {
        match Self::from_toml(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; se usa la configuración por defecto", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_config_matches_defaults() {
        let shipped = include_str!("../../../frontend/public/config.toml");
        let config = StoreConfig::from_toml(shipped).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.search_debounce_ms, 220);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(StoreConfig::from_toml("").unwrap(), StoreConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = StoreConfig::from_toml(r#"whatsapp_number = "5491100000000""#).unwrap();
        assert_eq!(config.whatsapp_number, "5491100000000");
        assert_eq!(config.storage_key, "nc_cart");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        assert!(StoreConfig::from_toml("whatsapp_number = [").is_err());
        assert_eq!(
            StoreConfig::from_toml_or_default("search_debounce_ms = \"rápido\""),
            StoreConfig::default()
        );
    }
}
