use super::defaults::{
    DEFAULT_BIND_HOST, DEFAULT_CABINET_POWER_KW, DEFAULT_CABINET_RU, DEFAULT_CAPACITY_DATA_PATH,
    DEFAULT_CONFIG_PATH, DEFAULT_MAX_CABINET_RU, DEFAULT_PORT, DEFAULT_POWER_PERCENT,
    DEFAULT_RU_PERCENT,
};
use crate::sizing::SearchParams;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AppConfig {
    pub(crate) port: u16,
    pub(crate) bind_host: String,
    pub(crate) config_path: String,
    /// CSV with usable capacity per D-unit count.
    pub(crate) capacity_data_path: String,
    /// Request defaults, used for any field a `/calculate` body omits.
    pub(crate) cabinet_ru: f64,
    pub(crate) cabinet_power_kw: f64,
    pub(crate) ru_percent: f64,
    pub(crate) power_percent: f64,
    /// Largest cabinet (RU) a request may ask the search to cover.
    pub(crate) max_cabinet_ru: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_host: DEFAULT_BIND_HOST.to_string(),
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            capacity_data_path: DEFAULT_CAPACITY_DATA_PATH.to_string(),
            cabinet_ru: DEFAULT_CABINET_RU,
            cabinet_power_kw: DEFAULT_CABINET_POWER_KW,
            ru_percent: DEFAULT_RU_PERCENT,
            power_percent: DEFAULT_POWER_PERCENT,
            max_cabinet_ru: DEFAULT_MAX_CABINET_RU,
        }
    }
}

impl AppConfig {
    /// Load configuration, merging defaults with config file values and env overrides.
    pub(crate) fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("CO_CONFIG_PATH") {
            config.config_path = path;
        }

        let cfg_path = Path::new(&config.config_path);
        if cfg_path.exists() {
            let contents = fs::read_to_string(cfg_path)
                .with_context(|| format!("Failed to read config file: {}", config.config_path))?;
            config.parse_ini(&contents);
        }

        if let Ok(path) = std::env::var("CO_CAPACITY_DATA") {
            config.capacity_data_path = path;
        }
        if let Ok(host) = std::env::var("CO_BIND_HOST") {
            config.bind_host = host;
        }
        if let Ok(port) = std::env::var("CO_PORT").or_else(|_| std::env::var("PORT")) {
            config.port = port.parse().context("CO_PORT/PORT must be a valid port number")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Search inputs used when a request supplies none of its own.
    pub(crate) const fn default_params(&self) -> SearchParams {
        SearchParams {
            cabinet_ru: self.cabinet_ru,
            cabinet_power_kw: self.cabinet_power_kw,
            ru_percent: self.ru_percent,
            power_percent: self.power_percent,
        }
    }

    pub(crate) fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}
