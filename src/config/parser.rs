use super::settings::AppConfig;
use std::str::FromStr;
use tracing::warn;

impl AppConfig {
    /// Parse the simple KEY="VALUE" config format.
    ///
    /// Unknown keys are ignored; values that fail to parse keep the current setting.
    pub(crate) fn parse_ini(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                match key {
                    "PORT" => set_parsed(key, value, &mut self.port),
                    "BIND_HOST" => self.bind_host = value.to_string(),
                    "CAPACITY_DATA" => self.capacity_data_path = value.to_string(),
                    "CABINET_RU" => set_parsed(key, value, &mut self.cabinet_ru),
                    "CABINET_POWER_KW" => set_parsed(key, value, &mut self.cabinet_power_kw),
                    "RU_PERCENT" => set_parsed(key, value, &mut self.ru_percent),
                    "POWER_PERCENT" => set_parsed(key, value, &mut self.power_percent),
                    "MAX_CABINET_RU" => set_parsed(key, value, &mut self.max_cabinet_ru),
                    _ => {} // Ignore unknown keys
                }
            }
        }
    }
}

fn set_parsed<T: FromStr>(key: &str, value: &str, slot: &mut T) {
    match value.parse() {
        Ok(v) => *slot = v,
        Err(_) => warn!("Ignoring config {key}: cannot parse {value:?}"),
    }
}
