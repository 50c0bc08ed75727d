use super::settings::AppConfig;
use anyhow::Result;

impl AppConfig {
    /// Validate configuration values are sane.
    pub(crate) fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.port > 0, "Port must be > 0");
        anyhow::ensure!(!self.bind_host.is_empty(), "bind_host must not be empty");
        anyhow::ensure!(
            self.max_cabinet_ru >= 1 && self.max_cabinet_ru <= 1000,
            "max_cabinet_ru must be between 1 and 1000"
        );
        anyhow::ensure!(
            self.cabinet_ru >= 0.0
                && self.cabinet_ru.fract() == 0.0
                && self.cabinet_ru <= f64::from(self.max_cabinet_ru),
            "cabinet_ru must be a whole number between 0 and max_cabinet_ru"
        );
        anyhow::ensure!(
            self.cabinet_power_kw.is_finite() && self.cabinet_power_kw >= 0.0,
            "cabinet_power_kw must be a non-negative number"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.ru_percent),
            "ru_percent must be between 0 and 100"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.power_percent),
            "power_percent must be between 0 and 100"
        );
        Ok(())
    }
}
