/// Default location of the service config file.
pub(super) const DEFAULT_CONFIG_PATH: &str = "/etc/cabinet-optimizer/cabinet-optimizer.cfg";

/// Default capacity CSV, relative to the working directory.
pub(super) const DEFAULT_CAPACITY_DATA_PATH: &str = "data/dbox_capacity.csv";

/// Default address the HTTP server binds to.
pub(super) const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Default HTTP port.
pub(super) const DEFAULT_PORT: u16 = 8080;

/// Cabinet rack units assumed when a request leaves them out.
pub(super) const DEFAULT_CABINET_RU: f64 = 42.0;

/// Cabinet power (kW) assumed when a request leaves it out.
pub(super) const DEFAULT_CABINET_POWER_KW: f64 = 28.5;

/// Target rack-unit utilization (%) assumed when a request leaves it out.
pub(super) const DEFAULT_RU_PERCENT: f64 = 80.0;

/// Target power utilization (%) assumed when a request leaves it out.
pub(super) const DEFAULT_POWER_PERCENT: f64 = 70.0;

/// Largest cabinet the search accepts. The search is quadratic in rack units.
pub(super) const DEFAULT_MAX_CABINET_RU: u32 = 200;
