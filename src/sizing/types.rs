use serde::Serialize;
use std::collections::BTreeMap;

/// Message attached to objectives that no feasible configuration satisfied.
pub(crate) const NO_CONFIGURATION_FOUND: &str =
    "No valid configuration found meeting all constraints.";

/// Caller-supplied search inputs, validated by the engine before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SearchParams {
    pub cabinet_ru: f64,
    pub cabinet_power_kw: f64,
    pub ru_percent: f64,
    pub power_percent: f64,
}

/// Rack units and power consumed by a feasible configuration, overhead included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Totals {
    pub ru: u32,
    pub kw: f64,
}

/// Everything reported about one feasible configuration. Values are rounded
/// for presentation and are also what the best tracker compares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ConfigMetrics {
    pub capacity_tb: f64,
    pub nfs_read_gbps: f64,
    pub nfs_write_gbps: f64,
    pub s3_read_gbps: f64,
    pub s3_write_gbps: f64,
    pub total_nfs_gbps: f64,
    pub total_s3_gbps: f64,
    pub speed_to_space_ratio: f64,
    pub total_ru: u32,
    pub total_kw: f64,
    pub ru_utilization_percent: f64,
    pub power_utilization_percent: f64,
}

/// A feasible `(nc, nd)` pair with its metrics, for plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct FeasiblePoint {
    pub nc: u32,
    pub nd: u32,
    #[serde(flatten)]
    pub metrics: ConfigMetrics,
}

/// The quantities the search maximizes, one best record each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub(crate) enum Objective {
    #[serde(rename = "maxCapa")]
    Capacity,
    #[serde(rename = "maxNfsRead")]
    NfsRead,
    #[serde(rename = "maxNfsWrite")]
    NfsWrite,
    #[serde(rename = "maxS3Read")]
    S3Read,
    #[serde(rename = "maxS3Write")]
    S3Write,
    #[serde(rename = "maxSpeedToSpace")]
    SpeedToSpace,
}

impl Objective {
    pub(crate) const COUNT: usize = 6;

    pub(crate) const ALL: [Self; Self::COUNT] = [
        Self::Capacity,
        Self::NfsRead,
        Self::NfsWrite,
        Self::S3Read,
        Self::S3Write,
        Self::SpeedToSpace,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// The metric this objective maximizes.
    pub(crate) const fn value_of(self, metrics: &ConfigMetrics) -> f64 {
        match self {
            Self::Capacity => metrics.capacity_tb,
            Self::NfsRead => metrics.nfs_read_gbps,
            Self::NfsWrite => metrics.nfs_write_gbps,
            Self::S3Read => metrics.s3_read_gbps,
            Self::S3Write => metrics.s3_write_gbps,
            Self::SpeedToSpace => metrics.speed_to_space_ratio,
        }
    }
}

/// Best configuration found for one objective.
///
/// Starts as a sentinel (`nc == 0`, value below anything attainable) and keeps
/// that shape, plus an `error`, when nothing feasible turned up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BestRecord {
    pub nc: u32,
    pub nd: u32,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ConfigMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BestRecord {
    pub(crate) const fn sentinel() -> Self {
        Self { nc: 0, nd: 0, value: -1.0, metrics: None, error: None }
    }

    pub(crate) const fn is_found(&self) -> bool {
        self.nc != 0
    }
}

/// Complete outcome of one search call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResult {
    pub optimal: BTreeMap<Objective, BestRecord>,
    pub feasible_points: Vec<FeasiblePoint>,
}
