use super::error::CapacityDataError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Usable capacity (TB) by D-unit count, used when no data file is available.
const BUILTIN_CAPACITY_TB: [f64; 8] = [
    0.0,
    982.67136,
    2210.807808,
    3447.189504,
    4678.975488,
    5909.54496,
    7139.303424,
    8368.92672,
];

/// Capacity added by each D-unit beyond the built-in table.
const BUILTIN_INCREMENTAL_TB: f64 = 1195.56096;

/// Where the capacity curve came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub(crate) enum CapacitySource {
    Builtin,
    File(String),
}

/// One row of the capacity CSV.
#[derive(Debug, Deserialize)]
struct CapacityRow {
    #[serde(alias = "dbox_count")]
    d_units: u32,
    #[serde(alias = "capacity_tb")]
    usable_capacity_tb: f64,
}

/// Provenance of the loaded table, reported by the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CapacitySummary {
    pub source: CapacitySource,
    pub entries: usize,
    pub slope_tb: f64,
}

/// Usable storage capacity as a function of D-unit count.
///
/// Index 0 always holds 0 TB. Counts past the last known entry are
/// extrapolated linearly with `incremental_tb`. Built once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub(crate) struct CapacityTable {
    known_tb: Vec<f64>,
    incremental_tb: f64,
    source: CapacitySource,
}

impl CapacityTable {
    /// The built-in capacity curve.
    pub(crate) fn builtin() -> Self {
        Self {
            known_tb: BUILTIN_CAPACITY_TB.to_vec(),
            incremental_tb: BUILTIN_INCREMENTAL_TB,
            source: CapacitySource::Builtin,
        }
    }

    /// Load the table from a CSV file, falling back to the built-in curve on any failure.
    pub(crate) fn load(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(table) => {
                info!(
                    "Capacity table loaded from {}: {} entries, {:.3} TB per extra D-unit",
                    path.display(),
                    table.entries(),
                    table.incremental_tb()
                );
                table
            }
            Err(e) => {
                warn!("Using built-in capacity table ({}: {e})", path.display());
                Self::builtin()
            }
        }
    }

    pub(crate) fn from_path(path: &Path) -> Result<Self, CapacityDataError> {
        let file = File::open(path)?;
        Self::from_reader(file, CapacitySource::File(path.display().to_string()))
    }

    /// Parse CSV capacity data.
    ///
    /// Rows must count D-units 1, 2, 3, ... without gaps, and capacity may not
    /// decrease. Rows breaking either rule, or failing to parse, are skipped
    /// with a warning. The slope is taken from the last two accepted rows.
    pub(crate) fn from_reader<R: Read>(
        reader: R,
        source: CapacitySource,
    ) -> Result<Self, CapacityDataError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        rdr.headers()?;

        let mut known_tb = vec![0.0];

        for (idx, record) in rdr.deserialize::<CapacityRow>().enumerate() {
            // Line 1 is the header.
            let line = idx + 2;
            let row = match record {
                Ok(row) => row,
                Err(e) => {
                    warn!("Skipping capacity row at line {line}: {e}");
                    continue;
                }
            };

            let expected = known_tb.len();
            if row.d_units as usize != expected {
                warn!(
                    "Skipping capacity row at line {line}: expected d_units={expected}, got {}",
                    row.d_units
                );
                continue;
            }

            let previous = known_tb.last().copied().unwrap_or_default();
            if !row.usable_capacity_tb.is_finite() || row.usable_capacity_tb < previous {
                warn!(
                    "Skipping capacity row at line {line}: capacity {} is not a finite value >= {previous}",
                    row.usable_capacity_tb
                );
                continue;
            }

            known_tb.push(row.usable_capacity_tb);
        }

        let accepted = known_tb.len() - 1;
        if accepted < 2 {
            return Err(CapacityDataError::TooFewRows { accepted });
        }

        let incremental_tb = known_tb[accepted] - known_tb[accepted - 1];
        Ok(Self { known_tb, incremental_tb, source })
    }

    /// Usable capacity in TB for `nd` D-units.
    pub(crate) fn usable_capacity(&self, nd: u32) -> f64 {
        if let Some(&tb) = self.known_tb.get(nd as usize) {
            return tb;
        }

        let last = self.entries();
        let last_tb = self.known_tb.last().copied().unwrap_or_default();
        last_tb + f64::from(nd - last as u32) * self.incremental_tb
    }

    /// Highest D-unit count with a known (non-extrapolated) capacity.
    pub(crate) fn entries(&self) -> usize {
        self.known_tb.len() - 1
    }

    pub(crate) const fn incremental_tb(&self) -> f64 {
        self.incremental_tb
    }

    pub(crate) const fn source(&self) -> &CapacitySource {
        &self.source
    }

    pub(crate) fn summary(&self) -> CapacitySummary {
        CapacitySummary {
            source: self.source().clone(),
            entries: self.entries(),
            slope_tb: self.incremental_tb(),
        }
    }
}
