use super::types::{BestRecord, ConfigMetrics, Objective, NO_CONFIGURATION_FOUND};
use std::collections::BTreeMap;

/// Best-so-far record for each objective over one search.
#[derive(Debug, Clone)]
pub(crate) struct BestTracker {
    records: [BestRecord; Objective::COUNT],
}

impl Default for BestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BestTracker {
    pub(crate) fn new() -> Self {
        Self { records: std::array::from_fn(|_| BestRecord::sentinel()) }
    }

    /// Offer a feasible configuration to every objective.
    ///
    /// A record is replaced only on strict improvement, so among equal values
    /// the first configuration offered wins.
    pub(crate) fn update(&mut self, nc: u32, nd: u32, metrics: &ConfigMetrics) {
        for objective in Objective::ALL {
            let value = objective.value_of(metrics);
            let record = &mut self.records[objective.index()];
            if value > record.value {
                *record =
                    BestRecord { nc, nd, value, metrics: Some(metrics.clone()), error: None };
            }
        }
    }

    pub(crate) fn best(&self, objective: Objective) -> &BestRecord {
        &self.records[objective.index()]
    }

    /// Close the search: mark untouched objectives and hand out the records.
    pub(crate) fn finish(self) -> BTreeMap<Objective, BestRecord> {
        Objective::ALL
            .into_iter()
            .zip(self.records)
            .map(|(objective, mut record)| {
                if !record.is_found() {
                    record.error = Some(NO_CONFIGURATION_FOUND.to_string());
                }
                (objective, record)
            })
            .collect()
    }
}
