use super::capacity::CapacityTable;
use super::constraints::{evaluate, Limits, Violation};
use super::error::SizingError;
use super::hardware::{MIN_C_UNITS, MIN_D_UNITS};
use super::metrics;
use super::tracker::BestTracker;
use super::types::{FeasiblePoint, Objective, SearchParams, SearchResult};
use std::sync::Arc;
use tracing::{debug, info};

/// Exhaustive search over C-unit/D-unit counts.
///
/// Holds only read-only state, so one engine can serve any number of
/// concurrent searches.
#[derive(Debug, Clone)]
pub(crate) struct SearchEngine {
    capacity: Arc<CapacityTable>,
    max_cabinet_ru: u32,
}

impl SearchEngine {
    pub(crate) const fn new(capacity: Arc<CapacityTable>, max_cabinet_ru: u32) -> Self {
        Self { capacity, max_cabinet_ru }
    }

    pub(crate) fn capacity(&self) -> &CapacityTable {
        &self.capacity
    }

    /// Find the best configuration for every objective, plus all feasible points.
    ///
    /// Candidates are visited nc-major, nd-minor, ascending; both loops run up
    /// to the rack units left after the switches, and power is checked per
    /// candidate. The visiting order decides ties.
    pub(crate) fn search(&self, params: &SearchParams) -> Result<SearchResult, SizingError> {
        let limits = Limits::from_params(params, self.max_cabinet_ru)?;

        info!(
            "Searching: cabinet {} RU / {:.2} kW, targets {} RU / {:.2} kW",
            limits.cabinet_ru, limits.cabinet_power_kw, limits.ru_target, limits.power_target_kw
        );

        let upper = limits.unit_ru_budget();
        let mut tracker = BestTracker::new();
        let mut feasible_points = Vec::new();
        let mut rejected = [0u32; Violation::ALL.len()];

        for nc in MIN_C_UNITS..=upper {
            for nd in MIN_D_UNITS..=upper {
                let totals = match evaluate(nc, nd, &limits) {
                    Ok(totals) => totals,
                    Err(violation) => {
                        rejected[violation.index()] += 1;
                        continue;
                    }
                };

                let metrics = metrics::calculate(nc, nd, totals, &limits, &self.capacity);
                tracker.update(nc, nd, &metrics);
                feasible_points.push(FeasiblePoint { nc, nd, metrics });
            }
        }

        for violation in Violation::ALL {
            debug!("Rejected by {}: {}", violation.label(), rejected[violation.index()]);
        }
        let capacity = tracker.best(Objective::Capacity);
        info!(
            "Calculation complete. Found {} feasible configurations, max capacity {} TB at nc={} nd={}",
            feasible_points.len(),
            capacity.value,
            capacity.nc,
            capacity.nd
        );

        Ok(SearchResult { optimal: tracker.finish(), feasible_points })
    }
}
