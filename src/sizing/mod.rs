mod capacity;
pub(crate) mod constraints;
mod error;
mod hardware;
pub(crate) mod metrics;
mod search;
mod tracker;
mod types;

pub(crate) use capacity::{CapacitySummary, CapacityTable};
pub(crate) use error::SizingError;
pub(crate) use search::SearchEngine;
pub(crate) use types::{SearchParams, SearchResult};

#[cfg(test)]
pub(crate) use capacity::CapacitySource;
#[cfg(test)]
pub(crate) use error::CapacityDataError;
#[cfg(test)]
pub(crate) use tracker::BestTracker;
#[cfg(test)]
pub(crate) use types::{Objective, NO_CONFIGURATION_FOUND};
