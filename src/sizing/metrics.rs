use super::capacity::CapacityTable;
use super::constraints::Limits;
use super::hardware::{C_UNIT, D_UNIT};
use super::types::{ConfigMetrics, Totals};

/// Derive the reported metrics for a feasible configuration.
///
/// Each throughput is capped by whichever tier is the bottleneck, so it is
/// the minimum of the C-side and D-side aggregate, never the sum.
pub(crate) fn calculate(
    nc: u32,
    nd: u32,
    totals: Totals,
    limits: &Limits,
    capacity: &CapacityTable,
) -> ConfigMetrics {
    let nc_f = f64::from(nc);
    let nd_f = f64::from(nd);

    let capacity_tb = capacity.usable_capacity(nd);
    let nfs_write = (nc_f * C_UNIT.nfs_write_gbps).min(nd_f * D_UNIT.nfs_write_gbps);
    let nfs_read = (nc_f * C_UNIT.nfs_read_gbps).min(nd_f * D_UNIT.nfs_read_gbps);
    let s3_write = (nc_f * C_UNIT.s3_write_gbps).min(nd_f * D_UNIT.s3_write_gbps);
    let s3_read = (nc_f * C_UNIT.s3_read_gbps).min(nd_f * D_UNIT.s3_read_gbps);

    let total_nfs = nfs_read + nfs_write;
    let total_s3 = s3_read + s3_write;
    let speed_to_space = if capacity_tb > 0.0 { total_nfs / capacity_tb } else { 0.0 };

    ConfigMetrics {
        capacity_tb: round_to(capacity_tb, 1),
        nfs_read_gbps: round_to(nfs_read, 1),
        nfs_write_gbps: round_to(nfs_write, 1),
        s3_read_gbps: round_to(s3_read, 1),
        s3_write_gbps: round_to(s3_write, 1),
        total_nfs_gbps: round_to(total_nfs, 1),
        total_s3_gbps: round_to(total_s3, 1),
        speed_to_space_ratio: round_to(speed_to_space, 3),
        total_ru: totals.ru,
        total_kw: round_to(totals.kw, 2),
        ru_utilization_percent: round_to(
            percent_of(f64::from(totals.ru), f64::from(limits.cabinet_ru)),
            1,
        ),
        power_utilization_percent: round_to(percent_of(totals.kw, limits.cabinet_power_kw), 1),
    }
}

fn percent_of(used: f64, available: f64) -> f64 {
    if available > 0.0 {
        used / available * 100.0
    } else {
        0.0
    }
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
