use super::error::SizingError;
use super::hardware::{
    C_UNIT, D_UNIT, FIXED_KW, FIXED_RU, MAX_FABRIC_PORTS, POWER_SAFETY_CAP_PERCENT,
};
use super::types::{SearchParams, Totals};

/// Resource budgets a candidate configuration must fit in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Limits {
    /// Physical rack units in the cabinet.
    pub cabinet_ru: u32,
    /// Physical power available to the cabinet (kW).
    pub cabinet_power_kw: f64,
    /// `floor(cabinet_ru * ru_percent / 100)`.
    pub ru_target: u32,
    /// Requested power share, clamped to the safety cap (kW).
    pub power_target_kw: f64,
}

impl Limits {
    /// Validate raw search inputs and derive the budgets from them.
    pub(crate) fn from_params(
        params: &SearchParams,
        max_cabinet_ru: u32,
    ) -> Result<Self, SizingError> {
        let cabinet_ru = non_negative("cabinetRU", params.cabinet_ru)?;
        let cabinet_power_kw = non_negative("cabinetPower", params.cabinet_power_kw)?;
        let ru_percent = non_negative("percentRU", params.ru_percent)?;
        let power_percent = non_negative("percentPower", params.power_percent)?;

        if cabinet_ru.fract() != 0.0 {
            return Err(SizingError::invalid(
                "cabinetRU",
                format!("{cabinet_ru} is not a whole number of rack units"),
            ));
        }
        if cabinet_ru > f64::from(max_cabinet_ru) {
            return Err(SizingError::invalid(
                "cabinetRU",
                format!("{cabinet_ru} exceeds the largest searchable cabinet ({max_cabinet_ru} RU)"),
            ));
        }

        let ru_target = (cabinet_ru * ru_percent / 100.0).floor() as u32;
        let requested_kw = cabinet_power_kw * power_percent / 100.0;
        let capped_kw = cabinet_power_kw * POWER_SAFETY_CAP_PERCENT / 100.0;

        Ok(Self {
            cabinet_ru: cabinet_ru as u32,
            cabinet_power_kw,
            ru_target,
            power_target_kw: requested_kw.min(capped_kw),
        })
    }

    /// Rack units left for C- and D-units once the switches are in.
    pub(crate) const fn unit_ru_budget(&self) -> u32 {
        self.cabinet_ru.saturating_sub(FIXED_RU)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, SizingError> {
    if !value.is_finite() {
        return Err(SizingError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(SizingError::invalid(field, format!("{value} must not be negative")));
    }
    Ok(value)
}

/// The first constraint a rejected configuration broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    CabinetRackUnits,
    FabricPorts,
    CabinetPower,
    RackUnitTarget,
    PowerTarget,
    UnitRatio,
}

impl Violation {
    pub(crate) const ALL: [Self; 6] = [
        Self::CabinetRackUnits,
        Self::FabricPorts,
        Self::CabinetPower,
        Self::RackUnitTarget,
        Self::PowerTarget,
        Self::UnitRatio,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::CabinetRackUnits => "cabinet_ru",
            Self::FabricPorts => "fabric_ports",
            Self::CabinetPower => "cabinet_power",
            Self::RackUnitTarget => "ru_target",
            Self::PowerTarget => "power_target",
            Self::UnitRatio => "unit_ratio",
        }
    }
}

/// Check `nc` C-units and `nd` D-units against every constraint, in order.
///
/// Returns the overall footprint (switch overhead included) when all pass.
pub(crate) fn evaluate(nc: u32, nd: u32, limits: &Limits) -> Result<Totals, Violation> {
    let unit_ru = nc * C_UNIT.ru + nd * D_UNIT.ru;
    if unit_ru > limits.unit_ru_budget() || limits.cabinet_ru < FIXED_RU {
        return Err(Violation::CabinetRackUnits);
    }

    if nc * C_UNIT.ports + nd * D_UNIT.ports > MAX_FABRIC_PORTS {
        return Err(Violation::FabricPorts);
    }

    let unit_kw = f64::from(nc) * C_UNIT.kw + f64::from(nd) * D_UNIT.kw;
    if unit_kw > limits.cabinet_power_kw - FIXED_KW {
        return Err(Violation::CabinetPower);
    }

    let total_ru = FIXED_RU + unit_ru;
    if total_ru > limits.ru_target {
        return Err(Violation::RackUnitTarget);
    }

    let total_kw = FIXED_KW + unit_kw;
    if total_kw > limits.power_target_kw {
        return Err(Violation::PowerTarget);
    }

    // At least one C-unit per two D-units: nc >= nd / 2.
    if 2 * nc < nd {
        return Err(Violation::UnitRatio);
    }

    Ok(Totals { ru: total_ru, kw: total_kw })
}
