//! Estimate report assembly: totals plus per-slot breakdown.

use std::fmt;

use serde::Serialize;

use crate::catalog::{LEVEL_COUNT, SlotConfig};
use crate::estimator::{EstimateError, energy_by_level_kwh, slot_units, total_energy_kwh};

/// Per-slot contribution to the estimate.
#[derive(Debug, Clone, Serialize)]
pub struct SlotBreakdown {
    /// Appliance title for the slot.
    pub title: String,
    /// Unit count summed across the slot's 3 levels.
    pub units: u32,
    /// Power coefficient (kW per unit).
    pub power_kw: f32,
    /// Usage hours per day.
    pub hours: f32,
    /// Slot energy: `power_kw * units * hours` (kWh, unrounded).
    pub energy_kwh: f32,
}

/// Complete consumption estimate for one set of inputs.
///
/// Built fresh on each invocation and handed to the caller; nothing is
/// cached between calls. `total_kwh` is rounded to 2 decimal places,
/// `by_level_kwh` is unrounded, matching the aggregation contract.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    /// Grand total (kWh, rounded to 2 decimals).
    pub total_kwh: f32,
    /// Energy per quantity level (kWh, unrounded).
    pub by_level_kwh: [f32; LEVEL_COUNT],
    /// Per-slot breakdown in input order.
    pub slots: Vec<SlotBreakdown>,
}

impl EstimateReport {
    /// Builds a report from aligned slot tables.
    ///
    /// # Errors
    ///
    /// Propagates [`EstimateError`] from the underlying aggregation.
    pub fn from_inputs(
        configs: &[SlotConfig],
        power_kw: &[f32],
        hours: &[f32],
    ) -> Result<Self, EstimateError> {
        let total_kwh = total_energy_kwh(configs, power_kw, hours)?;
        let by_level_kwh = energy_by_level_kwh(configs, power_kw, hours)?;

        let mut slots = Vec::with_capacity(configs.len());
        for (i, config) in configs.iter().enumerate() {
            let units = slot_units(config)?;
            slots.push(SlotBreakdown {
                title: config.title.clone(),
                units,
                power_kw: power_kw[i],
                hours: hours[i],
                energy_kwh: power_kw[i] * units as f32 * hours[i],
            });
        }

        Ok(Self {
            total_kwh,
            by_level_kwh,
            slots,
        })
    }
}

impl fmt::Display for EstimateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Consumption Estimate ---")?;
        for s in &self.slots {
            writeln!(
                f,
                "{:<14} {:>3} units x {:.4} kW x {:>4.1} h = {:>8.2} kWh",
                s.title, s.units, s.power_kw, s.hours, s.energy_kwh
            )?;
        }
        writeln!(
            f,
            "Level totals:  {:.2} / {:.2} / {:.2} kWh",
            self.by_level_kwh[0], self.by_level_kwh[1], self.by_level_kwh[2]
        )?;
        write!(f, "Total:         {:.2} kWh", self.total_kwh)
    }
}
