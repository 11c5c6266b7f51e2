//! Consumption aggregation over aligned slot tables.
//!
//! Both entry points are pure and stateless: each call receives a fresh
//! snapshot of the slot configs, power coefficients, and usage hours, and
//! returns a value without touching any of its inputs.

use std::error::Error;
use std::fmt;

use crate::catalog::{LEVEL_COUNT, SlotConfig};

/// Errors reported by the aggregation functions.
///
/// The original form code returned the literal string "Invalid data format"
/// in place of a number; this enum is the typed replacement, so callers
/// cannot mistake an error for a result.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// The three input sequences are not positionally aligned.
    InvalidInputFormat {
        /// Length of the slot-config sequence.
        configs: usize,
        /// Length of the power-coefficient sequence.
        power: usize,
        /// Length of the usage-hours sequence.
        hours: usize,
    },
    /// A level-quantity string did not parse as a non-negative integer.
    InvalidQuantity {
        /// Title of the offending slot.
        slot: String,
        /// Zero-based level index within the slot.
        level: usize,
        /// The raw text that failed to parse.
        value: String,
    },
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputFormat {
                configs,
                power,
                hours,
            } => write!(
                f,
                "invalid input format: slot tables must be equal length, \
                 got configs={configs}, power={power}, hours={hours}"
            ),
            Self::InvalidQuantity { slot, level, value } => write!(
                f,
                "invalid quantity \"{value}\" at slot \"{slot}\" level {}",
                level + 1
            ),
        }
    }
}

impl Error for EstimateError {}

/// Parses a level-quantity string as a non-negative integer.
///
/// Fractional counts truncate toward zero ("5.5" parses as 5, matching the
/// historical integer-parse behavior); anything non-numeric or negative is
/// rejected.
fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<u32>() {
        return Some(n);
    }
    match trimmed.parse::<f32>() {
        Ok(x) if x.is_finite() && x >= 0.0 => Some(x.trunc() as u32),
        _ => None,
    }
}

/// Sums a slot's level quantities into a unit count.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidQuantity`] for the first level whose
/// text fails to parse.
pub fn slot_units(config: &SlotConfig) -> Result<u32, EstimateError> {
    let mut units = 0_u32;
    for (level, raw) in config.levels.iter().enumerate() {
        let quantity = parse_quantity(raw).ok_or_else(|| EstimateError::InvalidQuantity {
            slot: config.title.clone(),
            level,
            value: raw.clone(),
        })?;
        units += quantity;
    }
    Ok(units)
}

fn check_alignment(
    configs: &[SlotConfig],
    power_kw: &[f32],
    hours: &[f32],
) -> Result<(), EstimateError> {
    if configs.len() != power_kw.len() || configs.len() != hours.len() {
        return Err(EstimateError::InvalidInputFormat {
            configs: configs.len(),
            power: power_kw.len(),
            hours: hours.len(),
        });
    }
    Ok(())
}

fn round2(kwh: f32) -> f32 {
    (kwh * 100.0).round() / 100.0
}

/// Computes the total energy estimate across all slots, in kWh rounded to
/// 2 decimal places.
///
/// For each slot, the 3 level quantities are summed into a unit count and
/// the slot contributes `power_kw * units * hours`.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidInputFormat`] when the three sequences
/// differ in length, or [`EstimateError::InvalidQuantity`] when a quantity
/// string fails to parse.
pub fn total_energy_kwh(
    configs: &[SlotConfig],
    power_kw: &[f32],
    hours: &[f32],
) -> Result<f32, EstimateError> {
    check_alignment(configs, power_kw, hours)?;

    let mut total = 0.0_f32;
    for (i, config) in configs.iter().enumerate() {
        let units = slot_units(config)?;
        total += power_kw[i] * units as f32 * hours[i];
    }
    Ok(round2(total))
}

/// Computes per-level energy totals across all slots, in kWh, unrounded.
///
/// For each slot and each level, the level contributes
/// `power_kw * quantity * hours` to its entry of the returned vector.
///
/// # Errors
///
/// Same conditions as [`total_energy_kwh`].
pub fn energy_by_level_kwh(
    configs: &[SlotConfig],
    power_kw: &[f32],
    hours: &[f32],
) -> Result<[f32; LEVEL_COUNT], EstimateError> {
    check_alignment(configs, power_kw, hours)?;

    let mut totals = [0.0_f32; LEVEL_COUNT];
    for (i, config) in configs.iter().enumerate() {
        for (level, raw) in config.levels.iter().enumerate() {
            let quantity = parse_quantity(raw).ok_or_else(|| EstimateError::InvalidQuantity {
                slot: config.title.clone(),
                level,
                value: raw.clone(),
            })?;
            totals[level] += power_kw[i] * quantity as f32 * hours[i];
        }
    }
    Ok(totals)
}
