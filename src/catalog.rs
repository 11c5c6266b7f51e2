//! Compiled-in equipment catalog: slot titles, level quantities, power draw.

/// Number of fixed equipment slots tracked by the estimator.
pub const SLOT_COUNT: usize = 6;

/// Number of quantity levels per slot.
pub const LEVEL_COUNT: usize = 3;

/// One equipment slot: an appliance title plus its 3-level unit-quantity
/// breakdown.
///
/// Quantities are kept as the display strings the form tables carry; the
/// estimator owns the parse-as-integer step. The array type guarantees
/// exactly [`LEVEL_COUNT`] entries per slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotConfig {
    /// Appliance title shown for this slot.
    pub title: String,
    /// Unit counts per quantity level, as entered in the form.
    pub levels: [String; LEVEL_COUNT],
}

impl SlotConfig {
    /// Creates a slot config from a title and three level-quantity strings.
    pub fn new(title: &str, levels: [&str; LEVEL_COUNT]) -> Self {
        Self {
            title: title.to_string(),
            levels: levels.map(str::to_string),
        }
    }
}

/// Power coefficient per slot (kW per unit), aligned by slot index.
pub const DEFAULT_POWER_KW: [f32; SLOT_COUNT] = [0.8, 0.2, 0.015, 0.021, 0.0005, 0.5];

/// Default usage hours per slot, aligned by slot index.
pub const DEFAULT_HOURS: [f32; SLOT_COUNT] = [9.0, 9.0, 24.0, 9.5, 24.0, 24.0];

/// Returns the built-in six-slot catalog, aligned with [`DEFAULT_POWER_KW`]
/// and [`DEFAULT_HOURS`] by position.
///
/// The Lift slot carries zeros for levels 2/3: the form hides those inputs,
/// and the aggregation still sums all three entries, so the zeros keep the
/// math honest.
pub fn default_slot_configs() -> Vec<SlotConfig> {
    vec![
        SlotConfig::new("Airconds", ["20", "10", "6"]),
        SlotConfig::new("Pendaflour", ["40", "30", "20"]),
        SlotConfig::new("CCTV", ["5", "5", "5"]),
        SlotConfig::new("Computer", ["5", "20", "3"]),
        SlotConfig::new("Router/Modem", ["4", "4", "2"]),
        SlotConfig::new("Lift", ["3", "0", "0"]),
    ]
}

/// Looks up a slot's position in the default catalog by title.
pub fn slot_index(title: &str) -> Option<usize> {
    default_slot_configs().iter().position(|s| s.title == title)
}
