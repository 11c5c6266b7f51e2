//! TOML-based site configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{
    DEFAULT_HOURS, DEFAULT_POWER_KW, LEVEL_COUNT, SLOT_COUNT, SlotConfig, default_slot_configs,
};
use crate::estimator::slot_units;

/// Top-level site configuration parsed from TOML.
///
/// Defaults to the built-in six-slot office catalog. Load from TOML with
/// [`SiteConfig::from_toml_file`] or use [`SiteConfig::office`] for the
/// built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Equipment slot entries, in catalog order.
    #[serde(default = "default_slot_entries", rename = "slot")]
    pub slots: Vec<SlotEntry>,
}

/// One configured equipment slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotEntry {
    /// Appliance title for this slot.
    pub title: String,
    /// Unit counts per quantity level, as strings.
    pub levels: [String; LEVEL_COUNT],
    /// Power coefficient (kW per unit).
    pub power_kw: f32,
    /// Usage hours per day.
    pub hours: f32,
}

fn default_slot_entries() -> Vec<SlotEntry> {
    default_slot_configs()
        .into_iter()
        .zip(DEFAULT_POWER_KW)
        .zip(DEFAULT_HOURS)
        .map(|((slot, power_kw), hours)| SlotEntry {
            title: slot.title,
            levels: slot.levels,
            power_kw,
            hours,
        })
        .collect()
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"slot[2].hours"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl SiteConfig {
    /// Returns the office preset (the built-in catalog with default hours).
    pub fn office() -> Self {
        Self {
            slots: default_slot_entries(),
        }
    }

    /// Returns the always-on preset: the office catalog with every slot
    /// running 24 hours.
    pub fn always_on() -> Self {
        let mut cfg = Self::office();
        for slot in &mut cfg.slots {
            slot.hours = 24.0;
        }
        cfg
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["office", "always_on"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "office" => Ok(Self::office()),
            "always_on" => Ok(Self::always_on()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "site".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Extracts the slot-config table in estimator form.
    pub fn slot_configs(&self) -> Vec<SlotConfig> {
        self.slots
            .iter()
            .map(|s| SlotConfig {
                title: s.title.clone(),
                levels: s.levels.clone(),
            })
            .collect()
    }

    /// Extracts the power-coefficient table, aligned by slot index.
    pub fn power_kw(&self) -> Vec<f32> {
        self.slots.iter().map(|s| s.power_kw).collect()
    }

    /// Extracts the usage-hours table, aligned by slot index.
    pub fn hours(&self) -> Vec<f32> {
        self.slots.iter().map(|s| s.hours).collect()
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.slots.len() != SLOT_COUNT {
            errors.push(ConfigError {
                field: "slot".into(),
                message: format!("exactly {SLOT_COUNT} slots required, got {}", self.slots.len()),
            });
        }

        for (i, slot) in self.slots.iter().enumerate() {
            if slot.title.trim().is_empty() {
                errors.push(ConfigError {
                    field: format!("slot[{i}].title"),
                    message: "must not be empty".into(),
                });
            }
            if !(slot.power_kw >= 0.0) {
                errors.push(ConfigError {
                    field: format!("slot[{i}].power_kw"),
                    message: "must be >= 0".into(),
                });
            }
            if !(slot.hours >= 0.0) {
                errors.push(ConfigError {
                    field: format!("slot[{i}].hours"),
                    message: "must be >= 0".into(),
                });
            }
            let config = SlotConfig {
                title: slot.title.clone(),
                levels: slot.levels.clone(),
            };
            if let Err(e) = slot_units(&config) {
                errors.push(ConfigError {
                    field: format!("slot[{i}].levels"),
                    message: e.to_string(),
                });
            }
        }

        errors
    }
}
