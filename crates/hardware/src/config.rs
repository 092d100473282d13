//! Configuration system for the core model.
//!
//! This module defines the configuration structures used to drive a
//! [`Simulator`](crate::sim::Simulator). It provides:
//! 1. **Defaults:** Baseline reset and run-bound constants.
//! 2. **Structures:** Sections for general, reset and run settings.
//! 3. **Enums:** The reset policy applied at construction.
//!
//! Configuration is supplied as JSON or built with `Config::default()`.

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants.
mod defaults {
    /// Ticks of power-on reset.
    pub const RESET_HOLD_CYCLES: u64 = 1;

    /// Upper bound on ticks for `Simulator::run_until`.
    pub const MAX_TICKS: u64 = 10_000;
}

/// Reset applied when a simulator is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ResetPolicy {
    /// Start from the zeroed power-on state with reset released.
    Immediate,
    /// Hold reset for `hold_cycles` ticks, then release it.
    #[default]
    PowerOn,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ringcore::config::{Config, ResetPolicy};
///
/// let config = Config::default();
/// assert!(!config.general.trace_ticks);
/// assert_eq!(config.reset.policy, ResetPolicy::PowerOn);
///
/// let config = Config::from_json(r#"{
///     "general": { "trace_ticks": true },
///     "reset": { "policy": "Immediate" },
///     "run": { "max_ticks": 64 }
/// }"#).unwrap();
/// assert!(config.general.trace_ticks);
/// assert_eq!(config.reset.policy, ResetPolicy::Immediate);
/// assert_eq!(config.reset.hold_cycles, 1);
/// assert_eq!(config.run.max_ticks, 64);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Reset sequencing.
    #[serde(default)]
    pub reset: ResetConfig,
    /// Run bounds.
    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Parses a configuration from JSON. Missing sections take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the JSON is malformed or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event for every clock edge.
    #[serde(default)]
    pub trace_ticks: bool,
}

/// Reset sequencing.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetConfig {
    /// Policy applied at construction.
    #[serde(default)]
    pub policy: ResetPolicy,
    /// Ticks reset is held for under [`ResetPolicy::PowerOn`].
    #[serde(default = "ResetConfig::default_hold_cycles")]
    pub hold_cycles: u64,
}

impl ResetConfig {
    const fn default_hold_cycles() -> u64 {
        defaults::RESET_HOLD_CYCLES
    }
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            policy: ResetPolicy::default(),
            hold_cycles: defaults::RESET_HOLD_CYCLES,
        }
    }
}

/// Run bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Maximum ticks `Simulator::run_until` may spend.
    #[serde(default = "RunConfig::default_max_ticks")]
    pub max_ticks: u64,
}

impl RunConfig {
    const fn default_max_ticks() -> u64 {
        defaults::MAX_TICKS
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_ticks: defaults::MAX_TICKS,
        }
    }
}
