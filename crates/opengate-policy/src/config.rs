//! Gate configuration supplied by the embedding process.

use serde::{Deserialize, Serialize};

/// Which safety policy the transport layer activates at startup.
///
/// A closed set: policies are selected once from configuration and never
/// switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Block all actuation until a vehicle policy is configured.
    #[default]
    Silent,
    /// The steering-torque and acceleration command gate.
    TorqueGate,
}

/// Configuration for the safety gate, sourced from vehicle-specific
/// configuration by the embedding process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// The policy to activate.
    #[serde(default)]
    pub policy: PolicyKind,
    /// Conversion factor, in percent, scaling motor-reported torque into
    /// commanded-torque units. Vehicle calibration data.
    #[serde(default = "default_torque_factor")]
    pub torque_factor: i16,
}

fn default_torque_factor() -> i16 {
    128
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            torque_factor: default_torque_factor(),
        }
    }
}

impl GateConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.torque_factor <= 0 {
            return Err(ConfigError::NonPositiveTorqueFactor(self.torque_factor));
        }
        Ok(())
    }
}

/// Errors from validating a [`GateConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The torque conversion factor must be a positive percentage.
    #[error("torque_factor must be positive (got {0})")]
    NonPositiveTorqueFactor(i16),
}
