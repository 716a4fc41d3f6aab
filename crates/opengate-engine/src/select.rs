//! Configuration-driven policy selection.

use opengate_policy::{ConfigError, GateConfig, PolicyKind, SafetyPolicy, SilentPolicy};

use crate::torque_gate::TorqueGatePolicy;

/// Build and initialize the configured policy.
///
/// Called once at startup; the returned policy is owned by the transport
/// layer for the life of the process and never switched at runtime.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration fails validation.
pub fn select_policy(config: &GateConfig) -> Result<Box<dyn SafetyPolicy>, ConfigError> {
    config.validate()?;
    let mut policy: Box<dyn SafetyPolicy> = match config.policy {
        PolicyKind::Silent => Box::new(SilentPolicy),
        PolicyKind::TorqueGate => Box::new(TorqueGatePolicy::with_system_clock()),
    };
    policy.init(config.torque_factor);
    Ok(policy)
}
