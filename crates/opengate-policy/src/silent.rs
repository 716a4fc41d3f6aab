//! Fail-closed boot policy.

use opengate_frame::CanFrame;

use crate::policy::SafetyPolicy;

/// Policy that blocks every outgoing frame.
///
/// The process boots with this policy selected so nothing reaches the
/// actuators until a vehicle policy is configured. It observes nothing and
/// keeps no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPolicy;

impl SafetyPolicy for SilentPolicy {
    fn init(&mut self, _param: i16) {}

    fn rx(&mut self, _frame: &CanFrame) {}

    fn tx(&mut self, _frame: &CanFrame) -> bool {
        false
    }
}
