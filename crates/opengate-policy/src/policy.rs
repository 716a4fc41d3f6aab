//! The `SafetyPolicy` trait and its auxiliary types.

use opengate_frame::CanFrame;

/// Cross-bus relay decision returned by [`SafetyPolicy::forward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardDecision {
    /// Do not relay the frame to any other bus.
    DoNotForward,
    /// Relay the frame onto the given bus.
    ToBus(u8),
}

impl ForwardDecision {
    /// The target bus, if the frame should be relayed.
    pub fn target(self) -> Option<u8> {
        match self {
            ForwardDecision::DoNotForward => None,
            ForwardDecision::ToBus(bus) => Some(bus),
        }
    }
}

/// Contract every vehicle safety policy implements.
///
/// The transport layer owns one boxed policy and calls it inline from its
/// frame-dispatch loop, serialized and non-reentrant; implementations need
/// no internal locking. Every operation must complete in bounded, small,
/// constant time — the TX path runs at up to 100 Hz on a hard real-time
/// path and must never stall the bus.
pub trait SafetyPolicy: Send {
    /// Reset policy state and apply the vehicle calibration parameter.
    /// Called once at startup, and again to reset on reconfiguration.
    /// Cannot fail.
    fn init(&mut self, param: i16);

    /// Observe a received frame. Updates internal state only; never
    /// rejects and has no other observable effect.
    fn rx(&mut self, frame: &CanFrame);

    /// Gate a frame the upstream controller wants to place on the bus.
    /// Returns `true` to allow it through. A denied frame is dropped for
    /// this cycle; the upstream controller is expected to send a fresh
    /// corrected command on the next one.
    fn tx(&mut self, frame: &CanFrame) -> bool;

    /// Gate an outgoing LIN payload.
    ///
    /// The default allows everything: LIN filtering is unimplemented, a
    /// known gap rather than a silent bug.
    fn tx_lin(&mut self, _data: &[u8]) -> bool {
        true
    }

    /// Vehicle-specific ignition detection.
    ///
    /// The default delegates to the transport-maintained ignition line,
    /// passed through unchanged. Policies for vehicles that signal
    /// ignition on the bus may override this.
    fn ignition(&self, line_state: bool) -> bool {
        line_state
    }

    /// Cross-bus relay decision for a received frame. The default never
    /// forwards.
    fn forward(&self, _bus: u8, _frame: &CanFrame) -> ForwardDecision {
        ForwardDecision::DoNotForward
    }
}
