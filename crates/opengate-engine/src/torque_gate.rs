//! The torque-gate vehicle policy.
//!
//! A small, dense state machine invoked synchronously on every frame: the
//! RX path observes measured motor torque and cruise engagement, the TX
//! path re-validates every actuation command on the primary bus against
//! three layered limits and fails closed on any violation. No threads, no
//! I/O, no allocation; every call completes in bounded constant time.

use opengate_frame::{CanFrame, SystemTickSource, TickSource, Ticks, be16, signal};
use opengate_limits::{
    RateLimits, SampleWindow, driver_limit_check, max_limit_check, rt_rate_limit_check,
};
use opengate_policy::{RejectReason, SafetyPolicy};

/// Measured motor torque reported by the power steering unit.
pub const MSG_MOTOR_TORQUE: u32 = 0x260;
/// Cruise-control state carrying the engagement bits.
pub const MSG_CRUISE_STATE: u32 = 0x1D2;
/// Longitudinal acceleration command.
pub const MSG_ACCEL_CMD: u32 = 0x343;
/// Steering torque command.
pub const MSG_STEER_CMD: u32 = 0x2E4;
/// Alternate actuation path identifiers with no legitimate use in normal
/// operation.
pub const DENIED_IDS: [u32; 2] = [0x266, 0x167];

/// The primary actuation bus; frames on other buses are not policed.
pub const ACTUATION_BUS: u8 = 0;

/// Absolute steering torque ceiling. Range of the field is ±1024; the
/// stock lane-keep system stays within ±102.
pub const MAX_STEER_TORQUE: i32 = 102;
/// Allowed torque growth per cycle. Commands arrive at 100 Hz, so this is
/// a 200 units/sec ramp-up ceiling.
pub const MAX_RATE_UP: i32 = 2;
/// Required decay per cycle once past the measured band (400 units/sec).
pub const MAX_RATE_DOWN: i32 = 4;
/// Allowed excess of commanded torque over the measured motor torque.
pub const MAX_TORQUE_ERROR: i32 = 50;

/// Torque drift allowed within one real-time window.
pub const MAX_RT_DELTA: i32 = 50;
/// Real-time reference re-anchor interval in microseconds.
pub const RT_INTERVAL_US: u32 = 250_000;

/// Longitudinal command ceiling, 0.001 m/s² units (+1.5 m/s²).
pub const MAX_ACCEL: i32 = 1500;
/// Longitudinal command floor (−3.0 m/s²).
pub const MIN_ACCEL: i32 = -3000;

const STEER_LIMITS: RateLimits = RateLimits {
    max_rate_up: MAX_RATE_UP,
    max_rate_down: MAX_RATE_DOWN,
    max_error: MAX_TORQUE_ERROR,
};

/// The steering-torque and acceleration command gate.
///
/// Owns all mutable gate state; the transport layer drives it through the
/// [`SafetyPolicy`] trait, serialized and non-reentrant.
pub struct TorqueGatePolicy {
    ticks: Box<dyn TickSource + Send>,
    controls_allowed: bool,
    actuation_limits: bool,
    torque_factor: i32,
    torque_meas: SampleWindow,
    desired_torque_last: i32,
    rt_torque_last: i32,
    ts_last: Ticks,
    cruise_engaged_last: bool,
}

impl TorqueGatePolicy {
    /// Create the gate with an injected tick source. Call
    /// [`SafetyPolicy::init`] before use.
    pub fn new(ticks: Box<dyn TickSource + Send>) -> Self {
        Self {
            ticks,
            controls_allowed: false,
            actuation_limits: true,
            torque_factor: 100,
            torque_meas: SampleWindow::new(),
            desired_torque_last: 0,
            rt_torque_last: 0,
            ts_last: Ticks::default(),
            cruise_engaged_last: false,
        }
    }

    /// Create the gate reading the process monotonic clock.
    pub fn with_system_clock() -> Self {
        Self::new(Box::new(SystemTickSource::new()))
    }

    /// Whether the upstream controller is currently authorized to actuate.
    pub fn controls_allowed(&self) -> bool {
        self.controls_allowed
    }

    /// Whether limit enforcement is active.
    pub fn actuation_limits_enabled(&self) -> bool {
        self.actuation_limits
    }

    /// Master switch for limit enforcement. Re-enabled by `init`.
    pub fn set_actuation_limits(&mut self, enabled: bool) {
        self.actuation_limits = enabled;
    }

    /// The last requested steering torque the rate check compares against.
    pub fn last_commanded_torque(&self) -> i32 {
        self.desired_torque_last
    }

    /// The real-time drift reference.
    pub fn realtime_reference(&self) -> i32 {
        self.rt_torque_last
    }

    /// The measured motor torque window.
    pub fn measured_torque(&self) -> &SampleWindow {
        &self.torque_meas
    }

    /// Validate an outgoing frame, returning the first violated rule.
    ///
    /// Only frames addressed to the primary actuation bus are subject to
    /// policy; identifiers the policy does not recognize pass by default.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectReason`] when the frame must not reach the bus.
    pub fn validate_tx(&mut self, frame: &CanFrame) -> Result<(), RejectReason> {
        if frame.bus != ACTUATION_BUS {
            return Ok(());
        }
        if DENIED_IDS.contains(&frame.id) {
            return Err(RejectReason::DisallowedMessage);
        }
        match frame.id {
            MSG_ACCEL_CMD => self.check_accel(frame),
            MSG_STEER_CMD => self.check_steer(frame),
            _ => Ok(()),
        }
    }

    fn check_accel(&self, frame: &CanFrame) -> Result<(), RejectReason> {
        let desired_accel = signal::signed_be16(frame.byte(0), frame.byte(1));
        if self.controls_allowed && self.actuation_limits {
            if desired_accel > MAX_ACCEL || desired_accel < MIN_ACCEL {
                return Err(RejectReason::AccelOutOfBounds);
            }
        } else if !self.controls_allowed && desired_accel != 0 {
            return Err(RejectReason::UnauthorizedCommand);
        }
        Ok(())
    }

    fn check_steer(&mut self, frame: &CanFrame) -> Result<(), RejectReason> {
        let desired_torque = signal::signed_be16(frame.byte(1), frame.byte(2));
        let now = self.ticks.now();
        let mut violation = None;

        if self.controls_allowed && self.actuation_limits {
            if max_limit_check(desired_torque, MAX_STEER_TORQUE) {
                violation = Some(RejectReason::TorqueOutOfBounds);
            }
            if violation.is_none()
                && driver_limit_check(
                    desired_torque,
                    self.desired_torque_last,
                    &self.torque_meas,
                    &STEER_LIMITS,
                )
            {
                violation = Some(RejectReason::TorqueRateExceeded);
            }

            // The rate check always compares against the latest request,
            // accepted or not; tracking only accepted values would let a
            // sender bank rate budget by alternating good and bad frames.
            self.desired_torque_last = desired_torque;

            if violation.is_none()
                && rt_rate_limit_check(desired_torque, self.rt_torque_last, MAX_RT_DELTA)
            {
                violation = Some(RejectReason::RealtimeRateExceeded);
            }
            if now.elapsed_since(self.ts_last) > RT_INTERVAL_US {
                self.rt_torque_last = desired_torque;
                self.ts_last = now;
            }
        }

        if !self.controls_allowed && desired_torque != 0 {
            violation = Some(RejectReason::UnauthorizedCommand);
        }

        // No residual state may survive a disallowed period or a rejected
        // frame.
        if violation.is_some() || !self.controls_allowed {
            self.desired_torque_last = 0;
            self.rt_torque_last = 0;
            self.ts_last = now;
        }

        match violation {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }

    fn observe_rx(&mut self, frame: &CanFrame) {
        if frame.id == MSG_MOTOR_TORQUE {
            let raw = be16(frame.byte(5), frame.byte(6));
            let mut torque = signal::to_signed(raw, 16);
            torque = (torque * self.torque_factor) / 100;
            // Bias one unit away from zero so the deviation check reads
            // the measurement conservatively.
            torque += if torque > 0 { 1 } else { -1 };
            self.torque_meas.push(torque);
        }

        if frame.id == MSG_CRUISE_STATE {
            let cruise_engaged = (frame.byte(6) >> 4) != 0;
            if cruise_engaged && !self.cruise_engaged_last {
                self.controls_allowed = true;
                tracing::debug!("controls allowed on cruise engagement edge");
            } else if !cruise_engaged {
                if self.controls_allowed {
                    tracing::debug!("controls disallowed, cruise disengaged");
                }
                self.controls_allowed = false;
                self.desired_torque_last = 0;
                self.rt_torque_last = 0;
            }
            self.cruise_engaged_last = cruise_engaged;
        }
    }
}

impl SafetyPolicy for TorqueGatePolicy {
    fn init(&mut self, param: i16) {
        self.controls_allowed = false;
        self.actuation_limits = true;
        self.torque_factor = i32::from(param);
        self.torque_meas.reset();
        self.desired_torque_last = 0;
        self.rt_torque_last = 0;
        self.ts_last = Ticks::default();
        self.cruise_engaged_last = false;
    }

    fn rx(&mut self, frame: &CanFrame) {
        self.observe_rx(frame);
    }

    fn tx(&mut self, frame: &CanFrame) -> bool {
        match self.validate_tx(frame) {
            Ok(()) => true,
            Err(reason) => {
                tracing::warn!(
                    id = frame.id,
                    bus = frame.bus,
                    code = reason.code(),
                    %reason,
                    "blocked outgoing frame"
                );
                false
            }
        }
    }
}
