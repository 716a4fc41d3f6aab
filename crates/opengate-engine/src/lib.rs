//! OpenGate Engine - Real-time Actuation Safety Gate
//!
//! This crate contains the concrete torque-gate vehicle policy: a
//! synchronous filter invoked by the transport layer on every received and
//! every about-to-be-sent CAN frame. It independently re-validates outgoing
//! steering-torque and acceleration commands against hard physical and rate
//! limits, and blocks any command that violates them, regardless of what
//! the upstream controller intended.
//!
//! ```text
//! upstream controller -> [tx: validate] -> CAN bus -> actuators
//! CAN bus -> [rx: observe] -> internal state (measured torque, cruise)
//! ```
//!
//! The gate defends against two independent threats: a compromised or buggy
//! upstream controller, and slow multi-cycle ramp attacks that stay under
//! the per-cycle rate allowance. Every rejection fails closed and resets
//! the command-tracking state so a single violation cannot be leveraged to
//! weaken subsequent checks.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

pub mod select;
pub mod torque_gate;

pub use select::select_policy;
pub use torque_gate::{
    ACTUATION_BUS, DENIED_IDS, MAX_ACCEL, MAX_RATE_DOWN, MAX_RATE_UP, MAX_RT_DELTA,
    MAX_STEER_TORQUE, MAX_TORQUE_ERROR, MIN_ACCEL, MSG_ACCEL_CMD, MSG_CRUISE_STATE,
    MSG_MOTOR_TORQUE, MSG_STEER_CMD, RT_INTERVAL_US, TorqueGatePolicy,
};
