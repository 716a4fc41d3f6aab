//! RT-Safe Limit Checks for the OpenGate Safety Gate
//!
//! This crate provides the limit-check primitives layered by the TX
//! validation path: an absolute bound, an asymmetric ramp envelope anchored
//! to the last request and the measured actuator output, and a windowed
//! drift bound against a periodically re-anchored reference.
//!
//! # Overview
//!
//! - **Sample window**: rolling window of the last three measured torque
//!   samples with cached extrema, the gate's ground truth
//! - **Absolute bound**: magnitude ceiling a command may never exceed
//! - **Driver envelope**: per-cycle ramp-up/ramp-down allowance combined
//!   with a tolerance band around the measured window
//! - **Real-time drift bound**: defense against slow multi-cycle ramps that
//!   stay under the per-cycle allowance
//!
//! # RT Safety Guarantees
//!
//! All checks are RT-safe:
//! - No heap allocations
//! - O(1) time complexity for all operations
//! - Bounded execution time
//! - No syscalls or I/O
//!
//! # Example
//!
//! ```
//! use opengate_limits::prelude::*;
//!
//! let limits = RateLimits { max_rate_up: 2, max_rate_down: 4, max_error: 50 };
//! let mut measured = SampleWindow::new();
//! measured.push(10);
//!
//! // A +2 step from a last request of 0 stays inside the envelope.
//! assert!(!driver_limit_check(2, 0, &measured, &limits));
//! // A +3 step violates it.
//! assert!(driver_limit_check(3, 0, &measured, &limits));
//! ```

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod checks;
pub mod prelude;
pub mod sample;

pub use checks::{RateLimits, driver_limit_check, max_limit_check, rt_rate_limit_check};
pub use sample::SampleWindow;
