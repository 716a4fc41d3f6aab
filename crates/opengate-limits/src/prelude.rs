//! Prelude for the limits crate.
//!
//! Re-exports the sample window, the check functions, and their parameter
//! types.
//!
//! # Example
//!
//! ```
//! use opengate_limits::prelude::*;
//!
//! let mut measured = SampleWindow::new();
//! measured.push(5);
//! assert!(!max_limit_check(measured.latest(), 102));
//! ```

pub use crate::checks::{RateLimits, driver_limit_check, max_limit_check, rt_rate_limit_check};
pub use crate::sample::SampleWindow;
