//! Limit-check functions layered by TX validation.
//!
//! Each function returns `true` on violation, so callers can OR the results
//! into a single decision. None of them mutate state.

use crate::sample::SampleWindow;

/// Ramp and measurement-deviation parameters for the driver envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    /// Allowed magnitude growth per validation cycle.
    pub max_rate_up: i32,
    /// Required minimum magnitude decay per cycle once past the measured
    /// band.
    pub max_rate_down: i32,
    /// Allowed excess of the commanded value over the measured window.
    pub max_error: i32,
}

/// Violation iff `|value|` exceeds `limit`.
#[inline]
pub fn max_limit_check(value: i32, limit: i32) -> bool {
    value > limit || value < -limit
}

/// Driver envelope check: the request may grow by at most `max_rate_up`
/// per cycle, and once it runs past the measured window by more than
/// `max_error` it must fall back toward zero by at least `max_rate_down`
/// per cycle. Violation iff `value` is outside the envelope.
///
/// The envelope is anchored to `last_request` — the previous *requested*
/// value, accepted or not — and to the measured window's extrema, never to
/// the previously transmitted frame alone.
#[inline]
pub fn driver_limit_check(
    value: i32,
    last_request: i32,
    measured: &SampleWindow,
    limits: &RateLimits,
) -> bool {
    let highest = (last_request.max(0) + limits.max_rate_up)
        .min((last_request - limits.max_rate_down).max(measured.max().max(0) + limits.max_error));
    let lowest = (last_request.min(0) - limits.max_rate_up)
        .max((last_request + limits.max_rate_down).min(measured.min().min(0) - limits.max_error));
    value < lowest || value > highest
}

/// Real-time drift check: violation iff `value` leaves the band of
/// `max_delta` around the re-anchored reference `rt_last`. The band is
/// pinned to zero on the side opposite the reference's sign, so a reference
/// near zero constrains both directions.
#[inline]
pub fn rt_rate_limit_check(value: i32, rt_last: i32, max_delta: i32) -> bool {
    let highest = rt_last.max(0) + max_delta;
    let lowest = rt_last.min(0) - max_delta;
    value < lowest || value > highest
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: RateLimits = RateLimits {
        max_rate_up: 2,
        max_rate_down: 4,
        max_error: 50,
    };

    fn window_with(samples: &[i32]) -> SampleWindow {
        let mut window = SampleWindow::new();
        for &sample in samples {
            window.push(sample);
        }
        window
    }

    #[test]
    fn test_max_limit_boundaries() {
        assert!(!max_limit_check(102, 102));
        assert!(!max_limit_check(-102, 102));
        assert!(max_limit_check(103, 102));
        assert!(max_limit_check(-103, 102));
        assert!(!max_limit_check(0, 102));
    }

    #[test]
    fn test_ramp_up_ceiling() {
        let measured = window_with(&[60, 60, 60]);
        // +2 from the last request is the most the envelope allows.
        assert!(!driver_limit_check(52, 50, &measured, &LIMITS));
        assert!(driver_limit_check(53, 50, &measured, &LIMITS));
    }

    #[test]
    fn test_ramp_down_is_unconstrained_toward_zero() {
        let measured = window_with(&[60, 60, 60]);
        // Dropping from 50 straight to 0 is fine.
        assert!(!driver_limit_check(0, 50, &measured, &LIMITS));
        assert!(!driver_limit_check(46, 50, &measured, &LIMITS));
        // But crossing into the opposite sign is rate-limited.
        assert!(!driver_limit_check(-2, 50, &measured, &LIMITS));
        assert!(driver_limit_check(-3, 50, &measured, &LIMITS));
    }

    #[test]
    fn test_measurement_deviation_caps_the_ramp() {
        // Measured window stuck at zero: the command may never run more
        // than max_error ahead, and past that it must decay.
        let measured = SampleWindow::new();
        assert!(!driver_limit_check(50, 48, &measured, &LIMITS));
        assert!(driver_limit_check(52, 50, &measured, &LIMITS));
        // From 60, +2 would be 62, but the measured band tops out at 50;
        // the envelope forces decay by at least 4.
        assert!(driver_limit_check(60, 60, &measured, &LIMITS));
        assert!(driver_limit_check(57, 60, &measured, &LIMITS));
        assert!(!driver_limit_check(56, 60, &measured, &LIMITS));
    }

    #[test]
    fn test_driver_envelope_is_sign_symmetric() {
        let measured_pos = window_with(&[30, 35, 40]);
        let measured_neg = window_with(&[-30, -35, -40]);
        for value in -120..=120 {
            let pos = driver_limit_check(value, 38, &measured_pos, &LIMITS);
            let neg = driver_limit_check(-value, -38, &measured_neg, &LIMITS);
            assert_eq!(pos, neg, "asymmetry at value {value}");
        }
    }

    #[test]
    fn test_rt_band_boundaries() {
        assert!(!rt_rate_limit_check(50, 0, 50));
        assert!(rt_rate_limit_check(51, 0, 50));
        assert!(!rt_rate_limit_check(-50, 0, 50));
        assert!(rt_rate_limit_check(-51, 0, 50));
    }

    #[test]
    fn test_rt_band_pins_to_zero() {
        // Reference at +20: band is [-50, +70].
        assert!(!rt_rate_limit_check(70, 20, 50));
        assert!(rt_rate_limit_check(71, 20, 50));
        assert!(!rt_rate_limit_check(-50, 20, 50));
        assert!(rt_rate_limit_check(-51, 20, 50));
    }
}
