//! Rolling window of measured actuator samples.

/// Number of samples the window retains.
const WINDOW_LEN: usize = 3;

/// Rolling window of the last three measured torque samples with cached
/// extrema.
///
/// Starts zero-filled, so the extrema include zero until the window has
/// seen three real samples. Updated only by the RX observation path; the TX
/// path reads it as ground truth and never mutates it.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleWindow {
    values: [i32; WINDOW_LEN],
    min: i32,
    max: i32,
}

impl SampleWindow {
    /// Create a zero-filled window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new sample, dropping the oldest and recomputing the extrema.
    pub fn push(&mut self, sample: i32) {
        self.values = [sample, self.values[0], self.values[1]];
        let mut min = sample;
        let mut max = sample;
        for &value in &self.values {
            min = min.min(value);
            max = max.max(value);
        }
        self.min = min;
        self.max = max;
    }

    /// Smallest sample in the window.
    #[inline]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Largest sample in the window.
    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Most recently pushed sample.
    #[inline]
    pub fn latest(&self) -> i32 {
        self.values[0]
    }

    /// Reset the window to its zero-filled initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
