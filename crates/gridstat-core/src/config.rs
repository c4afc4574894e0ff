//! Long-gain thresholds injected into game aggregation.

/// Thresholds for counting big plays.
///
/// A gain counts as big when it is strictly greater than the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Rushing gain threshold in yards (default 15).
    pub run_long_gain_threshold: i32,
    /// Passing gain threshold in yards (default 20).
    pub pass_long_gain_threshold: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run_long_gain_threshold: 15,
            pass_long_gain_threshold: 20,
        }
    }
}

impl Config {
    /// Create a config with explicit thresholds.
    pub fn new(run_long_gain_threshold: i32, pass_long_gain_threshold: i32) -> Self {
        Self {
            run_long_gain_threshold,
            pass_long_gain_threshold,
        }
    }
}
