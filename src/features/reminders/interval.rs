//! # Feature: Interval Sampling
//!
//! Randomized spacing between dispatch cycles, so reminders never settle
//! into a clock-predictable rhythm.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use rand::Rng;
use std::time::Duration;

/// Longest possible pause between dispatch cycles, in seconds (10 minutes).
pub const MAX_INTERVAL_SECS: u64 = 600;

/// Draw the pause before the next dispatch cycle.
///
/// Uniform over [0, [`MAX_INTERVAL_SECS`]], both bounds included.
pub fn next_interval() -> Duration {
    Duration::from_secs(rand::rng().random_range(0..=MAX_INTERVAL_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_next_interval_within_bounds() {
        for _ in 0..2000 {
            assert!(next_interval() <= Duration::from_secs(MAX_INTERVAL_SECS));
        }
    }

    #[test]
    fn test_next_interval_spreads_across_range() {
        let samples: HashSet<u64> = (0..500).map(|_| next_interval().as_secs()).collect();
        // 500 draws over 601 possible values should not collapse to a few
        assert!(samples.len() > 50, "only {} distinct values", samples.len());
        assert!(samples.iter().any(|&v| v < 300));
        assert!(samples.iter().any(|&v| v >= 300));
    }
}
