use serde_derive::{Deserialize, Serialize};

/// Discretized instantaneous state of an analog channel.
///
/// The variants are ordered: `Low < Mid < High`, matching the voltage bands
/// they are quantized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Below the low threshold.
    Low,
    /// Between the low and high thresholds.
    Mid,
    /// At or above the high threshold.
    High,
}

/// Voltage thresholds used to quantize an analog sample into a [`Level`].
///
/// The bands are half-open:
/// - `v < low` → [`Level::Low`]
/// - `low <= v < high` → [`Level::Mid`]
/// - `v >= high` → [`Level::High`]
///
/// Defaults match a 1.8 V debug line probed with a 0.3 V / 1.2 V split, but
/// both values are plain fields so the quantizer can be retuned for other
/// signal swings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelThresholds {
    /// Upper bound (exclusive) of the `Low` band.
    pub low: f64,
    /// Lower bound (inclusive) of the `High` band.
    pub high: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        LevelThresholds {
            low: 0.3,
            high: 1.2,
        }
    }
}

impl LevelThresholds {
    /// Maps a single analog voltage to its digital [`Level`].
    ///
    /// Total over any finite float; no error conditions.
    pub fn level(&self, voltage: f64) -> Level {
        if voltage < self.low {
            Level::Low
        } else if voltage < self.high {
            Level::Mid
        } else {
            Level::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands() {
        let th = LevelThresholds::default();
        assert_eq!(th.level(0.0), Level::Low);
        assert_eq!(th.level(0.29), Level::Low);
        assert_eq!(th.level(0.5), Level::Mid);
        assert_eq!(th.level(1.19), Level::Mid);
        assert_eq!(th.level(1.8), Level::High);
    }

    #[test]
    fn boundary_values_are_mid_and_high() {
        let th = LevelThresholds::default();
        assert_eq!(th.level(0.3), Level::Mid);
        assert_eq!(th.level(1.2), Level::High);
    }

    #[test]
    fn monotonic_in_voltage() {
        let th = LevelThresholds::default();
        let mut prev = th.level(-1.0);
        for step in 0..400 {
            let v = -1.0 + step as f64 * 0.01;
            let lvl = th.level(v);
            assert!(lvl >= prev, "level regressed at v={}", v);
            prev = lvl;
        }
    }

    #[test]
    fn negative_voltage_is_low() {
        let th = LevelThresholds::default();
        assert_eq!(th.level(-0.4), Level::Low);
    }

    #[test]
    fn custom_thresholds() {
        let th = LevelThresholds {
            low: 0.8,
            high: 2.0,
        };
        assert_eq!(th.level(0.5), Level::Low);
        assert_eq!(th.level(1.2), Level::Mid);
        assert_eq!(th.level(2.0), Level::High);
    }
}
