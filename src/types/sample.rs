use serde_derive::{Deserialize, Serialize};

/// A single analog datapoint: *when* a channel was probed and *what* it read.
///
/// Samples are read-only input to the pipeline. Within one channel they are
/// expected in non-decreasing time order; a strictly smaller timestamp than
/// its predecessor is reported as a data-quality error by the edge detector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// Capture timestamp in seconds.
    pub time: f64,
    /// Probed voltage in volts.
    pub voltage: f64,
}

impl Sample {
    pub fn new(time: f64, voltage: f64) -> Self {
        Sample { time, voltage }
    }
}
