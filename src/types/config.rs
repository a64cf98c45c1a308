use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};

use crate::types::frame::FrameType;
use crate::types::level::LevelThresholds;

/// Every tunable of the decode pipeline, kept as data instead of literals.
///
/// [`DecoderConfig::default`] matches the link this crate was written
/// against: a 115200 baud debug line, 8 data bits, 1 stop bit towards the
/// board and 2 back, `0x01`/`0x02` start markers and a `0x03` terminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Fixed baud rate; the bit period is `1 / baud_rate`.
    pub baud_rate: u32,
    /// Voltage bands for the level quantizer.
    pub thresholds: LevelThresholds,
    /// Data bits per serial frame, LSB-first.
    pub data_bits: u8,
    /// Stop bits for direction A→B.
    pub stop_bits_short: u8,
    /// Stop bits for direction B→A.
    pub stop_bits_long: u8,
    /// Start marker byte → frame type.
    pub frame_start_markers: HashMap<u8, FrameType>,
    /// Fixed frame terminator byte.
    pub frame_end_marker: u8,
    /// Inter-byte gap, in bit periods, beyond which the assembler assumes the
    /// link went idle and force-resets.
    pub resync_tolerance_bit_periods: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        let mut frame_start_markers: HashMap<u8, FrameType> = HashMap::new();
        frame_start_markers.insert(0x01, FrameType::Command);
        frame_start_markers.insert(0x02, FrameType::Data);

        DecoderConfig {
            baud_rate: 115200,
            thresholds: LevelThresholds::default(),
            data_bits: 8,
            stop_bits_short: 1,
            stop_bits_long: 2,
            frame_start_markers,
            frame_end_marker: 0x03,
            resync_tolerance_bit_periods: 100,
        }
    }
}

impl DecoderConfig {
    /// Seconds per bit at the configured baud rate.
    pub fn bit_period(&self) -> f64 {
        1.0 / self.baud_rate as f64
    }

    /// Resync tolerance in seconds.
    pub fn resync_tolerance(&self) -> f64 {
        self.bit_period() * self.resync_tolerance_bit_periods as f64
    }
}
