use serde_derive::{Deserialize, Serialize};

use crate::types::decoded_byte::Direction;

/// Application-level meaning of a frame, derived from its start marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameType {
    /// Opened by the command start marker (default `0x01`).
    Command,
    /// Opened by the data start marker (default `0x02`).
    Data,
}

/// A fully validated application-level message.
///
/// A `Frame` is only materialized once its end marker and checksum have been
/// verified; partially built frames are transient state of the assembler and
/// are discarded, never exposed, on any validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame type derived from the start marker.
    pub frame_type: FrameType,
    /// Raw start marker byte as seen on the wire.
    pub start_marker: u8,
    /// Declared payload length.
    pub length: u8,
    /// Payload bytes; `data.len() == length as usize`.
    pub data: Vec<u8>,
    /// Transmitted checksum byte.
    pub checksum: u8,
    /// Transfer direction shared by every byte of the frame.
    pub direction: Direction,
    /// Timestamp of the start-marker byte, in seconds.
    pub start_time: f64,
    /// Index of the start-marker byte in the decoded byte stream.
    pub start_index: usize,
    /// Index of the end-marker byte in the decoded byte stream.
    pub end_index: usize,
}

impl Frame {
    /// Re-checks the checksum rule the assembler validated at emission:
    /// `(length + sum(data) + checksum) mod 256 == 0`.
    pub fn checksum_ok(&self) -> bool {
        let total: u32 = self.length as u32
            + self.data.iter().map(|&b| b as u32).sum::<u32>()
            + self.checksum as u32;
        total % 256 == 0
    }
}
