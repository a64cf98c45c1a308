use serde_derive::{Deserialize, Serialize};

/// Which physical channel originated a decoded byte.
///
/// Channel A is the primary channel (the one whose edges the decoder walks);
/// channel B is the companion channel sampled for direction inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Byte sent by channel A, received by channel B. Framed 8N1.
    AToB,
    /// Byte sent by channel B, received by channel A. Framed 8N2.
    BToA,
}

/// One byte recovered from the serial bit stream.
///
/// Produced by the serial byte decoder; immutable once emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedByte {
    /// Timestamp of the start-bit edge, in seconds.
    pub start_time: f64,
    /// Recovered byte value (8 data bits, LSB-first on the wire).
    pub value: u8,
    /// Inferred transfer direction, classified once per byte at bit index 0.
    pub direction: Direction,
}
