use serde_derive::{Deserialize, Serialize};

/// Aggregate counters for one assembly run over a decoded byte stream.
///
/// Malformed frames are dropped silently byte-by-byte, so these totals are
/// the only place the loss becomes observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeSummary {
    /// Decoded bytes fed to the frame assembler.
    pub bytes_scanned: usize,
    /// Frames that passed end-marker and checksum validation.
    pub frames_emitted: usize,
    /// Frames that reached the end state but failed validation.
    pub frames_dropped: usize,
    /// Hard resets forced by a timing gap or direction flip.
    pub resyncs: usize,
}
