use thiserror::Error;

/// Errors produced while reducing a channel's samples to an edge list.
///
/// Frame-level problems (checksum mismatch, wrong terminator, unknown start
/// marker) are *not* errors: the assembler drops the frame and resumes, and
/// the loss shows up in [`DecodeSummary`](crate::DecodeSummary).
#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("Channel '{channel}' has zero samples")]
    EmptyChannel { channel: String },
    #[error(
        "Channel '{channel}' sample out of order: t={time} after t={prev} (samples must be time-ascending)"
    )]
    OutOfOrderSample { channel: String, prev: f64, time: f64 },
}
