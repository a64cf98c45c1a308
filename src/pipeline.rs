//! # pipeline
//!
//! Whole-trace convenience entry point: quantize and edge-detect both
//! channels, decode the serial byte stream, then assemble frames, in one
//! call. Each stage stays usable on its own through the `edge`, `uart` and
//! `frame` modules.

use crate::edge::detect;
use crate::frame::assemble;
use crate::types::config::DecoderConfig;
use crate::types::decoded_byte::DecodedByte;
use crate::types::edge_list::EdgeList;
use crate::types::errors::EdgeError;
use crate::types::frame::Frame;
use crate::types::sample::Sample;
use crate::types::summary::DecodeSummary;
use crate::uart::decode;

/// Everything one batch run produces. Nothing is mutated after the run;
/// downstream sinks take what they need.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceDecode {
    /// Edge list of the primary (bit-carrying) channel.
    pub primary_edges: EdgeList,
    /// Edge list of the companion (direction) channel.
    pub companion_edges: EdgeList,
    /// Decoded bytes in start-time order.
    pub bytes: Vec<DecodedByte>,
    /// Validated frames in emission order.
    pub frames: Vec<Frame>,
    /// Aggregate counters; the only visibility into silently dropped frames.
    pub summary: DecodeSummary,
}

/// Runs the full pipeline over two analog channels.
///
/// `primary` carries the serial bit stream (channel A); `companion` is the
/// channel sampled for direction inference (channel B). Both must be
/// time-ascending within themselves; they need not share timestamps.
///
/// # Errors
/// - [`EdgeError::EmptyChannel`] if either channel yields no samples.
/// - [`EdgeError::OutOfOrderSample`] on a time regression in either channel.
pub fn run<P, C>(cfg: &DecoderConfig, primary: P, companion: C) -> Result<TraceDecode, EdgeError>
where
    P: IntoIterator<Item = Sample>,
    C: IntoIterator<Item = Sample>,
{
    let primary_edges: EdgeList = detect::from_samples("primary", &cfg.thresholds, primary)?;
    let companion_edges: EdgeList =
        detect::from_samples("companion", &cfg.thresholds, companion)?;

    let bytes: Vec<DecodedByte> = decode::from_edges(&primary_edges, &companion_edges, cfg);
    let (frames, summary) = assemble::from_bytes(cfg, &bytes);

    log::info!(
        "trace decoded: {} bytes scanned, {} frames emitted, {} dropped, {} resyncs",
        summary.bytes_scanned,
        summary.frames_emitted,
        summary.frames_dropped,
        summary.resyncs
    );

    Ok(TraceDecode {
        primary_edges,
        companion_edges,
        bytes,
        frames,
        summary,
    })
}
