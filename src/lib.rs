//! # serial_tools
//!
//! Rust utilities for reconstructing a **byte-oriented serial protocol** from
//! a captured two-channel analog trace.
//!
//! ## Highlights
//! - **Level quantizer**: map analog volts to `Low`/`Mid`/`High` against
//!   configurable [`LevelThresholds`].
//! - **Edge detector**: reduce each channel to the minimal [`EdgeList`] that
//!   reconstructs the step waveform; any point-in-time level query is
//!   answered from the list alone.
//! - **Level sampler**: `EdgeList::level_at` resolves "what level was this
//!   channel at time t" by binary search, idle-high before the capture.
//! - **Serial byte decoder**: mid-bit sampling locked to a fixed baud clock,
//!   LSB-first, with per-byte direction inference from the companion channel
//!   (`uart::decode::from_edges`).
//! - **Frame assembler**: a resynchronizing `Idle → Len → Data → Sum → End`
//!   state machine validating length, checksum and end marker
//!   ([`FrameAssembler`]).
//! - **Batch pipeline**: [`pipeline::run`] wires all stages over two sample
//!   iterators and returns bytes, frames and a [`DecodeSummary`].
//!
//! The crate performs no file I/O: sample acquisition and frame consumption
//! happen at the boundary, as in-memory iterators in and `Vec`s out.

pub mod edge;
pub mod frame;
pub mod pipeline;
#[doc(hidden)]
pub mod types;
pub mod uart;

// Top-level re-exports (appear under Crate Items → Structs)
#[doc(inline)]
pub use crate::types::{
    config::DecoderConfig,
    decoded_byte::{DecodedByte, Direction},
    edge_list::{Edge, EdgeList},
    errors::EdgeError,
    frame::{Frame, FrameType},
    level::{Level, LevelThresholds},
    sample::Sample,
    summary::DecodeSummary,
};

// Helper re-exports for downstream convenience
pub use crate::frame::assemble::FrameAssembler;
pub use crate::pipeline::TraceDecode;
