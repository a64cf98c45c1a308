//! # uart
//!
//! Asynchronous serial decoding: walk the primary channel's edge list,
//! mid-bit sample 8 LSB-first data bits per start edge, and infer the
//! transfer direction from the companion channel.
//! Use `uart::decode::from_edges(...)` to recover the byte stream.

pub mod decode;
pub(crate) mod direction;
