//! # frame
//!
//! Frame assembly: a resynchronizing state machine that groups the decoded
//! byte stream into validated application frames.
//! Use `frame::assemble::from_bytes(...)` or drive a
//! [`FrameAssembler`](crate::frame::assemble::FrameAssembler) byte by byte.

pub mod assemble;

pub use assemble::FrameAssembler;
