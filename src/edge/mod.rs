//! # edge
//!
//! Edge detection: reduce a channel's time-ordered samples to the minimal
//! [`EdgeList`](crate::EdgeList) that reconstructs the step waveform.
//! Use `edge::detect::from_samples(...)` for analog input or
//! `edge::detect::from_levels(...)` for pre-quantized input.

pub mod detect;
