//! # types
//!
//! `types` is the module containing all the useful public structs of the crate

pub mod config;
pub mod decoded_byte;
pub mod edge_list;
pub mod errors;
pub mod frame;
pub mod level;
pub mod sample;
pub mod summary;
