//! Core building blocks shared by every system
//!
//! - utils/log.rs - logging macros (console on wasm32, tracing natively)
//! - key.rs       - canonical reaction keys

#[macro_use]
pub mod utils;
pub mod key;
