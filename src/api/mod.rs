//! Marquee WASM API
//!
//! This module provides the JavaScript-facing API: a single `Marquee`
//! class with `start`, `stop` and `destroy`.
//!
//! # Module Structure
//!
//! - `helpers`: option deserialization and error conversion
//! - `marquee`: the exported class, wiring the engine to timers and listeners

pub mod helpers;
pub mod marquee;

pub use marquee::Marquee;
