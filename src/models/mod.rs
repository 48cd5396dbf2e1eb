//! Models module for the marquee engine
//!
//! This module contains the configuration, direction and instance state
//! types shared by the validator, the layout code and the engine.

pub mod config;
pub mod direction;
pub mod state;

// Re-export commonly used types
pub use config::*;
pub use direction::Direction;
pub use state::*;
