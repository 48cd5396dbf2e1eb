//! Layout calculation for the marquee strip
//!
//! Pure functions turning raw measurements into track dimensions. The
//! engine re-runs them on every resize.

pub mod dimensions;

pub use dimensions::{compute_dimensions, compute_indent, content_width, Measurements};
