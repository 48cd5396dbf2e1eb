//! Dimension calculator
//!
//! The container markup holds one logical cycle of content duplicated once,
//! so the width of a single cycle is half the block count times the width
//! of one block. The indent decides how far apart the two tracks sit.

use serde::{Deserialize, Serialize};

use crate::models::{Dimensions, WrapGap};

/// Raw measurements read from the host
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    pub container_width: f64,
    pub block_count: usize,
    /// Rendered width of the first block; blocks are assumed equally sized
    pub block_width: f64,
}

/// Width of one logical cycle of content
pub fn content_width(block_count: usize, block_width: f64) -> f64 {
    (block_count as f64 / 2.0) * block_width
}

/// Gap between the end of one track and the start of the next.
///
/// Content at least as wide as the container needs no gap. Narrower
/// content is padded according to the gap policy.
pub fn compute_indent(container_width: f64, content_width: f64, wrap_gap: WrapGap) -> f64 {
    if content_width > container_width {
        return 0.0;
    }

    let leftover = container_width - content_width;
    match wrap_gap {
        WrapGap::Auto => leftover,
        WrapGap::Fraction(fraction) => container_width * fraction.factor(),
        WrapGap::Pixels(px) => leftover + px,
    }
}

/// Run the full calculation for one set of measurements
pub fn compute_dimensions(measurements: &Measurements, wrap_gap: WrapGap) -> Dimensions {
    let content_width = content_width(measurements.block_count, measurements.block_width);
    let indent = compute_indent(measurements.container_width, content_width, wrap_gap);

    Dimensions {
        container_width: measurements.container_width,
        content_width,
        indent,
    }
}
