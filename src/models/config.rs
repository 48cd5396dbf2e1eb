//! Marquee configuration
//!
//! `RawOptions` mirrors the options object handed over from JavaScript and
//! keeps every field loosely typed so the validator can report all
//! violations at once. `MarqueeConfig` is the validated, immutable result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::direction::Direction;

/// Upper bound for `speed`
pub const MAX_SPEED: f64 = 8.0;

/// Speed used when the option is absent
pub const DEFAULT_SPEED: f64 = 1.0;

/// Selector for content blocks when the option is absent
pub const DEFAULT_BLOCK_SELECTOR: &str = ".marquee-block";

/// Options object as supplied by the caller, before validation
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    #[serde(default)]
    pub target_selector: Option<Value>,
    /// Legacy: class name of the container, without the leading dot
    #[serde(default)]
    pub element_class: Option<Value>,
    #[serde(default)]
    pub block_selector: Option<Value>,
    #[serde(default)]
    pub direction: Option<Value>,
    #[serde(default)]
    pub speed: Option<Value>,
    #[serde(default)]
    pub wrap_gap_mode: Option<Value>,
    /// Legacy alias of `wrapGapMode`
    #[serde(default)]
    pub interval: Option<Value>,
    #[serde(default)]
    pub tick_interval_ms: Option<Value>,
}

/// Named fractions of the container width used as the wraparound gap
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GapFraction {
    Double,
    Full,
    Half,
    Quarter,
}

impl GapFraction {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "double" => Some(GapFraction::Double),
            "full" => Some(GapFraction::Full),
            "half" => Some(GapFraction::Half),
            "quarter" => Some(GapFraction::Quarter),
            _ => None,
        }
    }

    /// Multiple of the container width this fraction stands for
    pub fn factor(&self) -> f64 {
        match self {
            GapFraction::Double => 2.0,
            GapFraction::Full => 1.0,
            GapFraction::Half => 0.5,
            GapFraction::Quarter => 0.25,
        }
    }
}

/// Policy for the gap inserted between the two tracks
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum WrapGap {
    /// Duplicate starts where the visible container ends
    #[default]
    Auto,
    /// Gap is a fixed fraction of the container width
    Fraction(GapFraction),
    /// Gap is the leftover container space plus a pixel constant
    Pixels(f64),
}

/// Validated marquee configuration (immutable after construction)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarqueeConfig {
    pub target_selector: String,
    pub block_selector: String,
    pub direction: Direction,
    pub speed: f64,
    pub wrap_gap: WrapGap,
    /// Explicit tick period; `None` keeps the period coupled to `speed`
    pub tick_interval_ms: Option<f64>,
}

impl MarqueeConfig {
    /// Configuration with every optional field at its default
    pub fn new(target_selector: impl Into<String>) -> Self {
        Self {
            target_selector: target_selector.into(),
            block_selector: DEFAULT_BLOCK_SELECTOR.to_string(),
            direction: Direction::default(),
            speed: DEFAULT_SPEED,
            wrap_gap: WrapGap::default(),
            tick_interval_ms: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_wrap_gap(mut self, wrap_gap: WrapGap) -> Self {
        self.wrap_gap = wrap_gap;
        self
    }

    /// Timer period in whole milliseconds.
    ///
    /// Without an explicit `tick_interval_ms` the period equals `speed`, so
    /// slower speeds also tick faster.
    pub fn tick_period_ms(&self) -> u32 {
        let period = self.tick_interval_ms.unwrap_or(self.speed);
        period.round().max(1.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarqueeConfig::new(".marquee");
        assert_eq!(config.direction, Direction::Left);
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.wrap_gap, WrapGap::Auto);
        assert_eq!(config.block_selector, ".marquee-block");
    }

    #[test]
    fn test_tick_period_follows_speed_by_default() {
        let config = MarqueeConfig::new(".m").with_speed(3.0);
        assert_eq!(config.tick_period_ms(), 3);

        let slow = MarqueeConfig::new(".m").with_speed(0.25);
        assert_eq!(slow.tick_period_ms(), 1);
    }

    #[test]
    fn test_explicit_tick_period_wins() {
        let mut config = MarqueeConfig::new(".m").with_speed(3.0);
        config.tick_interval_ms = Some(16.0);
        assert_eq!(config.tick_period_ms(), 16);
    }

    #[test]
    fn test_raw_options_use_camel_case_keys() {
        let raw: RawOptions = serde_json::from_value(serde_json::json!({
            "targetSelector": ".m",
            "wrapGapMode": "half",
            "tickIntervalMs": 16
        }))
        .unwrap();
        assert_eq!(raw.target_selector, Some(Value::from(".m")));
        assert_eq!(raw.wrap_gap_mode, Some(Value::from("half")));
        assert!(raw.tick_interval_ms.is_some());
    }
}
