//! Option validation
//!
//! Every rule is checked independently so that a caller sees all problems
//! with an options object in one go. Nothing here touches the DOM.

use serde_json::Value;

use crate::errors::MarqueeError;
use crate::models::{
    Direction, GapFraction, MarqueeConfig, RawOptions, WrapGap, DEFAULT_BLOCK_SELECTOR,
    DEFAULT_SPEED, MAX_SPEED,
};

pub const TARGET_MESSAGE: &str = "targetSelector must be a non-empty string.";
pub const BLOCK_SELECTOR_MESSAGE: &str = "blockSelector must be a non-empty string.";
pub const DIRECTION_MESSAGE: &str = "Direction value must be 'right' or 'left'.";
pub const SPEED_TYPE_MESSAGE: &str = "Speed must be a number.";
pub const SPEED_MAX_MESSAGE: &str = "Maximum speed value is: 8.";
pub const SPEED_MIN_MESSAGE: &str = "Speed must be greater than 0.";
pub const WRAP_GAP_MESSAGE: &str =
    "wrapGapMode must be 'auto', a non-negative pixel gap, or one of: double, full, half, quarter.";
pub const TICK_INTERVAL_MESSAGE: &str = "tickIntervalMs must be a number greater than 0.";

/// Validate raw options into a configuration, collecting every violation
pub fn validate(raw: &RawOptions) -> Result<MarqueeConfig, Vec<String>> {
    let mut errors = Vec::new();

    let target_selector = collect(&mut errors, validate_target(raw));
    let direction = collect(&mut errors, validate_direction(present(&raw.direction)));
    let speed = collect(&mut errors, validate_speed(present(&raw.speed)));
    let wrap_gap = collect(
        &mut errors,
        validate_wrap_gap(present(&raw.wrap_gap_mode).or(present(&raw.interval))),
    );
    let block_selector = collect(
        &mut errors,
        validate_block_selector(present(&raw.block_selector)),
    );
    let tick_interval_ms = collect(
        &mut errors,
        validate_tick_interval(present(&raw.tick_interval_ms)),
    );

    match (
        target_selector,
        direction,
        speed,
        wrap_gap,
        block_selector,
        tick_interval_ms,
    ) {
        (
            Some(target_selector),
            Some(direction),
            Some(speed),
            Some(wrap_gap),
            Some(block_selector),
            Some(tick_interval_ms),
        ) if errors.is_empty() => Ok(MarqueeConfig {
            target_selector,
            block_selector,
            direction,
            speed,
            wrap_gap,
            tick_interval_ms,
        }),
        _ => Err(errors),
    }
}

/// Same as [`validate`], wrapped into the crate error type
pub fn validate_options(raw: &RawOptions) -> Result<MarqueeConfig, MarqueeError> {
    validate(raw).map_err(|messages| MarqueeError::Configuration { messages })
}

fn collect<T>(errors: &mut Vec<String>, result: Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(message);
            None
        }
    }
}

/// Absent and `null` fields both fall back to defaults
fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| !v.is_null())
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn validate_target(raw: &RawOptions) -> Result<String, String> {
    if let Some(value) = present(&raw.target_selector) {
        return non_empty_string(value).ok_or_else(|| TARGET_MESSAGE.to_string());
    }

    match present(&raw.element_class) {
        Some(value) => non_empty_string(value)
            .map(|class| format!(".{}", class))
            .ok_or_else(|| TARGET_MESSAGE.to_string()),
        None => Err(TARGET_MESSAGE.to_string()),
    }
}

fn validate_block_selector(value: Option<&Value>) -> Result<String, String> {
    match value {
        None => Ok(DEFAULT_BLOCK_SELECTOR.to_string()),
        Some(value) => non_empty_string(value).ok_or_else(|| BLOCK_SELECTOR_MESSAGE.to_string()),
    }
}

pub fn validate_direction(value: Option<&Value>) -> Result<Direction, String> {
    match value {
        None => Ok(Direction::default()),
        Some(value) => value
            .as_str()
            .and_then(Direction::parse)
            .ok_or_else(|| DIRECTION_MESSAGE.to_string()),
    }
}

pub fn validate_speed(value: Option<&Value>) -> Result<f64, String> {
    let Some(value) = value else {
        return Ok(DEFAULT_SPEED);
    };

    let speed = match value.as_f64() {
        Some(speed) if speed.is_finite() => speed,
        _ => return Err(SPEED_TYPE_MESSAGE.to_string()),
    };

    if speed > MAX_SPEED {
        return Err(SPEED_MAX_MESSAGE.to_string());
    }
    if speed <= 0.0 {
        return Err(SPEED_MIN_MESSAGE.to_string());
    }

    Ok(speed)
}

/// Accepts `"auto"`, a named fraction, a bare pixel number or the tagged
/// object form `{kind, value}`.
pub fn validate_wrap_gap(value: Option<&Value>) -> Result<WrapGap, String> {
    let gap = match value {
        None => Some(WrapGap::Auto),
        Some(Value::String(text)) if text == "auto" => Some(WrapGap::Auto),
        Some(Value::String(text)) => GapFraction::parse(text).map(WrapGap::Fraction),
        Some(Value::Number(number)) => number.as_f64().map(WrapGap::Pixels),
        Some(object @ Value::Object(_)) => serde_json::from_value::<WrapGap>(object.clone()).ok(),
        Some(_) => None,
    };

    match gap {
        Some(WrapGap::Pixels(px)) if !px.is_finite() || px < 0.0 => {
            Err(WRAP_GAP_MESSAGE.to_string())
        }
        Some(gap) => Ok(gap),
        None => Err(WRAP_GAP_MESSAGE.to_string()),
    }
}

fn validate_tick_interval(value: Option<&Value>) -> Result<Option<f64>, String> {
    match value {
        None => Ok(None),
        Some(value) => match value.as_f64() {
            Some(ms) if ms.is_finite() && ms > 0.0 => Ok(Some(ms)),
            _ => Err(TICK_INTERVAL_MESSAGE.to_string()),
        },
    }
}
