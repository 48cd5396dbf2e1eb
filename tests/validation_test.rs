// Option validation: every rule is reported, valid ranges construct

use marquee_wasm::models::{Direction, RawOptions, WrapGap};
use marquee_wasm::validation::{
    validate, validate_options, DIRECTION_MESSAGE, SPEED_MAX_MESSAGE, SPEED_MIN_MESSAGE,
};
use marquee_wasm::MarqueeError;
use serde_json::{json, Value};

fn options(mut fields: Value) -> RawOptions {
    fields["targetSelector"] = json!(".marquee");
    serde_json::from_value(fields).unwrap()
}

#[test]
fn test_invalid_directions_are_rejected() {
    for direction in [
        json!("up"),
        json!("LEFT"),
        json!(""),
        json!(0),
        json!(true),
        json!(["left"]),
    ] {
        let errors = validate(&options(json!({ "direction": direction }))).unwrap_err();
        assert_eq!(errors, vec![DIRECTION_MESSAGE.to_string()], "direction {}", direction);
    }
}

#[test]
fn test_valid_directions_are_accepted() {
    let left = validate(&options(json!({ "direction": "left" }))).unwrap();
    let right = validate(&options(json!({ "direction": "right" }))).unwrap();
    assert_eq!(left.direction, Direction::Left);
    assert_eq!(right.direction, Direction::Right);
}

#[test]
fn test_speeds_above_eight_are_rejected() {
    for speed in [8.000001, 9.0, 12.5, 100.0, 1e9] {
        let errors = validate(&options(json!({ "speed": speed }))).unwrap_err();
        assert_eq!(errors, vec![SPEED_MAX_MESSAGE.to_string()], "speed {}", speed);
    }
}

#[test]
fn test_speeds_in_range_are_accepted() {
    for speed in [0.01, 0.5, 1.0, 2.0, 4.75, 7.99, 8.0] {
        let config = validate(&options(json!({ "speed": speed }))).unwrap();
        assert_eq!(config.speed, speed);
    }
}

#[test]
fn test_non_positive_speeds_are_rejected() {
    for speed in [0.0, -0.5, -8.0] {
        let errors = validate(&options(json!({ "speed": speed }))).unwrap_err();
        assert_eq!(errors, vec![SPEED_MIN_MESSAGE.to_string()]);
    }
}

#[test]
fn test_null_fields_fall_back_to_defaults() {
    let config = validate(&options(json!({
        "direction": null,
        "speed": null,
        "wrapGapMode": null
    })))
    .unwrap();
    assert_eq!(config.direction, Direction::Left);
    assert_eq!(config.speed, 1.0);
    assert_eq!(config.wrap_gap, WrapGap::Auto);
}

#[test]
fn test_violations_are_collected_not_short_circuited() {
    let raw: RawOptions = serde_json::from_value(json!({
        "direction": 3,
        "speed": 20,
        "wrapGapMode": "most"
    }))
    .unwrap();

    match validate_options(&raw) {
        Err(MarqueeError::Configuration { messages }) => {
            assert_eq!(messages.len(), 4);
            assert!(messages[0].contains("targetSelector"));
            assert_eq!(messages[1], DIRECTION_MESSAGE);
            assert_eq!(messages[2], SPEED_MAX_MESSAGE);
            assert!(messages[3].contains("wrapGapMode"));
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = validate(&options(json!({ "colour": "red", "speed": 2 }))).unwrap();
    assert_eq!(config.speed, 2.0);
}
