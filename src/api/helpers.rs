//! Shared helpers for the WASM API
//!
//! Conversion of options coming in from JavaScript and of errors going
//! back out.

use wasm_bindgen::prelude::*;

use crate::errors::MarqueeError;
use crate::models::RawOptions;

// ============================================================================
// Deserialization Helpers
// ============================================================================

pub const OPTIONS_MESSAGE: &str = "Marquee options must be an object.";

/// Deserialize the constructor options.
///
/// A malformed options object is reported like any other configuration
/// violation.
pub fn deserialize_options(value: JsValue) -> Result<RawOptions, MarqueeError> {
    if !value.is_object() {
        return Err(MarqueeError::Configuration {
            messages: vec![OPTIONS_MESSAGE.to_string()],
        });
    }

    serde_wasm_bindgen::from_value(value).map_err(|e| MarqueeError::Configuration {
        messages: vec![format!("{} ({})", OPTIONS_MESSAGE, e)],
    })
}

// ============================================================================
// Error Conversion Helpers
// ============================================================================

/// Convert a marquee error into a JS `Error` whose `name` names the variant.
///
/// Configuration errors also carry a `messages` array with one entry per
/// violated rule; each of them is logged.
pub fn to_js_error(err: &MarqueeError) -> JsValue {
    let error = js_sys::Error::new(&err.to_string());
    error.set_name(err.name());

    if let MarqueeError::Configuration { messages } = err {
        let list = js_sys::Array::new();
        for message in messages {
            log::error!("{}", message);
            list.push(&JsValue::from_str(message));
        }
        if js_sys::Reflect::set(&error, &JsValue::from_str("messages"), &list).is_err() {
            log::warn!("could not attach messages to ConfigurationError");
        }
    } else {
        log::error!("{}", err);
    }

    error.into()
}
