//! Browser bindings for the marquee engine
//!
//! - `surface`: [`DomSurface`], the web-sys implementation of the engine's
//!   [`crate::engine::Surface`]
//! - `tracks`: the track builder (wrapper, primary and duplicate tracks)
//! - `listeners`: pointer and resize listeners feeding the engine
//! - `ticker`: the fixed-cadence timer driving `tick`

pub mod listeners;
pub mod surface;
pub mod ticker;
pub mod tracks;

pub use listeners::bind_listeners;
pub use surface::DomSurface;
pub use ticker::Ticker;
pub use tracks::{Tracks, WRAPPER_CLASS};

use wasm_bindgen::JsValue;

use crate::errors::MarqueeError;

/// Convert a thrown JS value into a DOM error with some context
pub(crate) fn dom_error(context: &str) -> impl Fn(JsValue) -> MarqueeError + '_ {
    move |value| {
        let detail = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        MarqueeError::Dom(format!("{}: {}", context, detail))
    }
}
