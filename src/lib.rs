//! Marquee WASM Module
//!
//! A continuously scrolling content strip for the browser. Content is
//! wrapped into two tracks that tile seamlessly, scrolled on a fixed
//! cadence, paused on hover and re-measured on viewport resize.
//!
//! The engine itself is host independent (see [`engine::Surface`]); the
//! [`api`] module binds it to the real DOM and exports the `Marquee` class.

pub mod api;
pub mod dom;
pub mod engine;
pub mod errors;
pub mod layout;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use api::Marquee;
pub use engine::{MarqueeEngine, Surface, TickOutcome};
pub use errors::MarqueeError;
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&"[WASM] logger already initialized".into());
        }
    }

    log::info!("Marquee WASM module initialized");
}
