//! The exported `Marquee` class
//!
//! Construction validates the options, resolves the container, builds the
//! tracks and binds the listeners; the loop stays idle until `start()`.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize_options, to_js_error};
use crate::dom::{bind_listeners, DomSurface, Ticker};
use crate::engine::MarqueeEngine;
use crate::errors::MarqueeError;
use crate::models::MarqueeConfig;
use crate::validation::validate_options;

/// A scrolling marquee bound to one container element
#[wasm_bindgen]
pub struct Marquee {
    engine: Rc<RefCell<MarqueeEngine<DomSurface>>>,
    ticker: Ticker,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl Marquee {
    /// Create a marquee from an options object:
    /// `{ targetSelector, direction?, speed?, wrapGapMode?, blockSelector?, tickIntervalMs? }`
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Marquee, JsValue> {
        deserialize_options(options)
            .and_then(|raw| validate_options(&raw))
            .and_then(Marquee::from_config)
            .map_err(|e| to_js_error(&e))
    }

    /// Start scrolling. Calling it while already running has no effect.
    pub fn start(&self) -> Result<(), JsValue> {
        let armed = self.engine.borrow_mut().start();
        match armed {
            Ok(true) => {
                let period = self.engine.borrow().config().tick_period_ms();
                self.ticker.arm(&self.engine, period);
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(e) => Err(to_js_error(&e)),
        }
    }

    /// Stop scrolling, keeping the current position
    pub fn stop(&self) -> Result<(), JsValue> {
        let stopped = self.engine.borrow_mut().stop();
        self.ticker.cancel();
        stopped.map(|_| ()).map_err(|e| to_js_error(&e))
    }

    /// Stop, unbind listeners and restore the container's original content
    pub fn destroy(&mut self) -> Result<(), JsValue> {
        self.ticker.cancel();
        self.listeners.clear();
        self.engine
            .borrow_mut()
            .destroy()
            .map_err(|e| to_js_error(&e))
    }
}

impl Marquee {
    /// Build a marquee from an already validated configuration
    pub fn from_config(config: MarqueeConfig) -> Result<Self, MarqueeError> {
        let surface = DomSurface::find(&config.target_selector, &config.block_selector)?;
        let engine = Rc::new(RefCell::new(MarqueeEngine::new(config, surface)?));

        let wrapper = engine
            .borrow()
            .surface()
            .tracks()
            .map(|tracks| tracks.wrapper.clone())
            .ok_or_else(|| MarqueeError::Dom("tracks missing after construction".to_string()))?;
        let window = web_sys::window()
            .ok_or_else(|| MarqueeError::Dom("no window available".to_string()))?;

        let ticker = Ticker::new();
        let listeners = bind_listeners(&engine, &wrapper, &window, &ticker);

        Ok(Self {
            engine,
            ticker,
            listeners,
        })
    }

    pub fn engine(&self) -> Ref<'_, MarqueeEngine<DomSurface>> {
        self.engine.borrow()
    }

    /// Whether a tick interval is currently armed
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }
}

impl Drop for Marquee {
    fn drop(&mut self) {
        self.ticker.cancel();
    }
}
