//! Event coordinator
//!
//! Pointer enter/leave on the wrapper pause and resume the loop; window
//! resize re-measures. The returned listeners unbind when dropped, so the
//! owner releases them on destroy.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Event, EventTarget};

use super::ticker::Ticker;
use crate::engine::{MarqueeEngine, MarqueeEvent, Surface};

/// Bind the pointer listeners on `wrapper` and the resize listener on
/// `window`.
///
/// A listener whose event fails (e.g. the container vanished before a
/// resize) also cancels the ticker, since the engine has halted.
pub fn bind_listeners<S: Surface + 'static>(
    engine: &Rc<RefCell<MarqueeEngine<S>>>,
    wrapper: &EventTarget,
    window: &EventTarget,
    ticker: &Ticker,
) -> Vec<EventListener> {
    vec![
        listen(engine, wrapper, MarqueeEvent::PointerEnter, ticker),
        listen(engine, wrapper, MarqueeEvent::PointerLeave, ticker),
        listen(engine, window, MarqueeEvent::Resize, ticker),
    ]
}

fn listen<S: Surface + 'static>(
    engine: &Rc<RefCell<MarqueeEngine<S>>>,
    target: &EventTarget,
    kind: MarqueeEvent,
    ticker: &Ticker,
) -> EventListener {
    let engine = Rc::downgrade(engine);
    let ticker = ticker.clone();

    EventListener::new(target, kind.dom_type(), move |event: &Event| {
        let Some(engine) = engine.upgrade() else {
            return;
        };
        let Ok(mut engine) = engine.try_borrow_mut() else {
            log::warn!("{} ignored: marquee busy", kind.dom_type());
            return;
        };

        if let Err(err) = engine.handle_event(kind, event.is_trusted()) {
            log::error!("{} handling failed: {}", kind.dom_type(), err);
            ticker.cancel();
        }
    })
}
