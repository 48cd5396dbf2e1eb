//! Fixed-cadence timer driving the animation loop
//!
//! The timer handle lives in a shared slot so that both the owner (on
//! `stop`/`destroy`) and the timer's own callback (on a fatal tick) can
//! cancel the exact interval that was armed. Dropping the handle clears it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Interval;

use crate::engine::{MarqueeEngine, Surface};

/// Owner of at most one running interval
#[derive(Clone, Default)]
pub struct Ticker {
    slot: Rc<RefCell<Option<Interval>>>,
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("armed", &self.is_armed())
            .finish()
    }
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm an interval forwarding to `engine.tick()` every `period_ms`.
    ///
    /// Any interval armed earlier is cancelled first. The callback only
    /// holds weak references, so it never keeps a dropped instance alive.
    pub fn arm<S: Surface + 'static>(&self, engine: &Rc<RefCell<MarqueeEngine<S>>>, period_ms: u32) {
        self.cancel();

        let engine = Rc::downgrade(engine);
        let slot = Rc::downgrade(&self.slot);
        let interval = Interval::new(period_ms, move || {
            let Some(engine) = engine.upgrade() else {
                cancel_slot(&slot);
                return;
            };
            let Ok(mut engine) = engine.try_borrow_mut() else {
                return;
            };
            if engine.tick().is_err() {
                drop(engine);
                cancel_slot(&slot);
            }
        });

        *self.slot.borrow_mut() = Some(interval);
        log::debug!("tick interval armed every {}ms", period_ms);
    }

    /// Cancel the armed interval, if any. Returns whether one was armed.
    pub fn cancel(&self) -> bool {
        let handle = self.slot.borrow_mut().take();
        let was_armed = handle.is_some();
        drop(handle);
        was_armed
    }

    pub fn is_armed(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

fn cancel_slot(slot: &Weak<RefCell<Option<Interval>>>) {
    if let Some(slot) = slot.upgrade() {
        let handle = slot.borrow_mut().take();
        drop(handle);
        log::debug!("tick interval cancelled from its own callback");
    }
}
