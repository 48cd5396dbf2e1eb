//! Marquee engine
//!
//! The engine owns the instance state and the animation state machine:
//!
//! ```text
//!   Idle ──start──▶ Running ◀──pointer leave── Paused
//!                    │   └──pointer enter──▶ ─┘   │
//!                    └──stop / fatal error──▶ Stopped ◀──┘
//!   any ──destroy──▶ Destroyed
//! ```
//!
//! It never schedules anything itself. The host shell arms a timer when
//! [`MarqueeEngine::start`] asks for one, forwards each timer callback to
//! [`MarqueeEngine::tick`] and each listener callback to
//! [`MarqueeEngine::handle_event`], and cancels the timer when `stop`,
//! `destroy` or a failed tick says so.

pub mod events;
pub mod surface;

pub use events::MarqueeEvent;
pub use surface::{Surface, TrackPlacement};

use crate::errors::MarqueeError;
use crate::layout::{compute_dimensions, Measurements};
use crate::models::{AnimationPhase, Dimensions, InstanceState, MarqueeConfig, PresentationClass};

/// What a single tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Rendered and advanced
    Advanced,
    /// Cycle completed: offset snapped to 0, rendered and advanced
    Reset,
    /// Hover-paused; nothing changed
    Held,
    /// Not running; nothing changed
    Inactive,
}

/// Animation and layout engine for one marquee instance
#[derive(Debug)]
pub struct MarqueeEngine<S: Surface> {
    config: MarqueeConfig,
    surface: S,
    state: InstanceState,
    /// Offset the surface currently shows
    rendered: f64,
}

impl<S: Surface> MarqueeEngine<S> {
    /// Measure the content, build both tracks and leave the loop idle
    pub fn new(config: MarqueeConfig, mut surface: S) -> Result<Self, MarqueeError> {
        let dimensions = measure_dimensions(&surface, &config)?;
        let placement = TrackPlacement::new(config.direction, dimensions);
        surface.build_tracks(&placement)?;

        log::debug!(
            "marquee '{}' built: container={}px content={}px indent={}px direction={}",
            config.target_selector,
            dimensions.container_width,
            dimensions.content_width,
            dimensions.indent,
            config.direction.as_str()
        );

        Ok(Self {
            config,
            surface,
            state: InstanceState::new(dimensions),
            rendered: 0.0,
        })
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    pub fn state(&self) -> &InstanceState {
        &self.state
    }

    pub fn position(&self) -> f64 {
        self.state.position
    }

    pub fn phase(&self) -> AnimationPhase {
        self.state.phase
    }

    pub fn dimensions(&self) -> Dimensions {
        self.state.dimensions
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Enter the running state.
    ///
    /// Returns `true` when the caller must arm a new tick timer. Starting an
    /// instance that is already running (or hover-paused) does nothing, so at
    /// most one timer ever drives an instance. Listeners are inert while not
    /// running, so the layout is re-measured before the loop resumes.
    pub fn start(&mut self) -> Result<bool, MarqueeError> {
        match self.state.phase {
            AnimationPhase::Destroyed => Err(MarqueeError::Destroyed),
            AnimationPhase::Running | AnimationPhase::Paused => {
                log::warn!("marquee '{}' is already running", self.config.target_selector);
                Ok(false)
            }
            AnimationPhase::Idle | AnimationPhase::Stopped => {
                let remeasured = self.remeasure().and_then(|_| {
                    self.surface.set_class(PresentationClass::Stopped, false)?;
                    self.surface.set_class(PresentationClass::Running, true)
                });
                self.halt_on_error(remeasured)?;
                self.state.phase = AnimationPhase::Running;
                log::info!(
                    "marquee '{}' started at position {}",
                    self.config.target_selector,
                    self.state.position
                );
                Ok(true)
            }
        }
    }

    /// Leave the running state, keeping the position.
    ///
    /// Returns `true` when the caller must cancel its tick timer.
    pub fn stop(&mut self) -> Result<bool, MarqueeError> {
        match self.state.phase {
            AnimationPhase::Destroyed => Err(MarqueeError::Destroyed),
            AnimationPhase::Running | AnimationPhase::Paused => {
                self.state.phase = AnimationPhase::Stopped;
                self.show_stopped()?;
                log::info!(
                    "marquee '{}' stopped at position {}",
                    self.config.target_selector,
                    self.state.position
                );
                Ok(true)
            }
            AnimationPhase::Idle | AnimationPhase::Stopped => Ok(false),
        }
    }

    /// One timer callback: reset check, render, advance.
    ///
    /// A surface failure halts the instance and is returned so the caller
    /// can cancel its timer; the instance is left in `Stopped`.
    pub fn tick(&mut self) -> Result<TickOutcome, MarqueeError> {
        match self.state.phase {
            AnimationPhase::Running => {}
            AnimationPhase::Paused => return Ok(TickOutcome::Held),
            _ => return Ok(TickOutcome::Inactive),
        }

        let outcome = self.step();
        self.halt_on_error(outcome)
    }

    fn step(&mut self) -> Result<TickOutcome, MarqueeError> {
        // The surface shows the last rendered offset; project its edge to
        // the offset about to be rendered.
        let edge = self.surface.leading_edge()? + (self.state.position - self.rendered);
        let reset = self.config.direction.has_completed_cycle(edge);
        if reset {
            self.state.position = 0.0;
        }

        self.surface.apply_offset(self.state.position)?;
        self.rendered = self.state.position;

        self.state.position = self
            .config
            .direction
            .advance(self.state.position, self.config.speed);

        if reset {
            log::trace!("marquee '{}' completed a cycle", self.config.target_selector);
            Ok(TickOutcome::Reset)
        } else {
            Ok(TickOutcome::Advanced)
        }
    }

    /// Apply a host event.
    ///
    /// Events are ignored unless the instance is running and the event was
    /// dispatched by the user agent. Returns whether anything changed.
    pub fn handle_event(&mut self, event: MarqueeEvent, trusted: bool) -> Result<bool, MarqueeError> {
        if !trusted || !self.state.running() {
            return Ok(false);
        }

        let applied = match event {
            MarqueeEvent::PointerEnter => {
                self.state.phase = AnimationPhase::Paused;
                log::debug!("marquee '{}' paused", self.config.target_selector);
                self.show(PresentationClass::Paused, PresentationClass::Running)
            }
            MarqueeEvent::PointerLeave => {
                self.state.phase = AnimationPhase::Running;
                log::debug!("marquee '{}' resumed", self.config.target_selector);
                self.show(PresentationClass::Running, PresentationClass::Paused)
            }
            MarqueeEvent::Resize => self.remeasure().map(|_| ()),
        };
        self.halt_on_error(applied)?;

        Ok(true)
    }

    fn show(&mut self, on: PresentationClass, off: PresentationClass) -> Result<(), MarqueeError> {
        self.surface.set_class(on, true)?;
        self.surface.set_class(off, false)
    }

    /// Recompute dimensions and re-offset the duplicate track in place
    pub fn remeasure(&mut self) -> Result<Dimensions, MarqueeError> {
        let dimensions = measure_dimensions(&self.surface, &self.config)?;
        let placement = TrackPlacement::new(self.config.direction, dimensions);
        self.surface.place_duplicate(&placement)?;

        if dimensions != self.state.dimensions {
            log::debug!(
                "marquee '{}' remeasured: container={}px content={}px indent={}px",
                self.config.target_selector,
                dimensions.container_width,
                dimensions.content_width,
                dimensions.indent
            );
        }
        self.state.dimensions = dimensions;

        Ok(dimensions)
    }

    /// Stop, restore the original content and retire the instance.
    ///
    /// Destroying twice is a no-op.
    pub fn destroy(&mut self) -> Result<(), MarqueeError> {
        if self.state.phase == AnimationPhase::Destroyed {
            log::warn!("marquee '{}' already destroyed", self.config.target_selector);
            return Ok(());
        }

        if self.state.running() {
            self.state.phase = AnimationPhase::Stopped;
        }
        // The markup is restored even when class cleanup fails; there is no
        // second chance once the phase is Destroyed.
        let cleared = self.clear_classes();
        let restored = self.surface.restore();
        self.state.phase = AnimationPhase::Destroyed;

        if let Err(err) = &cleared {
            log::warn!("could not clear marquee classes: {}", err);
        }
        log::info!("marquee '{}' destroyed", self.config.target_selector);
        restored.and(cleared)
    }

    fn halt_on_error<T>(&mut self, result: Result<T, MarqueeError>) -> Result<T, MarqueeError> {
        if let Err(err) = &result {
            log::error!("marquee '{}' halted: {}", self.config.target_selector, err);
            self.state.phase = AnimationPhase::Stopped;
            if let Err(class_err) = self.show_stopped() {
                log::warn!("could not mark marquee as stopped: {}", class_err);
            }
        }
        result
    }

    fn show_stopped(&mut self) -> Result<(), MarqueeError> {
        self.surface.set_class(PresentationClass::Running, false)?;
        self.surface.set_class(PresentationClass::Paused, false)?;
        self.surface.set_class(PresentationClass::Stopped, true)
    }

    fn clear_classes(&mut self) -> Result<(), MarqueeError> {
        for class in PresentationClass::ALL {
            self.surface.set_class(class, false)?;
        }
        Ok(())
    }
}

fn measure_dimensions<S: Surface>(
    surface: &S,
    config: &MarqueeConfig,
) -> Result<Dimensions, MarqueeError> {
    let measurements: Measurements = surface.measure()?;

    if measurements.block_count == 0 {
        return Err(MarqueeError::NoContentBlocks(config.block_selector.clone()));
    }
    if measurements.block_count % 2 != 0 {
        log::warn!(
            "marquee '{}' has an odd number of blocks ({}); content is expected to be duplicated once",
            config.target_selector,
            measurements.block_count
        );
    }

    Ok(compute_dimensions(&measurements, config.wrap_gap))
}
