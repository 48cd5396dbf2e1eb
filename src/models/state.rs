//! Instance state for a marquee
//!
//! Holds the scroll offset, the lifecycle phase and the latest measured
//! dimensions. Scratch values used while measuring are never stored here.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the animation loop
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationPhase {
    /// Constructed, never started
    #[default]
    Idle,
    /// Ticking
    Running,
    /// Ticking suspended by hover, state retained
    Paused,
    /// Timer cancelled by `stop()` or by a fatal error
    Stopped,
    /// Original content restored; the instance is unusable
    Destroyed,
}

/// Presentation classes toggled on the container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationClass {
    Running,
    Paused,
    Stopped,
}

impl PresentationClass {
    pub const ALL: [PresentationClass; 3] = [
        PresentationClass::Running,
        PresentationClass::Paused,
        PresentationClass::Stopped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationClass::Running => "running",
            PresentationClass::Paused => "paused",
            PresentationClass::Stopped => "stopped",
        }
    }
}

/// Result of one run of the dimension calculator
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub container_width: f64,
    /// Width of one logical cycle of content (half the blocks)
    pub content_width: f64,
    /// Gap between the end of one track and the start of the next
    pub indent: f64,
}

impl Dimensions {
    /// Distance between the two tracks' resting positions: the wider of
    /// the container and a track, plus the indent. Never shorter than a
    /// track, so the tracks cannot overlap.
    pub fn span(&self) -> f64 {
        self.container_width.max(self.track_width())
    }

    /// Distance the strip travels before it looks identical again
    pub fn cycle(&self) -> f64 {
        self.span() + self.indent
    }

    /// Width given to each track
    pub fn track_width(&self) -> f64 {
        self.content_width * 2.0
    }
}

/// Mutable per-instance state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InstanceState {
    /// Current scroll offset (signed; grows for leftward travel)
    pub position: f64,
    pub phase: AnimationPhase,
    pub dimensions: Dimensions,
}

impl InstanceState {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            position: 0.0,
            phase: AnimationPhase::Idle,
            dimensions,
        }
    }

    /// True while the timer is armed (ticking or hover-paused)
    pub fn running(&self) -> bool {
        matches!(self.phase, AnimationPhase::Running | AnimationPhase::Paused)
    }

    pub fn paused(&self) -> bool {
        self.phase == AnimationPhase::Paused
    }

    pub fn indent(&self) -> f64 {
        self.dimensions.indent
    }

    pub fn content_width(&self) -> f64 {
        self.dimensions.content_width
    }

    pub fn container_width(&self) -> f64 {
        self.dimensions.container_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_covers_paused() {
        let mut state = InstanceState::default();
        assert!(!state.running());

        state.phase = AnimationPhase::Running;
        assert!(state.running());
        assert!(!state.paused());

        state.phase = AnimationPhase::Paused;
        assert!(state.running());
        assert!(state.paused());

        state.phase = AnimationPhase::Stopped;
        assert!(!state.running());
    }

    #[test]
    fn test_cycle_covers_the_wider_of_container_and_track() {
        let dims = Dimensions {
            container_width: 600.0,
            content_width: 400.0,
            indent: 200.0,
        };
        assert_eq!(dims.track_width(), 800.0);
        assert_eq!(dims.cycle(), 1000.0);

        let narrow = Dimensions {
            container_width: 600.0,
            content_width: 100.0,
            indent: 500.0,
        };
        assert_eq!(narrow.cycle(), 1100.0);
    }
}
