//! Host surface abstraction
//!
//! Everything the engine needs from the page goes through [`Surface`]:
//! measuring, building and re-placing the tracks, reading the tracked edge,
//! rendering the offset and toggling presentation classes. The browser
//! implementation lives in [`crate::dom`].

use crate::errors::MarqueeError;
use crate::layout::Measurements;
use crate::models::{Dimensions, Direction, PresentationClass};

/// Where the tracks go for a given direction and set of dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPlacement {
    pub direction: Direction,
    pub dimensions: Dimensions,
}

impl TrackPlacement {
    pub fn new(direction: Direction, dimensions: Dimensions) -> Self {
        Self {
            direction,
            dimensions,
        }
    }

    /// Resting x of the duplicate's leading edge relative to the container:
    /// one span (container or track, whichever is wider) plus the indent,
    /// behind the direction of travel.
    pub fn duplicate_origin(&self) -> f64 {
        self.direction.duplicate_origin(self.dimensions.cycle())
    }

    pub fn span(&self) -> f64 {
        self.dimensions.span()
    }

    pub fn track_width(&self) -> f64 {
        self.dimensions.track_width()
    }

    pub fn indent(&self) -> f64 {
        self.dimensions.indent
    }
}

/// Host operations used by [`super::MarqueeEngine`]
pub trait Surface {
    /// Measure the container and its content blocks.
    ///
    /// Before the tracks exist the blocks are counted in the container;
    /// afterwards only the primary track's blocks count.
    fn measure(&self) -> Result<Measurements, MarqueeError>;

    /// Move the container content into a primary track, clone it as the
    /// duplicate and mount both inside the wrapper.
    fn build_tracks(&mut self, placement: &TrackPlacement) -> Result<(), MarqueeError>;

    /// Re-offset the duplicate track without rebuilding anything
    fn place_duplicate(&mut self, placement: &TrackPlacement) -> Result<(), MarqueeError>;

    /// Current x of the duplicate's leading edge relative to the container
    /// origin, as rendered
    fn leading_edge(&self) -> Result<f64, MarqueeError>;

    /// Render the scroll offset as a horizontal translation of the wrapper
    fn apply_offset(&mut self, offset: f64) -> Result<(), MarqueeError>;

    fn set_class(&mut self, class: PresentationClass, enabled: bool) -> Result<(), MarqueeError>;

    /// Put the captured markup back and drop the wrapper
    fn restore(&mut self) -> Result<(), MarqueeError>;
}
