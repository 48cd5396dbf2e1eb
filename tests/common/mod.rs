// In-memory surface shared by the engine integration tests.
//
// Geometry follows the DOM layout: the duplicate track rests one cycle
// behind the primary and moves with the rendered offset.

#![allow(dead_code)]

use std::collections::BTreeSet;

use marquee_wasm::engine::{Surface, TrackPlacement};
use marquee_wasm::layout::Measurements;
use marquee_wasm::models::{Direction, MarqueeConfig, PresentationClass, WrapGap};
use marquee_wasm::{MarqueeEngine, MarqueeError};

pub const ORIGINAL_MARKUP: &str =
    r#"<div class="marquee-block">A</div><div class="marquee-block">A</div>"#;

#[derive(Debug, Clone, PartialEq)]
pub struct FakeTracks {
    pub primary_markup: String,
    pub duplicate_markup: String,
    pub track_width: f64,
    pub duplicate_origin: f64,
    pub margin: f64,
}

#[derive(Debug, Clone)]
pub struct FakeSurface {
    pub container_width: f64,
    pub block_count: usize,
    pub block_width: f64,
    pub content: String,
    pub tracks: Option<FakeTracks>,
    pub offset: f64,
    pub classes: BTreeSet<&'static str>,
    pub detached: bool,
    pub fail_classes: bool,
    pub builds: usize,
    pub placements: usize,
}

impl FakeSurface {
    pub fn new(container_width: f64, block_count: usize, block_width: f64) -> Self {
        Self {
            container_width,
            block_count,
            block_width,
            content: ORIGINAL_MARKUP.to_string(),
            tracks: None,
            offset: 0.0,
            classes: BTreeSet::new(),
            detached: false,
            fail_classes: false,
            builds: 0,
            placements: 0,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn tracks(&self) -> &FakeTracks {
        self.tracks.as_ref().expect("tracks built")
    }

    fn place(&mut self, placement: &TrackPlacement) {
        let tracks = self.tracks.as_mut().expect("tracks built");
        tracks.track_width = placement.track_width();
        tracks.duplicate_origin = placement.duplicate_origin();
        tracks.margin = match placement.direction {
            Direction::Left => -placement.indent(),
            Direction::Right => placement.indent(),
        };
        self.placements += 1;
    }
}

impl Surface for FakeSurface {
    fn measure(&self) -> Result<Measurements, MarqueeError> {
        if self.detached {
            return Err(MarqueeError::Detached);
        }
        Ok(Measurements {
            container_width: self.container_width,
            block_count: self.block_count,
            block_width: self.block_width,
        })
    }

    fn build_tracks(&mut self, placement: &TrackPlacement) -> Result<(), MarqueeError> {
        let markup = std::mem::replace(&mut self.content, "<div class=\"wrapper\"></div>".into());
        self.tracks = Some(FakeTracks {
            primary_markup: markup.clone(),
            duplicate_markup: markup,
            track_width: 0.0,
            duplicate_origin: 0.0,
            margin: 0.0,
        });
        self.builds += 1;
        self.place(placement);
        Ok(())
    }

    fn place_duplicate(&mut self, placement: &TrackPlacement) -> Result<(), MarqueeError> {
        self.place(placement);
        Ok(())
    }

    fn leading_edge(&self) -> Result<f64, MarqueeError> {
        if self.detached {
            return Err(MarqueeError::Detached);
        }
        Ok(self.tracks().duplicate_origin + self.offset)
    }

    fn apply_offset(&mut self, offset: f64) -> Result<(), MarqueeError> {
        if self.detached {
            return Err(MarqueeError::Detached);
        }
        self.offset = offset;
        Ok(())
    }

    fn set_class(&mut self, class: PresentationClass, enabled: bool) -> Result<(), MarqueeError> {
        if self.fail_classes {
            return Err(MarqueeError::Dom(format!("classList rejected {}", class.as_str())));
        }
        if enabled {
            self.classes.insert(class.as_str());
        } else {
            self.classes.remove(class.as_str());
        }
        Ok(())
    }

    fn restore(&mut self) -> Result<(), MarqueeError> {
        if let Some(tracks) = self.tracks.take() {
            self.content = tracks.primary_markup;
        }
        Ok(())
    }
}

/// Engine over a 600px container with two 400px blocks
pub fn engine_600_400(direction: Direction, speed: f64) -> MarqueeEngine<FakeSurface> {
    engine_with(direction, speed, WrapGap::Auto, FakeSurface::new(600.0, 2, 400.0))
}

pub fn engine_with(
    direction: Direction,
    speed: f64,
    wrap_gap: WrapGap,
    surface: FakeSurface,
) -> MarqueeEngine<FakeSurface> {
    let config = MarqueeConfig::new(".marquee")
        .with_direction(direction)
        .with_speed(speed)
        .with_wrap_gap(wrap_gap);
    MarqueeEngine::new(config, surface).expect("engine builds")
}
