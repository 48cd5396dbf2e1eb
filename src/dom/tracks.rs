//! Track builder
//!
//! Layout inside the container once built:
//!
//! ```text
//! container
//! └── div.wrapper            (translated by the scroll offset)
//!     ├── div  primary track   left: 0
//!     └── div  duplicate track left: ±span, margin-left: ±indent
//! ```
//!
//! The primary track receives a copy of the container markup; the duplicate
//! is a deep clone of the primary. `span` is the wider of the container and
//! a track, so the two tracks abut or are separated only by the indent.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::dom_error;
use crate::engine::TrackPlacement;
use crate::errors::MarqueeError;

/// Class given to the wrapper element
pub const WRAPPER_CLASS: &str = "wrapper";

/// The elements created by [`Tracks::build`]
#[derive(Debug, Clone)]
pub struct Tracks {
    pub wrapper: HtmlElement,
    pub primary: HtmlElement,
    pub duplicate: HtmlElement,
}

impl Tracks {
    /// Capture the container markup into two tracks and mount them.
    ///
    /// The container's own children are replaced by the wrapper.
    pub fn build(container: &HtmlElement, placement: &TrackPlacement) -> Result<Self, MarqueeError> {
        let document = container
            .owner_document()
            .ok_or_else(|| MarqueeError::Dom("container has no owner document".to_string()))?;

        let primary = create_div(&document)?;
        primary.set_inner_html(&container.inner_html());
        style_track(&primary, placement)?;
        set_style(&primary, "left", "0")?;

        let duplicate = primary
            .clone_node_with_deep(true)
            .map_err(dom_error("cloning primary track"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MarqueeError::Dom("cloned track is not an HTML element".to_string()))?;

        let wrapper = create_div(&document)?;
        wrapper
            .class_list()
            .add_1(WRAPPER_CLASS)
            .map_err(dom_error("adding wrapper class"))?;
        set_style(&wrapper, "position", "relative")?;

        container.set_inner_html("");
        wrapper
            .append_child(&primary)
            .map_err(dom_error("mounting primary track"))?;
        wrapper
            .append_child(&duplicate)
            .map_err(dom_error("mounting duplicate track"))?;
        container
            .append_child(&wrapper)
            .map_err(dom_error("mounting wrapper"))?;

        let tracks = Self {
            wrapper,
            primary,
            duplicate,
        };
        tracks.place(placement)?;
        Ok(tracks)
    }

    /// Size both tracks and offset the duplicate for the given placement
    pub fn place(&self, placement: &TrackPlacement) -> Result<(), MarqueeError> {
        style_track(&self.primary, placement)?;
        style_track(&self.duplicate, placement)?;

        let sign = -placement.direction.sign();
        let (left, margin) = (sign * placement.span(), sign * placement.indent());
        set_style(&self.duplicate, "left", &px(left))?;
        set_style(&self.duplicate, "margin-left", &px(margin))
    }

    /// Render the scroll offset on the wrapper
    pub fn translate(&self, offset: f64) -> Result<(), MarqueeError> {
        set_style(&self.wrapper, "transform", &format!("translateX({})", px(offset)))
    }

    /// Markup captured by the primary track
    pub fn captured_markup(&self) -> String {
        self.primary.inner_html()
    }
}

fn create_div(document: &Document) -> Result<HtmlElement, MarqueeError> {
    document
        .create_element("div")
        .map_err(dom_error("creating div"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MarqueeError::Dom("created div is not an HTML element".to_string()))
}

fn style_track(track: &HtmlElement, placement: &TrackPlacement) -> Result<(), MarqueeError> {
    set_style(track, "display", "block")?;
    set_style(track, "position", "absolute")?;
    set_style(track, "overflow", "hidden")?;
    set_style(track, "top", "0")?;
    set_style(track, "width", &px(placement.track_width()))
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), MarqueeError> {
    element
        .style()
        .set_property(property, value)
        .map_err(dom_error(property))
}

fn px(value: f64) -> String {
    format!("{}px", value)
}
