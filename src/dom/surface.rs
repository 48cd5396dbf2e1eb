//! web-sys implementation of the engine surface

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::dom_error;
use super::tracks::Tracks;
use crate::engine::{Surface, TrackPlacement};
use crate::errors::MarqueeError;
use crate::layout::Measurements;
use crate::models::PresentationClass;

/// A marquee container in the live document
#[derive(Debug)]
pub struct DomSurface {
    container: HtmlElement,
    block_selector: String,
    tracks: Option<Tracks>,
}

impl DomSurface {
    pub fn new(container: HtmlElement, block_selector: impl Into<String>) -> Self {
        Self {
            container,
            block_selector: block_selector.into(),
            tracks: None,
        }
    }

    /// Resolve the container in the current document
    pub fn find(target_selector: &str, block_selector: &str) -> Result<Self, MarqueeError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| MarqueeError::Dom("no document available".to_string()))?;

        let element = document
            .query_selector(target_selector)
            .map_err(|_| MarqueeError::InvalidSelector(target_selector.to_string()))?
            .ok_or_else(|| MarqueeError::ElementNotFound(target_selector.to_string()))?;

        let container = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| MarqueeError::ElementNotFound(target_selector.to_string()))?;

        Ok(Self::new(container, block_selector))
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn tracks(&self) -> Option<&Tracks> {
        self.tracks.as_ref()
    }

    fn built(&self) -> Result<&Tracks, MarqueeError> {
        self.tracks
            .as_ref()
            .ok_or_else(|| MarqueeError::Dom("tracks have not been built".to_string()))
    }
}

fn rendered_width(block: &Element) -> f64 {
    match block.dyn_ref::<HtmlElement>() {
        Some(html) => html.offset_width() as f64,
        None => block.get_bounding_client_rect().width(),
    }
}

impl Surface for DomSurface {
    fn measure(&self) -> Result<Measurements, MarqueeError> {
        let scope: &Element = match &self.tracks {
            Some(tracks) => &*tracks.primary,
            None => &*self.container,
        };

        let blocks = scope
            .query_selector_all(&self.block_selector)
            .map_err(|_| MarqueeError::InvalidSelector(self.block_selector.clone()))?;

        let block_width = blocks
            .item(0)
            .and_then(|node| node.dyn_into::<Element>().ok())
            .map(|block| rendered_width(&block))
            .unwrap_or(0.0);

        Ok(Measurements {
            container_width: self.container.offset_width() as f64,
            block_count: blocks.length() as usize,
            block_width,
        })
    }

    fn build_tracks(&mut self, placement: &TrackPlacement) -> Result<(), MarqueeError> {
        if self.tracks.is_some() {
            return Err(MarqueeError::Dom("tracks are already built".to_string()));
        }
        self.tracks = Some(Tracks::build(&self.container, placement)?);
        Ok(())
    }

    fn place_duplicate(&mut self, placement: &TrackPlacement) -> Result<(), MarqueeError> {
        self.built()?.place(placement)
    }

    fn leading_edge(&self) -> Result<f64, MarqueeError> {
        if !self.container.is_connected() {
            return Err(MarqueeError::Detached);
        }
        let tracks = self.built()?;
        let origin = self.container.get_bounding_client_rect().x();
        Ok(tracks.duplicate.get_bounding_client_rect().x() - origin)
    }

    fn apply_offset(&mut self, offset: f64) -> Result<(), MarqueeError> {
        self.built()?.translate(offset)
    }

    fn set_class(&mut self, class: PresentationClass, enabled: bool) -> Result<(), MarqueeError> {
        let classes = self.container.class_list();
        let result = if enabled {
            classes.add_1(class.as_str())
        } else {
            classes.remove_1(class.as_str())
        };
        result.map_err(dom_error(class.as_str()))
    }

    fn restore(&mut self) -> Result<(), MarqueeError> {
        if let Some(tracks) = self.tracks.take() {
            self.container.set_inner_html(&tracks.captured_markup());
        }
        Ok(())
    }
}
