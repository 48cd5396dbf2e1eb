//! Host events the engine reacts to

use serde::{Deserialize, Serialize};

/// Events forwarded by the host listeners
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarqueeEvent {
    PointerEnter,
    PointerLeave,
    Resize,
}

impl MarqueeEvent {
    /// DOM event type the host listens for
    pub fn dom_type(&self) -> &'static str {
        match self {
            MarqueeEvent::PointerEnter => "mouseenter",
            MarqueeEvent::PointerLeave => "mouseleave",
            MarqueeEvent::Resize => "resize",
        }
    }

    /// Map a DOM event type back to an engine event
    pub fn from_dom_type(event_type: &str) -> Option<Self> {
        match event_type {
            "mouseenter" => Some(MarqueeEvent::PointerEnter),
            "mouseleave" => Some(MarqueeEvent::PointerLeave),
            "resize" => Some(MarqueeEvent::Resize),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_types_round_trip() {
        for event in [
            MarqueeEvent::PointerEnter,
            MarqueeEvent::PointerLeave,
            MarqueeEvent::Resize,
        ] {
            assert_eq!(MarqueeEvent::from_dom_type(event.dom_type()), Some(event));
        }
        assert_eq!(MarqueeEvent::from_dom_type("click"), None);
    }
}
