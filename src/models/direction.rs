//! Scroll direction
//!
//! The direction is chosen once at construction and drives every
//! sign-dependent decision: how the offset advances, where the duplicate
//! track is staged and when a cycle is complete.

use serde::{Deserialize, Serialize};

/// Direction of travel for the marquee strip
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    /// Parse a direction from its option string
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Sign applied to offsets: leftward travel grows the offset,
    /// rightward travel shrinks it.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Left => 1.0,
            Direction::Right => -1.0,
        }
    }

    /// Offset after one tick
    pub fn advance(&self, position: f64, speed: f64) -> f64 {
        position + self.sign() * speed
    }

    /// Whether the tracked edge has crossed the container origin
    pub fn has_completed_cycle(&self, edge: f64) -> bool {
        match self {
            Direction::Left => edge >= 0.0,
            Direction::Right => edge <= 0.0,
        }
    }

    /// Resting position of the duplicate track's leading edge, relative to
    /// the container origin, for a cycle of the given length.
    ///
    /// The duplicate sits one cycle behind the primary, so after the strip
    /// travels exactly one cycle it occupies the primary's resting place.
    /// Its far edge is `cycle - track width` away from the primary.
    pub fn duplicate_origin(&self, cycle: f64) -> f64 {
        -self.sign() * cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_only_exact_names() {
        assert_eq!(Direction::parse("left"), Some(Direction::Left));
        assert_eq!(Direction::parse("right"), Some(Direction::Right));
        assert_eq!(Direction::parse("Left"), None);
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn test_advance_sign_convention() {
        assert_eq!(Direction::Left.advance(10.0, 2.0), 12.0);
        assert_eq!(Direction::Right.advance(10.0, 2.0), 8.0);
    }

    #[test]
    fn test_cycle_completion() {
        assert!(!Direction::Left.has_completed_cycle(-0.5));
        assert!(Direction::Left.has_completed_cycle(0.0));
        assert!(!Direction::Right.has_completed_cycle(0.5));
        assert!(Direction::Right.has_completed_cycle(0.0));
    }

    #[test]
    fn test_duplicate_is_staged_behind_travel() {
        assert_eq!(Direction::Left.duplicate_origin(800.0), -800.0);
        assert_eq!(Direction::Right.duplicate_origin(800.0), 800.0);
    }
}
