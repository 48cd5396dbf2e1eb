//! Error types for the marquee engine
//!
//! Construction failures (bad options, missing container, empty content)
//! are terminal: no instance is produced. Failures while animating halt the
//! instance instead of being raised per tick.

use thiserror::Error;

/// Top-level marquee error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarqueeError {
    /// One or more option fields were invalid; every violation is listed
    #[error("Invalid marquee configuration: {}", .messages.join(" "))]
    Configuration { messages: Vec<String> },

    /// The target selector matched no element
    #[error("No element matches selector '{0}'")]
    ElementNotFound(String),

    /// The target selector is not valid CSS selector syntax
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    /// The container holds no element matching the block selector
    #[error("Container has no content blocks matching '{0}'")]
    NoContentBlocks(String),

    /// The container was removed from the document while animating
    #[error("Marquee container is no longer attached to the document")]
    Detached,

    /// A DOM call failed unexpectedly
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The instance was destroyed and can no longer be used
    #[error("Marquee has been destroyed")]
    Destroyed,
}

impl MarqueeError {
    /// Error name surfaced to JavaScript (`error.name`)
    pub fn name(&self) -> &'static str {
        match self {
            MarqueeError::Configuration { .. } => "ConfigurationError",
            MarqueeError::ElementNotFound(_) => "ElementNotFoundError",
            MarqueeError::InvalidSelector(_) => "InvalidSelectorError",
            MarqueeError::NoContentBlocks(_) => "NoContentBlocksError",
            MarqueeError::Detached => "DetachedError",
            MarqueeError::Dom(_) => "DomError",
            MarqueeError::Destroyed => "MarqueeDestroyedError",
        }
    }

    /// Whether this error can only happen while constructing an instance
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            MarqueeError::Configuration { .. }
                | MarqueeError::ElementNotFound(_)
                | MarqueeError::InvalidSelector(_)
                | MarqueeError::NoContentBlocks(_)
        )
    }
}
