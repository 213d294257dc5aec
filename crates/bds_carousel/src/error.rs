//! Error types for bds_carousel

use thiserror::Error;

/// Errors that can occur while configuring or wiring a carousel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// Configuration rejected by [`CarouselConfig::validate`](crate::CarouselConfig::validate)
    #[error("Invalid carousel config: {0}")]
    InvalidConfig(String),

    /// A carousel descendant asked for its context outside a provider scope
    #[error("Carousel context requested outside of a carousel provider")]
    MissingProvider,
}

/// Result type for bds_carousel operations
pub type Result<T> = std::result::Result<T, CarouselError>;
