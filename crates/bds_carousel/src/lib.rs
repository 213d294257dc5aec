//! # BDS Carousel
//!
//! Headless engine for the BDS carousel: a horizontally scrolling list of
//! items with page snapping, drag and scrollbar scrolling, windowed page
//! indicators and autoplay.
//!
//! The engine owns no rendering. The host measures the container, feeds
//! pointer, keyboard and observer events in, calls [`Carousel::tick`] from
//! its frame loop and draws whatever [`Carousel::view`] returns.
//!
//! ```text
//! host events ──► Carousel ──► CarouselLayout (geometry cache)
//!                    │     ──► PagePosition  (navigation)
//!                    │     ──► offset        (drag / scrollbar)
//!                    │     ──► Autoplay      (Timer)
//!                    ▼
//!               CarouselView ──► renderer
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bds_carousel::{Carousel, CarouselConfig, CarouselLabels};
//! use bds_core::ManualClock;
//!
//! let labels = CarouselLabels {
//!     next_button: "Next".into(),
//!     prev_button: "Previous".into(),
//!     pause_button: "Pause".into(),
//!     resume_button: "Resume".into(),
//!     pagination: "Pagination".into(),
//!     pagination_indicator: "Page %s of %s".into(),
//! };
//! let config = CarouselConfig::new("picks", labels);
//!
//! let mut carousel = Carousel::with_clock(config, 20, ManualClock::new())?;
//! carousel.resize(948.0);
//! assert_eq!(carousel.total_pages(), 7);
//!
//! carousel.next_click();
//! assert_eq!(carousel.translate_x(), -948.0);
//! # Ok::<(), bds_carousel::CarouselError>(())
//! ```

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod context;
pub mod drag;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod mount;
pub mod navigation;
pub mod pagination;
pub mod scrollbar;
pub mod view;

#[cfg(test)]
mod tests;

pub use autoplay::{Autoplay, AutoplayState};
pub use carousel::{Carousel, CarouselSnapshot};
pub use config::{CarouselConfig, CarouselLabels, NavButtonPlacement, PaginationType, SnapType};
pub use context::{CarouselContext, CarouselHandle, CarouselProvider, ProviderGuard};
pub use drag::{DragMapping, DragRelease, DragSession, DragState};
pub use error::{CarouselError, Result};
pub use geometry::{CarouselLayout, ItemCoordinate};
pub use mount::{mount, HostEvents, MountGuard};
pub use navigation::{Direction, PagePosition};
pub use pagination::{IndicatorView, IndicatorWindow};
pub use scrollbar::{Scrollbar, ScrollbarMetrics};
pub use view::{
    BodyView, CarouselView, FooterView, HeaderView, ItemView, NavButtonView, PaginationView,
    ScrollbarView,
};
