//! Carousel layout and timing constants

use std::time::Duration;

// ============================================================================
// Carousel
// ============================================================================

pub const DEFAULT_ITEM_HEIGHT: f32 = 200.0;
pub const DEFAULT_ITEM_WIDTH: f32 = 300.0;
/// Horizontal gap between items, in px
pub const GAP_WIDTH: f32 = 16.0;
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;
/// Fraction of the carousel that must be on screen before autoplay starts
pub const MAIN_INTERSECT_THRESHOLD: f32 = 0.5;
/// Fraction of an item that must be visible before a drag snaps to it
pub const ITEM_INTERSECT_THRESHOLD: f32 = 0.5;
/// Right padding of the list container, excluded from the content width
pub const CONTAINER_RIGHT_PADDING: f32 = 8.0;
/// Quiet period applied to observer-delivered resize notifications
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

// ============================================================================
// Pagination
// ============================================================================

pub const MAX_INDICATORS_LEFT: usize = 2;
pub const MAX_INDICATORS_RIGHT: usize = 2;
pub const MAX_INDICATORS_TOTAL: usize = MAX_INDICATORS_LEFT + MAX_INDICATORS_RIGHT + 1;

// ============================================================================
// Scrollbar
// ============================================================================

pub const MIN_THUMB_WIDTH: f32 = 34.0;
/// Distance moved per arrow key press on the scrollbar, in px
pub const SCROLL_DISTANCE: f32 = 100.0;
