//! Custom horizontal scrollbar
//!
//! The scrollbar mirrors the list offset onto a thumb inside a track and
//! maps thumb drags, track presses, arrow keys and wheel deltas back onto
//! the list offset. Unlike page navigation, every scrollbar input keeps a
//! continuous offset.
//!
//! ```text
//! track  ├──────────────────────────────────────────────┤
//! thumb           ├───────────┤
//!        0   thumb_left   thumb_left + thumb_width   track_width
//! ```

use bds_core::{Key, PointerEvent};
use serde::Serialize;

use crate::constants::{MIN_THUMB_WIDTH, SCROLL_DISTANCE};
use crate::drag::{DragRelease, DragSession, ThumbDrag, TrackJump};

/// Thumb placement for one offset
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScrollbarMetrics {
    pub track_width: f32,
    pub thumb_width: f32,
    pub thumb_left: f32,
    /// `aria-valuenow`, 0 to 100
    pub value_now: u32,
}

impl ScrollbarMetrics {
    pub fn compute(track_width: f32, content_width: f32, max_translate_x: f32, offset: f32) -> Self {
        let thumb_width = thumb_width(track_width, content_width, max_translate_x);
        let thumb_left = thumb_left(track_width, thumb_width, content_width, max_translate_x, offset);
        Self {
            track_width,
            thumb_width,
            thumb_left,
            value_now: value_now(thumb_left, thumb_width, content_width),
        }
    }
}

/// Thumb width proportional to the visible share of the list
pub fn thumb_width(track_width: f32, content_width: f32, max_translate_x: f32) -> f32 {
    let extent = max_translate_x + content_width;
    if extent <= 0.0 {
        return track_width.max(MIN_THUMB_WIDTH);
    }
    (track_width * (content_width / extent)).max(MIN_THUMB_WIDTH)
}

/// Thumb position for `offset`, kept inside the track
pub fn thumb_left(
    track_width: f32,
    thumb_width: f32,
    content_width: f32,
    max_translate_x: f32,
    offset: f32,
) -> f32 {
    let extent = max_translate_x + content_width;
    if extent <= 0.0 {
        return 0.0;
    }
    let travel = (track_width - thumb_width).max(0.0);
    (track_width * (offset / extent)).clamp(0.0, travel)
}

/// Scroll percentage reported to assistive technology
pub fn value_now(thumb_left: f32, thumb_width: f32, content_width: f32) -> u32 {
    if content_width <= 0.0 {
        return 0;
    }
    (((thumb_left + thumb_width) / content_width) * 100.0)
        .round()
        .clamp(0.0, 100.0) as u32
}

/// Offset after a key press on the scrollbar, `None` for unhandled keys
pub fn key_offset(key: Key, offset: f32, max_translate_x: f32) -> Option<f32> {
    match key {
        Key::ArrowLeft => Some((offset - SCROLL_DISTANCE).max(0.0)),
        Key::ArrowRight => Some((offset + SCROLL_DISTANCE).min(max_translate_x)),
        Key::Home => Some(0.0),
        Key::End => Some(max_translate_x),
        _ => None,
    }
}

/// Offset after a horizontal wheel delta
pub fn wheel_offset(offset: f32, delta_x: f32, max_translate_x: f32) -> f32 {
    (offset + delta_x).clamp(0.0, max_translate_x.max(0.0))
}

// ============================================================================
// Scrollbar state
// ============================================================================

/// Scrollbar interaction state: measured track, thumb metrics and the two
/// pointer gestures it supports
#[derive(Clone, Debug)]
pub struct Scrollbar {
    /// Measured track width; falls back to the content width until measured
    track_width: Option<f32>,
    metrics: ScrollbarMetrics,
    thumb: DragSession<ThumbDrag>,
    track: DragSession<TrackJump>,
}

impl Default for Scrollbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollbar {
    pub fn new() -> Self {
        Self {
            track_width: None,
            metrics: ScrollbarMetrics::default(),
            thumb: DragSession::new(ThumbDrag::default()),
            track: DragSession::new(TrackJump::default()),
        }
    }

    pub fn metrics(&self) -> ScrollbarMetrics {
        self.metrics
    }

    pub fn set_track_width(&mut self, width: f32) {
        self.track_width = Some(width.max(0.0));
    }

    /// Whether the thumb is being dragged
    pub fn is_dragging(&self) -> bool {
        self.thumb.is_active()
    }

    /// Whether any scrollbar gesture is in progress
    pub fn is_active(&self) -> bool {
        self.thumb.is_active() || self.track.is_active()
    }

    /// Recompute thumb metrics for the current offset
    pub fn refresh(&mut self, content_width: f32, max_translate_x: f32, offset: f32) {
        let track_width = self.track_width.unwrap_or(content_width);
        self.metrics = ScrollbarMetrics::compute(track_width, content_width, max_translate_x, offset);
    }

    /// Press on the thumb
    pub fn press_thumb(
        &mut self,
        event: &PointerEvent,
        content_width: f32,
        max_translate_x: f32,
        offset: f32,
    ) -> bool {
        if self.is_active() {
            return false;
        }
        let ratio = if self.metrics.thumb_width > 0.0 {
            content_width / self.metrics.thumb_width
        } else {
            1.0
        };
        self.thumb.set_mapping(ThumbDrag { ratio });
        self.thumb.press(event, offset, max_translate_x);
        self.thumb.is_active()
    }

    /// Press on the track; `event.x` is relative to the track's left edge.
    /// Returns the offset the list jumps to.
    pub fn press_track(
        &mut self,
        event: &PointerEvent,
        content_width: f32,
        max_translate_x: f32,
        offset: f32,
    ) -> Option<f32> {
        if self.is_active() {
            return None;
        }
        self.track.set_mapping(TrackJump {
            track_width: self.metrics.track_width,
            thumb_width: self.metrics.thumb_width,
            scroll_extent: max_translate_x + content_width,
        });
        // One-shot: the track never starts a drag
        let jumped = self.track.press(event, offset, max_translate_x);
        self.track.cancel();
        jumped
    }

    /// Follow a document-level move for whichever gesture is active
    pub fn drag(&mut self, event: &PointerEvent) -> Option<f32> {
        self.thumb.drag(event).or_else(|| self.track.drag(event))
    }

    /// End whichever gesture is active; the offset is kept as is
    pub fn release(&mut self, event: &PointerEvent) -> Option<DragRelease> {
        self.thumb.release(event).or_else(|| self.track.release(event))
    }

    pub fn cancel(&mut self) {
        self.thumb.cancel();
        self.track.cancel();
    }
}
