//! Pointer drag sessions
//!
//! The list, the scrollbar thumb and the scrollbar track all follow the same
//! gesture: press records an origin, document-level moves map the pointer
//! position onto a list offset, release ends the gesture. [`DragSession`]
//! implements that once; a [`DragMapping`] supplies the position → offset
//! rule for each surface.
//!
//! ```text
//!          POINTER_DOWN           POINTER_MOVE
//!   Idle ───────────────► Pressed ─────────────► Dragging
//!    ▲                       │                      │
//!    └──── POINTER_UP / POINTER_LEAVE ──────────────┘
//! ```

use bds_core::event_types;
use bds_core::{EventType, PointerEvent, StateTransitions};

// ============================================================================
// State machine
// ============================================================================

/// Drag gesture states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    #[default]
    Idle,
    Pressed,
    Dragging,
}

impl StateTransitions for DragState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (DragState::Idle, event_types::POINTER_DOWN) => Some(DragState::Pressed),

            (DragState::Pressed, event_types::POINTER_MOVE) => Some(DragState::Dragging),
            (DragState::Pressed, event_types::POINTER_UP) => Some(DragState::Idle),
            (DragState::Pressed, event_types::POINTER_LEAVE) => Some(DragState::Idle),

            // Stay in Dragging until release
            (DragState::Dragging, event_types::POINTER_MOVE) => None,
            (DragState::Dragging, event_types::POINTER_UP) => Some(DragState::Idle),
            (DragState::Dragging, event_types::POINTER_LEAVE) => Some(DragState::Idle),

            _ => None,
        }
    }
}

// ============================================================================
// Mappings
// ============================================================================

/// Maps a pointer position onto a list offset
pub trait DragMapping {
    /// Unclamped offset for the pointer at `x`, given the offset and pointer
    /// position captured at press time
    fn offset_at(&self, origin_offset: f32, start_x: f32, x: f32) -> f32;

    /// Offset applied by the press itself, if the surface jumps on press
    fn press_offset(&self, _origin_offset: f32, _x: f32) -> Option<f32> {
        None
    }
}

/// Dragging the item list: the list follows the pointer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListDrag;

impl DragMapping for ListDrag {
    fn offset_at(&self, origin_offset: f32, start_x: f32, x: f32) -> f32 {
        origin_offset + (start_x - x)
    }
}

/// Dragging the scrollbar thumb: thumb travel is scaled up to list travel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbDrag {
    /// `content_width / thumb_width`
    pub ratio: f32,
}

impl Default for ThumbDrag {
    fn default() -> Self {
        Self { ratio: 1.0 }
    }
}

impl DragMapping for ThumbDrag {
    fn offset_at(&self, origin_offset: f32, start_x: f32, x: f32) -> f32 {
        origin_offset + (x - start_x) * self.ratio
    }
}

/// Pressing the scrollbar track: the thumb centre jumps under the pointer
///
/// `x` is measured from the left edge of the track. The jump happens once on
/// press; moves after it leave the offset where the jump put it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackJump {
    pub track_width: f32,
    pub thumb_width: f32,
    /// `max_translate_x + content_width`
    pub scroll_extent: f32,
}

impl TrackJump {
    fn jump(&self, x: f32) -> f32 {
        if self.track_width <= 0.0 {
            return 0.0;
        }
        let ratio = (x - self.thumb_width / 2.0) / self.track_width;
        (self.scroll_extent * ratio).floor()
    }
}

impl DragMapping for TrackJump {
    fn offset_at(&self, origin_offset: f32, _start_x: f32, _x: f32) -> f32 {
        origin_offset
    }

    fn press_offset(&self, _origin_offset: f32, x: f32) -> Option<f32> {
        Some(self.jump(x))
    }
}

// ============================================================================
// Session
// ============================================================================

/// What a finished gesture did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// Offset when the gesture started
    pub origin_offset: f32,
    /// Offset when the gesture ended
    pub offset: f32,
    /// Whether any move was seen
    pub moved: bool,
}

/// One pointer gesture over a draggable surface
#[derive(Clone, Debug, Default)]
pub struct DragSession<M: DragMapping> {
    mapping: M,
    state: DragState,
    start_x: f32,
    origin_offset: f32,
    offset: f32,
    max_offset: f32,
    /// Set by the first move, survives release
    is_dragged: bool,
}

impl<M: DragMapping> DragSession<M> {
    pub fn new(mapping: M) -> Self {
        Self {
            mapping,
            state: DragState::Idle,
            start_x: 0.0,
            origin_offset: 0.0,
            offset: 0.0,
            max_offset: 0.0,
            is_dragged: false,
        }
    }

    pub fn mapping(&self) -> &M {
        &self.mapping
    }

    /// Replace the mapping; takes effect for the next gesture
    pub fn set_mapping(&mut self, mapping: M) {
        self.mapping = mapping;
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// A gesture is in progress (pressed or dragging)
    pub fn is_active(&self) -> bool {
        self.state != DragState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Whether the last gesture moved
    pub fn is_dragged(&self) -> bool {
        self.is_dragged
    }

    /// Read and reset the dragged flag
    pub fn take_dragged(&mut self) -> bool {
        std::mem::take(&mut self.is_dragged)
    }

    /// Current offset of the gesture
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Start a gesture at `offset`, clamping subsequent offsets to
    /// `[0, max_offset]`
    ///
    /// Only the primary mouse button and the first touch point start a
    /// gesture. Returns the offset the press itself moved to, if any.
    pub fn press(&mut self, event: &PointerEvent, offset: f32, max_offset: f32) -> Option<f32> {
        if event.event_type != event_types::POINTER_DOWN || !event.is_primary() {
            return None;
        }
        if !self.state.apply(event_types::POINTER_DOWN) {
            return None;
        }

        self.start_x = event.x;
        self.origin_offset = offset;
        self.max_offset = max_offset.max(0.0);
        self.offset = offset;
        self.is_dragged = false;

        let jumped = self
            .mapping
            .press_offset(offset, event.x)
            .map(|jump| self.clamp(jump));
        if let Some(jump) = jumped {
            self.offset = jump;
        }
        tracing::trace!(x = event.x, offset, ?jumped, "drag pressed");
        jumped
    }

    /// Follow a document-level move. Returns the new offset while a gesture
    /// is active.
    pub fn drag(&mut self, event: &PointerEvent) -> Option<f32> {
        if event.event_type != event_types::POINTER_MOVE || !self.is_active() {
            return None;
        }
        self.state.apply(event_types::POINTER_MOVE);

        let raw = self.mapping.offset_at(self.origin_offset, self.start_x, event.x);
        self.offset = self.clamp(raw);
        self.is_dragged = true;
        Some(self.offset)
    }

    /// End the gesture on up or document-leave
    pub fn release(&mut self, event: &PointerEvent) -> Option<DragRelease> {
        if !event.is_release() || !self.is_active() {
            return None;
        }
        let moved = self.state == DragState::Dragging;
        self.state.apply(event.event_type);

        let release = DragRelease {
            origin_offset: self.origin_offset,
            offset: self.offset,
            moved,
        };
        tracing::trace!(?release, "drag released");
        Some(release)
    }

    /// Abort any gesture without reporting a release
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bds_core::PointerSource;

    #[test]
    fn test_drag_state_transitions() {
        let mut state = DragState::Idle;
        assert!(state.apply(event_types::POINTER_DOWN));
        assert_eq!(state, DragState::Pressed);
        assert!(state.apply(event_types::POINTER_MOVE));
        assert_eq!(state, DragState::Dragging);
        assert!(!state.apply(event_types::POINTER_MOVE));
        assert!(state.apply(event_types::POINTER_LEAVE));
        assert_eq!(state, DragState::Idle);
        assert!(!state.apply(event_types::POINTER_UP));
    }

    #[test]
    fn test_list_drag_follows_pointer() {
        let mut session = DragSession::new(ListDrag);

        assert_eq!(session.press(&PointerEvent::mouse_down(500.0), 0.0, 5688.0), None);
        assert!(session.is_active());
        assert!(!session.is_dragged());

        assert_eq!(session.drag(&PointerEvent::mouse_move(300.0)), Some(200.0));
        assert!(session.is_dragging());
        assert!(session.is_dragged());

        // Clamped at the start
        assert_eq!(session.drag(&PointerEvent::mouse_move(900.0)), Some(0.0));

        let release = session.release(&PointerEvent::mouse_up(900.0)).unwrap();
        assert_eq!(release.origin_offset, 0.0);
        assert_eq!(release.offset, 0.0);
        assert!(release.moved);
        assert!(!session.is_active());
        assert!(session.is_dragged());
    }

    #[test]
    fn test_secondary_button_and_second_touch_ignored() {
        let mut session = DragSession::new(ListDrag);
        session.press(&PointerEvent::mouse_down_with_button(2, 10.0), 0.0, 100.0);
        assert!(!session.is_active());

        let second_touch = PointerEvent::new(
            event_types::POINTER_DOWN,
            PointerSource::Touch { touch_index: 1 },
            10.0,
        );
        session.press(&second_touch, 0.0, 100.0);
        assert!(!session.is_active());
    }

    #[test]
    fn test_move_and_release_without_session_ignored() {
        let mut session = DragSession::new(ListDrag);
        assert_eq!(session.drag(&PointerEvent::mouse_move(10.0)), None);
        assert_eq!(session.release(&PointerEvent::mouse_up(10.0)), None);
        assert!(!session.is_dragged());
    }

    #[test]
    fn test_take_dragged_consumes_flag() {
        let mut session = DragSession::new(ListDrag);
        session.press(&PointerEvent::touch_start(100.0), 0.0, 1000.0);
        session.drag(&PointerEvent::touch_move(50.0));
        session.release(&PointerEvent::touch_end(50.0));

        assert!(session.take_dragged());
        assert!(!session.take_dragged());
    }

    #[test]
    fn test_thumb_drag_scales_travel() {
        let mut session = DragSession::new(ThumbDrag { ratio: 4.0 });
        session.press(&PointerEvent::mouse_down(10.0), 100.0, 1000.0);

        assert_eq!(session.drag(&PointerEvent::mouse_move(60.0)), Some(300.0));
        assert_eq!(session.drag(&PointerEvent::mouse_move(1000.0)), Some(1000.0));
    }

    #[test]
    fn test_track_jump_on_press() {
        let mapping = TrackJump {
            track_width: 940.0,
            thumb_width: 100.0,
            scroll_extent: 6628.0,
        };
        let mut session = DragSession::new(mapping);

        // Thumb centre lands under the pointer
        let jumped = session.press(&PointerEvent::mouse_down(520.0), 0.0, 5688.0);
        assert_eq!(jumped, Some((6628.0_f32 * (470.0 / 940.0)).floor()));

        // Pressing left of half a thumb clamps to 0
        session.cancel();
        assert_eq!(session.press(&PointerEvent::mouse_down(10.0), 500.0, 5688.0), Some(0.0));
    }
}
