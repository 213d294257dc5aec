//! Input and observer event payloads
//!
//! The host translates its native events (DOM, winit, test scripts) into
//! these types before handing them to a component. Coordinates are in CSS
//! pixels along the horizontal axis only, since every BDS scroller is
//! horizontal.

use std::fmt;
use std::str::FromStr;

/// Numeric event type identifier used by state machines
pub type EventType = u32;

/// Event type constants
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const CLICK: EventType = 6;
    pub const KEY_DOWN: EventType = 10;
    pub const FOCUS: EventType = 11;
    pub const BLUR: EventType = 12;
    pub const WHEEL: EventType = 20;
    pub const RESIZE: EventType = 30;
    pub const INTERSECT: EventType = 31;
    pub const TRANSITION_END: EventType = 40;
}

// ============================================================================
// Pointer
// ============================================================================

/// Where a pointer event came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse with the DOM button index (0 = primary)
    Mouse { button: u16 },
    /// Touch point, indexed in `changedTouches` order
    Touch { touch_index: usize },
}

/// A pointer (mouse or touch) event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// One of `POINTER_DOWN`, `POINTER_MOVE`, `POINTER_UP`, `POINTER_LEAVE`
    pub event_type: EventType,
    pub source: PointerSource,
    /// Horizontal position (`clientX` for mouse, `pageX` for touch)
    pub x: f32,
}

impl PointerEvent {
    pub fn new(event_type: EventType, source: PointerSource, x: f32) -> Self {
        Self {
            event_type,
            source,
            x,
        }
    }

    pub fn mouse_down(x: f32) -> Self {
        Self::mouse_down_with_button(0, x)
    }

    pub fn mouse_down_with_button(button: u16, x: f32) -> Self {
        Self::new(event_types::POINTER_DOWN, PointerSource::Mouse { button }, x)
    }

    pub fn mouse_move(x: f32) -> Self {
        Self::new(
            event_types::POINTER_MOVE,
            PointerSource::Mouse { button: 0 },
            x,
        )
    }

    pub fn mouse_up(x: f32) -> Self {
        Self::new(event_types::POINTER_UP, PointerSource::Mouse { button: 0 }, x)
    }

    /// Pointer left the document while pressed
    pub fn mouse_leave(x: f32) -> Self {
        Self::new(
            event_types::POINTER_LEAVE,
            PointerSource::Mouse { button: 0 },
            x,
        )
    }

    pub fn touch_start(x: f32) -> Self {
        Self::new(
            event_types::POINTER_DOWN,
            PointerSource::Touch { touch_index: 0 },
            x,
        )
    }

    pub fn touch_move(x: f32) -> Self {
        Self::new(
            event_types::POINTER_MOVE,
            PointerSource::Touch { touch_index: 0 },
            x,
        )
    }

    pub fn touch_end(x: f32) -> Self {
        Self::new(
            event_types::POINTER_UP,
            PointerSource::Touch { touch_index: 0 },
            x,
        )
    }

    /// Primary mouse button or the first touch point
    pub fn is_primary(&self) -> bool {
        match self.source {
            PointerSource::Mouse { button } => button == 0,
            PointerSource::Touch { touch_index } => touch_index == 0,
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self.source, PointerSource::Touch { .. })
    }

    /// Up or document-leave, both of which end a gesture
    pub fn is_release(&self) -> bool {
        self.event_type == event_types::POINTER_UP || self.event_type == event_types::POINTER_LEAVE
    }
}

// ============================================================================
// Keyboard
// ============================================================================

/// Keys the BDS components react to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    Space,
    Tab,
    Escape,
    /// Anything else
    Other,
}

impl Key {
    /// The DOM `KeyboardEvent.key` name
    pub fn name(&self) -> &'static str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::Home => "Home",
            Key::End => "End",
            Key::Enter => "Enter",
            Key::Space => " ",
            Key::Tab => "Tab",
            Key::Escape => "Escape",
            Key::Other => "Unidentified",
        }
    }

    /// Keys used for roving focus along a horizontal list
    pub fn is_horizontal_navigation(&self) -> bool {
        matches!(self, Key::ArrowLeft | Key::ArrowRight | Key::Home | Key::End)
    }
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    /// Parses DOM key names; unknown names map to [`Key::Other`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "Enter" => Key::Enter,
            " " | "Space" => Key::Space,
            "Tab" => Key::Tab,
            "Escape" => Key::Escape,
            _ => Key::Other,
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Wheel / observers
// ============================================================================

/// Wheel or trackpad scroll delta
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelEvent {
    pub delta_x: f32,
    pub delta_y: f32,
}

impl WheelEvent {
    pub fn horizontal(delta_x: f32) -> Self {
        Self {
            delta_x,
            delta_y: 0.0,
        }
    }
}

/// Box-size change of an observed element
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeEntry {
    /// Element id of the observed element
    pub target: String,
    /// New `clientWidth`
    pub width: f32,
}

impl ResizeEntry {
    pub fn new(target: impl Into<String>, width: f32) -> Self {
        Self {
            target: target.into(),
            width,
        }
    }
}

/// Visibility change of an observed element
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// Element id of the observed element
    pub target: String,
    /// Visible fraction of the element, 0.0 to 1.0
    pub intersection_ratio: f32,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, intersection_ratio: f32) -> Self {
        Self {
            target: target.into(),
            intersection_ratio,
        }
    }

    /// Whether the visible fraction reaches `threshold`
    pub fn is_intersecting(&self, threshold: f32) -> bool {
        self.intersection_ratio > 0.0 && self.intersection_ratio >= threshold
    }
}
