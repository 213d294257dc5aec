//! Navigation resolution
//!
//! Pure functions that turn a navigation request into a `(page, target
//! index)` pair against a [`CarouselLayout`]. The carousel controller owns
//! the state; these functions only decide where it should go.
//!
//! ```text
//! navigate_by_direction ──┐
//! drag release ───────────┼──► navigate_by_index ──► navigate_by_page ──► PagePosition
//! keyboard / indicators ──┘
//! ```

use serde::Serialize;

use crate::config::SnapType;
use crate::constants::ITEM_INTERSECT_THRESHOLD;
use crate::geometry::CarouselLayout;

/// Direction of a navigation step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// `-1` or `+1`
    pub fn sign(self) -> i32 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }

    /// Direction of a signed step, `None` for zero
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign.signum() {
            -1 => Some(Direction::Prev),
            1 => Some(Direction::Next),
            _ => None,
        }
    }
}

/// A resolved navigation target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PagePosition {
    pub current_page: usize,
    pub target_index: usize,
}

/// Resolve `page`, clamped into `[0, total_pages - 1]`
pub fn resolve_page(layout: &CarouselLayout, snap_type: SnapType, page: usize) -> PagePosition {
    let page = page.min(layout.total_pages.saturating_sub(1));
    let target_index = match snap_type {
        SnapType::Page => layout.items_per_page * page,
        SnapType::Item => page,
    };
    PagePosition {
        current_page: page,
        target_index,
    }
}

/// Resolve the page containing `index`
pub fn resolve_index(layout: &CarouselLayout, snap_type: SnapType, index: usize) -> PagePosition {
    let page = match snap_type {
        SnapType::Page => index / layout.items_per_page.max(1),
        SnapType::Item => index.min(layout.total_pages.saturating_sub(1)),
    };
    resolve_page(layout, snap_type, page)
}

/// Next page in `direction`; wraps around both ends when `wrap` is set,
/// clamps otherwise
pub fn step_page(current_page: usize, total_pages: usize, direction: Direction, wrap: bool) -> usize {
    let last_page = total_pages.saturating_sub(1);
    match direction {
        Direction::Next if current_page >= last_page => {
            if wrap {
                0
            } else {
                last_page
            }
        }
        Direction::Next => current_page + 1,
        Direction::Prev if current_page == 0 => {
            if wrap {
                last_page
            } else {
                0
            }
        }
        Direction::Prev => (current_page - 1).min(last_page),
    }
}

/// Step a page's worth of items from the first item at or past `offset`
///
/// Used by scrollbar pagination, where the offset moves continuously and
/// `current_page` may be stale.
pub fn scrollbar_step_index(layout: &CarouselLayout, offset: f32, direction: Direction) -> usize {
    let total_items = layout.total_items();
    layout
        .coordinates
        .iter()
        .position(|item| offset <= item.left)
        .map(|first| match direction {
            Direction::Next => (first + layout.items_per_page).min(total_items.saturating_sub(1)),
            Direction::Prev => first.saturating_sub(layout.items_per_page),
        })
        .unwrap_or(0)
}

/// Item a list drag should settle on
///
/// `offset` is where the drag ended and `origin` where it started. Returns
/// `None` when the list did not move. An item adjacent to the fully visible
/// run wins when at least [`ITEM_INTERSECT_THRESHOLD`] of it is on screen.
pub fn release_target(layout: &CarouselLayout, offset: f32, origin: f32) -> Option<usize> {
    let coordinates = &layout.coordinates;
    if coordinates.is_empty() || offset == origin {
        return None;
    }
    let last = coordinates.len() - 1;
    let left_edge = offset;
    let right_edge = offset + layout.container_width;

    let target = if offset > origin {
        // Last fully visible item, then the one after it
        coordinates
            .iter()
            .enumerate()
            .rev()
            .find(|(_, item)| right_edge > item.left && right_edge >= item.right)
            .map(|(index, item)| {
                let next = (index + 1).min(last);
                let threshold = coordinates[next].left + item.width() * ITEM_INTERSECT_THRESHOLD;
                if right_edge >= threshold {
                    next
                } else {
                    index
                }
            })
    } else {
        // First fully visible item, then the one before it
        coordinates
            .iter()
            .enumerate()
            .find(|(_, item)| left_edge <= item.left)
            .map(|(index, item)| {
                let prev = index.saturating_sub(1);
                let threshold = coordinates[prev].left + item.width() * ITEM_INTERSECT_THRESHOLD;
                if left_edge <= threshold {
                    prev
                } else {
                    index
                }
            })
    };

    Some(target.unwrap_or(0))
}

/// Offset the list settles on for `target_index`
pub fn committed_offset(layout: &CarouselLayout, target_index: usize) -> Option<f32> {
    layout
        .coordinate(target_index)
        .map(|item| layout.clamp_offset(item.left))
}
