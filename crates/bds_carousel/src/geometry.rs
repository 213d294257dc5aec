//! Item geometry cache
//!
//! Item positions are derived from configuration rather than measured, so
//! they stay exact while a slide transition is still animating:
//!
//! ```text
//!  list origin
//!  │
//!  ├── item 0 ──┤gap├── item 1 ──┤gap├── item 2 ──┤gap├── item 3 ...
//!  0            w    w+g          2w+g  2(w+g)      ...
//!  └────────────── content width (container - padding) ──────┘
//! ```
//!
//! The whole cache is rebuilt whenever item count, item width, full-width
//! mode, snap type or container width changes.

use serde::Serialize;

use crate::config::{item_id, SnapType};
use crate::constants::{CONTAINER_RIGHT_PADDING, GAP_WIDTH};

/// Pixel boundaries of one item, measured from the list origin
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemCoordinate {
    pub id: String,
    pub left: f32,
    pub right: f32,
}

impl ItemCoordinate {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// Layout derived from the container width
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarouselLayout {
    /// Measured `clientWidth` of the list container
    pub container_width: f32,
    /// Container width minus its right padding
    pub content_width: f32,
    /// Rendered item width
    pub item_width: f32,
    pub items_per_page: usize,
    pub total_pages: usize,
    /// Largest offset navigation may settle on
    pub max_translate_x: f32,
    pub coordinates: Vec<ItemCoordinate>,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            container_width: 0.0,
            content_width: 0.0,
            item_width: 0.0,
            items_per_page: 1,
            total_pages: 1,
            max_translate_x: 0.0,
            coordinates: Vec::new(),
        }
    }
}

impl CarouselLayout {
    /// Rebuild the geometry for `total_items` items in a container of
    /// `container_width` px
    pub fn compute(
        carousel_id: &str,
        total_items: usize,
        item_width: f32,
        is_full_width: bool,
        snap_type: SnapType,
        container_width: f32,
    ) -> Self {
        let content_width = (container_width - CONTAINER_RIGHT_PADDING).max(0.0);
        let final_item_width = if is_full_width {
            content_width
        } else {
            item_width.min(content_width)
        };

        if total_items == 0 {
            return Self {
                container_width,
                content_width,
                item_width: final_item_width,
                ..Self::default()
            };
        }

        let mut items_per_page = 1;
        let coordinates: Vec<ItemCoordinate> = (0..total_items)
            .map(|index| {
                let left = (final_item_width + GAP_WIDTH) * index as f32;
                let right = left + final_item_width;
                if right < content_width {
                    items_per_page = index + 1;
                }
                ItemCoordinate {
                    id: item_id(carousel_id, index),
                    left,
                    right,
                }
            })
            .collect();

        let total_pages = match snap_type {
            SnapType::Page => total_items.div_ceil(items_per_page),
            SnapType::Item => {
                let pages = total_items - (items_per_page - 1);
                items_per_page = 1;
                pages
            }
        };

        let last_target = (items_per_page * (total_pages - 1)).min(total_items - 1);
        let max_translate_x = coordinates[last_target].left;

        tracing::debug!(
            container_width,
            items_per_page,
            total_pages,
            max_translate_x,
            "carousel layout computed"
        );

        Self {
            container_width,
            content_width,
            item_width: final_item_width,
            items_per_page,
            total_pages,
            max_translate_x,
            coordinates,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinate(&self, index: usize) -> Option<&ItemCoordinate> {
        self.coordinates.get(index)
    }

    /// Clamp an offset into `[0, max_translate_x]`
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_translate_x.max(0.0))
    }

    /// Total scrollable width, `max_translate_x + content_width`
    pub fn scroll_extent(&self) -> f32 {
        self.max_translate_x + self.content_width
    }
}
