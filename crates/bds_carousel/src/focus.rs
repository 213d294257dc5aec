//! Keyboard focus across carousel items

use bds_core::Key;

use crate::geometry::CarouselLayout;

/// Result of a key press on the item list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusMove {
    /// Item that now has focus
    pub index: usize,
    /// Whether the list must navigate to bring the item into view
    pub navigate: bool,
}

/// Roving focus over the items of one carousel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemFocus {
    index: usize,
    dirty: bool,
}

impl ItemFocus {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Focused item, once focus has entered the list
    pub fn focused(&self) -> Option<usize> {
        self.dirty.then_some(self.index)
    }

    pub fn focus(&mut self, index: usize) {
        self.dirty = true;
        self.index = index;
    }

    /// Clamp focus after the item count shrank
    pub fn clamp(&mut self, total_items: usize) {
        self.index = self.index.min(total_items.saturating_sub(1));
    }

    /// Handle a key press while the list has focus
    ///
    /// Arrow keys only navigate when the newly focused item is clipped by
    /// the visible window `[offset, offset + container_width]`; Home and End
    /// always navigate.
    pub fn on_key(&mut self, key: Key, layout: &CarouselLayout, offset: f32) -> Option<FocusMove> {
        let total_items = layout.total_items();
        if total_items == 0 {
            return None;
        }
        let last = total_items - 1;
        let left_edge = offset;
        let right_edge = offset + layout.container_width;

        let (index, navigate) = match key {
            Key::ArrowLeft => {
                let index = self.index.saturating_sub(1).min(last);
                (index, layout.coordinates[index].left < left_edge)
            }
            Key::ArrowRight => {
                let index = (self.index + 1).min(last);
                (index, layout.coordinates[index].right > right_edge)
            }
            Key::Home => (0, true),
            Key::End => (last, true),
            _ => return None,
        };

        self.focus(index);
        Some(FocusMove { index, navigate })
    }
}

/// Roving tab index: only the target item is reachable with Tab
pub fn item_tab_index(index: usize, target_index: usize) -> i32 {
    if index == target_index {
        0
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SnapType;

    fn layout() -> CarouselLayout {
        CarouselLayout::compute("c", 20, 300.0, false, SnapType::Page, 948.0)
    }

    #[test]
    fn test_arrow_right_navigates_when_clipped() {
        let layout = layout();
        let mut focus = ItemFocus::default();

        assert_eq!(
            focus.on_key(Key::ArrowRight, &layout, 0.0),
            Some(FocusMove { index: 1, navigate: false })
        );
        assert_eq!(
            focus.on_key(Key::ArrowRight, &layout, 0.0),
            Some(FocusMove { index: 2, navigate: false })
        );
        // Item 3 ends at 1248, past the 948px window
        assert_eq!(
            focus.on_key(Key::ArrowRight, &layout, 0.0),
            Some(FocusMove { index: 3, navigate: true })
        );
    }

    #[test]
    fn test_arrow_left_navigates_when_clipped() {
        let layout = layout();
        let mut focus = ItemFocus::default();
        focus.focus(3);

        assert_eq!(
            focus.on_key(Key::ArrowLeft, &layout, 948.0),
            Some(FocusMove { index: 2, navigate: true })
        );

        focus.focus(0);
        assert_eq!(
            focus.on_key(Key::ArrowLeft, &layout, 0.0),
            Some(FocusMove { index: 0, navigate: false })
        );
    }

    #[test]
    fn test_home_end_and_ignored_keys() {
        let layout = layout();
        let mut focus = ItemFocus::default();

        assert_eq!(
            focus.on_key(Key::End, &layout, 0.0),
            Some(FocusMove { index: 19, navigate: true })
        );
        assert_eq!(
            focus.on_key(Key::Home, &layout, 5688.0),
            Some(FocusMove { index: 0, navigate: true })
        );
        assert_eq!(focus.on_key(Key::ArrowUp, &layout, 0.0), None);
        assert_eq!(ItemFocus::default().on_key(Key::End, &CarouselLayout::default(), 0.0), None);
    }

    #[test]
    fn test_tab_index() {
        assert_eq!(item_tab_index(3, 3), 0);
        assert_eq!(item_tab_index(2, 3), -1);
    }
}
