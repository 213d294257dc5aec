//! Pagination indicators
//!
//! Long carousels show at most [`MAX_INDICATORS_TOTAL`] page indicators. The
//! window follows the current page; the indicator at each open end of the
//! window fades to hint that more pages exist beyond it.
//!
//! ```text
//! 7 pages, current = 0:   [●] ○  ○  ○  ◌   ·  ·
//! 7 pages, current = 3:    ·  ◌  ○ [●] ○  ◌  ·
//! 7 pages, current = 6:    ·  ·  ◌  ○  ○  ○ [●]
//!                         ● active  ○ visible  ◌ fading  · hidden
//! ```

use bds_core::Key;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::constants::{MAX_INDICATORS_LEFT, MAX_INDICATORS_RIGHT, MAX_INDICATORS_TOTAL};

// ============================================================================
// Window
// ============================================================================

/// Hidden and fading indicator indexes for one `(current_page, total_pages)`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndicatorWindow {
    hidden: FxHashSet<usize>,
    fading: FxHashSet<usize>,
}

impl IndicatorWindow {
    pub fn compute(current_page: usize, total_pages: usize) -> Self {
        let mut window = Self::default();
        if total_pages <= MAX_INDICATORS_TOTAL {
            return window;
        }
        let current = current_page.min(total_pages - 1);

        // Hide everything outside current ± the side budgets
        let first_shown = current.saturating_sub(MAX_INDICATORS_LEFT);
        let last_shown = current + MAX_INDICATORS_RIGHT;
        window
            .hidden
            .extend((0..total_pages).filter(|&i| i < first_shown || i > last_shown));

        if current < MAX_INDICATORS_LEFT + 1 {
            // Near the start: spend the unused left budget on the right
            let right = MAX_INDICATORS_TOTAL - current - 1;
            for i in 1..=right {
                window.hidden.remove(&(current + i));
            }
            window.fading.insert(MAX_INDICATORS_TOTAL - 1);
        } else if current + MAX_INDICATORS_RIGHT + 1 > total_pages {
            // Near the end: spend the unused right budget on the left
            let right = total_pages - 1 - current;
            let left = MAX_INDICATORS_TOTAL - right - 1;
            for i in 1..=left {
                window.hidden.remove(&(current - i));
            }
            window.fading.insert(total_pages - MAX_INDICATORS_TOTAL);
        } else {
            let leftmost = current - MAX_INDICATORS_LEFT;
            if leftmost != 0 {
                window.fading.insert(leftmost);
            }
            let rightmost = current + MAX_INDICATORS_RIGHT;
            if rightmost != total_pages - 1 {
                window.fading.insert(rightmost);
            }
        }

        window
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.contains(&index)
    }

    pub fn is_fading(&self, index: usize) -> bool {
        self.fading.contains(&index)
    }

    /// Hidden indexes in ascending order
    pub fn hidden_indexes(&self) -> Vec<usize> {
        sorted(&self.hidden)
    }

    /// Fading indexes in ascending order
    pub fn fading_indexes(&self) -> Vec<usize> {
        sorted(&self.fading)
    }

    /// Visible indexes in ascending order
    pub fn visible_indexes(&self, total_pages: usize) -> Vec<usize> {
        (0..total_pages).filter(|i| !self.is_hidden(*i)).collect()
    }
}

fn sorted(set: &FxHashSet<usize>) -> Vec<usize> {
    let mut indexes: Vec<usize> = set.iter().copied().collect();
    indexes.sort_unstable();
    indexes
}

// ============================================================================
// Indicator view
// ============================================================================

/// Render state of one page indicator
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndicatorView {
    pub index: usize,
    /// `aria-label`
    pub label: String,
    /// Current page (`aria-current="page"`)
    pub is_active: bool,
    pub is_fading: bool,
    pub is_hidden: bool,
    /// Active while autoplay is paused
    pub is_paused: bool,
    /// Roving tab index: only the active indicator is tabbable
    pub is_focusable: bool,
}

/// Fill the two `%s` slots of `template` with the 1-based page and the total
pub fn indicator_label(template: &str, page: usize, total_pages: usize) -> String {
    template
        .replacen("%s", &(page + 1).to_string(), 1)
        .replacen("%s", &total_pages.to_string(), 1)
}

/// Build views for every indicator
pub fn indicator_views(
    template: &str,
    current_page: usize,
    total_pages: usize,
    is_autoplay_paused: bool,
) -> Vec<IndicatorView> {
    let window = IndicatorWindow::compute(current_page, total_pages);
    (0..total_pages)
        .map(|index| {
            let is_active = index == current_page;
            IndicatorView {
                index,
                label: indicator_label(template, index, total_pages),
                is_active,
                is_fading: window.is_fading(index),
                is_hidden: window.is_hidden(index),
                is_paused: is_active && is_autoplay_paused,
                is_focusable: is_active,
            }
        })
        .collect()
}

// ============================================================================
// Keyboard focus
// ============================================================================

/// Roving keyboard focus across the indicator list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndicatorFocus {
    index: usize,
    /// Set while an indicator holds focus; cleared on blur
    dirty: bool,
}

impl IndicatorFocus {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Focused indicator, once focus has entered the list
    pub fn focused(&self) -> Option<usize> {
        self.dirty.then_some(self.index)
    }

    /// An indicator received focus
    pub fn focus(&mut self, index: usize) {
        self.dirty = true;
        self.index = index;
    }

    pub fn blur(&mut self) {
        self.dirty = false;
    }

    /// Move focus for a key press. Returns the newly focused index for
    /// ArrowLeft, ArrowRight, Home and End.
    pub fn on_key(&mut self, key: Key, total_pages: usize) -> Option<usize> {
        let last = total_pages.saturating_sub(1);
        let next = match key {
            Key::ArrowLeft => self.index.saturating_sub(1),
            Key::ArrowRight => (self.index + 1).min(last),
            Key::Home => 0,
            Key::End => last,
            _ => return None,
        };
        self.focus(next);
        Some(next)
    }
}
