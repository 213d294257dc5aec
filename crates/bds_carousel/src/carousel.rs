//! Carousel controller
//!
//! [`Carousel`] owns every piece of carousel state and is the only place it
//! changes. The list offset is the single source of truth for what is on
//! screen; every input modality (buttons, drags, scrollbar, keyboard,
//! autoplay, resize) ends in one of a few named operations that update it:
//!
//! ```text
//!  buttons / autoplay ─► navigate_by_direction ─┐
//!  drag release ───────► navigate_by_index ─────┼─► navigate_by_page ─► commit ─► offset
//!  indicators ─────────────────────────────────►┘
//!  thumb / track / wheel / scrollbar keys ──────────────────────────────────────► offset
//!  resize ─► layout ─► navigate_by_index(target) ─► arrows ─► scrollbar
//! ```
//!
//! Measurements are pushed in by the host ([`Carousel::resize`],
//! [`Carousel::set_track_width`], or debounced via
//! [`Carousel::observe_resize`]) and deferred work runs from
//! [`Carousel::tick`]. Until the container has been measured the geometry
//! cache is empty and navigation is a no-op.

use std::fmt;

use bds_core::{
    event_types, Clock, Debouncer, IntersectionEntry, Key, PointerEvent, ResizeEntry,
    SystemClock, WheelEvent,
};
use serde::Serialize;

use crate::autoplay::{Autoplay, AutoplayState};
use crate::config::{CarouselConfig, PaginationType};
use crate::constants::{MAIN_INTERSECT_THRESHOLD, RESIZE_DEBOUNCE};
use crate::drag::{DragRelease, DragSession, ListDrag};
use crate::error::Result;
use crate::focus::ItemFocus;
use crate::geometry::{CarouselLayout, ItemCoordinate};
use crate::navigation::{self, Direction, PagePosition};
use crate::pagination::{IndicatorFocus, IndicatorWindow};
use crate::scrollbar::{self, Scrollbar, ScrollbarMetrics};

type Callback = Box<dyn FnMut()>;

/// Host callbacks, invoked after the corresponding transition was applied
#[derive(Default)]
struct CarouselCallbacks {
    on_next_click: Option<Callback>,
    on_prev_click: Option<Callback>,
    on_autoplay_button_click: Option<Callback>,
    on_header_button_click: Option<Callback>,
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(callback) = callback.as_mut() {
        callback();
    }
}

/// Serializable summary of the carousel state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarouselSnapshot {
    pub total_items: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub target_index: usize,
    pub translate_x: f32,
    pub max_translate_x: f32,
    pub show_prev_button: bool,
    pub show_next_button: bool,
    pub is_dragging: bool,
    pub autoplay: AutoplayState,
    pub hidden_indicators: Vec<usize>,
    pub fading_indicators: Vec<usize>,
}

/// Headless carousel engine
///
/// Callbacks registered with the `on_*` methods run while the carousel is
/// mutably borrowed; they must not borrow the same
/// [`CarouselHandle`](crate::CarouselHandle) again.
pub struct Carousel<C: Clock + Clone = SystemClock> {
    config: CarouselConfig,
    total_items: usize,
    /// Measured container `clientWidth`, `None` until the first resize
    container_width: Option<f32>,
    layout: CarouselLayout,
    position: PagePosition,
    /// Positive scroll distance; the list renders at `translateX(-offset)`
    offset: f32,
    show_next_button: bool,
    show_prev_button: bool,
    list_drag: DragSession<ListDrag>,
    scrollbar: Scrollbar,
    item_focus: ItemFocus,
    indicator_focus: IndicatorFocus,
    autoplay: Autoplay<C>,
    container_resize: Debouncer<C, f32>,
    track_resize: Debouncer<C, f32>,
    callbacks: CarouselCallbacks,
}

impl Carousel<SystemClock> {
    /// Create a carousel driven by the system clock
    pub fn new(config: CarouselConfig, total_items: usize) -> Result<Self> {
        Self::with_clock(config, total_items, SystemClock::new())
    }
}

impl<C: Clock + Clone> Carousel<C> {
    /// Create a carousel driven by `clock`
    pub fn with_clock(config: CarouselConfig, total_items: usize, clock: C) -> Result<Self> {
        config.validate()?;

        let autoplay = Autoplay::new(
            clock.clone(),
            config.interval(),
            config.has_effective_autoplay(),
        );
        let mut carousel = Self {
            config,
            total_items,
            container_width: None,
            layout: CarouselLayout::default(),
            position: PagePosition::default(),
            offset: 0.0,
            show_next_button: false,
            show_prev_button: false,
            list_drag: DragSession::new(ListDrag),
            scrollbar: Scrollbar::new(),
            item_focus: ItemFocus::default(),
            indicator_focus: IndicatorFocus::default(),
            autoplay,
            container_resize: Debouncer::new(clock.clone(), RESIZE_DEBOUNCE),
            track_resize: Debouncer::new(clock, RESIZE_DEBOUNCE),
            callbacks: CarouselCallbacks::default(),
        };
        carousel.update_arrows();
        tracing::debug!(id = %carousel.config.id, total_items, "carousel created");
        Ok(carousel)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    pub fn item_coordinates(&self) -> &[ItemCoordinate] {
        &self.layout.coordinates
    }

    pub fn items_per_page(&self) -> usize {
        self.layout.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        self.layout.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.position.current_page
    }

    pub fn target_index(&self) -> usize {
        self.position.target_index
    }

    /// Scroll distance of the list, always `>= 0`
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The list's `translateX`, `-offset`
    pub fn translate_x(&self) -> f32 {
        -self.offset
    }

    pub fn max_translate_x(&self) -> f32 {
        self.layout.max_translate_x
    }

    pub fn show_next_button(&self) -> bool {
        self.show_next_button
    }

    pub fn show_prev_button(&self) -> bool {
        self.show_prev_button
    }

    /// A list drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.list_drag.is_active()
    }

    /// The last list gesture moved the list
    pub fn is_dragged(&self) -> bool {
        self.list_drag.is_dragged()
    }

    pub fn is_scrollbar_dragging(&self) -> bool {
        self.scrollbar.is_dragging()
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_autoplaying()
    }

    pub fn is_autoplay_paused(&self) -> bool {
        self.autoplay.is_paused()
    }

    pub fn indicator_window(&self) -> IndicatorWindow {
        IndicatorWindow::compute(self.position.current_page, self.layout.total_pages)
    }

    pub fn scrollbar_metrics(&self) -> ScrollbarMetrics {
        self.scrollbar.metrics()
    }

    /// Item holding keyboard focus, once focus entered the list
    pub fn focused_item(&self) -> Option<usize> {
        self.item_focus.focused()
    }

    /// Indicator holding keyboard focus, once focus entered the pagination
    pub fn focused_indicator(&self) -> Option<usize> {
        self.indicator_focus.focused()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        let window = self.indicator_window();
        CarouselSnapshot {
            total_items: self.total_items,
            items_per_page: self.layout.items_per_page,
            total_pages: self.layout.total_pages,
            current_page: self.position.current_page,
            target_index: self.position.target_index,
            translate_x: self.translate_x(),
            max_translate_x: self.layout.max_translate_x,
            show_prev_button: self.show_prev_button,
            show_next_button: self.show_next_button,
            is_dragging: self.is_dragging(),
            autoplay: self.autoplay.state(),
            hidden_indicators: window.hidden_indexes(),
            fading_indicators: window.fading_indexes(),
        }
    }

    // =========================================================================
    // Callbacks
    // =========================================================================

    pub fn on_next_click<F: FnMut() + 'static>(&mut self, callback: F) {
        self.callbacks.on_next_click = Some(Box::new(callback));
    }

    pub fn on_prev_click<F: FnMut() + 'static>(&mut self, callback: F) {
        self.callbacks.on_prev_click = Some(Box::new(callback));
    }

    pub fn on_autoplay_button_click<F: FnMut() + 'static>(&mut self, callback: F) {
        self.callbacks.on_autoplay_button_click = Some(Box::new(callback));
    }

    pub fn on_header_button_click<F: FnMut() + 'static>(&mut self, callback: F) {
        self.callbacks.on_header_button_click = Some(Box::new(callback));
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Replace the configuration and recompute everything derived from it
    pub fn set_config(&mut self, config: CarouselConfig) -> Result<()> {
        config.validate()?;
        self.autoplay.set_interval(config.interval());
        self.autoplay.set_enabled(config.has_effective_autoplay());
        self.config = config;
        self.relayout();
        self.update_arrows();
        Ok(())
    }

    /// Change the number of items
    pub fn set_total_items(&mut self, total_items: usize) {
        if total_items == self.total_items {
            return;
        }
        self.total_items = total_items;
        self.item_focus.clamp(total_items);
        self.relayout();
        self.update_arrows();
    }

    /// Apply a new container width immediately
    pub fn resize(&mut self, container_width: f32) {
        // A direct measurement supersedes any queued observation
        self.container_resize.cancel();
        self.container_width = Some(container_width.max(0.0));
        self.relayout();
        self.update_arrows();
    }

    /// Apply a new scrollbar track width immediately
    pub fn set_track_width(&mut self, track_width: f32) {
        self.track_resize.cancel();
        self.scrollbar.set_track_width(track_width);
        self.refresh_scrollbar();
    }

    /// Queue a resize observer notification; applied by [`Carousel::tick`]
    /// once the notifications have settled
    pub fn observe_resize(&mut self, entry: &ResizeEntry) {
        if entry.target == self.config.container_id() {
            self.container_resize.push(entry.width);
        } else if entry.target == self.config.track_id() {
            self.track_resize.push(entry.width);
        }
    }

    /// Intersection observer notification for the container
    pub fn intersect(&mut self, entry: &IntersectionEntry) {
        if entry.target != self.config.container_id() {
            return;
        }
        self.autoplay
            .set_visible(entry.is_intersecting(MAIN_INTERSECT_THRESHOLD));
    }

    /// Run deferred work: settled resize notifications and the autoplay
    /// countdown. Returns true when autoplay advanced the carousel.
    pub fn tick(&mut self) -> bool {
        if let Some(width) = self.container_resize.take_ready() {
            self.resize(width);
        }
        if let Some(width) = self.track_resize.take_ready() {
            self.set_track_width(width);
        }

        if !self.autoplay.poll() {
            return false;
        }
        if self.position.current_page + 1 >= self.layout.total_pages {
            self.navigate_by_page(0);
        } else {
            self.navigate_by_direction(Direction::Next);
        }
        // A single-page carousel never changes page but keeps counting
        self.autoplay.restart();
        true
    }

    /// The list finished its slide transition
    pub fn transition_end(&mut self) {
        self.update_arrows();
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Go to `page`, clamped to the last page
    pub fn navigate_by_page(&mut self, page: usize) {
        if self.layout.is_empty() {
            return;
        }
        let position = navigation::resolve_page(&self.layout, self.config.snap_type, page);
        self.commit(position);
    }

    /// Go to the page containing item `index`
    pub fn navigate_by_index(&mut self, index: usize) {
        if self.layout.is_empty() {
            return;
        }
        let position = navigation::resolve_index(&self.layout, self.config.snap_type, index);
        self.commit(position);
    }

    /// Step one page (or, with scrollbar pagination, one page's worth of
    /// items from the current scroll position)
    pub fn navigate_by_direction(&mut self, direction: Direction) {
        if self.layout.is_empty() {
            return;
        }
        if self.config.pagination_type == PaginationType::Scrollbar {
            let index = navigation::scrollbar_step_index(&self.layout, self.offset, direction);
            self.navigate_by_index(index);
        } else {
            let page = navigation::step_page(
                self.position.current_page,
                self.layout.total_pages,
                direction,
                self.config.autoplay,
            );
            self.navigate_by_page(page);
        }
    }

    // =========================================================================
    // Buttons
    // =========================================================================

    pub fn next_click(&mut self) {
        self.navigate_by_direction(Direction::Next);
        fire(&mut self.callbacks.on_next_click);
    }

    pub fn prev_click(&mut self) {
        self.navigate_by_direction(Direction::Prev);
        fire(&mut self.callbacks.on_prev_click);
    }

    /// Footer play/pause button
    pub fn autoplay_button_click(&mut self) {
        self.autoplay.toggle();
        fire(&mut self.callbacks.on_autoplay_button_click);
    }

    pub fn header_button_click(&mut self) {
        fire(&mut self.callbacks.on_header_button_click);
    }

    /// Pointer entered the list container
    pub fn mouse_enter(&mut self) {
        self.autoplay.hover_enter();
    }

    /// Pointer left the list container
    pub fn mouse_leave(&mut self) {
        self.autoplay.hover_leave();
    }

    // =========================================================================
    // Pointer gestures
    // =========================================================================

    /// Press on the list container. Returns true when a drag started.
    pub fn list_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.layout.is_empty() || self.scrollbar.is_active() {
            return false;
        }
        self.list_drag
            .press(event, self.offset, self.layout.max_translate_x);
        self.list_drag.is_active()
    }

    /// Press on the scrollbar thumb. Returns true when a drag started.
    pub fn thumb_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.layout.is_empty() || self.list_drag.is_active() {
            return false;
        }
        self.scrollbar.press_thumb(
            event,
            self.layout.content_width,
            self.layout.max_translate_x,
            self.offset,
        )
    }

    /// Press on the scrollbar track, `event.x` relative to the track.
    /// Returns true when the list jumped.
    pub fn track_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.layout.is_empty() || self.list_drag.is_active() {
            return false;
        }
        match self.scrollbar.press_track(
            event,
            self.layout.content_width,
            self.layout.max_translate_x,
            self.offset,
        ) {
            Some(offset) => {
                self.set_offset(offset);
                true
            }
            None => false,
        }
    }

    /// Document-level pointer move, up or leave
    pub fn document_pointer(&mut self, event: &PointerEvent) {
        if event.event_type == event_types::POINTER_MOVE {
            if let Some(offset) = self.list_drag.drag(event) {
                self.offset = offset;
                self.refresh_scrollbar();
            } else if let Some(offset) = self.scrollbar.drag(event) {
                self.set_offset(offset);
            }
        } else if event.is_release() {
            if let Some(release) = self.list_drag.release(event) {
                self.finish_list_drag(release);
            } else {
                self.scrollbar.release(event);
            }
        }
    }

    fn finish_list_drag(&mut self, release: DragRelease) {
        let target = navigation::release_target(&self.layout, release.offset, release.origin_offset);
        tracing::debug!(
            from = release.origin_offset,
            to = release.offset,
            ?target,
            "list drag released"
        );
        match target {
            Some(index) => self.navigate_by_index(index),
            // The page may have changed under a press that never moved
            None => self.settle_offset(),
        }
    }

    /// Click on an item link. Returns false when the click ends a drag and
    /// must not follow the link.
    pub fn item_click(&mut self) -> bool {
        !self.list_drag.take_dragged()
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// An item link received focus
    pub fn focus_item(&mut self, index: usize) {
        if index < self.total_items {
            self.item_focus.focus(index);
        }
    }

    /// Key press inside the item list. Returns true when handled.
    pub fn item_key_down(&mut self, key: Key) -> bool {
        let Some(step) = self.item_focus.on_key(key, &self.layout, self.offset) else {
            return false;
        };
        if step.navigate {
            self.navigate_by_index(step.index);
        }
        true
    }

    /// Click on a page indicator
    pub fn indicator_click(&mut self, page: usize) {
        self.navigate_by_page(page);
    }

    /// A page indicator received focus; hidden indicators bring their page
    /// into view
    pub fn focus_indicator(&mut self, page: usize) {
        let page = page.min(self.layout.total_pages.saturating_sub(1));
        let hidden = self.indicator_window().is_hidden(page);
        self.indicator_focus.focus(page);
        if hidden {
            self.navigate_by_page(page);
        }
    }

    /// Focus left the pagination
    pub fn blur_indicators(&mut self) {
        self.indicator_focus.blur();
    }

    /// Key press inside the pagination. Returns the newly focused indicator.
    pub fn indicator_key_down(&mut self, key: Key) -> Option<usize> {
        let page = self.indicator_focus.on_key(key, self.layout.total_pages)?;
        self.focus_indicator(page);
        Some(page)
    }

    /// Key press on the scrollbar. Returns true when handled.
    pub fn scrollbar_key_down(&mut self, key: Key) -> bool {
        if self.layout.is_empty() || self.config.pagination_type != PaginationType::Scrollbar {
            return false;
        }
        match scrollbar::key_offset(key, self.offset, self.layout.max_translate_x) {
            Some(offset) => {
                self.set_offset(offset);
                true
            }
            None => false,
        }
    }

    /// Wheel over the list; only scrollbar pagination scrolls freely
    pub fn wheel(&mut self, event: &WheelEvent) -> bool {
        if self.layout.is_empty() || self.config.pagination_type != PaginationType::Scrollbar {
            return false;
        }
        let offset =
            scrollbar::wheel_offset(self.offset, event.delta_x, self.layout.max_translate_x);
        self.set_offset(offset);
        true
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Rebuild the geometry cache and re-resolve the current target
    fn relayout(&mut self) {
        let Some(container_width) = self.container_width else {
            return;
        };
        let previous = (self.layout.items_per_page, self.layout.total_pages);
        self.layout = CarouselLayout::compute(
            &self.config.id,
            self.total_items,
            self.config.item_width,
            self.config.is_full_width,
            self.config.snap_type,
            container_width,
        );

        if self.layout.is_empty() {
            self.position = PagePosition::default();
            self.offset = 0.0;
            self.list_drag.cancel();
            self.scrollbar.cancel();
        } else {
            // resolve_index keeps the page below total_pages
            let position = navigation::resolve_index(
                &self.layout,
                self.config.snap_type,
                self.position.target_index,
            );
            self.commit(position);
        }
        self.refresh_scrollbar();

        if previous != (self.layout.items_per_page, self.layout.total_pages) {
            self.autoplay.restart();
        }
    }

    /// Apply a resolved position and settle the offset on its target
    fn commit(&mut self, position: PagePosition) {
        let changed = position != self.position;
        self.position = position;

        // A list drag owns the offset until release
        if !self.list_drag.is_active() {
            if let Some(offset) = navigation::committed_offset(&self.layout, position.target_index)
            {
                self.offset = offset;
            }
        }
        self.refresh_scrollbar();

        if changed {
            tracing::debug!(
                page = position.current_page,
                target = position.target_index,
                offset = self.offset,
                "carousel navigated"
            );
            self.autoplay.restart();
        }
    }

    /// Put the offset back on the committed target
    fn settle_offset(&mut self) {
        let target_index = self.position.target_index;
        if let Some(offset) = navigation::committed_offset(&self.layout, target_index) {
            self.offset = offset;
        }
        self.refresh_scrollbar();
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = self.layout.clamp_offset(offset);
        self.refresh_scrollbar();
    }

    fn update_arrows(&mut self) {
        let autoplay = self.config.autoplay;
        self.show_next_button = autoplay || self.offset < self.layout.max_translate_x;
        self.show_prev_button = autoplay || self.offset > 0.0;
    }

    fn refresh_scrollbar(&mut self) {
        self.scrollbar.refresh(
            self.layout.content_width,
            self.layout.max_translate_x,
            self.offset,
        );
    }
}

impl<C: Clock + Clone> fmt::Debug for Carousel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("id", &self.config.id)
            .field("total_items", &self.total_items)
            .field("container_width", &self.container_width)
            .field("position", &self.position)
            .field("offset", &self.offset)
            .field("autoplay", &self.autoplay)
            .finish_non_exhaustive()
    }
}
