//! Scenario tests driving a whole carousel through its public operations
//!
//! Geometry used throughout: 20 items of 300px with a 16px gap in a 948px
//! container, which gives 3 items per page, 7 pages and a max offset of
//! 5688px.

use std::time::Duration;

use bds_core::{IntersectionEntry, Key, ManualClock, PointerEvent, Timer};

use crate::autoplay::AutoplayState;
use crate::carousel::Carousel;
use crate::config::{CarouselConfig, CarouselLabels, PaginationType, SnapType};
use crate::context::{CarouselContext, CarouselProvider};
use crate::error::CarouselError;
use crate::navigation::Direction;

const PAGE: f32 = 948.0;

fn labels() -> CarouselLabels {
    CarouselLabels {
        next_button: "Next".into(),
        prev_button: "Previous".into(),
        pause_button: "Pause".into(),
        resume_button: "Resume".into(),
        pagination: "Pagination".into(),
        pagination_indicator: "Page %s of %s".into(),
    }
}

fn config() -> CarouselConfig {
    CarouselConfig::new("picks", labels())
}

fn mounted(config: CarouselConfig, clock: &ManualClock) -> Carousel<ManualClock> {
    let mut carousel = Carousel::with_clock(config, 20, clock.clone()).unwrap();
    carousel.resize(948.0);
    carousel
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn drag(carousel: &mut Carousel<ManualClock>, from: f32, to: f32) {
    assert!(carousel.list_pointer_down(&PointerEvent::mouse_down(from)));
    carousel.document_pointer(&PointerEvent::mouse_move(to));
    carousel.document_pointer(&PointerEvent::mouse_up(to));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_layout_for_reference_geometry() {
    let carousel = mounted(config(), &ManualClock::new());
    assert_eq!(carousel.items_per_page(), 3);
    assert_eq!(carousel.total_pages(), 7);
    assert_eq!(carousel.max_translate_x(), 5688.0);
}

#[test]
fn test_navigate_by_page_targets() {
    let clock = ManualClock::new();
    let mut page_snap = mounted(config(), &clock);
    let mut item_snap = mounted(config().snap_type(SnapType::Item), &clock);

    for page in 0..7 {
        page_snap.navigate_by_page(page);
        assert_eq!(page_snap.target_index(), 3 * page);
        assert_eq!(page_snap.current_page(), page);
    }
    for page in 0..18 {
        item_snap.navigate_by_page(page);
        assert_eq!(item_snap.target_index(), page);
    }
}

#[test]
fn test_navigate_by_page_is_idempotent() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.navigate_by_page(4);
    let first = carousel.snapshot();
    carousel.navigate_by_page(4);
    assert_eq!(carousel.snapshot(), first);
}

#[test]
fn test_navigate_by_index_lands_on_containing_page() {
    let mut carousel = mounted(config(), &ManualClock::new());
    for index in 0..20 {
        carousel.navigate_by_index(index);
        assert_eq!(carousel.current_page(), index / 3);
    }
}

#[test]
fn test_prev_at_first_page_without_autoplay_stays() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.navigate_by_direction(Direction::Prev);
    assert_eq!(carousel.current_page(), 0);
    assert_eq!(carousel.offset(), 0.0);
}

#[test]
fn test_prev_at_first_page_with_autoplay_wraps() {
    let mut carousel = mounted(config().autoplay(true), &ManualClock::new());
    carousel.navigate_by_direction(Direction::Prev);
    assert_eq!(carousel.current_page(), 6);
    assert_eq!(carousel.target_index(), 18);
    assert_eq!(carousel.offset(), 5688.0);
}

#[test]
fn test_next_at_last_page_without_autoplay_stays() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.navigate_by_page(6);
    carousel.next_click();
    assert_eq!(carousel.current_page(), 6);
}

#[test]
fn test_scrollbar_buttons_step_from_offset() {
    let mut carousel = mounted(
        config().pagination_type(PaginationType::Scrollbar),
        &ManualClock::new(),
    );
    carousel.next_click();
    assert_eq!(carousel.target_index(), 3);
    assert_eq!(carousel.offset(), PAGE);

    carousel.prev_click();
    assert_eq!(carousel.target_index(), 0);
    assert_eq!(carousel.offset(), 0.0);
}

// ============================================================================
// Indicators
// ============================================================================

#[test]
fn test_indicator_window_follows_page() {
    let mut carousel = mounted(config(), &ManualClock::new());

    let window = carousel.indicator_window();
    assert_eq!(window.visible_indexes(7), vec![0, 1, 2, 3, 4]);
    assert_eq!(window.fading_indexes(), vec![4]);

    carousel.navigate_by_page(6);
    let window = carousel.indicator_window();
    assert_eq!(window.visible_indexes(7), vec![2, 3, 4, 5, 6]);
    assert_eq!(window.fading_indexes(), vec![2]);
}

#[test]
fn test_indicator_click_and_keyboard() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.indicator_click(2);
    assert_eq!(carousel.current_page(), 2);

    // Keys move focus without navigating to visible indicators
    carousel.focus_indicator(2);
    assert_eq!(carousel.indicator_key_down(Key::ArrowRight), Some(3));
    assert_eq!(carousel.current_page(), 2);

    // End focuses a hidden indicator, which brings its page into view
    assert_eq!(carousel.indicator_key_down(Key::End), Some(6));
    assert_eq!(carousel.current_page(), 6);
    assert_eq!(carousel.focused_indicator(), Some(6));
}

#[test]
fn test_blur_leaves_pagination_unfocused() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.focus_indicator(1);
    assert_eq!(carousel.focused_indicator(), Some(1));

    carousel.blur_indicators();
    assert_eq!(carousel.focused_indicator(), None);

    carousel.focus_indicator(4);
    assert_eq!(carousel.focused_indicator(), Some(4));
}

// ============================================================================
// Gestures
// ============================================================================

#[test]
fn test_long_drag_snaps_to_next_page() {
    let mut carousel = mounted(config(), &ManualClock::new());
    drag(&mut carousel, 600.0, 200.0);
    assert_eq!(carousel.translate_x(), -PAGE);
    assert_eq!(carousel.current_page(), 1);
    assert!(!carousel.is_dragging());
}

#[test]
fn test_short_drag_snaps_back() {
    let mut carousel = mounted(config(), &ManualClock::new());
    drag(&mut carousel, 600.0, 500.0);
    assert_eq!(carousel.translate_x(), 0.0);
    assert_eq!(carousel.current_page(), 0);
}

#[test]
fn test_backward_drag_snaps_to_previous_page() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.navigate_by_page(2);
    drag(&mut carousel, 200.0, 600.0);
    assert_eq!(carousel.current_page(), 1);
    assert_eq!(carousel.offset(), PAGE);
}

#[test]
fn test_list_follows_pointer_until_release() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.list_pointer_down(&PointerEvent::touch_start(600.0));
    carousel.document_pointer(&PointerEvent::touch_move(350.0));
    assert!(carousel.is_dragging());
    assert_eq!(carousel.offset(), 250.0);
    assert_eq!(carousel.current_page(), 0);

    // Leaving the document ends the gesture like a release
    carousel.document_pointer(&PointerEvent::mouse_leave(350.0));
    assert!(!carousel.is_dragging());
}

#[test]
fn test_press_without_move_keeps_position() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.navigate_by_page(1);
    carousel.list_pointer_down(&PointerEvent::mouse_down(300.0));
    carousel.document_pointer(&PointerEvent::mouse_up(300.0));
    assert_eq!(carousel.current_page(), 1);
    assert!(carousel.item_click());
}

#[test]
fn test_release_after_autoplay_during_press_settles_on_new_page() {
    let clock = ManualClock::new();
    let mut carousel = mounted(config().autoplay(true), &clock);
    assert!(carousel.list_pointer_down(&PointerEvent::mouse_down(500.0)));

    // The page advances but the held list keeps its offset
    clock.advance(ms(5000));
    assert!(carousel.tick());
    assert_eq!(carousel.current_page(), 1);
    assert_eq!(carousel.offset(), 0.0);

    carousel.document_pointer(&PointerEvent::mouse_up(500.0));
    assert_eq!(carousel.current_page(), 1);
    assert_eq!(carousel.target_index(), 3);
    assert_eq!(carousel.offset(), PAGE);
    assert_eq!(carousel.translate_x(), -PAGE);
}

#[test]
fn test_release_after_items_shrink_during_press_settles() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.navigate_by_page(2);
    assert!(carousel.list_pointer_down(&PointerEvent::mouse_down(500.0)));

    carousel.set_total_items(3);
    carousel.document_pointer(&PointerEvent::mouse_up(500.0));
    assert_eq!(carousel.current_page(), 0);
    assert_eq!(carousel.offset(), 0.0);
}

#[test]
fn test_thumb_drag_scrolls_freely() {
    let mut carousel = mounted(
        config().pagination_type(PaginationType::Scrollbar),
        &ManualClock::new(),
    );
    let thumb = carousel.scrollbar_metrics().thumb_width;
    assert!(carousel.thumb_pointer_down(&PointerEvent::mouse_down(10.0)));
    // The list cannot be dragged while the thumb is held
    assert!(!carousel.list_pointer_down(&PointerEvent::mouse_down(10.0)));

    carousel.document_pointer(&PointerEvent::mouse_move(30.0));
    let expected = 20.0 * 940.0 / thumb;
    assert!((carousel.offset() - expected).abs() < 1e-2);

    carousel.document_pointer(&PointerEvent::mouse_up(30.0));
    assert!((carousel.offset() - expected).abs() < 1e-2);
    assert_eq!(carousel.current_page(), 0);
}

#[test]
fn test_track_press_jumps_to_end() {
    let mut carousel = mounted(
        config().pagination_type(PaginationType::Scrollbar),
        &ManualClock::new(),
    );
    assert!(carousel.track_pointer_down(&PointerEvent::mouse_down(940.0)));
    assert_eq!(carousel.offset(), 5688.0);
    assert_eq!(carousel.scrollbar_metrics().value_now, 100);
}

#[test]
fn test_track_press_does_not_drag() {
    let mut carousel = mounted(
        config().pagination_type(PaginationType::Scrollbar),
        &ManualClock::new(),
    );
    assert!(carousel.track_pointer_down(&PointerEvent::mouse_down(470.0)));
    let jumped = carousel.offset();
    assert!(jumped > 0.0);

    carousel.document_pointer(&PointerEvent::mouse_move(671.0));
    assert_eq!(carousel.offset(), jumped);
    carousel.document_pointer(&PointerEvent::mouse_up(671.0));
    assert_eq!(carousel.offset(), jumped);

    // Nothing is held, so the list can be dragged straight away
    assert!(carousel.list_pointer_down(&PointerEvent::mouse_down(300.0)));
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_item_keys_navigate_when_clipped() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.focus_item(2);
    assert!(carousel.item_key_down(Key::ArrowRight));
    assert_eq!(carousel.focused_item(), Some(3));
    assert_eq!(carousel.current_page(), 1);

    assert!(carousel.item_key_down(Key::End));
    assert_eq!(carousel.current_page(), 6);
    assert!(carousel.item_key_down(Key::Home));
    assert_eq!(carousel.current_page(), 0);
    assert!(!carousel.item_key_down(Key::Enter));
}

// ============================================================================
// Autoplay
// ============================================================================

#[test]
fn test_autoplay_cycles_through_pages() {
    let clock = ManualClock::new();
    let mut carousel = mounted(config().autoplay(true), &clock);

    for k in 1..7 {
        clock.advance(ms(5000));
        assert!(carousel.tick());
        assert_eq!(carousel.translate_x(), -(316.0 * 3.0 * k as f32));
    }
    clock.advance(ms(5000));
    assert!(carousel.tick());
    assert_eq!(carousel.current_page(), 0);
    assert_eq!(carousel.translate_x(), 0.0);
}

#[test]
fn test_autoplay_waits_for_full_interval() {
    let clock = ManualClock::new();
    let mut carousel = mounted(config().autoplay(true), &clock);
    clock.advance(ms(4999));
    assert!(!carousel.tick());
    clock.advance(ms(1));
    assert!(carousel.tick());
    assert_eq!(carousel.current_page(), 1);
}

#[test]
fn test_hover_pauses_autoplay() {
    let clock = ManualClock::new();
    let mut carousel = mounted(config().autoplay(true), &clock);

    clock.advance(ms(3000));
    carousel.mouse_enter();
    assert_eq!(carousel.autoplay_state(), AutoplayState::Paused);
    clock.advance(ms(60_000));
    assert!(!carousel.tick());

    carousel.mouse_leave();
    clock.advance(ms(1999));
    assert!(!carousel.tick());
    clock.advance(ms(1));
    assert!(carousel.tick());
}

#[test]
fn test_manual_navigation_restarts_countdown() {
    let clock = ManualClock::new();
    let mut carousel = mounted(config().autoplay(true), &clock);

    clock.advance(ms(4000));
    carousel.next_click();
    clock.advance(ms(4000));
    assert!(!carousel.tick());
    assert_eq!(carousel.current_page(), 1);
    clock.advance(ms(1000));
    assert!(carousel.tick());
    assert_eq!(carousel.current_page(), 2);
}

#[test]
fn test_navigation_while_paused_stays_paused() {
    let clock = ManualClock::new();
    let mut carousel = mounted(config().autoplay(true), &clock);

    carousel.mouse_enter();
    carousel.next_click();
    clock.advance(ms(20_000));
    assert!(!carousel.tick());
    assert!(carousel.is_autoplay_paused());
}

#[test]
fn test_autoplay_button_toggles() {
    let clock = ManualClock::new();
    let mut carousel = mounted(config().autoplay(true), &clock);

    carousel.autoplay_button_click();
    assert!(!carousel.is_autoplaying());
    clock.advance(ms(20_000));
    assert!(!carousel.tick());

    carousel.autoplay_button_click();
    assert!(carousel.is_autoplaying());
    clock.advance(ms(5000));
    assert!(carousel.tick());
}

#[test]
fn test_offscreen_carousel_stops_autoplay() {
    let clock = ManualClock::new();
    let mut carousel = mounted(config().autoplay(true), &clock);

    carousel.intersect(&IntersectionEntry::new("picks__container", 0.2));
    assert_eq!(carousel.autoplay_state(), AutoplayState::Idle);
    clock.advance(ms(20_000));
    assert!(!carousel.tick());

    // Exactly half visible counts as on screen
    carousel.intersect(&IntersectionEntry::new("picks__container", 0.5));
    assert_eq!(carousel.autoplay_state(), AutoplayState::Playing);
}

#[test]
fn test_autoplay_requires_indicators() {
    let clock = ManualClock::new();
    let mut carousel = mounted(
        config()
            .autoplay(true)
            .pagination_type(PaginationType::Scrollbar),
        &clock,
    );
    clock.advance(ms(20_000));
    assert!(!carousel.tick());
    assert_eq!(carousel.autoplay_state(), AutoplayState::Idle);
}

#[test]
fn test_repeated_resume_fires_once() {
    let clock = ManualClock::new();
    let mut timer = Timer::new(clock.clone(), ms(5000));
    timer.start();
    clock.advance(ms(1000));
    timer.pause();

    timer.resume();
    timer.resume();
    timer.resume();
    clock.advance(ms(4000));
    assert!(timer.poll());
    clock.advance(ms(20_000));
    assert!(!timer.poll());
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_growth_from_last_page_clamps_to_new_last_page() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.navigate_by_page(6);
    carousel.transition_end();

    carousel.resize(1896.0);
    assert_eq!(carousel.items_per_page(), 6);
    assert_eq!(carousel.total_pages(), 4);
    assert_eq!(carousel.current_page(), 3);
    assert_eq!(carousel.target_index(), 18);
    assert_eq!(carousel.offset(), carousel.max_translate_x());
    assert!(!carousel.show_next_button());
    assert!(carousel.indicator_window().visible_indexes(4).contains(&3));
}

#[test]
fn test_shrinking_item_count_clamps_page() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.navigate_by_page(6);
    carousel.set_total_items(5);
    assert_eq!(carousel.total_pages(), 2);
    assert_eq!(carousel.current_page(), 1);
    assert_eq!(carousel.target_index(), 3);
}

#[test]
fn test_set_config_switches_snap_type() {
    let mut carousel = mounted(config(), &ManualClock::new());
    carousel.navigate_by_page(2);
    carousel
        .set_config(config().snap_type(SnapType::Item))
        .unwrap();
    assert_eq!(carousel.total_pages(), 18);
    assert_eq!(carousel.target_index(), 6);
    assert_eq!(carousel.current_page(), 6);
}

// ============================================================================
// Empty and misuse
// ============================================================================

#[test]
fn test_zero_items_is_inert() {
    let clock = ManualClock::new();
    let mut carousel = Carousel::with_clock(config().autoplay(true), 0, clock.clone()).unwrap();
    carousel.resize(948.0);

    assert!(carousel.view().is_none());
    carousel.next_click();
    carousel.indicator_click(3);
    assert!(!carousel.list_pointer_down(&PointerEvent::mouse_down(10.0)));
    assert!(!carousel.item_key_down(Key::End));
    clock.advance(ms(5000));
    carousel.tick();
    assert_eq!(carousel.current_page(), 0);
    assert_eq!(carousel.offset(), 0.0);
}

#[test]
fn test_context_outside_provider() {
    assert_eq!(
        CarouselContext::<ManualClock>::current().unwrap_err(),
        CarouselError::MissingProvider
    );

    let handle = mounted(config(), &ManualClock::new()).into_handle();
    CarouselProvider::provide(&handle, || {
        let current = CarouselContext::<ManualClock>::current().unwrap();
        current.borrow_mut().next_click();
    });
    assert_eq!(handle.borrow().current_page(), 1);
}
