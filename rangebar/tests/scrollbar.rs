use std::cell::RefCell;
use std::rc::Rc;

use rangebar::wakeup;
use rangebar::{
    HandleGeometry, Key, KeyState, RepeatTimer, ScrollAxis, Scrollbar, ScrollbarConfig,
    TrackLayout,
};

struct NoKeys;

impl KeyState for NoKeys {
    fn is_key_down(&self, _key: Key) -> bool {
        false
    }
}

/// Vertical scrollbar with a 200px track between two 20px buttons.
fn create_scrollbar(config: ScrollbarConfig) -> Scrollbar {
    let bar = Scrollbar::with_config(
        ScrollAxis::Vertical,
        config,
        Rc::new(RepeatTimer::new()),
        Rc::new(NoKeys),
    )
    .expect("valid config");
    bar.set_track_layout(TrackLayout::new(240.0, 20.0, 20.0));
    bar
}

fn record_scrolls(bar: &Scrollbar) -> Rc<RefCell<Vec<i32>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    bar.scrolled().connect(move |value| sink.borrow_mut().push(*value));
    seen
}

fn assert_in_range(bar: &Scrollbar) {
    let state = bar.state();
    let max = (i64::from(state.full_size) - i64::from(state.viewport_size)).max(0);
    let current = i64::from(state.current_scroll);
    assert!(
        (0..=max).contains(&current),
        "scroll {} outside 0..={}",
        current,
        max
    );
}

// ============================================================================
// Commit protocol
// ============================================================================

#[test]
fn test_set_scroll_clamps_to_max() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);

    assert_eq!(bar.set_scroll(5000), 900);
    assert_eq!(bar.current_scroll(), 900);
    assert_eq!(bar.max_scroll(), 900);
}

#[test]
fn test_set_scroll_clamps_negative_to_zero() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);
    bar.set_scroll(300);

    assert_eq!(bar.set_scroll(-50), 0);
}

#[test]
fn test_any_candidate_stays_in_range() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);

    for candidate in [i32::MIN, -10_000, -1, 0, 1, 450, 899, 900, 901, 10_000, i32::MAX] {
        bar.set_scroll(candidate);
        assert_in_range(&bar);
    }
    for delta in [i32::MAX, i32::MIN, 7, -3] {
        bar.scroll_by(delta);
        assert_in_range(&bar);
    }
}

#[test]
fn test_commit_same_value_does_not_notify() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);
    let seen = record_scrolls(&bar);

    bar.set_scroll(300);
    bar.set_scroll(300);
    bar.set_scroll(bar.current_scroll());

    assert_eq!(*seen.borrow(), vec![300]);
}

#[test]
fn test_clamped_duplicate_does_not_notify() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);
    let seen = record_scrolls(&bar);

    bar.set_scroll(5000);
    bar.set_scroll(6000);
    bar.scroll_to_end();

    assert_eq!(*seen.borrow(), vec![900]);
}

#[test]
fn test_scroll_without_dimensions_stays_at_zero() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    let seen = record_scrolls(&bar);

    assert_eq!(bar.set_scroll(100), 0);
    assert!(seen.borrow().is_empty());
}

// ============================================================================
// Handle geometry
// ============================================================================

#[test]
fn test_handle_length_proportional_to_viewport() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);

    let geometry = bar.geometry();
    assert_eq!(geometry.track_space, 200.0);
    assert_eq!(geometry.length, 20.0);
    assert!(geometry.visible);
    assert!(geometry.enabled);
    assert_eq!(geometry.offset, 0.0);
}

#[test]
fn test_handle_offset_follows_scroll() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);

    bar.set_scroll(450);
    assert_eq!(bar.geometry().offset, 90.0);

    bar.scroll_to_end();
    assert_eq!(bar.geometry().offset, 180.0);
}

#[test]
fn test_handle_offset_is_monotonic() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);

    let mut previous = -1.0;
    for scroll in (0..=900).step_by(7) {
        bar.set_scroll(scroll);
        let offset = bar.geometry().offset;
        assert!(offset >= previous, "offset went back at scroll {}", scroll);
        assert!(offset <= bar.geometry().available_space());
        previous = offset;
    }
}

#[test]
fn test_handle_hidden_when_content_fits() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);
    bar.set_scroll(500);
    let seen = record_scrolls(&bar);

    bar.set_scroll_dimensions(1000, 800);

    let geometry = bar.geometry();
    assert!(!geometry.visible);
    assert!(!geometry.enabled);
    assert_eq!(geometry.length, 0.0);
    assert_eq!(bar.current_scroll(), 0);
    assert_eq!(*seen.borrow(), vec![0]);
}

#[test]
fn test_hiding_handle_at_zero_does_not_notify() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);
    let seen = record_scrolls(&bar);

    bar.set_scroll_dimensions(1000, 800);
    bar.set_scroll_dimensions(900, 800);

    assert!(!bar.geometry().visible);
    assert_eq!(bar.current_scroll(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_handle_hidden_when_viewport_equals_full_size() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(500, 500);

    assert!(!bar.geometry().visible);
    assert_eq!(bar.current_scroll(), 0);
}

#[test]
fn test_empty_content_hides_handle() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(0, 0);

    assert!(!bar.geometry().visible);
    assert_eq!(bar.geometry().offset, 0.0);
    assert_eq!(bar.max_scroll(), 0);
}

#[test]
fn test_buttons_filling_container_hide_handle() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);
    bar.set_scroll(400);

    bar.set_track_layout(TrackLayout::new(30.0, 20.0, 20.0));

    assert_eq!(bar.geometry().track_space, 0.0);
    assert!(!bar.geometry().visible);
    assert_eq!(bar.current_scroll(), 0);
}

#[test]
fn test_resize_recomputes_length() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);

    bar.set_track_layout(TrackLayout::new(440.0, 20.0, 20.0));

    assert_eq!(bar.geometry().length, 40.0);
}

#[test]
fn test_geometry_changed_and_wakeup_on_scroll() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);

    let (sender, mut receiver) = wakeup::channel();
    bar.install_wakeup(sender);
    let geometries: Rc<RefCell<Vec<HandleGeometry>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&geometries);
    bar.geometry_changed()
        .connect(move |geometry| sink.borrow_mut().push(*geometry));

    bar.set_scroll(900);

    assert_eq!(geometries.borrow().len(), 1);
    assert_eq!(geometries.borrow()[0].offset, 180.0);
    assert!(receiver.drain() >= 1);
}

#[test]
fn test_geometry_observes_committed_scroll() {
    let bar = Rc::new(create_scrollbar(ScrollbarConfig::default()));
    bar.set_scroll_dimensions(100, 1000);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let weak = Rc::downgrade(&bar);
    bar.scrolled().connect(move |value| {
        if let Some(bar) = weak.upgrade() {
            sink.borrow_mut().push((*value, bar.geometry().offset));
        }
    });

    bar.set_scroll(450);

    assert_eq!(*seen.borrow(), vec![(450, 90.0)]);
}

// ============================================================================
// Dimensions and stick-to-end
// ============================================================================

#[test]
fn test_stick_to_end_follows_growing_content() {
    let bar = create_scrollbar(ScrollbarConfig::new().stick_to_end());
    bar.set_scroll_dimensions(100, 1000);
    bar.scroll_to_end();
    assert_eq!(bar.current_scroll(), 900);

    bar.set_scroll_dimensions(100, 2000);

    assert_eq!(bar.current_scroll(), 1900);
}

#[test]
fn test_stick_to_end_starts_following_from_empty() {
    let bar = create_scrollbar(ScrollbarConfig::new().stick_to_end());

    bar.set_scroll_dimensions(100, 1000);

    assert_eq!(bar.current_scroll(), 900);
}

#[test]
fn test_stick_to_end_ignored_when_not_at_end() {
    let bar = create_scrollbar(ScrollbarConfig::new().stick_to_end());
    bar.set_scroll_dimensions(100, 1000);
    bar.set_scroll(500);

    bar.set_scroll_dimensions(100, 2000);

    assert_eq!(bar.current_scroll(), 500);
}

#[test]
fn test_without_stick_to_end_position_is_kept() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);
    bar.scroll_to_end();

    bar.set_scroll_dimensions(100, 2000);

    assert_eq!(bar.current_scroll(), 900);
}

#[test]
fn test_stick_to_end_can_be_toggled() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_stick_to_end(true);
    bar.set_scroll_dimensions(100, 1000);
    bar.scroll_to_end();

    bar.set_scroll_dimensions(100, 1500);

    assert!(bar.state().stick_to_end);
    assert_eq!(bar.current_scroll(), 1400);
}

#[test]
fn test_shrinking_content_reclamps_and_notifies() {
    let bar = create_scrollbar(ScrollbarConfig::default());
    bar.set_scroll_dimensions(100, 1000);
    bar.set_scroll(900);
    let seen = record_scrolls(&bar);

    bar.set_scroll_dimensions(100, 500);

    assert_eq!(bar.current_scroll(), 400);
    assert_eq!(*seen.borrow(), vec![400]);
}
