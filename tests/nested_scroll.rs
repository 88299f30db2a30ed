mod common;

use std::time::Duration;

use common::harness;
use stretch_refresh::prelude::*;

#[test]
fn test_fling_deep_in_list_belongs_to_content() {
    let mut h = harness();
    h.content.first_visible.set(Some(5));

    assert!(h.layout.on_fling(500.0, true));
    assert!(!h.layout.is_settling());
}

#[test]
fn test_backward_fling_is_swallowed_with_hint_shown() {
    let mut h = harness();
    h.layout.on_content_scroll_idle();
    assert!(h.layout.is_hint_shown());

    assert!(h.layout.pre_fling(-300.0));
}

#[test]
fn test_fling_passes_when_content_can_scroll() {
    let mut h = harness();
    h.content.can_scroll.set(true);
    assert!(!h.layout.pre_fling(-300.0));
    assert!(!h.layout.pre_fling(300.0));
}

#[test]
fn test_peek_and_settle_back() {
    let mut h = harness();
    h.layout.on_content_scroll_idle();
    h.run_frames(16, 1000);

    assert!(h.layout.begin_nested_scroll(ScrollAxes::HORIZONTAL));
    assert_eq!(h.layout.pre_scroll(-25.0), -25.0);
    assert_eq!(h.layout.pre_scroll(-25.0), -25.0);
    assert_eq!(h.layout.scroll_offset(), -40.0);
    assert!(h.layout.state().pending_settle());

    h.layout.end_nested_scroll();
    assert!(h.layout.is_settling());

    let mut previous = h.layout.scroll_offset();
    // Settles over the full 600 ms
    for _ in 0..40 {
        h.clock.advance(Duration::from_millis(16));
        h.layout.on_frame();
        let offset = h.layout.scroll_offset();
        assert!((-40.0..=0.0).contains(&offset));
        assert!(offset >= previous);
        previous = offset;
    }
    assert_eq!(h.layout.scroll_offset(), 0.0);
    assert!(!h.layout.is_settling());
    assert!(!h.layout.state().pending_settle());
}

#[test]
fn test_scrollable_content_scrolls_itself() {
    let mut h = harness();
    h.content.can_scroll.set(true);
    h.layout.on_content_scroll_idle();

    assert!(!h.layout.is_hint_shown());
    assert_eq!(h.layout.pre_scroll(-10.0), 0.0);
    assert_eq!(h.layout.pre_scroll(10.0), 0.0);
}

#[test]
fn test_new_settle_replaces_running_one() {
    let mut h = harness();
    h.layout.on_content_scroll_idle();
    h.layout.pre_scroll(-40.0);
    h.layout.end_nested_scroll();

    h.clock.advance(Duration::from_millis(50));
    h.layout.on_frame();
    let midway = h.layout.scroll_offset();
    assert!(midway > -40.0 && midway < 0.0);

    // A consumed fling restarts the settle from where it is
    h.layout.on_fling(0.0, true);
    assert!(h.layout.is_settling());
    assert_eq!(h.layout.scroll_offset(), midway);

    h.run_frames(16, 1000);
    assert_eq!(h.layout.scroll_offset(), 0.0);
}

#[test]
fn test_reset_cancels_settle() {
    let mut h = harness();
    h.layout.on_content_scroll_idle();
    h.layout.pre_scroll(-40.0);
    h.layout.end_nested_scroll();
    h.layout.reset();

    assert!(!h.layout.is_settling());
    assert_eq!(h.layout.scroll_offset(), 0.0);
    assert!(!h.layout.is_hint_shown());
}
