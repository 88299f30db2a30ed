mod common;

use std::time::Duration;

use common::{harness, Harness};
use stretch_refresh::offset::interpolate;
use stretch_refresh::prelude::*;

fn pull_and_release(h: &mut Harness, distance: f32) {
    h.drag(20.0);
    h.move_to(distance);
    h.release();
}

#[test]
fn test_release_past_threshold_refreshes_once() {
    let mut h = harness();
    h.drag(20.0);
    h.move_to(200.0);

    // The label reads the release text right before letting go
    assert!(h.layout.hint().is_release_armed());
    assert_eq!(h.layout.hint().text(), "Release to view");

    assert_eq!(h.release(), EventResponse::Handled);
    assert!(h.layout.is_refreshing());
    assert!(h.layout.is_hint_shown());
    assert_eq!(h.refreshes.get(), 1);
    assert_eq!(h.layout.footer().status(), FooterStatus::Release);

    h.run_frames(16, 2000);
    assert_eq!(h.refreshes.get(), 1);
    assert!(!h.layout.is_refreshing());
    assert_eq!(h.layout.hint().label(), HintLabel::Idle);
    assert_eq!(h.layout.hint().indicator().angle(), 0.0);
}

#[test]
fn test_events_pass_through_while_refreshing() {
    let mut h = harness();
    pull_and_release(&mut h, 200.0);
    assert!(h.layout.is_refreshing());

    assert_eq!(h.drag(150.0), EventResponse::Ignored);
    assert_eq!(h.release(), EventResponse::Ignored);
    assert_eq!(h.refreshes.get(), 1);
}

#[test]
fn test_release_below_threshold_does_not_refresh() {
    let mut h = harness();
    pull_and_release(&mut h, 80.0);

    assert!(!h.layout.is_refreshing());
    assert_eq!(h.refreshes.get(), 0);
    h.run_frames(16, 2000);
    assert_eq!(h.refreshes.get(), 0);
    assert!(!h.layout.is_hint_shown());
}

#[test]
fn test_spring_back_rests_on_hint_strip() {
    let mut h = harness();
    pull_and_release(&mut h, 200.0);
    h.run_frames(16, 2000);

    let visible = h.layout.config().hint_visible_width;
    assert!(!h.layout.is_releasing());
    assert_eq!(h.layout.content_translation(), -visible);
    assert_eq!(h.layout.footer().width(), visible);
    assert!(!h.layout.needs_frame());
    assert!(matches!(h.layout.footer_shape(), FooterShape::Idle(_)));
}

#[test]
fn test_teardrop_relaxes_during_release() {
    let mut h = harness();
    pull_and_release(&mut h, 200.0);
    assert!(matches!(h.layout.footer_shape(), FooterShape::Springing(_)));

    // Still wider than the minimum, so the curve keeps relaxing
    h.clock.advance(Duration::from_millis(100));
    assert!(h.layout.on_frame());
    assert_eq!(h.layout.footer().status(), FooterStatus::Release);
    assert!(h.layout.footer().width() > h.layout.config().footer_min_width);
    assert!(matches!(h.layout.footer_shape(), FooterShape::Springing(_)));

    h.run_frames(16, 2000);
    assert!(matches!(h.layout.footer_shape(), FooterShape::Idle(_)));
}

#[test]
fn test_second_pull_starts_from_hint_strip() {
    let mut h = harness();
    pull_and_release(&mut h, 200.0);
    h.run_frames(16, 2000);
    assert!(h.layout.is_hint_shown());

    h.drag(20.0);
    let expected = interpolate(20.0, true, 300.0, h.layout.config());
    assert_eq!(h.layout.content_translation(), -expected.translation);
    assert!(expected.offset_x > h.layout.config().hint_visible_width);
}

#[test]
fn test_drag_states_are_edge_triggered() {
    let mut h = harness();
    h.drag(20.0);
    h.move_to(60.0);
    h.move_to(90.0);
    h.release();
    h.run_frames(16, 2000);
    h.drag(30.0);
    h.release();

    assert_eq!(*h.drag_states.borrow(), vec![true, false, true, false]);
}

#[test]
fn test_scrollable_content_is_never_intercepted() {
    let mut h = harness();
    h.content.can_scroll.set(true);

    assert_eq!(h.drag(200.0), EventResponse::Ignored);
    assert_eq!(h.release(), EventResponse::Ignored);
    assert_eq!(h.layout.content_translation(), 0.0);
    assert!(h.drag_states.borrow().is_empty());
}

#[test]
fn test_cancel_behaves_like_up() {
    let mut h = harness();
    h.drag(200.0);
    let response = h.layout.handle_event(PointerEvent::Cancel);

    assert_eq!(response, EventResponse::Handled);
    assert_eq!(h.refreshes.get(), 1);
}

#[test]
fn test_reset_is_idempotent() {
    let mut h = harness();
    pull_and_release(&mut h, 200.0);
    h.clock.advance(Duration::from_millis(100));
    h.layout.on_frame();

    h.layout.reset();
    let first = format!("{:?}", h.layout);
    let state = h.layout.state().clone();
    h.layout.reset();

    assert_eq!(format!("{:?}", h.layout), first);
    assert_eq!(h.layout.state(), &state);
    assert_eq!(h.layout.content_translation(), 0.0);
    assert_eq!(h.layout.scroll_offset(), 0.0);
    assert!(!h.layout.is_refreshing());
    assert!(!h.layout.is_releasing());
    assert_eq!(h.layout.footer().width(), 0.0);
    assert_eq!(h.layout.footer().height(), 280.0);
}

#[test]
fn test_reset_drops_running_release_without_refreshing_again() {
    let mut h = harness();
    pull_and_release(&mut h, 200.0);
    h.layout.reset();
    h.run_frames(16, 1000);

    assert_eq!(h.refreshes.get(), 1);
    assert_eq!(h.layout.content_translation(), 0.0);

    // A fresh cycle works after a reset
    pull_and_release(&mut h, 200.0);
    assert_eq!(h.refreshes.get(), 2);
}

#[test]
fn test_second_attach_keeps_first_content() {
    let mut h = harness();
    let other = common::FakeContent::default();
    other.can_scroll.set(true);

    assert_eq!(
        h.layout.attach_content(other),
        Err(ConfigError::ContentAlreadyAttached)
    );
    // Still driven by the first content, which cannot scroll
    assert_eq!(h.drag(100.0), EventResponse::Handled);
}
