use std::time::Duration;

use crate::config::TOUCH_SLOP;
use crate::event::{EventResponse, PointerEvent};
use crate::offset::{clamp_drag, interpolate};

use super::PullRefreshLayout;

/// Finger positions for one touch sequence, from down to up
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    pub start_x: f32,
    pub last_x: f32,
    pub current_x: f32,
    pub is_intercepting: bool,
}

impl DragSession {
    fn new(x: f32) -> Self {
        Self {
            start_x: x,
            last_x: x,
            current_x: x,
            is_intercepting: false,
        }
    }

    fn move_to(&mut self, x: f32) {
        self.last_x = self.current_x;
        self.current_x = x;
    }

    /// Leftward travel since touch down
    pub fn distance(&self) -> f32 {
        self.start_x - self.current_x
    }
}

impl PullRefreshLayout {
    /// Feed one pointer event. `Handled` means the pull gesture consumed it
    /// and the inner content must not see it.
    pub fn handle_event(&mut self, event: PointerEvent) -> EventResponse {
        if self.state.is_refreshing {
            return EventResponse::Ignored;
        }

        match event {
            PointerEvent::Down { x, .. } => {
                self.session = Some(DragSession::new(x));
                self.set_dragging(false);
                EventResponse::Ignored
            }
            PointerEvent::Move { x, .. } => self.handle_move(x),
            PointerEvent::Up { .. } | PointerEvent::Cancel => self.handle_up(),
        }
    }

    fn handle_move(&mut self, x: f32) -> EventResponse {
        let can_scroll = self.can_scroll_forward();
        let scroll_offset = self.state.scroll_offset;
        let Some(session) = self.session.as_mut() else {
            return EventResponse::Ignored;
        };
        session.move_to(x);

        if !session.is_intercepting {
            if session.distance() > TOUCH_SLOP && !can_scroll && scroll_offset >= 0.0 {
                session.is_intercepting = true;
                log::debug!("Intercepting pull at distance {}", session.distance());
            } else {
                return EventResponse::Ignored;
            }
        }

        let distance = session.distance();
        self.set_dragging(true);
        self.apply_drag(distance, self.now());
        EventResponse::Handled
    }

    /// Push the content and stretch the footer for a raw drag distance
    fn apply_drag(&mut self, distance: f32, now: Duration) {
        if self.content.is_none() {
            return;
        }

        let offsets = interpolate(
            distance,
            self.state.is_hint_shown,
            self.height,
            &self.config,
        );
        log::trace!("Drag {} -> {:?}", distance, offsets);

        self.state.content_translation = -offsets.translation;
        self.footer.set_width(offsets.offset_x);
        self.footer.set_top(offsets.offset_y);
        self.hint
            .follow_drag(offsets.offset_x, clamp_drag(distance, &self.config) / 2.0, now);
    }

    fn handle_up(&mut self) -> EventResponse {
        let Some(session) = self.session.take() else {
            return EventResponse::Ignored;
        };
        if !session.is_intercepting {
            return EventResponse::Ignored;
        }
        self.set_dragging(false);

        if self.content.is_none() {
            return EventResponse::Handled;
        }
        let translation = self.state.content_translation;
        if translation >= 0.0 {
            return EventResponse::Ignored;
        }

        if self.hint.is_release_armed() {
            self.state.is_hint_shown = true;
            self.state.is_refreshing = true;
        }

        let now = self.now();
        let magnitude = translation.abs();
        if magnitude >= self.config.footer_min_width {
            self.footer.release(now);
        }
        self.start_release(magnitude, now);
        EventResponse::Handled
    }
}
