//! Scroll and fling negotiation with the inner content.
//!
//! Once the content has reached its trailing edge, the container itself can
//! scroll by up to `hint_visible_width` to peek at the hint. Whatever the
//! container scrolled is eased back to 0 by the settle animation.

use std::time::Duration;

use crate::animation::{AnimatorListener, Easing, ValueAnimator};
use crate::config::{PullConfig, FLING_INDEX_THRESHOLD};
use crate::content::ScrollAxes;

use super::{ContainerState, PullRefreshLayout};

/// Base duration per container width when settling without a usable velocity
const SETTLE_BASE_MILLIS: f32 = 150.0;

struct SettleTarget<'a> {
    config: &'a PullConfig,
    state: &'a mut ContainerState,
}

impl AnimatorListener<f32> for SettleTarget<'_> {
    fn on_update(&mut self, value: &f32) {
        self.state.scroll_to(*value, self.config);
    }

    fn on_end(&mut self) {
        self.state.pending_settle = false;
    }
}

impl PullRefreshLayout {
    /// Axes the container takes part in
    pub fn nested_scroll_axes(&self) -> ScrollAxes {
        ScrollAxes::HORIZONTAL
    }

    /// A nested scroll sequence starts. Returns true if the container joins it.
    pub fn begin_nested_scroll(&mut self, axes: ScrollAxes) -> bool {
        axes.contains(ScrollAxes::HORIZONTAL)
    }

    /// Offer a scroll step before the content handles it. Returns the amount consumed.
    pub fn pre_scroll(&mut self, dx: f32) -> f32 {
        let can_scroll = self.can_scroll_forward();
        let offset = self.state.scroll_offset;

        let hide = dx < 0.0
            && offset > -self.config.hint_visible_width
            && !can_scroll
            && self.footer.width() != 0.0;
        let show = dx > 0.0 && offset < 0.0 && !can_scroll;

        if hide || show {
            self.state.pending_settle = true;
            self.state.scroll_by(dx, &self.config);
            dx
        } else {
            0.0
        }
    }

    /// Offer a fling before the content handles it. Returns true to swallow it.
    pub fn pre_fling(&mut self, velocity: f32) -> bool {
        let swallow = velocity < 0.0
            && self.state.scroll_offset >= -self.config.hint_visible_width
            && !self.can_scroll_forward();
        swallow || self.is_settling()
    }

    /// The content finished dispatching a fling. Always reports it as handled.
    pub fn on_fling(&mut self, velocity: f32, consumed: bool) -> bool {
        let mut consumed = consumed;
        if velocity > 0.0 {
            if let Some(index) = self.content.as_ref().and_then(|c| c.first_visible_index()) {
                if index > FLING_INDEX_THRESHOLD {
                    return true;
                }
            }
            consumed = false;
        }

        let duration = self.settle_duration(velocity);
        self.animate_scroll(velocity, duration, consumed);
        true
    }

    /// The nested scroll sequence ended
    pub fn end_nested_scroll(&mut self) {
        if self.state.pending_settle {
            self.animate_scroll(0.0, self.config.settle_duration, false);
        }
    }

    /// The content stopped scrolling on its own. If it sits at its trailing
    /// edge, the hint strip is revealed and stays shown.
    pub fn on_content_scroll_idle(&mut self) {
        if self.content.is_none() || self.can_scroll_forward() {
            return;
        }
        let visible = self.config.hint_visible_width;
        let now = self.now();

        self.state.is_hint_shown = true;
        self.state.content_translation = -visible;
        self.footer.set_width(visible);
        self.hint.rest(visible, now);

        self.animate_scroll(0.0, self.config.settle_duration, false);
        self.state.pending_settle = false;
    }

    /// Settle duration for the current offset at `velocity`
    fn settle_duration(&self, velocity: f32) -> Duration {
        let distance = self.state.scroll_offset.abs();
        let millis = if velocity != 0.0 {
            3.0 * (1000.0 * distance / velocity.abs()).round()
        } else {
            let ratio = if self.width > 0.0 {
                distance / self.width
            } else {
                0.0
            };
            (ratio + 1.0) * SETTLE_BASE_MILLIS
        };
        Duration::from_millis(millis.max(0.0).round() as u64)
    }

    fn animate_scroll(&mut self, velocity: f32, duration: Duration, consumed: bool) {
        if self.can_scroll_forward() {
            return;
        }
        if velocity >= 0.0 || !consumed {
            let duration = duration.min(self.config.settle_duration);
            self.start_settle(duration);
        }
    }

    /// Ease the container scroll back to 0, replacing a running settle
    fn start_settle(&mut self, duration: Duration) {
        let now = self.now();
        let from = self.state.scroll_offset;
        log::debug!("Settling scroll from {} over {:?}", from, duration);

        let animator = self
            .settle_animator
            .get_or_insert_with(|| ValueAnimator::new(0.0, Easing::default()));
        let mut target = SettleTarget {
            config: &self.config,
            state: &mut self.state,
        };
        animator.start(from, 0.0, duration, now, &mut target);
    }

    pub(super) fn tick_settle(&mut self, now: Duration) -> bool {
        let Some(animator) = self.settle_animator.as_mut() else {
            return false;
        };
        let mut target = SettleTarget {
            config: &self.config,
            state: &mut self.state,
        };
        animator.tick(now, &mut target)
    }
}
