//! Spring-back after the finger lifts.
//!
//! The animated value is the remaining pull magnitude. While it is above
//! `footer_min_width` the footer simply shrinks with it; below that the footer
//! and content ease onto the hint strip, which stays visible.

use std::time::Duration;

use crate::animation::{damping_ratio, AnimatorListener};
use crate::config::PullConfig;
use crate::footer::FooterView;
use crate::hint::HintView;

use super::{ContainerState, PullRefreshLayout, RefreshCallback};

/// Everything the spring-back writes, borrowed for one animator call
struct ReleaseTarget<'a> {
    config: &'a PullConfig,
    height: f32,
    state: &'a mut ContainerState,
    footer: &'a mut FooterView,
    hint: &'a mut HintView,
    anim_start_top: &'a mut f32,
    on_refresh: &'a mut Option<RefreshCallback>,
}

impl AnimatorListener<f32> for ReleaseTarget<'_> {
    fn on_start(&mut self) {
        *self.anim_start_top = self.footer.top();
        if self.state.is_refreshing {
            log::debug!("Refresh cycle started");
            if let Some(callback) = self.on_refresh.as_mut() {
                callback();
            }
        }
    }

    fn on_update(&mut self, value: &f32) {
        let v = *value;
        let damping = self.config.damping();
        let offset_y = damping.evaluate(damping_ratio(v, self.height)) * v;

        let offset_x = if v <= self.config.footer_min_width {
            let offset_x = (damping.evaluate(damping_ratio(v, self.config.footer_min_width)) * v)
                .max(self.config.hint_visible_width);
            self.footer.set_width(offset_x);
            self.footer
                .set_top(offset_y.min(self.config.footer_max_top_inset));
            offset_x
        } else {
            self.footer.set_top(offset_y.min(*self.anim_start_top));
            self.footer.set_width(v);
            v
        };

        self.state.content_translation = -offset_x;
        self.hint.follow_release(offset_x);
    }

    fn on_end(&mut self) {
        self.hint.reset_label();
        if self.state.is_refreshing {
            log::debug!("Refresh cycle finished");
        }
        self.state.is_refreshing = false;
    }
}

impl PullRefreshLayout {
    /// Spring back from a pull of `magnitude`, replacing any running spring-back
    pub(super) fn start_release(&mut self, magnitude: f32, now: Duration) {
        let mut target = ReleaseTarget {
            config: &self.config,
            height: self.height,
            state: &mut self.state,
            footer: &mut self.footer,
            hint: &mut self.hint,
            anim_start_top: &mut self.anim_start_top,
            on_refresh: &mut self.on_refresh,
        };
        self.back_animator
            .start(magnitude, 0.0, self.config.back_duration, now, &mut target);
    }

    pub(super) fn tick_release(&mut self, now: Duration) -> bool {
        let mut target = ReleaseTarget {
            config: &self.config,
            height: self.height,
            state: &mut self.state,
            footer: &mut self.footer,
            hint: &mut self.hint,
            anim_start_top: &mut self.anim_start_top,
            on_refresh: &mut self.on_refresh,
        };
        self.back_animator.tick(now, &mut target)
    }
}
