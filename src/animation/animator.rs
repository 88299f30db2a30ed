use std::time::Duration;

use super::{Animatable, Easing};

/// Hooks invoked by a [`ValueAnimator`] as it runs.
///
/// The listener is passed in on every call rather than stored, so the code
/// reacting to an animation can borrow the state it writes to for just that
/// call.
pub trait AnimatorListener<T> {
    /// Called once when the animation starts, before the first update
    fn on_start(&mut self) {}
    /// Called with every newly interpolated value
    fn on_update(&mut self, value: &T);
    /// Called once when the animation reaches its target
    fn on_end(&mut self) {}
    /// Called when a running animation is cancelled or replaced
    fn on_cancel(&mut self) {}
}

/// Time-based animation between two values over a fixed duration
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAnimator<T: Animatable> {
    /// Value when animation started
    start: T,
    /// Value the animation ends on
    target: T,
    /// Last interpolated value
    current: T,
    duration: Duration,
    easing: Easing,
    /// Clock time when the animation started
    start_time: Duration,
    running: bool,
}

impl<T: Animatable> ValueAnimator<T> {
    pub fn new(initial_value: T, easing: Easing) -> Self {
        Self {
            start: initial_value.clone(),
            target: initial_value.clone(),
            current: initial_value,
            duration: Duration::ZERO,
            easing,
            start_time: Duration::ZERO,
            running: false,
        }
    }

    /// Start animating from `from` to `to`.
    ///
    /// A running animation is cancelled first. `on_start` fires, then the
    /// first update with `from`. A zero duration finishes immediately.
    pub fn start(
        &mut self,
        from: T,
        to: T,
        duration: Duration,
        now: Duration,
        listener: &mut impl AnimatorListener<T>,
    ) {
        self.cancel(listener);

        self.start = from.clone();
        self.target = to;
        self.current = from;
        self.duration = duration;
        self.start_time = now;
        self.running = true;

        listener.on_start();
        listener.on_update(&self.current);

        if duration.is_zero() {
            self.tick(now, listener);
        }
    }

    /// Advance to `now`. Returns true while the animation is still running.
    pub fn tick(&mut self, now: Duration, listener: &mut impl AnimatorListener<T>) -> bool {
        if !self.running {
            return false;
        }

        let fraction = self.fraction(now);
        self.current = if fraction >= 1.0 {
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, self.easing.evaluate(fraction))
        };
        listener.on_update(&self.current);

        if fraction >= 1.0 {
            self.running = false;
            listener.on_end();
        }
        self.running
    }

    /// Stop a running animation where it is
    pub fn cancel(&mut self, listener: &mut impl AnimatorListener<T>) {
        if self.running {
            self.running = false;
            listener.on_cancel();
        }
    }

    /// Elapsed fraction of the duration at `now`, clamped to `0.0..=1.0`
    pub fn fraction(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Check if animation is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
