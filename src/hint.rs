//! The "view more" hint next to the footer.

use std::time::Duration;

use crate::animation::{AnimatorListener, Easing, ValueAnimator};
use crate::config::{PullConfig, INDICATOR_ROTATION_DEGREES};

/// Which label the hint is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintLabel {
    /// Below the release threshold
    #[default]
    Idle,
    /// Releasing now would refresh
    Active,
}

/// Arrow next to the hint label that flips when the label does.
///
/// The rotation holds its final angle after finishing, until cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    rotation: ValueAnimator<f32>,
    angle: f32,
    duration: Duration,
}

struct AngleWriter<'a>(&'a mut f32);

impl AnimatorListener<f32> for AngleWriter<'_> {
    fn on_update(&mut self, value: &f32) {
        *self.0 = *value;
    }
}

impl Indicator {
    fn new(duration: Duration) -> Self {
        Self {
            rotation: ValueAnimator::new(0.0, Easing::Linear),
            angle: 0.0,
            duration,
        }
    }

    fn rotate_forward(&mut self, now: Duration) {
        self.rotation.start(
            0.0,
            INDICATOR_ROTATION_DEGREES,
            self.duration,
            now,
            &mut AngleWriter(&mut self.angle),
        );
    }

    fn rotate_back(&mut self, now: Duration) {
        self.rotation.start(
            INDICATOR_ROTATION_DEGREES,
            0.0,
            self.duration,
            now,
            &mut AngleWriter(&mut self.angle),
        );
    }

    /// Stop rotating and drop back to the unrotated angle
    fn clear(&mut self) {
        self.rotation.cancel(&mut AngleWriter(&mut self.angle));
        self.angle = 0.0;
    }

    fn tick(&mut self, now: Duration) -> bool {
        self.rotation.tick(now, &mut AngleWriter(&mut self.angle))
    }

    /// Current rotation in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_running()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HintView {
    label: HintLabel,
    idle_text: String,
    active_text: String,
    move_max: f32,
    translation_x: f32,
    visible: bool,
    indicator: Indicator,
}

impl HintView {
    pub fn new(config: &PullConfig) -> Self {
        Self {
            label: HintLabel::Idle,
            idle_text: config.idle_text.clone(),
            active_text: config.active_text.clone(),
            move_max: config.hint_move_max_distance,
            translation_x: 0.0,
            visible: false,
            indicator: Indicator::new(config.indicator_duration),
        }
    }

    /// Follow a live drag.
    ///
    /// The hint slides with half the footer width and stops once that passes
    /// `hint_move_max_distance`. The label arms as soon as half the raw drag
    /// distance (`progress`) passes the same distance, and disarms when it
    /// drops back below it.
    pub fn follow_drag(&mut self, offset_x: f32, progress: f32, now: Duration) {
        self.visible = true;
        self.slide(offset_x);

        if progress > self.move_max {
            if self.switch_label(HintLabel::Active) {
                self.indicator.rotate_forward(now);
            }
        } else if self.switch_label(HintLabel::Idle) {
            self.indicator.rotate_back(now);
        }
    }

    /// Follow the spring-back. The hint is hidden and the label is left alone.
    pub fn follow_release(&mut self, offset_x: f32) {
        self.visible = false;
        self.slide(offset_x);
    }

    /// Park next to a footer resting at `offset_x`, showing the idle label
    pub fn rest(&mut self, offset_x: f32, now: Duration) {
        self.visible = false;
        self.slide(offset_x);
        if self.switch_label(HintLabel::Idle) {
            self.indicator.rotate_back(now);
        }
    }

    fn slide(&mut self, offset_x: f32) {
        let dx = offset_x / 2.0;
        if dx <= self.move_max {
            self.translation_x = -dx;
        }
    }

    /// Back to the idle label with the indicator unrotated
    pub fn reset_label(&mut self) {
        self.label = HintLabel::Idle;
        self.indicator.clear();
    }

    pub(crate) fn tick(&mut self, now: Duration) -> bool {
        self.indicator.tick(now)
    }

    fn switch_label(&mut self, label: HintLabel) -> bool {
        if self.label == label {
            return false;
        }
        log::trace!("Hint label {:?} -> {:?}", self.label, label);
        self.label = label;
        true
    }

    pub fn label(&self) -> HintLabel {
        self.label
    }

    /// Text currently shown
    pub fn text(&self) -> &str {
        match self.label {
            HintLabel::Idle => &self.idle_text,
            HintLabel::Active => &self.active_text,
        }
    }

    /// True if releasing now should trigger a refresh
    pub fn is_release_armed(&self) -> bool {
        self.label == HintLabel::Active
    }

    pub fn translation_x(&self) -> f32 {
        self.translation_x
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }
}
