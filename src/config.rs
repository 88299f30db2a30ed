//! Configuration for the pull interaction.
//!
//! A [`PullConfig`] is read once when a [`PullRefreshLayout`] is created and is
//! immutable afterwards. Distances are in logical pixels.
//!
//! [`PullRefreshLayout`]: crate::PullRefreshLayout

use std::time::Duration;

use crate::animation::{Easing, DEFAULT_DECELERATE_FACTOR};
use crate::error::{ConfigError, Result};
use crate::style::Color;

/// Drag distance past which interception starts
pub const TOUCH_SLOP: f32 = 10.0;

/// Fling that starts past this item index belongs to the inner content
pub const FLING_INDEX_THRESHOLD: usize = 3;

/// Rotation applied to the hint indicator when the label flips
pub const INDICATOR_ROTATION_DEGREES: f32 = 180.0;

/// Configuration for the pull-to-refresh layout
#[derive(Debug, Clone, PartialEq)]
pub struct PullConfig {
    /// Nominal maximum pull; raw drag is capped at twice this
    pub max_pull_distance: f32,
    /// Footer width at which it stops being a plain rectangle
    pub footer_min_width: f32,
    /// How far the footer may stretch past `footer_min_width`
    pub footer_max_stretch: f32,
    /// Hint travel before the label switches to the release text
    pub hint_move_max_distance: f32,
    /// Maximum top/bottom inset of the footer while dragging
    pub footer_max_top_inset: f32,
    /// Width of the hint strip left visible after a completed cycle
    pub hint_visible_width: f32,
    /// Background color of the footer
    pub footer_color: Color,
    /// Corner radius of the idle footer
    pub footer_corner_radius: f32,
    /// Margin above and below the footer
    pub footer_vertical_margin: f32,
    /// Color of the hint label
    pub hint_text_color: Color,
    /// Font size of the hint label
    pub hint_text_size: f32,
    /// Distance between the hint and the trailing edge
    pub hint_margin: f32,
    /// Label shown while below the release threshold
    pub idle_text: String,
    /// Label shown once releasing would refresh
    pub active_text: String,
    /// Steepness of the drag damping curve
    pub decelerate_factor: f32,
    /// Spring-back duration after a drag
    pub back_duration: Duration,
    /// Upper bound for the scroll settle animation
    pub settle_duration: Duration,
    /// Duration of the footer's teardrop collapse
    pub shape_duration: Duration,
    /// Duration of the indicator flip
    pub indicator_duration: Duration,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            max_pull_distance: 100.0,
            footer_min_width: 50.0,
            footer_max_stretch: 80.0,
            hint_move_max_distance: 50.0,
            footer_max_top_inset: 30.0,
            hint_visible_width: 40.0,
            footer_color: Color::GRAY,
            footer_corner_radius: 20.0,
            footer_vertical_margin: 10.0,
            hint_text_color: Color::BLACK,
            hint_text_size: 15.0,
            hint_margin: 10.0,
            idle_text: "View more".to_string(),
            active_text: "Release to view".to_string(),
            decelerate_factor: DEFAULT_DECELERATE_FACTOR,
            back_duration: Duration::from_millis(500),
            settle_duration: Duration::from_millis(600),
            shape_duration: Duration::from_millis(350),
            indicator_duration: Duration::from_millis(200),
        }
    }
}

impl PullConfig {
    /// Damping curve used for drag and spring-back offsets
    pub fn damping(&self) -> Easing {
        Easing::Decelerate(self.decelerate_factor)
    }

    /// Soft maximum of the content translation; overshoot past it counts half
    pub fn rubber_band_start(&self) -> f32 {
        self.max_pull_distance * 0.8 + self.hint_visible_width
    }

    /// Widest the footer is ever laid out
    pub fn footer_max_width(&self) -> f32 {
        self.footer_min_width + self.footer_max_stretch
    }

    /// Clamp a requested container scroll offset to `[-hint_visible_width, 0]`
    pub fn clamp_scroll(&self, offset: f32) -> f32 {
        offset.clamp(-self.hint_visible_width, 0.0)
    }

    /// Check that every dimension is usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_pull_distance", self.max_pull_distance),
            ("footer_min_width", self.footer_min_width),
            ("decelerate_factor", self.decelerate_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        for (name, value) in [
            ("footer_max_stretch", self.footer_max_stretch),
            ("hint_move_max_distance", self.hint_move_max_distance),
            ("footer_max_top_inset", self.footer_max_top_inset),
            ("hint_visible_width", self.hint_visible_width),
            ("footer_corner_radius", self.footer_corner_radius),
            ("footer_vertical_margin", self.footer_vertical_margin),
            ("hint_text_size", self.hint_text_size),
            ("hint_margin", self.hint_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        Ok(())
    }
}

/// Builder for customizing the pull interaction
#[derive(Default)]
pub struct PullConfigBuilder {
    config: PullConfig,
}

impl PullConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nominal maximum pull distance
    pub fn max_pull_distance(mut self, distance: f32) -> Self {
        self.config.max_pull_distance = distance;
        self
    }

    /// Set the footer width at which the curved shape kicks in
    pub fn footer_min_width(mut self, width: f32) -> Self {
        self.config.footer_min_width = width;
        self
    }

    /// Set how far the footer may stretch past its minimum width
    pub fn footer_max_stretch(mut self, stretch: f32) -> Self {
        self.config.footer_max_stretch = stretch;
        self
    }

    /// Set the hint travel before the label flips to the release text
    pub fn hint_move_max_distance(mut self, distance: f32) -> Self {
        self.config.hint_move_max_distance = distance;
        self
    }

    /// Set the maximum footer top inset while dragging
    pub fn footer_max_top_inset(mut self, inset: f32) -> Self {
        self.config.footer_max_top_inset = inset;
        self
    }

    /// Set the width of the hint strip left visible after a cycle
    pub fn hint_visible_width(mut self, width: f32) -> Self {
        self.config.hint_visible_width = width;
        self
    }

    pub fn footer_color(mut self, color: Color) -> Self {
        self.config.footer_color = color;
        self
    }

    pub fn footer_corner_radius(mut self, radius: f32) -> Self {
        self.config.footer_corner_radius = radius;
        self
    }

    pub fn footer_vertical_margin(mut self, margin: f32) -> Self {
        self.config.footer_vertical_margin = margin;
        self
    }

    pub fn hint_text_color(mut self, color: Color) -> Self {
        self.config.hint_text_color = color;
        self
    }

    pub fn hint_text_size(mut self, size: f32) -> Self {
        self.config.hint_text_size = size;
        self
    }

    pub fn hint_margin(mut self, margin: f32) -> Self {
        self.config.hint_margin = margin;
        self
    }

    /// Set the idle and release labels
    pub fn labels(mut self, idle: impl Into<String>, active: impl Into<String>) -> Self {
        self.config.idle_text = idle.into();
        self.config.active_text = active.into();
        self
    }

    /// Set the steepness of the damping curve
    pub fn decelerate_factor(mut self, factor: f32) -> Self {
        self.config.decelerate_factor = factor;
        self
    }

    pub fn back_duration(mut self, duration: Duration) -> Self {
        self.config.back_duration = duration;
        self
    }

    pub fn settle_duration(mut self, duration: Duration) -> Self {
        self.config.settle_duration = duration;
        self
    }

    pub fn shape_duration(mut self, duration: Duration) -> Self {
        self.config.shape_duration = duration;
        self
    }

    pub fn indicator_duration(mut self, duration: Duration) -> Self {
        self.config.indicator_duration = duration;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<PullConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(PullConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_builder_overrides() {
        let config = PullConfigBuilder::new()
            .max_pull_distance(120.0)
            .hint_visible_width(30.0)
            .labels("more", "release")
            .build()
            .unwrap();

        assert_eq!(config.max_pull_distance, 120.0);
        assert_eq!(config.idle_text, "more");
        assert_eq!(config.active_text, "release");
        assert_eq!(config.rubber_band_start(), 126.0);
    }

    #[test]
    fn test_builder_rejects_zero_pull_distance() {
        let err = PullConfigBuilder::new().max_pull_distance(0.0).build();
        assert_eq!(
            err,
            Err(ConfigError::InvalidDimension {
                name: "max_pull_distance",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_builder_rejects_negative_margin() {
        let err = PullConfigBuilder::new().footer_vertical_margin(-1.0).build();
        assert!(matches!(
            err,
            Err(ConfigError::InvalidDimension {
                name: "footer_vertical_margin",
                ..
            })
        ));
    }

    #[test]
    fn test_clamp_scroll() {
        let config = PullConfig::default();
        assert_eq!(config.clamp_scroll(25.0), 0.0);
        assert_eq!(config.clamp_scroll(-25.0), -25.0);
        assert_eq!(config.clamp_scroll(-400.0), -40.0);
    }

    #[test]
    fn test_footer_max_width() {
        assert_eq!(PullConfig::default().footer_max_width(), 130.0);
    }
}
