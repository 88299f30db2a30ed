//! Drag distance to visual offsets.
//!
//! The raw finger travel is halved, damped by the decelerate curve and finally
//! rubber-banded, so the content follows the finger closely at first and
//! stiffens as the pull grows.

use crate::animation::damping_ratio;
use crate::config::PullConfig;

/// Visual offsets for one drag position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offsets {
    /// Footer width; the hint follows it too
    pub offset_x: f32,
    /// Footer top (and bottom) inset
    pub offset_y: f32,
    /// How far the content is pushed left, after rubber-banding
    pub translation: f32,
}

/// Clamp a raw drag distance to `[0, 2 * max_pull_distance]`
pub fn clamp_drag(dx: f32, config: &PullConfig) -> f32 {
    dx.max(0.0).min(config.max_pull_distance * 2.0)
}

/// Map a raw leftward drag distance to offsets.
///
/// `hint_shown` adds the hint strip left over from a previous cycle as a
/// baseline, so a second pull starts from where the first one rested.
pub fn interpolate(
    dx: f32,
    hint_shown: bool,
    container_height: f32,
    config: &PullConfig,
) -> Offsets {
    let damping = config.damping();
    let unit = clamp_drag(dx, config) / 2.0;

    let mut offset_x = damping.evaluate(damping_ratio(unit, config.max_pull_distance)) * unit;
    let offset_y = (damping.evaluate(damping_ratio(unit, container_height)) * unit
        - config.hint_move_max_distance)
        .min(config.footer_max_top_inset)
        .max(0.0);

    if hint_shown {
        offset_x += config.hint_visible_width;
    }

    Offsets {
        offset_x,
        offset_y,
        translation: rubber_band(offset_x, config),
    }
}

/// Overshoot past the soft maximum only counts half
pub fn rubber_band(offset_x: f32, config: &PullConfig) -> f32 {
    let max = config.rubber_band_start();
    if offset_x >= max {
        max + (offset_x - max) * 0.5
    } else {
        offset_x
    }
}
