//! Easing curves for the pull interaction.
//!
//! Easing functions control the rate of change during an animation. The pull
//! gesture uses them in two different ways:
//!
//! - as a *time* curve for [`ValueAnimator`](super::ValueAnimator), mapping an
//!   elapsed fraction to an interpolation fraction
//! - as a *damping* curve applied to a distance ratio, so that a drag feels
//!   progressively heavier as it approaches its maximum
//!
//! ## Built-in Easing Functions
//!
//! - [`Easing::Linear`] - Constant speed (no easing)
//! - [`Easing::Decelerate`] - Starts fast, ends slow, steepness set by a factor
//! - [`Easing::AccelerateDecelerate`] - Slow start and end, fast middle

use std::f32::consts::PI;

/// Factor used for the drag damping curve.
pub const DEFAULT_DECELERATE_FACTOR: f32 = 10.0;

/// Easing curve applied to a fraction in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (constant speed)
    Linear,
    /// `1 - (1 - t)^(2 * factor)`; larger factors flatten out sooner
    Decelerate(f32),
    /// Cosine curve, slow at both ends
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Evaluate the curve at `t`. Inputs outside `0.0..=1.0` are clamped, NaN maps to 0.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::Decelerate(factor) => decelerate(t, *factor),
            Easing::AccelerateDecelerate => accelerate_decelerate(t),
        }
    }
}

/// Ratio `num / den` for damping inputs. A non-positive denominator saturates.
pub(crate) fn damping_ratio(num: f32, den: f32) -> f32 {
    if den <= 0.0 {
        1.0
    } else {
        num / den
    }
}

fn decelerate(t: f32, factor: f32) -> f32 {
    if factor == 1.0 {
        1.0 - (1.0 - t) * (1.0 - t)
    } else {
        1.0 - (1.0 - t).powf(2.0 * factor)
    }
}

fn accelerate_decelerate(t: f32) -> f32 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}
