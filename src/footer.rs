//! The elastic footer revealed behind the content.
//!
//! The footer is a plain rounded rectangle while it is narrow. Once a layout
//! pass sees it at least `footer_min_width` wide it switches to a stretched
//! outline whose leading side is a quadratic curve pulled toward the leading
//! edge. On release the curve relaxes over `shape_duration`, which reads as a
//! teardrop snapping back.

use std::time::Duration;

use kurbo::{BezPath, RoundedRect};

use crate::config::PullConfig;

/// Visual state of the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterStatus {
    /// Narrower than the minimum width
    #[default]
    PullLeft,
    /// Being stretched by the finger
    DragLeft,
    /// Springing back after the finger lifted
    Release,
}

/// Geometry to fill for the footer, in footer-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum FooterShape {
    /// Flat rounded rectangle (the trailing corners overflow the bounds)
    Idle(RoundedRect),
    /// Rectangle plus a bulge toward the leading edge
    Stretched(BezPath),
    /// Bulge relaxing after release
    Springing(BezPath),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    status: FooterStatus,
    width: f32,
    height: f32,
    top: f32,
    min_width: f32,
    max_width: f32,
    corner_radius: f32,
    shape_duration: Duration,
    release_start: Duration,
    release_end: Duration,
    /// Width the curve travels while relaxing
    release_travel: f32,
    release_done: bool,
}

impl FooterView {
    pub fn new(config: &PullConfig) -> Self {
        Self {
            status: FooterStatus::PullLeft,
            width: 0.0,
            height: 0.0,
            top: 0.0,
            min_width: config.footer_min_width,
            max_width: config.footer_max_width(),
            corner_radius: config.footer_corner_radius,
            shape_duration: config.shape_duration,
            release_start: Duration::ZERO,
            release_end: Duration::ZERO,
            release_travel: 0.0,
            release_done: false,
        }
    }

    /// Apply a layout pass. The width is capped at the maximum stretch.
    pub fn layout(&mut self, width: f32, height: f32) {
        let width = width.max(0.0).min(self.max_width);
        let height = height.max(0.0);
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;

        let previous = self.status;
        if self.width < self.min_width {
            self.status = FooterStatus::PullLeft;
        }
        if self.status == FooterStatus::PullLeft && self.width >= self.min_width {
            self.status = FooterStatus::DragLeft;
        }
        if previous != self.status {
            log::debug!(
                "Footer {:?} -> {:?} at width {}",
                previous,
                self.status,
                self.width
            );
        }
    }

    /// Resize horizontally, keeping the current height
    pub fn set_width(&mut self, width: f32) {
        self.layout(width, self.height);
    }

    pub fn set_top(&mut self, top: f32) {
        self.top = top;
    }

    /// Let go of the footer and start relaxing the curve
    pub fn release(&mut self, now: Duration) {
        self.status = FooterStatus::Release;
        self.release_start = now;
        self.release_end = now + self.shape_duration;
        self.release_travel = self.width - self.min_width;
        self.release_done = false;
        log::debug!("Footer released, curve travels {}", self.release_travel);
    }

    /// Progress of the release curve: 0 at release, 1 once `shape_duration` has passed
    pub fn release_ratio(&self, now: Duration) -> f32 {
        if now >= self.release_end || self.shape_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.release_start);
        (elapsed.as_secs_f32() / self.shape_duration.as_secs_f32()).min(1.0)
    }

    /// Latch release completion at `now`
    pub fn advance(&mut self, now: Duration) {
        if self.status == FooterStatus::Release && self.release_ratio(now) >= 1.0 {
            self.release_done = true;
        }
    }

    pub fn is_release_done(&self, now: Duration) -> bool {
        self.status == FooterStatus::Release
            && (self.release_done || self.release_ratio(now) >= 1.0)
    }

    /// Whether the host must keep repainting the footer every frame
    pub fn needs_redraw(&self, now: Duration) -> bool {
        match self.status {
            FooterStatus::PullLeft => false,
            FooterStatus::DragLeft => true,
            FooterStatus::Release => !(self.is_release_done(now) && self.width <= self.min_width),
        }
    }

    /// Outline to paint at `now`
    pub fn shape(&self, now: Duration) -> FooterShape {
        match self.status {
            FooterStatus::PullLeft => FooterShape::Idle(self.idle_rect()),
            FooterStatus::DragLeft => FooterShape::Stretched(self.outline(0.0)),
            FooterStatus::Release => {
                if self.is_release_done(now) && self.width <= self.min_width {
                    FooterShape::Idle(self.idle_rect())
                } else {
                    let control_x = self.release_travel * self.release_ratio(now);
                    FooterShape::Springing(self.outline(control_x))
                }
            }
        }
    }

    fn idle_rect(&self) -> RoundedRect {
        let radius = f64::from(self.corner_radius);
        RoundedRect::new(
            0.0,
            0.0,
            f64::from(self.width) + radius,
            f64::from(self.height),
            radius,
        )
    }

    /// Straight trailing body with a quadratic leading side bent toward `control_x`
    fn outline(&self, control_x: f32) -> BezPath {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let top = f64::from(self.top);
        let edge = f64::from(self.width - self.min_width);

        let mut path = BezPath::new();
        path.move_to((width, top));
        path.line_to((edge, top));
        path.quad_to((f64::from(control_x), height / 2.0), (edge, height - top));
        path.line_to((width, height - top));
        path.close_path();
        path
    }

    pub fn status(&self) -> FooterStatus {
        self.status
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn release_travel(&self) -> f32 {
        self.release_travel
    }
}
