//! The pull-to-refresh layout.
//!
//! [`PullRefreshLayout`] wraps exactly one scrollable content element and adds
//! the elastic footer and hint behind its trailing edge. It owns no platform
//! objects: the host forwards pointer events, nested scroll callbacks, layout
//! sizes and frame ticks, and reads back translations and shapes to draw.
//!
//! The pieces are split by concern:
//!
//! - `drag` - pointer interception and live offsets
//! - `release` - spring-back after the finger lifts
//! - `nested` - scroll/fling negotiation with the content and the settle animation

mod drag;
mod nested;
mod release;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::{Easing, FrameClock, SystemClock, ValueAnimator};
use crate::config::PullConfig;
use crate::content::ScrollableContent;
use crate::error::{ConfigError, Result};
use crate::footer::{FooterShape, FooterView};
use crate::hint::HintView;

pub use drag::DragSession;

/// Called once per refresh cycle, when the spring-back starts
pub type RefreshCallback = Box<dyn FnMut()>;

/// Called with the new drag state whenever it flips
pub type ScrollCallback = Box<dyn FnMut(bool)>;

/// State of the container itself, reinitialized by [`PullRefreshLayout::reset`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContainerState {
    /// Own horizontal scroll, always within `[-hint_visible_width, 0]`
    scroll_offset: f32,
    /// Horizontal translation applied to the content (zero or negative)
    content_translation: f32,
    is_refreshing: bool,
    /// The hint strip stays revealed between pulls
    is_hint_shown: bool,
    /// A nested scroll moved the container and it has not settled yet
    pending_settle: bool,
}

impl ContainerState {
    /// Scroll to `offset`, clamped into the visible window. Returns true if it moved.
    fn scroll_to(&mut self, offset: f32, config: &PullConfig) -> bool {
        let offset = config.clamp_scroll(offset);
        if offset == self.scroll_offset {
            return false;
        }
        self.scroll_offset = offset;
        true
    }

    fn scroll_by(&mut self, dx: f32, config: &PullConfig) -> bool {
        self.scroll_to(self.scroll_offset + dx, config)
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn content_translation(&self) -> f32 {
        self.content_translation
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    pub fn is_hint_shown(&self) -> bool {
        self.is_hint_shown
    }

    pub fn pending_settle(&self) -> bool {
        self.pending_settle
    }
}

/// Horizontal pull-to-refresh controller around one scrollable content element
pub struct PullRefreshLayout {
    config: PullConfig,
    clock: Rc<dyn FrameClock>,
    content: Option<Box<dyn ScrollableContent>>,
    width: f32,
    height: f32,
    state: ContainerState,
    session: Option<DragSession>,
    dragging: bool,
    footer: FooterView,
    hint: HintView,
    back_animator: ValueAnimator<f32>,
    /// Footer top when the spring-back started
    anim_start_top: f32,
    /// Created on first use and reused afterwards
    settle_animator: Option<ValueAnimator<f32>>,
    on_refresh: Option<RefreshCallback>,
    on_scroll: Option<ScrollCallback>,
}

impl PullRefreshLayout {
    /// Create a layout driven by the system clock
    pub fn new(config: PullConfig) -> Self {
        Self::with_clock(config, Rc::new(SystemClock::new()))
    }

    /// Create a layout driven by a custom clock
    pub fn with_clock(config: PullConfig, clock: Rc<dyn FrameClock>) -> Self {
        let footer = FooterView::new(&config);
        let hint = HintView::new(&config);
        Self {
            config,
            clock,
            content: None,
            width: 0.0,
            height: 0.0,
            state: ContainerState::default(),
            session: None,
            dragging: false,
            footer,
            hint,
            back_animator: ValueAnimator::new(0.0, Easing::default()),
            anim_start_top: 0.0,
            settle_animator: None,
            on_refresh: None,
            on_scroll: None,
        }
    }

    /// Attach the scrollable content. Only one element is supported.
    pub fn attach_content(&mut self, content: impl ScrollableContent + 'static) -> Result<()> {
        if self.content.is_some() {
            return Err(ConfigError::ContentAlreadyAttached);
        }
        self.content = Some(Box::new(content));
        Ok(())
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Recreate footer and hint and put everything back at rest.
    ///
    /// Running animations are dropped without firing their end hooks.
    pub fn reset(&mut self) {
        self.footer = FooterView::new(&self.config);
        self.footer.layout(0.0, self.footer_height());
        self.hint = HintView::new(&self.config);
        self.state = ContainerState::default();
        self.session = None;
        self.dragging = false;
        self.back_animator = ValueAnimator::new(0.0, Easing::default());
        self.anim_start_top = 0.0;
        self.settle_animator = None;
        log::debug!("Pull layout reset");
    }

    pub fn set_on_refresh_listener(&mut self, listener: impl FnMut() + 'static) {
        self.on_refresh = Some(Box::new(listener));
    }

    pub fn set_on_scroll_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.on_scroll = Some(Box::new(listener));
    }

    /// Layout pass with the container's size
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.footer.layout(self.footer.width(), self.footer_height());
    }

    /// Advance all animations to the clock's current time.
    ///
    /// Returns true if the host should schedule another frame.
    pub fn on_frame(&mut self) -> bool {
        let now = self.clock.now();
        self.tick_release(now);
        self.tick_settle(now);
        self.hint.tick(now);
        self.footer.advance(now);
        self.needs_frame()
    }

    /// Whether anything is still moving or the footer needs repainting
    pub fn needs_frame(&self) -> bool {
        self.back_animator.is_running()
            || self.is_settling()
            || self.hint.indicator().is_rotating()
            || self.footer.needs_redraw(self.clock.now())
    }

    /// Footer outline at the current time, in footer-local coordinates
    pub fn footer_shape(&self) -> FooterShape {
        self.footer.shape(self.clock.now())
    }

    /// Footer bounds in layout coordinates; the footer hugs the trailing edge
    pub fn footer_bounds(&self) -> kurbo::Rect {
        let x1 = f64::from(self.width);
        let y0 = f64::from(self.config.footer_vertical_margin);
        kurbo::Rect::new(
            x1 - f64::from(self.footer.width()),
            y0,
            x1,
            y0 + f64::from(self.footer.height()),
        )
    }

    pub fn config(&self) -> &PullConfig {
        &self.config
    }

    pub fn state(&self) -> &ContainerState {
        &self.state
    }

    pub fn footer(&self) -> &FooterView {
        &self.footer
    }

    pub fn hint(&self) -> &HintView {
        &self.hint
    }

    pub fn scroll_offset(&self) -> f32 {
        self.state.scroll_offset
    }

    pub fn content_translation(&self) -> f32 {
        self.state.content_translation
    }

    pub fn is_refreshing(&self) -> bool {
        self.state.is_refreshing
    }

    pub fn is_hint_shown(&self) -> bool {
        self.state.is_hint_shown
    }

    /// True between interception and release
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_releasing(&self) -> bool {
        self.back_animator.is_running()
    }

    pub fn is_settling(&self) -> bool {
        self.settle_animator
            .as_ref()
            .is_some_and(ValueAnimator::is_running)
    }

    fn footer_height(&self) -> f32 {
        (self.height - self.config.footer_vertical_margin * 2.0).max(0.0)
    }

    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn can_scroll_forward(&self) -> bool {
        self.content
            .as_ref()
            .is_some_and(|content| content.can_scroll_forward())
    }

    fn set_dragging(&mut self, dragging: bool) {
        if self.dragging == dragging {
            return;
        }
        self.dragging = dragging;
        if let Some(listener) = self.on_scroll.as_mut() {
            listener(dragging);
        }
    }
}

impl fmt::Debug for PullRefreshLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PullRefreshLayout")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("state", &self.state)
            .field("session", &self.session)
            .field("dragging", &self.dragging)
            .field("footer", &self.footer)
            .field("hint", &self.hint)
            .field("has_content", &self.content.is_some())
            .finish_non_exhaustive()
    }
}
