//! Headless horizontal pull-to-refresh.
//!
//! Drag a scrollable element left to stretch an elastic footer out from
//! behind it; let go past the threshold to trigger a refresh, or before it to
//! leave a "view more" hint peeking in. The host feeds pointer events, nested
//! scroll callbacks, sizes and frame ticks into a [`PullRefreshLayout`] and
//! paints what it reads back.

pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod event;
pub mod footer;
pub mod hint;
pub mod offset;
pub mod refresh;
pub mod style;

pub use config::{PullConfig, PullConfigBuilder};
pub use error::{ConfigError, Result};
pub use refresh::{ContainerState, PullRefreshLayout};

pub mod prelude {
    pub use crate::animation::{FrameClock, ManualClock, SystemClock};
    pub use crate::config::{PullConfig, PullConfigBuilder};
    pub use crate::content::{ScrollAxes, ScrollableContent};
    pub use crate::error::ConfigError;
    pub use crate::event::{EventResponse, PointerEvent};
    pub use crate::footer::{FooterShape, FooterStatus};
    pub use crate::hint::HintLabel;
    pub use crate::refresh::PullRefreshLayout;
    pub use crate::style::Color;
}
