mod animatable;
mod animator;
mod clock;
mod easing;

pub use animatable::Animatable;
pub use animator::{AnimatorListener, ValueAnimator};
pub use clock::{FrameClock, ManualClock, SystemClock};
pub use easing::{Easing, DEFAULT_DECELERATE_FACTOR};

pub(crate) use easing::damping_ratio;
