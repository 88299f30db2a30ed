#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use stretch_refresh::prelude::*;

/// Content whose scroll state the test flips from outside
#[derive(Clone, Default)]
pub struct FakeContent {
    pub can_scroll: Rc<Cell<bool>>,
    pub first_visible: Rc<Cell<Option<usize>>>,
}

impl ScrollableContent for FakeContent {
    fn can_scroll_forward(&self) -> bool {
        self.can_scroll.get()
    }

    fn first_visible_index(&self) -> Option<usize> {
        self.first_visible.get()
    }
}

pub struct Harness {
    pub layout: PullRefreshLayout,
    pub clock: Rc<ManualClock>,
    pub content: FakeContent,
    pub refreshes: Rc<Cell<u32>>,
    pub drag_states: Rc<std::cell::RefCell<Vec<bool>>>,
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn harness() -> Harness {
    harness_with(PullConfig::default())
}

pub fn harness_with(config: PullConfig) -> Harness {
    init_logger();

    let clock = Rc::new(ManualClock::new());
    let mut layout = PullRefreshLayout::with_clock(config, clock.clone());
    layout.set_size(400.0, 300.0);

    let content = FakeContent::default();
    layout.attach_content(content.clone()).unwrap();

    let refreshes = Rc::new(Cell::new(0));
    let counter = refreshes.clone();
    layout.set_on_refresh_listener(move || counter.set(counter.get() + 1));

    let drag_states = Rc::new(std::cell::RefCell::new(Vec::new()));
    let states = drag_states.clone();
    layout.set_on_scroll_listener(move |dragging| states.borrow_mut().push(dragging));

    Harness {
        layout,
        clock,
        content,
        refreshes,
        drag_states,
    }
}

impl Harness {
    pub const START_X: f32 = 300.0;

    /// Touch down and drag left by `distance` in one move
    pub fn drag(&mut self, distance: f32) -> EventResponse {
        self.layout.handle_event(PointerEvent::Down {
            x: Self::START_X,
            y: 150.0,
        });
        self.move_to(distance)
    }

    /// Move the finger to `distance` left of where it went down
    pub fn move_to(&mut self, distance: f32) -> EventResponse {
        self.layout.handle_event(PointerEvent::Move {
            x: Self::START_X - distance,
            y: 150.0,
        })
    }

    pub fn release(&mut self) -> EventResponse {
        self.layout.handle_event(PointerEvent::Up {
            x: Self::START_X,
            y: 150.0,
        })
    }

    /// Step frames of `step_ms` until nothing moves, up to `limit_ms`
    pub fn run_frames(&mut self, step_ms: u64, limit_ms: u64) {
        let mut elapsed = 0;
        while elapsed < limit_ms {
            self.clock.advance(Duration::from_millis(step_ms));
            elapsed += step_ms;
            if !self.layout.on_frame() {
                break;
            }
        }
    }
}
