//! Replays one pull-to-refresh cycle against a virtual clock and prints what a
//! host would paint each frame.
//!
//! Run with `RUST_LOG=debug` to see the layout's own log output.

use std::rc::Rc;
use std::time::Duration;

use stretch_refresh::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

/// A list that has already been scrolled to its end
struct EndOfList;

impl ScrollableContent for EndOfList {
    fn can_scroll_forward(&self) -> bool {
        false
    }

    fn first_visible_index(&self) -> Option<usize> {
        Some(12)
    }
}

fn print_frame(label: &str, layout: &PullRefreshLayout) {
    let footer = layout.footer();
    let shape = match layout.footer_shape() {
        FooterShape::Idle(_) => "idle",
        FooterShape::Stretched(_) => "stretched",
        FooterShape::Springing(_) => "springing",
    };
    println!(
        "{:<8} translation {:>8.2}  footer {:>6.2}x{:<6.2} top {:>5.2} {:<9} hint {:?} {:>6.1}deg",
        label,
        layout.content_translation(),
        footer.width(),
        footer.height(),
        footer.top(),
        shape,
        layout.hint().text(),
        layout.hint().indicator().angle(),
    );
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let config = PullConfigBuilder::new()
        .labels("Swipe for more", "Release to refresh")
        .build()?;
    let clock = Rc::new(ManualClock::new());
    let mut layout = PullRefreshLayout::with_clock(config, clock.clone());
    layout.set_size(360.0, 240.0);
    layout.attach_content(EndOfList)?;
    layout.set_on_refresh_listener(|| println!("-- refresh requested --"));
    layout.set_on_scroll_listener(|dragging| println!("-- dragging: {} --", dragging));

    let start = 320.0;
    layout.handle_event(PointerEvent::Down { x: start, y: 120.0 });
    for step in 1..=12 {
        clock.advance(FRAME);
        let x = start - step as f32 * 20.0;
        layout.handle_event(PointerEvent::Move { x, y: 120.0 });
        layout.on_frame();
        print_frame("drag", &layout);
    }

    layout.handle_event(PointerEvent::Up { x: 80.0, y: 120.0 });
    print_frame("release", &layout);
    loop {
        clock.advance(FRAME);
        let more = layout.on_frame();
        print_frame("spring", &layout);
        if !more {
            break;
        }
    }

    println!(
        "settled: refreshing={} hint_shown={}",
        layout.is_refreshing(),
        layout.is_hint_shown()
    );
    Ok(())
}
