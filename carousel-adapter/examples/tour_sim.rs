// Example: drive every preset on the simulated host and report where each one lands.
use carousel::{Axis, Carousel, Direction};
use carousel_adapter::{
    Drive, InputEvent, InputRouter, Point, PointerKind, Preset, Registry, SimHost,
};

fn main() {
    let mut registry = Registry::new();
    let mut presets = Vec::new();
    for preset in Preset::ALL {
        let host = SimHost::new(0..9u64, 320.0, 180.0);
        let carousel = Carousel::new(host, 0..9u64, preset.options()).expect("valid preset");
        presets.push((registry.insert(carousel), preset));
    }

    for &(id, preset) in &presets {
        let Some(c) = registry.get_mut(id) else {
            continue;
        };
        let mut input = InputRouter::new();
        let (from, to) = match c.options().strategy.axis {
            Axis::Horizontal => (Point::new(600.0, 90.0), Point::new(400.0, 90.0)),
            Axis::Vertical => (Point::new(160.0, 600.0), Point::new(160.0, 500.0)),
        };
        let now = c.host().now_ms();
        let kind = PointerKind::Touch;

        input.dispatch(
            c,
            InputEvent::PointerDown {
                kind,
                at: from,
                time_ms: now,
            },
        );
        input.dispatch(c, InputEvent::PointerMove { kind, at: to });
        let released = input.dispatch(
            c,
            InputEvent::PointerUp {
                kind,
                time_ms: now + 150,
            },
        );
        c.settle(5_000);
        input.dispatch(c, InputEvent::Button(Direction::Next));
        c.run_for(10_000);

        println!(
            "{}: {released:?}, index={} order={:?} transform={}",
            preset.name(),
            c.index(),
            c.host().order(),
            c.host().transform().css_transform(),
        );
    }

    let destroyed = registry.destroy_all();
    for (c, (_, preset)) in destroyed.iter().zip(&presets) {
        println!("{} live timers after destroy: {}", preset.name(), c.host().live_timers());
    }
}
