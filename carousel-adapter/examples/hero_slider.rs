// Example: the hero slider's fade timeline on the virtual clock.
use carousel::Carousel;
use carousel_adapter::{Drive, FRAME_INTERVAL_MS, Preset, SimHost};

fn main() {
    let host = SimHost::new(0..4u64, 1280.0, 560.0);
    let mut c = Carousel::new(host, 0..4u64, Preset::HeroSlider.options()).expect("valid preset");

    let mut last = None;
    while c.host().now_ms() < 20_000 {
        c.run_for(FRAME_INTERVAL_MS);
        let h = c.host();
        let snapshot = (
            c.index(),
            h.is_item_emphasized(c.index()),
            h.content(),
            h.is_content_visible(),
            h.active_indicator(),
        );
        if last != Some(snapshot) {
            println!(
                "t={:>5} slide={} emphasized={} content={:?} visible={} dot={:?}",
                h.now_ms(),
                snapshot.0,
                snapshot.1,
                snapshot.2,
                snapshot.3,
                snapshot.4,
            );
            last = Some(snapshot);
        }
    }
    c.destroy();
}
