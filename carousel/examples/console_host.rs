// Example: a host that prints what a document would receive, with timers driven by hand.
use carousel::{
    Axis, Carousel, CarouselOptions, FrameId, IndicatorState, Scheduler, Strategy, Surface,
    TimerId, Transform,
};

#[derive(Default)]
struct ConsoleHost {
    next_id: u64,
    frames: Vec<FrameId>,
}

impl Surface<&'static str> for ConsoleHost {
    fn item_extent(&self, _axis: Axis) -> f32 {
        320.0
    }

    fn apply_transform(&mut self, t: &Transform) {
        println!(
            "  transform: {}; transition: {}",
            t.css_transform(),
            t.css_transition()
        );
    }

    fn move_to_end(&mut self, key: &&'static str) {
        println!("  append {key}");
    }

    fn move_to_start(&mut self, key: &&'static str) {
        println!("  prepend {key}");
    }

    fn set_indicator(&mut self, index: usize, state: IndicatorState) {
        println!("  dot {index}: {state:?}");
    }
}

impl Scheduler for ConsoleHost {
    fn set_interval(&mut self, period_ms: u64) -> TimerId {
        self.next_id += 1;
        println!("  setInterval({period_ms}) -> {}", self.next_id);
        TimerId(self.next_id)
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        self.next_id += 1;
        println!("  setTimeout({delay_ms}) -> {}", self.next_id);
        TimerId(self.next_id)
    }

    fn clear_timer(&mut self, id: TimerId) {
        println!("  clearTimer({})", id.0);
    }

    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.frames.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.frames.retain(|f| *f != id);
    }
}

fn main() {
    let options = CarouselOptions::new(Strategy::recycling(Axis::Horizontal)).with_auto_play(true);
    let mut c = Carousel::new(ConsoleHost::default(), ["a", "b", "c", "d"], options)
        .expect("valid options");

    println!("next:");
    c.next();
    c.on_transition_end();

    println!("prev:");
    c.prev();
    let frames: Vec<FrameId> = c.host_mut().frames.drain(..).collect();
    for frame in frames {
        c.on_frame(frame);
    }
    c.on_transition_end();

    println!("drag:");
    c.drag_start(400.0, 0);
    c.drag_move(300.0);
    let decision = c.drag_release(120);
    c.on_transition_end();
    println!("released: {decision:?} -> {:?}", c.state());
    println!("order: {:?}", c.items().to_vec());

    c.destroy();
}
