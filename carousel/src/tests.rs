use crate::*;

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::ToString;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    /// A value in `[-bound, bound]` with a 1/100 resolution.
    fn gen_signed(&mut self, bound: u64) -> f32 {
        let hundredths = self.gen_range_u64(0, bound * 200 + 1) as f32;
        hundredths / 100.0 - bound as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Timer {
    delay_ms: u64,
    repeating: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Content {
    Visible(bool),
    Show(usize),
}

/// Mirrors what a DOM host would render and keeps a log of every call.
#[derive(Debug, Default)]
struct RecordingHost {
    extent: f32,
    order: Vec<ItemKey>,
    transforms: Vec<Transform>,
    indicators: Vec<IndicatorState>,
    indicator_writes: usize,
    active: Vec<(usize, bool)>,
    emphasis: Vec<(usize, bool)>,
    content: Vec<Content>,
    next_id: u64,
    timers: BTreeMap<TimerId, Timer>,
    frames: BTreeSet<FrameId>,
}

impl RecordingHost {
    fn new(extent: f32, count: usize) -> Self {
        Self {
            extent,
            order: (0..count as u64).collect(),
            ..Self::default()
        }
    }

    fn last_transform(&self) -> Transform {
        *self.transforms.last().expect("a transform was written")
    }

    fn interval(&self) -> Option<TimerId> {
        self.timers
            .iter()
            .find(|(_, t)| t.repeating)
            .map(|(id, _)| *id)
    }

    fn timeout(&self, delay_ms: u64) -> Option<TimerId> {
        self.timers
            .iter()
            .find(|(_, t)| !t.repeating && t.delay_ms == delay_ms)
            .map(|(id, _)| *id)
    }

    fn frame(&self) -> Option<FrameId> {
        self.frames.iter().next().copied()
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Surface for RecordingHost {
    fn item_extent(&self, _axis: Axis) -> f32 {
        self.extent
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.transforms.push(*transform);
    }

    fn move_to_end(&mut self, key: &ItemKey) {
        let pos = self.order.iter().position(|k| k == key).expect("rendered");
        let key = self.order.remove(pos);
        self.order.push(key);
    }

    fn move_to_start(&mut self, key: &ItemKey) {
        let pos = self.order.iter().position(|k| k == key).expect("rendered");
        let key = self.order.remove(pos);
        self.order.insert(0, key);
    }

    fn set_indicator(&mut self, index: usize, state: IndicatorState) {
        if self.indicators.len() <= index {
            self.indicators.resize(index + 1, IndicatorState::default());
        }
        self.indicators[index] = state;
        self.indicator_writes += 1;
    }

    fn set_item_active(&mut self, index: usize, active: bool) {
        self.active.push((index, active));
    }

    fn set_item_emphasis(&mut self, index: usize, emphasized: bool) {
        self.emphasis.push((index, emphasized));
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.content.push(Content::Visible(visible));
    }

    fn show_content(&mut self, index: usize) {
        self.content.push(Content::Show(index));
    }
}

impl Scheduler for RecordingHost {
    fn set_interval(&mut self, period_ms: u64) -> TimerId {
        let id = TimerId(self.allocate());
        self.timers.insert(
            id,
            Timer {
                delay_ms: period_ms,
                repeating: true,
            },
        );
        id
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        let id = TimerId(self.allocate());
        self.timers.insert(
            id,
            Timer {
                delay_ms,
                repeating: false,
            },
        );
        id
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }

    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.allocate());
        self.frames.insert(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.frames.remove(&id);
    }
}

fn carousel(count: usize, options: CarouselOptions) -> Carousel<RecordingHost> {
    Carousel::new(RecordingHost::new(300.0, count), 0..count as u64, options)
        .expect("valid options")
}

fn recycling() -> CarouselOptions {
    CarouselOptions::new(Strategy::recycling(Axis::Horizontal))
}

fn bounded() -> CarouselOptions {
    CarouselOptions::new(Strategy::bounded(Axis::Horizontal))
}

fn fire(c: &mut Carousel<RecordingHost>, id: TimerId) {
    let host = c.host_mut();
    let timer = *host.timers.get(&id).expect("timer is live");
    if !timer.repeating {
        host.timers.remove(&id);
    }
    c.on_timer(id);
}

fn run_frame(c: &mut Carousel<RecordingHost>) -> bool {
    let Some(id) = c.host().frame() else {
        return false;
    };
    c.host_mut().frames.remove(&id);
    c.on_frame(id);
    true
}

/// Delivers frames and transition ends until the carousel is idle.
fn finish(c: &mut Carousel<RecordingHost>) {
    for _ in 0..10_000 {
        if run_frame(c) {
            continue;
        }
        if c.is_animating() {
            c.on_transition_end();
            continue;
        }
        return;
    }
    panic!("carousel did not settle");
}

fn drag(c: &mut Carousel<RecordingHost>, coords: &[f32]) -> Option<ReleaseDecision> {
    c.drag_start(coords[0], 0);
    for &coord in &coords[1..] {
        c.drag_move(coord);
    }
    c.drag_release(100)
}

#[test]
fn drag_past_threshold_advances_and_recycles() {
    let mut c = carousel(5, recycling());

    c.drag_start(500.0, 0);
    assert_eq!(c.drag_move(350.0), Some(-150.0));
    assert_eq!(c.host().last_transform(), Transform::instant(Axis::Horizontal, -150.0));

    assert_eq!(
        c.drag_release(120),
        Some(ReleaseDecision::Advance(Direction::Next))
    );
    let t = c.host().last_transform();
    assert!(t.is_animated());
    assert_eq!(t.offset, -300.0);
    assert_eq!(c.index(), 0);
    assert!(c.is_animating());

    c.on_transition_end();
    assert_eq!(c.index(), 1);
    assert_eq!(c.host().order, [1, 2, 3, 4, 0]);
    assert_eq!(c.items().to_vec(), [1, 2, 3, 4, 0]);
    assert_eq!(c.host().last_transform(), Transform::instant(Axis::Horizontal, 0.0));
    assert_eq!(c.indicators().active(), Some(1));
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn short_drag_snaps_back() {
    let mut c = carousel(5, recycling());

    assert_eq!(drag(&mut c, &[500.0, 450.0]), Some(ReleaseDecision::SnapBack));
    let t = c.host().last_transform();
    assert!(t.is_animated());
    assert_eq!(t.offset, 0.0);
    assert_eq!(c.phase(), Phase::Settling);

    c.on_transition_end();
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.index(), 0);
    assert_eq!(c.host().order, [0, 1, 2, 3, 4]);
}

#[test]
fn drag_right_past_threshold_goes_back() {
    let mut c = carousel(4, recycling());

    assert_eq!(
        drag(&mut c, &[100.0, 200.0]),
        Some(ReleaseDecision::Advance(Direction::Prev))
    );
    // Tail moved to the head, container pre-positioned one item back from the drag offset.
    assert_eq!(c.host().order, [3, 0, 1, 2]);
    assert_eq!(c.host().last_transform(), Transform::instant(Axis::Horizontal, -200.0));

    finish(&mut c);
    assert_eq!(c.index(), 3);
    assert_eq!(c.host().last_transform().offset, 0.0);
}

#[test]
fn flick_advances_only_with_inertia_enabled() {
    let mut c = carousel(5, recycling());
    assert_eq!(
        drag(&mut c, &[500.0, 490.0, 480.0]),
        Some(ReleaseDecision::SnapBack)
    );
    finish(&mut c);
    assert_eq!(c.index(), 0);

    let mut c = carousel(5, recycling().with_inertia(0.95, 0.5));
    assert_eq!(
        drag(&mut c, &[500.0, 490.0, 480.0]),
        Some(ReleaseDecision::Advance(Direction::Next))
    );
    finish(&mut c);
    assert_eq!(c.index(), 1);
}

#[test]
fn release_decision_matches_threshold_rule() {
    let threshold = 300.0 * DEFAULT_SNAP_THRESHOLD;
    for seed in 0..8u64 {
        let mut rng = Lcg::new(seed);
        let mut c = carousel(5, recycling());
        for _ in 0..64 {
            let delta = rng.gen_signed(400);
            let velocity = rng.gen_signed(3);
            let expected = if delta < 0.0 && delta <= -threshold {
                ReleaseDecision::Advance(Direction::Next)
            } else if delta > 0.0 && delta >= threshold {
                ReleaseDecision::Advance(Direction::Prev)
            } else {
                ReleaseDecision::SnapBack
            };
            assert_eq!(
                c.on_drag_release(delta, velocity),
                Some(expected),
                "seed={seed} delta={delta}"
            );
            finish(&mut c);
        }
    }
}

#[test]
fn release_decision_with_inertia() {
    let threshold = 300.0 * DEFAULT_SNAP_THRESHOLD;
    let min_velocity = 0.5;
    let mut rng = Lcg::new(42);
    let mut c = carousel(5, recycling().with_inertia(0.9, min_velocity));
    for _ in 0..128 {
        let delta = rng.gen_signed(200);
        let velocity = rng.gen_signed(2);
        let expected = if delta < 0.0 && (delta <= -threshold || velocity < -min_velocity) {
            ReleaseDecision::Advance(Direction::Next)
        } else if delta > 0.0 && (delta >= threshold || velocity > min_velocity) {
            ReleaseDecision::Advance(Direction::Prev)
        } else if velocity >= INERTIA_START_VELOCITY || velocity <= -INERTIA_START_VELOCITY {
            ReleaseDecision::Coast
        } else {
            ReleaseDecision::SnapBack
        };
        assert_eq!(
            c.on_drag_release(delta, velocity),
            Some(expected),
            "delta={delta} velocity={velocity}"
        );
        finish(&mut c);
        assert_eq!(c.phase(), Phase::Idle);
    }
}

#[test]
fn release_ignored_while_busy() {
    let mut c = carousel(5, recycling());
    assert!(c.next());
    assert_eq!(c.on_drag_release(-200.0, 0.0), None);
    c.on_transition_end();
    assert_eq!(c.index(), 1);
}

#[test]
fn inertia_decays_then_snaps_back() {
    let mut c = carousel(5, recycling().with_inertia(0.5, 0.5));

    assert_eq!(
        drag(&mut c, &[500.0, 480.0, 479.7]),
        Some(ReleaseDecision::Coast)
    );
    assert_eq!(c.phase(), Phase::Settling);
    let released_at = c.host().transforms.len();

    let mut frames = 0;
    while run_frame(&mut c) {
        frames += 1;
        assert!(frames < 100);
    }
    assert!(frames > 1);

    let coasted = &c.host().transforms[released_at..];
    let (snap, moved) = coasted.split_last().expect("frames wrote offsets");
    assert!(moved.iter().all(|t| !t.is_animated() && t.offset < -20.3));
    assert!(snap.is_animated());
    assert_eq!(snap.offset, 0.0);
    assert!(c.host().frames.is_empty());

    c.on_transition_end();
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.index(), 0);
}

#[test]
fn drag_cancels_running_inertia() {
    let mut c = carousel(5, recycling().with_inertia(0.95, 0.5));
    assert_eq!(
        drag(&mut c, &[500.0, 480.0, 479.7]),
        Some(ReleaseDecision::Coast)
    );
    assert_eq!(c.host().frames.len(), 1);

    c.drag_start(300.0, 200);
    assert!(c.host().frames.is_empty());
    assert!(c.is_dragging());
    // Continues from where momentum left the container.
    assert!(c.state().current_offset < -20.0);
}

#[test]
fn drag_pauses_auto_play_and_release_rearms_it() {
    let mut c = carousel(5, recycling().with_auto_play(true));
    let first = c.host().interval().expect("auto-play armed");
    assert_eq!(c.host().timers.len(), 1);

    c.drag_start(500.0, 0);
    assert!(c.host().timers.is_empty());
    assert!(!c.state().auto_play_running);
    c.drag_move(350.0);
    c.drag_release(100);

    let second = c.host().interval().expect("re-armed on release");
    assert_ne!(first, second);
    assert_eq!(c.host().timers.len(), 1);
}

#[test]
fn host_reported_release_ends_drag_and_rearms_auto_play() {
    let mut c = carousel(5, recycling().with_auto_play(true));
    let first = c.host().interval().expect("auto-play armed");

    c.drag_start(500.0, 0);
    c.drag_move(480.0);
    assert!(c.host().timers.is_empty());

    assert_eq!(c.on_drag_release(-20.0, 0.0), Some(ReleaseDecision::SnapBack));
    assert!(!c.is_dragging());
    assert_eq!(c.drag_session(), None);
    let second = c.host().interval().expect("re-armed on release");
    assert_ne!(first, second);

    c.on_frame(FrameId(999));
    finish(&mut c);
    c.on_transition_end();
    assert_eq!(c.index(), 0);
    assert_eq!(c.host().last_transform().offset, 0.0);
    assert_eq!(c.host().timers.len(), 1);
    assert!(c.state().auto_play_running);

    fire(&mut c, second);
    finish(&mut c);
    assert_eq!(c.index(), 1);
}

#[test]
fn auto_play_advances_on_each_tick() {
    let mut c = carousel(3, recycling().with_auto_play(true));
    let id = c.host().interval().expect("armed");
    for expected in [1, 2, 0] {
        fire(&mut c, id);
        finish(&mut c);
        assert_eq!(c.index(), expected);
    }
    assert_eq!(c.host().interval(), Some(id));
}

#[test]
fn stop_is_idempotent_and_start_keeps_one_timer() {
    let mut c = carousel(5, recycling().with_auto_play(true));
    c.start();
    c.start();
    assert_eq!(c.host().timers.len(), 1);

    for _ in 0..3 {
        c.stop();
    }
    assert!(c.host().timers.is_empty());
    assert!(!c.auto_play().is_enabled());

    // Navigation does not bring a stopped auto-play back.
    c.next();
    finish(&mut c);
    assert!(c.host().timers.is_empty());
}

#[test]
fn next_restarts_auto_play_interval() {
    let mut c = carousel(5, recycling().with_auto_play(true));
    let first = c.host().interval().expect("armed");
    assert!(c.next());
    let second = c.host().interval().expect("re-armed");
    assert_ne!(first, second);
    assert_eq!(c.host().timers.len(), 1);
}

#[test]
fn busy_auto_play_tick_is_dropped_or_deferred() {
    let mut c = carousel(5, recycling().with_auto_play(true));
    c.next();
    let id = c.host().interval().expect("armed");
    fire(&mut c, id);
    assert_eq!(c.host().interval(), Some(id));
    c.on_transition_end();
    assert_eq!(c.index(), 1);

    let mut c = carousel(
        5,
        recycling()
            .with_auto_play(true)
            .with_busy_policy(BusyPolicy::Defer),
    );
    c.next();
    let id = c.host().interval().expect("armed");
    fire(&mut c, id);
    let deferred = c.host().interval().expect("re-armed");
    assert_ne!(deferred, id);
    assert_eq!(c.host().timers.len(), 1);
    c.on_transition_end();
    assert_eq!(c.index(), 1);
}

#[test]
fn hover_holds_auto_play() {
    let mut c = carousel(5, recycling().with_auto_play(true));
    c.pointer_enter();
    assert!(c.host().timers.is_empty());

    c.next();
    finish(&mut c);
    assert!(c.host().timers.is_empty());

    // Leaving mid-drag waits for the release.
    c.drag_start(0.0, 0);
    c.pointer_leave();
    assert!(c.host().timers.is_empty());
    c.drag_release(10);
    assert_eq!(c.host().timers.len(), 1);
}

#[test]
fn once_forward_auto_play_stops_at_last_position() {
    let mut c = carousel(
        3,
        bounded()
            .with_auto_play(true)
            .with_auto_play_mode(AutoPlayMode::OnceForward),
    );
    let id = c.host().interval().expect("armed");

    fire(&mut c, id);
    c.on_transition_end();
    assert_eq!(c.index(), 1);
    assert!(!c.auto_play().is_exhausted());

    fire(&mut c, id);
    c.on_transition_end();
    assert_eq!(c.index(), 2);
    assert!(c.auto_play().is_exhausted());
    assert!(c.host().timers.is_empty());

    // Interaction does not revive it.
    c.prev();
    finish(&mut c);
    assert!(c.host().timers.is_empty());
}

#[test]
fn full_cycle_restores_original_order() {
    for count in 2..7usize {
        let mut c = carousel(count, recycling());
        for _ in 0..count {
            assert!(c.next());
            finish(&mut c);
        }
        assert_eq!(c.index(), 0);
        assert_eq!(c.host().order, (0..count as u64).collect::<Vec<_>>());

        for _ in 0..count {
            assert!(c.prev());
            finish(&mut c);
        }
        assert_eq!(c.index(), 0);
        assert_eq!(c.host().order, (0..count as u64).collect::<Vec<_>>());
    }
}

#[test]
fn recycled_order_tracks_index_under_random_navigation() {
    for seed in 0..16u64 {
        let mut rng = Lcg::new(seed);
        let count = rng.gen_range_usize(2, 9);
        let mut c = carousel(count, recycling());

        for _ in 0..48 {
            match rng.gen_range_u64(0, 3) {
                0 => {
                    c.next();
                }
                1 => {
                    c.prev();
                }
                _ => {
                    c.go_to(rng.gen_range_usize(0, count));
                }
            }
            finish(&mut c);

            let index = c.index();
            assert!(index < count);
            assert_eq!(c.items().first(), Some(&(index as u64)), "seed={seed}");
            assert_eq!(c.host().order, c.items().to_vec());
            let mut sorted = c.host().order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..count as u64).collect::<Vec<_>>());
            assert_eq!(c.indicators().active(), Some(index));
            let resting = c.host().transforms.last().map_or(0.0, |t| t.offset);
            assert_eq!(resting, 0.0);
        }
    }
}

#[test]
fn go_to_round_trip_on_bounded_strip() {
    let mut c = carousel(5, bounded());

    assert!(c.go_to(3));
    let t = c.host().last_transform();
    assert!(t.is_animated());
    assert_eq!(t.offset, -900.0);
    c.on_transition_end();
    assert_eq!(c.index(), 3);

    assert!(!c.go_to(3));

    assert!(c.go_to(0));
    c.on_transition_end();
    assert_eq!(c.index(), 0);
    assert_eq!(c.host().last_transform().offset, 0.0);

    // Out of range clamps to the last position.
    assert!(c.go_to(99));
    c.on_transition_end();
    assert_eq!(c.index(), 4);
}

#[test]
fn bounded_strip_stops_when_last_item_is_in_view() {
    let mut c = carousel(6, bounded().with_items_per_view(3));
    assert!(!c.prev());

    for expected in 1..=3 {
        assert!(c.next());
        c.on_transition_end();
        assert_eq!(c.index(), expected);
    }
    assert!(!c.next());
    assert_eq!(c.host().last_transform().offset, -900.0);
}

#[test]
fn loop_disabled_turns_recycling_into_bounds() {
    let mut c = carousel(3, recycling().with_loop(false));
    assert!(!c.options().recycles());
    assert!(!c.prev());

    assert!(c.next());
    assert_eq!(c.host().last_transform().offset, -300.0);
    c.on_transition_end();
    assert_eq!(c.index(), 1);
    assert_eq!(c.host().order, [0, 1, 2]);
}

#[test]
fn wrapping_ticker_runs_vertically_and_wraps() {
    let mut c = carousel(3, CarouselOptions::new(Strategy::wrapping(Axis::Vertical)));

    c.next();
    let t = c.host().last_transform();
    assert_eq!(t.axis, Axis::Vertical);
    assert_eq!(t.css_transform(), "translateY(-300px)");
    c.on_transition_end();

    c.next();
    c.on_transition_end();
    assert_eq!(c.index(), 2);

    c.next();
    assert_eq!(c.host().last_transform().offset, 0.0);
    c.on_transition_end();
    assert_eq!(c.index(), 0);
    assert_eq!(c.host().order, [0, 1, 2]);

    c.prev();
    assert_eq!(c.host().last_transform().offset, -600.0);
    c.on_transition_end();
    assert_eq!(c.index(), 2);
}

#[test]
fn multi_item_indicators_disable_the_current_position() {
    let mut c = carousel(
        6,
        recycling()
            .with_items_per_view(3)
            .with_auto_play(true)
            .with_indicator_positions([0usize, 3, 6]),
    );
    assert_eq!(c.indicators().len(), 3);
    assert_eq!(c.indicators().position(2), Some(5));
    assert_eq!(
        c.host().indicators,
        [
            IndicatorState {
                active: true,
                disabled: true
            },
            IndicatorState::default(),
            IndicatorState::default(),
        ]
    );

    assert!(!c.go_to_indicator(0));

    assert!(c.go_to_indicator(1));
    assert!(c.host().timers.is_empty());
    c.on_transition_end();
    assert_eq!(c.index(), 3);
    assert_eq!(c.host().order, [3, 4, 5, 0, 1, 2]);
    assert_eq!(c.host().timers.len(), 1);
    assert_eq!(c.indicators().active(), Some(1));
    assert!(c.indicators().is_disabled(1));
    assert!(!c.indicators().is_disabled(0));
    assert!(!c.go_to_indicator(1));

    c.next();
    c.on_transition_end();
    assert_eq!(c.index(), 4);
    assert_eq!(c.indicators().active(), Some(1));
    assert!(!c.indicators().is_disabled(1));
}

#[test]
fn default_indicator_positions_follow_items_per_view() {
    let c = carousel(7, bounded().with_items_per_view(3));
    assert_eq!(c.indicators().len(), 3);
    assert_eq!(c.indicators().position(1), Some(3));
    assert_eq!(c.indicators().position(2), Some(6));
    assert_eq!(c.host().indicator_writes, 3);
}

#[test]
fn indicator_writes_only_changed_states() {
    let mut c = carousel(5, recycling());
    let initial = c.host().indicator_writes;
    c.next();
    c.on_transition_end();
    assert_eq!(c.host().indicator_writes, initial + 2);
}

#[test]
fn prev_pre_positions_before_animating() {
    let mut c = carousel(4, recycling());

    assert!(c.prev());
    assert_eq!(c.host().order, [3, 0, 1, 2]);
    assert_eq!(c.host().last_transform(), Transform::instant(Axis::Horizontal, -300.0));
    assert_eq!(c.index(), 0);
    assert_eq!(c.phase(), Phase::Animating);

    // A transition end before the frame belongs to nothing.
    c.on_transition_end();
    assert_eq!(c.index(), 0);

    assert!(run_frame(&mut c));
    let t = c.host().last_transform();
    assert!(t.is_animated());
    assert_eq!(t.offset, 0.0);

    c.on_transition_end();
    assert_eq!(c.index(), 3);
    assert_eq!(c.host().order, [3, 0, 1, 2]);
}

#[test]
fn drag_fast_forwards_pending_navigation() {
    let mut c = carousel(4, recycling());
    c.next();
    c.drag_start(100.0, 0);
    assert_eq!(c.index(), 1);
    assert_eq!(c.host().order, [1, 2, 3, 0]);
    assert!(c.is_dragging());

    // The late transition end is stale.
    c.on_transition_end();
    assert_eq!(c.index(), 1);
    assert!(c.is_dragging());

    let mut c = carousel(4, recycling());
    c.prev();
    c.drag_start(100.0, 0);
    assert!(c.host().frames.is_empty());
    assert_eq!(c.index(), 3);
    assert_eq!(c.state().current_offset, -300.0);
    c.drag_move(110.0);
    assert_eq!(c.drag_release(50), Some(ReleaseDecision::SnapBack));
    c.on_transition_end();
    assert_eq!(c.host().last_transform().offset, 0.0);
}

#[test]
fn navigation_is_ignored_while_dragging_or_animating() {
    let mut c = carousel(5, recycling());
    c.drag_start(0.0, 0);
    assert!(!c.next());
    assert!(!c.go_to(2));
    c.drag_cancel();
    assert_eq!(c.phase(), Phase::Idle);

    assert!(c.next());
    assert!(!c.next());
    assert!(!c.prev());
    c.on_transition_end();
    assert_eq!(c.index(), 1);
}

#[test]
fn drag_state_snapshot() {
    let mut c = carousel(5, bounded().with_auto_play(true));
    c.next();
    c.on_transition_end();

    c.drag_start(500.0, 0);
    c.drag_move(420.0);
    let state = c.state();
    assert_eq!(state.current_index, 1);
    assert_eq!(state.current_offset, -80.0);
    assert_eq!(state.item_extent, 300.0);
    assert_eq!(state.phase, Phase::Dragging);
    assert!(state.is_dragging);
    assert!(!state.auto_play_running);
    assert_eq!(c.host().last_transform().offset, -380.0);

    let session = c.drag_session().expect("dragging");
    assert_eq!(session.delta, -80.0);
    assert_eq!(session.velocity, -80.0);
}

#[test]
fn click_after_moving_drag_is_suppressed() {
    let mut c = carousel(5, recycling());
    drag(&mut c, &[0.0, -10.0]);
    assert!(c.take_click_suppression());
    assert!(!c.take_click_suppression());

    finish(&mut c);
    drag(&mut c, &[0.0]);
    assert!(!c.take_click_suppression());
}

#[test]
fn zero_and_single_item_carousels_are_inert() {
    let mut c = carousel(0, recycling().with_auto_play(true));
    assert!(c.is_empty());
    assert!(c.indicators().is_empty());
    assert!(!c.next());
    assert!(!c.prev());
    assert!(!c.go_to(0));
    assert!(!c.go_to_indicator(0));
    c.drag_start(0.0, 0);
    assert!(!c.is_dragging());
    assert_eq!(c.drag_release(10), None);
    let id = c.host().interval().expect("armed");
    fire(&mut c, id);
    assert_eq!(c.index(), 0);

    let mut c = carousel(1, recycling());
    assert!(!c.next());
    assert!(!c.go_to(5));
    assert_eq!(drag(&mut c, &[500.0, 100.0]), Some(ReleaseDecision::SnapBack));
    finish(&mut c);
    assert_eq!(c.index(), 0);
    assert_eq!(c.host().order, [0]);
}

#[test]
fn zero_extent_never_advances_on_release() {
    let mut c = Carousel::new(RecordingHost::new(0.0, 3), 0..3u64, recycling())
        .expect("valid options");
    assert_eq!(drag(&mut c, &[500.0, 100.0]), Some(ReleaseDecision::SnapBack));
    finish(&mut c);
    assert_eq!(c.index(), 0);
    assert_eq!(c.item_extent(), 0.0);

    // Button navigation still commits, without a transition.
    assert!(c.next());
    assert_eq!(c.index(), 1);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.host().order, [1, 2, 0]);
}

#[test]
fn zero_duration_commits_synchronously() {
    let mut c = carousel(3, bounded().with_transition(0.0, Easing::Linear));
    assert!(c.next());
    assert_eq!(c.index(), 1);
    assert_eq!(c.host().last_transform(), Transform::instant(Axis::Horizontal, -300.0));
}

#[test]
fn hero_slider_fades_and_locks_navigation() {
    let mut c = carousel(4, CarouselOptions::new(Strategy::fading()));
    assert_eq!(c.host().active, [(0, true)]);
    assert_eq!(c.host().emphasis, [(0, true)]);
    assert_eq!(c.host().content, [Content::Visible(true)]);
    c.host_mut().content.clear();

    assert!(c.next());
    assert_eq!(c.index(), 1);
    assert_eq!(c.indicators().active(), Some(1));
    assert_eq!(c.host().active, [(0, true), (0, false), (1, true)]);
    assert_eq!(c.host().emphasis, [(0, true), (0, false)]);
    assert_eq!(c.host().content, [Content::Visible(false)]);
    assert!(c.host().transforms.is_empty());
    assert_eq!(c.phase(), Phase::Animating);

    // Locked.
    assert!(!c.next());
    assert!(!c.go_to(3));

    assert!(run_frame(&mut c));
    assert_eq!(c.host().emphasis.last(), Some(&(1, true)));

    let fade_out = c.host().timeout(DEFAULT_FADE_OUT_MS).expect("fade-out timer");
    fire(&mut c, fade_out);
    assert_eq!(c.host().content, [Content::Visible(false), Content::Show(1)]);

    let reveal = c.host().timeout(DEFAULT_FADE_IN_DELAY_MS).expect("reveal timer");
    fire(&mut c, reveal);
    assert_eq!(c.host().content.last(), Some(&Content::Visible(true)));

    let lock = c.host().timeout(DEFAULT_TRANSITION_LOCK_MS).expect("lock timer");
    fire(&mut c, lock);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.host().timers.is_empty());

    assert!(c.prev());
    assert_eq!(c.index(), 0);
}

#[test]
fn hero_slider_wraps_backwards() {
    let mut c = carousel(
        3,
        CarouselOptions::new(Strategy::fading()).with_fade_timings(100, 10, 200),
    );
    assert!(c.prev());
    assert_eq!(c.index(), 2);
    assert!(c.host().timeout(200).is_some());
    assert!(c.host().timeout(100).is_some());
}

#[test]
fn destroy_cancels_everything_and_is_idempotent() {
    let mut c = carousel(5, recycling().with_auto_play(true).with_inertia(0.95, 0.5));
    assert_eq!(
        drag(&mut c, &[500.0, 480.0, 479.7]),
        Some(ReleaseDecision::Coast)
    );
    assert!(!c.host().timers.is_empty());
    assert!(!c.host().frames.is_empty());

    c.destroy();
    assert!(c.is_destroyed());
    assert!(c.host().timers.is_empty());
    assert!(c.host().frames.is_empty());

    c.destroy();
    assert!(!c.next());
    c.start();
    assert!(c.host().timers.is_empty());

    let mut c = carousel(4, recycling());
    c.prev();
    c.destroy();
    assert!(c.host().frames.is_empty());

    let mut c = carousel(4, CarouselOptions::new(Strategy::fading()));
    c.next();
    c.destroy();
    assert!(c.host().timers.is_empty());
    assert!(c.host().frames.is_empty());
}

#[test]
fn destroy_drops_pending_commit() {
    let mut c = carousel(4, recycling());
    c.next();
    c.destroy();
    c.on_transition_end();
    assert_eq!(c.index(), 0);
    assert_eq!(c.host().order, [0, 1, 2, 3]);
}

#[test]
fn construction_rejects_invalid_options() {
    let host = || RecordingHost::new(300.0, 3);

    let missing = Strategy {
        next: None,
        ..Strategy::bounded(Axis::Horizontal)
    };
    let err = Carousel::new(host(), 0..3u64, CarouselOptions::new(missing)).unwrap_err();
    assert_eq!(err, CarouselError::MissingStep(Direction::Next));
    assert_eq!(
        err.to_string(),
        "carousel strategy does not implement the `next` step"
    );

    let mixed = Strategy {
        prev: Some(Step::Clamp),
        ..Strategy::recycling(Axis::Horizontal)
    };
    let err = Carousel::new(host(), 0..3u64, CarouselOptions::new(mixed)).unwrap_err();
    assert_eq!(err, CarouselError::MixedSteps);

    let fading_recycler = Strategy {
        presentation: Presentation::Fade,
        ..Strategy::recycling(Axis::Horizontal)
    };
    let err = Carousel::new(host(), 0..3u64, CarouselOptions::new(fading_recycler)).unwrap_err();
    assert!(matches!(
        err,
        CarouselError::InvalidOption {
            name: "strategy",
            ..
        }
    ));

    let err = Carousel::new(host(), 0..3u64, recycling().with_items_per_view(0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid option `itemsPerView`: must be at least 1"
    );

    assert!(recycling().with_snap_threshold(1.5).validate().is_err());
    assert!(recycling().with_inertia(1.0, 0.5).validate().is_err());
    assert!(recycling().with_auto_play_interval_ms(0).validate().is_err());
    assert!(recycling().validate().is_ok());
}

#[test]
fn css_values() {
    assert_eq!(
        Transform::instant(Axis::Horizontal, -300.0).css_transform(),
        "translateX(-300px)"
    );
    assert_eq!(
        Transform::instant(Axis::Vertical, 42.5).css_transform(),
        "translateY(42.5px)"
    );
    assert_eq!(
        Transform::instant(Axis::Horizontal, -0.0).css_transform(),
        "translateX(0px)"
    );
    assert_eq!(
        Transform::instant(Axis::Horizontal, 0.0).css_transition(),
        "none"
    );
    assert_eq!(
        Transform::animated(Axis::Horizontal, 0.0, 0.3, Easing::Ease).css_transition(),
        "transform 0.3s ease"
    );
    assert_eq!(Easing::EaseInOut.as_str(), "ease-in-out");
}

#[test]
fn gesture_tracker_without_session() {
    let mut g = GestureTracker::new();
    assert_eq!(g.update(10.0), None);
    assert_eq!(g.release(5), None);
    g.cancel();
    assert!(!g.is_active());
    assert!(!g.take_click_suppression());
}

#[test]
fn gesture_velocity_is_last_move_difference() {
    let mut g = GestureTracker::new();
    g.start(100.0, 1_000);
    assert_eq!(g.update(90.0), Some(-10.0));
    assert_eq!(g.update(85.0), Some(-15.0));
    let session = g.session().expect("open");
    assert_eq!(session.velocity, -5.0);

    // Pressing again restarts cleanly.
    g.start(50.0, 2_000);
    assert_eq!(g.session().map(|s| s.delta), Some(0.0));

    g.update(70.0);
    let release = g.release(2_250).expect("open");
    assert_eq!(release.delta, 20.0);
    assert_eq!(release.velocity, 20.0);
    assert_eq!(release.duration_ms, 250);
    assert!(!g.is_active());
}

#[test]
fn inertia_ignores_foreign_frames() {
    let mut host = RecordingHost::default();
    let mut inertia = InertiaSimulator::new(0.5);
    assert!(!InertiaSimulator::should_launch(0.05));
    assert!(InertiaSimulator::should_launch(-0.1));

    inertia.launch(&mut host, 10.0, 4.0);
    let frame = host.frame().expect("requested");
    assert_eq!(inertia.on_frame(&mut host, FrameId(999)), None);

    host.frames.remove(&frame);
    assert_eq!(inertia.on_frame(&mut host, frame), Some(InertiaStep::Moved(12.0)));
    assert_eq!(inertia.velocity(), 2.0);
    assert_eq!(host.frames.len(), 1);

    inertia.cancel(&mut host);
    assert!(host.frames.is_empty());
    assert!(!inertia.is_running());
}
