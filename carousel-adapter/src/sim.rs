use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use carousel::{
    Axis, Carousel, FrameId, IndicatorState, ItemKey, Scheduler, Surface, TimerId, Transform,
    Transition,
};

/// Frame callbacks run on a fixed cadence of this many virtual milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SimTimer {
    due_ms: u64,
    /// `Some` for intervals.
    period_ms: Option<u64>,
}

/// A callback the host owes the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wake {
    Timer(TimerId),
    Frame(FrameId),
    TransitionEnd,
}

/// A deterministic in-memory host.
///
/// It mirrors what a document would show (item order, container transform, indicator and
/// slide classes, content panel) and emulates the browser's scheduling on a virtual clock:
/// - timers fire at their due time; intervals re-arm themselves
/// - frame callbacks fire on the next [`FRAME_INTERVAL_MS`] boundary
/// - an animated transform that changes the offset produces one transition end after its
///   duration; an instant write interrupts a running transition without one
///
/// Drive it through [`Drive`].
#[derive(Clone, Debug)]
pub struct SimHost<K = ItemKey> {
    now_ms: u64,
    width: f32,
    height: f32,
    order: Vec<K>,
    transform: Transform,
    transforms_written: usize,
    /// `(due_ms, sequence)` of the pending transition end.
    transition_end: Option<(u64, u64)>,
    indicators: Vec<IndicatorState>,
    active: BTreeSet<usize>,
    emphasized: BTreeSet<usize>,
    content_visible: bool,
    content: Option<usize>,
    timers: BTreeMap<TimerId, SimTimer>,
    frames: BTreeMap<FrameId, u64>,
    next_seq: u64,
}

impl<K> SimHost<K> {
    /// A host rendering `items` in order, each `width` x `height` pixels.
    pub fn new(items: impl IntoIterator<Item = K>, width: f32, height: f32) -> Self {
        Self {
            now_ms: 0,
            width,
            height,
            order: items.into_iter().collect(),
            transform: Transform::instant(Axis::Horizontal, 0.0),
            transforms_written: 0,
            transition_end: None,
            indicators: Vec::new(),
            active: BTreeSet::new(),
            emphasized: BTreeSet::new(),
            content_visible: false,
            content: None,
            timers: BTreeMap::new(),
            frames: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Simulates a responsive layout change.
    pub fn resize_items(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Current display order of the items.
    pub fn order(&self) -> &[K] {
        &self.order
    }

    /// The last transform written to the container.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn transforms_written(&self) -> usize {
        self.transforms_written
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_end.is_some()
    }

    pub fn indicators(&self) -> &[IndicatorState] {
        &self.indicators
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|s| s.active)
    }

    pub fn is_item_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    pub fn is_item_emphasized(&self, index: usize) -> bool {
        self.emphasized.contains(&index)
    }

    pub fn is_content_visible(&self) -> bool {
        self.content_visible
    }

    /// Which item's content the panel currently shows.
    pub fn content(&self) -> Option<usize> {
        self.content
    }

    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn live_intervals(&self) -> usize {
        self.timers.values().filter(|t| t.period_ms.is_some()).count()
    }

    /// The ids of live intervals, oldest first.
    pub fn intervals(&self) -> Vec<TimerId> {
        self.timers
            .iter()
            .filter(|(_, t)| t.period_ms.is_some())
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn live_frames(&self) -> usize {
        self.frames.len()
    }

    /// Timers, frames and transition ends still owed to the carousel.
    pub fn pending_callbacks(&self) -> usize {
        self.timers.len() + self.frames.len() + usize::from(self.transition_end.is_some())
    }

    /// Whether a transition or frame callback is outstanding (timers excluded).
    pub fn is_busy(&self) -> bool {
        self.transition_end.is_some() || !self.frames.is_empty()
    }

    /// The earliest callback due at or before `until_ms`, with its due time.
    pub fn next_wake(&self, until_ms: u64) -> Option<(u64, Wake)> {
        let timers = self
            .timers
            .iter()
            .map(|(id, t)| (t.due_ms, id.0, Wake::Timer(*id)));
        let frames = self
            .frames
            .iter()
            .map(|(id, due)| (*due, id.0, Wake::Frame(*id)));
        let transition = self
            .transition_end
            .map(|(due, seq)| (due, seq, Wake::TransitionEnd));

        timers
            .chain(frames)
            .chain(transition)
            .filter(|(due, _, _)| *due <= until_ms)
            .min_by_key(|(due, seq, _)| (*due, *seq))
            .map(|(due, _, wake)| (due, wake))
    }

    /// Advances the clock to the next callback due by `until_ms` and consumes it.
    fn pop_wake(&mut self, until_ms: u64) -> Option<Wake> {
        let (due, wake) = self.next_wake(until_ms)?;
        self.now_ms = self.now_ms.max(due);
        match wake {
            Wake::Timer(id) => {
                if let Some(timer) = self.timers.get_mut(&id) {
                    match timer.period_ms {
                        Some(period) => timer.due_ms += period,
                        None => {
                            self.timers.remove(&id);
                        }
                    }
                }
            }
            Wake::Frame(id) => {
                self.frames.remove(&id);
            }
            Wake::TransitionEnd => self.transition_end = None,
        }
        Some(wake)
    }

    fn allocate(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

impl<K: PartialEq> Surface<K> for SimHost<K> {
    fn item_extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    fn apply_transform(&mut self, transform: &Transform) {
        let moved = transform.offset != self.transform.offset;
        self.transform = *transform;
        self.transforms_written += 1;
        self.transition_end = match transform.transition {
            Transition::None => None,
            // Re-targeting the same value leaves a running transition alone.
            Transition::Animated { .. } if !moved => self.transition_end,
            Transition::Animated { duration_sec, .. } if duration_sec > 0.0 => {
                let duration_ms = (duration_sec * 1000.0 + 0.5) as u64;
                Some((self.now_ms + duration_ms, self.allocate()))
            }
            Transition::Animated { .. } => None,
        };
    }

    fn move_to_end(&mut self, key: &K) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let item = self.order.remove(pos);
            self.order.push(item);
        }
    }

    fn move_to_start(&mut self, key: &K) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let item = self.order.remove(pos);
            self.order.insert(0, item);
        }
    }

    fn set_indicator(&mut self, index: usize, state: IndicatorState) {
        if self.indicators.len() <= index {
            self.indicators.resize(index + 1, IndicatorState::default());
        }
        self.indicators[index] = state;
    }

    fn set_item_active(&mut self, index: usize, active: bool) {
        if active {
            self.active.insert(index);
        } else {
            self.active.remove(&index);
        }
    }

    fn set_item_emphasis(&mut self, index: usize, emphasized: bool) {
        if emphasized {
            self.emphasized.insert(index);
        } else {
            self.emphasized.remove(&index);
        }
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.content_visible = visible;
    }

    fn show_content(&mut self, index: usize) {
        self.content = Some(index);
    }
}

impl<K> Scheduler for SimHost<K> {
    fn set_interval(&mut self, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        let id = TimerId(self.allocate());
        self.timers.insert(
            id,
            SimTimer {
                due_ms: self.now_ms + period_ms,
                period_ms: Some(period_ms),
            },
        );
        id
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        let id = TimerId(self.allocate());
        self.timers.insert(
            id,
            SimTimer {
                due_ms: self.now_ms + delay_ms,
                period_ms: None,
            },
        );
        id
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }

    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.allocate());
        let due = (self.now_ms / FRAME_INTERVAL_MS + 1) * FRAME_INTERVAL_MS;
        self.frames.insert(id, due);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.frames.remove(&id);
    }
}

/// Runs a carousel hosted by a [`SimHost`] on the virtual clock.
pub trait Drive {
    /// Advances the clock by `ms`, delivering every callback that falls due, in order.
    fn run_for(&mut self, ms: u64);

    /// Delivers callbacks until no transition or frame is outstanding, for at most `limit_ms`.
    ///
    /// Returns `false` if the limit elapsed first.
    fn settle(&mut self, limit_ms: u64) -> bool;
}

impl<K: PartialEq> Drive for Carousel<SimHost<K>, K> {
    fn run_for(&mut self, ms: u64) {
        let until = self.host().now_ms.saturating_add(ms);
        while let Some(wake) = self.host_mut().pop_wake(until) {
            deliver(self, wake);
        }
        self.host_mut().now_ms = until;
    }

    fn settle(&mut self, limit_ms: u64) -> bool {
        let until = self.host().now_ms.saturating_add(limit_ms);
        while self.host().is_busy() {
            match self.host_mut().pop_wake(until) {
                Some(wake) => deliver(self, wake),
                None => {
                    self.host_mut().now_ms = until;
                    return false;
                }
            }
        }
        true
    }
}

fn deliver<K: PartialEq>(carousel: &mut Carousel<SimHost<K>, K>, wake: Wake) {
    match wake {
        Wake::Timer(id) => carousel.on_timer(id),
        Wake::Frame(id) => carousel.on_frame(id),
        Wake::TransitionEnd => carousel.on_transition_end(),
    }
}
