use core::mem;

use crate::{
    AutoPlayScheduler, BusyPolicy, CarouselError, CarouselOptions, CarouselState, ContentFade,
    Direction, DragSession, FrameId, GestureTracker, Host, IndicatorSet, InertiaSimulator,
    InertiaStep, ItemKey, ItemSequence, Phase, Presentation, ReleaseDecision, Step, TimerId,
    TransformDriver,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rotation {
    direction: Direction,
    count: usize,
}

/// A navigation waiting for its animation to complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    target: usize,
    /// Reorder applied at the completion boundary.
    rotation: Option<Rotation>,
    /// Indicator navigation keeps auto-play paused until the commit.
    resume_auto_play: bool,
}

/// Which process currently owns the container transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Motion {
    #[default]
    Idle,
    Dragging {
        /// Offset (relative to rest) the drag started from.
        origin: f32,
    },
    Animating(Pending),
    /// Recycling "prev": the tail item is already at the head and the container pre-positioned
    /// one item back; the animation starts on the next frame.
    Preparing {
        frame: FrameId,
        pending: Pending,
    },
    SnappingBack,
    Coasting,
    /// Fade presentation: navigation is locked until the timer fires.
    Locked(TimerId),
}

/// The carousel state machine.
///
/// The engine holds no UI objects of its own: it samples geometry from and writes transforms
/// to its [`Host`], and is driven by:
/// - user input: `drag_start` / `drag_move` / `drag_release`, `next` / `prev` / `go_to`,
///   `pointer_enter` / `pointer_leave`
/// - host notifications: `on_transition_end`, `on_frame`, `on_timer`
///
/// Exactly one process (drag, inertia, snap-back or a navigation) owns the container
/// transform at a time. A drag start preempts whatever is running: pending navigations are
/// fast-forwarded to their commit, momentum is cancelled.
#[derive(Debug)]
pub struct Carousel<H, K = ItemKey> {
    host: H,
    options: CarouselOptions,
    items: ItemSequence<K>,
    index: usize,
    extent: f32,
    motion: Motion,
    driver: TransformDriver,
    gesture: GestureTracker,
    inertia: InertiaSimulator,
    auto_play: AutoPlayScheduler,
    indicators: IndicatorSet,
    fade: ContentFade,
    emphasis: Option<(FrameId, usize)>,
    destroyed: bool,
}

impl<H: Host<K>, K> Carousel<H, K> {
    /// Creates a carousel over `items` (in display order) and renders its initial state.
    ///
    /// Fails if the options are invalid; an empty item list is accepted and makes every
    /// navigation a no-op.
    pub fn new(
        host: H,
        items: impl IntoIterator<Item = K>,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        options.validate()?;

        let items = ItemSequence::new(items);
        let indicators = IndicatorSet::new(
            options.resolve_indicator_positions(items.len()),
            options.items_per_view > 1,
        );
        cdebug!(
            count = items.len(),
            indicators = indicators.len(),
            recycles = options.recycles(),
            auto_play = options.auto_play,
            "Carousel::new"
        );

        let mut carousel = Self {
            host,
            items,
            index: 0,
            extent: 0.0,
            motion: Motion::Idle,
            driver: TransformDriver::new(
                options.strategy.axis,
                options.transition_duration_sec,
                options.easing,
            ),
            gesture: GestureTracker::new(),
            inertia: InertiaSimulator::new(options.inertia_deceleration),
            auto_play: AutoPlayScheduler::new(
                options.auto_play,
                options.auto_play_interval_ms,
                options.auto_play_mode,
            ),
            indicators,
            fade: ContentFade::new(options.fade_out_ms, options.fade_in_delay_ms),
            emphasis: None,
            destroyed: false,
            options,
        };

        carousel.indicators.reset(&mut carousel.host, 0);
        let fades = carousel.options.strategy.presentation == Presentation::Fade;
        if fades && !carousel.items.is_empty() {
            carousel.host.set_item_active(0, true);
            carousel.host.set_item_emphasis(0, true);
            carousel.host.set_content_visible(true);
        }
        carousel.auto_play.resume(&mut carousel.host);
        Ok(carousel)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The committed logical position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Items in current display order.
    pub fn items(&self) -> &ItemSequence<K> {
        &self.items
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn auto_play(&self) -> &AutoPlayScheduler {
        &self.auto_play
    }

    /// Last sampled item extent (0 when layout was unavailable).
    pub fn item_extent(&self) -> f32 {
        self.extent
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.gesture.session()
    }

    pub fn phase(&self) -> Phase {
        match self.motion {
            Motion::Idle => Phase::Idle,
            Motion::Dragging { .. } => Phase::Dragging,
            Motion::Animating(_) | Motion::Preparing { .. } | Motion::Locked(_) => {
                Phase::Animating
            }
            Motion::SnappingBack | Motion::Coasting => Phase::Settling,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging { .. })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase(), Phase::Animating | Phase::Settling)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.index,
            current_offset: self.driver.offset() - self.resting_offset(),
            item_extent: self.extent,
            phase: self.phase(),
            is_animating: self.is_animating(),
            is_dragging: self.is_dragging(),
            auto_play_running: self.auto_play.is_running(),
        }
    }

    /// Whether a click arriving now belongs to a drag and should be dropped.
    pub fn take_click_suppression(&mut self) -> bool {
        self.gesture.take_click_suppression()
    }

    pub fn next(&mut self) -> bool {
        self.advance(Direction::Next)
    }

    pub fn prev(&mut self) -> bool {
        self.advance(Direction::Prev)
    }

    /// User navigation by one step. Auto-play restarts with a fresh interval.
    ///
    /// Returns `true` if a navigation started. Calls during a drag or an animation are dropped.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.destroyed || self.is_dragging() {
            return false;
        }
        self.auto_play.pause(&mut self.host);
        let started = self.step(direction);
        self.auto_play.resume(&mut self.host);
        started
    }

    /// Navigates directly to a logical position, clamping it into range.
    ///
    /// No-op while dragging, while animating, or when `position` is already committed.
    pub fn go_to(&mut self, position: usize) -> bool {
        if self.destroyed || self.is_dragging() || self.items.is_empty() {
            return false;
        }
        let max = self.max_index();
        let target = if position > max {
            cwarn!(position, max, "Carousel::go_to: target clamped");
            max
        } else {
            position
        };
        if target == self.index {
            return false;
        }
        if !matches!(self.motion, Motion::Idle) {
            ctrace!(target, "Carousel::go_to: busy, ignored");
            return false;
        }

        let difference = target as i64 - self.index as i64;
        let direction = if difference > 0 {
            Direction::Next
        } else {
            Direction::Prev
        };
        let Some(step) = self.options.effective_step(direction) else {
            return false;
        };

        self.auto_play.pause(&mut self.host);
        cdebug!(from = self.index, to = target, "Carousel::go_to");
        match (step, self.options.strategy.presentation) {
            (Step::Recycle, _) => {
                let extent = self.sample_extent();
                let rotation = Rotation {
                    direction,
                    count: difference.unsigned_abs() as usize,
                };
                self.animate_then(
                    -(difference as f32) * extent,
                    Pending {
                        target,
                        rotation: Some(rotation),
                        resume_auto_play: true,
                    },
                );
            }
            (_, Presentation::Fade) => {
                self.fade_to(target);
                self.auto_play.resume(&mut self.host);
            }
            _ => {
                let extent = self.sample_extent();
                self.animate_then(
                    -(target as f32) * extent,
                    Pending {
                        target,
                        rotation: None,
                        resume_auto_play: true,
                    },
                );
            }
        }
        true
    }

    /// Indicator (dot) activation. Disabled indicators are rejected.
    pub fn go_to_indicator(&mut self, indicator: usize) -> bool {
        if self.indicators.is_empty() {
            return false;
        }
        let indicator = indicator.min(self.indicators.len() - 1);
        if self.indicators.is_disabled(indicator) {
            ctrace!(indicator, "Carousel::go_to_indicator: disabled");
            return false;
        }
        match self.indicators.position(indicator) {
            Some(position) => self.go_to(position),
            None => false,
        }
    }

    /// Enables auto-play and arms a fresh interval.
    pub fn start(&mut self) {
        if self.destroyed {
            return;
        }
        self.auto_play.start(&mut self.host);
        if self.is_dragging() {
            self.auto_play.pause(&mut self.host);
        }
    }

    /// Disables auto-play. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.auto_play.stop(&mut self.host);
    }

    /// Hover start: pauses auto-play.
    pub fn pointer_enter(&mut self) {
        if self.destroyed {
            return;
        }
        self.auto_play.set_held(true);
        self.auto_play.pause(&mut self.host);
    }

    /// Hover end: resumes auto-play if it is enabled (after the drag, if one is running).
    pub fn pointer_leave(&mut self) {
        if self.destroyed {
            return;
        }
        self.auto_play.set_held(false);
        if !self.is_dragging() {
            self.auto_play.resume(&mut self.host);
        }
    }

    pub fn drag_start(&mut self, coord: f32, now_ms: u64) {
        if self.destroyed || self.items.is_empty() {
            return;
        }
        self.preempt();
        self.auto_play.pause(&mut self.host);

        self.sample_extent();
        let current = self.driver.offset();
        let origin = current - self.resting_offset();
        // Freeze any CSS transition still running on the container.
        self.driver.jump(&mut self.host, current);
        self.gesture.start(coord, now_ms);
        self.motion = Motion::Dragging { origin };
        ctrace!(coord, origin, "Carousel::drag_start");
    }

    /// Returns the cumulative drag delta, or `None` without an active drag.
    pub fn drag_move(&mut self, coord: f32) -> Option<f32> {
        let Motion::Dragging { origin } = self.motion else {
            return None;
        };
        let delta = self.gesture.update(coord)?;
        let offset = self.resting_offset() + origin + delta;
        self.driver.jump(&mut self.host, offset);
        ctrace!(delta, offset, "Carousel::drag_move");
        Some(delta)
    }

    /// Ends the drag and acts on it. Returns `None` without an active drag.
    pub fn drag_release(&mut self, now_ms: u64) -> Option<ReleaseDecision> {
        if !self.is_dragging() {
            return None;
        }
        let release = self.gesture.release(now_ms)?;
        self.motion = Motion::Idle;
        let decision = self.decide_release(release.delta, release.velocity);
        self.auto_play.resume(&mut self.host);
        Some(decision)
    }

    /// Abandons the drag (e.g. touch cancel) and snaps back.
    pub fn drag_cancel(&mut self) {
        if !self.is_dragging() {
            return;
        }
        self.gesture.cancel();
        self.motion = Motion::Idle;
        self.sample_extent();
        self.snap_back();
        self.auto_play.resume(&mut self.host);
    }

    /// Release policy: advance when the drag crossed `extent * snap_threshold` (or was flicked
    /// faster than `inertia_min_velocity` with inertia enabled), otherwise settle back to rest.
    ///
    /// Ends an active drag session and resumes auto-play like [`Carousel::drag_release`].
    /// Returns `None` when the carousel is busy with something other than a drag.
    pub fn on_drag_release(&mut self, delta: f32, velocity: f32) -> Option<ReleaseDecision> {
        if self.destroyed {
            return None;
        }
        match self.motion {
            Motion::Idle => Some(self.decide_release(delta, velocity)),
            Motion::Dragging { .. } => {
                self.gesture.cancel();
                self.motion = Motion::Idle;
                let decision = self.decide_release(delta, velocity);
                self.auto_play.resume(&mut self.host);
                Some(decision)
            }
            _ => None,
        }
    }

    fn decide_release(&mut self, delta: f32, velocity: f32) -> ReleaseDecision {
        let decision = match self.release_direction(delta, velocity) {
            Some(direction) if self.step(direction) => ReleaseDecision::Advance(direction),
            _ => self.settle(velocity),
        };
        cdebug!(delta, velocity, ?decision, "Carousel: release");
        decision
    }

    /// The host finished the container transition.
    pub fn on_transition_end(&mut self) {
        if self.destroyed {
            return;
        }
        match mem::take(&mut self.motion) {
            Motion::Animating(pending) => self.commit(pending),
            Motion::SnappingBack => {
                ctrace!("Carousel: snap-back settled");
            }
            other => {
                ctrace!("Carousel: stray transition end ignored");
                self.motion = other;
            }
        }
    }

    /// A display frame requested by this carousel arrived.
    pub fn on_frame(&mut self, id: FrameId) {
        if self.destroyed {
            return;
        }
        if let Some((frame, index)) = self.emphasis {
            if frame == id {
                self.emphasis = None;
                self.host.set_item_emphasis(index, true);
                return;
            }
        }
        match self.motion {
            Motion::Preparing { frame, pending } if frame == id => {
                self.motion = Motion::Idle;
                self.animate_then(0.0, pending);
            }
            Motion::Coasting => match self.inertia.on_frame(&mut self.host, id) {
                Some(InertiaStep::Moved(carried)) => {
                    let offset = self.resting_offset() + carried;
                    self.driver.jump(&mut self.host, offset);
                }
                Some(InertiaStep::Settled) => self.snap_back(),
                None => {
                    ctrace!(frame = id.0, "Carousel: stale frame ignored");
                }
            },
            _ => {
                ctrace!(frame = id.0, "Carousel: stale frame ignored");
            }
        }
    }

    /// A timer created by this carousel fired.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.destroyed {
            return;
        }
        if self.auto_play.owns(id) {
            self.auto_advance();
            return;
        }
        if self.motion == Motion::Locked(id) {
            self.motion = Motion::Idle;
            return;
        }
        if self.fade.on_timer(&mut self.host, id) {
            return;
        }
        ctrace!(timer = id.0, "Carousel: stale timer ignored");
    }

    /// Cancels every timer, frame and pending completion. Later calls are no-ops.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.auto_play.stop(&mut self.host);
        self.inertia.cancel(&mut self.host);
        match mem::take(&mut self.motion) {
            Motion::Preparing { frame, .. } => self.host.cancel_frame(frame),
            Motion::Locked(timer) => self.host.clear_timer(timer),
            _ => {}
        }
        if let Some((frame, _)) = self.emphasis.take() {
            self.host.cancel_frame(frame);
        }
        self.fade.cancel(&mut self.host);
        self.gesture.cancel();
        self.destroyed = true;
        cdebug!("Carousel::destroy");
    }

    fn auto_advance(&mut self) {
        if self.is_dragging() {
            return;
        }
        if !matches!(self.motion, Motion::Idle) {
            if self.options.busy_policy == BusyPolicy::Defer {
                ctrace!("Carousel: busy, auto-play deferred");
                self.auto_play.resume(&mut self.host);
            }
            return;
        }
        self.step(Direction::Next);
    }

    /// Starts a one-step navigation. Returns `false` when nothing moves.
    fn step(&mut self, direction: Direction) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        if !matches!(self.motion, Motion::Idle) {
            ctrace!(%direction, "Carousel: busy, navigation ignored");
            return false;
        }
        let Some(step) = self.options.effective_step(direction) else {
            return false;
        };
        let Some(target) = self.step_target(step, direction) else {
            ctrace!(%direction, index = self.index, "Carousel: at bound");
            return false;
        };

        match (step, direction, self.options.strategy.presentation) {
            (Step::Recycle, Direction::Next, _) => {
                let extent = self.sample_extent();
                self.animate_then(
                    -extent,
                    Pending {
                        target,
                        rotation: Some(Rotation {
                            direction,
                            count: 1,
                        }),
                        resume_auto_play: false,
                    },
                );
            }
            (Step::Recycle, Direction::Prev, _) => self.prepare_prev(target),
            (_, _, Presentation::Fade) => self.fade_to(target),
            _ => {
                let extent = self.sample_extent();
                self.animate_then(
                    -(target as f32) * extent,
                    Pending {
                        target,
                        rotation: None,
                        resume_auto_play: false,
                    },
                );
            }
        }
        true
    }

    fn step_target(&self, step: Step, direction: Direction) -> Option<usize> {
        let count = self.items.len();
        match (step, direction) {
            (Step::Clamp, Direction::Next) => {
                (self.index < self.max_index()).then_some(self.index + 1)
            }
            (Step::Clamp, Direction::Prev) => self.index.checked_sub(1),
            (_, Direction::Next) => Some((self.index + 1) % count),
            (_, Direction::Prev) => Some((self.index + count - 1) % count),
        }
    }

    /// Highest reachable position. Bounded carousels stop once the last item is in view.
    fn max_index(&self) -> usize {
        let last = self.items.len().saturating_sub(1);
        if self.options.effective_step(Direction::Next) == Some(Step::Clamp) {
            self.items
                .len()
                .saturating_sub(self.options.items_per_view)
                .min(last)
        } else {
            last
        }
    }

    fn release_direction(&mut self, delta: f32, velocity: f32) -> Option<Direction> {
        let extent = self.sample_extent();
        if extent <= 0.0 {
            return None;
        }
        let threshold = extent * self.options.snap_threshold;
        let flick = self.options.inertia_enabled;
        let min_velocity = self.options.inertia_min_velocity;

        if delta < 0.0 && (delta <= -threshold || (flick && velocity < -min_velocity)) {
            Some(Direction::Next)
        } else if delta > 0.0 && (delta >= threshold || (flick && velocity > min_velocity)) {
            Some(Direction::Prev)
        } else {
            None
        }
    }

    /// Returns the container to rest, through momentum first when enabled.
    fn settle(&mut self, velocity: f32) -> ReleaseDecision {
        self.inertia.cancel(&mut self.host);
        if self.options.inertia_enabled
            && self.extent > 0.0
            && InertiaSimulator::should_launch(velocity)
        {
            let carried = self.driver.offset() - self.resting_offset();
            self.inertia.launch(&mut self.host, carried, velocity);
            self.motion = Motion::Coasting;
            ReleaseDecision::Coast
        } else {
            self.snap_back();
            ReleaseDecision::SnapBack
        }
    }

    fn snap_back(&mut self) {
        let rest = self.resting_offset();
        self.motion = if self.driver.animate(&mut self.host, rest) {
            Motion::SnappingBack
        } else {
            Motion::Idle
        };
    }

    fn animate_then(&mut self, offset: f32, pending: Pending) {
        if self.driver.animate(&mut self.host, offset) {
            self.motion = Motion::Animating(pending);
        } else {
            self.commit(pending);
        }
    }

    /// Recycling "prev": move the tail to the head and pre-position one item back without a
    /// transition, so the visible window is unchanged; animate to rest on the next frame.
    fn prepare_prev(&mut self, target: usize) {
        let extent = self.sample_extent();
        let carried = self.driver.offset();
        if let Some(key) = self.items.rotate_backward() {
            self.host.move_to_start(key);
        }
        self.driver.jump(&mut self.host, carried - extent);
        let frame = self.host.request_frame();
        self.motion = Motion::Preparing {
            frame,
            pending: Pending {
                target,
                rotation: None,
                resume_auto_play: false,
            },
        };
    }

    fn commit(&mut self, pending: Pending) {
        if let Some(rotation) = pending.rotation {
            for _ in 0..rotation.count {
                match rotation.direction {
                    Direction::Next => {
                        if let Some(key) = self.items.rotate_forward() {
                            self.host.move_to_end(key);
                        }
                    }
                    Direction::Prev => {
                        if let Some(key) = self.items.rotate_backward() {
                            self.host.move_to_start(key);
                        }
                    }
                }
            }
            self.driver.jump(&mut self.host, 0.0);
        }

        cdebug!(from = self.index, to = pending.target, "Carousel: committed");
        self.index = pending.target;
        self.motion = Motion::Idle;

        self.indicators.sync_to(&mut self.host, self.index);
        let last = self.max_index();
        self.auto_play.on_position(&mut self.host, self.index, last);
        if pending.resume_auto_play {
            self.auto_play.resume(&mut self.host);
        }
    }

    /// Fade presentation: swap the active item in place and lock navigation for a while.
    fn fade_to(&mut self, target: usize) {
        if self.driver.offset() != 0.0 {
            self.driver.jump(&mut self.host, 0.0);
        }
        let from = self.index;
        self.host.set_item_emphasis(from, false);
        self.host.set_item_active(from, false);
        self.host.set_item_active(target, true);
        if let Some((frame, _)) = self.emphasis.take() {
            self.host.cancel_frame(frame);
        }
        let frame = self.host.request_frame();
        self.emphasis = Some((frame, target));
        self.fade.begin(&mut self.host, target);

        self.index = target;
        cdebug!(from, to = target, "Carousel: faded");
        self.indicators.sync_to(&mut self.host, target);
        let last = self.max_index();
        self.auto_play.on_position(&mut self.host, target, last);

        let lock = self.host.set_timeout(self.options.transition_lock_ms);
        self.motion = Motion::Locked(lock);
    }

    /// Cancels or fast-forwards whatever owns the transform, ahead of a new drag.
    fn preempt(&mut self) {
        match mem::take(&mut self.motion) {
            Motion::Idle | Motion::SnappingBack => {}
            Motion::Dragging { .. } => self.gesture.cancel(),
            Motion::Animating(pending) => {
                cdebug!(target = pending.target, "Carousel: navigation fast-forwarded");
                self.commit(pending);
            }
            Motion::Preparing { frame, pending } => {
                self.host.cancel_frame(frame);
                self.commit(pending);
            }
            Motion::Coasting => self.inertia.cancel(&mut self.host),
            Motion::Locked(timer) => self.host.clear_timer(timer),
        }
    }

    fn sample_extent(&mut self) -> f32 {
        let extent = self.host.item_extent(self.options.strategy.axis);
        self.extent = if extent.is_finite() && extent > 0.0 {
            extent
        } else {
            cwarn!(extent, "item extent unavailable, treating as no movement");
            0.0
        };
        self.extent
    }

    /// Where the container rests for the committed position.
    fn resting_offset(&self) -> f32 {
        if self.options.strategy.presentation == Presentation::Fade || self.options.recycles() {
            0.0
        } else {
            -(self.index as f32) * self.extent
        }
    }
}
