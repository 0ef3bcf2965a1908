use alloc::vec::Vec;

use crate::{Axis, CarouselError, Direction, Easing, Presentation};

pub const DEFAULT_ITEMS_PER_VIEW: usize = 1;
pub const DEFAULT_AUTO_PLAY_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_TRANSITION_DURATION_SEC: f32 = 0.3;
pub const DEFAULT_SNAP_THRESHOLD: f32 = 0.25;
pub const DEFAULT_INERTIA_DECELERATION: f32 = 0.95;
pub const DEFAULT_INERTIA_MIN_VELOCITY: f32 = 0.5;
pub const DEFAULT_FADE_OUT_MS: u64 = 400;
pub const DEFAULT_FADE_IN_DELAY_MS: u64 = 50;
pub const DEFAULT_TRANSITION_LOCK_MS: u64 = 3000;

/// How one navigation step moves the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Step {
    /// Endless scrolling by reordering items at animation boundaries. The container rests at
    /// offset 0.
    Recycle,
    /// Bounded: the index stops at either end. The container rests at `-index * extent`.
    Clamp,
    /// Modular index without reordering. The container rests at `-index * extent`.
    Wrap,
}

/// The per-variant navigation behaviour, supplied at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Strategy {
    pub next: Option<Step>,
    pub prev: Option<Step>,
    pub axis: Axis,
    pub presentation: Presentation,
}

impl Strategy {
    /// Infinite-loop carousel (tour list, review grid).
    pub const fn recycling(axis: Axis) -> Self {
        Self::uniform(Step::Recycle, axis, Presentation::Slide)
    }

    /// Bounded carousel that stops at the first/last item.
    pub const fn bounded(axis: Axis) -> Self {
        Self::uniform(Step::Clamp, axis, Presentation::Slide)
    }

    /// Modular carousel that jumps back across the strip (vertical ticker).
    pub const fn wrapping(axis: Axis) -> Self {
        Self::uniform(Step::Wrap, axis, Presentation::Slide)
    }

    /// Hero slider: modular index, slides toggled in place with a content cross-fade.
    pub const fn fading() -> Self {
        Self::uniform(Step::Wrap, Axis::Horizontal, Presentation::Fade)
    }

    const fn uniform(step: Step, axis: Axis, presentation: Presentation) -> Self {
        Self {
            next: Some(step),
            prev: Some(step),
            axis,
            presentation,
        }
    }

    pub fn step(&self, direction: Direction) -> Option<Step> {
        match direction {
            Direction::Next => self.next,
            Direction::Prev => self.prev,
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    fn validate(&self) -> Result<(), CarouselError> {
        let next = self.next.ok_or(CarouselError::MissingStep(Direction::Next))?;
        let prev = self.prev.ok_or(CarouselError::MissingStep(Direction::Prev))?;
        if (next == Step::Recycle) != (prev == Step::Recycle) {
            return Err(CarouselError::MixedSteps);
        }
        if next == Step::Recycle && self.presentation == Presentation::Fade {
            return Err(CarouselError::InvalidOption {
                name: "strategy",
                reason: "fade presentation cannot recycle items",
            });
        }
        Ok(())
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::recycling(Axis::Horizontal)
    }
}

/// What auto-play does once it reaches the last position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AutoPlayMode {
    #[default]
    Loop,
    /// Stops permanently once the last position has been reached.
    OnceForward,
}

/// What happens to a navigation request that arrives while an animation is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BusyPolicy {
    #[default]
    Ignore,
    /// The request is dropped, and a busy auto-play firing re-arms the timer so the next
    /// attempt comes one full interval later.
    Defer,
}

/// Configuration for [`crate::Carousel`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CarouselOptions {
    pub strategy: Strategy,

    /// Items visible at once. Values above 1 enable disabled-indicator semantics.
    pub items_per_view: usize,

    pub auto_play: bool,
    pub auto_play_interval_ms: u64,
    pub auto_play_mode: AutoPlayMode,
    pub busy_policy: BusyPolicy,

    pub transition_duration_sec: f32,
    #[cfg_attr(feature = "serde", serde(rename = "easingFunction"))]
    pub easing: Easing,

    /// Fraction of one item's extent a drag must cross to advance.
    #[cfg_attr(feature = "serde", serde(rename = "snapThresholdFraction"))]
    pub snap_threshold: f32,

    /// Enables momentum after release and the velocity ("flick") advance rule.
    pub inertia_enabled: bool,
    /// Per-frame velocity multiplier, in `0..1`.
    pub inertia_deceleration: f32,
    /// Release velocity (pixels per move event) that advances even below the snap threshold.
    pub inertia_min_velocity: f32,

    /// When `false`, recycling and wrapping steps stop at either end instead.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub loop_items: bool,

    /// Logical position of each indicator. Defaults to `0, items_per_view, ...` below `count`.
    pub indicator_positions: Option<Vec<usize>>,

    pub fade_out_ms: u64,
    pub fade_in_delay_ms: u64,
    /// How long navigation stays locked after a fade change.
    pub transition_lock_ms: u64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            items_per_view: DEFAULT_ITEMS_PER_VIEW,
            auto_play: false,
            auto_play_interval_ms: DEFAULT_AUTO_PLAY_INTERVAL_MS,
            auto_play_mode: AutoPlayMode::default(),
            busy_policy: BusyPolicy::default(),
            transition_duration_sec: DEFAULT_TRANSITION_DURATION_SEC,
            easing: Easing::default(),
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            inertia_enabled: false,
            inertia_deceleration: DEFAULT_INERTIA_DECELERATION,
            inertia_min_velocity: DEFAULT_INERTIA_MIN_VELOCITY,
            loop_items: true,
            indicator_positions: None,
            fade_out_ms: DEFAULT_FADE_OUT_MS,
            fade_in_delay_ms: DEFAULT_FADE_IN_DELAY_MS,
            transition_lock_ms: DEFAULT_TRANSITION_LOCK_MS,
        }
    }
}

impl CarouselOptions {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn with_items_per_view(mut self, items_per_view: usize) -> Self {
        self.items_per_view = items_per_view;
        self
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_auto_play_interval_ms(mut self, interval_ms: u64) -> Self {
        self.auto_play_interval_ms = interval_ms;
        self
    }

    pub fn with_auto_play_mode(mut self, mode: AutoPlayMode) -> Self {
        self.auto_play_mode = mode;
        self
    }

    pub fn with_busy_policy(mut self, policy: BusyPolicy) -> Self {
        self.busy_policy = policy;
        self
    }

    pub fn with_transition(mut self, duration_sec: f32, easing: Easing) -> Self {
        self.transition_duration_sec = duration_sec;
        self.easing = easing;
        self
    }

    pub fn with_snap_threshold(mut self, fraction: f32) -> Self {
        self.snap_threshold = fraction;
        self
    }

    pub fn with_inertia(mut self, deceleration: f32, min_velocity: f32) -> Self {
        self.inertia_enabled = true;
        self.inertia_deceleration = deceleration;
        self.inertia_min_velocity = min_velocity;
        self
    }

    pub fn with_loop(mut self, loop_items: bool) -> Self {
        self.loop_items = loop_items;
        self
    }

    pub fn with_indicator_positions(mut self, positions: impl Into<Vec<usize>>) -> Self {
        self.indicator_positions = Some(positions.into());
        self
    }

    pub fn with_fade_timings(
        mut self,
        fade_out_ms: u64,
        fade_in_delay_ms: u64,
        transition_lock_ms: u64,
    ) -> Self {
        self.fade_out_ms = fade_out_ms;
        self.fade_in_delay_ms = fade_in_delay_ms;
        self.transition_lock_ms = transition_lock_ms;
        self
    }

    /// The step actually used for `direction`, after applying `loop_items`.
    pub fn effective_step(&self, direction: Direction) -> Option<Step> {
        self.strategy.step(direction).map(|step| match step {
            Step::Recycle | Step::Wrap if !self.loop_items => Step::Clamp,
            step => step,
        })
    }

    pub fn recycles(&self) -> bool {
        self.effective_step(Direction::Next) == Some(Step::Recycle)
    }

    /// Checks the options a carousel cannot run with.
    pub fn validate(&self) -> Result<(), CarouselError> {
        self.strategy.validate()?;
        if self.items_per_view == 0 {
            return Err(invalid("itemsPerView", "must be at least 1"));
        }
        if self.auto_play_interval_ms == 0 {
            return Err(invalid("autoPlayIntervalMs", "must be positive"));
        }
        if !(self.transition_duration_sec >= 0.0 && self.transition_duration_sec.is_finite()) {
            return Err(invalid(
                "transitionDurationSec",
                "must be a finite, non-negative number",
            ));
        }
        if !(0.0..=1.0).contains(&self.snap_threshold) {
            return Err(invalid("snapThresholdFraction", "must be within 0..=1"));
        }
        if !(0.0..1.0).contains(&self.inertia_deceleration) {
            return Err(invalid("inertiaDeceleration", "must be within 0..1"));
        }
        if !(self.inertia_min_velocity >= 0.0 && self.inertia_min_velocity.is_finite()) {
            return Err(invalid(
                "inertiaMinVelocity",
                "must be a finite, non-negative number",
            ));
        }
        Ok(())
    }

    /// Indicator positions clamped into `[0, count)`.
    pub(crate) fn resolve_indicator_positions(&self, count: usize) -> Vec<usize> {
        if count == 0 {
            return Vec::new();
        }
        match &self.indicator_positions {
            Some(positions) => positions
                .iter()
                .map(|&p| {
                    if p >= count {
                        cwarn!(position = p, count, "indicator position clamped into range");
                    }
                    p.min(count - 1)
                })
                .collect(),
            None => (0..count).step_by(self.items_per_view.max(1)).collect(),
        }
    }
}

fn invalid(name: &'static str, reason: &'static str) -> CarouselError {
    CarouselError::InvalidOption { name, reason }
}
