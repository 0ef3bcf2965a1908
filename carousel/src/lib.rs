//! A headless carousel engine.
//!
//! For host-side utilities (input dispatch, instance registry, presets, a simulated host), see
//! the `carousel-adapter` crate.
//!
//! This crate holds the decision logic shared by draggable, auto-advancing carousels: drag
//! tracking and snap/threshold decisions, infinite-loop item recycling, momentum after
//! release, auto-play coordination and indicator (dot) state.
//!
//! It is UI-agnostic. A host layer is expected to provide, through [`Surface`] and
//! [`Scheduler`]:
//! - the rendered extent of one item
//! - a way to apply a translation + transition to the container and reorder items
//! - interval/timeout timers and display-frame callbacks
//!
//! and to report transition ends, frames and timer firings back to the [`Carousel`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod engine;
mod error;
mod fade;
mod gesture;
mod host;
mod indicator;
mod inertia;
mod options;
mod sequence;
mod state;
mod transform;
mod types;

#[cfg(test)]
mod tests;

pub use autoplay::AutoPlayScheduler;
pub use engine::Carousel;
pub use error::CarouselError;
pub use fade::ContentFade;
pub use gesture::{DragRelease, DragSession, GestureTracker};
pub use host::{FrameId, Host, Scheduler, Surface, TimerId};
pub use indicator::{IndicatorSet, IndicatorState};
pub use inertia::{INERTIA_START_VELOCITY, INERTIA_STOP_VELOCITY, InertiaSimulator, InertiaStep};
pub use options::{
    AutoPlayMode, BusyPolicy, CarouselOptions, DEFAULT_AUTO_PLAY_INTERVAL_MS,
    DEFAULT_FADE_IN_DELAY_MS, DEFAULT_FADE_OUT_MS, DEFAULT_INERTIA_DECELERATION,
    DEFAULT_INERTIA_MIN_VELOCITY, DEFAULT_ITEMS_PER_VIEW, DEFAULT_SNAP_THRESHOLD,
    DEFAULT_TRANSITION_DURATION_SEC, DEFAULT_TRANSITION_LOCK_MS, Step, Strategy,
};
pub use sequence::ItemSequence;
pub use state::CarouselState;
pub use transform::{Easing, Transform, TransformDriver, Transition};
pub use types::{Axis, Direction, ItemKey, Phase, Presentation, ReleaseDecision};
