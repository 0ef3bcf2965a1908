use crate::{Axis, IndicatorState, ItemKey, Transform};

/// Handle for a host timer (interval or timeout).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerId(pub u64);

/// Handle for a host display-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameId(pub u64);

/// The rendered elements of one carousel instance.
///
/// Implementors own layout and rendering; the engine only samples geometry and writes the
/// container transform. The decorative hooks default to no-ops so hosts without dots, slide
/// classes or a content panel can leave them out.
pub trait Surface<K = ItemKey> {
    /// Pixel extent of one item along `axis`, sampled on demand.
    fn item_extent(&self, axis: Axis) -> f32;

    fn apply_transform(&mut self, transform: &Transform);

    /// Moves the item to the end of the container's display order.
    fn move_to_end(&mut self, key: &K);

    /// Moves the item to the start of the container's display order.
    fn move_to_start(&mut self, key: &K);

    fn set_indicator(&mut self, _index: usize, _state: IndicatorState) {}

    fn set_item_active(&mut self, _index: usize, _active: bool) {}

    /// Emphasis styling applied one frame after activation (the hero slider's zoom).
    fn set_item_emphasis(&mut self, _index: usize, _emphasized: bool) {}

    fn set_content_visible(&mut self, _visible: bool) {}

    /// Replaces the content panel with the content for item `index`.
    fn show_content(&mut self, _index: usize) {}
}

/// Timer and frame primitives.
///
/// The host reports firings back through `Carousel::on_timer` / `Carousel::on_frame`.
/// Intervals keep firing until cleared; timeouts and frames fire once.
pub trait Scheduler {
    fn set_interval(&mut self, period_ms: u64) -> TimerId;
    fn set_timeout(&mut self, delay_ms: u64) -> TimerId;
    fn clear_timer(&mut self, id: TimerId);
    fn request_frame(&mut self) -> FrameId;
    fn cancel_frame(&mut self, id: FrameId);
}

/// Everything a carousel needs from its environment.
pub trait Host<K = ItemKey>: Surface<K> + Scheduler {}

impl<K, T: Surface<K> + Scheduler> Host<K> for T {}
