use crate::Phase;

/// A lightweight, serializable snapshot of a carousel instance.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    /// Committed logical position.
    pub current_index: usize,
    /// Transient drag/inertia offset relative to the resting position, in pixels.
    pub current_offset: f32,
    /// Last sampled item extent, in pixels.
    pub item_extent: f32,
    pub phase: Phase,
    pub is_animating: bool,
    pub is_dragging: bool,
    pub auto_play_running: bool,
}
