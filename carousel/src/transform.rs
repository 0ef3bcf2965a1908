use alloc::string::String;
use core::fmt;

use crate::{Axis, Surface};

/// CSS timing function names accepted by `transition`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    #[default]
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    #[default]
    None,
    Animated {
        duration_sec: f32,
        easing: Easing,
    },
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Animated {
                duration_sec,
                easing,
            } => write!(f, "transform {duration_sec}s {easing}"),
        }
    }
}

/// A 1-D translation of the carousel container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub axis: Axis,
    /// Offset in pixels along `axis`.
    pub offset: f32,
    pub transition: Transition,
}

impl Transform {
    pub fn instant(axis: Axis, offset: f32) -> Self {
        Self {
            axis,
            offset,
            transition: Transition::None,
        }
    }

    pub fn animated(axis: Axis, offset: f32, duration_sec: f32, easing: Easing) -> Self {
        Self {
            axis,
            offset,
            transition: Transition::Animated {
                duration_sec,
                easing,
            },
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self.transition, Transition::Animated { .. })
    }

    /// Value for the `transform` style property, e.g. `translateX(-300px)`.
    pub fn css_transform(&self) -> String {
        // Avoid rendering `-0px`.
        let offset = if self.offset == 0.0 { 0.0 } else { self.offset };
        match self.axis {
            Axis::Horizontal => alloc::format!("translateX({offset}px)"),
            Axis::Vertical => alloc::format!("translateY({offset}px)"),
        }
    }

    /// Value for the `transition` style property, e.g. `transform 0.3s ease`.
    pub fn css_transition(&self) -> String {
        alloc::format!("{}", self.transition)
    }
}

/// Owns the container's visual offset and writes it through a [`Surface`].
///
/// Tracks the last written offset so callers can tell whether an animated write will produce a
/// transition-end notification: a host does not emit one when the value does not change or the
/// duration is zero.
#[derive(Clone, Copy, Debug)]
pub struct TransformDriver {
    axis: Axis,
    duration_sec: f32,
    easing: Easing,
    offset: f32,
}

impl TransformDriver {
    pub fn new(axis: Axis, duration_sec: f32, easing: Easing) -> Self {
        Self {
            axis,
            duration_sec,
            easing,
            offset: 0.0,
        }
    }

    /// The last offset written to the surface.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Sets the offset now, with transitions disabled.
    pub fn jump<K>(&mut self, surface: &mut (impl Surface<K> + ?Sized), offset: f32) {
        self.offset = offset;
        surface.apply_transform(&Transform::instant(self.axis, offset));
    }

    /// Animates to `offset`.
    ///
    /// Returns `true` when a transition-end notification will follow. When it returns `false`
    /// the offset was applied instantly and the caller must complete synchronously.
    pub fn animate<K>(&mut self, surface: &mut (impl Surface<K> + ?Sized), offset: f32) -> bool {
        if self.duration_sec <= 0.0 || offset == self.offset {
            ctrace!(offset, "TransformDriver: settling without transition");
            self.jump(surface, offset);
            return false;
        }
        self.offset = offset;
        surface.apply_transform(&Transform::animated(
            self.axis,
            offset,
            self.duration_sec,
            self.easing,
        ));
        true
    }
}
