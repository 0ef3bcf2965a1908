use carousel::{Axis, Carousel, Direction, Host, ReleaseDecision};

/// A pointer position in host coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The coordinate a carousel moving along `axis` tracks.
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Raw input as a host layer receives it.
///
/// For touch events `at` is the first touch point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    PointerDown {
        kind: PointerKind,
        at: Point,
        time_ms: u64,
    },
    PointerMove {
        kind: PointerKind,
        at: Point,
    },
    PointerUp {
        kind: PointerKind,
        time_ms: u64,
    },
    PointerCancel {
        kind: PointerKind,
    },
    HoverEnter,
    HoverLeave,
    /// Activation of indicator (dot) `index`.
    Indicator(usize),
    /// A prev/next button.
    Button(Direction),
    /// A click landing on item `index` (a link or card inside the carousel).
    ItemClick(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The event did not apply (no session, foreign pointer, busy, disabled indicator...).
    Ignored,
    Handled,
    Released(ReleaseDecision),
    /// A button or indicator started a navigation.
    Navigated,
    /// The click should be delivered to the item.
    Click(usize),
    /// The click ended a drag and must not be delivered.
    ClickSuppressed,
}

/// Routes raw input to one carousel.
///
/// Only the pointer kind that started a drag may move or end it, so the compatibility mouse
/// events a browser fires after a touch do not disturb the touch gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputRouter {
    owner: Option<PointerKind>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pointer kind owning the current drag.
    pub fn owner(&self) -> Option<PointerKind> {
        self.owner
    }

    pub fn dispatch<H: Host<K>, K>(
        &mut self,
        carousel: &mut Carousel<H, K>,
        event: InputEvent,
    ) -> InputOutcome {
        let axis = carousel.options().strategy.axis;
        match event {
            InputEvent::PointerDown { kind, at, time_ms } => {
                if self.owner.is_some_and(|owner| owner != kind) {
                    return InputOutcome::Ignored;
                }
                carousel.drag_start(at.along(axis), time_ms);
                if carousel.is_dragging() {
                    self.owner = Some(kind);
                    InputOutcome::Handled
                } else {
                    self.owner = None;
                    InputOutcome::Ignored
                }
            }
            InputEvent::PointerMove { kind, at } => {
                if self.owner != Some(kind) {
                    return InputOutcome::Ignored;
                }
                match carousel.drag_move(at.along(axis)) {
                    Some(_) => InputOutcome::Handled,
                    None => {
                        // The drag ended elsewhere (e.g. the carousel was destroyed).
                        self.owner = None;
                        InputOutcome::Ignored
                    }
                }
            }
            InputEvent::PointerUp { kind, time_ms } => {
                if self.owner != Some(kind) {
                    return InputOutcome::Ignored;
                }
                self.owner = None;
                carousel
                    .drag_release(time_ms)
                    .map_or(InputOutcome::Ignored, InputOutcome::Released)
            }
            InputEvent::PointerCancel { kind } => {
                if self.owner != Some(kind) {
                    return InputOutcome::Ignored;
                }
                self.owner = None;
                carousel.drag_cancel();
                InputOutcome::Handled
            }
            InputEvent::HoverEnter => {
                carousel.pointer_enter();
                InputOutcome::Handled
            }
            InputEvent::HoverLeave => {
                carousel.pointer_leave();
                InputOutcome::Handled
            }
            InputEvent::Indicator(index) => navigated(carousel.go_to_indicator(index)),
            InputEvent::Button(direction) => navigated(carousel.advance(direction)),
            InputEvent::ItemClick(index) => {
                if carousel.take_click_suppression() {
                    InputOutcome::ClickSuppressed
                } else {
                    InputOutcome::Click(index)
                }
            }
        }
    }
}

fn navigated(started: bool) -> InputOutcome {
    if started {
        InputOutcome::Navigated
    } else {
        InputOutcome::Ignored
    }
}
