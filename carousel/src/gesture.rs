/// A live drag, from pointer-down to pointer-up.
///
/// Coordinates are along the carousel axis. `velocity` is the coordinate difference between
/// the two most recent move events (pixels per event, not per second).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    pub start: f32,
    pub last: f32,
    pub start_ms: u64,
    pub delta: f32,
    pub velocity: f32,
}

/// Snapshot handed to the engine when a drag ends.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragRelease {
    pub delta: f32,
    pub velocity: f32,
    pub duration_ms: u64,
}

/// Turns pointer down/move/up into a normalized drag session.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    session: Option<DragSession>,
    suppress_click: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session at `coord`, replacing any session that was still open.
    pub fn start(&mut self, coord: f32, now_ms: u64) {
        if self.session.is_some() {
            ctrace!("GestureTracker: restarting an open session");
        }
        self.session = Some(DragSession {
            start: coord,
            last: coord,
            start_ms: now_ms,
            delta: 0.0,
            velocity: 0.0,
        });
        self.suppress_click = false;
    }

    /// Returns the cumulative delta, or `None` when no session is open.
    pub fn update(&mut self, coord: f32) -> Option<f32> {
        let session = self.session.as_mut()?;
        session.velocity = coord - session.last;
        session.last = coord;
        session.delta = coord - session.start;
        Some(session.delta)
    }

    /// Closes the session. Returns `None` when no session is open.
    pub fn release(&mut self, now_ms: u64) -> Option<DragRelease> {
        let session = self.session.take()?;
        // A click dispatched right after a drag that moved belongs to the drag.
        self.suppress_click = session.delta != 0.0;
        Some(DragRelease {
            delta: session.delta,
            velocity: session.velocity,
            duration_ms: now_ms.saturating_sub(session.start_ms),
        })
    }

    /// Drops the session without producing a release. Safe to call when idle.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Whether a click arriving now should be dropped; consumes the post-drag suppression.
    pub fn take_click_suppression(&mut self) -> bool {
        self.is_active() || core::mem::take(&mut self.suppress_click)
    }
}
