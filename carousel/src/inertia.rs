use crate::{FrameId, Scheduler};

/// Release velocities below this skip momentum and snap back directly.
pub const INERTIA_START_VELOCITY: f32 = 0.1;
/// The momentum loop ends once the velocity drops below this.
pub const INERTIA_STOP_VELOCITY: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InertiaStep {
    /// The offset to render now, without a transition.
    Moved(f32),
    /// Momentum is spent; the caller snaps back.
    Settled,
}

/// Frame-driven momentum after a drag release.
///
/// Each frame multiplies the velocity by the deceleration factor and adds it to the offset.
/// At most one frame request is outstanding; a new launch or [`InertiaSimulator::cancel`]
/// withdraws it.
#[derive(Clone, Copy, Debug)]
pub struct InertiaSimulator {
    deceleration: f32,
    velocity: f32,
    offset: f32,
    frame: Option<FrameId>,
}

impl InertiaSimulator {
    pub fn new(deceleration: f32) -> Self {
        Self {
            deceleration,
            velocity: 0.0,
            offset: 0.0,
            frame: None,
        }
    }

    pub fn should_launch(velocity: f32) -> bool {
        magnitude(velocity) >= INERTIA_START_VELOCITY
    }

    pub fn launch(
        &mut self,
        scheduler: &mut (impl Scheduler + ?Sized),
        offset: f32,
        velocity: f32,
    ) {
        self.cancel(scheduler);
        ctrace!(offset, velocity, "InertiaSimulator::launch");
        self.offset = offset;
        self.velocity = velocity;
        self.frame = Some(scheduler.request_frame());
    }

    /// Advances one frame. Returns `None` for a frame this simulator did not request.
    pub fn on_frame(
        &mut self,
        scheduler: &mut (impl Scheduler + ?Sized),
        id: FrameId,
    ) -> Option<InertiaStep> {
        if self.frame != Some(id) {
            return None;
        }
        self.frame = None;

        if magnitude(self.velocity) < INERTIA_STOP_VELOCITY {
            self.velocity = 0.0;
            return Some(InertiaStep::Settled);
        }

        self.velocity *= self.deceleration;
        self.offset += self.velocity;
        self.frame = Some(scheduler.request_frame());
        Some(InertiaStep::Moved(self.offset))
    }

    /// Withdraws the pending frame. Safe to call when not running.
    pub fn cancel(&mut self, scheduler: &mut (impl Scheduler + ?Sized)) {
        if let Some(frame) = self.frame.take() {
            ctrace!(frame = frame.0, "InertiaSimulator::cancel");
            scheduler.cancel_frame(frame);
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

fn magnitude(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
