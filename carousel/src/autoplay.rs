use crate::{AutoPlayMode, Scheduler, TimerId};

/// Periodic auto-advance with at most one live interval.
///
/// `enabled` is the configured intent (`start`/`stop`). Interaction pauses and resumes the
/// timer without touching the intent; hovering holds it paused until the pointer leaves.
#[derive(Clone, Copy, Debug)]
pub struct AutoPlayScheduler {
    interval_ms: u64,
    mode: AutoPlayMode,
    enabled: bool,
    exhausted: bool,
    held: bool,
    timer: Option<TimerId>,
}

impl AutoPlayScheduler {
    pub fn new(enabled: bool, interval_ms: u64, mode: AutoPlayMode) -> Self {
        Self {
            interval_ms,
            mode,
            enabled,
            exhausted: false,
            held: false,
            timer: None,
        }
    }

    /// Enables auto-play and (re)arms the interval. Clears a live timer first.
    pub fn start(&mut self, scheduler: &mut (impl Scheduler + ?Sized)) {
        self.enabled = true;
        self.exhausted = false;
        if self.held {
            self.disarm(scheduler);
            return;
        }
        self.arm(scheduler);
    }

    /// Disables auto-play. Safe to call any number of times.
    pub fn stop(&mut self, scheduler: &mut (impl Scheduler + ?Sized)) {
        self.enabled = false;
        self.disarm(scheduler);
    }

    /// Clears the live timer without changing the configured intent.
    pub fn pause(&mut self, scheduler: &mut (impl Scheduler + ?Sized)) {
        self.disarm(scheduler);
    }

    /// Arms a fresh interval if auto-play is enabled, not held and not exhausted.
    pub fn resume(&mut self, scheduler: &mut (impl Scheduler + ?Sized)) {
        if self.enabled && !self.held && !self.exhausted {
            self.arm(scheduler);
        }
    }

    /// Marks the pointer as over (or off) the carousel. Resumes are refused while held; the
    /// caller pauses or resumes around this.
    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    /// Called after a committed change; one-shot auto-play stops for good at the last position.
    pub fn on_position(
        &mut self,
        scheduler: &mut (impl Scheduler + ?Sized),
        position: usize,
        last: usize,
    ) {
        if self.mode == AutoPlayMode::OnceForward && position >= last && !self.exhausted {
            cdebug!(position, "AutoPlayScheduler: one-shot auto-play finished");
            self.exhausted = true;
            self.disarm(scheduler);
        }
    }

    pub fn owns(&self, id: TimerId) -> bool {
        self.timer == Some(id)
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn arm(&mut self, scheduler: &mut (impl Scheduler + ?Sized)) {
        self.disarm(scheduler);
        let id = scheduler.set_interval(self.interval_ms);
        ctrace!(timer = id.0, interval_ms = self.interval_ms, "AutoPlayScheduler: armed");
        self.timer = Some(id);
    }

    fn disarm(&mut self, scheduler: &mut (impl Scheduler + ?Sized)) {
        if let Some(id) = self.timer.take() {
            scheduler.clear_timer(id);
        }
    }
}
