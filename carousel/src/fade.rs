use crate::{Scheduler, Surface, TimerId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum FadePhase {
    #[default]
    Idle,
    /// Content hidden; waiting to swap in `target`.
    FadingOut { target: usize, timer: TimerId },
    /// Content swapped; waiting to show it again.
    Revealing { timer: TimerId },
}

/// Content-panel cross-fade: hide, swap after `fade_out_ms`, show after `fade_in_delay_ms`.
#[derive(Clone, Copy, Debug)]
pub struct ContentFade {
    fade_out_ms: u64,
    fade_in_delay_ms: u64,
    phase: FadePhase,
}

impl ContentFade {
    pub fn new(fade_out_ms: u64, fade_in_delay_ms: u64) -> Self {
        Self {
            fade_out_ms,
            fade_in_delay_ms,
            phase: FadePhase::Idle,
        }
    }

    /// Starts fading to `target`, cancelling an unfinished fade.
    pub fn begin<K>(
        &mut self,
        host: &mut (impl Surface<K> + Scheduler + ?Sized),
        target: usize,
    ) {
        self.cancel(host);
        host.set_content_visible(false);
        let timer = host.set_timeout(self.fade_out_ms);
        self.phase = FadePhase::FadingOut { target, timer };
    }

    /// Returns `true` when `id` belonged to this fade.
    pub fn on_timer<K>(
        &mut self,
        host: &mut (impl Surface<K> + Scheduler + ?Sized),
        id: TimerId,
    ) -> bool {
        match self.phase {
            FadePhase::FadingOut { target, timer } if timer == id => {
                host.show_content(target);
                let timer = host.set_timeout(self.fade_in_delay_ms);
                self.phase = FadePhase::Revealing { timer };
                true
            }
            FadePhase::Revealing { timer } if timer == id => {
                host.set_content_visible(true);
                self.phase = FadePhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self, scheduler: &mut (impl Scheduler + ?Sized)) {
        match core::mem::take(&mut self.phase) {
            FadePhase::FadingOut { timer, .. } | FadePhase::Revealing { timer } => {
                scheduler.clear_timer(timer);
            }
            FadePhase::Idle => {}
        }
    }
}
