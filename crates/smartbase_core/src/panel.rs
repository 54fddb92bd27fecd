use crate::scheduler::{Scheduler, TimerHandle, TimerKey};

/// Exit animation length; the panel content unmounts when it elapses.
pub const PANEL_EXIT_MS: u64 = 400;

/// Frame callbacks spent in `Entering` before the panel becomes `Visible`.
pub const PANEL_ENTER_FRAMES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Hidden,
    Entering,
    Visible,
    Exiting,
}

impl PanelPhase {
    pub fn is_mounted(self) -> bool {
        self != PanelPhase::Hidden
    }
}

/// Mount/unmount lifecycle of the creation panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelController {
    phase: PanelPhase,
    frames_seen: u8,
    pending: Option<TimerHandle>,
}

impl PanelController {
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, PanelPhase::Entering | PanelPhase::Visible)
    }

    /// Starts the enter sequence. Reopening during `Exiting` cancels the
    /// pending unmount.
    pub fn open(&mut self, scheduler: &mut Scheduler) -> bool {
        match self.phase {
            PanelPhase::Entering | PanelPhase::Visible => false,
            PanelPhase::Hidden | PanelPhase::Exiting => {
                self.cancel_pending(scheduler);
                self.phase = PanelPhase::Entering;
                self.frames_seen = 0;
                self.pending = Some(scheduler.request_frame(TimerKey::PanelFrame));
                true
            }
        }
    }

    /// Starts the exit sequence. A close during `Entering` still runs the full
    /// exit animation.
    pub fn close(&mut self, scheduler: &mut Scheduler) -> bool {
        match self.phase {
            PanelPhase::Hidden | PanelPhase::Exiting => false,
            PanelPhase::Entering | PanelPhase::Visible => {
                self.cancel_pending(scheduler);
                self.phase = PanelPhase::Exiting;
                self.pending = Some(scheduler.schedule(PANEL_EXIT_MS, TimerKey::PanelExit));
                true
            }
        }
    }

    pub fn toggle(&mut self, scheduler: &mut Scheduler) -> bool {
        if self.is_open() {
            self.close(scheduler)
        } else {
            self.open(scheduler)
        }
    }

    pub(crate) fn on_frame(&mut self, scheduler: &mut Scheduler, handle: TimerHandle) -> bool {
        if self.phase != PanelPhase::Entering || self.pending != Some(handle) {
            return false;
        }
        self.frames_seen += 1;
        if self.frames_seen >= PANEL_ENTER_FRAMES {
            self.pending = None;
            self.phase = PanelPhase::Visible;
        } else {
            self.pending = Some(scheduler.request_frame(TimerKey::PanelFrame));
        }
        true
    }

    pub(crate) fn on_exit_elapsed(&mut self, handle: TimerHandle) -> bool {
        if self.phase != PanelPhase::Exiting || self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        self.phase = PanelPhase::Hidden;
        true
    }

    fn cancel_pending(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}
