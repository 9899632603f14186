use crate::phase::TimePhase;

/// Host-provided per-frame scheduling primitives.
///
/// On a desktop host `schedule_frame` maps to requesting a redraw before the
/// next repaint; `cancel_frame` revokes a pending request where the host
/// supports it (a no-op cancel is legal: the scheduler's Stopped state
/// already guards the render call).
pub trait FrameHost {
    type Handle;

    /// Ask the host to deliver one frame callback. Returns an opaque handle.
    fn schedule_frame(&mut self) -> Self::Handle;

    /// Revoke a previously scheduled callback.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Lifecycle state of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Context handed to the per-frame render callback.
#[derive(Debug)]
pub struct FrameTick {
    /// The phase for this frame, already advanced. Narrowed to `f32` for the
    /// render path; the scheduler's own accumulator is wider.
    pub phase: f32,
    stop_requested: bool,
}

impl FrameTick {
    /// Ask the scheduler to stop after this callback returns, instead of
    /// rescheduling. This is how a frame callback stops the loop from within.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }
}

/// Self-perpetuating cooperative frame loop.
///
/// Each delivered frame advances the phase, runs the render callback exactly
/// once, and reschedules itself while Running. Frames never overlap: the next
/// one cannot be delivered until this callback returns. If the callback
/// unwinds, the reschedule is skipped and the animation halts silently rather
/// than spinning on a repeating failure.
pub struct FrameScheduler<H: FrameHost> {
    host: H,
    state: LoopState,
    pending: Option<H::Handle>,
    phase: TimePhase,
}

impl<H: FrameHost> FrameScheduler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: LoopState::Stopped,
            pending: None,
            phase: TimePhase::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn phase(&self) -> f64 {
        self.phase.value()
    }

    /// Transition Stopped -> Running and schedule the first frame.
    /// A second `start` on a running loop is a no-op.
    pub fn start(&mut self) {
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        self.pending = Some(self.host.schedule_frame());
        tracing::info!("backdrop frame loop started");
    }

    /// Transition to Stopped and cancel any pending callback. Idempotent;
    /// safe from inside or outside a frame callback.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        if self.state == LoopState::Running {
            tracing::info!(phase = self.phase.value(), "backdrop frame loop stopped");
        }
        self.state = LoopState::Stopped;
    }

    /// Deliver one host frame callback.
    ///
    /// No-op when Stopped, so a callback that raced a `stop()` draws nothing.
    pub fn on_frame<F: FnOnce(&mut FrameTick)>(&mut self, render: F) {
        if self.state != LoopState::Running {
            return;
        }
        self.pending = None;

        let mut tick = FrameTick {
            phase: self.phase.advance() as f32,
            stop_requested: false,
        };
        render(&mut tick);

        if tick.stop_requested {
            self.stop();
        } else if self.state == LoopState::Running {
            self.pending = Some(self.host.schedule_frame());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame host that counts schedule/cancel calls and hands out sequential
    /// handles.
    #[derive(Debug, Default)]
    struct CountingHost {
        scheduled: u32,
        cancelled: Vec<u32>,
    }

    impl FrameHost for CountingHost {
        type Handle = u32;

        fn schedule_frame(&mut self) -> u32 {
            self.scheduled += 1;
            self.scheduled
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.cancelled.push(handle);
        }
    }

    #[test]
    fn starts_stopped_and_ignores_frames() {
        let mut scheduler = FrameScheduler::new(CountingHost::default());
        let mut rendered = 0;
        scheduler.on_frame(|_| rendered += 1);
        assert_eq!(rendered, 0);
        assert!(!scheduler.is_running());
    }

    #[test]
    fn start_schedules_exactly_one_frame() {
        let mut scheduler = FrameScheduler::new(CountingHost::default());
        scheduler.start();
        scheduler.start();
        assert_eq!(scheduler.host.scheduled, 1);
    }

    #[test]
    fn frames_advance_phase_and_reschedule() {
        let mut scheduler = FrameScheduler::new(CountingHost::default());
        scheduler.start();

        let mut phases = Vec::new();
        for _ in 0..3 {
            scheduler.on_frame(|tick| phases.push(tick.phase));
        }

        assert_eq!(phases.len(), 3);
        assert!(phases.windows(2).all(|w| w[1] > w[0]));
        // First frame from start() plus one reschedule per delivered frame.
        assert_eq!(scheduler.host.scheduled, 4);
    }

    #[test]
    fn stop_cancels_pending_and_is_idempotent() {
        let mut scheduler = FrameScheduler::new(CountingHost::default());
        scheduler.start();
        scheduler.stop();
        scheduler.stop();

        assert_eq!(scheduler.host.cancelled, vec![1]);

        let mut rendered = 0;
        scheduler.on_frame(|_| rendered += 1);
        assert_eq!(rendered, 0);
    }

    #[test]
    fn stop_requested_inside_callback_halts_the_loop() {
        let mut scheduler = FrameScheduler::new(CountingHost::default());
        scheduler.start();

        scheduler.on_frame(FrameTick::request_stop);

        assert!(!scheduler.is_running());
        // No reschedule after the in-frame stop.
        assert_eq!(scheduler.host.scheduled, 1);
        // The delivered frame's handle was consumed, not cancelled.
        assert!(scheduler.host.cancelled.is_empty());
    }

    #[test]
    fn restart_after_stop_resumes_without_rewinding_phase() {
        let mut scheduler = FrameScheduler::new(CountingHost::default());
        scheduler.start();
        scheduler.on_frame(|_| {});
        let phase_at_stop = scheduler.phase();
        scheduler.stop();

        scheduler.start();
        let mut resumed_phase = 0.0f32;
        scheduler.on_frame(|tick| resumed_phase = tick.phase);
        assert!(f64::from(resumed_phase) > phase_at_stop);
    }
}
