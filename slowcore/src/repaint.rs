//! Partial repaint controller
//!
//! egui is an immediate-mode GUI: every frame redraws everything.  On an
//! e-ink display each refresh is visible and slow, so apps should only
//! repaint when something actually changed.
//!
//! `RepaintController` sits between the app and egui's repaint scheduler.
//! It tracks *why* a repaint is needed:
//!
//! 1. **Input-driven** — user clicked, typed or scrolled.  egui wakes by itself.
//! 2. **State change** — the app mutated state outside of input.  Repaint once.
//! 3. **Deadline** — a transient marker (flash) must be cleared at a known
//!    instant.  Repaint once, at that instant.
//! 4. **Idle** — nothing happened.  Do *not* repaint.

use std::time::{Duration, Instant};

/// Deadlines closer than this are served by an immediate repaint.
const MIN_DEADLINE_DELAY: Duration = Duration::from_millis(4);

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (mouse move, key press, scroll).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
    /// A scheduled deadline was reached.
    Deadline,
}

/// Controls when the egui context should request repaints.
///
/// Call [`RepaintController::begin_frame`] at the top of `update()` and
/// [`RepaintController::end_frame`] at the bottom.
#[derive(Debug)]
pub struct RepaintController {
    needs_repaint: bool,
    deadline: Option<Instant>,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            deadline: None,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Request a repaint no later than `at`. Keeps the earliest of several requests.
    pub fn repaint_at(&mut self, at: Instant) {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(at),
            None => at,
        });
    }

    /// Pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    /// Call at the **start** of your `update()` method.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.raw_scroll_delta != egui::Vec2::ZERO
                || i.pointer.is_moving()
        });
        self.classify(had_input, Instant::now());
    }

    fn classify(&mut self, had_input: bool, now: Instant) {
        let deadline_reached = self.deadline.is_some_and(|d| d <= now);
        if deadline_reached {
            self.deadline = None;
        }

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else if deadline_reached {
            RepaintReason::Deadline
        } else {
            RepaintReason::Input
        };

        self.needs_repaint = false;
    }

    /// Call at the **end** of your `update()` method.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;

        if self.needs_repaint {
            ctx.request_repaint();
        } else if let Some(delay) = self.delay_until_deadline(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }

    fn delay_until_deadline(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(now).max(MIN_DEADLINE_DELAY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_init() {
        let mut rc = RepaintController::new();
        rc.classify(true, Instant::now());
        assert_eq!(rc.reason(), RepaintReason::Init);
    }

    #[test]
    fn test_repaint_at_keeps_earliest() {
        let now = Instant::now();
        let mut rc = RepaintController::new();
        rc.repaint_at(now + Duration::from_millis(380));
        rc.repaint_at(now + Duration::from_millis(100));
        rc.repaint_at(now + Duration::from_millis(900));
        assert_eq!(rc.deadline(), Some(now + Duration::from_millis(100)));
    }

    #[test]
    fn test_reached_deadline_is_consumed() {
        let now = Instant::now();
        let mut rc = RepaintController::new();
        rc.frame = 1;
        rc.repaint_at(now);
        rc.classify(false, now + Duration::from_millis(1));
        assert_eq!(rc.reason(), RepaintReason::Deadline);
        assert!(rc.deadline().is_none());
    }

    #[test]
    fn test_state_change_wins_over_deadline() {
        let now = Instant::now();
        let mut rc = RepaintController::new();
        rc.frame = 3;
        rc.mark_needs_repaint();
        rc.repaint_at(now + Duration::from_secs(1));
        rc.classify(false, now);
        assert_eq!(rc.reason(), RepaintReason::StateChange);
        assert!(rc.deadline().is_some());
    }

    #[test]
    fn test_delay_is_clamped() {
        let now = Instant::now();
        let mut rc = RepaintController::new();
        assert!(rc.delay_until_deadline(now).is_none());
        rc.repaint_at(now);
        assert_eq!(rc.delay_until_deadline(now + Duration::from_secs(1)), Some(MIN_DEADLINE_DELAY));
    }
}
