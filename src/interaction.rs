//! Drag-to-rotate with automatic rotation while idle.
//!
//! [`RotationController`] owns the whole animation state of the yaw: the
//! target the user (or the auto rotation) steers towards, the smoothed value
//! that is actually applied, and the two flags of the interaction state
//! machine. Input handlers and the per-frame step both go through it, so there
//! is no global state.
//!
//! Releasing the pointer does not restart the auto rotation immediately. It
//! schedules a check [`AUTO_ROTATE_COOLDOWN`] later; when the check comes due
//! it re-enables auto rotation only if no drag is active at that moment.
//! Checks are never cancelled, a new press simply makes them find a drag in
//! progress.

use std::collections::VecDeque;

use instant::{Duration, Instant};

/// Yaw added per frame while rotating automatically, in radians.
pub const AUTO_ROTATE_STEP: f32 = 0.004;
/// Yaw per logical pixel of horizontal pointer travel, in radians.
pub const DRAG_SENSITIVITY: f32 = 0.008;
/// Fraction of the remaining distance to the target covered each frame.
pub const SMOOTHING: f32 = 0.08;
pub const AUTO_ROTATE_COOLDOWN: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    AutoRotate,
    UserDragging,
    /// Released, waiting for a cooldown check to re-enable auto rotation.
    CooldownToAutoRotate,
}

/// Cursor to show over the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Grab,
    Grabbing,
}

#[derive(Clone, Debug)]
pub struct RotationController {
    target_yaw: f32,
    applied_yaw: f32,
    dragging: bool,
    auto_rotate: bool,
    last_x: f64,
    /// Due times of the scheduled cooldown checks, oldest first.
    pending_checks: VecDeque<Duration>,
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationController {
    pub fn new() -> Self {
        Self {
            target_yaw: 0.0,
            applied_yaw: 0.0,
            dragging: false,
            auto_rotate: true,
            last_x: 0.0,
            pending_checks: VecDeque::new(),
        }
    }

    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    pub fn applied_yaw(&self) -> f32 {
        self.applied_yaw
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pending_checks(&self) -> usize {
        self.pending_checks.len()
    }

    pub fn mode(&self) -> RotationMode {
        if self.dragging {
            RotationMode::UserDragging
        } else if self.auto_rotate {
            RotationMode::AutoRotate
        } else {
            RotationMode::CooldownToAutoRotate
        }
    }

    pub fn cursor(&self) -> CursorHint {
        if self.dragging {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }

    /// Pointer or touch went down on the stage at logical x coordinate `x`.
    pub fn press(&mut self, x: f64, now: Duration) {
        self.run_due_checks(now);
        let before = self.mode();
        self.dragging = true;
        self.auto_rotate = false;
        self.last_x = x;
        self.log_transition(before);
    }

    /// Pointer moved to logical x coordinate `x`. Ignored unless dragging.
    pub fn move_to(&mut self, x: f64, now: Duration) {
        self.run_due_checks(now);
        if !self.dragging {
            return;
        }
        let delta = x - self.last_x;
        self.target_yaw += delta as f32 * DRAG_SENSITIVITY;
        self.last_x = x;
    }

    /// Pointer or touch was released anywhere.
    pub fn release(&mut self, now: Duration) {
        self.run_due_checks(now);
        let before = self.mode();
        self.dragging = false;
        self.pending_checks.push_back(now + AUTO_ROTATE_COOLDOWN);
        self.log_transition(before);
    }

    /// One frame: runs the checks that came due, advances the auto rotation
    /// and moves the applied yaw one smoothing step towards the target.
    /// Returns the yaw to apply to the character.
    pub fn advance(&mut self, now: Duration) -> f32 {
        self.run_due_checks(now);
        if self.auto_rotate {
            self.target_yaw += AUTO_ROTATE_STEP;
        }
        self.applied_yaw += (self.target_yaw - self.applied_yaw) * SMOOTHING;
        self.applied_yaw
    }

    fn run_due_checks(&mut self, now: Duration) {
        while self.pending_checks.front().is_some_and(|due| *due <= now) {
            self.pending_checks.pop_front();
            if !self.dragging && !self.auto_rotate {
                self.auto_rotate = true;
                log::debug!("Cooldown elapsed, rotating automatically again");
            }
        }
    }

    fn log_transition(&self, before: RotationMode) {
        let after = self.mode();
        if before != after {
            log::debug!("Rotation mode {:?} -> {:?}", before, after);
        }
    }
}

/// Pointer input in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Moved { x: f64 },
    Pressed,
    Released,
    TouchStarted { id: u64, x: f64 },
    TouchMoved { id: u64, x: f64 },
    TouchEnded { id: u64 },
}

/// Feeds [`PointerInput`] into a [`RotationController`].
///
/// A mouse press starts the drag where the pointer was last seen. Only the
/// first finger down drives a touch drag; other fingers are ignored until it
/// is lifted.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    pointer_x: f64,
    active_touch: Option<u64>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_touch(&self) -> Option<u64> {
        self.active_touch
    }

    /// Applies `input` and returns the new cursor hint if the input changed it.
    pub fn apply(
        &mut self,
        controller: &mut RotationController,
        input: PointerInput,
        now: Duration,
    ) -> Option<CursorHint> {
        let before = controller.cursor();
        match input {
            PointerInput::Moved { x } => {
                self.pointer_x = x;
                controller.move_to(x, now);
            }
            PointerInput::Pressed => controller.press(self.pointer_x, now),
            PointerInput::Released => controller.release(now),
            PointerInput::TouchStarted { id, x } if self.active_touch.is_none() => {
                self.active_touch = Some(id);
                controller.press(x, now);
            }
            PointerInput::TouchMoved { id, x } if self.active_touch == Some(id) => {
                controller.move_to(x, now);
            }
            PointerInput::TouchEnded { id } if self.active_touch == Some(id) => {
                self.active_touch = None;
                controller.release(now);
            }
            _ => {}
        }
        let after = controller.cursor();
        (before != after).then_some(after)
    }
}

/// Wall-clock time since the stage started.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::start()
    }
}
