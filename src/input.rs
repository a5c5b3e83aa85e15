//! Pointer tracking
//!
//! Turns pointer events on the render container into the smoothed mouse
//! positions fed to the distortion shader.

use glam::Vec2;

/// Ease factor while the pointer is moving.
pub const ACTIVE_EASE: f32 = 0.04;
/// Ease factor on enter, on leave, and before any input.
pub const IDLE_EASE: f32 = 0.02;

/// Bounding box of the render container, in the same units as pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    /// A container anchored at the origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Normalize a pointer position to container space. Not clamped.
    pub fn normalize(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            (position.x - self.left) / self.width,
            (position.y - self.top) / self.height,
        )
    }
}

/// How pointer enter/leave events are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputWiring {
    /// Each event goes to its own handler.
    #[default]
    Dedicated,
    /// Enter and leave are treated as moves.
    MoveOnly,
}

/// Easing settings for the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseSettings {
    pub active: f32,
    pub idle: f32,
}

impl Default for EaseSettings {
    fn default() -> Self {
        Self {
            active: ACTIVE_EASE,
            idle: IDLE_EASE,
        }
    }
}

/// Smoothed mouse state.
///
/// Positions are normalized to the container with y pointing down, matching
/// pointer coordinates. The Y flip to texture space happens in
/// [`InputTracker::mouse_uniform`].
#[derive(Debug, Clone)]
pub struct InputTracker {
    /// Smoothed position used for rendering.
    pub current: Vec2,
    /// Latest raw position.
    pub target: Vec2,
    /// `target` before the most recent move.
    pub previous: Vec2,
    /// Current smoothing coefficient.
    pub ease_factor: f32,
    ease: EaseSettings,
    wiring: InputWiring,
    pending_enter: bool,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(EaseSettings::default(), InputWiring::default())
    }
}

impl InputTracker {
    /// Create a tracker centred in the container.
    pub fn new(ease: EaseSettings, wiring: InputWiring) -> Self {
        let center = Vec2::splat(0.5);
        Self {
            current: center,
            target: center,
            previous: center,
            ease_factor: ease.idle,
            ease,
            wiring,
            pending_enter: false,
        }
    }

    /// Get the event wiring.
    pub fn wiring(&self) -> InputWiring {
        self.wiring
    }

    /// Pointer moved to `position` inside `rect`.
    pub fn pointer_move(&mut self, rect: &ContainerRect, position: Vec2) {
        if self.pending_enter {
            self.pending_enter = false;
            self.snap(rect.normalize(position));
            return;
        }

        self.ease_factor = self.ease.active;
        self.previous = self.target;
        self.target = rect.normalize(position);
    }

    /// Pointer entered the container. `position` is `None` when the host
    /// does not report where; the snap then happens on the next move.
    pub fn pointer_enter(&mut self, rect: &ContainerRect, position: Option<Vec2>) {
        match self.wiring {
            InputWiring::MoveOnly => {
                if let Some(position) = position {
                    self.pointer_move(rect, position);
                }
            }
            InputWiring::Dedicated => {
                self.ease_factor = self.ease.idle;
                match position {
                    Some(position) => self.snap(rect.normalize(position)),
                    None => self.pending_enter = true,
                }
            }
        }
    }

    /// Pointer left the container. `position` is the last known position.
    pub fn pointer_leave(&mut self, rect: &ContainerRect, position: Option<Vec2>) {
        match self.wiring {
            InputWiring::MoveOnly => {
                if let Some(position) = position {
                    self.pointer_move(rect, position);
                }
            }
            InputWiring::Dedicated => {
                self.ease_factor = self.ease.idle;
                self.pending_enter = false;
                self.target = self.previous;
            }
        }
    }

    fn snap(&mut self, position: Vec2) {
        self.current = position;
        self.target = position;
    }

    /// Advance `current` one step toward `target`.
    pub fn tick(&mut self) {
        self.current += (self.target - self.current) * self.ease_factor;
    }

    /// `u_mouse` value: current position in texture space.
    pub fn mouse_uniform(&self) -> Vec2 {
        Vec2::new(self.current.x, 1.0 - self.current.y)
    }

    /// `u_prevMouse` value: previous position in texture space.
    pub fn prev_mouse_uniform(&self) -> Vec2 {
        Vec2::new(self.previous.x, 1.0 - self.previous.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> ContainerRect {
        ContainerRect::from_size(800.0, 600.0)
    }

    #[test]
    fn test_two_ticks_half_ease() {
        let mut tracker = InputTracker::default();
        tracker.current = Vec2::ZERO;
        tracker.target = Vec2::ONE;
        tracker.ease_factor = 0.5;

        tracker.tick();
        assert_eq!(tracker.current, Vec2::splat(0.5));
        tracker.tick();
        assert_eq!(tracker.current, Vec2::splat(0.75));
    }

    #[test]
    fn test_smoothing_never_overshoots() {
        for ease in [0.01, 0.04, 0.3, 0.5, 0.99, 1.0] {
            let mut tracker = InputTracker::default();
            tracker.current = Vec2::ZERO;
            tracker.target = Vec2::new(1.0, 0.25);
            tracker.ease_factor = ease;

            let mut last_gap = (tracker.target - tracker.current).length();
            for _ in 0..200 {
                tracker.tick();
                assert!(tracker.current.x <= 1.0 && tracker.current.y <= 0.25);
                let gap = (tracker.target - tracker.current).length();
                assert!(gap <= last_gap, "gap grew with ease {}", ease);
                last_gap = gap;
            }
        }
    }

    #[test]
    fn test_move_normalizes_and_keeps_previous() {
        let mut tracker = InputTracker::default();
        tracker.pointer_move(&rect(), Vec2::new(200.0, 150.0));
        assert_eq!(tracker.target, Vec2::new(0.25, 0.25));
        assert_eq!(tracker.previous, Vec2::splat(0.5));
        assert_eq!(tracker.ease_factor, ACTIVE_EASE);

        tracker.pointer_move(&rect(), Vec2::new(800.0, 0.0));
        assert_eq!(tracker.previous, Vec2::new(0.25, 0.25));
        assert_eq!(tracker.target, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_move_is_not_clamped() {
        let mut tracker = InputTracker::default();
        tracker.pointer_move(&rect(), Vec2::new(-80.0, 660.0));
        assert!(tracker.target.x < 0.0);
        assert!(tracker.target.y > 1.0);
    }

    #[test]
    fn test_rect_offset() {
        let rect = ContainerRect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(rect.normalize(Vec2::new(200.0, 100.0)), Vec2::splat(0.5));
    }

    #[test]
    fn test_enter_snaps() {
        let mut tracker = InputTracker::default();
        tracker.ease_factor = ACTIVE_EASE;
        tracker.pointer_enter(&rect(), Some(Vec2::new(400.0, 150.0)));

        assert_eq!(tracker.ease_factor, IDLE_EASE);
        assert_eq!(tracker.current, Vec2::new(0.5, 0.25));
        assert_eq!(tracker.target, Vec2::new(0.5, 0.25));
    }

    #[test]
    fn test_enter_without_position_snaps_on_next_move() {
        let mut tracker = InputTracker::default();
        tracker.pointer_enter(&rect(), None);
        tracker.pointer_move(&rect(), Vec2::new(0.0, 0.0));

        assert_eq!(tracker.current, Vec2::ZERO);
        assert_eq!(tracker.target, Vec2::ZERO);
        assert_eq!(tracker.ease_factor, IDLE_EASE);

        // Later moves behave normally.
        tracker.pointer_move(&rect(), Vec2::new(800.0, 600.0));
        assert_eq!(tracker.previous, Vec2::ZERO);
        assert_eq!(tracker.ease_factor, ACTIVE_EASE);
    }

    #[test]
    fn test_reentry_ignores_exit_point() {
        let mut tracker = InputTracker::default();
        tracker.pointer_move(&rect(), Vec2::new(40.0, 30.0));
        tracker.pointer_leave(&rect(), Some(Vec2::new(40.0, 30.0)));

        // Re-entering on the far side: the first move is the entry point.
        tracker.pointer_enter(&rect(), None);
        assert_eq!(tracker.current, Vec2::splat(0.5));
        tracker.pointer_move(&rect(), Vec2::new(760.0, 570.0));
        tracker.tick();

        assert!((tracker.current - Vec2::splat(0.95)).length() < 1e-6);
        assert_eq!(tracker.target, tracker.current);
    }

    #[test]
    fn test_leave_restores_previous() {
        let mut tracker = InputTracker::default();
        tracker.pointer_move(&rect(), Vec2::new(200.0, 150.0));
        tracker.pointer_move(&rect(), Vec2::new(600.0, 450.0));
        tracker.pointer_leave(&rect(), Some(Vec2::new(800.0, 450.0)));

        assert_eq!(tracker.target, Vec2::new(0.25, 0.25));
        assert_eq!(tracker.ease_factor, IDLE_EASE);
    }

    #[test]
    fn test_move_only_wiring() {
        let mut tracker = InputTracker::new(EaseSettings::default(), InputWiring::MoveOnly);
        tracker.pointer_enter(&rect(), Some(Vec2::new(200.0, 150.0)));
        assert_eq!(tracker.ease_factor, ACTIVE_EASE);
        assert_eq!(tracker.current, Vec2::splat(0.5));
        assert_eq!(tracker.target, Vec2::new(0.25, 0.25));

        tracker.pointer_leave(&rect(), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(tracker.previous, Vec2::new(0.25, 0.25));
        assert_eq!(tracker.target, Vec2::ZERO);
    }

    #[test]
    fn test_uniforms_flip_y() {
        let mut tracker = InputTracker::default();
        tracker.current = Vec2::new(0.2, 0.1);
        tracker.previous = Vec2::new(0.7, 0.4);
        assert!((tracker.mouse_uniform() - Vec2::new(0.2, 0.9)).length() < 1e-6);
        assert!((tracker.prev_mouse_uniform() - Vec2::new(0.7, 0.6)).length() < 1e-6);
    }

    #[test]
    fn test_centre_move_converges() {
        let mut tracker = InputTracker::default();
        tracker.current = Vec2::ZERO;
        tracker.pointer_move(&rect(), Vec2::new(400.0, 300.0));
        assert_eq!(tracker.target, Vec2::splat(0.5));

        for _ in 0..1000 {
            tracker.tick();
        }
        assert!((tracker.current - Vec2::splat(0.5)).length() < 1e-4);
    }
}
