//! Frame scheduling
//!
//! The host decides when a frame happens (vsync-paced redraws in a window,
//! a plain loop in tests). [`AnimationLoop`] only counts frames and owns the
//! stop flag so either side can end the loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle that stops an [`AnimationLoop`].
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    /// Request the loop to stop before its next tick.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Whether a stop was requested.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// A cancellable per-frame loop.
#[derive(Debug, Default)]
pub struct AnimationLoop {
    stop: StopHandle,
    frame: u64,
}

impl AnimationLoop {
    /// Create a running loop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a handle that can stop this loop.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Whether ticks still run.
    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame unless stopped. Returns whether the frame ran.
    pub fn tick<F: FnOnce(u64)>(&mut self, frame: F) -> bool {
        if !self.is_running() {
            return false;
        }
        frame(self.frame);
        self.frame += 1;
        true
    }

    /// Drive frames back to back until stopped.
    ///
    /// Meant for headless harnesses; windowed hosts call [`tick`](Self::tick)
    /// from their redraw callback instead.
    pub fn run<F: FnMut(u64)>(&mut self, mut frame: F) {
        while self.tick(&mut frame) {}
        tracing::debug!(frames = self.frame, "animation loop stopped");
    }
}
