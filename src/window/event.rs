//! Event types for input handling
//!
//! Platform-independent events delivered to the frame callback.

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
}

impl Key {
    /// Convert from winit key.
    pub fn from_winit(key: &winit::keyboard::Key) -> Option<Self> {
        use winit::keyboard::{Key as WKey, NamedKey};

        match key {
            WKey::Named(NamedKey::Escape) => Some(Key::Escape),
            WKey::Named(NamedKey::Enter) => Some(Key::Enter),
            _ => None,
        }
    }
}

/// An input or window event.
///
/// Positions are in physical pixels relative to the window's client area.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The pointer moved inside the window.
    PointerMove { position: (f32, f32) },
    /// The pointer entered the window. `None` when the platform does not
    /// report where; the next `PointerMove` is then the entry point.
    PointerEnter { position: Option<(f32, f32)> },
    /// The pointer left the window, with its last known position.
    PointerLeave { position: Option<(f32, f32)> },
    /// The window was resized (physical pixels).
    Resize { width: u32, height: u32 },
    /// The display scale factor changed.
    ScaleFactorChanged { scale_factor: f64 },
    /// A key was pressed.
    KeyPress { key: Key },
}
