//! Cursor Manager Module
//!
//! Scoped pointer capture for first-person control.
//!
//! [`PointerCapture`] owns a [`CursorBackend`] and keeps it in sync with two
//! flags: whether capture is wanted (`activate`/`deactivate`) and whether the
//! window has focus. The pointer is captured only while both are true. Losing
//! focus releases it, regaining focus re-requests it, and dropping the
//! `PointerCapture` always releases it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use first_person_engine::input::PointerCapture;
//!
//! let mut capture = PointerCapture::new(window.clone());
//! capture.activate();
//!
//! // WindowEvent::Focused(false)
//! capture.handle_focus_lost();
//!
//! // Escape
//! capture.deactivate();
//! ```

use std::sync::Arc;

use log::{debug, warn};
use winit::window::{CursorGrabMode, Window};

/// Something that can grab and release the system pointer.
pub trait CursorBackend {
    /// Confine and hide the pointer.
    fn capture_pointer(&mut self) -> Result<(), String>;
    /// Free and show the pointer.
    fn release_pointer(&mut self) -> Result<(), String>;
}

fn grab_window(window: &Window) -> Result<(), String> {
    // Locked is not supported everywhere (X11); Confined is the fallback.
    window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        .map_err(|e| format!("{e}"))?;
    window.set_cursor_visible(false);
    Ok(())
}

fn release_window(window: &Window) -> Result<(), String> {
    window.set_cursor_visible(true);
    window
        .set_cursor_grab(CursorGrabMode::None)
        .map_err(|e| format!("{e}"))
}

impl CursorBackend for Window {
    fn capture_pointer(&mut self) -> Result<(), String> {
        grab_window(self)
    }

    fn release_pointer(&mut self) -> Result<(), String> {
        release_window(self)
    }
}

impl CursorBackend for Arc<Window> {
    fn capture_pointer(&mut self) -> Result<(), String> {
        grab_window(self)
    }

    fn release_pointer(&mut self) -> Result<(), String> {
        release_window(self)
    }
}

/// Pointer capture tied to activation and window focus.
#[derive(Debug)]
pub struct PointerCapture<B: CursorBackend> {
    backend: B,
    /// Capture requested by the game (FPS mode)
    active: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Whether the backend is currently holding the pointer
    captured: bool,
}

impl<B: CursorBackend> PointerCapture<B> {
    /// Wrap a backend. Starts inactive and focused; nothing is captured yet.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active: false,
            has_focus: true,
            captured: false,
        }
    }

    /// Request exclusive pointer capture.
    pub fn activate(&mut self) {
        self.active = true;
        self.sync();
    }

    /// Give the pointer back.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.sync();
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.deactivate();
        } else {
            self.activate();
        }
    }

    /// Window regained focus: re-capture if still active.
    pub fn handle_focus_gained(&mut self) {
        self.has_focus = true;
        self.sync();
    }

    /// Window lost focus: release so other windows get the pointer.
    /// The active flag is kept and restored on focus gain.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
        self.sync();
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Whether the backend is holding the pointer right now.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Capture is wanted only while active and focused.
    #[inline]
    pub fn should_capture(&self) -> bool {
        self.active && self.has_focus
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a human-readable status message for the current capture state.
    pub fn status_message(&self) -> &'static str {
        if self.active {
            "Pointer captured. ESC to release."
        } else {
            "Pointer released. Left-click to capture."
        }
    }

    fn sync(&mut self) {
        let want = self.should_capture();
        if want == self.captured {
            return;
        }

        let result = if want {
            self.backend.capture_pointer()
        } else {
            self.backend.release_pointer()
        };

        match result {
            Ok(()) => {
                self.captured = want;
                debug!("pointer {}", if want { "captured" } else { "released" });
            }
            Err(e) if want => {
                warn!("pointer capture failed: {e}");
            }
            Err(e) => {
                // The backend state is unknown; stop claiming the pointer.
                self.captured = false;
                warn!("pointer release failed: {e}");
            }
        }
    }
}

impl<B: CursorBackend> Drop for PointerCapture<B> {
    fn drop(&mut self) {
        if self.captured {
            if let Err(e) = self.backend.release_pointer() {
                warn!("pointer release on drop failed: {e}");
            }
            self.captured = false;
        }
    }
}
