//! Input Module
//!
//! Adapters from physical devices to the logical actions the controllers read.
//! The controllers only see the [`InputSource`] trait; nothing here leaks into
//! the look or move math.
//!
//! # Example
//!
//! ```rust,ignore
//! use first_person_engine::input::{InputFrame, KeyboardMouseInput, KeyCode};
//!
//! let mut keyboard = KeyboardMouseInput::new();
//!
//! // From the event loop
//! keyboard.handle_key(KeyCode::W, true);
//! keyboard.accumulate_mouse_delta(4.0, -2.0);
//!
//! // Once per tick
//! let frame = InputFrame::sample(&keyboard);
//! keyboard.end_frame();
//! ```

pub mod bindings;
pub mod cursor_manager;
pub mod gamepad;
pub mod keyboard;
pub mod source;

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings};
pub use cursor_manager::{CursorBackend, PointerCapture};
pub use gamepad::{DEFAULT_STICK_DEAD_ZONE, GamepadButtons, GamepadInput};
pub use keyboard::{KeyCode, KeyboardMouseInput};
pub use source::{AxisAction, ButtonAction, InputFrame, InputSource, LookDevice, NeutralInput};
