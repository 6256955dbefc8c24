//! Keyboard and Mouse Input Module
//!
//! Adapts keyboard keys and raw mouse motion into the logical actions read by
//! the controllers.
//!
//! - Keys are mapped through [`KeyBindings`]
//! - Mouse motion accumulates between ticks and is used as fine-pointer look
//! - Arrow keys give a digital, coarse look axis
//! - Jump is edge-triggered: only the tick the key went down reports it
//!
//! Call [`KeyboardMouseInput::end_frame`] once after every tick.

use std::collections::HashSet;

use glam::Vec2;

use super::bindings::{InputAction, KeyBindings};
use super::source::{AxisAction, ButtonAction, InputSource, LookDevice};

/// Generic key codes, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    E,
    Q,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    /// Catch-all for unhandled keys
    Unknown,
}

impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as Winit;
        match key {
            Winit::KeyW => KeyCode::W,
            Winit::KeyA => KeyCode::A,
            Winit::KeyS => KeyCode::S,
            Winit::KeyD => KeyCode::D,
            Winit::KeyE => KeyCode::E,
            Winit::KeyQ => KeyCode::Q,
            Winit::Space => KeyCode::Space,
            Winit::ShiftLeft => KeyCode::ShiftLeft,
            Winit::ShiftRight => KeyCode::ShiftRight,
            Winit::ControlLeft => KeyCode::ControlLeft,
            Winit::ArrowUp => KeyCode::ArrowUp,
            Winit::ArrowDown => KeyCode::ArrowDown,
            Winit::ArrowLeft => KeyCode::ArrowLeft,
            Winit::ArrowRight => KeyCode::ArrowRight,
            Winit::Escape => KeyCode::Escape,
            _ => KeyCode::Unknown,
        }
    }
}

/// Keyboard + mouse adapter implementing [`InputSource`].
#[derive(Debug, Clone, Default)]
pub struct KeyboardMouseInput {
    bindings: KeyBindings,
    /// Keys currently held.
    held: HashSet<KeyCode>,
    /// Keys that went down since the last `end_frame`.
    went_down: HashSet<KeyCode>,
    /// Raw mouse motion since the last `end_frame` (x right, y down).
    mouse_delta: Vec2,
    /// Look device reported on the previous tick.
    last_look_device: LookDevice,
}

impl KeyboardMouseInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Update key state from a press or release.
    ///
    /// Returns `true` if the key is bound to an action.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            // Key repeat arrives as repeated presses; only the first one is an edge.
            if self.held.insert(key) {
                self.went_down.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
        self.bindings.get_action(key).is_some()
    }

    /// Accumulate raw mouse motion (device units, y down).
    #[inline]
    pub fn accumulate_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, dy);
    }

    /// Accumulated mouse motion since the last tick, without consuming it.
    #[inline]
    pub fn peek_mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Whether a key is currently held.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Clear per-tick state: mouse motion and key-down edges.
    ///
    /// Held keys persist until released.
    pub fn end_frame(&mut self) {
        self.last_look_device = self.look_device();
        self.mouse_delta = Vec2::ZERO;
        self.went_down.clear();
    }

    /// Drop all state, including held keys. Use on focus loss so keys
    /// released while unfocused do not stay stuck.
    pub fn reset(&mut self) {
        self.held.clear();
        self.went_down.clear();
        self.mouse_delta = Vec2::ZERO;
    }

    fn arrow_look(&self) -> Vec2 {
        Vec2::new(
            self.bindings
                .axis(InputAction::LookRight, InputAction::LookLeft, &self.held),
            self.bindings
                .axis(InputAction::LookUp, InputAction::LookDown, &self.held),
        )
    }

    fn any_look_key_held(&self) -> bool {
        InputAction::LOOK
            .iter()
            .any(|&action| self.bindings.is_action_in(action, &self.held))
    }
}

impl InputSource for KeyboardMouseInput {
    fn read_axis(&self, axis: AxisAction) -> Vec2 {
        match axis {
            AxisAction::Move => Vec2::new(
                self.bindings
                    .axis(InputAction::MoveRight, InputAction::MoveLeft, &self.held),
                self.bindings
                    .axis(InputAction::MoveForward, InputAction::MoveBack, &self.held),
            ),
            AxisAction::Look => match self.look_device() {
                // Screen y grows downward; look y is "up is positive".
                LookDevice::FinePointer => Vec2::new(self.mouse_delta.x, -self.mouse_delta.y),
                LookDevice::Coarse => self.arrow_look(),
            },
        }
    }

    fn pressed_this_frame(&self, button: ButtonAction) -> bool {
        match button {
            ButtonAction::Jump => self.bindings.is_action_in(InputAction::Jump, &self.went_down),
            ButtonAction::Sprint => self.bindings.is_action_in(InputAction::Sprint, &self.went_down),
        }
    }

    fn held(&self, button: ButtonAction) -> bool {
        match button {
            ButtonAction::Jump => self.bindings.is_action_in(InputAction::Jump, &self.held),
            ButtonAction::Sprint => self.bindings.is_action_in(InputAction::Sprint, &self.held),
        }
    }

    /// Mouse motion this tick wins; otherwise held look keys make it coarse;
    /// otherwise the previous tick's device is kept.
    fn look_device(&self) -> LookDevice {
        if self.mouse_delta != Vec2::ZERO {
            LookDevice::FinePointer
        } else if self.any_look_key_held() {
            LookDevice::Coarse
        } else {
            self.last_look_device
        }
    }
}
