//! Gamepad Input Module
//!
//! Host-fed gamepad state. The windowing layer does not deliver gamepad
//! events, so whatever polls the pad writes sticks and buttons here once per
//! tick. The adapter derives button edges by comparing against the previous
//! tick's state.
//!
//! A gamepad is always a coarse look device.

use glam::Vec2;

use super::source::{AxisAction, ButtonAction, InputSource, LookDevice};

/// Default radial dead zone applied to both sticks.
pub const DEFAULT_STICK_DEAD_ZONE: f32 = 0.1;

/// Gamepad buttons the adapter cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GamepadButtons {
    /// Bottom face button - jump
    pub south: bool,
    /// Left stick click - sprint
    pub left_stick: bool,
}

/// Gamepad adapter implementing [`InputSource`].
#[derive(Debug, Clone)]
pub struct GamepadInput {
    /// Left stick, x right / y up.
    left_stick: Vec2,
    /// Right stick, x right / y up.
    right_stick: Vec2,
    buttons: GamepadButtons,
    previous_buttons: GamepadButtons,
    dead_zone: f32,
}

impl Default for GamepadInput {
    fn default() -> Self {
        Self::new()
    }
}

impl GamepadInput {
    pub fn new() -> Self {
        Self::with_dead_zone(DEFAULT_STICK_DEAD_ZONE)
    }

    /// Create an adapter with a custom radial dead zone (0 disables it).
    pub fn with_dead_zone(dead_zone: f32) -> Self {
        Self {
            left_stick: Vec2::ZERO,
            right_stick: Vec2::ZERO,
            buttons: GamepadButtons::default(),
            previous_buttons: GamepadButtons::default(),
            dead_zone,
        }
    }

    #[inline]
    pub fn set_left_stick(&mut self, value: Vec2) {
        self.left_stick = value;
    }

    #[inline]
    pub fn set_right_stick(&mut self, value: Vec2) {
        self.right_stick = value;
    }

    #[inline]
    pub fn set_buttons(&mut self, buttons: GamepadButtons) {
        self.buttons = buttons;
    }

    /// Latch this tick's buttons as the baseline for the next edge check.
    pub fn end_frame(&mut self) {
        self.previous_buttons = self.buttons;
    }

    /// Zero everything, e.g. when the pad disconnects.
    pub fn reset(&mut self) {
        *self = Self::with_dead_zone(self.dead_zone);
    }

    /// Stick value with the radial dead zone removed.
    ///
    /// Inside the dead zone reads zero. Outside it the value passes through
    /// unscaled, so a full deflection still reads full.
    fn filtered(&self, stick: Vec2) -> Vec2 {
        if stick.length_squared() <= self.dead_zone * self.dead_zone {
            Vec2::ZERO
        } else {
            stick
        }
    }
}

impl InputSource for GamepadInput {
    fn read_axis(&self, axis: AxisAction) -> Vec2 {
        match axis {
            AxisAction::Move => self.filtered(self.left_stick),
            AxisAction::Look => self.filtered(self.right_stick),
        }
    }

    fn pressed_this_frame(&self, button: ButtonAction) -> bool {
        match button {
            ButtonAction::Jump => self.buttons.south && !self.previous_buttons.south,
            ButtonAction::Sprint => self.buttons.left_stick && !self.previous_buttons.left_stick,
        }
    }

    fn held(&self, button: ButtonAction) -> bool {
        match button {
            ButtonAction::Jump => self.buttons.south,
            ButtonAction::Sprint => self.buttons.left_stick,
        }
    }

    fn look_device(&self) -> LookDevice {
        LookDevice::Coarse
    }
}
