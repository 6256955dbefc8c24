//! Input Source Capability
//!
//! The controllers never look at keys, sticks or window events. They read a
//! small set of logical actions through [`InputSource`]: two axes, two buttons
//! and the class of the device currently driving the look axis.
//!
//! Every method has a neutral default. An adapter that has no binding for an
//! action simply does not override the method, and the controllers see a zero
//! vector or a released button for it.

use glam::Vec2;

/// Two-dimensional logical actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisAction {
    /// Move intent: x = strafe right, y = forward.
    Move,
    /// Look intent: x = turn right, y = look up.
    Look,
}

/// Button logical actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    Jump,
    Sprint,
}

/// Class of the device currently producing look input.
///
/// Fine pointers (mice, trackpads) report deltas that are already
/// frame-accurate and are used raw. Coarse devices (analog sticks, digital
/// arrow keys) report a rate and are eligible for smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LookDevice {
    #[default]
    FinePointer,
    Coarse,
}

impl LookDevice {
    #[inline]
    pub fn is_fine_pointer(self) -> bool {
        matches!(self, LookDevice::FinePointer)
    }
}

/// Per-tick reader of logical input actions.
pub trait InputSource {
    /// Current value of a 2D action. Values are passed through unvalidated.
    fn read_axis(&self, _axis: AxisAction) -> Vec2 {
        Vec2::ZERO
    }

    /// True only on the tick the button went from released to pressed.
    fn pressed_this_frame(&self, _button: ButtonAction) -> bool {
        false
    }

    /// True for every tick the button is held.
    fn held(&self, _button: ButtonAction) -> bool {
        false
    }

    /// Device class behind the look axis this tick.
    fn look_device(&self) -> LookDevice {
        LookDevice::FinePointer
    }
}

/// An input source with nothing bound. Every action reads neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralInput;

impl InputSource for NeutralInput {}

/// Snapshot of all logical actions for one tick.
///
/// Sampling once per tick keeps the look and move steps reading the same
/// values even if the adapter is fed events mid-tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    pub move_axis: Vec2,
    pub look_axis: Vec2,
    pub look_device: LookDevice,
    pub jump_pressed: bool,
    pub sprint_held: bool,
}

impl InputFrame {
    /// Read every action from `source`.
    pub fn sample<S: InputSource + ?Sized>(source: &S) -> Self {
        Self {
            move_axis: source.read_axis(AxisAction::Move),
            look_axis: source.read_axis(AxisAction::Look),
            look_device: source.look_device(),
            jump_pressed: source.pressed_this_frame(ButtonAction::Jump),
            sprint_held: source.held(ButtonAction::Sprint),
        }
    }
}

impl InputSource for InputFrame {
    fn read_axis(&self, axis: AxisAction) -> Vec2 {
        match axis {
            AxisAction::Move => self.move_axis,
            AxisAction::Look => self.look_axis,
        }
    }

    fn pressed_this_frame(&self, button: ButtonAction) -> bool {
        match button {
            ButtonAction::Jump => self.jump_pressed,
            ButtonAction::Sprint => false,
        }
    }

    fn held(&self, button: ButtonAction) -> bool {
        match button {
            ButtonAction::Jump => false,
            ButtonAction::Sprint => self.sprint_held,
        }
    }

    fn look_device(&self) -> LookDevice {
        self.look_device
    }
}
