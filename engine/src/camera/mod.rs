//! Camera Module
//!
//! First-person view control: body yaw, camera pitch and coarse-look
//! smoothing. Projection and rendering belong to the host; this module only
//! produces orientations.

pub mod fps_controller;

pub use fps_controller::{
    GamepadLookReset, LookInput, LookStep, ViewConfig, ViewController, ViewRig, pitch_rotation,
    step_look, yaw_rotation,
    DEFAULT_GAMEPAD_LOOK_LERP, DEFAULT_MAX_PITCH, DEFAULT_MIN_PITCH, DEFAULT_SENSITIVITY,
};
