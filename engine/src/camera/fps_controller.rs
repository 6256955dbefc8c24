//! FPS View Controller Module
//!
//! Turns look input into body yaw and camera pitch for a first-person actor.
//!
//! Key features:
//! - Yaw is applied to the body orientation around world up, incrementally
//! - Pitch is applied to the camera's local orientation only, clamped
//! - Fine pointers (mouse) are used raw
//! - Coarse devices (sticks, arrow keys) are exponentially smoothed
//! - An actor without a camera still turns; the pitch step is skipped
//!
//! # Conventions
//!
//! Angles are in degrees. Positive yaw turns right, positive pitch looks down.
//! Look input is "up is positive", so pushing the look axis up lowers pitch.
//!
//! # Usage
//! ```rust,ignore
//! let view = ViewController::new(ViewConfig::default());
//! let mut state = ActorMotionState::new();
//! let mut rig = ViewRig::new();
//!
//! // Once per tick, before the move step
//! let (yaw_delta, pitch) = view.look(&mut state, &mut rig, LookInput::fine(mouse_delta), dt);
//! let forward = rig.forward();
//! ```

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::input::LookDevice;
use crate::player::ActorMotionState;

/// Default look sensitivity in degrees per input unit per second.
pub const DEFAULT_SENSITIVITY: f32 = 30.0;
/// Default lowest pitch (looking up), degrees.
pub const DEFAULT_MIN_PITCH: f32 = -85.0;
/// Default highest pitch (looking down), degrees.
pub const DEFAULT_MAX_PITCH: f32 = 85.0;
/// Default per-tick lerp factor for coarse look smoothing.
pub const DEFAULT_GAMEPAD_LOOK_LERP: f32 = 0.2;

/// What happens to the coarse-look smoothing state when the look device
/// class changes between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamepadLookReset {
    /// Keep the smoothed vector; it keeps lerping from wherever it was.
    #[default]
    Never,
    /// Zero the smoothed vector on the first tick after a device class change.
    OnDeviceSwitch,
}

/// Tunables for the view controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Degrees per input unit per second, both axes and all devices.
    pub mouse_sensitivity: f32,
    /// Pitch lower bound in degrees (looking up).
    pub min_pitch: f32,
    /// Pitch upper bound in degrees (looking down).
    pub max_pitch: f32,
    /// Smooth look input from coarse devices.
    pub smooth_gamepad_look: bool,
    /// Per-tick lerp factor toward the raw coarse input, in `[0, 1]`.
    pub gamepad_look_lerp: f32,
    /// Smoothing reset policy on device class change.
    pub gamepad_look_reset: GamepadLookReset,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            min_pitch: DEFAULT_MIN_PITCH,
            max_pitch: DEFAULT_MAX_PITCH,
            smooth_gamepad_look: true,
            gamepad_look_lerp: DEFAULT_GAMEPAD_LOOK_LERP,
            gamepad_look_reset: GamepadLookReset::Never,
        }
    }
}

impl ViewConfig {
    /// Clamp a pitch value into the configured range.
    ///
    /// Inverted limits resolve to `max_pitch` instead of panicking.
    #[inline]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.max(self.min_pitch).min(self.max_pitch)
    }
}

/// Look input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LookInput {
    /// x = turn right, y = look up.
    pub value: Vec2,
    pub device: LookDevice,
}

impl LookInput {
    /// Look input from a fine pointer (mouse).
    pub fn fine(value: Vec2) -> Self {
        Self {
            value,
            device: LookDevice::FinePointer,
        }
    }

    /// Look input from a coarse device (stick, arrow keys).
    pub fn coarse(value: Vec2) -> Self {
        Self {
            value,
            device: LookDevice::Coarse,
        }
    }

    #[inline]
    pub fn is_fine_pointer(&self) -> bool {
        self.device.is_fine_pointer()
    }
}

/// Orientation of the actor body and its camera.
///
/// # Coordinate System
/// - +X = right
/// - +Y = up
/// - -Z = forward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRig {
    /// World orientation of the body. Only ever rotated around world up.
    pub body_rotation: Quat,
    /// Camera orientation relative to the body, `None` when there is no camera.
    pub camera_rotation: Option<Quat>,
}

impl Default for ViewRig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRig {
    /// A rig with a level camera, facing -Z.
    pub fn new() -> Self {
        Self {
            body_rotation: Quat::IDENTITY,
            camera_rotation: Some(Quat::IDENTITY),
        }
    }

    /// A body with no camera attached.
    pub fn without_camera() -> Self {
        Self {
            body_rotation: Quat::IDENTITY,
            camera_rotation: None,
        }
    }

    /// A rig whose body already faces `yaw` degrees and whose camera sits at
    /// `pitch` degrees.
    pub fn with_orientation(yaw: f32, pitch: f32) -> Self {
        Self {
            body_rotation: yaw_rotation(yaw),
            camera_rotation: Some(pitch_rotation(pitch)),
        }
    }

    #[inline]
    pub fn has_camera(&self) -> bool {
        self.camera_rotation.is_some()
    }

    /// Body forward on the horizontal plane.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.body_rotation * Vec3::NEG_Z
    }

    /// Body right on the horizontal plane.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.body_rotation * Vec3::X
    }

    /// Camera orientation in world space.
    pub fn camera_world_rotation(&self) -> Option<Quat> {
        self.camera_rotation.map(|camera| self.body_rotation * camera)
    }

    /// Direction the camera looks in, or the body forward without a camera.
    pub fn look_direction(&self) -> Vec3 {
        self.camera_world_rotation()
            .unwrap_or(self.body_rotation)
            .mul_vec3(Vec3::NEG_Z)
    }
}

/// Body rotation for an absolute yaw in degrees (positive turns right).
#[inline]
pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(-yaw_degrees.to_radians())
}

/// Camera-local rotation for a pitch in degrees (positive looks down).
/// Roll and yaw are always zero.
#[inline]
pub fn pitch_rotation(pitch_degrees: f32) -> Quat {
    Quat::from_rotation_x(-pitch_degrees.to_radians())
}

/// Result of one look step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookStep {
    pub state: ActorMotionState,
    pub rig: ViewRig,
    /// Yaw applied to the body this tick, degrees.
    pub yaw_delta: f32,
    /// Pitch change requested this tick before clamping, degrees.
    pub pitch_delta: f32,
    /// False when the rig has no camera and pitch was left alone.
    pub pitch_applied: bool,
}

/// Advance the view by one tick.
///
/// 1. Coarse input is lerped into `gamepad_look_velocity` when smoothing is
///    enabled, and that smoothed vector becomes the effective input.
/// 2. Both axes are scaled by `sensitivity * dt`.
/// 3. The body is rotated by the yaw delta around world up.
/// 4. Pitch is reduced by the pitch delta and clamped.
/// 5. The camera local rotation is rebuilt from pitch alone.
pub fn step_look(
    state: &ActorMotionState,
    rig: &ViewRig,
    config: &ViewConfig,
    input: LookInput,
    dt: f32,
) -> LookStep {
    let mut next = *state;
    let mut rig = *rig;

    if config.gamepad_look_reset == GamepadLookReset::OnDeviceSwitch
        && state
            .last_look_device
            .is_some_and(|previous| previous != input.device)
    {
        next.gamepad_look_velocity = Vec2::ZERO;
    }
    next.last_look_device = Some(input.device);

    let effective = if !input.is_fine_pointer() && config.smooth_gamepad_look {
        next.gamepad_look_velocity = next
            .gamepad_look_velocity
            .lerp(input.value, config.gamepad_look_lerp);
        next.gamepad_look_velocity
    } else {
        input.value
    };

    let yaw_delta = effective.x * config.mouse_sensitivity * dt;
    let pitch_delta = effective.y * config.mouse_sensitivity * dt;

    next.yaw += yaw_delta;
    rig.body_rotation = (yaw_rotation(yaw_delta) * rig.body_rotation).normalize();

    let pitch_applied = rig.has_camera();
    if pitch_applied {
        next.pitch = config.clamp_pitch(next.pitch - pitch_delta);
        rig.camera_rotation = Some(pitch_rotation(next.pitch));
    }

    LookStep {
        state: next,
        rig,
        yaw_delta,
        pitch_delta,
        pitch_applied,
    }
}

/// First-person view controller.
///
/// Holds only configuration; the state it advances is passed in.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    config: ViewConfig,
}

impl ViewController {
    pub fn new(config: ViewConfig) -> Self {
        Self { config }
    }

    /// Create a view controller with custom sensitivity and default limits.
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self::new(ViewConfig {
            mouse_sensitivity: sensitivity,
            ..Default::default()
        })
    }

    #[inline]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Pitch limits in degrees (min, max).
    #[inline]
    pub fn pitch_limits(&self) -> (f32, f32) {
        (self.config.min_pitch, self.config.max_pitch)
    }

    /// Run one look step in place.
    ///
    /// Returns `(yaw_delta, pitch)` in degrees.
    pub fn look(
        &self,
        state: &mut ActorMotionState,
        rig: &mut ViewRig,
        input: LookInput,
        dt: f32,
    ) -> (f32, f32) {
        let step = step_look(state, rig, &self.config, input, dt);
        *state = step.state;
        *rig = step.rig;
        (step.yaw_delta, step.state.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_default_values() {
        let config = ViewConfig::default();
        assert_eq!(config.mouse_sensitivity, DEFAULT_SENSITIVITY);
        assert_eq!(config.min_pitch, -85.0);
        assert_eq!(config.max_pitch, 85.0);
        assert!(config.smooth_gamepad_look);
        assert_eq!(config.gamepad_look_reset, GamepadLookReset::Never);
    }

    #[test]
    fn test_fine_pointer_yaw_is_raw() {
        let view = ViewController::with_sensitivity(60.0);
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        let (yaw_delta, _) = view.look(&mut state, &mut rig, LookInput::fine(Vec2::new(1.0, 0.0)), DT);

        // 1.0 * 60 deg/s * 1/60 s = 1 degree
        assert!(approx(yaw_delta, 1.0));
        assert!(approx(state.yaw, 1.0));
        assert_eq!(state.pitch, 0.0);
        assert_eq!(state.gamepad_look_velocity, Vec2::ZERO);
    }

    #[test]
    fn test_look_up_lowers_pitch() {
        let view = ViewController::with_sensitivity(60.0);
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        view.look(&mut state, &mut rig, LookInput::fine(Vec2::new(0.0, 10.0)), DT);
        assert!(approx(state.pitch, -10.0));
        assert!(rig.look_direction().y > 0.0);
    }

    #[test]
    fn test_pitch_clamping_max() {
        let view = ViewController::default();
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        view.look(&mut state, &mut rig, LookInput::fine(Vec2::new(0.0, -100000.0)), DT);
        assert_eq!(state.pitch, 85.0);
    }

    #[test]
    fn test_pitch_clamping_min() {
        let view = ViewController::default();
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        view.look(&mut state, &mut rig, LookInput::fine(Vec2::new(0.0, 100000.0)), DT);
        assert_eq!(state.pitch, -85.0);
    }

    #[test]
    fn test_inverted_limits_do_not_panic() {
        let config = ViewConfig {
            min_pitch: 10.0,
            max_pitch: -10.0,
            ..Default::default()
        };
        assert_eq!(config.clamp_pitch(0.0), -10.0);
    }

    #[test]
    fn test_positive_yaw_turns_right() {
        let view = ViewController::with_sensitivity(90.0);
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        // 90 degrees in one second
        view.look(&mut state, &mut rig, LookInput::fine(Vec2::X), 1.0);
        let forward = rig.forward();
        assert!(approx(forward.x, 1.0));
        assert!(approx(forward.z, 0.0));
        assert!(approx(rig.right().z, 1.0));
    }

    #[test]
    fn test_body_stays_level() {
        let view = ViewController::default();
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        for _ in 0..50 {
            view.look(&mut state, &mut rig, LookInput::fine(Vec2::new(3.0, 2.0)), DT);
        }
        assert!(rig.forward().y.abs() < 0.0001);
        assert!(rig.right().y.abs() < 0.0001);
        assert!(approx(rig.forward().length(), 1.0));
    }

    #[test]
    fn test_coarse_input_is_smoothed() {
        let view = ViewController::default();
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        view.look(&mut state, &mut rig, LookInput::coarse(Vec2::new(1.0, 0.0)), DT);
        assert!(approx(state.gamepad_look_velocity.x, DEFAULT_GAMEPAD_LOOK_LERP));

        let expected_yaw = DEFAULT_GAMEPAD_LOOK_LERP * DEFAULT_SENSITIVITY * DT;
        assert!((state.yaw - expected_yaw).abs() < 0.0001);
    }

    #[test]
    fn test_smoothing_disabled_uses_raw_coarse_input() {
        let view = ViewController::new(ViewConfig {
            smooth_gamepad_look: false,
            ..Default::default()
        });
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        let (yaw_delta, _) = view.look(&mut state, &mut rig, LookInput::coarse(Vec2::X), 1.0);
        assert!(approx(yaw_delta, DEFAULT_SENSITIVITY));
        assert_eq!(state.gamepad_look_velocity, Vec2::ZERO);
    }

    #[test]
    fn test_missing_camera_skips_pitch() {
        let view = ViewController::default();
        let mut state = ActorMotionState::with_orientation(0.0, 12.0);
        let mut rig = ViewRig::without_camera();

        let (yaw_delta, pitch) = view.look(&mut state, &mut rig, LookInput::fine(Vec2::new(1.0, 50.0)), DT);
        assert!(yaw_delta > 0.0);
        assert_eq!(pitch, 12.0);
        assert!(rig.camera_rotation.is_none());
    }

    #[test]
    fn test_external_roll_is_discarded() {
        let view = ViewController::default();
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();
        rig.camera_rotation = Some(Quat::from_rotation_z(0.5) * Quat::from_rotation_y(0.3));

        view.look(&mut state, &mut rig, LookInput::fine(Vec2::ZERO), DT);
        let camera = rig.camera_rotation.unwrap();
        assert!(camera.abs_diff_eq(Quat::IDENTITY, 0.0001));
    }

    #[test]
    fn test_reset_never_keeps_stale_velocity() {
        let view = ViewController::default();
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        view.look(&mut state, &mut rig, LookInput::coarse(Vec2::X), DT);
        let smoothed = state.gamepad_look_velocity;
        view.look(&mut state, &mut rig, LookInput::fine(Vec2::ZERO), DT);
        assert_eq!(state.gamepad_look_velocity, smoothed);
    }

    #[test]
    fn test_reset_on_device_switch_zeroes_velocity() {
        let view = ViewController::new(ViewConfig {
            gamepad_look_reset: GamepadLookReset::OnDeviceSwitch,
            ..Default::default()
        });
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();

        view.look(&mut state, &mut rig, LookInput::coarse(Vec2::X), DT);
        assert!(state.gamepad_look_velocity.x > 0.0);
        view.look(&mut state, &mut rig, LookInput::fine(Vec2::ZERO), DT);
        assert_eq!(state.gamepad_look_velocity, Vec2::ZERO);
        assert_eq!(state.last_look_device, Some(LookDevice::FinePointer));
    }

    #[test]
    fn test_step_look_is_pure() {
        let state = ActorMotionState::new();
        let rig = ViewRig::new();
        let config = ViewConfig::default();

        let a = step_look(&state, &rig, &config, LookInput::coarse(Vec2::ONE), DT);
        let b = step_look(&state, &rig, &config, LookInput::coarse(Vec2::ONE), DT);
        assert_eq!(a, b);
        assert_eq!(state, ActorMotionState::new());
    }

    #[test]
    fn test_with_orientation_matches_incremental() {
        let view = ViewController::with_sensitivity(45.0);
        let mut state = ActorMotionState::new();
        let mut rig = ViewRig::new();
        view.look(&mut state, &mut rig, LookInput::fine(Vec2::X), 1.0);

        let absolute = ViewRig::with_orientation(45.0, 0.0);
        assert!(rig.body_rotation.abs_diff_eq(absolute.body_rotation, 0.0001));
    }
}
