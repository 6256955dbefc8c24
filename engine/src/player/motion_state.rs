//! Actor Motion State
//!
//! The complete per-actor mutable state touched by the look and move steps.
//! It is a plain value: the step functions take it in and hand a new one back,
//! so nothing about it is tied to a component lifetime.
//!
//! | Field                   | Owner                 | Units           |
//! |-------------------------|-----------------------|-----------------|
//! | `yaw`                   | ViewController        | degrees         |
//! | `pitch`                 | ViewController        | degrees, clamped|
//! | `vertical_velocity`     | LocomotionController  | m/s, + is up    |
//! | `gamepad_look_velocity` | ViewController        | look units      |

use glam::Vec2;

use crate::input::LookDevice;

/// Mutable motion state for a single first-person actor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActorMotionState {
    /// Accumulated body yaw in degrees. Positive turns right.
    pub yaw: f32,
    /// Camera pitch in degrees. Positive looks down.
    pub pitch: f32,
    /// Vertical speed in m/s (positive = up).
    pub vertical_velocity: f32,
    /// Smoothed look input used while the look device is coarse.
    pub gamepad_look_velocity: Vec2,
    /// Look device class seen on the previous look step.
    /// `None` until the first look step runs.
    pub last_look_device: Option<LookDevice>,
}

static_assertions::assert_impl_all!(ActorMotionState: Copy, Send, Sync, Default);

impl ActorMotionState {
    /// Create a state at rest, facing yaw 0 with a level camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with an initial orientation.
    ///
    /// The pitch is stored as given; it is clamped on the next look step.
    pub fn with_orientation(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch,
            ..Default::default()
        }
    }

    /// Yaw wrapped into `[0, 360)` degrees.
    pub fn wrapped_yaw(&self) -> f32 {
        self.yaw.rem_euclid(360.0)
    }

    /// Whether the actor is moving upward.
    #[inline]
    pub fn is_rising(&self) -> bool {
        self.vertical_velocity > 0.0
    }
}
