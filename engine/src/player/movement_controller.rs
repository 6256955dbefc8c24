//! Player Movement Controller
//!
//! Turns move input into the displacement handed to the mover each tick.
//! Movement direction is relative to the body's facing (forward/right basis).
//!
//! # Physics Model
//!
//! - Walk speed: 5.0 m/s
//! - Sprint speed: 10.0 m/s
//! - Gravity: -9.81 m/s^2
//! - Jump height: 1.2 m (take-off speed derived from `v = sqrt(2gh)`)
//! - Ground stick force: -2.0 m/s while grounded
//!
//! Horizontal speed is immediate: there is no acceleration ramp. The only
//! persistent quantity is the vertical velocity.
//!
//! # Tick Order
//!
//! 1. Build the move direction and cap its length at 1
//! 2. Pick walk or sprint speed
//! 3. Ground snap (grounded and not rising)
//! 4. Jump impulse (grounded, enabled, pressed this tick)
//! 5. Gravity
//! 6. Displacement = horizontal + vertical, both scaled by dt
//!
//! # Usage
//!
//! ```rust,ignore
//! use first_person_engine::player::{LocomotionController, LocomotionInput, MoveBasis};
//!
//! let locomotion = LocomotionController::default();
//!
//! // Each tick, after the look step:
//! let basis = MoveBasis::new(rig.forward(), rig.right());
//! let displacement = locomotion.step(&mut state, input, basis, mover.is_grounded(), dt);
//! mover.apply_displacement(displacement);
//! ```

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::ActorMotionState;

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 5.0;

/// Sprint speed in meters per second
pub const SPRINT_SPEED: f32 = 10.0;

/// Jump apex height in meters
pub const JUMP_HEIGHT: f32 = 1.2;

/// Gravity acceleration in meters per second squared (negative = down)
pub const GRAVITY: f32 = -9.81;

/// Vertical velocity held while grounded, in meters per second
pub const GROUNDED_STICK_FORCE: f32 = -2.0;

/// Tunables for the locomotion controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Walk speed in m/s.
    pub move_speed: f32,
    /// Sprint speed in m/s.
    pub sprint_speed: f32,
    pub enable_sprint: bool,
    pub enable_jump: bool,
    /// Apex of a jump from flat ground, meters. Expected non-negative.
    pub jump_height: f32,
    /// Vertical acceleration in m/s^2. Expected negative.
    pub gravity: f32,
    /// Vertical velocity forced while grounded, m/s. Expected small and negative.
    pub grounded_stick_force: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            enable_sprint: true,
            enable_jump: true,
            jump_height: JUMP_HEIGHT,
            gravity: GRAVITY,
            grounded_stick_force: GROUNDED_STICK_FORCE,
        }
    }
}

impl LocomotionConfig {
    /// Take-off speed that peaks at `jump_height` under `gravity`.
    ///
    /// A negative height or non-negative gravity yields NaN.
    #[inline]
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    /// Horizontal speed for this tick.
    #[inline]
    pub fn target_speed(&self, sprint_held: bool) -> f32 {
        if self.enable_sprint && sprint_held {
            self.sprint_speed
        } else {
            self.move_speed
        }
    }
}

/// Move-relevant input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionInput {
    /// x = strafe right, y = forward. Not required to be normalized.
    pub move_axis: Vec2,
    pub sprint_held: bool,
    /// Edge: true only on the tick jump went down.
    pub jump_pressed: bool,
}

/// Horizontal basis the move axis is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for MoveBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

impl MoveBasis {
    pub fn new(forward: Vec3, right: Vec3) -> Self {
        Self { forward, right }
    }

    /// World-space direction for a move axis, length capped at 1.
    ///
    /// Longer vectors are normalized so diagonals are not faster; shorter
    /// ones (partial stick deflection) pass through unchanged.
    pub fn direction(&self, move_axis: Vec2) -> Vec3 {
        let dir = self.right * move_axis.x + self.forward * move_axis.y;
        if dir.length_squared() > 1.0 {
            dir.normalize()
        } else {
            dir
        }
    }
}

/// Result of one locomotion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionStep {
    pub state: ActorMotionState,
    /// Displacement for the mover to sweep this tick.
    pub displacement: Vec3,
    /// Whether the jump impulse was applied this tick.
    pub jumped: bool,
    /// Horizontal speed selected this tick.
    pub speed: f32,
}

/// Advance vertical velocity by one tick and compose the displacement.
pub fn step_locomotion(
    state: &ActorMotionState,
    config: &LocomotionConfig,
    input: LocomotionInput,
    basis: MoveBasis,
    grounded: bool,
    dt: f32,
) -> LocomotionStep {
    let mut next = *state;

    let move_dir = basis.direction(input.move_axis);
    let speed = config.target_speed(input.sprint_held);

    if grounded && next.vertical_velocity <= 0.0 {
        next.vertical_velocity = config.grounded_stick_force;
    }

    let jumped = config.enable_jump && grounded && input.jump_pressed;
    if jumped {
        next.vertical_velocity = config.jump_velocity();
    }

    // Gravity applies on the jump tick too.
    next.vertical_velocity += config.gravity * dt;

    let displacement = move_dir * speed * dt + Vec3::Y * next.vertical_velocity * dt;

    LocomotionStep {
        state: next,
        displacement,
        jumped,
        speed,
    }
}

/// First-person locomotion controller.
///
/// Holds only configuration; vertical velocity lives in [`ActorMotionState`].
#[derive(Debug, Clone, Default)]
pub struct LocomotionController {
    config: LocomotionConfig,
}

impl LocomotionController {
    pub fn new(config: LocomotionConfig) -> Self {
        Self { config }
    }

    /// Create a locomotion controller with custom speeds.
    ///
    /// # Arguments
    /// * `move_speed` - Walking speed in m/s
    /// * `sprint_speed` - Sprinting speed in m/s
    pub fn with_speeds(move_speed: f32, sprint_speed: f32) -> Self {
        Self::new(LocomotionConfig {
            move_speed,
            sprint_speed,
            ..Default::default()
        })
    }

    /// Create a locomotion controller with custom jump height and gravity.
    pub fn with_jump(jump_height: f32, gravity: f32) -> Self {
        Self::new(LocomotionConfig {
            jump_height,
            gravity,
            ..Default::default()
        })
    }

    #[inline]
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Run one locomotion step in place and return the displacement.
    pub fn step(
        &self,
        state: &mut ActorMotionState,
        input: LocomotionInput,
        basis: MoveBasis,
        grounded: bool,
        dt: f32,
    ) -> Vec3 {
        let step = step_locomotion(state, &self.config, input, basis, grounded, dt);
        *state = step.state;
        step.displacement
    }
}
