//! Player Module
//!
//! Locomotion for a single first-person actor.
//!
//! # Components
//!
//! - [`ActorMotionState`] - yaw, pitch, vertical velocity and look smoothing
//! - [`LocomotionController`] - walk/sprint selection, ground snap, jump, gravity
//! - [`FirstPersonCharacter`] - runs look then move then the mover, once per tick

pub mod character;
pub mod motion_state;
pub mod movement_controller;

pub use character::{FirstPersonCharacter, TickReport};
pub use motion_state::ActorMotionState;
pub use movement_controller::{
    LocomotionConfig, LocomotionController, LocomotionInput, LocomotionStep, MoveBasis,
    step_locomotion,
    GRAVITY, GROUNDED_STICK_FORCE, JUMP_HEIGHT, SPRINT_SPEED, WALK_SPEED,
};
