//! First-Person Engine Library
//!
//! A first-person character controller: mouse/gamepad look with pitch limits
//! and optional smoothing, walk/sprint locomotion, jumping and gravity. The
//! library does no rendering and no collision; it produces orientations and a
//! displacement per tick and hands the displacement to a [`physics::Mover`].
//!
//! # Modules
//!
//! - [`camera`] - Body yaw, camera pitch and coarse-look smoothing
//! - [`player`] - Motion state, locomotion and the per-tick character driver
//! - [`input`] - Logical input actions and keyboard/mouse/gamepad adapters
//! - [`physics`] - The mover seam and a flat-ground mover
//! - [`config`] - JSON configuration with defaults and validation
//!
//! # Example
//!
//! ```ignore
//! use first_person_engine::{ControllerConfig, FirstPersonCharacter, FlatGroundMover};
//! use first_person_engine::input::{KeyboardMouseInput, KeyCode};
//!
//! let config = ControllerConfig::default();
//! let mut character = FirstPersonCharacter::new(&config);
//! let mut mover = FlatGroundMover::default();
//! let mut keyboard = KeyboardMouseInput::new();
//!
//! // From the event loop
//! keyboard.handle_key(KeyCode::W, true);
//! keyboard.accumulate_mouse_delta(3.0, 0.0);
//!
//! // Once per frame
//! let report = character.tick(&keyboard, &mut mover, 1.0 / 60.0);
//! keyboard.end_frame();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;

// Re-export the types a host needs to drive one character
pub use camera::{GamepadLookReset, ViewConfig, ViewController, ViewRig};
pub use config::{ConfigError, ControllerConfig};
pub use input::{InputFrame, InputSource, LookDevice};
pub use physics::{FlatGroundMover, Mover};
pub use player::{
    ActorMotionState, FirstPersonCharacter, LocomotionConfig, LocomotionController, TickReport,
};
