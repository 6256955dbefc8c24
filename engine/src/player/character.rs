//! First-Person Character
//!
//! Drives one actor through a full tick: sample input, look, move, hand the
//! displacement to the mover. The look step always runs first so the move
//! step builds its direction from the current body facing.

use glam::Vec3;
use log::{debug, trace};

use crate::camera::{LookInput, ViewController, ViewRig};
use crate::config::ControllerConfig;
use crate::input::{InputFrame, InputSource};
use crate::physics::Mover;

use super::movement_controller::{LocomotionController, LocomotionInput, MoveBasis, step_locomotion};
use super::ActorMotionState;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Displacement handed to the mover.
    pub displacement: Vec3,
    /// Yaw applied this tick, degrees.
    pub yaw_delta: f32,
    /// Camera pitch after the tick, degrees.
    pub pitch: f32,
    pub jumped: bool,
    /// Ground contact read before the move.
    pub grounded_before: bool,
    /// Ground contact reported by the mover after the move.
    pub grounded_after: bool,
}

impl TickReport {
    /// Touched down this tick.
    pub fn landed(&self) -> bool {
        !self.grounded_before && self.grounded_after
    }

    /// Left the ground this tick (jump or walking off an edge).
    pub fn left_ground(&self) -> bool {
        self.grounded_before && !self.grounded_after
    }
}

/// A single first-person actor: motion state, view rig and both controllers.
#[derive(Debug, Clone, Default)]
pub struct FirstPersonCharacter {
    state: ActorMotionState,
    rig: ViewRig,
    view: ViewController,
    locomotion: LocomotionController,
}

impl FirstPersonCharacter {
    pub fn new(config: &ControllerConfig) -> Self {
        Self::with_rig(config, ViewRig::new())
    }

    /// Create a character with a specific rig (e.g. one without a camera).
    pub fn with_rig(config: &ControllerConfig, rig: ViewRig) -> Self {
        Self {
            state: ActorMotionState::new(),
            rig,
            view: ViewController::new(config.view),
            locomotion: LocomotionController::new(config.locomotion),
        }
    }

    #[inline]
    pub fn state(&self) -> &ActorMotionState {
        &self.state
    }

    #[inline]
    pub fn rig(&self) -> &ViewRig {
        &self.rig
    }

    /// Mutable rig access for the host, e.g. to attach or detach a camera.
    #[inline]
    pub fn rig_mut(&mut self) -> &mut ViewRig {
        &mut self.rig
    }

    #[inline]
    pub fn view(&self) -> &ViewController {
        &self.view
    }

    #[inline]
    pub fn locomotion(&self) -> &LocomotionController {
        &self.locomotion
    }

    /// Run one simulation tick.
    ///
    /// Input is sampled once, then look, then move, then exactly one call to
    /// `mover.apply_displacement`.
    pub fn tick<I, M>(&mut self, input: &I, mover: &mut M, dt: f32) -> TickReport
    where
        I: InputSource + ?Sized,
        M: Mover + ?Sized,
    {
        let frame = InputFrame::sample(input);

        let look = LookInput {
            value: frame.look_axis,
            device: frame.look_device,
        };
        let (yaw_delta, pitch) = self.view.look(&mut self.state, &mut self.rig, look, dt);

        let grounded_before = mover.is_grounded();
        let step = step_locomotion(
            &self.state,
            self.locomotion.config(),
            LocomotionInput {
                move_axis: frame.move_axis,
                sprint_held: frame.sprint_held,
                jump_pressed: frame.jump_pressed,
            },
            MoveBasis::new(self.rig.forward(), self.rig.right()),
            grounded_before,
            dt,
        );
        self.state = step.state;

        mover.apply_displacement(step.displacement);
        let grounded_after = mover.is_grounded();

        let report = TickReport {
            displacement: step.displacement,
            yaw_delta,
            pitch,
            jumped: step.jumped,
            grounded_before,
            grounded_after,
        };

        if report.jumped {
            debug!(
                "jump: take-off {:.3} m/s",
                self.locomotion.config().jump_velocity()
            );
        } else if report.landed() {
            debug!("landed");
        } else if report.left_ground() {
            debug!("left ground without jumping");
        }
        trace!(
            "tick dt={dt:.4} yaw={:.2} pitch={:.2} vy={:.3} d={:?}",
            self.state.yaw,
            self.state.pitch,
            self.state.vertical_velocity,
            report.displacement
        );

        report
    }
}
