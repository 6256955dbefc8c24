//! Locomotion Tests - Speeds, Ground Snap, Jump and Gravity
//!
//! Tests for the locomotion step and the flat-ground mover together.

use glam::{Vec2, Vec3};
use first_person_engine::physics::{FlatGroundMover, Mover};
use first_person_engine::player::{
    ActorMotionState, LocomotionConfig, LocomotionController, LocomotionInput, MoveBasis,
    step_locomotion,
};

const DT: f32 = 1.0 / 60.0;

fn walk(x: f32, y: f32) -> LocomotionInput {
    LocomotionInput {
        move_axis: Vec2::new(x, y),
        ..Default::default()
    }
}

fn horizontal_speed(displacement: Vec3, dt: f32) -> f32 {
    Vec3::new(displacement.x, 0.0, displacement.z).length() / dt
}

/// Jump once and integrate until vertical velocity turns non-positive.
fn measure_apex(config: LocomotionConfig, dt: f32) -> f32 {
    let controller = LocomotionController::new(config);
    let mut state = ActorMotionState::new();
    let mut mover = FlatGroundMover::default();

    let jump = LocomotionInput {
        jump_pressed: true,
        ..Default::default()
    };
    let d = controller.step(&mut state, jump, MoveBasis::default(), mover.is_grounded(), dt);
    mover.apply_displacement(d);

    while state.vertical_velocity > 0.0 {
        let d = controller.step(
            &mut state,
            LocomotionInput::default(),
            MoveBasis::default(),
            mover.is_grounded(),
            dt,
        );
        mover.apply_displacement(d);
    }
    mover.position().y
}

// ============================================================================
// Horizontal
// ============================================================================

#[test]
fn test_walk_speed() {
    let config = LocomotionConfig::default();
    let step = step_locomotion(
        &ActorMotionState::new(),
        &config,
        walk(0.0, 1.0),
        MoveBasis::default(),
        true,
        DT,
    );

    assert!((horizontal_speed(step.displacement, DT) - 5.0).abs() < 1e-3);
    assert!(step.displacement.z < 0.0);
}

#[test]
fn test_diagonal_is_not_faster() {
    let config = LocomotionConfig::default();
    let straight = step_locomotion(
        &ActorMotionState::new(),
        &config,
        walk(0.0, 1.0),
        MoveBasis::default(),
        true,
        DT,
    );
    let diagonal = step_locomotion(
        &ActorMotionState::new(),
        &config,
        walk(1.0, 1.0),
        MoveBasis::default(),
        true,
        DT,
    );

    let a = horizontal_speed(straight.displacement, DT);
    let b = horizontal_speed(diagonal.displacement, DT);
    assert!((a - b).abs() < 1e-3);
}

#[test]
fn test_partial_deflection_is_slower() {
    let config = LocomotionConfig::default();
    let step = step_locomotion(
        &ActorMotionState::new(),
        &config,
        walk(0.0, 0.5),
        MoveBasis::default(),
        true,
        DT,
    );

    assert!((horizontal_speed(step.displacement, DT) - 2.5).abs() < 1e-3);
}

#[test]
fn test_sprint_selection() {
    let config = LocomotionConfig::default();
    let input = LocomotionInput {
        move_axis: Vec2::Y,
        sprint_held: true,
        jump_pressed: false,
    };
    let step = step_locomotion(&ActorMotionState::new(), &config, input, MoveBasis::default(), true, DT);
    assert_eq!(step.speed, 10.0);

    let disabled = LocomotionConfig {
        enable_sprint: false,
        ..Default::default()
    };
    let step = step_locomotion(&ActorMotionState::new(), &disabled, input, MoveBasis::default(), true, DT);
    assert_eq!(step.speed, 5.0);
}

#[test]
fn test_sprint_applies_in_air() {
    let config = LocomotionConfig::default();
    let input = LocomotionInput {
        move_axis: Vec2::Y,
        sprint_held: true,
        jump_pressed: false,
    };
    let step = step_locomotion(&ActorMotionState::new(), &config, input, MoveBasis::default(), false, DT);
    assert_eq!(step.speed, 10.0);
}

// ============================================================================
// Vertical
// ============================================================================

#[test]
fn test_ground_snap_steady_state() {
    let controller = LocomotionController::default();
    let mut state = ActorMotionState::new();
    let mut mover = FlatGroundMover::default();

    for _ in 0..120 {
        let d = controller.step(&mut state, LocomotionInput::default(), MoveBasis::default(), mover.is_grounded(), DT);
        mover.apply_displacement(d);
    }

    let expected = -2.0 + -9.81 * DT;
    assert!((state.vertical_velocity - expected).abs() < 1e-5);
    assert!(mover.is_grounded());
    assert_eq!(mover.position().y, 0.0);
}

#[test]
fn test_jump_apex_matches_height() {
    let apex = measure_apex(LocomotionConfig::default(), 1.0 / 120.0);
    assert!((apex - 1.2).abs() < 0.05, "apex {apex}");
}

#[test]
fn test_custom_jump_apex() {
    let config = LocomotionConfig {
        jump_height: 3.0,
        gravity: -20.0,
        ..Default::default()
    };
    let apex = measure_apex(config, 1.0 / 240.0);
    assert!((apex - 3.0).abs() < 0.05, "apex {apex}");
}

#[test]
fn test_no_jump_while_airborne() {
    let config = LocomotionConfig::default();
    let mut state = ActorMotionState::new();
    state.vertical_velocity = -3.0;
    let input = LocomotionInput {
        jump_pressed: true,
        ..Default::default()
    };

    let step = step_locomotion(&state, &config, input, MoveBasis::default(), false, DT);
    assert!(!step.jumped);
    assert!((step.state.vertical_velocity - (-3.0 - 9.81 * DT)).abs() < 1e-5);
}

#[test]
fn test_jump_disabled() {
    let config = LocomotionConfig {
        enable_jump: false,
        ..Default::default()
    };
    let input = LocomotionInput {
        jump_pressed: true,
        ..Default::default()
    };
    let step = step_locomotion(&ActorMotionState::new(), &config, input, MoveBasis::default(), true, DT);
    assert!(!step.jumped);
    assert!(step.state.vertical_velocity < 0.0);
}

#[test]
fn test_falls_back_to_ground() {
    let controller = LocomotionController::default();
    let mut state = ActorMotionState::new();
    let mut mover = FlatGroundMover::new(Vec3::new(0.0, 5.0, 0.0), 0.0);

    let mut ticks = 0;
    while !mover.is_grounded() && ticks < 600 {
        let d = controller.step(&mut state, LocomotionInput::default(), MoveBasis::default(), mover.is_grounded(), DT);
        mover.apply_displacement(d);
        ticks += 1;
    }

    assert!(mover.is_grounded());
    assert_eq!(mover.position().y, 0.0);
    // About one second for five meters
    assert!(ticks > 50 && ticks < 70, "ticks {ticks}");
}
