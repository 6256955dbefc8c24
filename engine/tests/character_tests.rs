//! Character Tests - Full Ticks Through the Input Adapters
//!
//! Drives a FirstPersonCharacter with the keyboard/mouse and gamepad adapters
//! over a flat floor, the same way a host loop would.

use glam::{Vec2, Vec3};
use first_person_engine::input::{GamepadButtons, GamepadInput, KeyCode, KeyboardMouseInput};
use first_person_engine::{
    ControllerConfig, FirstPersonCharacter, FlatGroundMover, GamepadLookReset, Mover, ViewRig,
};

const DT: f32 = 1.0 / 60.0;

fn setup() -> (FirstPersonCharacter, FlatGroundMover) {
    (
        FirstPersonCharacter::new(&ControllerConfig::default()),
        FlatGroundMover::default(),
    )
}

// ============================================================================
// Keyboard + Mouse
// ============================================================================

#[test]
fn test_walk_forward_one_second() {
    let (mut character, mut mover) = setup();
    let mut keyboard = KeyboardMouseInput::new();
    keyboard.handle_key(KeyCode::W, true);

    for _ in 0..60 {
        character.tick(&keyboard, &mut mover, DT);
        keyboard.end_frame();
    }

    let pos = mover.position();
    assert!((pos.z - -5.0).abs() < 0.01, "z {}", pos.z);
    assert!(pos.x.abs() < 1e-4);
    assert!(mover.is_grounded());
}

#[test]
fn test_sprint_forward_one_second() {
    let (mut character, mut mover) = setup();
    let mut keyboard = KeyboardMouseInput::new();
    keyboard.handle_key(KeyCode::W, true);
    keyboard.handle_key(KeyCode::ShiftLeft, true);

    for _ in 0..60 {
        character.tick(&keyboard, &mut mover, DT);
        keyboard.end_frame();
    }

    assert!((mover.position().z - -10.0).abs() < 0.01);
}

#[test]
fn test_held_space_jumps_once() {
    let (mut character, mut mover) = setup();
    let mut keyboard = KeyboardMouseInput::new();
    keyboard.handle_key(KeyCode::Space, true);

    let mut jumps = 0;
    for _ in 0..240 {
        // Key repeat must not count as new presses
        keyboard.handle_key(KeyCode::Space, true);
        if character.tick(&keyboard, &mut mover, DT).jumped {
            jumps += 1;
        }
        keyboard.end_frame();
    }

    assert_eq!(jumps, 1);
    assert!(mover.is_grounded());
}

#[test]
fn test_mouse_delta_turns_once() {
    let (mut character, mut mover) = setup();
    let mut keyboard = KeyboardMouseInput::new();

    // 10 counts right at 30 deg per count-second
    keyboard.accumulate_mouse_delta(6.0, 0.0);
    keyboard.accumulate_mouse_delta(4.0, 0.0);
    let report = character.tick(&keyboard, &mut mover, DT);
    keyboard.end_frame();
    assert!((report.yaw_delta - 10.0 * 30.0 * DT).abs() < 1e-4);

    // Delta was consumed
    let report = character.tick(&keyboard, &mut mover, DT);
    assert_eq!(report.yaw_delta, 0.0);
}

#[test]
fn test_mouse_down_looks_down() {
    let (mut character, mut mover) = setup();
    let mut keyboard = KeyboardMouseInput::new();

    keyboard.accumulate_mouse_delta(0.0, 50.0);
    character.tick(&keyboard, &mut mover, DT);
    keyboard.end_frame();

    assert!(character.state().pitch > 0.0);
    assert!(character.rig().look_direction().y < 0.0);
}

#[test]
fn test_turn_then_strafe() {
    let mut config = ControllerConfig::default();
    config.view.mouse_sensitivity = 90.0;
    let mut character = FirstPersonCharacter::new(&config);
    let mut mover = FlatGroundMover::default();
    let mut keyboard = KeyboardMouseInput::new();

    // Quarter turn right in one second
    keyboard.accumulate_mouse_delta(1.0, 0.0);
    character.tick(&keyboard, &mut mover, 1.0);
    keyboard.end_frame();

    // Facing +X, so strafing left moves along -Z
    keyboard.handle_key(KeyCode::A, true);
    let report = character.tick(&keyboard, &mut mover, DT);

    assert!(report.displacement.z < 0.0);
    assert!(report.displacement.x.abs() < 1e-3);
}

// ============================================================================
// Gamepad
// ============================================================================

#[test]
fn test_gamepad_look_is_smoothed() {
    let (mut character, mut mover) = setup();
    let mut pad = GamepadInput::new();
    pad.set_right_stick(Vec2::X);

    let first = character.tick(&pad, &mut mover, 1.0).yaw_delta;
    pad.end_frame();
    let second = character.tick(&pad, &mut mover, 1.0).yaw_delta;

    assert!((first - 6.0).abs() < 1e-3);
    assert!(second > first && second < 30.0);
}

#[test]
fn test_gamepad_dead_zone_stops_drift() {
    let (mut character, mut mover) = setup();
    let mut pad = GamepadInput::new();
    pad.set_left_stick(Vec2::new(0.05, 0.05));
    pad.set_right_stick(Vec2::new(-0.04, 0.02));

    for _ in 0..120 {
        character.tick(&pad, &mut mover, DT);
        pad.end_frame();
    }

    assert_eq!(character.state().yaw, 0.0);
    assert_eq!(mover.position(), Vec3::ZERO);
}

#[test]
fn test_gamepad_jump_edge() {
    let (mut character, mut mover) = setup();
    let mut pad = GamepadInput::new();
    pad.set_buttons(GamepadButtons {
        south: true,
        ..Default::default()
    });

    assert!(character.tick(&pad, &mut mover, DT).jumped);
    pad.end_frame();
    assert!(!character.tick(&pad, &mut mover, DT).jumped);
}

#[test]
fn test_switch_from_pad_to_mouse_resets_smoothing() {
    let mut config = ControllerConfig::default();
    config.view.gamepad_look_reset = GamepadLookReset::OnDeviceSwitch;
    let mut character = FirstPersonCharacter::new(&config);
    let mut mover = FlatGroundMover::default();

    let mut pad = GamepadInput::new();
    pad.set_right_stick(Vec2::X);
    for _ in 0..30 {
        character.tick(&pad, &mut mover, DT);
        pad.end_frame();
    }
    assert!(character.state().gamepad_look_velocity.x > 0.9);

    let mut keyboard = KeyboardMouseInput::new();
    keyboard.accumulate_mouse_delta(1.0, 0.0);
    character.tick(&keyboard, &mut mover, DT);

    assert_eq!(character.state().gamepad_look_velocity, Vec2::ZERO);
}

// ============================================================================
// Rig
// ============================================================================

#[test]
fn test_character_without_camera_keeps_level_pitch() {
    let mut character =
        FirstPersonCharacter::with_rig(&ControllerConfig::default(), ViewRig::without_camera());
    let mut mover = FlatGroundMover::default();
    let mut keyboard = KeyboardMouseInput::new();

    keyboard.accumulate_mouse_delta(20.0, 80.0);
    let report = character.tick(&keyboard, &mut mover, DT);

    assert_eq!(report.pitch, 0.0);
    assert!(report.yaw_delta > 0.0);
}
