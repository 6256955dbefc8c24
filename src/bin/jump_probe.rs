//! Jump Probe
//!
//! Headless check of the locomotion tuning: jumps once from flat ground, runs
//! the fixed tick until the character lands and reports the measured apex
//! and airtime against the configured jump height.
//!
//! Run with: `cargo run --bin jump_probe [config.json] [tick_rate_hz]`

use std::path::PathBuf;

use anyhow::{Context, bail};
use log::{debug, info};

use first_person_engine::input::NeutralInput;
use first_person_engine::{ControllerConfig, FirstPersonCharacter, FlatGroundMover, InputFrame};

const DEFAULT_TICK_RATE: f32 = 120.0;

/// Give up after this many simulated seconds.
const MAX_SECONDS: f32 = 30.0;

struct JumpResult {
    apex: f32,
    airtime: f32,
    ticks: u32,
}

fn probe(config: &ControllerConfig, dt: f32) -> anyhow::Result<JumpResult> {
    let mut character = FirstPersonCharacter::new(config);
    let mut mover = FlatGroundMover::default();

    let jump = InputFrame {
        jump_pressed: true,
        ..Default::default()
    };
    let report = character.tick(&jump, &mut mover, dt);
    if !report.jumped {
        bail!("character did not jump (enable_jump = {})", config.locomotion.enable_jump);
    }

    let mut apex = mover.position().y;
    let mut ticks = 1u32;
    let max_ticks = (MAX_SECONDS / dt) as u32;

    while ticks < max_ticks {
        let report = character.tick(&NeutralInput, &mut mover, dt);
        ticks += 1;
        apex = apex.max(mover.position().y);
        debug!(
            "tick {ticks}: y={:.4} vy={:.4}",
            mover.position().y,
            character.state().vertical_velocity
        );
        if report.landed() {
            return Ok(JumpResult {
                apex,
                airtime: ticks as f32 * dt,
                ticks,
            });
        }
    }

    bail!("no landing within {MAX_SECONDS} s")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("jump_probe", log::LevelFilter::Info)
        .init();

    let mut args = std::env::args_os().skip(1);
    let config = match args.next().map(PathBuf::from) {
        Some(path) => ControllerConfig::load(&path)
            .with_context(|| format!("loading controller config from {}", path.display()))?,
        None => ControllerConfig::default(),
    };
    let tick_rate = match args.next() {
        Some(raw) => raw
            .to_string_lossy()
            .parse::<f32>()
            .context("tick rate must be a number")?,
        None => DEFAULT_TICK_RATE,
    };
    if tick_rate <= 0.0 {
        bail!("tick rate must be positive, got {tick_rate}");
    }

    let loco = &config.locomotion;
    info!(
        "jump_height={:.3} m gravity={:.3} m/s^2 take-off={:.3} m/s tick={tick_rate} Hz",
        loco.jump_height,
        loco.gravity,
        loco.jump_velocity()
    );

    let result = probe(&config, 1.0 / tick_rate)?;
    let expected_airtime = 2.0 * loco.jump_velocity() / -loco.gravity;

    println!("apex:    {:.4} m (configured {:.4} m)", result.apex, loco.jump_height);
    println!("error:   {:+.4} m", result.apex - loco.jump_height);
    println!(
        "airtime: {:.4} s over {} ticks (analytic {:.4} s)",
        result.airtime, result.ticks, expected_airtime
    );
    Ok(())
}
