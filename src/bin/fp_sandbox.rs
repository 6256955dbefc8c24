//! First-Person Sandbox
//!
//! An empty window with one first-person character standing on a flat floor.
//! There is nothing to draw, so the state is shown in the window title.
//!
//! Run with: `cargo run --bin fp_sandbox [config.json]`
//!
//! Controls:
//! - Click: capture the pointer
//! - Mouse / arrow keys: look
//! - WASD: move, Shift: sprint, Space: jump
//! - ESC: release the pointer (press again to exit)

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use log::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use first_person_engine::input::{KeyCode, KeyboardMouseInput, NeutralInput, PointerCapture};
use first_person_engine::{ControllerConfig, FirstPersonCharacter, FlatGroundMover};

/// Camera height above the mover's feet, only used for the title readout.
const EYE_HEIGHT: f32 = 1.7;

/// How often the title is refreshed, in seconds.
const TITLE_INTERVAL: f32 = 0.1;

struct SandboxApp {
    config: ControllerConfig,
    capture: Option<PointerCapture<Arc<Window>>>,
    character: FirstPersonCharacter,
    mover: FlatGroundMover,
    keyboard: KeyboardMouseInput,
    last_frame: Instant,
    since_title: f32,
}

impl SandboxApp {
    fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            capture: None,
            character: FirstPersonCharacter::new(&config),
            mover: FlatGroundMover::default(),
            keyboard: KeyboardMouseInput::new(),
            last_frame: Instant::now(),
            since_title: 0.0,
        }
    }

    fn look_enabled(&self) -> bool {
        self.capture.as_ref().is_some_and(|c| c.should_capture())
    }

    fn handle_escape(&mut self, event_loop: &ActiveEventLoop) {
        match self.capture.as_mut() {
            Some(capture) if capture.is_active() => {
                capture.deactivate();
                // Keys held while captured would otherwise stay down
                self.keyboard.reset();
            }
            _ => event_loop.exit(),
        }
    }

    fn update(&mut self, delta_time: f32) {
        // Look and move only count while the pointer belongs to us
        if self.look_enabled() {
            self.character.tick(&self.keyboard, &mut self.mover, delta_time);
        } else {
            self.character.tick(&NeutralInput, &mut self.mover, delta_time);
        }
        self.keyboard.end_frame();

        self.since_title += delta_time;
        if self.since_title >= TITLE_INTERVAL {
            self.since_title = 0.0;
            self.refresh_title();
        }
    }

    fn refresh_title(&self) {
        let Some(capture) = &self.capture else {
            return;
        };
        let eye = self.mover.position() + glam::Vec3::Y * EYE_HEIGHT;
        let state = self.character.state();
        capture.backend().set_title(&format!(
            "FP Sandbox | pos ({:.2}, {:.2}, {:.2}) | yaw {:.1} pitch {:.1} | vy {:.2} | {}",
            eye.x,
            eye.y,
            eye.z,
            state.wrapped_yaw(),
            state.pitch,
            state.vertical_velocity,
            capture.status_message()
        ));
    }
}

impl ApplicationHandler for SandboxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.capture.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title("FP Sandbox [click to capture]")
            .with_inner_size(PhysicalSize::new(1280, 720));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    "window ready, sensitivity {:.1} deg/s",
                    self.config.view.mouse_sensitivity
                );
                self.capture = Some(PointerCapture::new(Arc::new(window)));
                self.last_frame = Instant::now();
            }
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let key = KeyCode::from(key);
                    let pressed = event.state == ElementState::Pressed;
                    if key == KeyCode::Escape && pressed {
                        self.handle_escape(event_loop);
                        return;
                    }
                    self.keyboard.handle_key(key, pressed);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(capture) = self.capture.as_mut() {
                    capture.activate();
                }
            }
            WindowEvent::Focused(focused) => {
                if let Some(capture) = self.capture.as_mut() {
                    if focused {
                        capture.handle_focus_gained();
                    } else {
                        capture.handle_focus_lost();
                        self.keyboard.reset();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta_time = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;
                self.update(delta_time);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(capture) = &self.capture {
            capture.backend().request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if !self.look_enabled() {
            return;
        }
        if let DeviceEvent::MouseMotion { delta } = event {
            self.keyboard
                .accumulate_mouse_delta(delta.0 as f32, delta.1 as f32);
        }
    }
}

fn load_config() -> anyhow::Result<ControllerConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ControllerConfig::load(&path)
            .with_context(|| format!("loading controller config from {}", path.display())),
        None => {
            info!("no config path given, using defaults");
            Ok(ControllerConfig::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("first_person_engine", log::LevelFilter::Debug)
        .filter_module("fp_sandbox", log::LevelFilter::Info)
        .init();

    println!("===========================================");
    println!("   First-Person Sandbox");
    println!("===========================================");
    println!();
    println!("*** Click in the window to capture the pointer ***");
    println!();
    println!("Controls: Mouse/Arrows Look, WASD Move, Shift Sprint, Space Jump");
    println!("ESC: Release pointer, ESC again: Exit");
    println!();

    let config = load_config()?;

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = SandboxApp::new(config);
    event_loop.run_app(&mut app).context("running event loop")?;
    Ok(())
}
