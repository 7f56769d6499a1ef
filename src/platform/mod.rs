//! Platform abstraction layer
//!
//! The window, input polling and immediate-mode drawing are provided by a
//! backend behind `RenderBackend`. `HeadlessBackend` stands in when there is
//! no window: it replays scripted events and counts what was drawn.

use std::collections::VecDeque;

use glam::{Mat4, Vec3};

use crate::renderer::{CUBE_LINE_VERTICES, Projection, wireframe_cube};
use crate::sim::MoveKeys;

/// Direction keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Forward,
    Back,
}

/// Events produced by `RenderBackend::poll_events`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Window + immediate-mode renderer collaborator
pub trait RenderBackend {
    fn create_window(&mut self, width: u32, height: u32, projection: Projection);
    fn poll_events(&mut self) -> Vec<PlatformEvent>;
    fn set_camera(&mut self, eye: Vec3, target: Vec3, up: Vec3);
    fn draw_wireframe_cube(&mut self, transform: Mat4, color: [f32; 4]);
    fn draw_text(&mut self, x: f32, y: f32, text: &str);
    fn present(&mut self);
}

/// Held-key tracking from key down/up events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    keys: MoveKeys,
    pub quit: bool,
}

impl InputState {
    /// Fold a batch of events into the held-key state
    pub fn apply(&mut self, events: &[PlatformEvent]) {
        for event in events {
            match *event {
                PlatformEvent::Quit => self.quit = true,
                PlatformEvent::KeyDown(key) => self.set(key, true),
                PlatformEvent::KeyUp(key) => self.set(key, false),
            }
        }
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.keys.left = held,
            Key::Right => self.keys.right = held,
            Key::Forward => self.keys.forward = held,
            Key::Back => self.keys.back = held,
        }
    }

    pub fn keys(&self) -> MoveKeys {
        self.keys
    }
}

/// Backend with no window
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    /// Event batches returned by successive `poll_events` calls
    pub script: VecDeque<Vec<PlatformEvent>>,
    /// Send `Quit` once this many frames were presented (0 = never)
    pub max_frames: u64,
    pub window: Option<(u32, u32)>,
    pub frames: u64,
    pub camera: Option<(Vec3, Vec3, Vec3)>,
    /// Line vertices produced during the current frame
    pub line_vertices: usize,
    pub text: Vec<String>,
    /// HUD text of the last presented frame
    pub last_text: Vec<String>,
}

impl HeadlessBackend {
    pub fn new(max_frames: u64) -> Self {
        Self {
            max_frames,
            ..Default::default()
        }
    }

    pub fn with_script(script: impl IntoIterator<Item = Vec<PlatformEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_window(&mut self, width: u32, height: u32, projection: Projection) {
        log::info!(
            "Headless window {}x{} (fov {:.1}°, near {}, far {})",
            width,
            height,
            projection.fov_y_radians.to_degrees(),
            projection.near,
            projection.far
        );
        self.window = Some((width, height));
    }

    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        if self.max_frames > 0 && self.frames >= self.max_frames {
            return vec![PlatformEvent::Quit];
        }
        self.script.pop_front().unwrap_or_default()
    }

    fn set_camera(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.camera = Some((eye, target, up));
    }

    fn draw_wireframe_cube(&mut self, transform: Mat4, color: [f32; 4]) {
        self.line_vertices += wireframe_cube(transform, color).len();
    }

    fn draw_text(&mut self, _x: f32, _y: f32, text: &str) {
        self.text.push(text.to_string());
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} cubes, hud {:?}",
            self.frames,
            self.line_vertices / CUBE_LINE_VERTICES,
            self.text
        );
        self.line_vertices = 0;
        self.last_text = std::mem::take(&mut self.text);
    }
}
