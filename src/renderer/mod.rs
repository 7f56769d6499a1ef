//! Rendering module
//!
//! Turns a `GameState` into a backend-neutral `Scene` (camera, wireframe
//! cubes, HUD lines) and submits it to a `RenderBackend`.

pub mod shapes;
pub mod vertex;

pub use shapes::{CUBE_LINE_VERTICES, wireframe_cube};
pub use vertex::{Vertex, colors};

use glam::{Mat4, Vec3};

use crate::lift_xz;
use crate::platform::RenderBackend;
use crate::settings::Settings;
use crate::sim::{Entity, GameState, wall_cells};

/// Height at which floor entities are drawn
const ENTITY_Y: f32 = 0.0;
const ITEM_SCALE: f32 = 0.3;
const TRAP_SCALE: Vec3 = Vec3::new(0.6, 0.1, 0.6);
const ENEMY_SCALE: f32 = 0.5;

/// Look-at camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
        }
    }

    /// First-person camera at the player, always facing +z
    pub fn follow(player_pos: Vec3) -> Self {
        Self::new(player_pos, player_pos + Vec3::Z)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_radians: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            fov_y_radians: settings.fov_y_degrees.to_radians(),
            aspect: settings.aspect(),
            near: settings.near_plane,
            far: settings.far_plane,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_radians, self.aspect, self.near, self.far)
    }
}

/// One cube to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeDraw {
    pub transform: Mat4,
    pub color: [f32; 4],
}

/// Heads-up display values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub health: u32,
    pub enemies: usize,
    pub game_over: bool,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.player.score,
            health: state.player.health,
            enemies: state.entities.enemies.len(),
            game_over: state.is_over(),
        }
    }

    /// Text lines with their screen positions
    pub fn lines(&self) -> Vec<(f32, f32, String)> {
        let mut lines = vec![
            (10.0, 10.0, format!("Score: {}", self.score)),
            (10.0, 40.0, format!("Health: {}", self.health)),
            (10.0, 70.0, format!("Enemies: {}", self.enemies)),
        ];
        if self.game_over {
            lines.push((10.0, 100.0, "Game Over!".to_string()));
        }
        lines
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub cubes: Vec<CubeDraw>,
    pub hud: Hud,
}

impl Scene {
    /// Line-list geometry for every cube in the scene
    pub fn line_vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(self.cubes.len() * CUBE_LINE_VERTICES);
        for cube in &self.cubes {
            vertices.extend(wireframe_cube(cube.transform, cube.color));
        }
        vertices
    }
}

fn entity_cube(entity: &Entity, scale: Vec3, color: [f32; 4]) -> CubeDraw {
    CubeDraw {
        transform: Mat4::from_scale_rotation_translation(
            scale,
            glam::Quat::IDENTITY,
            lift_xz(entity.pos, ENTITY_Y),
        ),
        color,
    }
}

/// Build the scene for the current state
pub fn build_scene(state: &GameState) -> Scene {
    let mut cubes: Vec<CubeDraw> = wall_cells()
        .map(|cell| CubeDraw {
            transform: Mat4::from_translation(cell.center()),
            color: colors::WALL,
        })
        .collect();

    let entities = &state.entities;
    cubes.extend(
        entities
            .items
            .iter()
            .map(|e| entity_cube(e, Vec3::splat(ITEM_SCALE), colors::ITEM)),
    );
    cubes.extend(
        entities
            .traps
            .iter()
            .map(|e| entity_cube(e, TRAP_SCALE, colors::TRAP)),
    );
    cubes.extend(
        entities
            .enemies
            .iter()
            .map(|e| entity_cube(e, Vec3::splat(ENEMY_SCALE), colors::ENEMY)),
    );

    Scene {
        camera: Camera::follow(state.player.pos),
        cubes,
        hud: Hud::from_state(state),
    }
}

/// Draw a scene through the backend and present it
pub fn submit(scene: &Scene, backend: &mut dyn RenderBackend) {
    backend.set_camera(scene.camera.eye, scene.camera.target, scene.camera.up);
    for cube in &scene.cubes {
        backend.draw_wireframe_cube(cube.transform, cube.color);
    }
    for (x, y, text) in scene.hud.lines() {
        backend.draw_text(x, y, &text);
    }
    backend.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{EntityKind, maze};
    use glam::Vec2;

    #[test]
    fn test_camera_follows_player() {
        let cam = Camera::follow(Vec3::new(2.0, 1.0, -5.0));
        assert_eq!(cam.eye, Vec3::new(2.0, 1.0, -5.0));
        assert_eq!(cam.target, Vec3::new(2.0, 1.0, -4.0));
        assert_eq!(cam.up, Vec3::Y);
    }

    #[test]
    fn test_scene_contents() {
        let mut state = GameState::empty();
        state.entities.insert(EntityKind::Item, Vec2::new(2.0, 2.0));
        state.entities.insert(EntityKind::Enemy, Vec2::new(-2.0, 4.0));

        let scene = build_scene(&state);
        let walls = maze::wall_cells().count();
        assert_eq!(scene.cubes.len(), walls + 2);
        assert_eq!(scene.hud.enemies, 1);
        assert_eq!(scene.line_vertices().len(), (walls + 2) * CUBE_LINE_VERTICES);

        let enemy = scene.cubes.last().unwrap();
        assert_eq!(enemy.color, colors::ENEMY);
        assert_eq!(
            enemy.transform.transform_point3(Vec3::ZERO),
            Vec3::new(-2.0, 0.0, 4.0)
        );
    }

    #[test]
    fn test_hud_lines() {
        let hud = Hud {
            score: 30,
            health: 70,
            enemies: 5,
            game_over: false,
        };
        let text: Vec<String> = hud.lines().into_iter().map(|(_, _, t)| t).collect();
        assert_eq!(text, vec!["Score: 30", "Health: 70", "Enemies: 5"]);

        let over = Hud { game_over: true, ..hud };
        assert_eq!(over.lines().last().unwrap().2, "Game Over!");
    }

    #[test]
    fn test_projection_defaults() {
        let proj = Projection::from_settings(&Settings::default());
        assert!((proj.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!((proj.fov_y_radians - 45f32.to_radians()).abs() < 1e-6);
        assert_eq!((proj.near, proj.far), (0.1, 50.0));
        assert!(proj.matrix().is_finite());
    }
}
